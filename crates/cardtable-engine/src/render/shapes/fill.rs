use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, Path};

use super::common::{premul_alpha_blend, ViewportUniform};

/// Renderer for solid fills: `DrawCmd::Rect` and `DrawCmd::Path`.
///
/// Every command is tessellated on the CPU into colored triangles, in draw
/// list order, and the whole frame is drawn with a single non-indexed call.
/// Paint order therefore matches the draw list exactly, across shape kinds.
///
/// Paths are filled as triangle fans from their first point. That is exact for
/// convex outlines (rectangles, rounded rectangles); concave paths are not
/// supported.
#[derive(Default)]
pub struct FillRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    /// Scratch buffer reused across frames.
    vertices: Vec<FillVertex>,
}

impl FillRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all fill commands in `draw_list` into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
    ) {
        self.vertices.clear();
        tessellate(draw_list, &mut self.vertices);
        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        self.write_viewport_uniform(ctx);
        self.ensure_vertex_capacity(ctx, self.vertices.len());

        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vertex_vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cardtable fill pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cardtable fill shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fill.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("cardtable fill bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(ViewportUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("cardtable fill pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cardtable fill pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[FillVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Fans keep the winding of the source path, which may go either way.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cardtable fill viewport ubo"),
            size: ViewportUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cardtable fill bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform::new(ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(1024);
        let new_size = (new_cap * std::mem::size_of::<FillVertex>()) as u64;

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cardtable fill vertex vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

// ── tessellation ───────────────────────────────────────────────────────────

/// Appends triangles for every fill command in `draw_list`, in paint order.
///
/// Empty rectangles, non-finite geometry and subpaths with fewer than three
/// points produce no triangles.
pub fn tessellate(draw_list: &DrawList, out: &mut Vec<FillVertex>) {
    for cmd in draw_list.items() {
        match cmd {
            DrawCmd::Rect(rect) => push_rect(out, rect.rect, rect.color),
            DrawCmd::Path(path) => push_path(out, &path.path, path.color),
        }
    }
}

fn push_rect(out: &mut Vec<FillVertex>, rect: Rect, color: Color) {
    let r = rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return;
    }

    let (min, max) = (r.min(), r.max());
    let color = color.to_array();
    let corners = [
        [min.x, min.y],
        [max.x, min.y],
        [max.x, max.y],
        [min.x, max.y],
    ];
    for i in [0, 1, 2, 0, 2, 3] {
        out.push(FillVertex { pos: corners[i], color });
    }
}

fn push_path(out: &mut Vec<FillVertex>, path: &Path, color: Color) {
    let color = color.to_array();
    for sub in path.subpaths() {
        let pts = &sub.points;
        if pts.len() < 3 || !pts.iter().all(|p| p.is_finite()) {
            continue;
        }
        let anchor = [pts[0].x, pts[0].y];
        for pair in pts[1..].windows(2) {
            out.push(FillVertex { pos: anchor, color });
            out.push(FillVertex { pos: [pair[0].x, pair[0].y], color });
            out.push(FillVertex { pos: [pair[1].x, pair[1].y], color });
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// One tessellated vertex: logical-pixel position + premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FillVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl FillVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FillVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
