pub(crate) mod path;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
