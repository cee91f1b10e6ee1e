use cardtable_engine::logging::{init_logging, LoggingConfig};
use cardtable_game::Application;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting cardtable {}", env!("CARGO_PKG_VERSION"));

    Application::new().title("cardtable").run()
}
