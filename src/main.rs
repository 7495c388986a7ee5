use anyhow::Result;

use essayist::config::Config;
use essayist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `essayist --init-config` writes a default config file and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
