use anyhow::Result;

use banktab::config::Config;
use banktab::logging;
use banktab::services::store::ReportStore;

fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = Config::from_env()?;

    let store = ReportStore::load(&config)?;

    let view = store.indicator(&config.indicator, config.group)?;
    println!("{view}");

    Ok(())
}
