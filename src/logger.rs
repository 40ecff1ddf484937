use anyhow::Result;
use simple_logger::init_with_level;

pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };

    init_with_level(level)?;

    Ok(())
}
