use svgpix::Result;

use svgpix::cli::{get_config, init_logging, run};

fn main() -> Result<()> {
    let config = get_config()?;
    init_logging(&config);
    run(config)?;

    Ok(())
}
