use super::utils;
use anyhow::Result;
use sift_infrastructure::ConfigService;

pub fn run() -> Result<()> {
    let service = ConfigService::default_location()?;
    let config = utils::load_config()?;

    println!("# {}", service.path().display());
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
