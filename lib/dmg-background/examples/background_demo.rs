use dmg_background::{BackgroundConfig, BackgroundGenerator};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = BackgroundConfig::new().with_output(PathBuf::from("tmp/dmg_background.png"));
    let output = BackgroundGenerator::new(config).generate()?;

    println!("Created {}", output.display());

    Ok(())
}
