use anyhow::Result;
use clap::Parser;
use dmg_background::{BackgroundConfig, BackgroundGenerator, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Generate the background image of the DMG installer", long_about = None)]
struct Args {
    /// Path of the PNG to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let config = BackgroundConfig::new().with_output(args.output);
    let output = BackgroundGenerator::new(config).generate()?;

    println!("DMG background image created: {}", output.display());

    Ok(())
}
