use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod draw;
mod emblem;
mod icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "magic-icon",
    version,
    about = "Draw the Magic Image AI emblem and export it as a multi-size favicon"
)]
struct Args {
    /// Directory that receives favicon.ico and magic-icon-preview.png.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.output)?;
    Ok(())
}
