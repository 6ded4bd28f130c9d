use clap::Parser;
use formfont::{FormfontError, ProcessorConfig, TextJob};
use std::fs;
use std::path::PathBuf;

/// Resolve the fonts of a text job and print the resulting text runs as JSON.
#[derive(Parser, Debug)]
#[command(name = "formfont", version, about)]
struct Cli {
    /// Path to the job file (fonts and fragments)
    input: PathBuf,

    /// Write the runs here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Processor configuration (units and baseline offsets)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), FormfontError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProcessorConfig::from_json(&fs::read_to_string(path)?)?,
        None => ProcessorConfig::default(),
    };

    log::info!("Loading job from {}", cli.input.display());
    let job = TextJob::from_json(&fs::read_to_string(&cli.input)?)?;
    let texts = job.run(&config)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&texts)?
    } else {
        serde_json::to_string(&texts)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote {} text runs to {}", texts.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
