use anyhow::Result;
use clap::Parser;
use iconmeta::{ReporterConfig, run};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the header metadata of the server icon", long_about = None)]
struct Args {
    /// Image to inspect (defaults to web/current/server-icon.png)
    // clap's PathBuf parser rejects empty values
    path: Option<OsString>,

    /// Read settings from this TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved path to stderr before reading
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref file) => ReporterConfig::load_from(file)?,
        None => ReporterConfig::default(),
    };

    // Command line wins over the config file
    if let Some(p) = args.path {
        config.path = Some(PathBuf::from(p));
    }
    if args.verbose {
        config.verbose = true;
    }

    run(config)
}
