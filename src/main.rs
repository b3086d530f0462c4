use basic::term::{self, Options};
use clap::Parser;
use log::Level;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basic")]
#[command(about = "Line-numbered BASIC with SVG drawing", version)]
struct Cli {
    /// Program to run
    script: PathBuf,

    /// Directory for SVG drawings
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Log tokens and statements (-vv also logs jumps)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Parse only, report errors and exit
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::Warn,
        1 => Level::Debug,
        _ => Level::Trace,
    };
    if let Err(error) = simple_logger::init_with_level(level) {
        eprintln!("{}", error);
    }
    std::process::exit(term::main(Options {
        script: cli.script,
        out_dir: cli.out_dir,
        check: cli.check,
    }));
}
