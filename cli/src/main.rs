use std::path::PathBuf;

use clap::Parser;
use log::error;
use stack_generator::run_generation;
use stack_utils::setup_logging;
use stackgen::load_parameters;

#[derive(Parser, Debug)]
#[command(
    name = "stackgen",
    version = env!("APP_VERSION"),
    about = "Scaffolds a stack package from Terraform variable declarations"
)]
struct Cli {
    /// YAML file with the generation parameters, prompts for them when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level regardless of LOG_LEVEL
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(cli.verbose) {
        eprintln!("Failed to set up logging: {}", err);
    }

    let params = match load_parameters(cli.config.as_deref()) {
        Ok(params) => params,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    match run_generation(&params) {
        Ok(stack_dir) => println!("Stack package written to {}", stack_dir.display()),
        Err(e) => {
            error!("Failed to generate stack: {}", e);
            std::process::exit(1);
        }
    }
}
