use anyhow::Result;
use clap::{CommandFactory, Parser};
use flacarray_config::commands::{QueryFlags, report};
use flacarray_config::platform::DefaultPlatformDetector;
use flacarray_config::runtime::RealRuntime;

/// flacarray-config - Print configuration of flacarray
///
/// Reports the compiler and linker settings needed to build against the
/// installed libflacarray, one value per invocation.
///
/// Examples:
///   flacarray-config --cflags    # Print the include CFLAGS
#[derive(Parser, Debug)]
#[command(author, about)]
struct Cli {
    #[command(flatten)]
    query: QueryFlags,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;
    let detector = DefaultPlatformDetector;

    match report(&runtime, &detector, &cli.query)? {
        Some(answer) => println!("{}", answer),
        None => Cli::command().print_long_help()?,
    }
    Ok(())
}
