mod scan;
mod strings;
mod utils;

use clap::Parser;
use scan::ScanArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[clap(flatten)]
    utils: UtilsArgs,
    #[clap(flatten)]
    args:  ScanArgs,
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    cli.utils.setup()?;
    cli.args.run(&cli.utils)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use cpgscan::prelude::{
        PoolStrategy,
        ScanConfig,
    };

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_arguments() {
        let cli = Cli::try_parse_from([
            "cpgscan", "-t", "4", "-c", "6", "--th", "0.7", "-m", "12", "CGCGAAAA",
        ])
        .unwrap();
        let config = cli.args.config();
        assert_eq!(config, ScanConfig::new(0.7, 6, 12, 4));
        assert_eq!(cli.utils.verbose, 0);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["cpgscan", "--strategy", "channel", "-vv"]).unwrap();
        let config = cli.args.config();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.chunk_size, 4);
        assert_eq!(config.min_length, 8);
        assert_eq!(config.strategy, PoolStrategy::Channel);
        assert_eq!(cli.utils.verbose, 2);
    }
}
