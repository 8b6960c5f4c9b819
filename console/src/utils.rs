use std::time::Duration;

use clap::{
    ArgAction,
    Args,
};
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;

use crate::strings::utils as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = strings::VERBOSE
    )]
    pub verbose:  u8,
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        conflicts_with = "verbose",
        help = strings::QUIET
    )]
    pub quiet:    bool,
    #[arg(long, default_value_t = false, global = true, help = strings::PROGRESS)]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn setup(&self) -> anyhow::Result<()> {
        pretty_env_logger::formatted_builder()
            .filter_level(self.log_level())
            .parse_default_env()
            .try_init()?;
        Ok(())
    }

    pub fn spinner(
        &self,
        message: &'static str,
    ) -> anyhow::Result<ProgressBar> {
        if self.progress {
            init_spinner(message)
        }
        else {
            Ok(ProgressBar::hidden())
        }
    }
}

pub fn init_spinner(message: &'static str) -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, false, LevelFilter::Info)]
    #[case(1, false, LevelFilter::Debug)]
    #[case(3, false, LevelFilter::Trace)]
    #[case(0, true, LevelFilter::Warn)]
    fn test_log_level(
        #[case] verbose: u8,
        #[case] quiet: bool,
        #[case] expected: LevelFilter,
    ) {
        let utils = UtilsArgs {
            verbose,
            quiet,
            progress: false,
        };
        assert_eq!(utils.log_level(), expected);
    }
}
