use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use cpgscan::prelude::*;
use cpgscan::utils::default_workers;
use log::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::strings::scan as strings;
use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct ScanArgs {
    #[arg(value_parser, help = strings::SEQUENCE)]
    sequence: Option<String>,

    #[arg(short = 't', long, default_value_t = default_workers(), help = strings::THREADS)]
    threads:       usize,
    #[arg(short = 'c', long = "chunk", default_value_t = 4, help = strings::CHUNK)]
    chunk_size:    usize,
    #[arg(long, visible_alias = "th", default_value_t = 0.6, help = strings::THRESHOLD)]
    threshold:     f64,
    #[arg(short = 'm', long, default_value_t = 8, help = strings::MIN_LENGTH)]
    min_length:    usize,
    #[arg(
        short = 'n',
        long,
        default_value_t = 1024,
        help_heading = "RANDOM SEQUENCE ARGS",
        help = strings::RANDOM_LENGTH
    )]
    random_length: usize,
    #[arg(long, help_heading = "RANDOM SEQUENCE ARGS", help = strings::SEED)]
    seed:          Option<u64>,
    #[arg(long, value_enum, default_value_t = PoolStrategy::Slots, help = strings::STRATEGY)]
    strategy:      PoolStrategy,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value_t = ReportFormat::Tuples,
        help_heading = "OUTPUT ARGS",
        help = strings::FORMAT
    )]
    format: ReportFormat,
    #[arg(short = 'o', long, help_heading = "OUTPUT ARGS", help = strings::OUTPUT)]
    output: Option<PathBuf>,
}

impl ScanArgs {
    pub fn config(&self) -> ScanConfig {
        ScanConfig::new(
            self.threshold,
            self.chunk_size,
            self.min_length,
            self.threads,
        )
        .with_strategy(self.strategy)
    }

    fn load_sequence(&self) -> anyhow::Result<Sequence> {
        if let Some(literal) = self.sequence.as_ref() {
            return Ok(Sequence::try_new(literal)?);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let start = Instant::now();
        let sequence = generate_random_sequence(&mut rng, self.random_length)?;
        info!(
            "Took {:.2} second(s) to generate {} character sequence",
            start.elapsed().as_secs_f64(),
            sequence.len()
        );
        Ok(sequence)
    }

    fn sink(&self) -> anyhow::Result<Box<dyn Write>> {
        Ok(match self.output.as_ref() {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        // Fail on bad parameters before generating or reading anything.
        let scanner = IslandScanner::new(self.config())?;
        debug!("Scan configuration: {:?}", scanner.config());
        let sequence = self.load_sequence()?;

        let spinner = utils.spinner("Scanning...")?;
        let start = Instant::now();

        if self.format == ReportFormat::Chunks {
            let chunks = scanner.score_chunks(&sequence)?;
            spinner.finish_and_clear();
            info!(
                "Took {:.2} second(s) to score {} chunks in {} character sequence",
                start.elapsed().as_secs_f64(),
                chunks.len(),
                sequence.len()
            );
            let mut sink = self.sink()?;
            write_chunks(&mut sink, &chunks)?;
            sink.flush()?;
        }
        else {
            let outcome = scanner.scan(&sequence)?;
            spinner.finish_and_clear();
            info!(
                "Took {:.2} second(s) to find {} CpG islands in {} character sequence",
                start.elapsed().as_secs_f64(),
                outcome.islands.len(),
                sequence.len()
            );
            let mut sink = self.sink()?;
            write_report(&mut sink, &outcome.islands, self.format)?;
            sink.flush()?;
            if let Some(path) = self.output.as_ref() {
                eprintln!(
                    "[{}] {} islands written to {}",
                    style("V").green(),
                    style(outcome.islands.len()).green(),
                    path.display()
                );
            }
        }
        Ok(())
    }
}
