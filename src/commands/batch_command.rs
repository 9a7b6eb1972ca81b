//! Batch conversion command
//!
//! Converts every coordinate line of a text file. Blank lines and lines
//! starting with `#` are skipped; each other line produces one
//! `input<TAB>result` or `input<TAB>ERROR: message` output line.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use clap::ArgMatches;
use log::{info, warn};

use crate::api::{GeoKit, OutputTarget};
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Counts reported at the end of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Command for converting a file of coordinates
pub struct BatchCommand<'a> {
    /// File with one coordinate per line
    input_file: String,
    /// Destination file, stdout when absent
    output_file: Option<String>,
    target: OutputTarget,
    geokit: GeoKit,
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command from CLI arguments
    pub fn new(args: &ArgMatches, config: GeoKitConfig, logger: &'a Logger) -> GeoResult<Self> {
        let input_file = args.get_one::<String>("batch")
            .ok_or_else(|| GeoError::Config("Missing batch input file".to_string()))?
            .clone();
        let output_file = args.get_one::<String>("output").cloned();
        let target = match args.get_one::<String>("to") {
            Some(name) => OutputTarget::from_str(name)?,
            None => OutputTarget::All,
        };

        Ok(Self::with_paths(input_file, output_file, target, config, logger))
    }

    /// Create a batch command for explicit paths
    pub fn with_paths(
        input_file: String,
        output_file: Option<String>,
        target: OutputTarget,
        config: GeoKitConfig,
        logger: &'a Logger,
    ) -> Self {
        BatchCommand {
            input_file,
            output_file,
            target,
            geokit: GeoKit::new(config),
            logger,
        }
    }

    /// Convert `lines` into `out`, advancing `progress` once per coordinate line
    pub fn convert_lines<W: Write>(
        &self,
        lines: &[&str],
        out: &mut W,
        progress: &ProgressTracker,
    ) -> GeoResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for line in lines {
            match self.geokit.convert_line(line, self.target) {
                Ok(result) => {
                    writeln!(out, "{}\t{}", line, result)?;
                    summary.converted += 1;
                }
                Err(e) => {
                    warn!("Could not convert '{}': {}", line, e);
                    writeln!(out, "{}\tERROR: {}", line, e)?;
                    summary.failed += 1;
                }
            }
            progress.increment(1);
        }

        out.flush()?;
        Ok(summary)
    }
}

/// Non-blank lines that are not `#` comments, trimmed
fn coordinate_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Batch converting '{}' to {}", self.input_file, self.target);

        let content = fs::read_to_string(&self.input_file)?;
        let lines = coordinate_lines(&content);
        let progress = ProgressTracker::new(lines.len() as u64, "converting");

        let summary = match &self.output_file {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.convert_lines(&lines, &mut writer, &progress)?
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                self.convert_lines(&lines, &mut writer, &progress)?
            }
        };

        let message = format!(
            "{} of {} lines converted, {} failed",
            summary.converted,
            progress.position(),
            summary.failed
        );
        progress.finish(&message);
        info!("{}", message);
        self.logger.log(&message)?;

        Ok(())
    }
}
