//! Coordinate conversion command
//!
//! Reads one coordinate in any supported notation and prints it in the
//! requested output notation(s).

use std::str::FromStr;

use clap::ArgMatches;
use log::info;

use crate::api::{GeoKit, OutputTarget};
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::utils::logger::Logger;

/// Command for converting a single coordinate
pub struct ConvertCommand<'a> {
    /// Coordinate text as given on the command line
    input: String,
    /// Requested output notation
    target: OutputTarget,
    geokit: GeoKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Output settings
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, config: GeoKitConfig, logger: &'a Logger) -> GeoResult<Self> {
        let input = args.get_one::<String>("input")
            .ok_or_else(|| GeoError::Config("Missing coordinate input".to_string()))?
            .clone();

        let target = match args.get_one::<String>("to") {
            Some(name) => OutputTarget::from_str(name)?,
            None => OutputTarget::All,
        };

        Ok(ConvertCommand {
            input,
            target,
            geokit: GeoKit::new(config),
            logger,
        })
    }

    /// Text printed for the conversion
    pub fn render(&self) -> GeoResult<String> {
        let (parsed, conversions) = self.geokit.convert(&self.input, self.target)?;

        if self.target != OutputTarget::All {
            return Ok(conversions
                .into_iter()
                .map(|c| c.text)
                .collect::<Vec<_>>()
                .join("\n"));
        }

        let mut result = format!("Input format: {}\n", parsed.format);
        for conversion in conversions {
            result.push_str(&format!("{:<8} {}\n", format!("{}:", conversion.target), conversion.text));
        }
        Ok(result.trim_end().to_string())
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Converting '{}' to {}", self.input, self.target);

        let output = self.render()?;
        println!("{}", output);

        self.logger.log(&format!("Converted '{}'", self.input))?;
        Ok(())
    }
}
