//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod bbox_command;
pub mod wkt_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use bbox_command::BboxCommand;
pub use wkt_command::WktCommand;
pub use batch_command::BatchCommand;

use std::str::FromStr;

use clap::ArgMatches;
use log::LevelFilter;

use crate::coordinate::GeoFormat;
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// Precedence: `--batch`, then `--parse-wkt`, then `--bbox`, otherwise the
/// positional input is converted.
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        config: GeoKitConfig,
        logger: &'a Logger,
    ) -> GeoResult<Box<dyn Command + 'a>> {
        if args.contains_id("batch") {
            Ok(Box::new(BatchCommand::new(args, config, logger)?))
        } else if args.contains_id("parse-wkt") {
            Ok(Box::new(WktCommand::new(args, config, logger)?))
        } else if args.contains_id("bbox") {
            Ok(Box::new(BboxCommand::new(args, config, logger)?))
        } else {
            Ok(Box::new(ConvertCommand::new(args, config, logger)?))
        }
    }
}

/// Load the config file named by `--config` (or `geokit.toml`) and apply
/// the output and logging flags on top of it
pub fn resolve_config(args: &ArgMatches) -> GeoResult<GeoKitConfig> {
    let mut config = GeoKitConfig::load_or_default(args.get_one::<String>("config").map(String::as_str))?;

    if let Some(format) = args.get_one::<String>("format") {
        config.format = GeoFormat::from_str(format)
            .map_err(|_| GeoError::Config(format!("--format: unknown format '{}'", format)))?;
    }
    if let Some(decimals) = args.get_one::<u32>("decimals") {
        config.decimals = Some(*decimals);
    }
    if let Some(separator) = args.get_one::<String>("separator") {
        config.separator = separator.clone();
    }
    if let Some(precision) = args.get_one::<u8>("precision") {
        config.mgrs_precision = *precision;
    }
    if let Some(wkt_decimals) = args.get_one::<u32>("wkt-decimals") {
        config.wkt_decimals = *wkt_decimals;
    }
    if let Some(log_file) = args.get_one::<String>("log-file") {
        config.log_file = Some(log_file.clone());
    }
    if args.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    Ok(config)
}
