use clap::ArgMatches;
use log::info;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::utils::logger::Logger;

/// Command listing the rings of a WKT polygon
pub struct WktCommand<'a> {
    wkt: String,
    geokit: GeoKit,
    logger: &'a Logger,
}

impl<'a> WktCommand<'a> {
    pub fn new(args: &ArgMatches, config: GeoKitConfig, logger: &'a Logger) -> GeoResult<Self> {
        let wkt = args.get_one::<String>("parse-wkt")
            .ok_or_else(|| GeoError::Config("Missing WKT text".to_string()))?
            .clone();

        Ok(WktCommand {
            wkt,
            geokit: GeoKit::new(config),
            logger,
        })
    }
}

impl<'a> Command for WktCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Parsing WKT polygon");

        let summary = self.geokit.describe_polygon(&self.wkt)?;
        print!("{}", summary);

        self.logger.log("WKT polygon parsed")?;
        Ok(())
    }
}
