use clap::ArgMatches;
use log::info;

use crate::api::GeoKit;
use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::utils::logger::Logger;

/// Command printing the WKT polygon of a bounding box
pub struct BboxCommand<'a> {
    bbox: String,
    geokit: GeoKit,
    logger: &'a Logger,
}

impl<'a> BboxCommand<'a> {
    pub fn new(args: &ArgMatches, config: GeoKitConfig, logger: &'a Logger) -> GeoResult<Self> {
        let bbox = args.get_one::<String>("bbox")
            .ok_or_else(|| GeoError::Config("Missing bounding box".to_string()))?
            .clone();

        Ok(BboxCommand {
            bbox,
            geokit: GeoKit::new(config),
            logger,
        })
    }
}

impl<'a> Command for BboxCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Converting bounding box '{}' to WKT", self.bbox);

        let wkt = self.geokit.bbox_wkt(&self.bbox)?;
        println!("{}", wkt);

        self.logger.log(&format!("Bounding box {} -> {}", self.bbox, wkt))?;
        Ok(())
    }
}
