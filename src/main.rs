use clap::{Arg, ArgAction, Command as ClapCommand};
use std::process;
use log::error;

use geokit::commands::{resolve_config, CommandFactory, GeokitCommandFactory};
use geokit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("GeoKit")
        .version("0.1.0")
        .about("Convert coordinates between lat/lon, UTM, MGRS and WKT")
        .arg(
            Arg::new("input")
                .help("Coordinate text, e.g. \"52.52, 13.405\", \"33U 391779 5820072\" or \"33UUU9177920072\"")
                .required_unless_present_any(["bbox", "parse-wkt", "batch"])
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output notation")
                .value_name("TARGET")
                .value_parser(["all", "latlon", "utm", "mgrs", "wkt"])
                .default_value("all"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Lat/lon notation (dd, ddm or dms)")
                .value_name("FORMAT")
                .value_parser(["dd", "ddm", "dms"])
                .required(false),
        )
        .arg(
            Arg::new("decimals")
                .long("decimals")
                .help("Decimal places of the smallest lat/lon unit (0-15)")
                .value_name("N")
                .value_parser(clap::value_parser!(u32).range(0..=15))
                .required(false),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Text between latitude and longitude")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .help("MGRS digits per axis (0-5)")
                .value_name("DIGITS")
                .value_parser(clap::value_parser!(u8).range(0..=5))
                .required(false),
        )
        .arg(
            Arg::new("wkt-decimals")
                .long("wkt-decimals")
                .help("Decimal places in WKT output (0-15)")
                .value_name("N")
                .value_parser(clap::value_parser!(u32).range(0..=15))
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Print the WKT polygon of a bounding box (minlon,minlat,maxlon,maxlat)")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("parse-wkt")
                .long("parse-wkt")
                .help("List the rings of a WKT polygon")
                .value_name("WKT")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .help("Convert every line of a file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for batch conversion")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file (default: geokit.toml if present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Mirror log records into this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match resolve_config(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let logger = match Logger::init_global_logger(config.log_file.as_deref(), config.log_level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    };

    let factory = GeokitCommandFactory::new();

    let command_result = factory.create_command(&matches, config, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
