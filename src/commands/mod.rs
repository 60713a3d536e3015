//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod compute_command;
pub mod inspect_command;
pub mod interactive_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use compute_command::ComputeCommand;
pub use inspect_command::InspectCommand;
pub use interactive_command::InteractiveCommand;

use clap::ArgMatches;
use log::debug;

use crate::config::Config;
use crate::coordinate::{antipodal, antipodal_with_validation, parse_coordinate_pair, GeoPoint};
use crate::errors::{AntipodeError, AntipodeResult};

/// Factory for creating command instances based on CLI arguments
pub struct AntipodeCommandFactory;

impl AntipodeCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        AntipodeCommandFactory
    }
}

impl Default for AntipodeCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for AntipodeCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a Config) -> AntipodeResult<Box<dyn Command + 'a>> {
        let point = coordinates_from_args(args)?;

        match point {
            Some(point) if args.get_flag("inspect") => Ok(Box::new(InspectCommand::new(point, config))),
            Some(point) => Ok(Box::new(ComputeCommand::new(point, config))),
            None if args.get_flag("inspect") => {
                Err("--inspect requires a coordinate pair".to_string().into())
            }
            // Default to prompting on stdin
            None => Ok(Box::new(InteractiveCommand::new(config))),
        }
    }
}

/// Build the effective configuration: config file (or defaults) with CLI overrides
pub fn config_from_args(args: &ArgMatches) -> AntipodeResult<Config> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if args.get_flag("validate") {
        config.validate = true;
    }

    if let Some(precision_str) = args.get_one::<String>("precision") {
        let precision = precision_str.trim().parse::<i64>().map_err(|_| {
            AntipodeError::ConfigError(format!("Invalid precision: {}", precision_str))
        })?;
        config.precision = Config::check_precision(precision)?;
    }

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Parse the positional coordinates, if any were given
fn coordinates_from_args(args: &ArgMatches) -> AntipodeResult<Option<GeoPoint>> {
    let Some(values) = args.get_many::<String>("coordinates") else {
        return Ok(None);
    };

    let text = values.map(String::as_str).collect::<Vec<_>>().join(" ");
    let (latitude, longitude) = parse_coordinate_pair(&text)?;
    Ok(Some(GeoPoint::new(latitude, longitude)))
}

/// Compute the antipode, validating first when the configuration asks for it
pub(crate) fn compute_antipode(point: &GeoPoint, config: &Config) -> AntipodeResult<GeoPoint> {
    let result = if config.validate {
        antipodal_with_validation(point.latitude, point.longitude)?
    } else {
        antipodal(point.latitude, point.longitude)
    };
    Ok(GeoPoint::from(result))
}
