//! Direct antipode computation command
//!
//! Computes the antipode of a coordinate pair given on the command line
//! and prints a single result line.

use std::io::{self, Write};

use log::info;

use crate::commands::command_traits::Command;
use crate::commands::compute_antipode;
use crate::config::Config;
use crate::coordinate::GeoPoint;
use crate::errors::AntipodeResult;

/// Command computing the antipode of a known point
pub struct ComputeCommand<'a> {
    /// Input point
    point: GeoPoint,
    /// Effective settings
    config: &'a Config,
}

impl<'a> ComputeCommand<'a> {
    /// Create a new compute command
    pub fn new(point: GeoPoint, config: &'a Config) -> Self {
        ComputeCommand { point, config }
    }

    /// Compute the antipode and write the result line to `output`
    pub fn run<W: Write>(&self, output: &mut W) -> AntipodeResult<()> {
        info!("Computing antipode of {}", self.point);
        let antipode = compute_antipode(&self.point, self.config)?;
        writeln!(
            output,
            "Antipodal point: {}",
            antipode.format_with_precision(self.config.precision)
        )?;
        info!("Antipode is {}", antipode);
        Ok(())
    }
}

impl<'a> Command for ComputeCommand<'a> {
    fn execute(&self) -> AntipodeResult<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }
}
