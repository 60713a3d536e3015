//! Point inspection command
//!
//! Reports validity and hemispheres of a point and of its antipode.

use std::io::{self, Write};

use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::compute_antipode;
use crate::config::Config;
use crate::coordinate::{describe_hemispheres, GeoPoint};
use crate::errors::AntipodeResult;

/// Command describing a point and its antipode
pub struct InspectCommand<'a> {
    /// Input point
    point: GeoPoint,
    /// Effective settings
    config: &'a Config,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    pub fn new(point: GeoPoint, config: &'a Config) -> Self {
        InspectCommand { point, config }
    }

    /// Format one report line for a point
    fn describe(&self, label: &str, point: &GeoPoint) -> String {
        let validity = if point.is_valid() { "valid" } else { "out of range" };
        format!(
            "{:<10}{} ({}) [{}]",
            label,
            point.format_with_precision(self.config.precision),
            describe_hemispheres(point.latitude, point.longitude),
            validity
        )
    }

    /// Write the report to `output`
    pub fn run<W: Write>(&self, output: &mut W) -> AntipodeResult<()> {
        if !self.point.is_valid() {
            warn!("Inspecting out-of-range point {}", self.point);
        }

        let antipode = compute_antipode(&self.point, self.config)?;

        writeln!(output, "{}", self.describe("Input:", &self.point))?;
        writeln!(output, "{}", self.describe("Antipode:", &antipode))?;

        info!("Inspected {} -> {}", self.point, antipode);
        Ok(())
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> AntipodeResult<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }
}
