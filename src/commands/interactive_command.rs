//! Interactive antipode command
//!
//! Prompts for a latitude and a longitude on standard input and prints
//! the antipodal point. Values are whitespace-separated tokens, so both may
//! be typed on one line.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::compute_antipode;
use crate::config::Config;
use crate::coordinate::{parse_coordinate, Axis, GeoPoint};
use crate::errors::{AntipodeError, AntipodeResult};

/// Command reading coordinates from a terminal
pub struct InteractiveCommand<'a> {
    /// Effective settings
    config: &'a Config,
}

impl<'a> InteractiveCommand<'a> {
    /// Create a new interactive command
    pub fn new(config: &'a Config) -> Self {
        InteractiveCommand { config }
    }

    /// Take the next whitespace-separated token, reading more lines only when none are pending
    fn next_token<R: BufRead>(input: &mut R, pending: &mut VecDeque<String>) -> io::Result<Option<String>> {
        while pending.is_empty() {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(pending.pop_front())
    }

    /// Prompt for one value and parse it
    fn prompt<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        pending: &mut VecDeque<String>,
        axis: Axis,
    ) -> AntipodeResult<f64> {
        write!(output, "Enter {}: ", axis.name())?;
        output.flush()?;

        let token = Self::next_token(input, pending)?.ok_or_else(|| {
            AntipodeError::ParseError(format!(
                "Unexpected end of input while reading {}",
                axis.name()
            ))
        })?;

        let value = parse_coordinate(&token, axis)?;
        debug!("Read {} {}", axis.name(), value);
        Ok(value)
    }

    /// Run the prompt/compute/print cycle over the given streams
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AntipodeResult<()> {
        let mut pending = VecDeque::new();
        let latitude = self.prompt(input, output, &mut pending, Axis::Latitude)?;
        let longitude = self.prompt(input, output, &mut pending, Axis::Longitude)?;
        let point = GeoPoint::new(latitude, longitude);

        let antipode = compute_antipode(&point, self.config)?;
        writeln!(
            output,
            "Antipodal point: {}",
            antipode.format_with_precision(self.config.precision)
        )?;

        info!("Antipode of {} is {}", point, antipode);
        Ok(())
    }
}

impl<'a> Command for InteractiveCommand<'a> {
    fn execute(&self) -> AntipodeResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(&mut stdin.lock(), &mut stdout.lock())
    }
}
