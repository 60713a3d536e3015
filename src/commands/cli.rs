//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command describing all CLI arguments
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("antipode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute the antipodal point of a latitude/longitude pair")
        .arg(
            Arg::new("coordinates")
                .help("Coordinate pair, e.g. '40.7128,-74.0060' or '40.7128N 74.0060W'. Prompts when omitted")
                .value_name("LAT,LON")
                .num_args(1..=2)
                .allow_hyphen_values(true)
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo log output to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Reject coordinates outside the valid latitude/longitude ranges")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Show validity and hemispheres of the point and its antipode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Number of decimal places in the output")
                .value_name("DIGITS")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
}
