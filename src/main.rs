use std::process;
use log::error;

use antipode::commands::{build_cli, config_from_args, CommandFactory, AntipodeCommandFactory};
use antipode::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config = match config_from_args(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    Logger::init_global_logger(&config.log_file, matches.get_flag("verbose"));

    let factory = AntipodeCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
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
