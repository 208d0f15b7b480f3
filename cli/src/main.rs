// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # arplink CLI Entry Point
//!
//! Parses arguments, installs logging and terminal output, dispatches to the
//! selected command and turns its outcome into the process exit code. Errors
//! from any command end up here, are logged once and map to a failure exit.

mod commands;
mod terminal;

use std::process::ExitCode;

use arplink_common::{config::Config, error};

use crate::{
    commands::{CommandLine, Commands, bind, list},
    terminal::{logging, print::Print},
};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let _ = Print::init(&cfg);
    Print::banner();

    let result = match &commands.command {
        Commands::List { .. } => list::list(&cfg),
        Commands::Bind { interface, address } => bind::bind(interface.as_deref(), *address),
    };

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();

    exit_code
}
