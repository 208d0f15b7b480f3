// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! Argument schema for the `arplink` binary. Each command's execution lives in
//! its own submodule; flags shared by all of them are declared here and
//! translated into the library-facing [`Config`].

pub mod bind;
pub mod list;

use std::net::Ipv4Addr;

use arplink_common::config::Config;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arplink")]
#[command(about = "Find network interfaces usable for ARP and bind a client to one.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep logs and colors but hide the banner
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Reduce UI visual density (-q: one line per interface, -qq: names only)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Mask the device-specific half of MAC addresses
    #[arg(long = "redact", global = true)]
    pub redact: bool,

    /// Increase logging detail (-v: discovery steps, -vv: skipped interfaces)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List interfaces eligible for ARP
    #[command(alias = "l")]
    List {
        /// Also show interfaces without an IPv4 address
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// Bind an ARP client to an eligible interface
    #[command(alias = "b")]
    Bind {
        /// Interface to bind to, by name
        #[arg(short = 'i', long = "interface", conflicts_with = "address")]
        interface: Option<String>,

        /// Interface to bind to, by its IPv4 address
        #[arg(short = 'a', long = "address")]
        address: Option<Ipv4Addr>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner,
            quiet: cmd.quiet,
            redact: cmd.redact,
            include_unaddressed: matches!(cmd.command, Commands::List { all: true }),
        }
    }
}
