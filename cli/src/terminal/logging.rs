// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Log Rendering
//!
//! Installs the global `tracing` subscriber and renders every event as a
//! single status line on stderr:
//!
//! ```text
//! [»] Binding ARP client to 192.168.1.10 on eth0
//! [+] ARP client bound to 192.168.1.10 (eth0)
//! [*] Not running as root, opening a raw channel will likely fail
//! ```
//!
//! Events emitted through the `aprint!` macro bypass the decoration and are
//! written verbatim, which is how result tables reach the terminal.

use std::fmt::Write as _;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const PRINT_TARGET: &str = "arplink::print";

/// Wires up the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise debug events are let through when
/// `-v` was given and the formatter does the per-event verbosity cut.
pub fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "info",
        _ => "debug",
    };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(ArplinkFormatter {
            max_verbosity: verbosity,
        })
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .init();
}

pub struct ArplinkFormatter {
    pub max_verbosity: u8,
}

impl<S, N> FormatEvent<S, N> for ArplinkFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            return writeln!(writer, "{}", fields.raw.unwrap_or_default());
        }

        if fields.verbosity.unwrap_or(0) > self.max_verbosity {
            return Ok(());
        }

        let symbol: ColoredString = match (*meta.level(), fields.status.as_deref()) {
            (Level::TRACE, _) => "[ ]".dimmed(),
            (Level::DEBUG, _) => "[?]".blue(),
            (Level::INFO, Some("info")) => "[»]".cyan().bold(),
            (Level::INFO, _) => "[+]".green().bold(),
            (Level::WARN, _) => "[*]".yellow().bold(),
            (Level::ERROR, _) => "[-]".red().bold(),
        };

        writeln!(writer, "{} {}{}", symbol, fields.message, fields.extra)
    }
}

/// Splits an event into the parts the formatter cares about.
#[derive(Default)]
struct EventFields {
    status: Option<String>,
    verbosity: Option<u8>,
    raw: Option<String>,
    message: String,
    extra: String,
}

impl Visit for EventFields {
    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "verbosity" => self.verbosity = Some(value.min(u8::MAX as u64) as u8),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "verbosity" => self.verbosity = Some(value.clamp(0, u8::MAX as i64) as u8),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "status" => self.status = Some(value.to_string()),
            "raw_msg" => self.raw = Some(value.to_string()),
            _ => self.record_debug(field, &value),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{:?}", value);
            }
            "raw_msg" => self.raw = Some(format!("{:?}", value)),
            name => {
                let _ = write!(self.extra, " {}={:?}", name.italic(), value);
            }
        }
    }
}
