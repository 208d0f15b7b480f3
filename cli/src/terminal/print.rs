// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::sync::OnceLock;

use anyhow::bail;
use arplink_common::config::Config;
use arplink_common::models::descriptor::InterfaceDescriptor;
use colored::*;

use crate::terminal::{colors, network_fmt};

pub const TOTAL_WIDTH: usize = 64;

static PRINT: OnceLock<Print> = OnceLock::new();

/// Writes a line to the terminal verbatim, through the logging pipeline.
#[macro_export]
macro_rules! aprint {
    () => {
        $crate::aprint!("")
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: $crate::terminal::logging::PRINT_TARGET,
            raw_msg = %format_args!($($arg)*)
        )
    };
}

#[derive(Debug, Default)]
pub struct Print {
    no_banner: bool,
    q_level: u8,
    redact: bool,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
            redact: cfg.redact,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        if PRINT.set(Self::new(cfg)).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> &'static Self {
        PRINT.get_or_init(Self::default)
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text: String = format!("⟦ ARPLINK v{} ⟧", env!("CARGO_PKG_VERSION"));
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text.chars().count()) / 2)
            .bright_black();
        aprint!("{}{}{}", sep, text.bright_green().bold(), sep);
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let dash_count: usize = TOTAL_WIDTH.saturating_sub(formatted.chars().count());
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        aprint!(
            "{}{}{}",
            "─".repeat(left).bright_black(),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right).bright_black()
        );
    }

    /// Prints descriptors according to the quiet level.
    ///
    /// * **0**: one tree per interface.
    /// * **1**: one line per interface.
    /// * **2**: interface names only.
    pub fn interfaces(descriptors: &[&InterfaceDescriptor]) {
        Self::get().render_interfaces(descriptors);
    }

    fn render_interfaces(&self, descriptors: &[&InterfaceDescriptor]) {
        for (idx, descriptor) in descriptors.iter().enumerate() {
            match self.q_level {
                0 => {
                    tree_head(idx, descriptor.name());
                    as_tree(network_fmt::descriptor_details(descriptor, self.redact));
                    if idx + 1 != descriptors.len() {
                        aprint!();
                    }
                }
                1 => aprint!("{}", network_fmt::descriptor_line(descriptor, self.redact)),
                _ => aprint!("{}", descriptor.name()),
            }
        }
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        aprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    aprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<(String, ColoredString)>) {
    let padding_width: usize = "Vendor".len();

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = padding_width.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        aprint!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
