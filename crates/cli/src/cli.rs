// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the tintmark converter.

use clap::{Parser, Subcommand};

/// Terminal markup and ANSI escape sequence converter
#[derive(Parser, Debug)]
#[command(
    name = "tintmark",
    version,
    about = "Convert between terminal markup and ANSI escape sequences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert markup into an ANSI escape sequence string
    Ansi {
        /// Markup source; read from stdin when omitted
        input: Option<String>,
    },
    /// Convert an ANSI escape sequence string into markup
    Markup {
        /// ANSI source; read from stdin when omitted
        input: Option<String>,
    },
    /// Render markup as syntax-highlighted output for display
    Pretty {
        /// Markup source; read from stdin when omitted
        input: Option<String>,
    },
    /// Dump the token stream as JSON
    Tokens {
        /// Source text; read from stdin when omitted
        input: Option<String>,

        /// Tokenize as ANSI instead of markup
        #[arg(long)]
        ansi: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
