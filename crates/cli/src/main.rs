// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tintmark binary entry point.

use std::io::Read;

use clap::Parser;

use tintmark::cli::{Cli, Command};
use tintmark::markup::{
    ansi_to_markup, markup_to_ansi, prettify_markup, tokenize_ansi, tokenize_markup, Token,
};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Ansi { input } => {
            let source = read_input(input)?;
            println!("{}", markup_to_ansi(&source)?);
        }
        Command::Markup { input } => {
            let source = read_input(input)?;
            println!("{}", ansi_to_markup(&source)?);
        }
        Command::Pretty { input } => {
            let source = read_input(input)?;
            println!("{}", prettify_markup(&source)?);
        }
        Command::Tokens { input, ansi } => {
            let source = read_input(input)?;
            let tokens: Vec<Token> = if ansi {
                tokenize_ansi(&source).collect()
            } else {
                tokenize_markup(&source).collect::<Result<_, _>>()?
            };
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
    }
    Ok(())
}

/// Read the source text from the argument, or stdin when none was given.
fn read_input(input: Option<String>) -> Result<String, std::io::Error> {
    match input {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
