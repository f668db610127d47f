//! Command-line entry point for the restaurant menu tool.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use ugent_food::{cli::Cli, UgentFood, UgentFoodError};

/// Main entry point of the menu tool
///
/// # Usage Examples
/// ```bash
/// # Menu for today, or Monday when run in the weekend
/// ugent-food
///
/// # Menu for next Wednesday, in Dutch
/// ugent-food config set language nl
/// ugent-food woensdag
///
/// # Menu for a specific date
/// ugent-food menu 2026-11-03
/// ```
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose());

    match run(&cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(err) => {
            log::debug!("{:?}", err);
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}

async fn run(cli: &Cli) -> Result<String, UgentFoodError> {
    let now = Local::now().naive_local();
    let app = UgentFood::new(cli)?;
    app.run(&cli.effective_command(), now).await
}

/// Warnings only by default, `RUST_LOG` refines and `--verbose` enables debug output for this crate
fn init_logger(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if verbose {
        builder.filter_module("ugent_food", LevelFilter::Debug);
    }
    builder.init();
}
