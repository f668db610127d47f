//! Command-line interface parser for the restaurant menu tool.
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

use std::path::{Path, PathBuf};

use clap::{builder::TypedValueParser, Parser, Subcommand};

use crate::api::DEFAULT_API_URL;

/// Help message for the day argument
const DAY_HELP: &str = "Day to show the menu for, in English or Dutch.\n\
                        One of: \"today\"/\"vandaag\", \"tomorrow\"/\"morgen\", \"overmorgen\", \
                        a weekday (\"mon\", \"woensdag\", ...), \"DD/MM[/YYYY]\", \"YYYY-mm-DD\" or \"mm-DD\".\n\
                        Leave empty to use today";

/// Command-line interface structure
#[derive(Parser, Debug)]
#[command(
    version(env!("CARGO_PKG_VERSION")),
    author(env!("CARGO_PKG_AUTHORS")),
    about(env!("CARGO_PKG_DESCRIPTION")),
    long_about = "Shows the daily menu of the Ghent University restaurants. \
                 Without a subcommand the menu for DAY is shown."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Day to show the menu for when no subcommand is given
    #[arg(value_name = "DAY", help = DAY_HELP)]
    day: Option<String>,

    /// Configuration file path
    ///
    /// JSON file holding the language, weekend and hidden kinds settings.
    /// Created empty on first use.
    #[arg(
        long,
        short,
        global = true,
        env = "UGENT_FOOD_CONFIG",
        value_name = "PATH",
        help = "Path to the JSON configuration file [default: ~/.ugent_food]"
    )]
    conf: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Base URL of the menu endpoint
    #[arg(
        long,
        hide = true,
        env = "UGENT_FOOD_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = BaseUrlParser
    )]
    api_url: String,
}

/// Subcommands, `menu` is implied when none is given
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the menu for a day
    Menu {
        #[arg(value_name = "DAY", help = DAY_HELP)]
        day: Option<String>,
    },
    /// Show the list of sandwiches
    Sandwiches,
    /// Inspect or change the settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// List every setting with its current and default value
    Ls,
    /// Change a setting
    Set {
        /// Setting name, e.g. "language" or "skip-weekends"
        name: String,
        /// New value, comma-separated for lists
        value: String,
    },
    /// Restore the default value of a setting
    Reset {
        /// Setting name
        name: String,
    },
}

impl Cli {
    /// Returns the command to run, defaulting to the menu for the positional day
    pub fn effective_command(&self) -> Command {
        match &self.command {
            Some(command) => command.clone(),
            None => Command::Menu {
                day: self.day.clone(),
            },
        }
    }

    /// Returns the configuration path given on the command line or in the environment
    pub fn conf(&self) -> Option<&Path> {
        self.conf.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the endpoint base URL, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Custom parser for the endpoint base URL
#[derive(Clone)]
struct BaseUrlParser;

impl TypedValueParser for BaseUrlParser {
    type Value = String;

    /// Accepts absolute http(s) URLs and drops a trailing slash
    ///
    /// # Arguments
    /// * `value` - String value from command line or environment
    ///
    /// # Returns
    /// * `Result<String, clap::Error>` - Normalized URL or error
    fn parse_ref(
        &self,
        _cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let Some(url) = value.to_str() else {
            return Err(clap::Error::new(clap::error::ErrorKind::InvalidUtf8));
        };

        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(clap::Error::raw(
                clap::error::ErrorKind::InvalidValue,
                format!("API URL must start with http:// or https://, got '{}'\n", url),
            ));
        }

        Ok(url.trim_end_matches('/').to_string())
    }
}
