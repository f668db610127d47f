//! Runs a parsed command against the configuration and the menu endpoint.
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

use chrono::NaiveDateTime;

use crate::{
    api::ApiClient,
    cli::{Cli, Command, ConfigAction},
    conf::ConfStore,
    date,
    error::UgentFoodError,
    render,
};

/// Main entry point of the library, one per invocation
pub struct UgentFood {
    /// Settings file, read lazily so `config` works on a broken file
    store: ConfStore,
    /// Menu endpoint client
    api: ApiClient,
}

impl UgentFood {
    /// Creates the runner from command-line arguments
    ///
    /// # Arguments
    /// * `cli` - Parsed command-line arguments holding the config path and the endpoint URL
    ///
    /// # Returns
    /// * `UgentFood` ready to run commands
    /// * `Err` when no config path is given and the home directory is unknown
    pub fn new(cli: &Cli) -> Result<Self, UgentFoodError> {
        let store = match cli.conf() {
            Some(path) => ConfStore::new(path),
            None => ConfStore::new(ConfStore::default_path()?),
        };

        Ok(Self::with_parts(store, ApiClient::new(cli.api_url())?))
    }

    pub fn with_parts(store: ConfStore, api: ApiClient) -> Self {
        Self { store, api }
    }

    /// Runs `command` and returns the text to print on stdout
    ///
    /// # Arguments
    /// * `command` - Command to run
    /// * `now` - Local wall-clock time, relative day arguments are resolved against it
    pub async fn run(&self, command: &Command, now: NaiveDateTime) -> Result<String, UgentFoodError> {
        match command {
            Command::Menu { day } => self.menu(day.as_deref(), now).await,
            Command::Sandwiches => self.sandwiches().await,
            Command::Config { action } => self.config(action.as_ref().unwrap_or(&ConfigAction::Ls)),
        }
    }

    /// Renders the menu for the day described by `day`, today when absent
    pub async fn menu(&self, day: Option<&str>, now: NaiveDateTime) -> Result<String, UgentFoodError> {
        let conf = self.store.load()?;
        let date = date::resolve(day, now, conf.skip_weekends())?;
        log::info!("Fetching the {} menu for {}", conf.language(), date);

        let menu = self.api.fetch_menu(date, conf.language()).await?;
        Ok(render::render_menu(&menu, &conf.translator(), conf.hidden(), date))
    }

    pub async fn sandwiches(&self) -> Result<String, UgentFoodError> {
        let conf = self.store.load()?;
        let sandwiches = self.api.fetch_sandwiches().await?;
        Ok(render::render_sandwiches(&sandwiches, &conf.translator()))
    }

    /// Settings commands never validate the stored values, so a bad value can
    /// always be fixed with `set` or `reset`
    pub fn config(&self, action: &ConfigAction) -> Result<String, UgentFoodError> {
        let output = match action {
            ConfigAction::Ls => self.store.describe()?,
            ConfigAction::Set { name, value } => {
                let (setting, value) = self.store.set(name, value)?;
                format!("{} = {}", setting.name(), value)
            }
            ConfigAction::Reset { name } => {
                let setting = self.store.reset(name)?;
                format!("{} = {}", setting.name(), setting.default_value())
            }
        };
        Ok(output)
    }
}
