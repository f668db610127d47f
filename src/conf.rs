//! Persisted user settings and their validation.
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

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{de::Visitor, Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    i18n::{Language, Translator, UnsupportedLanguage},
    menu::MealKind,
};

/// File name of the configuration, relative to the home directory
pub const CONF_FILE_NAME: &str = ".ugent_food";

const TRUE_VALUES: [&str; 5] = ["1", "true", "t", "yes", "y"];
const FALSE_VALUES: [&str; 5] = ["0", "false", "f", "no", "n"];

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("Could not determine the home directory, pass --conf explicitly")]
    NoHomeDir,
    #[error("Cannot access configuration file '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid configuration in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),
    #[error("Unknown setting: \"{name}\". Accepted settings are: {accepted}")]
    UnknownSetting { name: String, accepted: String },
    #[error("Illegal value \"{value}\" for setting \"{name}\". Accepted values are: {accepted}")]
    IllegalSettingValue {
        name: String,
        value: String,
        accepted: String,
    },
}

/// Settings a user can change with `config set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Hidden,
    Language,
    SkipWeekends,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::Hidden, Setting::Language, Setting::SkipWeekends];

    /// Key in the configuration file
    pub fn name(&self) -> &'static str {
        match self {
            Setting::Hidden => "hidden",
            Setting::Language => "language",
            Setting::SkipWeekends => "skip_weekends",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Setting::Hidden => {
                "Meal kinds to leave out of the menu, as a comma-separated list (e.g. \"soup,fish\")."
            }
            Setting::Language => {
                "The language used to fetch the menus in.\n\
                 Note that not every endpoint is available in every language."
            }
            Setting::SkipWeekends => {
                "Whether to automatically skip weekends when fetching menus.\n\
                 Using the tool on a Saturday with this setting enabled shows the menu for the coming Monday instead."
            }
        }
    }

    /// Values accepted by `config set`, for lists each element must be one of them
    pub fn accepted_values(&self) -> Vec<String> {
        match self {
            Setting::Hidden => MealKind::ALL.iter().map(|kind| kind.label().to_string()).collect(),
            Setting::Language => Language::ALL.iter().map(|lang| lang.code().to_string()).collect(),
            Setting::SkipWeekends => vec!["true".to_string(), "false".to_string()],
        }
    }

    pub fn default_value(&self) -> Value {
        match self {
            Setting::Hidden => Value::Array(Vec::new()),
            Setting::Language => Value::String(Language::default().code().to_string()),
            Setting::SkipWeekends => Value::Bool(true),
        }
    }

    /// Converts the raw command-line value into what gets stored in the file
    pub fn parse_value(&self, raw: &str) -> Result<Value, ConfError> {
        let illegal = |value: &str| ConfError::IllegalSettingValue {
            name: self.name().to_string(),
            value: value.to_string(),
            accepted: self.accepted_values().join(", "),
        };

        match self {
            Setting::Language => raw
                .parse::<Language>()
                .map(|lang| Value::String(lang.code().to_string()))
                .map_err(|_| illegal(raw)),
            Setting::SkipWeekends => parse_bool(raw).map(Value::Bool).ok_or_else(|| illegal(raw)),
            Setting::Hidden => {
                let mut kinds: Vec<Value> = Vec::new();
                for label in raw.split(',').map(str::trim).filter(|l| !l.is_empty()) {
                    let kind = MealKind::from_label(label).ok_or_else(|| illegal(label))?;
                    let value = Value::String(kind.label().to_string());
                    if !kinds.contains(&value) {
                        kinds.push(value);
                    }
                }
                Ok(Value::Array(kinds))
            }
        }
    }
}

impl FromStr for Setting {
    type Err = ConfError;

    /// Setting names are case-insensitive and accept dashes for underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().replace('-', "_").to_lowercase();
        Setting::ALL
            .into_iter()
            .find(|setting| setting.name() == name)
            .ok_or_else(|| ConfError::UnknownSetting {
                name: s.to_string(),
                accepted: Setting::ALL.map(|setting| setting.name()).join(", "),
            })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let value = raw.trim().to_lowercase();
    if TRUE_VALUES.contains(&value.as_str()) {
        Some(true)
    } else if FALSE_VALUES.contains(&value.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Configuration file as stored on disk, every key optional
#[derive(Deserialize, Default)]
struct RawConf {
    language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    skip_weekends: Option<bool>,
    hidden: Option<Vec<String>>,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlagVisitor)
}

/// Accepts JSON booleans and the textual forms `config set` understands
struct FlagVisitor;

impl<'a> Visitor<'a> for FlagVisitor {
    type Value = Option<bool>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a boolean or one of: {}, {}",
            TRUE_VALUES.join(", "),
            FALSE_VALUES.join(", ")
        )
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        parse_bool(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(serde::de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }
}

/// Validated configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conf {
    language: Language,
    /// Move Saturdays and Sundays to the next Monday
    skip_weekends: bool,
    /// Meal kinds left out of the rendered menu
    hidden: HashSet<MealKind>,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            language: Language::default(),
            skip_weekends: true,
            hidden: HashSet::new(),
        }
    }
}

impl Conf {
    /// Validates the raw file contents, failing on the first unsupported value
    fn from_raw(raw: RawConf) -> Result<Self, ConfError> {
        let defaults = Conf::default();

        let language = match raw.language {
            Some(code) => code.parse::<Language>()?,
            None => defaults.language,
        };

        let hidden = match raw.hidden {
            Some(labels) => labels
                .iter()
                .map(|label| {
                    MealKind::from_label(label).ok_or_else(|| ConfError::IllegalSettingValue {
                        name: Setting::Hidden.name().to_string(),
                        value: label.clone(),
                        accepted: Setting::Hidden.accepted_values().join(", "),
                    })
                })
                .collect::<Result<HashSet<_>, _>>()?,
            None => defaults.hidden,
        };

        Ok(Self {
            language,
            skip_weekends: raw.skip_weekends.unwrap_or(defaults.skip_weekends),
            hidden,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn skip_weekends(&self) -> bool {
        self.skip_weekends
    }

    pub fn hidden(&self) -> &HashSet<MealKind> {
        &self.hidden
    }

    /// Translator bound to the configured language
    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

/// JSON configuration file on disk
#[derive(Debug, Clone)]
pub struct ConfStore {
    path: PathBuf,
}

impl ConfStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.ugent_food`
    pub fn default_path() -> Result<PathBuf, ConfError> {
        dirs::home_dir()
            .map(|home| home.join(CONF_FILE_NAME))
            .ok_or(ConfError::NoHomeDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration, creating an empty file first if needed
    pub fn load(&self) -> Result<Conf, ConfError> {
        let map = self.read()?;
        let raw: RawConf = serde_json::from_value(Value::Object(map)).map_err(|source| ConfError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Conf::from_raw(raw)
    }

    /// Validates and persists a new value for the setting called `name`
    ///
    /// # Returns
    /// * The setting and the value as it was stored
    pub fn set(&self, name: &str, value: &str) -> Result<(Setting, Value), ConfError> {
        let setting: Setting = name.parse()?;
        let value = setting.parse_value(value)?;

        let mut map = self.read()?;
        map.insert(setting.name().to_string(), value.clone());
        self.write(&map)?;

        log::info!("Set {} to {} in {}", setting.name(), value, self.path.display());
        Ok((setting, value))
    }

    /// Removes the setting called `name` from the file, so its default applies again
    pub fn reset(&self, name: &str) -> Result<Setting, ConfError> {
        let setting: Setting = name.parse()?;

        let mut map = self.read()?;
        if map.remove(setting.name()).is_some() {
            self.write(&map)?;
        }

        log::info!("Reset {} in {}", setting.name(), self.path.display());
        Ok(setting)
    }

    /// Human-readable list of every setting with its current and default value
    pub fn describe(&self) -> Result<String, ConfError> {
        let map = self.read()?;

        let blocks: Vec<String> = Setting::ALL
            .iter()
            .map(|setting| {
                let default = setting.default_value();
                let current = map.get(setting.name()).unwrap_or(&default);

                let mut block = format!(
                    "{}: {} (default: {})\n",
                    setting.name(),
                    display_value(current),
                    display_value(&default)
                );
                for line in setting.description().lines() {
                    block += &format!("    {}\n", line);
                }
                block += &format!("    Accepted values: {}", setting.accepted_values().join(", "));
                block
            })
            .collect();

        Ok(blocks.join("\n\n"))
    }

    fn ensure_exists(&self) -> Result<(), ConfError> {
        if self.path.exists() {
            return Ok(());
        }

        fs::write(&self.path, "{}").map_err(|source| self.io_error(source))?;
        log::info!("Created configuration file {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Map<String, Value>, ConfError> {
        self.ensure_exists()?;
        log::debug!("Reading configuration from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|source| ConfError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, map: &Map<String, Value>) -> Result<(), ConfError> {
        let content = serde_json::to_string_pretty(map).map_err(|source| ConfError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> ConfError {
        ConfError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "(none)".to_string(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
