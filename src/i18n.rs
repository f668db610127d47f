//! Bilingual (English/Dutch) labels and message templates.
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

use std::{fmt, str::FromStr};

use chrono::Weekday;
use thiserror::Error;

use crate::menu::{MealKind, MealType};

/// Languages the menu endpoint and the catalog support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Dutch];

    /// Two-letter code used in the endpoint path and the configuration file
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Dutch => "nl",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported language: \"{0}\". Accepted values are: en, nl")]
pub struct UnsupportedLanguage(pub String);

/// Messages that exist in every supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// `{extra}`
    ExtraMessage,
    /// `{weekday}`, `{day}`
    MenuFor,
    /// `{day}`
    RestoClosed,
    /// `{vegetables}`
    Vegetables,
}

impl MessageKey {
    pub const ALL: [MessageKey; 4] = [
        MessageKey::ExtraMessage,
        MessageKey::MenuFor,
        MessageKey::RestoClosed,
        MessageKey::Vegetables,
    ];
}

/// Read-only view on the catalog for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Localized meal kind. Unknown kinds fall back to their raw label.
    pub fn kind<'a>(&self, kind: &'a MealKind) -> &'a str {
        use Language::*;
        match (kind, self.lang) {
            (MealKind::Fish, English) => "Fish",
            (MealKind::Fish, Dutch) => "Vis",
            (MealKind::Meat, English) => "Meat",
            (MealKind::Meat, Dutch) => "Vlees",
            (MealKind::Soup, English) => "Soup",
            (MealKind::Soup, Dutch) => "Soep",
            (MealKind::Vegan, English) => "Vegan",
            (MealKind::Vegan, Dutch) => "Vegan",
            (MealKind::Vegetarian, English) => "Vegetarian",
            (MealKind::Vegetarian, Dutch) => "Vegetarisch",
            (MealKind::Other(label), _) => label.as_str(),
        }
    }

    /// Localized meal type. Unknown types fall back to their raw label.
    pub fn meal_type<'a>(&self, meal_type: &'a MealType) -> &'a str {
        use Language::*;
        match (meal_type, self.lang) {
            (MealType::Main, English) => "Main course",
            (MealType::Main, Dutch) => "Hoofdgerecht",
            (MealType::Cold, English) => "Cold",
            (MealType::Cold, Dutch) => "Koud",
            (MealType::Side, English) => "Side dish",
            (MealType::Side, Dutch) => "Bijgerecht",
            (MealType::Other(label), _) => label.as_str(),
        }
    }

    /// Day of the week, Monday first
    pub fn weekday(&self, day: Weekday) -> &'static str {
        use Language::*;
        match (day, self.lang) {
            (Weekday::Mon, English) => "Monday",
            (Weekday::Mon, Dutch) => "maandag",
            (Weekday::Tue, English) => "Tuesday",
            (Weekday::Tue, Dutch) => "dinsdag",
            (Weekday::Wed, English) => "Wednesday",
            (Weekday::Wed, Dutch) => "woensdag",
            (Weekday::Thu, English) => "Thursday",
            (Weekday::Thu, Dutch) => "donderdag",
            (Weekday::Fri, English) => "Friday",
            (Weekday::Fri, Dutch) => "vrijdag",
            (Weekday::Sat, English) => "Saturday",
            (Weekday::Sat, Dutch) => "zaterdag",
            (Weekday::Sun, English) => "Sunday",
            (Weekday::Sun, Dutch) => "zondag",
        }
    }

    /// Fills the template for `key` with `substitutions`.
    ///
    /// Every placeholder in the template must have a substitution. A missing one
    /// trips a debug assertion and is left verbatim in release builds.
    pub fn message(&self, key: MessageKey, substitutions: &[(&str, &str)]) -> String {
        fill_template(self.template(key), substitutions)
    }

    fn template(&self, key: MessageKey) -> &'static str {
        use Language::*;
        match (key, self.lang) {
            (MessageKey::ExtraMessage, English) => "Extra message:\n{extra}",
            (MessageKey::ExtraMessage, Dutch) => "Extra mededeling:\n{extra}",
            (MessageKey::MenuFor, English) => "Menu for {weekday} {day}:",
            (MessageKey::MenuFor, Dutch) => "Menu voor {weekday} {day}:",
            (MessageKey::RestoClosed, English) => "The restaurants are closed on {day}.",
            (MessageKey::RestoClosed, Dutch) => "De resto's zijn gesloten op {day}.",
            (MessageKey::Vegetables, English) => "Vegetables:\n{vegetables}",
            (MessageKey::Vegetables, Dutch) => "Groenten:\n{vegetables}",
        }
    }

    /// Column headers of the meal table
    pub fn menu_table_headers(&self) -> [&'static str; 4] {
        match self.lang {
            Language::English => ["Type", "Kind", "Name", "Price"],
            Language::Dutch => ["Type", "Soort", "Naam", "Prijs"],
        }
    }

    /// Column headers of the sandwich table
    pub fn sandwich_table_headers(&self) -> [&'static str; 4] {
        match self.lang {
            Language::English => ["Name", "Ingredients", "Price (small)", "Price (medium)"],
            Language::Dutch => ["Naam", "Ingrediënten", "Prijs (klein)", "Prijs (medium)"],
        }
    }
}

fn fill_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open..].find('}') else {
            break;
        };
        filled.push_str(&rest[..open]);

        let placeholder = &rest[open..=open + len];
        let name = &placeholder[1..placeholder.len() - 1];
        match substitutions.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => filled.push_str(value),
            None => {
                debug_assert!(false, "unresolved placeholder {placeholder} in {template:?}");
                filled.push_str(placeholder);
            }
        }
        rest = &rest[open + len + 1..];
    }

    filled.push_str(rest);
    filled
}
