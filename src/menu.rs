//! Menu data model as served by the restaurant endpoint.
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

use std::fmt;

use serde::{de::Visitor, Deserialize, Deserializer};

/// Currency marker every normalized price starts with
pub const CURRENCY: &str = "€";

/// Dietary classification of a dish
///
/// Labels outside the known set are kept verbatim in [`MealKind::Other`]
/// so a new category on the endpoint never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum MealKind {
    Fish,
    Meat,
    Soup,
    Vegan,
    Vegetarian,
    Other(String),
}

impl MealKind {
    /// Every known kind, in label order
    pub const ALL: [MealKind; 5] = [
        MealKind::Fish,
        MealKind::Meat,
        MealKind::Soup,
        MealKind::Vegan,
        MealKind::Vegetarian,
    ];

    /// Looks up a known kind by its label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match MealKind::from(label.trim().to_lowercase()) {
            MealKind::Other(_) => None,
            kind => Some(kind),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MealKind::Fish => "fish",
            MealKind::Meat => "meat",
            MealKind::Soup => "soup",
            MealKind::Vegan => "vegan",
            MealKind::Vegetarian => "vegetarian",
            MealKind::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for MealKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fish" => MealKind::Fish,
            "meat" => MealKind::Meat,
            "soup" => MealKind::Soup,
            "vegan" => MealKind::Vegan,
            "vegetarian" => MealKind::Vegetarian,
            _ => MealKind::Other(value),
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serving slot of a dish
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum MealType {
    Cold,
    Main,
    Side,
    Other(String),
}

impl MealType {
    pub fn label(&self) -> &str {
        match self {
            MealType::Cold => "cold",
            MealType::Main => "main",
            MealType::Side => "side",
            MealType::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cold" => MealType::Cold,
            "main" => MealType::Main,
            "side" => MealType::Side,
            _ => MealType::Other(value),
        }
    }
}

/// A single dish on the menu
///
/// The price is normalized once, when the meal is built or deserialized,
/// and the value is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meal {
    kind: MealKind,
    /// Free text, may carry a size suffix like "Carrot soup: 350 ml"
    name: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: String,
    #[serde(rename = "type")]
    meal_type: MealType,
}

impl Meal {
    pub fn new(
        kind: MealKind,
        name: impl Into<String>,
        price: impl Into<String>,
        meal_type: MealType,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            price: normalize_price(&price.into()),
            meal_type,
        }
    }

    pub fn kind(&self) -> &MealKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn meal_type(&self) -> &MealType {
        &self.meal_type
    }
}

/// The full report for one day
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Menu {
    /// Whether the restaurants serve food that day
    open: bool,
    #[serde(default)]
    meals: Vec<Meal>,
    #[serde(default)]
    vegetables: Vec<String>,
    /// Operator announcement
    #[serde(default)]
    message: Option<String>,
}

impl Menu {
    pub fn new(
        open: bool,
        meals: Vec<Meal>,
        vegetables: Vec<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            open,
            meals,
            vegetables,
            message,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Meals in the order the endpoint sent them
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn vegetables(&self) -> &[String] {
        &self.vegetables
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// A sandwich from the fixed sandwich list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sandwich {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub price_small: String,
    #[serde(default)]
    pub price_medium: String,
}

/// Prepends the currency marker to a bare amount.
///
/// Empty prices and prices that already carry the marker are returned unchanged,
/// so normalizing twice yields the same string.
pub fn normalize_price(price: &str) -> String {
    let trimmed = price.trim();
    if trimmed.is_empty() || trimmed.contains(CURRENCY) {
        return trimmed.to_string();
    }
    format!("{} {}", CURRENCY, trimmed)
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PriceVisitor)
}

/// Accepts prices sent either as text or as a bare number.
struct PriceVisitor;

impl<'a> Visitor<'a> for PriceVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a price like \"€ 1,00\", \"1,00\" or 1.0")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(normalize_price(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(normalize_price(&format!("{:.2}", v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(normalize_price(&v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(normalize_price(&v.to_string()))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(String::new())
    }
}
