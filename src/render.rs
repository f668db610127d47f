//! Turns menus into the localized report printed to the terminal.
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

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use prettytable::{format, Cell, Row, Table};

use crate::{
    date::DATE_FORMAT,
    i18n::{MessageKey, Translator},
    menu::{Meal, MealKind, MealType, Menu, Sandwich},
};

/// Blocks of the report are separated by one blank line
const BLOCK_SEPARATOR: &str = "\n\n";

/// Position of a meal type in the report, unknown types go last
fn type_rank(meal_type: &MealType) -> usize {
    match meal_type {
        MealType::Main => 0,
        MealType::Side => 1,
        MealType::Cold => 2,
        MealType::Other(_) => 3,
    }
}

/// Position of a meal kind within its type group, unknown kinds go last
fn kind_rank(kind: &MealKind) -> usize {
    match kind {
        MealKind::Meat => 0,
        MealKind::Fish => 1,
        MealKind::Vegetarian => 2,
        MealKind::Vegan => 3,
        MealKind::Soup => 4,
        MealKind::Other(_) => 5,
    }
}

/// Renders the menu of one day
///
/// # Arguments
/// * `menu` - Menu as received from the endpoint
/// * `translator` - Catalog bound to the configured language
/// * `hidden` - Meal kinds left out of the table
/// * `date` - Day the menu belongs to
///
/// # Returns
/// * The report: closed notice or header, meal table, vegetables and the
///   operator message, separated by blank lines
pub fn render_menu(
    menu: &Menu,
    translator: &Translator,
    hidden: &HashSet<MealKind>,
    date: NaiveDate,
) -> String {
    let day = date.format(DATE_FORMAT).to_string();
    let mut blocks = Vec::new();

    if !menu.is_open() {
        blocks.push(translator.message(MessageKey::RestoClosed, &[("day", day.as_str())]));
    } else {
        let weekday = translator.weekday(date.weekday());
        blocks.push(translator.message(MessageKey::MenuFor, &[("weekday", weekday), ("day", day.as_str())]));

        let meals = ordered_meals(menu.meals(), hidden);
        if !meals.is_empty() {
            blocks.push(meal_table(&meals, translator));
        }

        if !menu.vegetables().is_empty() {
            let vegetables = menu
                .vegetables()
                .iter()
                .map(|vegetable| format!("- {}", vegetable))
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push(translator.message(MessageKey::Vegetables, &[("vegetables", vegetables.as_str())]));
        }
    }

    if let Some(extra) = menu.message() {
        blocks.push(translator.message(MessageKey::ExtraMessage, &[("extra", extra)]));
    }

    blocks.join(BLOCK_SEPARATOR)
}

/// Drops hidden kinds and orders by type (main, side, cold), then by kind
/// (meat, fish, vegetarian, vegan, soup). The sort is stable, so meals that
/// share both keep the order they arrived in.
pub fn ordered_meals<'a>(meals: &'a [Meal], hidden: &HashSet<MealKind>) -> Vec<&'a Meal> {
    let mut visible: Vec<&Meal> = meals
        .iter()
        .filter(|meal| !hidden.contains(meal.kind()))
        .collect();

    visible.sort_by_key(|meal| (type_rank(meal.meal_type()), kind_rank(meal.kind())));
    visible
}

fn meal_table(meals: &[&Meal], translator: &Translator) -> String {
    let mut table = new_table(translator.menu_table_headers());

    for meal in meals {
        table.add_row(Row::new(vec![
            Cell::new(translator.meal_type(meal.meal_type())),
            Cell::new(translator.kind(meal.kind())),
            Cell::new(meal.name()),
            Cell::new(meal.price()),
        ]));
    }

    table.to_string().trim_end().to_string()
}

/// Renders the sandwich list sorted by name, with title-cased names and
/// alphabetically sorted ingredients
pub fn render_sandwiches(sandwiches: &[Sandwich], translator: &Translator) -> String {
    let mut sorted: Vec<&Sandwich> = sandwiches.iter().collect();
    sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut table = new_table(translator.sandwich_table_headers());
    for sandwich in sorted {
        let mut ingredients: Vec<String> = sandwich.ingredients.iter().map(|i| title_case(i)).collect();
        ingredients.sort();

        table.add_row(Row::new(vec![
            Cell::new(&title_case(&sandwich.name)),
            Cell::new(&ingredients.join(", ")),
            Cell::new(&sandwich.price_small),
            Cell::new(&sandwich.price_medium),
        ]));
    }

    table.to_string().trim_end().to_string()
}

fn new_table(headers: [&str; 4]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    table
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
    }

    fn english() -> Translator {
        Translator::new(Language::English)
    }

    fn sample_meals() -> Vec<Meal> {
        vec![
            Meal::new(MealKind::Soup, "Tomato soup", "1,00", MealType::Side),
            Meal::new(MealKind::Vegan, "Lentil curry", "4,20", MealType::Main),
            Meal::new(MealKind::Meat, "Beef stew", "€ 5,60", MealType::Main),
            Meal::new(MealKind::Fish, "Tuna salad", "4,80", MealType::Cold),
            Meal::new(MealKind::Fish, "Fish fingers", "5,00", MealType::Main),
        ]
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not in:\n{haystack}"))
    }

    #[test]
    fn orders_by_type_then_kind() {
        let meals = sample_meals();
        let names: Vec<&str> = ordered_meals(&meals, &HashSet::new())
            .iter()
            .map(|m| m.name())
            .collect();

        assert_eq!(
            names,
            ["Beef stew", "Fish fingers", "Lentil curry", "Tomato soup", "Tuna salad"]
        );
    }

    #[test]
    fn unknown_kinds_go_last_in_arrival_order() {
        let meals = vec![
            Meal::new(MealKind::Other("dessert".into()), "Pudding", "", MealType::Main),
            Meal::new(MealKind::Soup, "Soup", "", MealType::Main),
            Meal::new(MealKind::Other("snack".into()), "Fries", "", MealType::Main),
            Meal::new(MealKind::Meat, "Steak", "", MealType::Main),
        ];
        let names: Vec<&str> = ordered_meals(&meals, &HashSet::new())
            .iter()
            .map(|m| m.name())
            .collect();

        assert_eq!(names, ["Steak", "Soup", "Pudding", "Fries"]);
    }

    #[test]
    fn unknown_types_go_after_cold_in_arrival_order() {
        let meals = vec![
            Meal::new(MealKind::Vegan, "Chocolate mousse", "", MealType::Other("sweet".into())),
            Meal::new(MealKind::Fish, "Tuna salad", "", MealType::Cold),
            Meal::new(MealKind::Vegan, "Waffle", "", MealType::Other("sweet".into())),
            Meal::new(MealKind::Vegetarian, "Quiche", "", MealType::Main),
        ];
        let names: Vec<&str> = ordered_meals(&meals, &HashSet::new())
            .iter()
            .map(|m| m.name())
            .collect();

        assert_eq!(names, ["Quiche", "Tuna salad", "Chocolate mousse", "Waffle"]);
    }

    #[test]
    fn hidden_kinds_are_dropped() {
        let meals = vec![
            Meal::new(MealKind::Soup, "Pea soup", "1,00", MealType::Main),
            Meal::new(MealKind::Vegan, "Tofu bowl", "4,00", MealType::Main),
            Meal::new(MealKind::Meat, "Meatballs", "5,00", MealType::Main),
        ];
        let menu = Menu::new(true, meals, vec![], None);
        let hidden = HashSet::from([MealKind::Soup]);

        let report = render_menu(&menu, &english(), &hidden, monday());

        assert!(!report.contains("Pea soup"));
        assert!(position(&report, "Meatballs") < position(&report, "Tofu bowl"));
    }

    #[test]
    fn closed_menu_has_no_table() {
        let menu = Menu::new(false, sample_meals(), vec!["Carrots".into()], None);

        let report = render_menu(&menu, &english(), &HashSet::new(), monday());

        assert_eq!(report, "The restaurants are closed on 26/10/2026.");
        assert!(!report.contains("Price"));
        assert!(!report.contains("Beef stew"));
    }

    #[test]
    fn closed_menu_keeps_operator_message() {
        let menu = Menu::new(false, sample_meals(), vec![], Some("Closed for renovation".into()));

        let report = render_menu(&menu, &english(), &HashSet::new(), monday());

        assert_eq!(
            report,
            "The restaurants are closed on 26/10/2026.\n\nExtra message:\nClosed for renovation"
        );
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let menu = Menu::new(
            true,
            sample_meals(),
            vec!["Carrots".into(), "Peas".into()],
            Some("Cash only today".into()),
        );

        let report = render_menu(&menu, &english(), &HashSet::new(), monday());

        assert!(report.starts_with("Menu for Monday 26/10/2026:\n\n"));
        let header = position(&report, "Menu for");
        let table = position(&report, "Beef stew");
        let vegetables = position(&report, "Vegetables:\n- Carrots\n- Peas");
        let extra = position(&report, "Extra message:\nCash only today");
        assert!(header < table && table < vegetables && vegetables < extra);
    }

    #[test]
    fn table_uses_localized_labels() {
        let menu = Menu::new(true, sample_meals(), vec!["Wortelen".into()], None);

        let report = render_menu(&menu, &Translator::new(Language::Dutch), &HashSet::new(), monday());

        assert!(report.starts_with("Menu voor maandag 26/10/2026:"));
        for label in ["Soort", "Naam", "Prijs", "Hoofdgerecht", "Vlees", "Bijgerecht", "Soep", "Koud"] {
            assert!(report.contains(label), "missing {label}");
        }
        assert!(report.contains("€ 5,60"));
        assert!(report.ends_with("Groenten:\n- Wortelen"));
    }

    #[test]
    fn everything_hidden_leaves_header_only() {
        let menu = Menu::new(
            true,
            vec![Meal::new(MealKind::Soup, "Soup", "1,00", MealType::Side)],
            vec![],
            None,
        );
        let hidden = HashSet::from([MealKind::Soup]);

        let report = render_menu(&menu, &english(), &hidden, monday());

        assert_eq!(report, "Menu for Monday 26/10/2026:");
    }

    #[test]
    fn sandwiches_sorted_and_title_cased() {
        let sandwiches = vec![
            Sandwich {
                name: "smos kaas".into(),
                ingredients: vec!["tomaat".into(), "kaas".into()],
                price_small: "€ 2,10".into(),
                price_medium: "€ 3,40".into(),
            },
            Sandwich {
                name: "Brie".into(),
                ingredients: vec!["walnoten".into(), "brie".into(), "honing".into()],
                price_small: "€ 2,60".into(),
                price_medium: "€ 3,90".into(),
            },
        ];

        let table = render_sandwiches(&sandwiches, &english());

        assert!(table.contains("Ingredients"));
        assert!(table.contains("Brie, Honing, Walnoten"));
        assert!(table.contains("Kaas, Tomaat"));
        assert!(position(&table, "Brie") < position(&table, "Smos Kaas"));
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("SMOS  kaas"), "Smos Kaas");
        assert_eq!(title_case(""), "");
    }
}
