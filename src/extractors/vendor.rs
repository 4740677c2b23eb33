use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::RecipeField;
use crate::text::element_text;

// Known recipe-plugin container classes, most specific plugins first.
// WPRM = WordPress Recipe Maker, Tasty = Tasty Recipes, mv = Mediavine Create.
const INGREDIENT_CLASSES: &[&str] = &[
    "wprm-recipe-ingredients",
    "wprm-recipe-ingredients-container",
    "tasty-recipes-ingredients",
    "mv-create-ingredients",
    "recipe-ingredients",
    "recipe-ingredient-list",
];

const INSTRUCTION_CLASSES: &[&str] = &[
    "wprm-recipe-instructions",
    "wprm-recipe-instructions-container",
    "tasty-recipes-instructions",
    "mv-create-instructions",
    "recipe-instructions",
    "recipe-directions",
];

// Fuzzy class/id substring fallbacks, least reliable, tried last.
const INGREDIENT_PATTERNS: &[&str] = &["ingredient"];
const INSTRUCTION_PATTERNS: &[&str] = &["instruction", "direction", "method"];

/// Pattern-match known recipe-plugin containers for one field. Patterns are
/// tried in fixed priority order; the first one yielding any non-empty result
/// wins, and results are never merged across patterns.
pub fn vendor_items(document: &Html, field: RecipeField) -> Vec<String> {
    let (classes, patterns) = match field {
        RecipeField::Ingredients => (INGREDIENT_CLASSES, INGREDIENT_PATTERNS),
        RecipeField::Instructions => (INSTRUCTION_CLASSES, INSTRUCTION_PATTERNS),
    };

    for class in classes {
        let selector = Selector::parse(&format!(".{class}")).unwrap();
        for container in document.select(&selector) {
            let items = container_items(container);
            if !items.is_empty() {
                debug!("Vendor markup hit for {field:?}: class {class}");
                return items;
            }
        }
    }

    for pattern in patterns {
        let selector =
            Selector::parse(&format!("[class*='{pattern}'], [id*='{pattern}']")).unwrap();
        for container in document.select(&selector) {
            let items = container_items(container);
            if !items.is_empty() {
                debug!("Vendor markup hit for {field:?}: fuzzy pattern {pattern}");
                return items;
            }
        }
    }

    Vec::new()
}

/// List-item texts within a container; paragraph texts when it holds no list.
fn container_items(container: ElementRef) -> Vec<String> {
    let li_selector = Selector::parse("li").unwrap();
    let items: Vec<String> = container
        .select(&li_selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    if !items.is_empty() {
        return items;
    }

    let p_selector = Selector::parse("p").unwrap();
    container
        .select(&p_selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}
