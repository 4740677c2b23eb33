use log::debug;
use scraper::Html;

use crate::extractors::{
    extract_structured, section_items, vendor_items, PageMeta, RecipeField,
    INGREDIENT_HEADINGS, STEP_HEADINGS,
};
use crate::model::ExtractedRecipe;

/// Run the extraction cascade over a fetched page. Strategies run in
/// strictly decreasing confidence order and only ever fill fields that are
/// still empty; nothing overwrites a higher-priority result.
///
/// Returns `None` when title, ingredients and steps all come up empty, so
/// the caller reports not-found instead of an empty success payload.
pub fn extract_recipe(html: &str, source_url: &str) -> Option<ExtractedRecipe> {
    let document = Html::parse_document(html);

    let mut recipe = ExtractedRecipe {
        source_url: source_url.to_string(),
        ..Default::default()
    };

    // 1. Structured data, used verbatim where present
    if let Some(structured) = extract_structured(&document) {
        recipe.title = structured.title;
        recipe.image = structured.image;
        recipe.ingredients = structured.ingredients;
        recipe.steps = structured.steps;
        recipe.servings = structured.servings;
    }

    // 2. Vendor markup for list fields still missing
    if recipe.ingredients.is_none() {
        recipe.ingredients = non_empty(vendor_items(&document, RecipeField::Ingredients));
    }
    if recipe.steps.is_none() {
        recipe.steps = non_empty(vendor_items(&document, RecipeField::Instructions));
    }

    // 3. Heading heuristics for whatever is still missing
    if recipe.ingredients.is_none() {
        recipe.ingredients = non_empty(section_items(&document, INGREDIENT_HEADINGS));
    }
    if recipe.steps.is_none() {
        recipe.steps = non_empty(section_items(&document, STEP_HEADINGS));
    }

    // 4. Page metadata closes remaining title/image gaps
    if recipe.title.is_none() || recipe.image.is_none() {
        let meta = PageMeta::from_document(&document);
        if recipe.title.is_none() {
            recipe.title = meta.title;
        }
        if recipe.image.is_none() {
            recipe.image = meta.image;
        }
    }

    if recipe.is_empty() {
        debug!("All strategies exhausted without usable fields for {source_url}");
        None
    } else {
        Some(recipe)
    }
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
