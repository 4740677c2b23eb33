//! Extraction strategies, in decreasing order of confidence: structured
//! data (JSON-LD), known vendor recipe-plugin markup, heading heuristics,
//! and page-level metadata. Each strategy yields whatever it can; the
//! pipeline reconciles them.

mod headings;
mod json_ld;
mod page_meta;
mod vendor;

pub use headings::{section_items, INGREDIENT_HEADINGS, STEP_HEADINGS};
pub use json_ld::{extract_structured, StructuredRecipe};
pub use page_meta::PageMeta;
pub use vendor::vendor_items;

/// The list-valued recipe fields the markup-based strategies can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    Ingredients,
    Instructions,
}
