use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::text::{decode_entities, first_decimal_number};

/// Fields pulled out of a schema.org `Recipe` node. Used verbatim by the
/// cascade as its highest-confidence source.
#[derive(Debug, Clone, Default)]
pub struct StructuredRecipe {
    pub title: Option<String>,
    pub image: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub servings: Option<f64>,
}

/// Scan every `application/ld+json` block for the first node whose `@type`
/// includes `"Recipe"`, in document order. No match is not an error; the
/// caller falls through to the lower-confidence strategies.
pub fn extract_structured(document: &Html) -> Option<StructuredRecipe> {
    let selector = Selector::parse("script[type='application/ld+json']").unwrap();

    for script in document.select(&selector) {
        let raw = script.inner_html();
        for candidate in parse_candidates(&raw) {
            let mut nodes = Vec::new();
            flatten_nodes(&candidate, &mut nodes);

            if let Some(node) = nodes.into_iter().find(|n| is_recipe_node(n)) {
                debug!("Found schema.org/Recipe node in JSON-LD block");
                return Some(normalize_node(node));
            }
        }
    }

    None
}

/// Parse one script block into candidate value trees. If the block as a whole
/// is not valid JSON, split it into top-level fragments (some pages
/// concatenate multiple JSON documents in a single script) and parse each
/// independently. Fragments that still fail to parse are dropped silently.
fn parse_candidates(raw: &str) -> Vec<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return vec![value];
    }

    debug!("JSON-LD block is not a single document, trying fragment split");
    split_fragments(raw)
        .into_iter()
        .filter_map(|fragment| serde_json::from_str(&fragment).ok())
        .collect()
}

/// Split a block at newlines that are followed by a top-level `{` or `[`.
fn split_fragments(raw: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    for line in raw.lines() {
        let opens_document = matches!(line.trim_start().chars().next(), Some('{') | Some('['));
        match fragments.last_mut() {
            Some(current) if !opens_document => {
                current.push('\n');
                current.push_str(line);
            }
            _ => fragments.push(line.to_string()),
        }
    }

    fragments
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

/// Flatten a parsed tree into candidate nodes, depth-first and
/// order-preserving. An object contributes itself, then whatever hangs off
/// its `@graph` collection, then its `itemListElement` container.
fn flatten_nodes<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_nodes(item, out);
            }
        }
        Value::Object(map) => {
            out.push(value);
            if let Some(graph) = map.get("@graph") {
                flatten_nodes(graph, out);
            }
            if let Some(items) = map.get("itemListElement") {
                flatten_nodes(items, out);
            }
        }
        _ => {}
    }
}

/// `@type` may be a single string or an array of strings; both count.
fn is_recipe_node(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => false,
    }
}

fn normalize_node(node: &Value) -> StructuredRecipe {
    let title = node
        .get("name")
        .or_else(|| node.get("headline"))
        .and_then(Value::as_str)
        .map(decode_entities)
        .filter(|t| !t.is_empty());

    let image = node.get("image").and_then(normalize_image);

    let ingredients = node
        .get("recipeIngredient")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(decode_entities)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty());

    let mut steps = Vec::new();
    if let Some(instructions) = node.get("recipeInstructions") {
        flatten_instructions(instructions, &mut steps);
    }
    let steps = if steps.is_empty() { None } else { Some(steps) };

    let servings = node.get("recipeYield").and_then(parse_servings);

    StructuredRecipe {
        title,
        image,
        ingredients,
        steps,
        servings,
    }
}

/// The image field has at least three shapes in the wild: a plain URL
/// string, an array of URLs or image objects, or a single image object.
fn normalize_image(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(url) => Some(url.as_str()),
        Value::Array(items) => match items.first()? {
            Value::String(url) => Some(url.as_str()),
            Value::Object(obj) => obj.get("url").and_then(Value::as_str),
            _ => None,
        },
        Value::Object(obj) => obj
            .get("url")
            .or_else(|| obj.get("@id"))
            .and_then(Value::as_str),
        _ => None,
    };

    url.map(decode_entities).filter(|u| !u.is_empty())
}

/// Flatten `recipeInstructions` into an ordered list of plain strings.
/// Handles plain strings, arrays, HowToStep-style objects with a `text` key,
/// and HowToSection-style objects nesting steps under `itemListElement`.
fn flatten_instructions(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(step) => {
            let step = decode_entities(step.trim());
            if !step.is_empty() {
                out.push(step);
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten_instructions(item, out);
            }
        }
        Value::Object(obj) => {
            if let Some(text) = obj.get("text").and_then(Value::as_str) {
                let step = decode_entities(text.trim());
                if !step.is_empty() {
                    out.push(step);
                }
            } else if let Some(items) = obj.get("itemListElement") {
                flatten_instructions(items, out);
            }
        }
        _ => {}
    }
}

/// `recipeYield` is a number or a string like "4 servings" / "4,5 portioner".
/// Unparseable input leaves servings absent, never an error.
fn parse_servings(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => first_decimal_number(s),
        Value::Array(items) => items.first().and_then(parse_servings),
        _ => None,
    }
}
