use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::text::element_text;

/// Heading synonyms for the ingredient section, Swedish and English.
pub const INGREDIENT_HEADINGS: &[&str] = &["ingredienser", "ingredients", "ingredient"];

/// Heading synonyms for the instruction section, Swedish and English.
pub const STEP_HEADINGS: &[&str] = &["gör så här", "instructions", "method", "tillagning"];

/// Forward scan budget in characters. Bounds how far past a heading the
/// walk may look for its list, so a missing closing tag or a wall of
/// unrelated content cannot drag in a distant section.
const SCAN_WINDOW: usize = 1000;

/// Find a heading whose visible text contains one of the synonyms
/// (case-insensitive) and capture the block that follows it: the first
/// `<ul>` or `<ol>`, or a run of consecutive `<p>` elements, within the
/// scan window. The first matching heading with a non-empty capture wins.
pub fn section_items(document: &Html, synonyms: &[&str]) -> Vec<String> {
    let heading_selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();

    for heading in document.select(&heading_selector) {
        let text = element_text(heading).to_lowercase();
        if !synonyms.iter().any(|synonym| text.contains(synonym)) {
            continue;
        }

        let items = capture_following_block(document, heading);
        if !items.is_empty() {
            debug!("Heading heuristic hit: \"{text}\" ({} items)", items.len());
            return items;
        }
    }

    Vec::new()
}

/// Walk the document in order from just past the heading's subtree, charging
/// text length plus a small per-element cost against the window, until a
/// capturable block turns up or the budget runs out.
fn capture_following_block(document: &Html, heading: ElementRef) -> Vec<String> {
    let heading_id = heading.id();
    let mut past_heading = false;
    let mut consumed = 0usize;

    for node in document.root_element().descendants() {
        if node.id() == heading_id {
            past_heading = true;
            continue;
        }
        if !past_heading || node.ancestors().any(|a| a.id() == heading_id) {
            continue;
        }

        if let Some(element) = ElementRef::wrap(node) {
            match element.value().name() {
                "ul" | "ol" => return list_items(element),
                "p" => return paragraph_run(element),
                name => consumed += name.len() + 2,
            }
        } else if let Some(text) = node.value().as_text() {
            consumed += text.len();
        }

        if consumed > SCAN_WINDOW {
            break;
        }
    }

    Vec::new()
}

fn list_items(list: ElementRef) -> Vec<String> {
    let li_selector = Selector::parse("li").unwrap();
    list.select(&li_selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// The captured paragraph plus any directly following sibling paragraphs.
fn paragraph_run(first: ElementRef) -> Vec<String> {
    let mut items = Vec::new();
    let text = element_text(first);
    if !text.is_empty() {
        items.push(text);
    }

    let mut sibling = first.next_sibling();
    while let Some(node) = sibling {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() != "p" {
                break;
            }
            let text = element_text(element);
            if !text.is_empty() {
                items.push(text);
            }
        } else if let Some(text) = node.value().as_text() {
            // whitespace between paragraphs does not end the run
            if !text.trim().is_empty() {
                break;
            }
        }
        sibling = node.next_sibling();
    }

    items
}
