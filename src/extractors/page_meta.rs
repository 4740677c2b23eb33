use scraper::{Html, Selector};

use crate::text::{collapse_whitespace, element_text};

/// Page-level fallback metadata: the social-preview tags, else the document
/// title. Lowest-confidence source, only used for gaps the other strategies
/// left open.
#[derive(Debug, Default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub image: Option<String>,
}

impl PageMeta {
    pub fn from_document(document: &Html) -> Self {
        let title = meta_content(document, "og:title")
            .or_else(|| document_title(document));
        let image = meta_content(document, "og:image");

        PageMeta { title, image }
    }
}

fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!("meta[property='{property}']")).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(collapse_whitespace)
        .filter(|content| !content.is_empty())
}

fn document_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .next()
        .map(element_text)
        .filter(|title| !title.is_empty())
}
