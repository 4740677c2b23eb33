use html_escape::decode_html_entities;
use scraper::ElementRef;

/// Collapse all runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of an element: text nodes joined, whitespace collapsed.
pub fn element_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Decode HTML entities in a string that came out of a structured-data block.
pub fn decode_entities(text: &str) -> String {
    // some sites double-encode; decoding twice gets the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Extract the first decimal number from a string, accepting both `.` and `,`
/// as the decimal separator. `"4 servings"` -> 4.0, `"ca 4,5 port"` -> 4.5.
pub fn first_decimal_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // optional fractional part after a single separator
    if end < bytes.len()
        && (bytes[end] == b'.' || bytes[end] == b',')
        && end + 1 < bytes.len()
        && bytes[end + 1].is_ascii_digit()
    {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end].replace(',', ".").parse().ok()
}
