// WHY: Phrase lookup compares against a normalized sentence, kept separate from splitting
// so the raw sentence can be echoed back untouched

/// Normalize a sentence for phrase lookup: trim surrounding whitespace, lowercase
pub fn normalize_for_match(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_for_match_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to avoid allocation
/// WHY: enables buffer reuse when a request carries many sentences
pub fn normalize_for_match_into(text: &str, buffer: &mut String) {
    buffer.clear();
    let trimmed = text.trim();
    buffer.reserve(trimmed.len());

    for ch in trimmed.chars() {
        if ch.is_ascii() {
            buffer.push(ch.to_ascii_lowercase());
        } else {
            buffer.extend(ch.to_lowercase());
        }
    }
}
