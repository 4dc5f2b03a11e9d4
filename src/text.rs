use thiserror::Error;

/// Returned by [`pick`] when the candidate pool is empty. The built-in phrase
/// tables are never empty, so this only surfaces for dynamically built pools
/// whose callers skipped the emptiness check.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot pick from an empty candidate list")]
pub struct EmptyInputError;

/// Rolling 31-multiplier hash over UTF-16 code units with wrapping 32-bit
/// signed arithmetic, folded to a non-negative seed.
pub fn hash_text(value: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in value.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Deterministic index selection: `items[seed % len]`.
pub fn pick<T>(items: &[T], seed: u32) -> Result<&T, EmptyInputError> {
    if items.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(&items[seed as usize % items.len()])
}

/// Splits free text on newlines, commas, bullet glyphs, and hyphens into
/// trimmed non-empty tokens, preserving source order.
pub fn tokenize(value: &str) -> Vec<String> {
    value
        .split(|c: char| matches!(c, '\n' | ',' | '•' | '-'))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Capitalizes the first letter of each space-separated word, lowercases the
/// rest, and joins the words without separators ("sales enablement" becomes
/// "SalesEnablement").
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Replaces every run of whitespace with a single space.
pub fn collapse_whitespace(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(ch);
            in_whitespace = false;
        }
    }
    result
}
