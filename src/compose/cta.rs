use crate::ContentIntent;

/// Returns the trimmed user call-to-action, or a deterministic fallback from
/// the intent profile when none was supplied.
pub fn resolve_cta(source: &str, intent: ContentIntent, seed: u32) -> String {
    let trimmed = source.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    intent.profile().cta_fallback(seed).to_string()
}
