use crate::library::ToneProfile;
use crate::text::collapse_whitespace;
use crate::PostInput;

/// Composes the one-line headline: intent prefix, tone hook verb, topic,
/// and an optional audience suffix.
pub fn build_headline(input: &PostInput, tone: &ToneProfile, seed: u32) -> String {
    let profile = input.intent.profile();
    let prefix = profile.headline_prefix(seed);
    let verb = tone.hook_verb(seed + 11);

    let topic = if input.topic.is_empty() {
        "the shift we're seeing"
    } else {
        input.topic.as_str()
    };
    let topic = topic.strip_suffix(['.', '!', '?']).unwrap_or(topic);

    let headline = if input.audience.is_empty() {
        format!("{} {} {}", prefix, verb, topic)
    } else {
        format!("{} {} {} for {}", prefix, verb, topic, input.audience)
    };
    collapse_whitespace(&headline)
}
