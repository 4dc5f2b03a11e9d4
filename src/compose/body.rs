use crate::library::{LengthProfile, ToneProfile};
use crate::text::tokenize;
use crate::PostInput;

/// Builds the body paragraphs: a hook, an optional talking-points paragraph,
/// and an optional proof-point paragraph, capped by the length profile.
pub fn build_body(
    input: &PostInput,
    tone: &ToneProfile,
    length: &LengthProfile,
    seed: u32,
) -> Vec<String> {
    let key_points = tokenize(&input.key_points);
    let proof = tokenize(&input.proof_points);
    let lens = input.intent.profile().reason_lens(seed + 17);

    let audience = if input.audience.is_empty() {
        "operators"
    } else {
        input.audience.as_str()
    };

    let mut hook_sentences = vec![format!(
        "Here is the tension we're seeing for {}: {}.",
        audience, lens
    )];
    hook_sentences.push(if input.outcome.is_empty() {
        "This is where the opportunity is building momentum.".to_string()
    } else {
        format!("We’re focused on {}.", input.outcome.trim())
    });
    let hook = hook_sentences
        .into_iter()
        .take(length.max_hook_sentences)
        .collect::<Vec<_>>()
        .join(" ");

    let mut paragraphs = vec![hook];

    if !key_points.is_empty() {
        let selected: Vec<&String> = key_points.iter().take(length.detail_bullets).collect();
        let body = selected
            .iter()
            .enumerate()
            .map(|(idx, point)| {
                let emphasis = if idx == 0 {
                    "First up"
                } else if idx == 1 {
                    "Plus"
                } else if idx == selected.len() - 1 {
                    "Finally"
                } else {
                    "Also"
                };
                format!("{}: {}", emphasis, point)
            })
            .collect::<Vec<_>>()
            .join(" ");
        paragraphs.push(body);
    }

    if !proof.is_empty() {
        let proof_sentence = proof
            .iter()
            .take(2)
            .map(|item| item.trim_start_matches(['•', '-']).trim().to_string())
            .collect::<Vec<_>>()
            .join(" · ");
        let period = if tone.cadence.contains("confident") {
            "."
        } else {
            ""
        };
        paragraphs.push(format!("Why it matters: {}{}", proof_sentence, period));
    }

    paragraphs.truncate(length.paragraph_limit);
    paragraphs
}
