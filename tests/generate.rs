use std::collections::HashSet;

use postcraft::catalog;
use postcraft::config::ComposerConfig;
use postcraft::{
    generate, generate_with_options, generate_with_salt, ContentIntent, PostInput, PostLength,
};

fn launch_preset() -> PostInput {
    catalog::find_preset("AI feature launch")
        .expect("starter preset exists")
        .payload
}

#[test]
fn generate_is_deterministic() {
    let input = launch_preset();
    assert_eq!(generate_with_salt(&input, 3), generate_with_salt(&input, 3));
    assert_eq!(generate(&input), generate_with_salt(&input, 0));
}

#[test]
fn salt_produces_distinct_variants() {
    let input = launch_preset();
    let posts: HashSet<String> = (0..50)
        .map(|salt| generate_with_salt(&input, salt).post)
        .collect();
    assert!(posts.len() >= 2);
}

#[test]
fn steps_are_always_three() {
    for input in [launch_preset(), PostInput::default()] {
        let output = generate(&input);
        assert_eq!(output.steps.len(), 3);
        assert_eq!(output.steps[0].title, "Audience Lens");
        assert_eq!(output.steps[1].title, "Value Narrative");
        assert_eq!(output.steps[2].title, "Call-To-Action");
        assert!(!output.steps[0].output.is_empty());
    }
}

#[test]
fn unknown_tone_falls_back_to_default_profile() {
    let mut input = launch_preset();
    input.tone = "nonexistent-id".to_string();
    let output = generate(&input);

    // Default profile is professional-optimistic.
    assert!(output.quick_tips[0].contains("warm authority"));
    assert!(output.quick_tips[0].contains("balanced sentences with confident verbs"));
}

#[test]
fn launch_preset_end_to_end() {
    let input = launch_preset();
    let output = generate(&input);

    let prefixes = ContentIntent::Launch.profile().headline_prefixes;
    assert!(prefixes
        .iter()
        .any(|prefix| output.headline.starts_with(prefix)));

    let verbs = ["reimagining", "reinventing", "challenging", "transforming"];
    assert!(verbs.iter().any(|verb| output.headline.contains(verb)));

    assert!(output.post.starts_with("🚀 "));
    assert!(output.post.contains("\n\n👉 "));
    let last_section = output.post.rsplit("\n\n").next().unwrap();
    assert!(last_section.starts_with('#'));

    let candidates = [
        "#Revops",
        "#Ai",
        "#Saas",
        "#Salesenablement",
        "#OurAiCopilotForRevenueTeams",
        "#RevopsLeadersAtHigh",
        "#GrowthSaasCompanies",
    ];
    assert!(!output.hashtags.is_empty());
    assert!(output.hashtags.len() <= 6);
    for tag in &output.hashtags {
        assert!(candidates.contains(&tag.as_str()));
    }
}

#[test]
fn hashtags_have_no_duplicates() {
    for preset in catalog::starter_presets() {
        for salt in 0..10 {
            let output = generate_with_salt(&preset.payload, salt);
            let unique: HashSet<&String> = output.hashtags.iter().collect();
            assert_eq!(unique.len(), output.hashtags.len());
        }
    }
}

#[test]
fn hashtag_count_caps_the_list() {
    let input = launch_preset();
    let output = generate_with_options(&input, 0, 2);
    assert!(output.hashtags.len() <= 2);
}

#[test]
fn empty_input_still_produces_a_post() {
    let input = PostInput::default();
    let output = generate(&input);

    assert!(output.post.starts_with("🚀 "));
    assert!(output.post.contains("👉 "));
    assert!(!output.post.contains('#'));
    assert!(output.hashtags.is_empty());
}

#[test]
fn user_cta_appears_verbatim() {
    let mut input = launch_preset();
    input.call_to_action = "Talk to me".to_string();
    let output = generate(&input);
    assert!(output.post.contains("👉 Talk to me"));
}

#[test]
fn missing_cta_uses_intent_fallback() {
    let mut input = launch_preset();
    input.call_to_action = String::new();
    let output = generate(&input);

    let after = output.post.split("👉 ").nth(1).unwrap();
    let cta_line = after.split("\n\n").next().unwrap();
    let fallbacks = ContentIntent::Launch.profile().cta_fallbacks;
    assert!(fallbacks.contains(&cta_line));
}

#[test]
fn quick_tips_and_recommendations_are_fixed_size() {
    let output = generate(&launch_preset());
    assert_eq!(output.recommendations.len(), 3);
    assert_eq!(output.quick_tips.len(), 3);
}

#[test]
fn catalogs_match_the_form() {
    assert_eq!(catalog::tone_options().len(), 4);
    assert_eq!(catalog::intent_options().len(), 4);
    assert_eq!(catalog::length_options().len(), 3);
    assert_eq!(catalog::starter_presets().len(), 3);
    assert!(catalog::find_preset("hiring call").is_some());
    assert!(catalog::find_preset("unknown").is_none());
}

#[test]
fn length_ids_resolve_with_fallback() {
    assert_eq!(PostLength::resolve("long"), PostLength::Long);
    assert_eq!(PostLength::resolve("weird"), PostLength::Standard);
    assert_eq!(ContentIntent::from_str("launch"), Some(ContentIntent::Launch));
    assert_eq!(ContentIntent::from_str("unknown"), None);
}

#[test]
fn config_defaults_round_trip() {
    let config = ComposerConfig::default();
    assert_eq!(config.defaults.hashtag_count, 6);
    assert_eq!(config.defaults.tone, "professional-optimistic");

    let payload = toml::to_string(&config).unwrap();
    let parsed: ComposerConfig = toml::from_str(&payload).unwrap();
    assert_eq!(parsed, config);
}
