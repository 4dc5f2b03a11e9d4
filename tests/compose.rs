use postcraft::compose::{build_body, build_hashtags, build_headline, resolve_cta};
use postcraft::library::ToneProfile;
use postcraft::text::{collapse_whitespace, hash_text, pick, title_case, tokenize, EmptyInputError};
use postcraft::{ContentIntent, PostInput, PostLength};

fn launch_input() -> PostInput {
    PostInput {
        topic: "our AI copilot for revenue teams".to_string(),
        audience: "RevOps leaders".to_string(),
        outcome: "close loops between data and action".to_string(),
        key_points: "one\ntwo\nthree".to_string(),
        proof_points: "saved 7 hours per week • lifted win rates by 8%".to_string(),
        tone: "bold-visionary".to_string(),
        call_to_action: String::new(),
        hashtags: "revops,AI".to_string(),
        intent: ContentIntent::Launch,
        length: PostLength::Standard,
    }
}

#[test]
fn hash_is_stable_and_nonnegative() {
    assert_eq!(hash_text(""), 0);
    assert_eq!(hash_text("a"), 97);
    assert_eq!(hash_text("ab"), 97 * 31 + 98);
    assert_eq!(hash_text("topic|audience"), hash_text("topic|audience"));
}

#[test]
fn pick_selects_by_modulo() {
    let items = ["a", "b", "c"];
    assert_eq!(pick(&items, 4), Ok(&"b"));
    assert_eq!(pick(&items, 3), Ok(&"a"));
}

#[test]
fn pick_rejects_empty_list() {
    let items: [&str; 0] = [];
    assert_eq!(pick(&items, 0), Err(EmptyInputError));
}

#[test]
fn tokenize_splits_on_all_delimiters() {
    assert_eq!(tokenize("a, b\nc•d-e"), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn tokenize_drops_empty_pieces() {
    assert!(tokenize(",,  ,\n--").is_empty());
}

#[test]
fn title_case_joins_words_without_spaces() {
    assert_eq!(title_case("sales enablement"), "SalesEnablement");
    assert_eq!(title_case("AI"), "Ai");
    assert_eq!(title_case("  spaced  out "), "SpacedOut");
}

#[test]
fn collapse_whitespace_folds_runs() {
    assert_eq!(collapse_whitespace("a  b\t c"), "a b c");
}

#[test]
fn headline_strips_trailing_punctuation() {
    let mut input = launch_input();
    input.topic = "Growth loops!".to_string();
    input.audience = "founders".to_string();
    let tone = ToneProfile::resolve("bold-visionary");

    let headline = build_headline(&input, tone, 7);

    assert!(headline.ends_with("Growth loops for founders"));
    assert!(!headline.contains('!'));
    let prefixes = ContentIntent::Launch.profile().headline_prefixes;
    assert!(prefixes.iter().any(|prefix| headline.starts_with(prefix)));
    assert!(tone.hook_verbs.iter().any(|verb| headline.contains(verb)));
}

#[test]
fn headline_falls_back_on_empty_topic() {
    let mut input = launch_input();
    input.topic = String::new();
    input.audience = String::new();
    let tone = ToneProfile::resolve("bold-visionary");

    let headline = build_headline(&input, tone, 7);

    assert!(headline.contains("the shift we're seeing"));
    assert!(!headline.contains(" for "));
}

#[test]
fn body_uses_positional_connectors() {
    let input = launch_input();
    let tone = ToneProfile::resolve("bold-visionary");
    let paragraphs = build_body(&input, tone, PostLength::Standard.profile(), 19);

    let points = &paragraphs[1];
    assert!(points.contains("First up: one"));
    assert!(points.contains("Plus: two"));
    assert!(points.contains("Finally: three"));
}

#[test]
fn body_marks_middle_points_with_also() {
    let mut input = launch_input();
    input.key_points = "one\ntwo\nthree\nfour".to_string();
    input.length = PostLength::Long;
    let tone = ToneProfile::resolve("bold-visionary");
    let paragraphs = build_body(&input, tone, PostLength::Long.profile(), 19);

    let points = &paragraphs[1];
    assert!(points.contains("Also: three"));
    assert!(points.contains("Finally: four"));
}

#[test]
fn short_length_keeps_only_the_tension_sentence() {
    let input = launch_input();
    let tone = ToneProfile::resolve("bold-visionary");
    let paragraphs = build_body(&input, tone, PostLength::Short.profile(), 19);

    assert!(paragraphs[0].starts_with("Here is the tension we're seeing for"));
    assert!(!paragraphs[0].contains("We’re focused on"));
    assert!(paragraphs.len() <= 2);
}

#[test]
fn hook_mentions_outcome_when_present() {
    let input = launch_input();
    let tone = ToneProfile::resolve("bold-visionary");
    let paragraphs = build_body(&input, tone, PostLength::Standard.profile(), 19);

    assert!(paragraphs[0].contains("We’re focused on close loops between data and action."));
}

#[test]
fn proof_paragraph_period_follows_cadence() {
    let input = launch_input();

    let confident = ToneProfile::resolve("professional-optimistic");
    let paragraphs = build_body(&input, confident, PostLength::Long.profile(), 19);
    let proof = paragraphs.last().unwrap();
    assert!(proof.starts_with("Why it matters: "));
    assert!(proof.contains(" · "));
    assert!(proof.ends_with('.'));

    let punchy = ToneProfile::resolve("bold-visionary");
    let paragraphs = build_body(&input, punchy, PostLength::Long.profile(), 19);
    let proof = paragraphs.last().unwrap();
    assert!(!proof.ends_with('.'));
}

#[test]
fn body_respects_paragraph_limit() {
    let input = launch_input();
    let tone = ToneProfile::resolve("bold-visionary");
    for length in [PostLength::Short, PostLength::Standard, PostLength::Long] {
        let profile = length.profile();
        let paragraphs = build_body(&input, tone, profile, 19);
        assert!(paragraphs.len() <= profile.paragraph_limit);
    }
}

#[test]
fn hashtags_are_unique_prefixed_and_bounded() {
    let input = launch_input();
    let tags = build_hashtags(&input, 23, 6);

    assert!(!tags.is_empty());
    assert!(tags.len() <= 6);
    for (idx, tag) in tags.iter().enumerate() {
        assert!(tag.starts_with('#'));
        assert!(!tags[idx + 1..].contains(tag));
    }
}

#[test]
fn hashtags_empty_pool_yields_empty_list() {
    let input = PostInput::default();
    assert!(build_hashtags(&input, 23, 6).is_empty());
}

#[test]
fn hashtags_strip_leading_hash_and_title_case() {
    let mut input = PostInput::default();
    input.hashtags = "#growth".to_string();
    assert_eq!(build_hashtags(&input, 905_417, 6), vec!["#Growth"]);
}

#[test]
fn cta_passes_user_text_through() {
    assert_eq!(
        resolve_cta("  Talk to me  ", ContentIntent::Launch, 5),
        "Talk to me"
    );
}

#[test]
fn cta_falls_back_to_intent_library() {
    let fallbacks = ContentIntent::Launch.profile().cta_fallbacks;
    for seed in [0, 1, 2, 905_417] {
        let cta = resolve_cta("", ContentIntent::Launch, seed);
        assert!(fallbacks.contains(&cta.as_str()));
    }
}
