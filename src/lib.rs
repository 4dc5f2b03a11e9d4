pub mod catalog;
pub mod compose;
pub mod config;
pub mod library;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::compose::{build_body, build_hashtags, build_headline, resolve_cta};
use crate::library::ToneProfile;
use crate::text::hash_text;

pub const DEFAULT_HASHTAG_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentIntent {
    #[default]
    Awareness,
    Launch,
    Insight,
    Hiring,
}

impl ContentIntent {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "awareness" => Some(ContentIntent::Awareness),
            "launch" => Some(ContentIntent::Launch),
            "insight" => Some(ContentIntent::Insight),
            "hiring" => Some(ContentIntent::Hiring),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentIntent::Awareness => "awareness",
            ContentIntent::Launch => "launch",
            ContentIntent::Insight => "insight",
            ContentIntent::Hiring => "hiring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl PostLength {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "short" => Some(PostLength::Short),
            "standard" => Some(PostLength::Standard),
            "long" => Some(PostLength::Long),
            _ => None,
        }
    }

    /// Unknown length ids fall back to the standard profile.
    pub fn resolve(value: &str) -> Self {
        Self::from_str(value).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostLength::Short => "short",
            PostLength::Standard => "standard",
            PostLength::Long => "long",
        }
    }
}

/// Form fields driving a single composition. Every string field may be
/// empty; missing data is resolved with fallback text, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostInput {
    pub topic: String,
    pub audience: String,
    pub outcome: String,
    pub key_points: String,
    pub proof_points: String,
    pub tone: String,
    pub call_to_action: String,
    pub hashtags: String,
    pub intent: ContentIntent,
    pub length: PostLength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStep {
    pub title: String,
    pub insight: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub headline: String,
    pub post: String,
    pub hashtags: Vec<String>,
    pub steps: Vec<PostStep>,
    pub recommendations: Vec<String>,
    pub quick_tips: Vec<String>,
}

pub fn generate(input: &PostInput) -> GeneratedPost {
    generate_with_salt(input, 0)
}

/// The salt lets the caller request a different deterministic variant
/// ("regenerate") without changing the underlying field values.
pub fn generate_with_salt(input: &PostInput, salt: i64) -> GeneratedPost {
    generate_with_options(input, salt, DEFAULT_HASHTAG_COUNT)
}

pub fn generate_with_options(
    input: &PostInput,
    salt: i64,
    desired_hashtags: usize,
) -> GeneratedPost {
    let salt_text = salt.to_string();
    let seed = hash_text(
        &[
            input.topic.as_str(),
            input.audience.as_str(),
            input.key_points.as_str(),
            input.proof_points.as_str(),
            input.outcome.as_str(),
            input.tone.as_str(),
            input.intent.as_str(),
            input.length.as_str(),
            salt_text.as_str(),
        ]
        .join("|"),
    );

    let tone = ToneProfile::resolve(&input.tone);
    let length = input.length.profile();

    let cta = resolve_cta(&input.call_to_action, input.intent, seed + 5);
    let headline = build_headline(input, tone, seed + 7);
    let paragraphs = build_body(input, tone, length, seed + 19);
    let hashtags = build_hashtags(input, seed + 23, desired_hashtags);

    let sections = [
        format!("🚀 {}", headline),
        paragraphs.join("\n\n"),
        format!("👉 {}", cta),
        hashtags.join(" "),
    ];
    let post = sections
        .iter()
        .filter(|section| !section.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n");

    let steps = build_steps(input, &paragraphs, &headline, tone);

    let recommendations = vec![
        "Post between 8-10am in your audience's timezone to maximize visibility.".to_string(),
        "Add a lightweight visual or carousel that mirrors the hook to improve dwell time."
            .to_string(),
        "Stick around for 15 minutes post-publish to respond and boost early engagement."
            .to_string(),
    ];

    let quick_tips = vec![
        format!(
            "Lean into {} voice—keep sentences {}.",
            tone.vibe, tone.cadence
        ),
        "Break chunky paragraphs into 2-3 lines to stay LinkedIn-friendly.".to_string(),
        "If you have a proof point with numbers, place it right after the hook.".to_string(),
    ];

    GeneratedPost {
        headline,
        post,
        hashtags,
        steps,
        recommendations,
        quick_tips,
    }
}

fn build_steps(
    input: &PostInput,
    paragraphs: &[String],
    headline: &str,
    tone: &ToneProfile,
) -> Vec<PostStep> {
    let audience = if input.audience.is_empty() {
        "your audience".to_string()
    } else {
        format!("your {}", input.audience)
    };

    vec![
        PostStep {
            title: "Audience Lens".to_string(),
            insight: format!(
                "With a {} voice, we center the tension {} feels right now.",
                tone.vibe, audience
            ),
            output: paragraphs
                .first()
                .cloned()
                .unwrap_or_else(|| headline.to_string()),
        },
        PostStep {
            title: "Value Narrative".to_string(),
            insight: "Translate raw talking points into a narrative arc that builds authority and momentum."
                .to_string(),
            output: paragraphs
                .iter()
                .skip(1)
                .take(2)
                .cloned()
                .collect::<Vec<_>>()
                .join("\n\n"),
        },
        PostStep {
            title: "Call-To-Action".to_string(),
            insight: "Close with a conversational nudge that makes it easy to respond or DM."
                .to_string(),
            output: resolve_cta(&input.call_to_action, input.intent, hash_text(headline)),
        },
    ]
}
