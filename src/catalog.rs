use serde::Serialize;

use crate::library::tone;
use crate::{ContentIntent, PostInput, PostLength};

#[derive(Debug, Clone, Serialize)]
pub struct ToneOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentOption {
    pub id: ContentIntent,
    pub label: &'static str,
    pub teaser: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LengthOption {
    pub id: PostLength,
    pub label: &'static str,
}

/// Ready-made field values for quick-start UX.
#[derive(Debug, Clone, Serialize)]
pub struct StarterPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub payload: PostInput,
}

pub fn tone_options() -> Vec<ToneOption> {
    tone::all()
        .iter()
        .map(|profile| ToneOption {
            id: profile.id,
            label: profile.label,
        })
        .collect()
}

pub fn intent_options() -> Vec<IntentOption> {
    vec![
        IntentOption {
            id: ContentIntent::Awareness,
            label: "Awareness Builder",
            teaser: "Trend POV, industry shift, thought leadership",
        },
        IntentOption {
            id: ContentIntent::Launch,
            label: "Launch Moment",
            teaser: "Shipping something new, feature drop, announcement",
        },
        IntentOption {
            id: ContentIntent::Insight,
            label: "Insight / Lesson",
            teaser: "Personal reflection, data-backed takeaway, hot take",
        },
        IntentOption {
            id: ContentIntent::Hiring,
            label: "Hiring Boost",
            teaser: "Recruiting, referrals, team hype, culture spotlight",
        },
    ]
}

pub fn length_options() -> Vec<LengthOption> {
    vec![
        LengthOption {
            id: PostLength::Short,
            label: "Punchy (150-220 words)",
        },
        LengthOption {
            id: PostLength::Standard,
            label: "Standard (220-320 words)",
        },
        LengthOption {
            id: PostLength::Long,
            label: "Deep-dive (320-420 words)",
        },
    ]
}

pub fn starter_presets() -> Vec<StarterPreset> {
    vec![
        StarterPreset {
            name: "AI feature launch",
            description: "Ship a new AI capability with proof points and CTA.",
            payload: PostInput {
                topic: "our AI copilot for revenue teams".to_string(),
                audience: "RevOps leaders at high-growth SaaS companies".to_string(),
                outcome: "help GTM teams close loops between revenue data and action".to_string(),
                key_points: "Turns messy CRM notes into prioritized plays\nAutogenerates follow-up briefs for reps\nSurfaces risk deals 10 days earlier".to_string(),
                proof_points: "Pilot teams reclaimed 7 hours per week • Beta customers lifted win rates by 8%".to_string(),
                tone: "bold-visionary".to_string(),
                call_to_action: "DM me for early access before the waitlist opens wider.".to_string(),
                hashtags: "revops,AI,saas,salesenablement".to_string(),
                intent: ContentIntent::Launch,
                length: PostLength::Standard,
            },
        },
        StarterPreset {
            name: "Leadership reflection",
            description: "Share a lesson learned from scaling a team.",
            payload: PostInput {
                topic: "what it really takes to keep a remote-first team aligned".to_string(),
                audience: "founders building distributed product teams".to_string(),
                outcome: "create more intentional rituals that reinforce ownership".to_string(),
                key_points: "Over-communicate the why, not just the what\nDesign async-first artifacts, then layer live moments\nProtect maker time like a core KPI".to_string(),
                proof_points: "Team velocity stayed within 3% after doubling headcount • Engagement scores jumped 12 points".to_string(),
                tone: "insightful-mentor".to_string(),
                call_to_action: String::new(),
                hashtags: "leadership,remotework,product".to_string(),
                intent: ContentIntent::Insight,
                length: PostLength::Long,
            },
        },
        StarterPreset {
            name: "Hiring call",
            description: "Invite operators to join your growing team.",
            payload: PostInput {
                topic: "finding our next lifecycle marketer".to_string(),
                audience: "full-funnel lifecycle marketers who love experimentation".to_string(),
                outcome: "craft journeys that feel handcrafted at scale".to_string(),
                key_points: "You’ll own activation through expansion across product + marketing\nLots of white space for lifecycle creativity\nPartnership with product to instrument experimentation".to_string(),
                proof_points: "We doubled ARR in the last 12 months • NPS sits at 56 and still climbing".to_string(),
                tone: "community-builder".to_string(),
                call_to_action: String::new(),
                hashtags: "hiring,marketing,careers,startups".to_string(),
                intent: ContentIntent::Hiring,
                length: PostLength::Standard,
            },
        },
    ]
}

/// Case-insensitive preset lookup by name.
pub fn find_preset(name: &str) -> Option<StarterPreset> {
    starter_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
