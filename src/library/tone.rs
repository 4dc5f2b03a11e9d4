/// Voice profile applied to the headline, body, and quick tips.
#[derive(Debug, Clone, Copy)]
pub struct ToneProfile {
    pub id: &'static str,
    pub label: &'static str,
    pub hook_verbs: &'static [&'static str],
    pub vibe: &'static str,
    pub cadence: &'static str,
    pub closing_flair: &'static str,
}

pub const DEFAULT_TONE_ID: &str = "professional-optimistic";

static TONE_LIBRARY: [ToneProfile; 4] = [
    ToneProfile {
        id: "professional-optimistic",
        label: "Professional · Optimistic",
        hook_verbs: &["unlocking", "accelerating", "reshaping", "elevating"],
        vibe: "warm authority",
        cadence: "balanced sentences with confident verbs",
        closing_flair: "Let's build what's next together.",
    },
    ToneProfile {
        id: "insightful-mentor",
        label: "Insightful · Mentor",
        hook_verbs: &["learned", "noticed", "realized", "discovered"],
        vibe: "reflective storytelling",
        cadence: "short reflections leading into a lesson",
        closing_flair: "Curious how others are tackling this.",
    },
    ToneProfile {
        id: "bold-visionary",
        label: "Bold · Visionary",
        hook_verbs: &["reimagining", "reinventing", "challenging", "transforming"],
        vibe: "future-facing energy",
        cadence: "high-impact phrases with momentum",
        closing_flair: "Let's push the conversation forward.",
    },
    ToneProfile {
        id: "community-builder",
        label: "Community · Collaborative",
        hook_verbs: &["rallying", "bringing together", "co-creating", "supporting"],
        vibe: "inclusive enthusiasm",
        cadence: "inviting statements with shared ownership",
        closing_flair: "Drop a note if you want to jam on this.",
    },
];

pub fn all() -> &'static [ToneProfile] {
    &TONE_LIBRARY
}

impl ToneProfile {
    /// Looks up a tone by id, falling back to the default profile for
    /// unknown ids.
    pub fn resolve(id: &str) -> &'static ToneProfile {
        TONE_LIBRARY
            .iter()
            .find(|profile| profile.id == id)
            .unwrap_or(&TONE_LIBRARY[0])
    }

    /// Hook verb tables always carry at least one entry, so the modulo
    /// index is in range.
    pub fn hook_verb(&self, seed: u32) -> &'static str {
        self.hook_verbs[seed as usize % self.hook_verbs.len()]
    }
}
