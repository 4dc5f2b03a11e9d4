use crate::ContentIntent;

/// Framing phrases tied to the intent of the post.
#[derive(Debug, Clone, Copy)]
pub struct IntentProfile {
    pub headline_prefixes: &'static [&'static str],
    pub reason_lenses: &'static [&'static str],
    pub cta_fallbacks: &'static [&'static str],
}

static AWARENESS: IntentProfile = IntentProfile {
    headline_prefixes: &[
        "Leaning into",
        "Why this matters:",
        "Fresh POV on",
        "The shift we're seeing in",
    ],
    reason_lenses: &[
        "Highlight emerging trend for the audience",
        "Establish credibility by framing the underlying tension",
        "Anchor value with problem ➝ solution clarity",
    ],
    cta_fallbacks: &[
        "Curious to hear how others are navigating this—let's compare notes.",
        "If this resonates, let's connect and strategize together.",
        "DM me if you want the playbook we used.",
    ],
};

static LAUNCH: IntentProfile = IntentProfile {
    headline_prefixes: &[
        "We just launched",
        "Proud to introduce",
        "Rolling out",
        "Now live:",
    ],
    reason_lenses: &[
        "Lead with the belief or problem driving the launch",
        "Show tangible benefits tied to real use cases",
        "Invite early adopters with a clear next step",
    ],
    cta_fallbacks: &[
        "Jump in and try it—happy to send early access.",
        "If this unlocks something for you, let's talk about partnering.",
        "Book a quick walkthrough and see it live.",
    ],
};

static INSIGHT: IntentProfile = IntentProfile {
    headline_prefixes: &[
        "A lesson from the trenches:",
        "What surprised me this week:",
        "Hard-earned insight on",
        "What the data showed me about",
    ],
    reason_lenses: &[
        "Open with the tension or misconception you faced",
        "Highlight the inflection moment that reframed the problem",
        "Close with takeaway others can apply immediately",
    ],
    cta_fallbacks: &[
        "How are you approaching this with your team?",
        "Drop your frameworks below—let's build a shared playbook.",
        "Who else is wrestling with this? Let's connect.",
    ],
};

static HIRING: IntentProfile = IntentProfile {
    headline_prefixes: &[
        "We're hiring:",
        "Looking for builders:",
        "Team is growing:",
        "Calling operators who love",
    ],
    reason_lenses: &[
        "Frame the mission and why the role exists now",
        "Underscore the kind of impact the hire will own",
        "Point to what success looks like in the first 90 days",
    ],
    cta_fallbacks: &[
        "Know someone who'd crush this? Make the intro.",
        "Ping me for the inside scoop and a warm intro.",
        "Drop 'interested' and I'll DM you details.",
    ],
};

impl ContentIntent {
    pub fn profile(self) -> &'static IntentProfile {
        match self {
            ContentIntent::Awareness => &AWARENESS,
            ContentIntent::Launch => &LAUNCH,
            ContentIntent::Insight => &INSIGHT,
            ContentIntent::Hiring => &HIRING,
        }
    }
}

impl IntentProfile {
    // The phrase tables are declared non-empty, so the modulo indices below
    // are always in range.

    pub fn headline_prefix(&self, seed: u32) -> &'static str {
        self.headline_prefixes[seed as usize % self.headline_prefixes.len()]
    }

    pub fn reason_lens(&self, seed: u32) -> &'static str {
        self.reason_lenses[seed as usize % self.reason_lenses.len()]
    }

    pub fn cta_fallback(&self, seed: u32) -> &'static str {
        self.cta_fallbacks[seed as usize % self.cta_fallbacks.len()]
    }
}
