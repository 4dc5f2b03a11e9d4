use crate::PostLength;

/// Caps applied while assembling the post body.
#[derive(Debug, Clone, Copy)]
pub struct LengthProfile {
    pub max_hook_sentences: usize,
    pub paragraph_limit: usize,
    pub detail_bullets: usize,
}

static SHORT: LengthProfile = LengthProfile {
    max_hook_sentences: 1,
    paragraph_limit: 2,
    detail_bullets: 2,
};

static STANDARD: LengthProfile = LengthProfile {
    max_hook_sentences: 2,
    paragraph_limit: 3,
    detail_bullets: 3,
};

static LONG: LengthProfile = LengthProfile {
    max_hook_sentences: 2,
    paragraph_limit: 4,
    detail_bullets: 4,
};

impl PostLength {
    pub fn profile(self) -> &'static LengthProfile {
        match self {
            PostLength::Short => &SHORT,
            PostLength::Standard => &STANDARD,
            PostLength::Long => &LONG,
        }
    }
}
