use serde::{Deserialize, Serialize};
use postcraft::catalog::{IntentOption, LengthOption, StarterPreset, ToneOption};
use postcraft::config::ComposerDefaults;
use postcraft::{ContentIntent, GeneratedPost, PostInput, PostLength, PostStep};

#[derive(Debug, Deserialize)]
pub struct ApiGenerateRequest {
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub outcome: Option<String>,
    pub key_points: Option<String>,
    pub proof_points: Option<String>,
    pub tone: Option<String>,
    pub call_to_action: Option<String>,
    pub hashtags: Option<String>,
    pub intent: Option<String>,
    pub length: Option<String>,
    pub salt: Option<i64>,
    pub hashtag_count: Option<usize>,
    pub request_id: Option<String>,
}

impl ApiGenerateRequest {
    pub fn into_input(self, defaults: &ComposerDefaults) -> Result<(PostInput, i64, usize), String> {
        let mut input = PostInput::default();

        input.topic = self.topic.unwrap_or_default();
        input.audience = self.audience.unwrap_or_default();
        input.outcome = self.outcome.unwrap_or_default();
        input.key_points = self.key_points.unwrap_or_default();
        input.proof_points = self.proof_points.unwrap_or_default();
        input.call_to_action = self.call_to_action.unwrap_or_default();
        input.hashtags = self.hashtags.unwrap_or_default();

        // Unknown tone ids are tolerated; the library resolves them to the
        // default profile.
        input.tone = self.tone.unwrap_or_else(|| defaults.tone.clone());

        input.intent = match self.intent.as_deref() {
            Some(value) => ContentIntent::from_str(value)
                .ok_or_else(|| format!("invalid intent: {}", value))?,
            None => ContentIntent::from_str(&defaults.intent).unwrap_or_default(),
        };

        input.length = match self.length.as_deref() {
            Some(value) => PostLength::resolve(value),
            None => PostLength::resolve(&defaults.length),
        };

        let salt = self.salt.unwrap_or(0);
        let hashtag_count = self.hashtag_count.unwrap_or(defaults.hashtag_count);

        Ok((input, salt, hashtag_count))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiGenerateResponse {
    pub request_id: String,
    pub headline: String,
    pub post: String,
    pub hashtags: Vec<String>,
    pub steps: Vec<PostStep>,
    pub recommendations: Vec<String>,
    pub quick_tips: Vec<String>,
}

impl ApiGenerateResponse {
    pub fn from_output(output: GeneratedPost, request_id: String) -> Self {
        Self {
            request_id,
            headline: output.headline,
            post: output.post,
            hashtags: output.hashtags,
            steps: output.steps,
            recommendations: output.recommendations,
            quick_tips: output.quick_tips,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiCatalogResponse {
    pub tones: Vec<ToneOption>,
    pub intents: Vec<IntentOption>,
    pub lengths: Vec<LengthOption>,
    pub presets: Vec<StarterPreset>,
}
