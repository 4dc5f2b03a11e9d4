pub mod intent;
pub mod length;
pub mod tone;

pub use intent::IntentProfile;
pub use length::LengthProfile;
pub use tone::{ToneProfile, DEFAULT_TONE_ID};
