pub mod body;
pub mod cta;
pub mod hashtags;
pub mod headline;

pub use body::build_body;
pub use cta::resolve_cta;
pub use hashtags::build_hashtags;
pub use headline::build_headline;
