mod explanation;
mod movie;
mod preferences;

pub use explanation::{Explanation, AI_EXPLANATIONS_TITLE};
pub use movie::Movie;
pub use preferences::{Preferences, RecommendRequest};
