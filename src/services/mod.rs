pub mod candidate_filter;
pub mod catalog;
pub mod completion;
pub mod explanations;
pub mod prompts;

pub use candidate_filter::filter_candidates;
pub use catalog::CatalogLoader;
pub use explanations::ExplanationGenerator;
