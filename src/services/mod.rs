pub mod matcher;
pub mod ranker;
pub mod similarity;

pub use ranker::MAX_RECOMMENDATIONS;
pub use similarity::SimilarityMatrix;
