use std::sync::Arc;

use crate::data::Model;
use crate::models::Movie;
use crate::services::SimilarityMatrix;

/// Shared application state
///
/// The engine is loaded once at startup and never mutated afterwards, so it
/// sits behind a plain `Arc` with no lock.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

/// The loaded catalog and its precomputed similarity matrix.
pub struct Engine {
    pub movies: Vec<Movie>,
    pub titles: Vec<String>,
    pub matrix: SimilarityMatrix,
}

impl Engine {
    pub fn new(movies: Vec<Movie>, matrix: SimilarityMatrix) -> Self {
        let titles = movies.iter().map(|movie| movie.title.clone()).collect();
        Self {
            movies,
            titles,
            matrix,
        }
    }
}

impl From<Model> for Engine {
    fn from(model: Model) -> Self {
        Self::new(model.movies, model.matrix)
    }
}

impl AppState {
    /// Wraps a loaded engine as shared state for the router.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
