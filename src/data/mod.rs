use std::path::Path;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::Movie;
use crate::services::similarity;

pub mod artifact;
pub mod loader;

pub use artifact::Model;
pub use loader::load_catalog;

/// Resolves the startup variant: load the precomputed artifact when the
/// configured model path exists, otherwise read the CSV, compute the
/// similarity matrix, and persist the artifact for the next start if a
/// model path is configured.
pub fn load_or_build(config: &Config) -> AppResult<Model> {
    if let Some(model_path) = &config.model_path {
        let model_path = Path::new(model_path);
        if model_path.exists() {
            tracing::info!(path = %model_path.display(), "loading precomputed model artifact");
            return Model::load(model_path);
        }
    }

    let dataset_path = Path::new(&config.dataset_path);
    tracing::info!(path = %dataset_path.display(), "loading movie catalog");
    let movies = load_catalog(dataset_path)?;

    tracing::info!(movies = movies.len(), "computing similarity matrix");
    let documents: Vec<String> = movies.iter().map(Movie::feature_text).collect();
    let matrix = similarity::build_matrix(&documents);

    let model = Model::new(movies, matrix);
    if let Some(model_path) = &config.model_path {
        tracing::info!(path = %model_path, "writing model artifact");
        model.save(Path::new(model_path))?;
    }

    Ok(model)
}
