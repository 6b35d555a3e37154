use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Movie;
use crate::services::SimilarityMatrix;

/// Bumped whenever the serialized layout of [`Model`] changes.
pub const MODEL_VERSION: u32 = 1;

/// The persisted model: catalog and precomputed similarity matrix together,
/// so the server can start without recomputing anything.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Model {
    version: u32,
    pub movies: Vec<Movie>,
    pub matrix: SimilarityMatrix,
}

impl Model {
    pub fn new(movies: Vec<Movie>, matrix: SimilarityMatrix) -> Self {
        Self {
            version: MODEL_VERSION,
            movies,
            matrix,
        }
    }

    /// Serializes the model to `path` with bincode.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Loads a model from `path`, rejecting artifacts written by an
    /// incompatible version of this crate.
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = File::open(path)?;
        let model: Model = bincode::deserialize_from(BufReader::new(file))?;
        if model.version != MODEL_VERSION {
            return Err(AppError::IncompatibleModel(format!(
                "artifact version {} does not match expected version {}",
                model.version, MODEL_VERSION
            )));
        }
        Ok(model)
    }
}
