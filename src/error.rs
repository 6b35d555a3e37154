/// Application-level errors
///
/// These surface during startup (loading the dataset or the model artifact)
/// and propagate up through `main`. Failures on the request path itself are
/// deliberately not represented here: the recommend handler converts them to
/// fixed user-facing messages rendered with HTTP 200.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Model artifact error: {0}")]
    Artifact(#[from] bincode::Error),

    #[error("Incompatible model: {0}")]
    IncompatibleModel(String),
}

pub type AppResult<T> = Result<T, AppError>;
