use std::path::Path;

use crate::error::AppResult;
use crate::models::Movie;

/// Reads the movie catalog from a CSV file.
///
/// The file must have a header row with a `title` column; the descriptive
/// columns (`genres`, `keywords`, `tagline`, `cast`, `director`) are
/// optional and default to empty strings.
pub fn load_catalog(path: &Path) -> AppResult<Vec<Movie>> {
    let mut reader = csv::Reader::from_path(path)?;
    read_catalog(&mut reader)
}

fn read_catalog<R: std::io::Read>(reader: &mut csv::Reader<R>) -> AppResult<Vec<Movie>> {
    let mut movies = Vec::new();
    for record in reader.deserialize() {
        let movie: Movie = record?;
        movies.push(movie);
    }
    Ok(movies)
}
