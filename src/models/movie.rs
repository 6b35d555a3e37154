use serde::{Deserialize, Serialize};

/// A single catalog entry as read from the dataset CSV.
///
/// Only `title` is required; the descriptive fields are used purely as
/// textual input to vectorization and default to empty when the column is
/// missing or blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub director: String,
}

impl Movie {
    /// Concatenates the descriptive fields into the document handed to the
    /// vectorizer. The title itself is deliberately excluded; it is the
    /// lookup key, not a feature.
    pub fn feature_text(&self) -> String {
        [
            self.genres.as_str(),
            self.keywords.as_str(),
            self.tagline.as_str(),
            self.cast.as_str(),
            self.director.as_str(),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_text_joins_descriptive_fields() {
        let movie = Movie {
            title: "The Matrix".to_string(),
            genres: "Action Science Fiction".to_string(),
            keywords: "simulation hacker".to_string(),
            tagline: "Welcome to the Real World".to_string(),
            cast: "Keanu Reeves".to_string(),
            director: "Wachowski".to_string(),
        };

        let text = movie.feature_text();
        assert!(text.contains("simulation hacker"));
        assert!(text.contains("Keanu Reeves"));
        assert!(!text.contains("The Matrix"));
    }

    #[test]
    fn test_movie_deserializes_with_missing_fields() {
        let movie: Movie = serde_json::from_str(r#"{"title": "Alien"}"#).unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.genres, "");
        assert_eq!(movie.director, "");
    }
}
