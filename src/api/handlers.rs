use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::services::{matcher, ranker, MAX_RECOMMENDATIONS};

use super::{pages, AppState};

/// Fallback messages rendered in place of a recommendation list. All three
/// are returned with HTTP 200, message embedded in the page.
pub const NO_MATCH_MESSAGE: &str = "No match found. Please try again.";
pub const INDEX_ERROR_MESSAGE: &str = "Error finding movie index. Please try again.";
pub const SCORES_ERROR_MESSAGE: &str = "Error accessing similarity scores. Please try again.";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub movie_name: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Renders the query form
pub async fn home() -> Html<String> {
    Html(pages::index(None))
}

/// Recommends up to 30 movies similar to the submitted title.
///
/// Every failure mode renders the form again with a fixed message; nothing
/// on this path is fatal or surfaced as an error status.
pub async fn recommend(
    State(state): State<AppState>,
    Form(request): Form<RecommendRequest>,
) -> Html<String> {
    let engine = &state.engine;

    let Some((_, close_match)) = matcher::closest_title(&request.movie_name, &engine.titles)
    else {
        tracing::info!(query = %request.movie_name, "no close match");
        return fallback(NO_MATCH_MESSAGE);
    };
    tracing::info!(query = %request.movie_name, %close_match, "close match found");

    // Re-resolve the matched title to its catalog row, as the original
    // lookup-by-title did. Duplicate titles resolve to the first row.
    let Some(movie_index) = engine.movies.iter().position(|m| m.title == close_match) else {
        return fallback(INDEX_ERROR_MESSAGE);
    };

    let Some(row) = engine.matrix.row(movie_index) else {
        return fallback(SCORES_ERROR_MESSAGE);
    };

    let recommended: Vec<String> = ranker::rank(row, movie_index, MAX_RECOMMENDATIONS)
        .into_iter()
        // Candidate indices past the end of the catalog are skipped, not errors.
        .filter_map(|(index, _)| engine.movies.get(index))
        .map(|movie| movie.title.clone())
        .collect();

    Html(pages::index(Some(&recommended)))
}

fn fallback(message: &str) -> Html<String> {
    Html(pages::index(Some(&[message.to_string()])))
}
