use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{debug, error};

use super::page::{render_page, Outcome};
use super::types::*;
use crate::dataset::Dataset;
use crate::recommend::recommend_movies;
use crate::server::AppState;
use crate::util::{genre_id, QueryParams};

async fn dataset(state: &AppState) -> Result<Arc<Dataset>, StatusCode> {
    state.dataset.get().await.map_err(|e| {
        error!("Failed to load dataset: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Html<String>, StatusCode> {
    let dataset = dataset(&state).await?;
    let opts = state.config.recommend.options();

    let html = match params.get("genre") {
        Some(genre) => {
            let items = recommend_movies(genre, &dataset, &opts);
            debug!(genre = %genre, results = items.len(), "recommendations");
            render_page(
                &dataset.genres,
                Some(genre),
                Outcome::Results {
                    limit: opts.limit,
                    items: &items,
                },
            )
        }
        None => render_page(&dataset.genres, None, Outcome::Idle),
    };

    Ok(Html(html))
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<GenreInfo>>, StatusCode> {
    let dataset = dataset(&state).await?;

    let genres = dataset
        .genres
        .iter()
        .map(|name| GenreInfo {
            id: genre_id(name),
            name: name.clone(),
            url: format!("/api/recommendations?genre={}", urlencoding::encode(name)),
        })
        .collect();

    Ok(Json(genres))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<RecommendationResponse>, StatusCode> {
    let genre = params.get("genre").ok_or(StatusCode::BAD_REQUEST)?;
    let dataset = dataset(&state).await?;

    let mut opts = state.config.recommend.options();
    if let Some(limit) = params.get_usize("limit") {
        opts.limit = limit.min(opts.limit);
    }

    let items = recommend_movies(genre, &dataset, &opts);

    Ok(Json(RecommendationResponse {
        genre: genre.to_string(),
        items,
    }))
}

pub async fn get_status(State(state): State<AppState>) -> Result<Json<DatasetStatus>, StatusCode> {
    let dataset = dataset(&state).await?;

    Ok(Json(DatasetStatus {
        movies: dataset.movies.len(),
        ratings: dataset.ratings.len(),
        genres: dataset.genres.len(),
        loaded_at: dataset.loaded_at,
    }))
}
