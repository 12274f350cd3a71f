use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde_json::json;

use crate::{
    handlers::upload::{self, UploadedImage},
    models::{error::Error, news::PublicNewsItem},
    utils::state::AppState,
};

pub async fn welcome() -> impl IntoResponse {
    return (
        StatusCode::OK,
        Json(json!({"message": "Welcome to the news API"})),
    )
        .into_response();
}

pub async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let rows = state.store.list_all().await?;

    let base_url = state.config.public_base_url();
    let items: Vec<PublicNewsItem> = rows
        .iter()
        .map(|row| row.to_public_view(&base_url))
        .collect();

    Ok((StatusCode::OK, Json(items)))
}

pub async fn get_news_by_id(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let row = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::new(StatusCode::NOT_FOUND, "News item not found"))?;

    Ok((
        StatusCode::OK,
        Json(row.to_public_view(&state.config.public_base_url())),
    ))
}

pub async fn create_news(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut title: Option<String> = None;
    let mut content: Option<String> = None;
    let mut image: Option<UploadedImage> = None;

    // Upload validation and the disk write happen while the fields are
    // walked; field validation only runs once the body is consumed.
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let is_file = field.file_name().is_some();

        match name.as_str() {
            "title" if !is_file => title = Some(field.text().await?),
            "content" if !is_file => content = Some(field.text().await?),
            "image" if is_file && image.is_none() => {
                image = Some(upload::save_image(field, &state.config.content_dir).await?);
            }
            _ if is_file => {
                // Only a single file under the `image` field is accepted.
                return Err(Error::new(StatusCode::BAD_REQUEST, "Unexpected field"));
            }
            _ => {}
        }
    }

    let title = title.filter(|value| !value.is_empty());
    let content = content.filter(|value| !value.is_empty());

    let mut errors = Vec::new();
    if image.is_none() {
        errors.push("No image uploaded");
    }
    if title.is_none() {
        errors.push("title is missing");
    }
    if content.is_none() {
        errors.push("content is missing");
    }

    let (Some(title), Some(content), Some(image)) = (title, content, image) else {
        return Err(Error::validation(errors));
    };

    let date_posted = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    state
        .store
        .insert(&title, &content, &image.filename, &date_posted)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({"message": "News added successfully"})),
    ))
}
