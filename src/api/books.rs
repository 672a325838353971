//! Books API endpoints

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookCandidate, BookPatch},
    AppState,
};

use super::BookId;

/// Confirmation body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn invalid_body() -> AppError {
    AppError::BadRequest("Invalid request body".to_string())
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    tracing::info!("Endpoint hit: list_books");
    Json(state.services.books.list())
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookCandidate,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Book>)> {
    tracing::info!("Endpoint hit: create_book");
    let candidate: BookCandidate = serde_json::from_slice(&body).map_err(|_| invalid_body())?;
    let book = state.services.books.create(candidate);
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace every field of a book
///
/// An undecodable body is not rejected: it clears the book's fields.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookCandidate,
    responses(
        (status = 200, description = "Book replaced", body = Book),
        (status = 204, description = "No book with this ID"),
        (status = 400, description = "Invalid ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    body: Bytes,
) -> Response {
    tracing::info!("Endpoint hit: replace_book");
    let candidate = BookCandidate::from_slice_lenient(&body);
    match state.services.books.replace(id, candidate) {
        Some(book) => Json(book).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Update some fields of a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid ID or request body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn merge_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    body: Bytes,
) -> AppResult<Json<Book>> {
    tracing::info!("Endpoint hit: merge_book");
    // `null` is an empty patch
    let patch = serde_json::from_slice::<Option<BookPatch>>(&body)
        .map_err(|_| invalid_body())?
        .unwrap_or_default();
    state
        .services
        .books
        .merge(id, patch)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<MessageResponse>> {
    tracing::info!("Endpoint hit: delete_book");
    if !state.services.books.delete(id) {
        return Err(AppError::NotFound("Book not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
