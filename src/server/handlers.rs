//! HTTP handlers for the `/contact` resource.
//!
//! Handlers only translate shapes: path parameters into [`ContactId`], JSON
//! bodies into [`Contact`], and service outcomes into status codes.

use crate::domain::ContactId;
use crate::error::ServiceError;
use crate::models::Contact;
use crate::services::ContactService;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<dyn ContactService>,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
    message: String,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Status code this error renders with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ServiceError::Validation(_) => Self::bad_request(err.to_string()),
            ServiceError::Storage(storage) => {
                tracing::error!(error = %storage, "Storage failure while handling request");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal storage error".to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status.as_u16(),
            error: self.status.canonical_reason().unwrap_or("Error"),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// `GET /contact`
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.contact_service.list().await?;
    Ok(Json(contacts))
}

/// `GET /contact/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Contact>> {
    let Path(id) = id?;
    let contact = state.contact_service.get_by_id(ContactId::from(id)).await?;
    Ok(Json(contact))
}

/// `POST /contact`
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Contact>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let Json(contact) = body?;
    let created = state.contact_service.create(contact).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /contact/{id}`
///
/// The path id always wins over any `uuid` in the body.
pub async fn update_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Contact>, JsonRejection>,
) -> ApiResult<Json<Contact>> {
    let Path(id) = id?;
    let Json(mut partial) = body?;
    let id = ContactId::from(id);
    partial.uuid = Some(id);

    let updated = state.contact_service.update(id, partial).await?;
    Ok(Json(updated))
}

/// `DELETE /contact/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.contact_service.delete(ContactId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
