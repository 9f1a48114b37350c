// Route exports
pub mod circulars;
pub mod recommendations;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::core::Matcher;
use crate::models::{ErrorResponse, Student, University};
use crate::services::{CacheKey, CacheManager, CatalogStore, StoreError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure)
            .configure(circulars::configure),
    );
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

pub(crate) fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Map a store failure onto 404 or 500
pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    if err.is_not_found() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: format!("{} not found", context),
            message: err.to_string(),
            status_code: 404,
        });
    }

    tracing::error!("Failed to fetch {}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("Failed to fetch {}", context),
        message: err.to_string(),
        status_code: 500,
    })
}

/// Use the inline student when given, otherwise look it up (cached)
pub(crate) async fn resolve_student(
    state: &AppState,
    student_id: Option<&str>,
    inline: Option<&Student>,
) -> Result<Student, HttpResponse> {
    if let Some(student) = inline {
        return Ok(student.clone());
    }

    let student_id = student_id
        .ok_or_else(|| bad_request("Validation failed", "studentId is required".to_string()))?;

    let key = CacheKey::student(student_id);
    if let Ok(student) = state.cache.get::<Student>(&key).await {
        return Ok(student);
    }

    let student = state
        .store
        .get_student(student_id)
        .await
        .map_err(|e| store_error_response("student", &e))?;

    if let Err(e) = state.cache.set(&key, &student).await {
        tracing::warn!("Failed to cache student {}: {}", student_id, e);
    }

    Ok(student)
}

/// University catalog, served from cache when possible
pub(crate) async fn load_universities(state: &AppState) -> Result<Vec<University>, HttpResponse> {
    let key = CacheKey::universities();
    match state.cache.get::<Vec<University>>(&key).await {
        Ok(universities) => return Ok(universities),
        Err(crate::services::CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Catalog cache read failed, falling back to store: {}", e),
    }

    let universities = state
        .store
        .list_universities()
        .await
        .map_err(|e| store_error_response("universities", &e))?;

    if let Err(e) = state.cache.set(&key, &universities).await {
        tracing::warn!("Failed to cache university catalog: {}", e);
    }

    Ok(universities)
}
