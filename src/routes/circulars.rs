use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{format_summary, summarize_circular};
use crate::models::{CircularSummaryRequest, CircularSummaryResponse, ErrorResponse};
use crate::routes::{bad_request, store_error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/circulars/summary", web::post().to(summarize));
}

/// Circular summary endpoint
///
/// POST /api/v1/circulars/summary
///
/// Summarizes `text` when given, otherwise the stored circular of
/// `universityId`.
async fn summarize(
    state: web::Data<AppState>,
    req: web::Json<CircularSummaryRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let text = match req.text.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(text) => text.to_string(),
        None => {
            let university_id = req.university_id.as_deref().unwrap_or_default();
            let university = match state.store.get_university(university_id).await {
                Ok(university) => university,
                Err(e) => return store_error_response("university", &e),
            };
            match university.circular_text {
                Some(text) => text,
                None => {
                    return HttpResponse::NotFound().json(ErrorResponse {
                        error: "Circular not found".to_string(),
                        message: format!("University {} has no circular", university_id),
                        status_code: 404,
                    });
                }
            }
        }
    };

    let summary = summarize_circular(&text);
    let formatted = format_summary(&summary);

    HttpResponse::Ok().json(CircularSummaryResponse { summary, formatted })
}
