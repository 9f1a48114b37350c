use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::probability_level;
use crate::models::{
    HealthResponse, ProbabilityRequest, ProbabilityResponse, RecommendationEntry,
    RecommendationsRequest, RecommendationsResponse, UniversitiesResponse,
};
use crate::routes::{bad_request, load_universities, resolve_student, store_error_response, AppState};

/// Configure recommendation and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/universities", web::get().to(list_universities))
        .route("/recommendations", web::post().to(recommend))
        .route("/probability", web::post().to(probability));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        store: state.store.backend_name().to_string(),
        cache: state.cache.stats(),
    })
}

/// University catalog
///
/// GET /api/v1/universities
async fn list_universities(state: web::Data<AppState>) -> HttpResponse {
    match load_universities(&state).await {
        Ok(universities) => HttpResponse::Ok().json(UniversitiesResponse {
            count: universities.len(),
            universities,
        }),
        Err(response) => response,
    }
}

/// Ranked recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "student": { "hscMarks": 72, "unit": "Science", "city": "Dhaka" },
///   "limit": 10
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let student = match resolve_student(&state, req.student_id.as_deref(), req.student.as_ref()).await {
        Ok(student) => student,
        Err(response) => return response,
    };

    let universities = match load_universities(&state).await {
        Ok(universities) => universities,
        Err(response) => return response,
    };

    // Inline students have no stored applications
    let applications = if req.student.is_none() {
        match state.store.list_applications(&student.id).await {
            Ok(applications) => applications,
            Err(e) => {
                tracing::warn!("Failed to fetch applications for {}, scoring without overrides: {}", student.id, e);
                vec![]
            }
        }
    } else {
        vec![]
    };

    tracing::info!("Ranking {} universities for student {}, limit: {}", universities.len(), student.id, limit);

    let result = state.matcher.rank(&student, &universities, limit);

    let matches = result
        .matches
        .into_iter()
        .map(|m| {
            let application = applications.iter().find(|a| a.university_id == m.university.id);
            let probability = state.matcher.probability(&student, &m.university, application);
            RecommendationEntry {
                university: m.university,
                match_score: m.match_score,
                probability,
                probability_level: probability_level(probability),
            }
        })
        .collect();

    HttpResponse::Ok().json(RecommendationsResponse {
        matches,
        total_candidates: result.total_candidates,
    })
}

/// Admission probability endpoint
///
/// POST /api/v1/probability
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "universityId": "string",
///   "application": { "marksObtained": 72, "marksRequired": 65 }
/// }
/// ```
async fn probability(
    state: web::Data<AppState>,
    req: web::Json<ProbabilityRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for probability request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let student = match resolve_student(&state, req.student_id.as_deref(), req.student.as_ref()).await {
        Ok(student) => student,
        Err(response) => return response,
    };

    let university = match state.store.get_university(&req.university_id).await {
        Ok(university) => university,
        Err(e) => return store_error_response("university", &e),
    };

    let application = match &req.application {
        Some(application) => Some(application.clone()),
        None if req.student.is_none() => {
            match state.store.get_application(&student.id, &university.id).await {
                Ok(application) => application,
                Err(e) => {
                    tracing::warn!("Failed to fetch application for {}: {}", student.id, e);
                    None
                }
            }
        }
        None => None,
    };

    let probability = state.matcher.probability(&student, &university, application.as_ref());

    tracing::debug!(
        "Probability for {} at {}: {} (application override: {})",
        student.id,
        university.id,
        probability,
        application.is_some()
    );

    HttpResponse::Ok().json(ProbabilityResponse {
        university_id: university.id,
        probability,
        probability_level: probability_level(probability),
    })
}
