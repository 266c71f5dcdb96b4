use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{default_columns, query, summarize, to_csv};
use crate::models::{
    ErrorResponse, ExportCandidatesRequest, HealthResponse, QueryCandidatesRequest,
    QueryCandidatesResponse,
};
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Configure candidate-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/candidates/query", web::post().to(query_candidates))
        .route("/candidates/export", web::post().to(export_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // The catalog is loaded at startup; an empty one means a degraded deploy
    let status = if state.catalog.candidates().is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Query the enhanced candidate collection
///
/// POST /api/v1/candidates/query
///
/// Request body:
/// ```json
/// {
///   "search": "Chen",
///   "engagement": "High",
///   "zipCode": "92604",
///   "selectedZipCode": "92602",
///   "distance": "near",
///   "improvement": "high",
///   "bucket": "high",
///   "sortField": "enhancedScore",
///   "sortDirection": "desc"
/// }
/// ```
async fn query_candidates(
    state: web::Data<AppState>,
    req: web::Json<QueryCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for query_candidates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let all = state.catalog.candidates();
    let filter = req.to_filter();
    let candidates = query(all, &filter, req.sort_field, req.sort_direction);
    let stats = summarize(&candidates);

    tracing::debug!(
        "Query matched {} of {} candidates",
        candidates.len(),
        all.len()
    );

    HttpResponse::Ok().json(QueryCandidatesResponse {
        total_candidates: all.len(),
        stats,
        candidates,
    })
}

/// Export the filtered collection as delimited text
///
/// POST /api/v1/candidates/export
///
/// Accepts the same filter body as the query endpoint plus an optional
/// `columns` list; responds with `text/csv`.
async fn export_candidates(
    state: web::Data<AppState>,
    req: web::Json<ExportCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for export_candidates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filter = req.query.to_filter();
    let candidates = query(
        state.catalog.candidates(),
        &filter,
        req.query.sort_field,
        req.query.sort_direction,
    );

    let columns = req.columns.clone().unwrap_or_else(default_columns);

    match to_csv(&candidates, &columns) {
        Ok(text) => {
            tracing::info!("Exported {} candidates as CSV", candidates.len());
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .body(text)
        }
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Export failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
