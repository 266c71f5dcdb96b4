use actix_web::{web, HttpResponse, Responder};

use crate::core::summarize_region;
use crate::models::{ErrorResponse, RegionDetailResponse, RegionsResponse};
use crate::routes::candidates::AppState;

/// Configure region-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/regions", web::get().to(list_regions))
        .route("/regions/{zip_code}", web::get().to(region_detail));
}

/// List all regions in the catalog
///
/// GET /api/v1/regions
async fn list_regions(state: web::Data<AppState>) -> impl Responder {
    let regions: Vec<_> = state
        .catalog
        .regions_sorted()
        .into_iter()
        .cloned()
        .collect();
    let count = regions.len();

    HttpResponse::Ok().json(RegionsResponse { regions, count })
}

/// Region detail with engagement distribution and infrastructure figures
///
/// GET /api/v1/regions/{zip_code}
async fn region_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let zip_code = path.into_inner();

    let region = match state.catalog.region(&zip_code) {
        Some(region) => region,
        None => {
            tracing::info!("Region {} not found", zip_code);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Region not found".to_string(),
                message: format!("No region with zip code {}", zip_code),
                status_code: 404,
            });
        }
    };

    let stats = summarize_region(state.catalog.candidates(), region);

    HttpResponse::Ok().json(RegionDetailResponse {
        region: region.clone(),
        stats,
    })
}
