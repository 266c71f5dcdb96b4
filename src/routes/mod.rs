// Route exports
pub mod candidates;
pub mod regions;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(candidates::configure)
            .configure(regions::configure),
    );
}
