// Route exports
pub mod mentors;
pub mod submissions;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(mentors::configure)
            .configure(submissions::configure),
    );
}
