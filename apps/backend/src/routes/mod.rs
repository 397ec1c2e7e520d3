use actix_web::web;

pub mod games;
pub mod health;
pub mod players;

/// Register every route of the API.
///
/// `main.rs` and the integration tests both mount exactly this; middleware
/// is wrapped around it by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Player routes: /backend/player/**
    cfg.service(web::scope("/backend/player").configure(players::configure_routes));

    // Game routes: /backend/game/**
    cfg.service(web::scope("/backend/game").configure(games::configure_routes));
}
