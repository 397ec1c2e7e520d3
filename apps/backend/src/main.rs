use actix_web::{web, App, HttpServer};
use fireworks::config::ServerConfig;
use fireworks::middleware::cors::cors_middleware;
use fireworks::middleware::request_trace::RequestTrace;
use fireworks::middleware::structured_logger::StructuredLogger;
use fireworks::middleware::trace_span::TraceSpan;
use fireworks::state::app_state::AppState;
use fireworks::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment; see ServerConfig for
    // the variables and their defaults.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let (host, port) = config.bind_address();
    let cors_origins = config.cors_allowed_origins.clone();

    let app_state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %host,
        port,
        players = app_state.players.all().len(),
        "Starting fireworks backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
