//! Player registration routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{encode_segment, ValidatedJson};
use crate::services::Player;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct PlayerListEntry {
    pub identifier: String,
    pub name: String,
    pub color: String,
}

impl From<Player> for PlayerListEntry {
    fn from(player: Player) -> Self {
        Self {
            identifier: encode_segment(&player.name),
            name: player.name,
            color: player.chat_color,
        }
    }
}

#[derive(Debug, Serialize)]
struct PlayerListResponse {
    players: Vec<PlayerListEntry>,
}

#[derive(Debug, Serialize)]
struct ColorsResponse<'a> {
    colors: &'a [String],
}

#[derive(Debug, Deserialize)]
struct NewPlayerRequest {
    name: String,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdatePlayerRequest {
    name: String,
    color: String,
}

fn registered_list(app_state: &AppState) -> HttpResponse {
    HttpResponse::Ok().json(PlayerListResponse {
        players: app_state
            .players
            .all()
            .into_iter()
            .map(PlayerListEntry::from)
            .collect(),
    })
}

/// GET /backend/player/registered-players
async fn registered_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(registered_list(&app_state))
}

/// GET /backend/player/available-colors
async fn available_colors(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ColorsResponse {
        colors: app_state.players.available_colors(),
    }))
}

/// POST /backend/player/new-player
///
/// Responds with the full registered list so the client can refresh in one trip.
async fn new_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let NewPlayerRequest { name, color } = body.into_inner();
    let color = color.filter(|c| !c.trim().is_empty());
    app_state.players.register(&name, color.as_deref())?;
    Ok(registered_list(&app_state))
}

/// POST /backend/player/update-player
async fn update_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    app_state.players.update_color(&body.name, &body.color)?;
    Ok(registered_list(&app_state))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/registered-players", web::get().to(registered_players))
        .route("/available-colors", web::get().to(available_colors))
        .route("/new-player", web::post().to(new_player))
        .route("/update-player", web::post().to(update_player));
}
