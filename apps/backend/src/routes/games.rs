//! Game routes: creation, listing, per-player views, chat and turns.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::Ruleset;
use crate::error::AppError;
use crate::extractors::{decode_segment, ValidatedJson};
use crate::services::{GameAction, TurnSummary};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

fn ok_status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse { status: "OK" })
}

#[derive(Debug, Serialize)]
struct RulesetEntry {
    identifier: u32,
    description: &'static str,
    minimum_number_of_players: usize,
    maximum_number_of_players: usize,
}

#[derive(Debug, Serialize)]
struct RulesetsResponse {
    rulesets: Vec<RulesetEntry>,
}

#[derive(Debug, Serialize)]
struct TurnSummariesResponse {
    turn_summaries: Vec<TurnSummary>,
}

#[derive(Debug, Deserialize)]
struct NewGameRequest {
    game_name: String,
    ruleset_identifier: u32,
    player_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    game_name: String,
    player_name: String,
    chat_message: String,
}

#[derive(Debug, Deserialize)]
struct CardRequest {
    game_name: String,
    player_name: String,
    card_index: usize,
}

#[derive(Debug, Deserialize)]
struct ColorHintRequest {
    game_name: String,
    player_name: String,
    receiver_name: String,
    hinted_color: String,
}

#[derive(Debug, Deserialize)]
struct NumberHintRequest {
    game_name: String,
    player_name: String,
    receiver_name: String,
    hinted_number: u8,
}

/// GET /backend/game/available-rulesets
async fn available_rulesets() -> Result<HttpResponse, AppError> {
    let rulesets = Ruleset::ALL
        .into_iter()
        .map(|ruleset| RulesetEntry {
            identifier: ruleset.identifier(),
            description: ruleset.description(),
            minimum_number_of_players: ruleset.minimum_number_of_players(),
            maximum_number_of_players: ruleset.maximum_number_of_players(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(RulesetsResponse { rulesets }))
}

/// GET /backend/game/all-games-with-player/{player_segment}
async fn all_games_with_player(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let player_name = decode_segment(&path.into_inner())?;
    let turn_summaries = app_state.games.turn_summaries(&player_name)?;
    Ok(HttpResponse::Ok().json(TurnSummariesResponse { turn_summaries }))
}

/// GET /backend/game/game-as-seen-by-player/{game_segment}/{player_segment}
///
/// The viewer's own cards appear only as inferred knowledge.
async fn game_as_seen_by_player(
    app_state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (game_segment, player_segment) = path.into_inner();
    let game_name = decode_segment(&game_segment)?;
    let player_name = decode_segment(&player_segment)?;
    let view = app_state.games.view(&game_name, &player_name)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /backend/game/create-new-game
async fn create_new_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewGameRequest>,
) -> Result<HttpResponse, AppError> {
    let NewGameRequest {
        game_name,
        ruleset_identifier,
        player_names,
    } = body.into_inner();
    app_state
        .games
        .create(&game_name, ruleset_identifier, player_names, None)?;
    Ok(ok_status())
}

/// POST /backend/game/record-chat-message
async fn record_chat_message(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    app_state
        .games
        .record_chat(&body.game_name, &body.player_name, &body.chat_message)?;
    Ok(ok_status())
}

/// POST /backend/game/take-turn-by-discarding
async fn take_turn_by_discarding(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CardRequest>,
) -> Result<HttpResponse, AppError> {
    let action = GameAction::Discard {
        card_index: body.card_index,
    };
    app_state
        .games
        .perform(&body.game_name, &body.player_name, action)?;
    Ok(ok_status())
}

/// POST /backend/game/take-turn-by-attempting-to-play
async fn take_turn_by_attempting_to_play(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CardRequest>,
) -> Result<HttpResponse, AppError> {
    let action = GameAction::Play {
        card_index: body.card_index,
    };
    app_state
        .games
        .perform(&body.game_name, &body.player_name, action)?;
    Ok(ok_status())
}

/// POST /backend/game/take-turn-by-hinting-color
async fn take_turn_by_hinting_color(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ColorHintRequest>,
) -> Result<HttpResponse, AppError> {
    let ColorHintRequest {
        game_name,
        player_name,
        receiver_name,
        hinted_color,
    } = body.into_inner();
    let action = GameAction::HintColor {
        receiver: receiver_name,
        color: hinted_color,
    };
    app_state.games.perform(&game_name, &player_name, action)?;
    Ok(ok_status())
}

/// POST /backend/game/take-turn-by-hinting-number
async fn take_turn_by_hinting_number(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NumberHintRequest>,
) -> Result<HttpResponse, AppError> {
    let NumberHintRequest {
        game_name,
        player_name,
        receiver_name,
        hinted_number,
    } = body.into_inner();
    let action = GameAction::HintIndex {
        receiver: receiver_name,
        index: hinted_number,
    };
    app_state.games.perform(&game_name, &player_name, action)?;
    Ok(ok_status())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/available-rulesets", web::get().to(available_rulesets))
        .route(
            "/all-games-with-player/{player_segment}",
            web::get().to(all_games_with_player),
        )
        .route(
            "/game-as-seen-by-player/{game_segment}/{player_segment}",
            web::get().to(game_as_seen_by_player),
        )
        .route("/create-new-game", web::post().to(create_new_game))
        .route("/record-chat-message", web::post().to(record_chat_message))
        .route(
            "/take-turn-by-discarding",
            web::post().to(take_turn_by_discarding),
        )
        .route(
            "/take-turn-by-attempting-to-play",
            web::post().to(take_turn_by_attempting_to_play),
        )
        .route(
            "/take-turn-by-hinting-color",
            web::post().to(take_turn_by_hinting_color),
        )
        .route(
            "/take-turn-by-hinting-number",
            web::post().to(take_turn_by_hinting_number),
        );
}
