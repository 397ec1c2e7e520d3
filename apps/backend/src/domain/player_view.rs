//! Per-player projection of a game: what one participant is allowed to see.
//!
//! Every other participant's cards are shown as they truly are. The viewer's
//! own cards are replaced by what the viewer has inferred from hints, so the
//! true identity of those cards never enters a [`PlayerView`].

use serde::Serialize;

use crate::domain::cards::{Card, InferredCard};
use crate::domain::game::Game;
use crate::domain::rolling_log::Message;
use crate::domain::ruleset::{MAXIMUM_NUMBER_OF_HINTS, NUMBER_OF_MISTAKES_ENDING_GAME};
use crate::domain::turn_order::{is_players_turn, split_around};
use crate::errors::domain::DomainError;

/// Another participant's hand as the viewer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleHand {
    pub player_name: String,
    pub player_color: String,
    pub hand_cards: Vec<Card>,
    /// What that player knows about their own cards; public to the table.
    pub knowledge_of_own_hand: Vec<InferredCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedPile {
    pub color: String,
    pub cards: Vec<Card>,
}

/// Read-only snapshot of a game tailored to one viewing participant.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub game_name: String,
    pub ruleset_description: String,
    pub chat_log: Vec<Message>,
    pub action_log: Vec<Message>,
    pub turn_number: u32,
    pub turn_order: Vec<String>,
    pub is_players_turn: bool,
    pub game_is_finished: bool,
    pub this_player_can_take_turn: bool,
    pub score: u32,
    pub number_of_ready_hints: u8,
    pub maximum_number_of_hints: u8,
    pub number_of_mistakes_made: u8,
    pub number_of_mistakes_ending_game: u8,
    pub number_of_cards_left_in_deck: usize,
    pub played_cards: Vec<PlayedPile>,
    pub discarded_cards: Vec<Card>,
    pub hands_before_this_player: Vec<VisibleHand>,
    pub hands_after_this_player: Vec<VisibleHand>,
    pub knowledge_of_own_hand: Vec<InferredCard>,
    pub hint_colors: Vec<String>,
    pub hint_indices: Vec<u8>,
}

/// Project `game` for `viewer`, looking up chat colors with `color_of`.
///
/// Fails only when `viewer` is not a participant; no partial view is built.
pub fn project(
    game: &Game,
    viewer: &str,
    color_of: impl Fn(&str) -> String,
) -> Result<PlayerView, DomainError> {
    let knowledge_of_own_hand = game
        .knowledge_of_own_hand(viewer)
        .ok_or_else(|| DomainError::not_participant(viewer, game.name()))?;

    let turn_order = game.current_rotation();
    let (before, after) = split_around(&turn_order, viewer)
        .ok_or_else(|| DomainError::not_participant(viewer, game.name()))?;
    let visible = |names: &[String]| -> Vec<VisibleHand> {
        names
            .iter()
            .map(|name| visible_hand(game, name, &color_of))
            .collect()
    };
    let hands_before_this_player = visible(before);
    let hands_after_this_player = visible(after);

    let is_players_turn = is_players_turn(&turn_order, viewer);
    let game_is_finished = game.is_finished();

    let mut discarded_cards = game.discarded().to_vec();
    let colors = game.ruleset().colors();
    discarded_cards.sort_by_key(|card| {
        let color_rank = colors.iter().position(|c| *c == card.color);
        (color_rank, card.index)
    });

    Ok(PlayerView {
        game_name: game.name().to_string(),
        ruleset_description: game.ruleset().description().to_string(),
        chat_log: game.chat_log().snapshot(),
        action_log: game.action_log().snapshot(),
        turn_number: game.turn_number(),
        turn_order,
        is_players_turn,
        game_is_finished,
        this_player_can_take_turn: is_players_turn && !game_is_finished,
        score: game.score(),
        number_of_ready_hints: game.ready_hints(),
        maximum_number_of_hints: MAXIMUM_NUMBER_OF_HINTS,
        number_of_mistakes_made: game.mistakes_made(),
        number_of_mistakes_ending_game: NUMBER_OF_MISTAKES_ENDING_GAME,
        number_of_cards_left_in_deck: game.deck_size(),
        played_cards: game
            .played_piles()
            .iter()
            .map(|(color, cards)| PlayedPile {
                color: color.clone(),
                cards: cards.clone(),
            })
            .collect(),
        discarded_cards,
        hands_before_this_player,
        hands_after_this_player,
        knowledge_of_own_hand,
        hint_colors: colors,
        hint_indices: game.ruleset().distinct_indices(),
    })
}

fn visible_hand(game: &Game, player_name: &str, color_of: &impl Fn(&str) -> String) -> VisibleHand {
    let hand = game.hand_of(player_name).unwrap_or_default();
    VisibleHand {
        player_name: player_name.to_string(),
        player_color: color_of(player_name),
        hand_cards: hand.iter().map(|held| held.card.clone()).collect(),
        knowledge_of_own_hand: hand.iter().map(|held| held.knowledge.clone()).collect(),
    }
}
