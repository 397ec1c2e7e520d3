//! Authoritative state of one game and the turn-taking actions that change it.

use std::collections::{HashSet, VecDeque};

use time::OffsetDateTime;

use crate::domain::cards::{Card, HeldCard, InferredCard};
use crate::domain::rolling_log::{Message, RollingLog};
use crate::domain::ruleset::{
    Ruleset, HIGHEST_INDEX, MAXIMUM_NUMBER_OF_HINTS, NUMBER_OF_MISTAKES_ENDING_GAME, PLAYER_COUNT,
};
use crate::domain::turn_order::{is_players_turn, rotate};
use crate::errors::domain::{DomainError, ValidationKind};

/// A game in progress (or finished).
///
/// Participants keep their creation order for the life of the game; only the
/// turn number moves, and it moves by exactly one per completed action. The
/// chat log is internally synchronized, so chat only needs `&self`. Everything
/// else changes through `&mut self` actions.
#[derive(Debug)]
pub struct Game {
    name: String,
    creation_time: OffsetDateTime,
    ruleset: Ruleset,
    participants: Vec<String>,
    turn_number: u32,
    chat_log: RollingLog<Message>,
    action_log: RollingLog<Message>,
    /// Parallel to `participants`.
    hands: Vec<Vec<HeldCard>>,
    deck: VecDeque<Card>,
    /// One pile per ruleset color, in ruleset color order.
    played: Vec<(String, Vec<Card>)>,
    discarded: Vec<Card>,
    ready_hints: u8,
    mistakes_made: u8,
    turns_taken_with_empty_deck: usize,
}

impl Game {
    /// Validate the table and deal from the top of `deck`.
    pub fn new(
        name: impl Into<String>,
        ruleset: Ruleset,
        participants: Vec<String>,
        deck: Vec<Card>,
        chat_capacity: usize,
        action_capacity: usize,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Game name must not be empty",
            ));
        }
        if !PLAYER_COUNT.contains(&participants.len()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Games need between {} and {} players, got {}",
                    PLAYER_COUNT.start(),
                    PLAYER_COUNT.end(),
                    participants.len()
                ),
            ));
        }
        let mut seen = HashSet::new();
        for participant in &participants {
            if !seen.insert(participant.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateParticipant,
                    format!("Player {participant} appears more than once"),
                ));
            }
        }

        let hand_size = ruleset.hand_size(participants.len());
        let cards_needed = hand_size * participants.len();
        if deck.len() < cards_needed {
            return Err(DomainError::validation(
                ValidationKind::Other("DeckTooSmall".into()),
                format!(
                    "Dealing needs {cards_needed} cards but the deck holds {}",
                    deck.len()
                ),
            ));
        }

        let mut deck: VecDeque<Card> = deck.into();
        let hands: Vec<Vec<HeldCard>> = participants
            .iter()
            .map(|_| {
                deck.drain(..hand_size)
                    .map(|card| HeldCard {
                        card,
                        knowledge: ruleset.unknown_card(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(Self {
            name,
            creation_time: OffsetDateTime::now_utc(),
            ruleset,
            participants,
            turn_number: 1,
            chat_log: RollingLog::new(chat_capacity)?,
            action_log: RollingLog::new(action_capacity)?,
            hands,
            deck,
            played: ruleset
                .colors()
                .into_iter()
                .map(|color| (color, Vec::new()))
                .collect(),
            discarded: Vec::new(),
            ready_hints: MAXIMUM_NUMBER_OF_HINTS,
            mistakes_made: 0,
            turns_taken_with_empty_deck: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creation_time(&self) -> OffsetDateTime {
        self.creation_time
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn has_participant(&self, player_name: &str) -> bool {
        self.seat_of(player_name).is_some()
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Participants in the order they act, starting with whoever is up now.
    pub fn current_rotation(&self) -> Vec<String> {
        rotate(&self.participants, self.turn_number)
    }

    pub fn chat_log(&self) -> &RollingLog<Message> {
        &self.chat_log
    }

    pub fn action_log(&self) -> &RollingLog<Message> {
        &self.action_log
    }

    /// Hand of `player_name` in hand-position order.
    pub fn hand_of(&self, player_name: &str) -> Option<&[HeldCard]> {
        self.seat_of(player_name).map(|seat| self.hands[seat].as_slice())
    }

    /// Knowledge each card of `player_name` carries, hand order.
    pub fn knowledge_of_own_hand(&self, player_name: &str) -> Option<Vec<InferredCard>> {
        self.hand_of(player_name)
            .map(|hand| hand.iter().map(|held| held.knowledge.clone()).collect())
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn played_piles(&self) -> &[(String, Vec<Card>)] {
        &self.played
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn ready_hints(&self) -> u8 {
        self.ready_hints
    }

    pub fn mistakes_made(&self) -> u8 {
        self.mistakes_made
    }

    pub fn is_finished(&self) -> bool {
        self.mistakes_made >= NUMBER_OF_MISTAKES_ENDING_GAME
            || self.turns_taken_with_empty_deck >= self.participants.len()
    }

    /// Points for correctly played cards; a game lost to mistakes scores 0.
    pub fn score(&self) -> u32 {
        if self.mistakes_made >= NUMBER_OF_MISTAKES_ENDING_GAME {
            return 0;
        }
        self.played
            .iter()
            .flat_map(|(_, pile)| pile.iter())
            .map(|card| self.ruleset.points_for_card(card))
            .sum()
    }

    /// Append a chat line from a participant.
    pub fn record_chat_message(
        &self,
        player_name: &str,
        color_tag: &str,
        text: &str,
    ) -> Result<(), DomainError> {
        self.require_participant(player_name)?;
        self.chat_log.append(player_name, color_tag, text);
        Ok(())
    }

    pub fn take_turn_by_discarding(
        &mut self,
        actor: &str,
        actor_color: &str,
        card_index: usize,
    ) -> Result<(), DomainError> {
        let seat = self.require_actor(actor)?;
        let card = self.take_from_hand(seat, card_index)?;

        self.ready_hints = (self.ready_hints + 1).min(MAXIMUM_NUMBER_OF_HINTS);
        let text = format!("discarded {card}");
        self.discarded.push(card);
        self.finish_turn(seat, actor, actor_color, text);
        Ok(())
    }

    /// Play a card onto its color's pile if it continues the sequence,
    /// otherwise discard it and count a mistake.
    pub fn take_turn_by_playing(
        &mut self,
        actor: &str,
        actor_color: &str,
        card_index: usize,
    ) -> Result<(), DomainError> {
        let seat = self.require_actor(actor)?;
        let card = self.take_from_hand(seat, card_index)?;

        let pile = self
            .played
            .iter_mut()
            .find(|(color, _)| *color == card.color)
            .map(|(_, pile)| pile);
        let text = match pile {
            Some(pile) if pile.last().map_or(0, |top| top.index) + 1 == card.index => {
                if card.index == HIGHEST_INDEX {
                    self.ready_hints = (self.ready_hints + 1).min(MAXIMUM_NUMBER_OF_HINTS);
                }
                let text = format!("successfully played {card}");
                pile.push(card);
                text
            }
            _ => {
                self.mistakes_made += 1;
                let text = format!(
                    "attempted to play {card} but made mistake {} of {}",
                    self.mistakes_made, NUMBER_OF_MISTAKES_ENDING_GAME
                );
                self.discarded.push(card);
                text
            }
        };

        self.finish_turn(seat, actor, actor_color, text);
        Ok(())
    }

    pub fn take_turn_by_hinting_color(
        &mut self,
        actor: &str,
        actor_color: &str,
        receiver: &str,
        hinted_color: &str,
    ) -> Result<(), DomainError> {
        if !self.ruleset.is_valid_color(hinted_color) {
            return Err(DomainError::validation(
                ValidationKind::InvalidHint,
                format!("{hinted_color} is not a color in this game"),
            ));
        }
        self.hint(actor, actor_color, receiver, hinted_color.to_string(), |held| {
            held.knowledge = held.knowledge.after_color_hint(&held.card, hinted_color);
        })
    }

    pub fn take_turn_by_hinting_index(
        &mut self,
        actor: &str,
        actor_color: &str,
        receiver: &str,
        hinted_index: u8,
    ) -> Result<(), DomainError> {
        if !self.ruleset.is_valid_index(hinted_index) {
            return Err(DomainError::validation(
                ValidationKind::InvalidHint,
                format!("{hinted_index} is not a card number in this game"),
            ));
        }
        self.hint(actor, actor_color, receiver, hinted_index.to_string(), |held| {
            held.knowledge = held.knowledge.after_index_hint(&held.card, hinted_index);
        })
    }

    fn hint(
        &mut self,
        actor: &str,
        actor_color: &str,
        receiver: &str,
        hinted: String,
        mut narrow: impl FnMut(&mut HeldCard),
    ) -> Result<(), DomainError> {
        let seat = self.require_actor(actor)?;
        if receiver == actor {
            return Err(DomainError::validation(
                ValidationKind::HintToSelf,
                "Players cannot give hints to themselves",
            ));
        }
        let receiver_seat = self.seat_of(receiver).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidHint,
                format!("{receiver} is not playing in game {}", self.name),
            )
        })?;
        if self.ready_hints == 0 {
            return Err(DomainError::validation(
                ValidationKind::NoHintsAvailable,
                "No hints are left to give",
            ));
        }

        self.hands[receiver_seat].iter_mut().for_each(&mut narrow);
        self.ready_hints -= 1;
        let text = format!("told {receiver} which cards are {hinted}");
        self.finish_turn(seat, actor, actor_color, text);
        Ok(())
    }

    fn seat_of(&self, player_name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == player_name)
    }

    fn require_participant(&self, player_name: &str) -> Result<usize, DomainError> {
        self.seat_of(player_name)
            .ok_or_else(|| DomainError::not_participant(player_name, &self.name))
    }

    /// Seat of `actor` if they may act right now.
    fn require_actor(&self, actor: &str) -> Result<usize, DomainError> {
        let seat = self.require_participant(actor)?;
        if self.is_finished() {
            return Err(DomainError::validation(
                ValidationKind::GameFinished,
                format!("Game {} has already finished", self.name),
            ));
        }
        if !is_players_turn(&self.current_rotation(), actor) {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("It is not {actor}'s turn"),
            ));
        }
        Ok(seat)
    }

    fn take_from_hand(&mut self, seat: usize, card_index: usize) -> Result<Card, DomainError> {
        let hand = &mut self.hands[seat];
        if card_index >= hand.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardIndex,
                format!(
                    "Card index {card_index} is outside a hand of {} cards",
                    hand.len()
                ),
            ));
        }
        Ok(hand.remove(card_index).card)
    }

    /// Draw a replacement for a hand that just lost a card.
    fn draw_into(&mut self, seat: usize) {
        if let Some(card) = self.deck.pop_front() {
            self.hands[seat].push(HeldCard {
                card,
                knowledge: self.ruleset.unknown_card(),
            });
        }
    }

    fn finish_turn(&mut self, seat: usize, actor: &str, actor_color: &str, text: String) {
        let deck_was_empty = self.deck.is_empty();
        if self.hands[seat].len() < self.ruleset.hand_size(self.participants.len()) {
            self.draw_into(seat);
        }
        if deck_was_empty {
            self.turns_taken_with_empty_deck += 1;
        }
        self.action_log.append(actor, actor_color, text);
        self.turn_number += 1;
    }
}
