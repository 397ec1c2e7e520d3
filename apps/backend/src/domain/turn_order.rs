//! Turn order derived from the participant list and the turn counter.
//!
//! Nothing here is stored: the game keeps its participants in creation order
//! and a 1-based turn number, and every "whose turn is it" question is
//! answered by rotating that list on demand.

/// Participants reordered so the player due to act on `turn_number` comes first.
///
/// Index 0 is `participants[(turn_number - 1) % len]`, followed by the rest in
/// cyclic order. Callers guarantee `turn_number >= 1`; a turn number of 0 is
/// treated as turn 1. An empty participant list rotates to an empty list.
pub fn rotate<T: Clone>(participants: &[T], turn_number: u32) -> Vec<T> {
    if participants.is_empty() {
        return Vec::new();
    }
    let start = (turn_number.saturating_sub(1) as usize) % participants.len();
    let (before, from_start) = participants.split_at(start);
    from_start.iter().chain(before.iter()).cloned().collect()
}

/// True iff `player_name` heads the rotated order. Absent names are never up.
pub fn is_players_turn<S: AsRef<str>>(rotated: &[S], player_name: &str) -> bool {
    rotated
        .first()
        .is_some_and(|first| first.as_ref() == player_name)
}

/// Split a rotated order around `viewer` into the players seated before and
/// after them, keeping relative order within each half. Returns `None` when
/// the viewer is absent.
pub fn split_around<'a, S: AsRef<str>>(
    rotated: &'a [S],
    viewer: &str,
) -> Option<(&'a [S], &'a [S])> {
    let position = rotated.iter().position(|name| name.as_ref() == viewer)?;
    Some((&rotated[..position], &rotated[position + 1..]))
}
