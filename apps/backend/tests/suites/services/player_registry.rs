use fireworks::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use fireworks::PlayerRegistry;

use crate::common::{names, COLORS};

fn registry() -> PlayerRegistry {
    PlayerRegistry::new(names(&COLORS)).unwrap()
}

#[test]
fn default_colors_rotate_through_the_palette() {
    let players = registry();
    players
        .register_initial(&names(&["Alice", "Bob", "Carol", "Dave"]))
        .unwrap();

    let colors: Vec<String> = players.all().into_iter().map(|p| p.chat_color).collect();
    assert_eq!(colors, names(&["pink", "green", "blue", "pink"]));
}

#[test]
fn explicit_color_does_not_advance_the_rotation() {
    let players = registry();
    players.register("Alice", Some("blue")).unwrap();
    let bob = players.register("Bob", None).unwrap();

    assert_eq!(players.color_of("Alice"), "blue");
    assert_eq!(bob.chat_color, "pink");
}

#[test]
fn registration_is_validated() {
    let players = registry();
    players.register("Alice", None).unwrap();

    assert!(matches!(
        players.register("Alice", None),
        Err(DomainError::Conflict(ConflictKind::PlayerName, _))
    ));
    assert!(matches!(
        players.register("  ", None),
        Err(DomainError::Validation(ValidationKind::InvalidName, _))
    ));
    assert!(matches!(
        players.register("Bob", Some("mauve")),
        Err(DomainError::Validation(ValidationKind::InvalidColor, _))
    ));
    assert!(players.get("Bob").is_none());
}

#[test]
fn color_updates_need_a_known_player_and_color() {
    let players = registry();
    players.register("Alice", None).unwrap();

    let updated = players.update_color("Alice", "green").unwrap();
    assert_eq!(updated.chat_color, "green");
    assert_eq!(players.color_of("Alice"), "green");

    assert!(matches!(
        players.update_color("Zed", "green"),
        Err(DomainError::NotFound(NotFoundKind::Player, _))
    ));
    assert!(matches!(
        players.update_color("Alice", "mauve"),
        Err(DomainError::Validation(ValidationKind::InvalidColor, _))
    ));
    assert_eq!(players.color_of("Zed"), "");
}
