#![allow(dead_code)]

use fireworks::config::ServerConfig;
use fireworks::state::app_state::AppState;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    fireworks_test_support::logging::init();
}

pub const PLAYERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];
pub const COLORS: [&str; 3] = ["pink", "green", "blue"];

pub fn test_config() -> ServerConfig {
    ServerConfig {
        initial_player_names: PLAYERS.iter().map(|p| p.to_string()).collect(),
        chat_colors: COLORS.iter().map(|c| c.to_string()).collect(),
        ..ServerConfig::default()
    }
}

/// State with Alice, Bob, Carol and Dave registered (pink, green, blue, pink).
pub fn test_state() -> AppState {
    AppState::new(&test_config()).expect("test configuration is valid")
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}
