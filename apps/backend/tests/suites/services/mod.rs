pub mod concurrency;
pub mod player_registry;
