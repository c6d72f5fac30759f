// Library exports for the Battlesnake bot
// This allows the server binary, the replay tool and the tests to share the core logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod handler;
pub mod move_selector;
pub mod random;
pub mod replay;
pub mod types;
