// Debug logging module for asynchronous game state logging
//
// This module provides fire-and-forget async logging to avoid blocking
// the main request/response cycle. Each decision is written as one line
// of a JSONL file, which the replay tool can read back.
//
// Entries go through an unbounded channel to a single writer task, so lines
// land in the order `log_decision` was called.

use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::move_selector::Decision;
use crate::types::{Battlesnake, Board, Direction};

/// Represents a single debug log entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DecisionLogEntry {
    pub game_id: String,
    pub turn: i32,
    pub you: Battlesnake,
    pub chosen_move: Direction,
    pub safe_moves: Vec<Direction>,
    pub fallback: bool,
    pub board: Board,
    pub timestamp: String,
}

/// Handle to the writer task; `None` when logging is off
#[derive(Clone)]
pub struct DebugLogger {
    sender: Option<UnboundedSender<DecisionLogEntry>>,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    /// and spawns the writer task, so it must run inside a tokio runtime
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                info!("Debug logging enabled: {}", log_file_path);
                let (sender, receiver) = mpsc::unbounded_channel();
                tokio::spawn(Self::run_writer(file, receiver));
                DebugLogger {
                    sender: Some(sender),
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger { sender: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    /// Queues a move decision for the writer task (fire-and-forget)
    pub fn log_decision(
        &self,
        game_id: &str,
        turn: i32,
        you: &Battlesnake,
        board: &Board,
        decision: &Decision,
    ) {
        let Some(sender) = &self.sender else {
            return;
        };

        let entry = DecisionLogEntry {
            game_id: game_id.to_string(),
            turn,
            you: you.clone(),
            chosen_move: decision.chosen,
            safe_moves: decision.safe_moves.clone(),
            fallback: decision.is_fallback(),
            board: board.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        if sender.send(entry).is_err() {
            error!("Debug log writer has stopped, dropping turn {}", turn);
        }
    }

    /// Appends entries to the file one at a time until every sender is dropped
    async fn run_writer(mut file: File, mut receiver: UnboundedReceiver<DecisionLogEntry>) {
        while let Some(entry) = receiver.recv().await {
            match serde_json::to_string(&entry) {
                Ok(json_line) => {
                    let line_with_newline = format!("{}\n", json_line);
                    if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                        error!("Failed to write debug log entry: {}", e);
                    } else if let Err(e) = file.flush().await {
                        error!("Failed to flush debug log: {}", e);
                    }
                }
                Err(e) => {
                    error!("Failed to serialize debug log entry: {}", e);
                }
            }
        }
    }
}
