// Replay module for auditing historical decisions from debug logs
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Recompute the safe-move set for every logged turn
// 3. Flag turns where the logged move was not among the safe moves
// 4. Generate a summary report
//
// Moves are drawn at random, so replay checks consistency with the safety
// filter rather than reproducing the exact choice.

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::debug_logger::DecisionLogEntry;
use crate::move_selector::MoveSelector;
use crate::types::Direction;

/// Errors raised while loading or replaying a debug log
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },

    #[error("failed to parse JSON on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("turn {0} not found in log file")]
    TurnNotFound(i32),

    #[error("turn {turn}: expected one of {expected:?}, but got {actual}")]
    UnexpectedMove {
        turn: i32,
        expected: Vec<Direction>,
        actual: Direction,
    },
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub logged_move: Direction,
    pub logged_safe_moves: Vec<Direction>,
    pub replayed_safe_moves: Vec<Direction>,
    /// Logged move was safe, or nothing was safe and any move was allowed
    pub move_was_safe: bool,
    pub safe_set_matches: bool,
}

impl ReplayResult {
    pub fn is_consistent(&self) -> bool {
        self.move_was_safe && self.safe_set_matches
    }

    pub fn is_fallback(&self) -> bool {
        self.replayed_safe_moves.is_empty()
    }
}

/// Statistics for a complete replay session
#[derive(Debug, Default, PartialEq)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub consistent: usize,
    pub inconsistent: usize,
    pub fallbacks: usize,
    pub consistency_rate: f64,
}

/// Replay engine for auditing debug logs
pub struct ReplayEngine {
    selector: MoveSelector,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine using the bounds rule from `config`
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine {
            selector: MoveSelector::new(config.move_selection.bounds_rule),
            verbose,
        }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(
        &self,
        log_path: P,
    ) -> Result<Vec<DecisionLogEntry>, ReplayError> {
        let path = log_path.as_ref();
        let file = File::open(path).map_err(|source| ReplayError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ReplayError::Read {
                line: line_num + 1,
                source,
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionLogEntry =
                serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
                    line: line_num + 1,
                    source,
                })?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Recomputes the safe set for one logged turn and compares it
    pub fn replay_entry(&self, entry: &DecisionLogEntry) -> ReplayResult {
        let replayed_safe_moves = match entry.you.head() {
            Some(head) => self.selector.compute_safe_moves(head, &entry.board),
            None => vec![],
        };

        let move_was_safe =
            replayed_safe_moves.is_empty() || replayed_safe_moves.contains(&entry.chosen_move);
        let safe_set_matches = same_moves(&replayed_safe_moves, &entry.safe_moves);

        let result = ReplayResult {
            turn: entry.turn,
            logged_move: entry.chosen_move,
            logged_safe_moves: entry.safe_moves.clone(),
            replayed_safe_moves,
            move_was_safe,
            safe_set_matches,
        };

        if self.verbose {
            if result.is_consistent() {
                info!(
                    "Turn {}: ✓ CONSISTENT - {} (safe: {})",
                    result.turn,
                    result.logged_move,
                    format_moves(&result.replayed_safe_moves)
                );
            } else {
                warn!(
                    "Turn {}: ✗ INCONSISTENT - logged {} with safe [{}], replay found safe [{}]",
                    result.turn,
                    result.logged_move,
                    format_moves(&result.logged_safe_moves),
                    format_moves(&result.replayed_safe_moves)
                );
            }
        }

        result
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[DecisionLogEntry]) -> Vec<ReplayResult> {
        entries.iter().map(|entry| self.replay_entry(entry)).collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[DecisionLogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, ReplayError> {
        turn_numbers
            .iter()
            .map(|turn_num| {
                Self::find_turn(entries, *turn_num).map(|entry| self.replay_entry(entry))
            })
            .collect()
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let consistent = results.iter().filter(|r| r.is_consistent()).count();
        let fallbacks = results.iter().filter(|r| r.is_fallback()).count();
        let consistency_rate = if total_turns > 0 {
            (consistent as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            consistent,
            inconsistent: total_turns - consistent,
            fallbacks,
            consistency_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!(
            "Consistent:     {} ({:.1}%)",
            stats.consistent, stats.consistency_rate
        );
        println!("Inconsistent:   {}", stats.inconsistent);
        println!("Fallbacks:      {}", stats.fallbacks);
        println!("═══════════════════════════════════════════════════════════\n");

        let inconsistent: Vec<_> = results.iter().filter(|r| !r.is_consistent()).collect();
        if !inconsistent.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                 INCONSISTENT TURNS");
            println!("═══════════════════════════════════════════════════════════");

            for result in inconsistent {
                println!(
                    "Turn {}: logged {} (logged safe [{}], replayed safe [{}])",
                    result.turn,
                    result.logged_move,
                    format_moves(&result.logged_safe_moves),
                    format_moves(&result.replayed_safe_moves)
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[DecisionLogEntry],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), ReplayError> {
        for (turn, acceptable) in expected_moves {
            let entry = Self::find_turn(entries, *turn)?;

            if !acceptable.contains(&entry.chosen_move) {
                return Err(ReplayError::UnexpectedMove {
                    turn: *turn,
                    expected: acceptable.clone(),
                    actual: entry.chosen_move,
                });
            }
        }

        Ok(())
    }

    fn find_turn(entries: &[DecisionLogEntry], turn: i32) -> Result<&DecisionLogEntry, ReplayError> {
        entries
            .iter()
            .find(|e| e.turn == turn)
            .ok_or(ReplayError::TurnNotFound(turn))
    }
}

/// Order-insensitive comparison of two move sets
fn same_moves(a: &[Direction], b: &[Direction]) -> bool {
    a.len() == b.len() && a.iter().all(|m| b.contains(m))
}

fn format_moves(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_moves_ignores_order() {
        assert!(same_moves(
            &[Direction::Up, Direction::Left],
            &[Direction::Left, Direction::Up]
        ));
        assert!(!same_moves(&[Direction::Up], &[Direction::Up, Direction::Down]));
        assert!(same_moves(&[], &[]));
    }

    #[test]
    fn test_stats_on_empty_results() {
        let engine = ReplayEngine::new(Config::default_hardcoded(), false);
        assert_eq!(engine.generate_stats(&[]), ReplayStats::default());
    }
}
