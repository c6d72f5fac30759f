// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// This snake looks one step ahead: it never walks into a wall or a body when
// it can help it, and otherwise moves at random.
// For more info see docs.battlesnake.com

use log::{debug, info, warn};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::move_selector::{Decision, MoveSelector};
use crate::random::RandomSource;
use crate::types::{Battlesnake, Board, Game, InfoResponse, MoveResponse};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    selector: MoveSelector,
    rng: RandomSource,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// The randomness source follows `move_selection.rng_seed`. Debug logging
    /// is off; use [`Bot::with_debug_logger`] to attach one.
    pub fn new(config: Config) -> Self {
        let rng = RandomSource::from_seed(config.move_selection.rng_seed);
        Self::with_random_source(config, rng)
    }

    /// Creates a Bot with an explicit randomness source
    pub fn with_random_source(config: Config, rng: RandomSource) -> Self {
        Bot {
            selector: MoveSelector::new(config.move_selection.bounds_rule),
            config,
            rng,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Replaces the debug logger
    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> InfoResponse {
        info!("INFO");

        let appearance = &self.config.appearance;
        InfoResponse {
            apiversion: appearance.apiversion.clone(),
            author: appearance.author.clone(),
            color: appearance.color.clone(),
            head: appearance.head.clone(),
            tail: appearance.tail.clone(),
        }
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, you: &Battlesnake) {
        info!("GAME START {} (snake {})", game.id, you.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) {
        info!("GAME OVER {} at turn {} (snake {})", game.id, turn, you.id);
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `game` - Current game metadata
    /// * `turn` - Current turn number
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    pub fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> MoveResponse {
        let decision = self.decide(board, you);

        debug!(
            "Turn {}: safe moves {:?}",
            turn,
            decision.safe_moves.iter().map(|d| d.as_str()).collect::<Vec<_>>()
        );
        if decision.is_fallback() {
            warn!(
                "Turn {}: no safe move, falling back to random {}",
                turn,
                decision.chosen.as_str()
            );
        } else {
            info!(
                "Turn {}: Chose {} ({} safe)",
                turn,
                decision.chosen.as_str(),
                decision.safe_moves.len()
            );
        }

        self.debug_logger
            .log_decision(&game.id, *turn, you, board, &decision);

        MoveResponse {
            chosen: decision.chosen,
            shout: self.config.appearance.shout.clone(),
        }
    }

    /// Runs the selector for `you` on `board`
    pub fn decide(&self, board: &Board, you: &Battlesnake) -> Decision {
        self.rng.with_rng(|mut rng| match you.head() {
            Some(head) => self.selector.decide(head, board, &mut rng),
            None => Decision {
                chosen: MoveSelector::select_move(&[], &mut rng),
                safe_moves: vec![],
            },
        })
    }
}
