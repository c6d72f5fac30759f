// Integration tests for the Bot facade
//
// Exercises the endpoint-shaped methods with hand-built game states,
// including seeded reproducibility and the trapped-snake fallback.

use random_safe_snake::bot::Bot;
use random_safe_snake::config::Config;
use random_safe_snake::move_selector::BoundsRule;
use random_safe_snake::random::RandomSource;
use random_safe_snake::types::{Battlesnake, Board, Coord, Direction, Game};
use std::collections::HashMap;

fn test_game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        timeout: 500,
        source: "test".to_string(),
    }
}

fn our_snake(body: Vec<Coord>) -> Battlesnake {
    Battlesnake {
        id: "our-snake".to_string(),
        name: "Rusty".to_string(),
        health: 50,
        length: body.len() as i32,
        body,
        shout: None,
    }
}

fn seeded_config(seed: u64) -> Config {
    let mut config = Config::default_hardcoded();
    config.move_selection.rng_seed = Some(seed);
    config
}

#[test]
fn test_move_in_corridor_is_the_only_safe_one() {
    let bot = Bot::new(Config::default_hardcoded());

    // Snake in the top-left corner with its neck to the right: only down is open
    let you = our_snake(vec![Coord { x: 0, y: 0 }, Coord { x: 1, y: 0 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    for turn in 0..20 {
        let response = bot.get_move(&test_game(), &turn, &board, &you);
        assert_eq!(response.chosen, Direction::Down);
    }
}

#[test]
fn test_trapped_snake_still_returns_a_move() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = our_snake(vec![
        Coord { x: 5, y: 10 },
        Coord { x: 5, y: 9 },
        Coord { x: 4, y: 9 },
        Coord { x: 4, y: 10 },
    ]);
    let opponent = Battlesnake {
        id: "opponent".to_string(),
        name: "Enemy".to_string(),
        health: 50,
        body: vec![Coord { x: 6, y: 10 }, Coord { x: 5, y: 11 }, Coord { x: 6, y: 11 }],
        length: 3,
        shout: None,
    };
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone(), opponent],
        hazards: vec![],
    };

    let decision = bot.decide(&board, &you);
    assert!(decision.is_fallback(), "safe moves: {:?}", decision.safe_moves);

    let response = bot.get_move(&test_game(), &0, &board, &you);
    assert!(Direction::all().contains(&response.chosen));
}

#[test]
fn test_strict_rule_keeps_snake_on_the_board() {
    let mut config = Config::default_hardcoded();
    config.move_selection.bounds_rule = BoundsRule::Strict;
    let bot = Bot::new(config);

    // Bottom row, neck above: reference rule would also allow down
    let you = our_snake(vec![Coord { x: 0, y: 10 }, Coord { x: 0, y: 9 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    for turn in 0..20 {
        let response = bot.get_move(&test_game(), &turn, &board, &you);
        assert_eq!(response.chosen, Direction::Right);
    }
}

#[test]
fn test_reference_rule_allows_moving_below_the_bottom_row() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = our_snake(vec![Coord { x: 0, y: 10 }, Coord { x: 0, y: 9 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let decision = bot.decide(&board, &you);
    assert_eq!(decision.safe_moves, vec![Direction::Down, Direction::Right]);
}

#[test]
fn test_seeded_bots_make_identical_choices() {
    let first = Bot::new(seeded_config(1234));
    let second = Bot::new(seeded_config(1234));

    let you = our_snake(vec![Coord { x: 5, y: 5 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let a: Vec<Direction> = (0..30)
        .map(|t| first.get_move(&test_game(), &t, &board, &you).chosen)
        .collect();
    let b: Vec<Direction> = (0..30)
        .map(|t| second.get_move(&test_game(), &t, &board, &you).chosen)
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_thread_source_varies_across_calls() {
    let bot = Bot::with_random_source(Config::default_hardcoded(), RandomSource::Thread);

    let you = our_snake(vec![Coord { x: 5, y: 5 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let distinct: std::collections::HashSet<Direction> = (0..200)
        .map(|t| bot.get_move(&test_game(), &t, &board, &you).chosen)
        .collect();
    assert!(distinct.len() > 1, "200 draws produced a single direction");
}

#[test]
fn test_body_less_snake_gets_fallback_move() {
    let bot = Bot::new(Config::default_hardcoded());
    let you = our_snake(vec![]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![],
        hazards: vec![],
    };

    let decision = bot.decide(&board, &you);
    assert!(decision.is_fallback());
}

#[test]
fn test_shout_comes_from_config() {
    let mut config = Config::default_hardcoded();
    config.appearance.shout = Some("hiss".to_string());
    let bot = Bot::new(config);

    let you = our_snake(vec![Coord { x: 5, y: 5 }]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let response = bot.get_move(&test_game(), &0, &board, &you);
    assert_eq!(response.shout.as_deref(), Some("hiss"));
}

#[test]
fn test_info_reflects_appearance() {
    let bot = Bot::new(Config::default_hardcoded());
    let info = bot.info();

    assert_eq!(info.apiversion, "1");
    assert_eq!(info.author, "jayuuza");
    assert_eq!(info.color, "#ff6600");
    assert_eq!(info.head, "pixel");
    assert_eq!(info.tail, "pixel");
}
