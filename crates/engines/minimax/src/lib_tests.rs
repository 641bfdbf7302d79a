use super::*;
use chess_core::RulesEngine;

fn exact_engine(depth: u8) -> MinimaxEngine {
    MinimaxEngine::with_config(EngineConfig {
        depth,
        jitter: 0,
        seed: None,
    })
}

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::with_config(EngineConfig {
        depth: 2,
        jitter: 10,
        seed: Some(3),
    });
    let pos = Position::startpos();

    let result = engine.search(&pos, SearchLimits::default()).unwrap();

    let mv = result.best_move.expect("start position has moves");
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 0);
}

#[test]
fn minimax_engine_handles_checkmate() {
    let mut engine = exact_engine(3);
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();

    assert!(result.best_move.is_none());
}

#[test]
fn minimax_engine_handles_stalemate() {
    let mut engine = exact_engine(3);
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&pos, SearchLimits::depth(3)).unwrap();

    assert!(result.best_move.is_none());
}

#[test]
fn minimax_engine_reports_score_for_itself() {
    // White wins the queen: +5 after Rxd5, in centipawns
    let mut engine = exact_engine(1);
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();

    let result = engine.search(&pos, SearchLimits::default()).unwrap();

    assert_eq!(result.best_move, Some("d1d5".parse().unwrap()));
    assert_eq!(result.score, 500);
}

#[test]
fn minimax_engine_limits_override_configured_depth() {
    let mut engine = exact_engine(4);
    let pos = Position::startpos();

    let result = engine.search(&pos, SearchLimits::depth(1)).unwrap();

    assert_eq!(result.depth, 1);
    assert_eq!(engine.config().depth, 4);
}

#[test]
fn minimax_engine_accepts_known_options() {
    let mut engine = MinimaxEngine::new();

    assert!(engine.set_option("Depth", "3"));
    assert!(engine.set_option("Jitter", "0"));
    assert!(engine.set_option("Seed", "17"));
    assert_eq!(
        engine.config(),
        &EngineConfig {
            depth: 3,
            jitter: 0,
            seed: Some(17),
        }
    );

    assert!(engine.set_option("seed", "none"));
    assert_eq!(engine.config().seed, None);
}

#[test]
fn minimax_engine_rejects_bad_options() {
    let mut engine = MinimaxEngine::new();

    assert!(!engine.set_option("Depth", "0"));
    assert!(!engine.set_option("Depth", "deep"));
    assert!(!engine.set_option("Jitter", "-3"));
    assert!(!engine.set_option("Hash", "64"));
    assert_eq!(engine.config(), &EngineConfig::default());
}

#[test]
fn minimax_engine_rejects_out_of_range_options() {
    let mut engine = MinimaxEngine::new();

    assert!(!engine.set_option("Jitter", "100000000"));
    assert!(!engine.set_option("Jitter", &(MAX_JITTER + 1).to_string()));
    assert!(!engine.set_option("Depth", &(MAX_DEPTH + 1).to_string()));
    assert_eq!(engine.config(), &EngineConfig::default());

    assert!(engine.set_option("Jitter", &MAX_JITTER.to_string()));
    assert!(engine.set_option("Depth", &MAX_DEPTH.to_string()));
}

#[test]
fn minimax_engine_advertises_validated_limits() {
    let options = MinimaxEngine::new().uci_options();

    assert!(options[0].ends_with(&format!("min 1 max {MAX_DEPTH}")));
    assert!(options[1].ends_with(&format!("min 0 max {MAX_JITTER}")));
}

#[test]
fn minimax_engine_at_max_jitter_still_finds_forced_move() {
    let pos = Position::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1").unwrap();
    let forced = pos.legal_moves()[0];

    for seed in 0..50 {
        let mut engine = MinimaxEngine::with_config(EngineConfig {
            depth: 1,
            jitter: MAX_JITTER,
            seed: Some(seed),
        });
        let result = engine.search(&pos, SearchLimits::default()).unwrap();
        assert_eq!(result.best_move, Some(forced));
        assert!(result.score.abs() <= (9 + MAX_JITTER) * 100);
    }
}
