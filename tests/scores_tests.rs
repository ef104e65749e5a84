// Host-side tests for the score table and cycler.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scores {
    include!("../src/core/scores.rs");
}

use scores::*;

fn full_board() -> ScoreBoard<&'static str> {
    let nodes = [Some("dockq"), Some("qs"), Some("ics"), Some("modfold")];
    ScoreBoard::new(nodes, ScoreCycler::default()).unwrap()
}

#[test]
fn first_tick_shows_wild_type() {
    let mut cycler = ScoreCycler::default();
    let row = cycler.tick();
    assert_eq!(row.label, "Wild Type");
    assert_eq!(row.display(ScoreField::DockQ), "0.72");
    assert_eq!(cycler.tick().label, "Y33W");
}

#[test]
fn cycling_has_period_five() {
    let mut cycler = ScoreCycler::default();
    let labels: Vec<&str> = (0..10).map(|_| cycler.tick().label).collect();
    assert_eq!(
        labels,
        [
            "Wild Type", "Y33W", "S52F", "T28A", "D31K", "Wild Type", "Y33W", "S52F", "T28A",
            "D31K"
        ]
    );
}

#[test]
fn tick_n_matches_table_row_n_mod_len() {
    let mut cycler = ScoreCycler::default();
    for n in 0..23 {
        let row = cycler.tick();
        assert_eq!(row, &SCORE_TABLE[n % SCORE_TABLE.len()], "tick {n}");
    }
}

#[test]
fn values_always_render_with_two_decimals() {
    assert_eq!(format_score(0.7), "0.70");
    assert_eq!(format_score(1.0), "1.00");
    for row in SCORE_TABLE {
        for field in ScoreField::ALL {
            let text = row.display(field);
            let (_, frac) = text.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 2, "{} {:?} -> {}", row.label, field, text);
        }
    }
}

#[test]
fn data_keys_match_the_score_card_markup() {
    let keys: Vec<&str> = ScoreField::ALL.iter().map(|f| f.data_key()).collect();
    assert_eq!(keys, ["dockq", "qs", "ics", "modfold"]);
}

#[test]
fn board_without_dockq_is_inert() {
    let nodes = [None, Some("qs"), Some("ics"), Some("modfold")];
    assert!(ScoreBoard::new(nodes, ScoreCycler::default()).is_none());
}

#[test]
fn board_writes_every_present_node() {
    let mut board = full_board();
    let (row, writes) = board.tick();
    assert_eq!(row.label, "Wild Type");
    let writes: Vec<(&str, String)> = writes.into_iter().map(|(n, t)| (*n, t)).collect();
    assert_eq!(
        writes,
        vec![
            ("dockq", "0.72".to_string()),
            ("qs", "0.68".to_string()),
            ("ics", "0.74".to_string()),
            ("modfold", "0.65".to_string()),
        ]
    );
}

#[test]
fn board_skips_missing_nodes_but_keeps_cycling() {
    let nodes = [Some("dockq"), None, Some("ics"), None];
    let mut board = ScoreBoard::new(nodes, ScoreCycler::default()).unwrap();
    let first: Vec<&str> = board.tick().1.into_iter().map(|(n, _)| *n).collect();
    assert_eq!(first, vec!["dockq", "ics"]);

    let (row, second) = board.tick();
    assert_eq!(row.label, "Y33W");
    assert_eq!(second[0].1, "0.85");
    assert_eq!(second[1].1, "0.88");
}

#[test]
fn board_returns_to_first_row_after_five_ticks() {
    let mut board = full_board();
    let tick0 = board.tick().1[0].1.clone();
    for _ in 0..4 {
        board.tick();
    }
    let tick5 = board.tick().1[0].1.clone();
    assert_eq!(tick0, "0.72");
    assert_eq!(tick5, tick0);
    assert_eq!(board.tick().0.label, "Y33W");
}
