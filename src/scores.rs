use crate::constants::{SCORE_ATTR, SCORE_INTERVAL_MS};
use crate::core::{ScoreBoard, ScoreCycler, ScoreField};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn score_node(document: &web::Document, field: ScoreField) -> Option<web::Element> {
    dom::query_one(document, &format!("[{}=\"{}\"]", SCORE_ATTR, field.data_key()))
}

fn render(board: &mut ScoreBoard<web::Element>) {
    let (row, writes) = board.tick();
    log::debug!("[scores] showing {}", row.label);
    for (node, text) in writes {
        dom::set_text(node, &text);
    }
}

/// Fill the score card now and refresh it on a fixed interval for the rest of
/// the page's life. Pages without a `dockq` node get no timer.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let nodes = ScoreField::ALL.map(|field| score_node(document, field));
    let Some(board) = ScoreBoard::new(nodes, ScoreCycler::default()) else {
        log::debug!("[scores] no dockq node; cycler inert");
        return Ok(());
    };
    let board = Rc::new(RefCell::new(board));
    render(&mut board.borrow_mut());

    let board_tick = board.clone();
    dom::set_interval(SCORE_INTERVAL_MS, move || {
        render(&mut board_tick.borrow_mut());
    })?;
    log::info!("[scores] cycling every {} ms", SCORE_INTERVAL_MS);
    Ok(())
}
