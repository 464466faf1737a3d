use snak_view::config;
use snak_view::view::session::SessionController;
use snak_view::view::snapshot::Cell;

fn cell(x: u16, y: u16) -> Cell {
    Cell::new(x, y)
}

#[test]
fn full_session_against_raw_protocol_messages() {
    let mut session = SessionController::new();

    // State before init has nothing to paint onto.
    session.handle_message(r#"{"state":{"players":{"p1":"0x0"},"ap":"1x1"}}"#);
    assert!(session.grid().is_none());

    session.handle_message(r#"{"init":{"field":"8x8","player_count":2}}"#);
    let grid = session.grid().expect("grid after init");
    assert_eq!((grid.width(), grid.height()), (8, 8));

    // First running state: two players and the apple appear.
    session.handle_message(
        r#"{"state":{"players":{"p1":"1x1,1x2","p2":"5x5,5x6"},"ap":"3x3"}}"#,
    );
    let grid = session.grid().unwrap();
    let p1_color = grid.color_at(cell(1, 1)).expect("p1 painted");
    let p2_color = grid.color_at(cell(5, 5)).expect("p2 painted");
    assert_ne!(p1_color, p2_color);
    assert_eq!(grid.color_at(cell(1, 2)), Some(p1_color));
    assert_eq!(grid.color_at(cell(5, 6)), Some(p2_color));
    assert_eq!(grid.color_at(cell(3, 3)), Some(config::APPLE_COLOR));

    // p1 eats the apple and grows; the apple respawns elsewhere.
    session.handle_message(
        r#"{"state":{"players":{"p1":"1x1,1x2,1x3","p2":"5x6,5x7+5x5"},"ap":"6x2"}}"#,
    );
    let grid = session.grid().unwrap();
    assert_eq!(grid.color_at(cell(1, 3)), Some(p1_color));
    assert_eq!(grid.color_at(cell(1, 1)), Some(p1_color));
    assert_eq!(grid.color_at(cell(5, 5)), None);
    assert_eq!(grid.color_at(cell(5, 7)), Some(p2_color));
    assert_eq!(grid.color_at(cell(3, 3)), None);
    assert_eq!(grid.color_at(cell(6, 2)), Some(config::APPLE_COLOR));

    // A malformed snapshot is dropped without disturbing the display.
    session.handle_message(r#"{"state":{"players":{"p1":"1x1,oops"},"ap":"6x2"}}"#);
    let grid = session.grid().unwrap();
    assert_eq!(grid.color_at(cell(1, 3)), Some(p1_color));
    assert_eq!(grid.color_at(cell(6, 2)), Some(config::APPLE_COLOR));

    // p2 dies; its cells are wiped.
    session.handle_message(r#"{"state":{"players":{"p1":"1x1,1x2,1x3"},"ap":"6x2"}}"#);
    let grid = session.grid().unwrap();
    assert_eq!(grid.color_at(cell(5, 6)), None);
    assert_eq!(grid.color_at(cell(5, 7)), None);
    assert_eq!(grid.color_at(cell(1, 2)), Some(p1_color));
}

#[test]
fn entities_past_the_palette_go_unpainted_until_a_color_frees_up() {
    let mut session = SessionController::new();
    session.handle_message(r#"{"init":{"field":"16x16","player_count":8}}"#);

    // Seven players against a six-color palette: the seventh gets nothing.
    let players: Vec<String> = (0..7)
        .map(|i| format!(r#""p{}":"{}x0""#, i, i * 2))
        .collect();
    let state = format!(
        r#"{{"state":{{"players":{{{}}},"ap":"15x15"}}}}"#,
        players.join(",")
    );
    session.handle_message(&state);

    let grid = session.grid().unwrap();
    let painted = (0..7)
        .filter(|i| grid.color_at(cell(i * 2, 0)).is_some())
        .count();
    assert_eq!(painted, 6);

    // One painted player leaving frees a color for the next arrival.
    let survivors: Vec<String> = (1..7)
        .map(|i| format!(r#""p{}":"{}x0""#, i, i * 2))
        .collect();
    let state = format!(
        r#"{{"state":{{"players":{{{}}},"ap":"15x15"}}}}"#,
        survivors.join(",")
    );
    session.handle_message(&state);

    let with_newcomer: Vec<String> = (1..8)
        .map(|i| format!(r#""p{}":"{}x0""#, i, i * 2))
        .collect();
    let state = format!(
        r#"{{"state":{{"players":{{{}}},"ap":"15x15"}}}}"#,
        with_newcomer.join(",")
    );
    session.handle_message(&state);

    let grid = session.grid().unwrap();
    let painted = (1..8)
        .filter(|i| grid.color_at(cell(i * 2, 0)).is_some())
        .count();
    assert_eq!(painted, 7 - 1);
}
