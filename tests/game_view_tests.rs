//! Pure rendering tests: snapshot in, framebuffer out, no terminal.

use tui_snake::core::SessionSnapshot;
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::Pos;

/// 6x4-cell board with the snake along the top row.
fn snapshot<'a>(body: &'a [Pos], obstacles: &'a [Pos]) -> SessionSnapshot<'a> {
    SessionSnapshot {
        body,
        food: Pos::new(80, 60),
        obstacles,
        score: 7,
        high_score: 31,
        difficulty_level: 2,
        game_over: false,
        episode: 0,
        grid_size: 20,
        screen_width: 120,
        screen_height: 80,
    }
}

fn exact_viewport(view: &GameView, snap: &SessionSnapshot<'_>) -> Viewport {
    let (w, h) = view.required_size(snap);
    Viewport::new(w, h)
}

#[test]
fn board_frame_and_cells_land_where_expected() {
    let body = [Pos::new(40, 0), Pos::new(20, 0), Pos::new(0, 0)];
    let snap = snapshot(&body, &[]);
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));

    // Border corners.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 5).unwrap().ch, '└');
    assert_eq!(fb.get(13, 5).unwrap().ch, '┘');

    // Head cell (40, 0) -> board cell (2, 0) -> columns 5..6, row 1.
    assert_eq!(fb.get(5, 1).unwrap().ch, '█');
    assert_eq!(fb.get(6, 1).unwrap().ch, '█');
    // Tail cell (0, 0) -> columns 1..2.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');

    // Food at (80, 60) -> board cell (4, 3) -> columns 9..10, row 4.
    assert_eq!(fb.get(9, 4).unwrap().ch, '●');
    assert_eq!(fb.get(10, 4).unwrap().ch, '●');
}

#[test]
fn obstacles_are_drawn() {
    let body = [Pos::new(40, 0)];
    let obstacles = [Pos::new(0, 20)];
    let snap = snapshot(&body, &obstacles);
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));

    // Obstacle at board cell (0, 1) -> columns 1..2, row 2.
    assert_eq!(fb.get(1, 2).unwrap().ch, '▓');
    assert_eq!(fb.get(2, 2).unwrap().ch, '▓');
}

#[test]
fn panel_shows_score_high_score_and_level() {
    let body = [Pos::new(40, 0)];
    let snap = snapshot(&body, &[]);
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));

    // Panel starts two columns right of the frame (frame is 14 wide).
    assert!(fb.row_text(1).contains("SCORE"));
    assert!(fb.row_text(2).contains('7'));
    assert!(fb.row_text(4).contains("HIGH SCORE"));
    assert!(fb.row_text(5).contains("31"));
    assert!(fb.row_text(7).contains("LEVEL"));
    assert!(fb.row_text(8).contains('2'));
}

#[test]
fn game_over_overlay_is_drawn() {
    let body = [Pos::new(40, 0)];
    let mut snap = snapshot(&body, &[]);
    snap.game_over = true;
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));

    let all_rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(all_rows.iter().any(|row| row.contains("GAME OVER")));
    assert!(all_rows.iter().any(|row| row.contains("R: restart  Q: quit")));
}

#[test]
fn running_snapshot_has_no_overlay() {
    let body = [Pos::new(40, 0)];
    let snap = snapshot(&body, &[]);
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));

    let all_rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(!all_rows.iter().any(|row| row.contains("GAME OVER")));
}

#[test]
fn out_of_board_head_is_skipped_not_panicked() {
    // A head that just left the board (game-over frame) must render fine.
    let body = [Pos::new(-20, 0), Pos::new(0, 0)];
    let snap = snapshot(&body, &[]);
    let view = GameView::default();
    let fb = view.render(&snap, exact_viewport(&view, &snap));
    // Tail still drawn.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
}
