use memory_master::core::{GameSnapshot, GameStateMachine, NullHost};
use memory_master::term::{AnchorY, FrameBuffer, GameView, Viewport};
use memory_master::types::{DifficultyTier, Phase, RoundState, Symbol};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn ready_game() -> GameStateMachine {
    let mut game = GameStateMachine::new(99);
    game.start_game(DifficultyTier::Beginner, &mut NullHost).unwrap();
    game.tick(60_000, &mut NullHost);
    assert_eq!(game.round_state(), RoundState::AwaitingInput);
    game
}

#[test]
fn term_view_renders_menu_before_first_run() {
    let snap = GameStateMachine::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let fb = view.render(&snap, vp);
    let layout = view.layout(vp);

    assert!(fb.row_text(layout.title_y).contains("MEMORY"));
    assert!(fb.row_text(layout.score_y).contains("SCORE 00"));
    assert!(fb.row_text(layout.status_y).contains("PICK A TIER"));
    assert!(fb.row_text(layout.menu_y).contains("[B]EGINNER"));
    assert!(fb.row_text(layout.scores_y).contains("HIGH SCORES"));

    // Buttons are drawn greyed out with their key hints.
    for symbol in Symbol::ALL {
        let (x, y) = view.button_origin(&layout, symbol);
        assert_eq!(fb.get(x, y).unwrap().ch, '▒');
        let hint = fb.get(x + 6, y + 2).unwrap().ch;
        assert_eq!(hint, char::from(b'1' + symbol.index()));
    }
}

#[test]
fn term_view_lights_the_replayed_button() {
    let mut game = GameStateMachine::new(5);
    game.start_game(DifficultyTier::Medium, &mut NullHost).unwrap();
    // Medium: 800ms wait, then lit for 400ms.
    game.tick(900, &mut NullHost);
    let lit = game.highlighted().unwrap();

    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let fb = view.render(&game.snapshot(), vp);
    let layout = view.layout(vp);

    for symbol in Symbol::ALL {
        let (x, y) = view.button_origin(&layout, symbol);
        let cell = fb.get(x, y).unwrap();
        if symbol == lit {
            assert_eq!(cell.ch, '█');
            assert!(cell.style.bold);
        } else {
            assert_eq!(cell.ch, '▒');
        }
    }
    assert!(fb.row_text(layout.status_y).contains("WATCH · MEDIUM"));
    assert!(fb.row_text(layout.menu_y).contains("ROUND 1  [R] RESTART"));
}

#[test]
fn term_view_counts_player_progress() {
    let mut game = ready_game();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let layout = view.layout(vp);

    let fb = view.render(&game.snapshot(), vp);
    assert!(fb.row_text(layout.status_y).contains("YOUR TURN 0/4"));

    let first = game.sequence()[0];
    game.press(first, &mut NullHost);
    let fb = view.render(&game.snapshot(), vp);
    assert!(fb.row_text(layout.status_y).contains("YOUR TURN 1/4"));

    // Clearing the round moves the counter on.
    let rest = game.sequence().clone();
    for &symbol in &rest[1..] {
        game.press(symbol, &mut NullHost);
    }
    let fb = view.render(&game.snapshot(), vp);
    assert!(fb.row_text(layout.menu_y).contains("ROUND 2  [R] RESTART"));
}

#[test]
fn term_view_shows_game_over_dialog_and_high_scores() {
    let mut game = ready_game();
    let first = game.sequence()[0];
    let wrong = Symbol::from_index((first.index() + 1) % 4).unwrap();
    game.press(wrong, &mut NullHost);

    let snap = game.snapshot();
    assert_eq!(snap.phase, Phase::GameOverDialog);

    let fb = GameView::default().render(&snap, Viewport::new(80, 30));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("FINAL SCORE 00"));
    assert!(all.contains("[ENTER] TRY AGAIN"));
    assert!(all.contains("01 • 000"));
}

#[test]
fn term_view_lists_every_leaderboard_entry() {
    let mut snap = GameSnapshot::default();
    for score in [42, 17, 9, 3, 1] {
        snap.leaderboard.push(score);
    }

    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let fb = view.render(&snap, vp);
    let layout = view.layout(vp);

    assert!(fb.row_text(layout.scores_y + 1).contains("01 • 042"));
    assert!(fb.row_text(layout.scores_y + 5).contains("05 • 001"));
}

#[test]
fn term_view_centers_content_by_default_on_tall_viewports() {
    let view = GameView::default();
    let vp = Viewport::new(80, 40);
    let layout = view.layout(vp);
    assert_eq!(layout.title_y, (40 - view.content_height()) / 2);

    let fb = view.render(&GameSnapshot::default(), vp);
    assert!(fb.row_text(layout.title_y).contains("MEMORY"));
}

#[test]
fn term_view_can_anchor_content_to_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 40));
    assert!(fb.row_text(0).contains("MEMORY"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let view = GameView::default();
    let snap = ready_game().snapshot();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (40, 12)] {
        let fb = view.render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
