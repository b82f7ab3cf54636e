use egui::Pos2;
use rstest::rstest;

use blocks_game::game::game_state::GameState;
use blocks_game::game::mechanics::{BRICK_COLUMNS, BRICK_ROWS};
use blocks_game::game::render::{render, BLACK, DARKGRAY, GRAY, LIGHTGRAY, MAROON, RAYWHITE};
use blocks_game::game::screen::Screen;

use common::{DrawCall, RecordingCanvas};

mod common;

fn rendered(state: &GameState) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::default();
    render(state, &mut canvas);
    canvas
}

fn gameplay() -> GameState {
    let mut state = GameState::new();
    state.screen = Screen::Gameplay;
    state
}

#[test]
fn every_frame_starts_with_clearing() {
    let canvas = rendered(&GameState::new());
    assert_eq!(canvas.calls.first(), Some(&DrawCall::Clear(RAYWHITE)));
    assert_eq!(canvas.texts(), vec!["LOGO SCREEN"]);
}

#[rstest]
#[case(Screen::Title { frames_counter: 0 }, vec!["TITLE SCREEN", "PRESS [ENTER] to START"])]
#[case(Screen::Title { frames_counter: 45 }, vec!["TITLE SCREEN"])]
#[case(Screen::Ending { frames_counter: 60 }, vec!["ENDING SCREEN", "PRESS [ENTER] to PLAY AGAIN"])]
#[case(Screen::Ending { frames_counter: 30 }, vec!["ENDING SCREEN"])]
fn prompts_blink(#[case] screen: Screen, #[case] expected_texts: Vec<&str>) {
    let mut state = GameState::new();
    state.screen = screen;
    assert_eq!(rendered(&state).texts(), expected_texts);
}

#[test]
fn prompt_is_centered() {
    let mut state = GameState::new();
    state.screen = Screen::Title { frames_counter: 0 };
    let canvas = rendered(&state);
    let prompt = "PRESS [ENTER] to START";
    let width = prompt.len() as f32 * 20.0 * common::CHAR_WIDTH_PER_FONT_SIZE;
    assert!(canvas.calls.iter().any(|c| matches!(
        c,
        DrawCall::Text(text, pos, size, _) if text == prompt && *pos == Pos2::new(400.0 - width / 2.0, 285.0) && *size == 20.0
    )));
}

#[test]
fn gameplay_draws_all_entities() {
    let state = gameplay();
    let canvas = rendered(&state);

    let mechanics = &state.mechanics;
    assert!(canvas.calls.contains(&DrawCall::Rectangle(mechanics.player.bounds, BLACK)));
    assert!(canvas.calls.contains(&DrawCall::Circle(mechanics.ball.position, 10.0, MAROON)));

    let rectangles = canvas.rectangles();
    let bricks = rectangles.iter().filter(|(_, color)| *color == GRAY || *color == DARKGRAY).count();
    assert_eq!(bricks, BRICK_ROWS * BRICK_COLUMNS);
    let lives = rectangles.iter().filter(|(_, color)| *color == LIGHTGRAY).count();
    assert_eq!(lives, 5);
    assert!(canvas.texts().is_empty());
}

#[test]
fn bricks_use_a_checkerboard() {
    let state = gameplay();
    let canvas = rendered(&state);
    let rectangles = canvas.rectangles();
    let bricks = &state.mechanics.bricks;

    assert!(rectangles.contains(&(bricks.get(0, 0).bounds, GRAY)));
    assert!(rectangles.contains(&(bricks.get(0, 1).bounds, DARKGRAY)));
    assert!(rectangles.contains(&(bricks.get(1, 0).bounds, DARKGRAY)));
    assert!(rectangles.contains(&(bricks.get(3, 5).bounds, GRAY)));
}

#[test]
fn broken_bricks_and_lives_disappear() {
    let mut state = gameplay();
    state.mechanics.bricks.get_mut(2, 7).active = false;
    state.mechanics.player.lives = 2;
    let canvas = rendered(&state);
    let rectangles = canvas.rectangles();

    assert!(!rectangles.iter().any(|(rect, _)| *rect == state.mechanics.bricks.get(2, 7).bounds));
    let life_indicators = rectangles.iter()
        .filter(|(_, color)| *color == LIGHTGRAY)
        .map(|(rect, _)| rect.min)
        .collect::<Vec<_>>();
    assert_eq!(life_indicators, vec![Pos2::new(20.0, 420.0), Pos2::new(60.0, 420.0)]);
}

#[test]
fn paused_banner() {
    let mut state = gameplay();
    state.mechanics.paused = true;
    assert_eq!(rendered(&state).texts(), vec!["GAME PAUSED"]);
}

#[test]
fn rendering_does_not_change_the_state() {
    let state = gameplay();
    let before = state.clone();
    rendered(&state);
    assert_eq!(state, before);
}
