use egui::{Color32, Pos2, Vec2};

use crate::game::algebra_2d::AaBB;
use crate::game::game_state::GameState;
use crate::game::mechanics::{BlocksMechanics, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::screen::Screen;

pub const RAYWHITE: Color32 = Color32::from_rgb(245, 245, 245);
pub const LIGHTGRAY: Color32 = Color32::from_rgb(200, 200, 200);
pub const GRAY: Color32 = Color32::from_rgb(130, 130, 130);
pub const DARKGRAY: Color32 = Color32::from_rgb(80, 80, 80);
pub const BLACK: Color32 = Color32::BLACK;
pub const MAROON: Color32 = Color32::from_rgb(190, 33, 55);
pub const DARKGREEN: Color32 = Color32::from_rgb(0, 117, 44);
pub const DARKBLUE: Color32 = Color32::from_rgb(0, 82, 172);

/// prompt visibility toggles every 30 frames
pub const BLINK_HALF_PERIOD_FRAMES: u32 = 30;

const HEADLINE_POS: Pos2 = Pos2::new(20.0, 20.0);
const HEADLINE_SIZE: f32 = 40.0;
const PROMPT_SIZE: f32 = 20.0;
const PAUSED_BANNER_SIZE: f32 = 40.0;

/// Drawing primitives in model coordinates (TOP / LEFT corner is 0/0).
pub trait Canvas {
    fn clear(&mut self, color: Color32);
    fn draw_rectangle(&mut self, rect: AaBB, color: Color32);
    fn draw_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    /// `pos` is the upper left corner of the text
    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32);
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32;
}

pub fn blink_visible(frames_counter: u32) -> bool {
    (frames_counter / BLINK_HALF_PERIOD_FRAMES) % 2 == 0
}

/// Draws the current state. Never changes it.
pub fn render(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear(RAYWHITE);
    match state.screen {
        Screen::Logo { .. } => {
            canvas.draw_text("LOGO SCREEN", HEADLINE_POS, HEADLINE_SIZE, LIGHTGRAY);
        }
        Screen::Title { frames_counter } => {
            canvas.draw_text("TITLE SCREEN", HEADLINE_POS, HEADLINE_SIZE, DARKGREEN);
            if blink_visible(frames_counter) {
                draw_centered_text(canvas, "PRESS [ENTER] to START", SCREEN_HEIGHT / 2.0 + 60.0, PROMPT_SIZE, DARKGRAY);
            }
        }
        Screen::Gameplay => draw_gameplay(&state.mechanics, canvas),
        Screen::Ending { frames_counter } => {
            canvas.draw_text("ENDING SCREEN", HEADLINE_POS, HEADLINE_SIZE, DARKBLUE);
            if blink_visible(frames_counter) {
                draw_centered_text(canvas, "PRESS [ENTER] to PLAY AGAIN", SCREEN_HEIGHT / 2.0 + 80.0, PROMPT_SIZE, GRAY);
            }
        }
    }
}

fn draw_gameplay(mechanics: &BlocksMechanics, canvas: &mut impl Canvas) {
    canvas.draw_rectangle(mechanics.player.bounds, BLACK);
    canvas.draw_circle(mechanics.ball.position, mechanics.ball.radius, MAROON);

    for ((row, col), brick) in mechanics.bricks.iter().filter(|(_, b)| b.active) {
        let color = if (row + col) % 2 == 0 { GRAY } else { DARKGRAY };
        canvas.draw_rectangle(brick.bounds, color);
    }

    for i in 0..mechanics.player.lives.max(0) {
        canvas.draw_rectangle(
            AaBB::from_pos_size(
                Pos2::new(20.0 + 40.0 * i as f32, SCREEN_HEIGHT - 30.0),
                Vec2::new(35.0, 10.0),
            ),
            LIGHTGRAY,
        );
    }

    if mechanics.paused {
        draw_centered_text(canvas, "GAME PAUSED", SCREEN_HEIGHT / 2.0 + 60.0, PAUSED_BANNER_SIZE, GRAY);
    }
}

fn draw_centered_text(canvas: &mut impl Canvas, text: &str, top_y: f32, font_size: f32, color: Color32) {
    let x = SCREEN_WIDTH / 2.0 - canvas.measure_text_width(text, font_size) / 2.0;
    canvas.draw_text(text, Pos2::new(x, top_y), font_size, color);
}
