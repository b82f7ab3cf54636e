#![allow(dead_code)]

use egui::{Color32, Pos2};
use log::LevelFilter;

use blocks_game::game::algebra_2d::AaBB;
use blocks_game::game::render::Canvas;

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init();
}

/// approximate width per character for the recorded text
pub const CHAR_WIDTH_PER_FONT_SIZE: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color32),
    Rectangle(AaBB, Color32),
    Circle(Pos2, f32, Color32),
    Text(String, Pos2, f32, Color32),
}

/// Canvas which keeps a log of all draw calls
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter()
            .filter_map(|c| match c {
                DrawCall::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rectangles(&self) -> Vec<(AaBB, Color32)> {
        self.calls.iter()
            .filter_map(|c| match c {
                DrawCall::Rectangle(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color32) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_rectangle(&mut self, rect: AaBB, color: Color32) {
        self.calls.push(DrawCall::Rectangle(rect, color));
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32) {
        self.calls.push(DrawCall::Text(text.to_owned(), pos, font_size, color));
    }

    fn measure_text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * CHAR_WIDTH_PER_FONT_SIZE
    }
}
