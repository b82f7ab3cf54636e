use egui::epaint::{CircleShape, RectShape};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Vec2};

use super::algebra_2d::AaBB;
use super::mechanics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use super::render::Canvas;

/// [`Canvas`] on top of an egui painter, stretching the model screen over the painter's clip rect
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    paint_offset: Vec2,
    canvas_size: Vec2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            paint_offset: painter.clip_rect().min.to_vec2(),
            canvas_size: painter.clip_rect().size(),
        }
    }

    /// pos / MODEL_LEN = result / canvas_size
    /// => result = pos * canvas_size / MODEL_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / SCREEN_WIDTH,
            pos.y * self.canvas_size.y / SCREEN_HEIGHT,
        ) + self.paint_offset
    }

    fn scale_x(
        &self,
        len_x: f32,
    ) -> f32 {
        len_x * self.canvas_size.x / SCREEN_WIDTH
    }

    fn scale_y(
        &self,
        len_y: f32,
    ) -> f32 {
        len_y * self.canvas_size.y / SCREEN_HEIGHT
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.add(RectShape::filled(self.painter.clip_rect(), Rounding::none(), color));
    }

    fn draw_rectangle(&mut self, rect: AaBB, color: Color32) {
        self.painter.add(RectShape::filled(
            Rect::from_two_pos(self.scale(rect.min), self.scale(rect.max)),
            Rounding::none(),
            color,
        ));
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.add(CircleShape::filled(self.scale(center), self.scale_x(radius), color));
    }

    fn draw_text(&mut self, text: &str, pos: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            self.scale(pos),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(self.scale_y(font_size)),
            color,
        );
    }

    /// Width in model x units. Text is laid out with the same font scale as [`Canvas::draw_text`]
    /// uses, so the result matches the drawn text for any canvas aspect ratio.
    fn measure_text_width(&self, text: &str, font_size: f32) -> f32 {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(self.scale_y(font_size)),
            Color32::WHITE,
        );
        galley.size().x * SCREEN_WIDTH / self.canvas_size.x
    }
}
