pub mod algebra_2d;
pub mod frame_clock;
pub mod game_state;
pub mod input;
pub mod mechanics;
pub mod painter_canvas;
pub mod render;
pub mod screen;
