use std::time::Instant;

use anyhow::anyhow;
use egui::{Context, Id, LayerId, Order, Painter, Vec2};

use blocks_game::game::frame_clock::FrameClock;
use blocks_game::game::game_state::GameState;
use blocks_game::game::input::GameInput;
use blocks_game::game::mechanics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use blocks_game::game::painter_canvas::PainterCanvas;
use blocks_game::game::render::render;
use blocks_game::util::init_logging;

const WINDOW_TITLE: &str = "PROJECT: BLOCKS GAME";

pub struct BlocksApp {
    game_state: GameState,
    game_input: GameInput,
    frame_clock: FrameClock,
}

impl BlocksApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            game_state: GameState::new(),
            game_input: GameInput::none(),
            frame_clock: FrameClock::new(Instant::now()),
        }
    }

    fn read_ui_control(
        &mut self,
        ctx: &Context,
    ) -> bool {
        ctx.input(|i| self.game_input.capture(i));
        ctx.input(|i| i.key_pressed(egui::Key::Escape))
    }

    fn run_due_ticks(&mut self) {
        for _ in 0..self.frame_clock.due_ticks(Instant::now()) {
            self.game_state.update(&self.game_input);
            self.game_input.consume_presses();
        }
    }

    fn draw_game_content(&self, painter: &Painter) {
        render(&self.game_state, &mut PainterCanvas::new(painter));
    }
}

impl eframe::App for BlocksApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let exit = self.read_ui_control(ctx);
        if exit {
            log::info!("quit requested");
            frame.close();
            return;
        }

        self.run_due_ticks();

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);

        ctx.request_repaint_after(self.frame_clock.until_next_tick(Instant::now()));
    }
}

fn blocks_user_game() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        resizable: false,
        ..Default::default()
    };
    eframe::run_native(WINDOW_TITLE, native_options, Box::new(|cc| {
        Box::new(BlocksApp::new(cc))
    }))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    blocks_user_game().map_err(|e| anyhow!("failed to run the game window: {e}"))?;
    Ok(())
}
