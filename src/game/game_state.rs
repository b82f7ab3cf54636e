use crate::game::input::InputSource;
use crate::game::mechanics::{BlocksMechanics, RoundStatus};
use crate::game::screen::Screen;

/// Everything the game knows: the active screen plus the gameplay entities
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub screen: Screen,
    pub mechanics: BlocksMechanics,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            screen: Screen::initial(),
            mechanics: BlocksMechanics::new(),
        }
    }

    /// one tick: run the active screen's logic, then move on to the next screen
    pub fn update(&mut self, input: &impl InputSource) {
        let round_status = match self.screen {
            Screen::Gameplay => self.mechanics.time_step(input),
            _ => RoundStatus::InPlay,
        };

        let next = self.screen.next(input, round_status);
        if std::mem::discriminant(&next) != std::mem::discriminant(&self.screen) {
            log::info!("screen {:?} -> {:?}", self.screen, next);
        }
        if round_status == RoundStatus::LivesExhausted {
            self.mechanics.player.reset_lives();
        }
        self.screen = next;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
