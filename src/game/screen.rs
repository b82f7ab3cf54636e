use crate::game::input::{InputSource, Key};
use crate::game::mechanics::RoundStatus;

/// 3 seconds at 60 ticks per second
pub const LOGO_DURATION_FRAMES: u32 = 180;

/// Top level screen. The frame counters drive time based effects only (logo duration, blinking).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Logo { frames_counter: u32 },
    Title { frames_counter: u32 },
    Gameplay,
    Ending { frames_counter: u32 },
}

impl Screen {
    pub fn initial() -> Self {
        Screen::Logo { frames_counter: 0 }
    }

    /// Screen for the next tick.
    ///
    /// `round_status` is the result of this tick's gameplay step and only matters on the gameplay screen.
    pub fn next(self, input: &impl InputSource, round_status: RoundStatus) -> Screen {
        match self {
            Screen::Logo { frames_counter } => {
                let frames_counter = frames_counter.wrapping_add(1);
                if frames_counter >= LOGO_DURATION_FRAMES {
                    Screen::Title { frames_counter: 0 }
                } else {
                    Screen::Logo { frames_counter }
                }
            }
            Screen::Title { frames_counter } => {
                if input.is_key_pressed(Key::Confirm) {
                    Screen::Gameplay
                } else {
                    Screen::Title { frames_counter: frames_counter.wrapping_add(1) }
                }
            }
            Screen::Gameplay => match round_status {
                RoundStatus::InPlay => Screen::Gameplay,
                RoundStatus::LivesExhausted => Screen::Ending { frames_counter: 0 },
            },
            Screen::Ending { frames_counter } => {
                let frames_counter = frames_counter.wrapping_add(1);
                if input.is_key_pressed(Key::Confirm) {
                    Screen::Title { frames_counter }
                } else {
                    Screen::Ending { frames_counter }
                }
            }
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::initial()
    }
}
