use rustc_hash::FxHashSet;

/// Logical keys the game reacts to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// starts the game from TITLE and returns from ENDING
    Confirm,
    Pause,
    Launch,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Left, Key::Right, Key::Confirm, Key::Pause, Key::Launch];

    pub fn egui_key(&self) -> egui::Key {
        match self {
            Key::Left => egui::Key::ArrowLeft,
            Key::Right => egui::Key::ArrowRight,
            Key::Confirm => egui::Key::Enter,
            Key::Pause => egui::Key::P,
            Key::Launch => egui::Key::Space,
        }
    }
}

/// Keyboard state as seen by one game tick.
pub trait InputSource {
    /// level triggered: the key is held down
    fn is_key_down(&self, key: Key) -> bool;
    /// edge triggered: the key went down since the previous tick
    fn is_key_pressed(&self, key: Key) -> bool;
}

impl InputSource for egui::InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.key_down(key.egui_key())
    }

    /// OS key repeats of a held key do not count
    fn is_key_pressed(&self, key: Key) -> bool {
        let egui_key = key.egui_key();
        self.events.iter().any(|e| matches!(
            e,
            egui::Event::Key { key, pressed: true, repeat: false, .. } if *key == egui_key
        ))
    }
}

/// Snapshot of the keys for one tick.
///
/// The host collects it from its event loop via [`GameInput::capture`]; tests build it directly
/// to script deterministic input sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameInput {
    held: FxHashSet<Key>,
    pressed: FxHashSet<Key>,
}

impl GameInput {
    pub fn none() -> Self {
        Self::default()
    }

    /// key went down in this tick (which also means it is held)
    pub fn pressed(key: Key) -> Self {
        Self::none().with_pressed(key)
    }

    pub fn held(key: Key) -> Self {
        Self::none().with_held(key)
    }

    pub fn with_pressed(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.held.insert(key);
        self
    }

    pub fn with_held(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Merge the current host frame into this snapshot.
    /// Held keys reflect the latest frame, presses accumulate until [`GameInput::consume_presses`].
    pub fn capture(&mut self, source: &impl InputSource) {
        self.held.clear();
        for key in Key::ALL {
            if source.is_key_down(key) {
                self.held.insert(key);
            }
            if source.is_key_pressed(key) {
                self.pressed.insert(key);
            }
        }
    }

    /// forget the presses after a tick has seen them
    pub fn consume_presses(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for GameInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
