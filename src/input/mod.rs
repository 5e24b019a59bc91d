use winit::keyboard::KeyCode;

/// Current held-key state for the two direction keys, plus a one-shot fire
/// edge. Fire is latched on the press transition only; key auto-repeat is
/// ignored so holding the key does not machine-gun.
#[derive(Default)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    fire: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_press(&mut self, keycode: KeyCode, repeat: bool) {
        match keycode {
            KeyCode::ArrowUp => self.move_up = true,
            KeyCode::ArrowDown => self.move_down = true,
            KeyCode::Space => {
                if !repeat {
                    self.fire = true;
                }
            }
            _ => {}
        }
    }

    pub fn handle_key_release(&mut self, keycode: KeyCode) {
        match keycode {
            KeyCode::ArrowUp => self.move_up = false,
            KeyCode::ArrowDown => self.move_down = false,
            _ => {}
        }
    }

    /// Consume the pending fire edge, if any.
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire)
    }
}
