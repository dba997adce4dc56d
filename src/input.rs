use std::collections::HashSet;

use sdl2::keyboard::Keycode;
use tess_core::TessLevels;

/// Keys that change the tessellation levels, in the order they are applied
/// when several are pressed in the same frame. Reset comes first so that a
/// step pressed alongside it lands on top of the defaults.
const LEVEL_KEYS: [Keycode; 5] = [
    Keycode::R,
    Keycode::Up,
    Keycode::Down,
    Keycode::Right,
    Keycode::Left,
];

/// Keys pressed since the start of the current frame.
#[derive(Default)]
pub struct KeyboardState {
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets last frame's presses. Call before polling events.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.pressed.insert(keycode);
    }
}

/// Applies this frame's key presses to the tessellation levels. Returns
/// `false` when the user asked to quit.
pub fn apply_controls(keyboard: &KeyboardState, levels: &mut TessLevels, step: f32) -> bool {
    if keyboard.pressed.contains(&Keycode::Escape) {
        return false;
    }

    let mut changed = false;
    for key in LEVEL_KEYS {
        if !keyboard.pressed.contains(&key) {
            continue;
        }
        changed |= match key {
            Keycode::Up => levels.adjust_inner(step),
            Keycode::Down => levels.adjust_inner(-step),
            Keycode::Right => levels.adjust_outer(step),
            Keycode::Left => levels.adjust_outer(-step),
            Keycode::R => {
                let old = *levels;
                levels.reset();
                old != *levels
            }
            _ => false,
        };
    }

    if changed {
        log::info!(
            "Tessellation levels: inner {} outer {}",
            levels.inner(),
            levels.outer()
        );
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keys: &[Keycode]) -> KeyboardState {
        let mut keyboard = KeyboardState::default();
        for &key in keys {
            keyboard.key_down(key);
        }
        keyboard
    }

    #[test]
    fn test_arrows_step_levels() {
        let mut levels = TessLevels::default();
        assert!(apply_controls(&press(&[Keycode::Up, Keycode::Left]), &mut levels, 1.0));
        assert_eq!(levels.inner(), 4.0);
        assert_eq!(levels.outer(), 1.0);

        assert!(apply_controls(&press(&[Keycode::Down, Keycode::Right]), &mut levels, 0.5));
        assert_eq!(levels.inner(), 3.5);
        assert_eq!(levels.outer(), 1.5);
    }

    #[test]
    fn test_reset_and_escape() {
        let mut levels = TessLevels::new(10.0, 10.0);
        assert!(apply_controls(&press(&[Keycode::R]), &mut levels, 1.0));
        assert_eq!(levels, TessLevels::default());

        assert!(!apply_controls(&press(&[Keycode::Escape, Keycode::Up]), &mut levels, 1.0));
        assert_eq!(levels, TessLevels::default());
    }

    #[test]
    fn test_same_frame_keys_apply_in_fixed_order() {
        // HashSet iteration order varies between instances, so repeat with
        // fresh sets to catch any dependence on it.
        for _ in 0..64 {
            let mut levels = TessLevels::new(10.0, 10.0);
            apply_controls(&press(&[Keycode::Up, Keycode::R]), &mut levels, 1.0);
            assert_eq!(levels, TessLevels::new(4.0, 2.0));

            let mut levels = TessLevels::new(64.0, 5.0);
            apply_controls(&press(&[Keycode::Down, Keycode::Up]), &mut levels, 1.0);
            assert_eq!(levels, TessLevels::new(63.0, 5.0));
        }
    }

    #[test]
    fn test_presses_last_one_frame() {
        let mut keyboard = press(&[Keycode::Up]);
        keyboard.begin_frame();
        let mut levels = TessLevels::default();
        apply_controls(&keyboard, &mut levels, 1.0);
        assert_eq!(levels.inner(), 3.0);
        assert!(keyboard.pressed.is_empty());
    }
}
