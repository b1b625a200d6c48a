//! Keyboard and mouse bindings for placement and tavern actions.
//!
//! Systems read from the `KeyBindings` resource instead of hardcoding
//! `KeyCode` values. Movement and confirm/cancel carry a secondary binding.

use bevy::prelude::*;

use crate::buildings::BuildingKind;

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// A binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Bindings without modifiers ignore whatever modifiers are held, so
    /// walking with Shift down keeps working. Modified bindings need an
    /// exact match.
    fn modifiers_match(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !self.ctrl && !self.shift {
            return true;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// True on the frame the key goes down with the right modifiers held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.just_pressed(self.key) && self.modifiers_match(keys)
    }

    /// True while the key is held (continuous actions like walking).
    pub fn pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.pressed(self.key) && self.modifiers_match(keys)
    }

    /// Human-readable label (e.g. "Shift+R", "Esc").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyD => "D",
        KeyCode::KeyE => "E",
        KeyCode::KeyP => "P",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyR => "R",
        KeyCode::KeyS => "S",
        KeyCode::KeyW => "W",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Space => "Space",
        KeyCode::Escape => "Esc",
        KeyCode::Enter => "Enter",
        KeyCode::ArrowUp => "Up",
        KeyCode::ArrowDown => "Down",
        KeyCode::ArrowLeft => "Left",
        KeyCode::ArrowRight => "Right",
        _ => "?",
    }
}

/// Number-row key for a 1-based building hotkey index.
pub fn digit_key(index: u8) -> KeyCode {
    match index {
        1 => KeyCode::Digit1,
        2 => KeyCode::Digit2,
        3 => KeyCode::Digit3,
        4 => KeyCode::Digit4,
        5 => KeyCode::Digit5,
        6 => KeyCode::Digit6,
        7 => KeyCode::Digit7,
        8 => KeyCode::Digit8,
        9 => KeyCode::Digit9,
        _ => KeyCode::Digit0,
    }
}

/// Central resource holding every configurable binding.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    // Placement
    pub select_tavern: KeyBinding,
    pub select_town_hall: KeyBinding,
    pub rotate: KeyBinding,
    pub confirm: KeyBinding,
    pub confirm_mouse: MouseButton,
    pub cancel: KeyBinding,
    pub cancel_mouse: MouseButton,

    // Walking
    pub move_forward: KeyBinding,
    pub move_forward_alt: KeyBinding,
    pub move_back: KeyBinding,
    pub move_back_alt: KeyBinding,
    pub move_left: KeyBinding,
    pub move_left_alt: KeyBinding,
    pub move_right: KeyBinding,
    pub move_right_alt: KeyBinding,

    // Tavern
    pub strike: KeyBinding,
    pub pick_up: KeyBinding,
    pub deliver: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            select_tavern: KeyBinding::simple(digit_key(BuildingKind::Tavern.hotkey_index())),
            select_town_hall: KeyBinding::simple(digit_key(BuildingKind::TownHall.hotkey_index())),
            rotate: KeyBinding::simple(KeyCode::KeyR),
            confirm: KeyBinding::simple(KeyCode::KeyP),
            confirm_mouse: MouseButton::Left,
            cancel: KeyBinding::simple(KeyCode::Escape),
            cancel_mouse: MouseButton::Right,
            move_forward: KeyBinding::simple(KeyCode::KeyW),
            move_forward_alt: KeyBinding::simple(KeyCode::ArrowUp),
            move_back: KeyBinding::simple(KeyCode::KeyS),
            move_back_alt: KeyBinding::simple(KeyCode::ArrowDown),
            move_left: KeyBinding::simple(KeyCode::KeyA),
            move_left_alt: KeyBinding::simple(KeyCode::ArrowLeft),
            move_right: KeyBinding::simple(KeyCode::KeyD),
            move_right_alt: KeyBinding::simple(KeyCode::ArrowRight),
            strike: KeyBinding::simple(KeyCode::Space),
            pick_up: KeyBinding::simple(KeyCode::KeyQ),
            deliver: KeyBinding::simple(KeyCode::KeyE),
        }
    }
}

impl KeyBindings {
    /// Binding that selects `kind` for placement.
    pub fn select(&self, kind: BuildingKind) -> KeyBinding {
        match kind {
            BuildingKind::Tavern => self.select_tavern,
            BuildingKind::TownHall => self.select_town_hall,
        }
    }

    /// Every keyboard binding with its label, for conflict checks and help text.
    pub fn all(&self) -> [(&'static str, KeyBinding); 16] {
        [
            ("Select Tavern", self.select_tavern),
            ("Select Town Hall", self.select_town_hall),
            ("Rotate", self.rotate),
            ("Place", self.confirm),
            ("Cancel", self.cancel),
            ("Walk forward", self.move_forward),
            ("Walk forward", self.move_forward_alt),
            ("Walk back", self.move_back),
            ("Walk back", self.move_back_alt),
            ("Walk left", self.move_left),
            ("Walk left", self.move_left_alt),
            ("Walk right", self.move_right),
            ("Walk right", self.move_right_alt),
            ("Strike vat", self.strike),
            ("Pick up", self.pick_up),
            ("Deliver", self.deliver),
        ]
    }
}

pub struct KeyBindingsPlugin;

impl Plugin for KeyBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>();
    }
}
