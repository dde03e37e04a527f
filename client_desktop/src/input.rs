//! Keyboard input handling

use game_core::Key;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// What the frame loop should do with one SDL event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Pressed(Key),
    Released(Key),
}

/// Translate an SDL event. Unbound keys, auto-repeat and other events map to `None`.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => logical_key(*keycode).map(InputEvent::Pressed),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => logical_key(*keycode).map(InputEvent::Released),
        _ => None,
    }
}

fn logical_key(keycode: Keycode) -> Option<Key> {
    Key::from_name(&keycode.name())
}
