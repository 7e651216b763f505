use super::events::Event;

/// Keys the picker dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Other(String),
}

/// Keyboard activation for clickable elements.
///
/// Runs `handler` and suppresses the host default iff the key is Space or
/// Enter; any other event is left untouched.
pub fn on_space_or_enter(event: &mut Event, handler: impl FnOnce(&Event)) {
    if matches!(event.key(), Some(Key::Space | Key::Enter)) {
        handler(event);
        event.prevent_default();
    }
}
