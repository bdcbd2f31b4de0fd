//! Input events, converted from crossterm.

use futures::{Stream, StreamExt, future};

/// Input the dropdown reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    /// Mouse press.
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse wheel, positive `delta` scrolls down.
    Scroll { x: u16, y: u16, delta: i16 },
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn click(x: u16, y: u16) -> Self {
        Event::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Convert a crossterm event, dropping the kinds the dropdown ignores.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollDown => Some(Event::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollUp => Some(Event::Scroll { x, y, delta: -1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Terminal input as a stream of dropdown events.
pub fn event_stream() -> impl Stream<Item = std::io::Result<Event>> + Unpin {
    crossterm::event::EventStream::new().filter_map(|res| {
        future::ready(match res {
            Ok(ev) => Event::from_crossterm(ev).map(Ok),
            Err(e) => Some(Err(e)),
        })
    })
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
