//! Keyboard handling

use crate::client::WeatherClient;
use crate::runtime::ChatRuntime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::ops::ControlFlow;

/// What a key press asks the client to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Backspace,
    Submit,
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputAction::Insert(c)
        }
        _ => InputAction::Ignore,
    }
}

/// Apply an action to the runtime. Draft editing is disabled while a reply
/// is pending; Enter is always forwarded and the gate decides.
pub fn apply_action<C>(runtime: &mut ChatRuntime<C>, action: InputAction) -> ControlFlow<()>
where
    C: WeatherClient + 'static,
{
    let busy = runtime.session().is_busy();
    match action {
        InputAction::Quit => return ControlFlow::Break(()),
        InputAction::Submit => {
            runtime.start_submit();
        }
        InputAction::Insert(c) if !busy => {
            let mut draft = runtime.session().draft().to_string();
            draft.push(c);
            runtime.set_draft(draft);
        }
        InputAction::Backspace if !busy => {
            let mut draft = runtime.session().draft().to_string();
            draft.pop();
            runtime.set_draft(draft);
        }
        InputAction::Insert(_) | InputAction::Backspace | InputAction::Ignore => {}
    }
    ControlFlow::Continue(())
}
