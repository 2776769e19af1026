use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// New full text of the URL field.
    Edit(String),
    Submit,
    Quit,
}

/// Maps a key press against the current field text to a UI action.
///
/// Enter only submits while the submit control is enabled.
pub fn map_key(key: KeyEvent, current: &str, submit_enabled: bool) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('c') if ctrl => Some(UiAction::Quit),
        KeyCode::Char('u') if ctrl => Some(UiAction::Edit(String::new())),
        KeyCode::Enter => submit_enabled.then_some(UiAction::Submit),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(UiAction::Edit(text))
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = current.to_string();
            text.push(ch);
            Some(UiAction::Edit(text))
        }
        _ => None,
    }
}

/// Appends pasted text to the field; the field is single-line.
pub fn apply_paste(current: &str, pasted: &str) -> String {
    let mut text = current.to_string();
    text.extend(pasted.chars().filter(|ch| !ch.is_control()));
    text
}
