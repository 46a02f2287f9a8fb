//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::RenderState;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Search box
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    SubmitSearch,

    // Saved account cards
    NextCard,
    PrevCard,
    /// Open the card at this index in the detail overlay
    OpenCard(usize),
    /// Remove the card at this index from the saved collection
    RemoveCard(usize),

    // Detail overlay
    CloseOverlay,
    NextRepo,
    PrevRepo,
    /// Open the repository at this index in the system browser
    OpenRepoLink(usize),

    ToggleTheme,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode of the search box
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on what is currently on screen
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if let Some(overlay) = &state.overlay {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('x') => Some(UiEvent::CloseOverlay),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextRepo),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevRepo),
            KeyCode::Enter | KeyCode::Char('o') if !overlay.repos.is_empty() => {
                Some(UiEvent::OpenRepoLink(overlay.selected_repo))
            }
            KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitSearch),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
        InputMode::Normal => {
            let has_cards = !state.accounts.is_empty();
            match key.code {
                KeyCode::Char('q') => Some(UiEvent::Quit),
                KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
                KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Char('e') => {
                    Some(UiEvent::StartEditing)
                }
                KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
                KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('j') => {
                    Some(UiEvent::NextCard)
                }
                KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('k') => {
                    Some(UiEvent::PrevCard)
                }
                KeyCode::Enter if has_cards => Some(UiEvent::OpenCard(state.selected_card)),
                KeyCode::Char('d') | KeyCode::Delete if has_cards => {
                    Some(UiEvent::RemoveCard(state.selected_card))
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::OverlayView;
    use crate::models::{Account, Repository};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_cards() -> RenderState {
        RenderState {
            accounts: vec![Account::new("a"), Account::new("b")],
            selected_card: 1,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_enter_opens_selected_card() {
        let state = state_with_cards();
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::OpenCard(1)));
    }

    #[test]
    fn test_delete_removes_without_opening() {
        let state = state_with_cards();
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), &state), Some(UiEvent::RemoveCard(1)));
        assert_eq!(key_to_ui_event(press(KeyCode::Delete), &state), Some(UiEvent::RemoveCard(1)));
    }

    #[test]
    fn test_no_card_actions_when_empty() {
        let state = RenderState::default();
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), &state), None);
    }

    #[test]
    fn test_editing_enter_submits() {
        let state = RenderState {
            input_mode: InputMode::Editing,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::SubmitSearch));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &state), Some(UiEvent::CharInput('q')));
    }

    #[test]
    fn test_overlay_keys() {
        let mut state = state_with_cards();
        state.overlay = Some(OverlayView {
            account: Account::new("a"),
            repos: vec![Repository {
                id: 1,
                name: "r".into(),
                description: None,
                html_url: "https://github.com/a/r".into(),
                stargazers_count: 0,
                forks_count: 0,
                language: None,
            }],
            loading: false,
            selected_repo: 0,
        });
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), &state), Some(UiEvent::CloseOverlay));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::OpenRepoLink(0)));
        // Card removal is not reachable while the overlay covers the grid
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), &state), None);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let state = RenderState {
            show_help: true,
            ..state_with_cards()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let state = RenderState {
            input_mode: InputMode::Editing,
            ..RenderState::default()
        };
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, &state), Some(UiEvent::Quit));
    }
}
