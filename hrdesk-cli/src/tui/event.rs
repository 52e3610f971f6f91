//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hrdesk_core::screens::login::LoginFocus;

use super::app::{App, Mode, Tab};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    if key.kind == KeyEventKind::Release {
        return HandleResult::Continue;
    }

    // Global quit shortcut (Ctrl+C)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::Form => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => return HandleResult::Quit,

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Char(c @ '1'..='6') => {
            if let Some(tab) = Tab::from_digit(c) {
                app.switch_tab(tab);
            }
        }

        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('v') => app.toggle_view(),
        KeyCode::Char('d') => app.cycle_department(),
        KeyCode::Char('[') => app.step_date(false),
        KeyCode::Char(']') => app.step_date(true),

        KeyCode::Enter => {
            if app.tab == Tab::Login {
                app.mode = Mode::Form;
            } else if app.detail.is_none() {
                app.open_detail();
            }
        }

        KeyCode::Esc => {
            if !app.close_detail() && !app.query().is_empty() {
                app.search_clear();
            }
        }

        // Home/End
        KeyCode::Home | KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_index = app.list_len().saturating_sub(1);
        }

        _ => {}
    }
    HandleResult::Continue
}

/// Handle keys in search mode; every keystroke re-filters immediately
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.search_clear();
            app.exit_mode();
        }
        KeyCode::Enter => app.exit_mode(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char(c) => app.search_insert(c),
        _ => {}
    }
    HandleResult::Continue
}

/// Handle keys while the login form has focus
fn handle_form_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.login.cancel();
            app.exit_mode();
        }
        KeyCode::Tab | KeyCode::Down => app.login.focus = app.login.focus.next(),
        KeyCode::Enter => match app.login.focus {
            LoginFocus::Email | LoginFocus::Password => app.submit_login(),
            LoginFocus::Role | LoginFocus::RememberMe => app.login.push_char(' '),
        },
        KeyCode::Backspace => app.login.pop_char(),
        KeyCode::Char(c) => app.login.push_char(c),
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Context;
    use hrdesk_core::{HrConfig, MockFixtures, ViewMode};
    use std::sync::Arc;

    fn app() -> App {
        App::new(&Context {
            config: HrConfig::default(),
            fixtures: Arc::new(MockFixtures::new()),
        })
    }

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        for c in "lisa".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.list_len(), 1);
        // q is text while searching
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        assert_eq!(app.query(), "lisaq");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.query(), "");
    }

    #[test]
    fn test_view_toggle_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.view_mode(), ViewMode::Table);
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Quit);
    }

    #[test]
    fn test_enter_opens_detail_and_esc_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.detail.as_ref().unwrap().employee().name, "Sarah Johnson");
        press(&mut app, KeyCode::Esc);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_login_tab_takes_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.mode, Mode::Form);
        for c in "q@x.io".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.login.form.email, "q@x.io");
    }
}
