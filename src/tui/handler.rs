//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. The alert dialog captures everything while open; after
//! submission only dismissal keys remain.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) => Ok(()),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // The blocking alert captures input until dismissed
    if app.has_dialog() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.close_dialog();
        }
        return Ok(());
    }

    // After submission the summary screen only waits for dismissal
    if app.controller.is_submitted() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            app.quit();
        }
        return Ok(());
    }

    handle_form_key(app, key)
}

/// Handle keys on a step panel
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.quit();
        }

        KeyCode::Tab | KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.form.focus_prev();
            } else {
                app.form.focus_next();
            }
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
        }

        KeyCode::Enter => {
            app.advance_or_submit();
        }

        KeyCode::Backspace => {
            app.form.focused_mut().input.backspace();
            app.apply_focused_edit();
        }

        KeyCode::Delete => {
            app.form.focused_mut().input.delete();
            app.apply_focused_edit();
        }

        KeyCode::Left => {
            app.form.focused_mut().input.move_left();
        }

        KeyCode::Right => {
            app.form.focused_mut().input.move_right();
        }

        KeyCode::Home => {
            app.form.focused_mut().input.move_start();
        }

        KeyCode::End => {
            app.form.focused_mut().input.move_end();
        }

        KeyCode::Char(c) => {
            app.form.focused_mut().input.insert(c);
            app.apply_focused_edit();
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::form::FieldKey;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_reaches_the_record() {
        let mut app = App::new(&Settings::default());
        for c in "Ana".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.controller.record().name, "Ana");
    }

    #[test]
    fn test_enter_on_empty_form_raises_alert_and_captures_input() {
        let mut app = App::new(&Settings::default());
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.has_dialog());

        // Typing while the alert is up must not edit the form
        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.controller.record().name, "");

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = App::new(&Settings::default());
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();
        for c in "123".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.controller.record().cpf, "123");
        assert!(app.controller.errors().error(FieldKey::Cpf).is_some());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new(&Settings::default());
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(&Settings::default());
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut app, event).unwrap();
        assert!(app.should_quit);
    }
}
