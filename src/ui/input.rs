use crate::preferences::Field;
use crate::ui::app::App;
use crate::ui::form::{FormFocus, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by one PageUp/PageDown in the itinerary panel.
pub const ITINERARY_PAGE: i16 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.retry();
        return;
    }

    match key.code {
        KeyCode::PageDown => {
            app.scroll_itinerary(ITINERARY_PAGE);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_itinerary(-ITINERARY_PAGE);
            return;
        }
        _ => {}
    }

    let focus = app.form().focus;
    let on_budget = focus == FormFocus::Field(Field::Budget);

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => FormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FormIntent::FocusPrev,
        KeyCode::Left if on_budget => FormIntent::CycleBudget(-1),
        KeyCode::Right if on_budget => FormIntent::CycleBudget(1),
        KeyCode::Char(' ') if on_budget => FormIntent::CycleBudget(1),
        KeyCode::Enter | KeyCode::Char(' ') if focus == FormFocus::Submit => {
            app.submit();
            return;
        }
        KeyCode::Enter if focus == FormFocus::Field(Field::Interests) => FormIntent::Newline,
        KeyCode::Enter => FormIntent::FocusNext,
        KeyCode::Backspace => FormIntent::Backspace,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormIntent::Insert(ch)
        }
        _ => return,
    };
    app.dispatch_form(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
