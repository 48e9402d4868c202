//! Rendering for the preference form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::preferences::Field;
use crate::ui::generation::{spinner_frame, GenerationState};
use crate::ui::theme::{
    ACCENT, DISABLED_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, TITLE_TEXT,
};

use super::state::{FormFocus, FormState};

pub const SUBMIT_LABEL: &str = "Generate Itinerary";
pub const SUBMIT_BUSY_LABEL: &str = "Generating Itinerary...";

const FIELDS: [Field; 4] = [
    Field::Destination,
    Field::Budget,
    Field::Duration,
    Field::Interests,
];

/// Render the form panel: four inputs and the submit button.
///
/// The button renders disabled while `generation` is in progress.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, generation: &GenerationState) {
    let block = Block::default()
        .title(Span::styled(
            " Preferences ",
            Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    for (field, row) in FIELDS.iter().zip(rows.iter()) {
        render_field(frame, *row, form, *field);
    }
    render_submit(frame, rows[4], form, generation);
}

fn render_field(frame: &mut Frame, area: Rect, form: &FormState, field: Field) {
    let focused = form.is_focused(field);
    let error = form.error_for(field);

    let border_color = if error.is_some() {
        STATUS_ERROR
    } else if focused {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let label_style = if focused {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), label_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = error {
        block = block.title_bottom(Line::styled(
            format!(" {} ", error),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let placeholder = || Text::styled(field.placeholder(), Style::default().fg(MUTED_TEXT));

    if field == Field::Budget {
        let content = match form.draft.budget {
            Some(budget) if focused => Text::from(Line::from(vec![
                Span::styled("◀ ", Style::default().fg(ACCENT)),
                Span::styled(budget.label(), Style::default().fg(HEADER_TEXT)),
                Span::styled(" ▶", Style::default().fg(ACCENT)),
            ])),
            Some(budget) => Text::styled(budget.label(), Style::default().fg(HEADER_TEXT)),
            None => placeholder(),
        };
        frame.render_widget(Paragraph::new(content), inner);
        return;
    }

    let value = form.draft.text(field).unwrap_or_default();
    let (cursor_col, cursor_row) = cursor_offset(value);
    let scroll_y = cursor_row.saturating_sub(inner.height.saturating_sub(1));
    let scroll_x = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    let content = if value.is_empty() {
        placeholder()
    } else {
        Text::styled(value, Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(Paragraph::new(content).scroll((scroll_y, scroll_x)), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((
            inner.x + (cursor_col - scroll_x),
            inner.y + (cursor_row - scroll_y),
        ));
    }
}

/// Display column and row just past the end of `value`.
fn cursor_offset(value: &str) -> (u16, u16) {
    let rows = value.split('\n').count().saturating_sub(1);
    let cols = value
        .rsplit('\n')
        .next()
        .map(|l| Span::raw(l).width())
        .unwrap_or(0);
    (
        u16::try_from(cols).unwrap_or(u16::MAX),
        u16::try_from(rows).unwrap_or(u16::MAX),
    )
}

fn render_submit(frame: &mut Frame, area: Rect, form: &FormState, generation: &GenerationState) {
    let focused = form.focus == FormFocus::Submit;

    let (label, style) = match generation {
        GenerationState::InProgress { animation_tick, .. } => (
            format!("{} {}", spinner_frame(*animation_tick), SUBMIT_BUSY_LABEL),
            Style::default().fg(MUTED_TEXT).bg(DISABLED_BG),
        ),
        _ if focused => (
            SUBMIT_LABEL.to_string(),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (SUBMIT_LABEL.to_string(), Style::default().fg(ACCENT)),
    };

    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };
    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(button, area);
}
