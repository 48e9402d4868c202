//! Rendering for the "Your Itinerary" panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, TITLE_TEXT};

use super::state::GenerationState;

pub const IDLE_PROMPT: &str =
    "Fill out your preferences and generate your personalized travel itinerary!";
pub const PROGRESS_TEXT: &str = "Creating your perfect journey...";
pub const FAILED_TITLE: &str = "Itinerary generation failed";
pub const FAILED_HINT: &str = "Press Ctrl+R to retry";
pub const SCROLL_HINT: &str = "PgUp/PgDn scroll";

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Render the itinerary panel. Exactly one of the prompt, the progress
/// indicator, the itinerary or the failure notice is drawn.
pub fn render_result(frame: &mut Frame, area: Rect, state: &GenerationState) {
    let mut block = Block::default()
        .title(Span::styled(
            " Your Itinerary ",
            Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if state.itinerary().is_some() {
        block = block.title_bottom(
            Line::styled(format!(" {} ", SCROLL_HINT), Style::default().fg(MUTED_TEXT))
                .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state {
        GenerationState::Idle => {
            let prompt = Line::styled(IDLE_PROMPT, Style::default().fg(MUTED_TEXT));
            render_centered(frame, inner, vec![prompt]);
        }

        GenerationState::InProgress { animation_tick, .. } => {
            let progress = Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(*animation_tick)),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(PROGRESS_TEXT, Style::default().fg(HEADER_TEXT)),
            ]);
            render_centered(frame, inner, vec![progress]);
        }

        GenerationState::Completed {
            text,
            scroll_offset,
        } => {
            render_itinerary(frame, inner, text, *scroll_offset);
        }

        GenerationState::Failed { reason } => {
            render_failed(frame, inner, reason);
        }
    }
}

/// Itinerary text is preformatted: every line break is kept and nothing
/// is interpreted as markup. Lines before `scroll_offset` are skipped.
fn render_itinerary(frame: &mut Frame, area: Rect, text: &str, scroll_offset: usize) {
    let padded = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    };
    let visible: Vec<Line> = Text::raw(text)
        .lines
        .into_iter()
        .skip(scroll_offset)
        .collect();
    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);
}

fn render_failed(frame: &mut Frame, area: Rect, reason: &str) {
    let lines = vec![
        Line::styled(
            FAILED_TITLE,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(reason, Style::default().fg(HEADER_TEXT)),
        Line::from(""),
        Line::styled(FAILED_HINT, Style::default().fg(MUTED_TEXT)),
    ];
    render_centered(frame, area, lines);
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
