use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, TITLE_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "AI Travel Planner";
pub const TAGLINE: &str = "Create your perfect journey with AI-powered personalized itineraries";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD);
        let tagline_style = Style::default().fg(HEADER_SEPARATOR);
        let lines = vec![
            Line::from(vec![
                Span::styled("✈  ", title_style),
                Span::styled(TITLE, title_style),
            ]),
            Line::from(Span::styled(TAGLINE, tagline_style)),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
