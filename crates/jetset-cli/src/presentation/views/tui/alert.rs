use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::centered;
use crate::presentation::view_models::AlertViewModel;

pub struct AlertView<'a> {
    model: &'a AlertViewModel,
}

impl<'a> AlertView<'a> {
    pub fn new(model: &'a AlertViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for AlertView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.model.message.chars().count() as u16 + 6).max(30);
        let popup = centered(area, width, 6);

        let lines = vec![
            Line::from(Span::styled(
                self.model.message.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(Color::Yellow),
            )),
        ];

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}
