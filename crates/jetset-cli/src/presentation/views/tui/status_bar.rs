//! Status Bar View Component
//!
//! Bottom bar with the load/result status on the left and key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let mut status = vec![Span::styled(
            &self.model.message,
            Style::default().fg(color),
        )];
        if let Some(position) = &self.model.position {
            status.push(Span::raw(" | "));
            status.push(Span::raw(position.as_str()));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let hints: Vec<Span> = self
            .model
            .key_hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!("[{}]", key), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{} ", action)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(hints))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
