use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered;
use crate::presentation::view_models::SelectorViewModel;

/// Radio-style option list drawn as a centered popup
pub struct SelectorView<'a> {
    model: &'a SelectorViewModel,
}

impl<'a> SelectorView<'a> {
    pub fn new(model: &'a SelectorViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for SelectorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .model
            .options
            .iter()
            .map(|option| {
                let mark = if option.active { "(•)" } else { "( )" };
                let style = if option.highlighted {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{} {}", mark, option.label), style))
            })
            .collect();

        let widest = self
            .model
            .options
            .iter()
            .map(|option| option.label.chars().count() + 4)
            .chain(std::iter::once(self.model.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;

        let popup = centered(area, widest + 6, lines.len() as u16 + 2);
        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(popup, buf);
    }
}
