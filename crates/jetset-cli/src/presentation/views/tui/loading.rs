use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct LoadingView<'a> {
    message: &'a str,
    spinner: &'a str,
}

impl<'a> LoadingView<'a> {
    pub fn new(message: &'a str, spinner: &'a str) -> Self {
        Self { message, spinner }
    }
}

impl<'a> Widget for LoadingView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.spinner, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::raw(self.message),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
