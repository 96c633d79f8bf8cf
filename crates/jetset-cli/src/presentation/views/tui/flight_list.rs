//! Flight list: a vertical stack of bordered cards.
//!
//! The renderer decides which cards fit (see `renderers::tui::window`); this
//! view draws the cards it is given top to bottom and stops at the area edge.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::FlightCardViewModel;

const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";

pub struct FlightCardView<'a> {
    model: &'a FlightCardViewModel,
    selected: bool,
}

impl<'a> FlightCardView<'a> {
    pub fn new(model: &'a FlightCardViewModel, selected: bool) -> Self {
        Self { model, selected }
    }

    /// Rows a card occupies, borders included
    pub fn height(expanded: bool) -> u16 {
        if expanded { 7 } else { 6 }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let card = self.model;
        let label = Style::default().fg(Color::DarkGray);
        let marker = if card.expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    card.airline.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                card.headline(),
                Style::default().fg(Color::Green),
            )),
            Line::from(vec![
                Span::styled("Origin: ", label),
                Span::raw(card.origin.as_str()),
                Span::styled("   Destination: ", label),
                Span::raw(card.destination.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Arrival Time: ", label),
                Span::raw(card.arrival.as_str()),
                Span::styled("   Departure Time: ", label),
                Span::raw(card.departure.as_str()),
                Span::styled("   Duration: ", label),
                Span::raw(card.duration.as_str()),
            ]),
        ];

        if card.expanded {
            lines.push(Line::from(vec![
                Span::styled("Flight Number: ", label),
                Span::raw(card.flight_number.as_str()),
                Span::styled("   Gate: ", label),
                Span::raw(card.gate.as_str()),
                Span::styled("   Seats Available: ", label),
                Span::raw(card.seats_available.to_string()),
            ]));
        }

        lines
    }
}

impl<'a> Widget for FlightCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

pub struct FlightListView<'a> {
    cards: &'a [FlightCardViewModel],
    selected: Option<usize>,
    empty_message: &'a str,
}

impl<'a> FlightListView<'a> {
    pub fn new(
        cards: &'a [FlightCardViewModel],
        selected: Option<usize>,
        empty_message: &'a str,
    ) -> Self {
        Self {
            cards,
            selected,
            empty_message,
        }
    }
}

impl<'a> Widget for FlightListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            Paragraph::new(self.empty_message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL))
                .render(area, buf);
            return;
        }

        let mut y = area.y;
        let bottom = area.y.saturating_add(area.height);

        for (index, card) in self.cards.iter().enumerate() {
            if y >= bottom {
                break;
            }
            let height = FlightCardView::height(card.expanded).min(bottom - y);
            let card_area = Rect::new(area.x, y, area.width, height);
            FlightCardView::new(card, self.selected == Some(index)).render(card_area, buf);
            y += height;
        }
    }
}
