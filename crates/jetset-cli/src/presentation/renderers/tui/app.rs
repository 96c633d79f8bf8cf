//! Browser application state and key handling.
//!
//! `BrowseApp` owns the catalog controller and every piece of UI state
//! (load state, cursor, disclosure, scroll window, open overlay). The event
//! loop in `super` feeds it keys, ticks and the one fetch outcome, and asks it
//! to render.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use jetset_runtime::{Catalog, FetchOutcome, LoadState};
use jetset_types::{AirlineFilter, FlightId, SortOrder};

use super::disclosure::DisclosureState;
use super::window::ListWindow;
use crate::presentation::presenters::{
    present_alert, present_filter_selector, present_flight_page, present_header,
    present_loading, present_sort_selector, present_status_bar,
};
use crate::presentation::view_models::{CatalogScreenViewModel, ScreenBody};
use crate::presentation::views::tui::{
    AlertView, FlightCardView, FlightListView, HeaderView, LoadingView, SelectorView,
    StatusBarView,
};

const PAGE_STEP: isize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Sort,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorState {
    pub kind: SelectorKind,
    pub highlighted: usize,
}

/// Selected row. `index` is a hint that disambiguates repeated ids.
#[derive(Debug, Clone, PartialEq)]
struct Cursor {
    id: FlightId,
    index: usize,
}

pub struct BrowseApp {
    source: String,
    catalog: Catalog,
    load_state: LoadState,
    disclosure: DisclosureState,
    cursor: Option<Cursor>,
    window: ListWindow,
    selector: Option<SelectorState>,
    alert_open: bool,
    tick: usize,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(catalog: Catalog, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            catalog,
            load_state: LoadState::Loading,
            disclosure: DisclosureState::new(),
            cursor: None,
            window: ListWindow::new(),
            selector: None,
            alert_open: false,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn disclosure(&self) -> &DisclosureState {
        &self.disclosure
    }

    pub fn selector(&self) -> Option<SelectorState> {
        self.selector
    }

    pub fn alert_open(&self) -> bool {
        self.alert_open
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_id(&self) -> Option<&FlightId> {
        self.cursor.as_ref().map(|cursor| &cursor.id)
    }

    /// Position of the cursor in the displayed sequence
    pub fn selected_index(&self) -> Option<usize> {
        let cursor = self.cursor.as_ref()?;
        let displayed = self.catalog.displayed();
        match displayed.get(cursor.index) {
            Some(flight) if flight.id == cursor.id => Some(cursor.index),
            _ => displayed.iter().position(|flight| flight.id == cursor.id),
        }
    }

    /// Feed the single load result into the app
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        if !self.load_state.is_loading() {
            tracing::warn!("feed result arrived after the load resolved; ignoring");
            return;
        }

        match outcome {
            Ok(flights) => {
                if let Err(err) = self.catalog.seed(flights) {
                    tracing::warn!(error = %err, "ignoring feed result");
                    return;
                }
                self.load_state.resolve(Ok(()));
                self.after_rederive();
            }
            Err(err) => {
                if self.load_state.resolve(Err(err)) {
                    self.alert_open = true;
                }
            }
        }
    }

    /// Advance the loading spinner
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert_open {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.alert_open = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if let Some(selector) = self.selector {
            self.handle_selector_key(selector, key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ if !self.load_state.is_loaded() => {}
            KeyCode::Char('s') => self.open_selector(SelectorKind::Sort),
            KeyCode::Char('f') => self.open_selector(SelectorKind::Filter),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::PageDown => self.move_cursor(PAGE_STEP),
            KeyCode::PageUp => self.move_cursor(-PAGE_STEP),
            KeyCode::Home => self.select_index(0),
            KeyCode::End => {
                let len = self.catalog.displayed().len();
                self.select_index(len.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }
    }

    fn handle_selector_key(&mut self, mut selector: SelectorState, code: KeyCode) {
        let last = self.option_count(selector.kind).saturating_sub(1);

        match code {
            KeyCode::Esc => {
                self.selector = None;
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.choose(selector);
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selector.highlighted = selector.highlighted.saturating_sub(1)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selector.highlighted = (selector.highlighted + 1).min(last)
            }
            KeyCode::Home => selector.highlighted = 0,
            KeyCode::End => selector.highlighted = last,
            _ => {}
        }

        self.selector = Some(selector);
    }

    fn option_count(&self, kind: SelectorKind) -> usize {
        match kind {
            SelectorKind::Sort => SortOrder::CHOICES.len(),
            // Airlines plus "Remove Filter"
            SelectorKind::Filter => self.catalog.known_airlines().len() + 1,
        }
    }

    fn open_selector(&mut self, kind: SelectorKind) {
        let highlighted = match kind {
            SelectorKind::Sort => SortOrder::CHOICES
                .iter()
                .position(|order| *order == self.catalog.sort_order())
                .unwrap_or(0),
            SelectorKind::Filter => {
                let airlines = self.catalog.known_airlines();
                self.catalog
                    .airline_filter()
                    .name()
                    .and_then(|name| airlines.iter().position(|a| a == name))
                    .unwrap_or(airlines.len())
            }
        };

        self.selector = Some(SelectorState { kind, highlighted });
    }

    /// Apply the highlighted option and close the selector
    fn choose(&mut self, selector: SelectorState) {
        let result = match selector.kind {
            SelectorKind::Sort => match SortOrder::CHOICES.get(selector.highlighted) {
                Some(order) => self.catalog.set_sort_order(*order),
                None => Ok(()),
            },
            SelectorKind::Filter => {
                let filter = self
                    .catalog
                    .known_airlines()
                    .get(selector.highlighted)
                    .cloned()
                    .map(AirlineFilter::Airline)
                    .unwrap_or(AirlineFilter::All);
                self.catalog.set_airline_filter(filter)
            }
        };

        self.selector = None;

        match result {
            Ok(()) => self.after_rederive(),
            Err(err) => tracing::warn!(error = %err, "view change rejected"),
        }
    }

    /// Re-anchor UI state after the displayed sequence changed
    fn after_rederive(&mut self) {
        let displayed = self.catalog.displayed();
        self.disclosure.retain_displayed(displayed);

        let index = self.selected_index();
        self.cursor = match index {
            Some(index) => Some(Cursor {
                id: displayed[index].id.clone(),
                index,
            }),
            None => displayed.first().map(|flight| Cursor {
                id: flight.id.clone(),
                index: 0,
            }),
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.catalog.displayed().len();
        if len == 0 {
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, len as isize - 1);
        self.select_index(target as usize);
    }

    fn select_index(&mut self, index: usize) {
        if let Some(flight) = self.catalog.displayed().get(index) {
            self.cursor = Some(Cursor {
                id: flight.id.clone(),
                index,
            });
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id().cloned() {
            let expanded = self.disclosure.toggle(&id);
            tracing::debug!(flight = %id, expanded, "card toggled");
        }
    }

    /// Build the view model for one frame. `viewport` is the list height.
    pub fn screen(&mut self, viewport: u16) -> CatalogScreenViewModel {
        let body = if self.load_state.is_loaded() {
            let selected = self.selected_index();
            let displayed = self.catalog.displayed();
            let heights: Vec<u16> = displayed
                .iter()
                .map(|flight| FlightCardView::height(self.disclosure.is_expanded(&flight.id)))
                .collect();
            let window = self.window.follow(&heights, selected, viewport);
            present_flight_page(
                displayed,
                self.catalog.airline_filter(),
                window,
                selected,
                |id| self.disclosure.is_expanded(id),
            )
        } else {
            present_loading(&self.source, self.tick)
        };

        let selector = self.selector.map(|selector| match selector.kind {
            SelectorKind::Sort => {
                present_sort_selector(self.catalog.sort_order(), selector.highlighted)
            }
            SelectorKind::Filter => present_filter_selector(
                self.catalog.known_airlines(),
                self.catalog.airline_filter(),
                selector.highlighted,
            ),
        });

        let alert = if self.alert_open {
            self.load_state.error().map(present_alert)
        } else {
            None
        };

        CatalogScreenViewModel {
            header: present_header(&self.catalog),
            body,
            selector,
            alert,
            status_bar: present_status_bar(
                &self.load_state,
                &self.catalog,
                self.selected_index(),
                self.selector.is_some(),
            ),
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(f.area());

        let screen = self.screen(body_area.height);

        f.render_widget(HeaderView::new(&screen.header), header_area);

        match &screen.body {
            ScreenBody::Loading { message, spinner } => {
                f.render_widget(LoadingView::new(message, spinner), body_area)
            }
            ScreenBody::Flights {
                cards,
                selected,
                empty_message,
            } => f.render_widget(
                FlightListView::new(cards, *selected, empty_message),
                body_area,
            ),
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), status_area);

        if let Some(selector) = &screen.selector {
            f.render_widget(SelectorView::new(selector), body_area);
        }

        if let Some(alert) = &screen.alert {
            f.render_widget(AlertView::new(alert), f.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetset_runtime::FetchError;
    use jetset_testing::fixtures::{flight, sample_flights};
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded() -> BrowseApp {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");
        app.apply_fetch(Ok(sample_flights()));
        app
    }

    fn displayed_ids(app: &BrowseApp) -> Vec<String> {
        app.catalog()
            .displayed()
            .iter()
            .map(|f| f.id.to_string())
            .collect()
    }

    fn draw(app: &mut BrowseApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_starts_loading_and_inert() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");

        app.handle_key(press(KeyCode::Char('s')));
        app.handle_key(press(KeyCode::Char('f')));

        assert!(app.load_state().is_loading());
        assert_eq!(app.selector(), None);
        assert!(draw(&mut app, 80, 20).contains("Loading flights from test-feed"));
    }

    #[test]
    fn test_loaded_cursor_on_first_row() {
        let app = loaded();

        assert!(app.load_state().is_loaded());
        assert_eq!(app.selected_id(), Some(&FlightId::Number(1)));
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn test_fetch_error_opens_alert_over_inert_screen() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");
        app.apply_fetch(Err(FetchError::MalformedPayload));

        assert!(app.alert_open());
        assert!(draw(&mut app, 80, 20).contains("Data received in incorrect format"));

        app.handle_key(press(KeyCode::Enter));
        assert!(!app.alert_open());
        assert!(!app.should_quit());

        app.handle_key(press(KeyCode::Char('s')));
        assert_eq!(app.selector(), None);
        assert!(!app.catalog().is_seeded());
        let text = draw(&mut app, 80, 20);
        assert!(!text.contains("[Enter] OK"));
        assert!(text.contains("Loading flights from test-feed"));
    }

    #[test]
    fn test_late_result_after_failure_is_ignored() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");
        app.apply_fetch(Err(FetchError::Unavailable("timeout".to_string())));

        app.apply_fetch(Ok(sample_flights()));

        assert!(app.load_state().error().is_some());
        assert!(!app.load_state().is_loaded());
        assert!(!app.catalog().is_seeded());
        assert!(app.catalog().raw().is_empty());
    }

    #[test]
    fn test_quit_while_loading_leaves_nothing_behind() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");

        app.handle_key(press(KeyCode::Char('q')));

        assert!(app.should_quit());
        assert!(app.load_state().is_loading());
        assert!(!app.alert_open());
        assert!(!app.catalog().is_seeded());
    }

    #[test]
    fn test_sort_selector_applies_and_closes() {
        let mut app = loaded();

        app.handle_key(press(KeyCode::Char('s')));
        assert_eq!(
            app.selector(),
            Some(SelectorState {
                kind: SelectorKind::Sort,
                highlighted: 0
            })
        );
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.selector(), None);
        assert_eq!(app.catalog().sort_order(), SortOrder::PriceDescending);
        assert_eq!(displayed_ids(&app), vec!["6", "2", "1", "5", "3", "4"]);
    }

    #[test]
    fn test_escape_closes_selector_without_change() {
        let mut app = loaded();

        app.handle_key(press(KeyCode::Char('s')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.selector(), None);
        assert!(!app.should_quit());
        assert_eq!(app.catalog().sort_order(), SortOrder::None);

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_filter_selector_and_remove_filter() {
        let mut app = loaded();

        app.handle_key(press(KeyCode::Char('f')));
        // Nothing filtered yet, so "Remove Filter" is highlighted
        assert_eq!(app.selector().map(|s| s.highlighted), Some(4));

        app.handle_key(press(KeyCode::Home));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            app.catalog().airline_filter(),
            &AirlineFilter::airline("JetSpice")
        );
        assert_eq!(displayed_ids(&app), vec!["1", "3"]);

        app.handle_key(press(KeyCode::Char('f')));
        assert_eq!(app.selector().map(|s| s.highlighted), Some(0));
        app.handle_key(press(KeyCode::End));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.catalog().airline_filter(), &AirlineFilter::All);
        assert_eq!(displayed_ids(&app), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_cursor_follows_flight_across_resort() {
        let mut app = loaded();
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_id(), Some(&FlightId::Number(2)));

        app.handle_key(press(KeyCode::Char('s')));
        app.handle_key(press(KeyCode::Enter));

        // Ascending: 4, 3, 1, 5, 2, 6
        assert_eq!(app.selected_id(), Some(&FlightId::Number(2)));
        assert_eq!(app.selected_index(), Some(4));
    }

    #[test]
    fn test_cursor_resets_when_flight_filtered_out() {
        let mut app = loaded();
        app.handle_key(press(KeyCode::Down));

        app.handle_key(press(KeyCode::Char('f')));
        app.handle_key(press(KeyCode::Home));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.selected_id(), Some(&FlightId::Number(1)));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut app = loaded();

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_index(), Some(0));

        app.handle_key(press(KeyCode::PageDown));
        assert_eq!(app.selected_index(), Some(5));

        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.selected_index(), Some(5));

        app.handle_key(press(KeyCode::Home));
        assert_eq!(app.selected_index(), Some(0));

        app.handle_key(press(KeyCode::End));
        assert_eq!(app.selected_id(), Some(&FlightId::Number(6)));
    }

    #[test]
    fn test_enter_toggles_selected_card() {
        let mut app = loaded();

        app.handle_key(press(KeyCode::Enter));
        assert!(app.disclosure().is_expanded(&FlightId::Number(1)));

        let text = draw(&mut app, 100, 30);
        assert!(text.contains("▾ JetSpice"));
        assert!(text.contains("Seats Available: 50"));

        app.handle_key(press(KeyCode::Char(' ')));
        assert!(!app.disclosure().is_expanded(&FlightId::Number(1)));
    }

    #[test]
    fn test_hidden_rows_come_back_collapsed() {
        let mut app = loaded();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.disclosure().is_expanded(&FlightId::Number(2)));

        // Filter to JetSpice, then remove the filter
        app.handle_key(press(KeyCode::Char('f')));
        app.handle_key(press(KeyCode::Home));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('f')));
        app.handle_key(press(KeyCode::End));
        app.handle_key(press(KeyCode::Enter));

        assert!(!app.disclosure().is_expanded(&FlightId::Number(2)));
    }

    #[test]
    fn test_card_contents() {
        let mut app = loaded();

        let text = draw(&mut app, 100, 30);

        assert!(text.contains("JetSetGo"));
        assert!(text.contains("▸ JetSpice"));
        assert!(text.contains("Airbus A320 [JS123] - Rs2500"));
        assert!(text.contains("Origin: Delhi"));
        assert!(text.contains("Destination: Mumbai"));
        assert!(text.contains("Arrival Time: 05/02/24 10:00"));
        assert!(text.contains("Departure Time: 05/02/24 08:00"));
        assert!(text.contains("Duration: 2 hours"));
        assert!(!text.contains("Gate: Gate 1"));
    }

    #[test]
    fn test_only_visible_cards_are_drawn() {
        let mut app = loaded();

        // 24 rows leave 18 for the list: three collapsed cards
        let text = draw(&mut app, 100, 24);
        assert!(text.contains("JS123"));
        assert!(text.contains("JS789"));
        assert!(!text.contains("6E234"));

        app.handle_key(press(KeyCode::End));
        let text = draw(&mut app, 100, 24);
        assert!(text.contains("UK890"));
        assert!(!text.contains("JS123"));
    }

    #[test]
    fn test_selector_popup_marks_active_option() {
        let mut app = loaded();
        app.handle_key(press(KeyCode::Char('s')));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('s')));

        let text = draw(&mut app, 100, 30);

        assert!(text.contains("(•) Price (Ascending)"));
        assert!(text.contains("( ) Price (Descending)"));
        assert!(text.contains("Sort: Price (Ascending)"));
    }

    #[test]
    fn test_unknown_filter_shows_empty_state() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");
        app.apply_fetch(Ok(vec![flight(1, "A", 100.0)]));
        app.catalog
            .set_airline_filter(AirlineFilter::airline("Nope"))
            .unwrap();
        app.after_rederive();

        assert_eq!(app.selected_id(), None);
        assert!(draw(&mut app, 80, 20).contains("No flights match the current filter"));
    }

    #[test]
    fn test_empty_feed_shows_feed_empty_state() {
        let mut app = BrowseApp::new(Catalog::new(), "test-feed");
        app.apply_fetch(Ok(Vec::new()));

        let text = draw(&mut app, 80, 20);

        assert!(text.contains("No flights in the feed"));
        assert!(!text.contains("No flights match the current filter"));
    }

    #[test]
    fn test_ctrl_c_quits_from_selector() {
        let mut app = loaded();
        app.handle_key(press(KeyCode::Char('f')));

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit());
    }
}
