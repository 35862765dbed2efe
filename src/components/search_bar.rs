use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::highlight_substring;

use super::theme::{
    focus_border, panel_block, ACCENT_GOLD, BG_HIGHLIGHT, BG_PANEL_ALT, TEXT_DIM, TEXT_MAIN,
};
use super::Component;
use crate::action::Action;
use crate::autocomplete::Autocomplete;

const PLACEHOLDER: &str = "Type a Pokémon name or ID...";

/// Search field plus its suggestion overlay
#[derive(Default)]
pub struct SearchBar {
    /// Last rendered overlay rect and list offset, for pointer hit-testing
    overlay_area: Option<Rect>,
    overlay_offset: usize,
}

pub struct SearchBarProps<'a> {
    pub search: &'a Autocomplete,
    pub is_focused: bool,
    /// Where the overlay goes when open
    pub overlay_area: Rect,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestion index under a terminal cell, if any.
    pub fn suggestion_at(&self, column: u16, row: u16, count: usize) -> Option<usize> {
        let area = self.overlay_area?;
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let inside = column >= inner.x
            && column < inner.right()
            && row >= inner.y
            && row < inner.bottom();
        if !inside {
            return None;
        }
        let index = self.overlay_offset + usize::from(row - inner.y);
        (index < count).then_some(index)
    }

    fn input_line<'a>(search: &'a Autocomplete, is_focused: bool) -> Line<'a> {
        if search.query().is_empty() {
            let mut spans = Vec::new();
            if is_focused {
                spans.push(Span::styled(" ", cursor_style()));
            }
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_DIM)));
            return Line::from(spans);
        }
        if !is_focused {
            return Line::from(Span::raw(search.query()));
        }

        let query = search.query();
        let split = query
            .char_indices()
            .nth(search.cursor())
            .map(|(index, _)| index)
            .unwrap_or(query.len());
        let (before, rest) = query.split_at(split);
        let mut chars = rest.chars();
        let under = chars.next();
        let after = chars.as_str();

        let mut spans = vec![Span::raw(before)];
        match under {
            Some(ch) => {
                spans.push(Span::styled(ch.to_string(), cursor_style()));
                spans.push(Span::raw(after));
            }
            None => spans.push(Span::styled(" ", cursor_style())),
        }
        Line::from(spans)
    }

    fn render_overlay(&mut self, frame: &mut Frame, props: &SearchBarProps<'_>) {
        let area = props.overlay_area;
        let suggestions = props.search.visible_suggestions();
        if suggestions.is_empty() || area.height < 3 || area.width < 4 {
            self.overlay_area = None;
            return;
        }

        let base = Style::default().fg(TEXT_MAIN);
        let matched = Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD);
        let items: Vec<Line<'static>> = suggestions
            .iter()
            .map(|name| highlight_substring(name, props.search.query(), base, matched))
            .collect();

        let title = format!("{} matches", suggestions.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(focus_border(true))
                    .style(Style::default().bg(BG_PANEL_ALT)),
            )
            .highlight_style(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(props.search.highlighted());
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);

        self.overlay_area = Some(area);
        self.overlay_offset = list_state.offset();
    }
}

fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let search = props.search;
        match event {
            EventKind::Mouse(mouse) => {
                if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                    return None;
                }
                let count = search.visible_suggestions().len();
                self.suggestion_at(mouse.column, mouse.row, count)
                    .map(Action::SuggestionActivate)
            }
            EventKind::Key(key) if props.is_focused => {
                // Ctrl/Alt chords are global shortcuts.
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return None;
                }
                let open = search.is_open();
                match key.code {
                    KeyCode::Char(ch) => Some(Action::SearchInput(ch)),
                    KeyCode::Backspace => Some(Action::SearchBackspace),
                    KeyCode::Delete => Some(Action::SearchDelete),
                    KeyCode::Left => Some(Action::SearchCursorLeft),
                    KeyCode::Home => Some(Action::SearchCursorHome),
                    KeyCode::End => Some(Action::SearchCursorEnd),
                    KeyCode::Right if open => Some(Action::SuggestionCommit),
                    KeyCode::Right => Some(Action::SearchCursorRight),
                    KeyCode::Up if open => Some(Action::SuggestionUp),
                    KeyCode::Down if open => Some(Action::SuggestionDown),
                    KeyCode::Esc if open => Some(Action::SuggestionDismiss),
                    KeyCode::Enter => Some(Action::SearchSubmit),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block(" Search ", props.is_focused);
        let input = Paragraph::new(Self::input_line(props.search, props.is_focused)).block(block);
        frame.render_widget(input, area);

        if props.is_focused && props.search.is_open() {
            self.render_overlay(frame, &props);
        } else {
            self.overlay_area = None;
        }
    }
}
