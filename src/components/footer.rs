use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Borders,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use super::theme::{ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::state::{AppState, Focus};

/// Key hints on the left, status message on the right
#[derive(Default)]
pub struct Footer {
    status_bar: StatusBar,
}

#[derive(Clone, Copy)]
pub struct FooterProps<'a> {
    pub state: &'a AppState,
}

impl Footer {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn status_text(state: &AppState) -> String {
    if let Some(status) = &state.status {
        return status.clone();
    }
    if state.catalog.is_loading() {
        "Loading Pokémon names...".to_string()
    } else if state.evolution_loading {
        "Loading evolution chain...".to_string()
    } else if state.sprite_loading {
        "Loading sprite...".to_string()
    } else {
        String::new()
    }
}

pub fn status_hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    if state.has_dialog() {
        return vec![StatusBarHint::new("Enter/Esc", "Close")];
    }
    let mut hints = match state.focus {
        Focus::Search if state.search.is_open() => vec![
            StatusBarHint::new("Up/Down", "Highlight"),
            StatusBarHint::new("Right", "Accept"),
            StatusBarHint::new("Esc", "Dismiss"),
        ],
        Focus::Search => vec![StatusBarHint::new("Enter", "Search")],
        Focus::Favorites => vec![
            StatusBarHint::new("Up/Down", "Select"),
            StatusBarHint::new("Del", "Remove"),
        ],
    };
    hints.extend([
        StatusBarHint::new("^R", "Random"),
        StatusBarHint::new("^A", "Favorite"),
        StatusBarHint::new("^D", "Unfavorite"),
        StatusBarHint::new("Tab", "Focus"),
        StatusBarHint::new("^Q", "Quit"),
    ]);
    hints
}

impl Component<Action> for Footer {
    type Props<'a> = FooterProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints = status_hints(props.state);
        let status = status_text(props.state);
        let status_items = [StatusBarItem::span(Span::styled(
            status.as_str(),
            Style::default().fg(ACCENT_GOLD),
        ))];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: Some(BorderStyle {
                    borders: Borders::ALL,
                    style: Style::default().fg(TEXT_DIM),
                    focused_style: Some(Style::default().fg(ACCENT_TEAL)),
                }),
                padding: Padding::xy(1, 0),
                bg: Some(BG_PANEL),
                fg: Some(TEXT_MAIN),
            },
            text: Style::default().fg(TEXT_DIM),
            hint_key: Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_DIM),
            separator: Style::default().fg(TEXT_DIM),
        };

        let status_props = StatusBarProps {
            left: StatusBarSection::hints(&hints).with_separator("  "),
            center: StatusBarSection::empty(),
            right: StatusBarSection::items(&status_items).with_separator("  "),
            style,
            is_focused: false,
        };
        Component::<Action>::render(&mut self.status_bar, frame, area, status_props);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::{Autocomplete, CandidateList};
    use crate::error::UserNotice;
    use tui_dispatch::testing::*;
    use tui_dispatch::DataResource;

    fn render(state: &AppState) -> String {
        let mut footer = Footer::new();
        let mut harness = RenderHarness::new(120, 3);
        harness.render_to_string_plain(|frame| {
            let area = frame.area();
            footer.render(frame, area, FooterProps { state });
        })
    }

    #[test]
    fn hints_follow_overlay_state() {
        let mut state = AppState::default();
        assert!(render(&state).contains("Search"));

        state.search = Autocomplete::new(CandidateList::new(["abra".to_string()]));
        state.search.set_query("a");
        let output = render(&state);
        assert!(output.contains("Accept"));
        assert!(output.contains("Dismiss"));
    }

    #[test]
    fn dialog_hides_other_hints() {
        let state = AppState {
            dialog: Some(UserNotice::EmptyInput.dialog()),
            ..Default::default()
        };
        assert_eq!(status_hints(&state).len(), 1);
        let output = render(&state);
        assert!(output.contains("Close"));
        assert!(!output.contains("Random"));
    }

    #[test]
    fn status_prefers_explicit_message() {
        let mut state = AppState {
            catalog: DataResource::Loading,
            ..Default::default()
        };
        assert_eq!(status_text(&state), "Loading Pokémon names...");
        state.status = Some("Added Pikachu to favorites".into());
        assert_eq!(status_text(&state), "Added Pikachu to favorites");
    }
}
