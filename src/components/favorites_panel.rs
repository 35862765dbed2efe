use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::theme::{panel_block, BG_HIGHLIGHT, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::favorites::Favorites;

#[derive(Default)]
pub struct FavoritesPanel {
    list: SelectList,
}

pub struct FavoritesPanelProps<'a> {
    pub favorites: &'a Favorites,
    pub is_focused: bool,
}

impl FavoritesPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

fn list_style(has_selection: bool) -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: !has_selection,
        },
        ..SelectListStyle::default()
    }
}

impl Component<Action> for FavoritesPanel {
    type Props<'a> = FavoritesPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        if key.code == KeyCode::Delete {
            return Some(Action::FavoriteRemove);
        }
        let favorites = props.favorites;
        let last = favorites.len().checked_sub(1)?;
        let selected = favorites.selected();

        // Every selection change re-fetches, so unchanged targets emit nothing.
        let target = match key.code {
            KeyCode::Down => selected.map_or(0, |index| (index + 1).min(last)),
            KeyCode::Up => selected.map_or(0, |index| index.saturating_sub(1)),
            KeyCode::Enter => return Some(Action::FavoriteSelect(selected.unwrap_or(0))),
            _ => return None,
        };
        (selected != Some(target)).then_some(Action::FavoriteSelect(target))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block(" Favorites ", props.is_focused);
        let favorites = props.favorites;
        if favorites.is_empty() {
            let hint = Paragraph::new(Line::styled(
                "Ctrl+A adds the shown Pokémon",
                Style::default().fg(TEXT_DIM),
            ))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<Line<'static>> = favorites
            .entries()
            .iter()
            .map(|name| Line::from(name.clone()))
            .collect();
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: favorites.selected().unwrap_or(0),
            is_focused: props.is_focused,
            style: list_style(favorites.selected().is_some()),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::FavoriteSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}
