use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{panel_block, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::presenter;
use crate::state::CreatureRecord;

/// Attribute text for the displayed creature
#[derive(Default)]
pub struct DetailPanel;

#[derive(Clone, Copy)]
pub struct DetailPanelProps<'a> {
    pub creature: Option<&'a CreatureRecord>,
    pub evolution: Option<&'a [String]>,
    pub evolution_loading: bool,
}

fn detail_text(props: &DetailPanelProps<'_>) -> Text<'static> {
    let Some(record) = props.creature else {
        return Text::styled(
            "Search for a Pokémon, or press Ctrl+R for a random one.",
            Style::default().fg(TEXT_DIM),
        );
    };

    let label = Style::default()
        .fg(ACCENT_TEAL)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = presenter::detail_lines(record, props.evolution)
        .into_iter()
        .map(|line| match line.split_once(": ") {
            Some((key, value)) => Line::from(vec![
                Span::styled(format!("{key}: "), label),
                Span::styled(value.to_string(), Style::default().fg(TEXT_MAIN)),
            ]),
            None => Line::from(line),
        })
        .collect();
    if props.evolution_loading {
        lines.push(Line::default());
        lines.push(Line::styled(
            "Loading evolution chain...",
            Style::default().fg(TEXT_DIM),
        ));
    }
    Text::from(lines)
}

impl Component<Action> for DetailPanel {
    type Props<'a> = DetailPanelProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let paragraph = Paragraph::new(detail_text(&props))
            .block(panel_block(" Details ", false))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CreatureStat;
    use tui_dispatch::testing::*;

    fn bulbasaur() -> CreatureRecord {
        CreatureRecord {
            id: 1,
            name: "bulbasaur".into(),
            height: 7,
            weight: 69,
            types: vec!["grass".into(), "poison".into()],
            abilities: vec!["overgrow".into(), "chlorophyll".into()],
            stats: vec![CreatureStat {
                name: "hp".into(),
                value: 45,
            }],
            sprite_url: None,
            species_url: "https://pokeapi.co/api/v2/pokemon-species/1/".into(),
            moves: vec!["razor-wind".into(), "swords-dance".into()],
        }
    }

    fn render(props: DetailPanelProps<'_>) -> String {
        let mut panel = DetailPanel;
        let mut harness = RenderHarness::new(70, 14);
        harness.render_to_string_plain(|frame| {
            let area = frame.area();
            panel.render(frame, area, props);
        })
    }

    #[test]
    fn placeholder_without_record() {
        let output = render(DetailPanelProps {
            creature: None,
            evolution: None,
            evolution_loading: false,
        });
        assert!(output.contains("Search for a Pokémon"));
    }

    #[test]
    fn shows_attributes_then_chain() {
        let record = bulbasaur();
        let chain = vec![
            "bulbasaur".to_string(),
            "ivysaur".to_string(),
            "venusaur".to_string(),
        ];
        let output = render(DetailPanelProps {
            creature: Some(&record),
            evolution: Some(&chain),
            evolution_loading: false,
        });
        assert!(output.contains("Name: Bulbasaur"));
        assert!(output.contains("Types: grass, poison"));
        assert!(output.contains("Evolution Chain: Bulbasaur -> Ivysaur -> Venusaur"));
        assert!(output.contains("Moves (Top 10): razor-wind, swords-dance"));
    }

    #[test]
    fn loading_chain_is_announced() {
        let record = bulbasaur();
        let output = render(DetailPanelProps {
            creature: Some(&record),
            evolution: None,
            evolution_loading: true,
        });
        assert!(output.contains("Loading evolution chain"));
        assert!(!output.contains("Moves (Top 10)"));
    }
}
