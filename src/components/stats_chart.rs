use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{panel_block, ACCENT_GOLD, ACCENT_TEAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::presenter;
use crate::state::CreatureStat;

/// Base-stat bar chart
#[derive(Default)]
pub struct StatsChart;

#[derive(Clone, Copy)]
pub struct StatsChartProps<'a> {
    pub stats: &'a [CreatureStat],
}

/// Bar width that spreads `count` bars over `width` columns with one-column gaps.
fn bar_width(width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    (width.saturating_sub(count - 1) / count).clamp(1, 9)
}

impl Component<Action> for StatsChart {
    type Props<'a> = StatsChartProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block(" Stats ", false);
        if props.stats.is_empty() {
            let empty = Paragraph::new(Line::styled("No stats", Style::default().fg(TEXT_DIM)))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        let bars: Vec<Bar> = presenter::stat_bars(props.stats)
            .into_iter()
            .map(|(label, value)| {
                Bar::default()
                    .value(value)
                    .label(Line::from(label))
                    .text_value(value.to_string())
                    .style(Style::default().fg(ACCENT_TEAL))
                    .value_style(
                        Style::default()
                            .fg(TEXT_MAIN)
                            .bg(ACCENT_TEAL)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .max(presenter::stat_chart_max(props.stats))
            .bar_width(bar_width(inner.width, bars.len()))
            .bar_gap(1)
            .label_style(Style::default().fg(ACCENT_GOLD));
        frame.render_widget(chart, area);
    }
}
