use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{panel_block, TEXT_DIM};
use super::Component;
use crate::action::Action;
use crate::sprite::SpriteData;

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';

/// Sprite drawn with half-block cells, two pixels per cell
#[derive(Default)]
pub struct SpriteView;

#[derive(Clone, Copy)]
pub struct SpriteViewProps<'a> {
    pub sprite: Option<&'a SpriteData>,
    pub loading: bool,
    pub has_creature: bool,
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

fn draw_sprite(frame: &mut Frame, area: Rect, sprite: &SpriteData) {
    let (px_w, px_h) = sprite.fit(area.width, area.height);
    if px_w == 0 || px_h == 0 {
        return;
    }
    let cols = px_w as u16;
    let rows = px_h.div_ceil(2) as u16;
    let left = area.x + (area.width.saturating_sub(cols)) / 2;
    let top = area.y + (area.height.saturating_sub(rows)) / 2;

    let buf = frame.buffer_mut();
    for row in 0..rows {
        for col in 0..cols {
            let x = u32::from(col);
            let upper = sprite.sample(x, u32::from(row) * 2, px_w, px_h);
            let lower = sprite.sample(x, u32::from(row) * 2 + 1, px_w, px_h);
            let Some(cell) = buf.cell_mut((left + col, top + row)) else {
                continue;
            };
            match (upper, lower) {
                (Some(up), Some(down)) => {
                    cell.set_char(UPPER_HALF).set_fg(rgb(up)).set_bg(rgb(down));
                }
                (Some(up), None) => {
                    cell.set_char(UPPER_HALF).set_fg(rgb(up));
                }
                (None, Some(down)) => {
                    cell.set_char(LOWER_HALF).set_fg(rgb(down));
                }
                (None, None) => {}
            }
        }
    }
}

impl Component<Action> for SpriteView {
    type Props<'a> = SpriteViewProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block(" Sprite ", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(sprite) = props.sprite {
            draw_sprite(frame, inner, sprite);
            return;
        }

        let message = if props.loading {
            "Loading sprite..."
        } else if props.has_creature {
            "No sprite"
        } else {
            ""
        };
        let text = Paragraph::new(message)
            .style(Style::default().fg(TEXT_DIM))
            .alignment(Alignment::Center);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(text, middle);
    }
}
