use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most suggestion rows shown at once.
pub const OVERLAY_MAX_ROWS: u16 = 8;

const FAVORITES_WIDTH: u16 = 28;
const SPRITE_WIDTH: u16 = 26;

/// Screen regions, computed once per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub search: Rect,
    pub details: Rect,
    pub sprite: Rect,
    pub stats: Rect,
    pub favorites: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(FAVORITES_WIDTH)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(SPRITE_WIDTH)])
            .split(left[0]);

        Self {
            search: rows[0],
            details: top[0],
            sprite: top[1],
            stats: left[1],
            favorites: columns[1],
            footer: rows[2],
        }
    }

    /// Area for the suggestion overlay: directly under the search field,
    /// tall enough for `rows` entries plus borders, clipped to the body.
    pub fn overlay(&self, rows: usize) -> Rect {
        let wanted = (rows.min(usize::from(OVERLAY_MAX_ROWS)) as u16) + 2;
        let top = self.search.bottom();
        let available = self.footer.y.saturating_sub(top);
        let width = self.search.width.saturating_sub(self.favorites.width).max(20);
        Rect {
            x: self.search.x,
            y: top,
            width: width.min(self.search.width),
            height: wanted.min(available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_screen() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.search, Rect::new(0, 0, 100, 3));
        assert_eq!(layout.footer, Rect::new(0, 27, 100, 3));
        assert_eq!(layout.favorites.width, FAVORITES_WIDTH);
        assert_eq!(layout.favorites.height, 24);
        assert_eq!(layout.sprite.width, SPRITE_WIDTH);
        assert_eq!(layout.details.y, 3);
        assert_eq!(layout.stats.bottom(), 27);
    }

    #[test]
    fn overlay_hangs_below_search_and_is_capped() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        let overlay = layout.overlay(3);
        assert_eq!((overlay.x, overlay.y), (0, 3));
        assert_eq!(overlay.height, 5);
        assert_eq!(overlay.width, 72);

        assert_eq!(layout.overlay(50).height, OVERLAY_MAX_ROWS + 2);
    }
}
