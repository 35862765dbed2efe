pub mod detail_panel;
pub mod dialog;
pub mod favorites_panel;
pub mod footer;
pub mod layout;
pub mod search_bar;
pub mod sprite_view;
pub mod stats_chart;
pub mod theme;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_panel::{DetailPanel, DetailPanelProps};
pub use dialog::{DialogBox, DialogBoxProps};
pub use favorites_panel::{FavoritesPanel, FavoritesPanelProps};
pub use footer::{Footer, FooterProps};
pub use layout::{AppLayout, OVERLAY_MAX_ROWS};
pub use search_bar::{SearchBar, SearchBarProps};
pub use sprite_view::{SpriteView, SpriteViewProps};
pub use stats_chart::{StatsChart, StatsChartProps};
