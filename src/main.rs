//! Pokedex TUI - PokeAPI lookup with live name autocomplete

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex_tui::action::Action;
use pokedex_tui::api::PokeApi;
use pokedex_tui::components::theme::BG_BASE;
use pokedex_tui::components::{
    AppLayout, Component, DetailPanel, DetailPanelProps, DialogBox, DialogBoxProps,
    FavoritesPanel, FavoritesPanelProps, Footer, FooterProps, SearchBar, SearchBarProps,
    SpriteView, SpriteViewProps, StatsChart, StatsChartProps,
};
use pokedex_tui::config::{
    default_log_file, AppConfig, DEFAULT_API_BASE, DEFAULT_CATALOG_LIMIT, DEFAULT_RANDOM_MAX,
};
use pokedex_tui::effect::Effect;
use pokedex_tui::logging;
use pokedex_tui::reducer::reducer;
use pokedex_tui::sprite::decode_sprite;
use pokedex_tui::state::{AppState, Focus};

/// Pokedex TUI - search PokeAPI with name autocomplete
#[derive(Parser, Debug)]
#[command(name = "pokedex-tui")]
#[command(about = "Look up Pokémon by name or ID, with live name suggestions")]
struct Args {
    /// PokeAPI base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// How many names to request for autocomplete
    #[arg(long, default_value_t = DEFAULT_CATALOG_LIMIT)]
    catalog_limit: u32,

    /// Highest id picked by the random lookup (minimum 1)
    #[arg(long, default_value_t = DEFAULT_RANDOM_MAX, value_parser = clap::value_parser!(u32).range(1..))]
    random_max: u32,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            api_base: self.api_base.clone(),
            catalog_limit: self.catalog_limit,
            random_max: self.random_max,
            log_file: self.log_file.clone().unwrap_or_else(default_log_file),
        }
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokedexComponentId {
    Search,
    Favorites,
    Dialog,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokedexContext {
    Search,
    Favorites,
    Dialog,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.has_dialog() {
            return Some(PokedexComponentId::Dialog);
        }
        match self.focus {
            Focus::Search => Some(PokedexComponentId::Search),
            Focus::Favorites => Some(PokedexComponentId::Favorites),
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        if self.has_dialog() {
            Some(PokedexComponentId::Dialog)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::Search => PokedexContext::Search,
            PokedexComponentId::Favorites => PokedexContext::Favorites,
            PokedexComponentId::Dialog => PokedexContext::Dialog,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::Search
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args.config();

    if let Err(err) = logging::init(&config.log_file) {
        eprintln!("warning: logging disabled: {err}");
    }

    let debug = DebugSession::new(args.debug);
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let random_max = config.random_max;
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(random_max, clock_seed()))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    tracing::info!(api_base = config.api_base(), "starting");
    let api = Arc::new(PokeApi::new(&config));

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, api).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    tracing::info!("exiting");
    Ok(())
}

fn clock_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() << 32) ^ u64::from(now.subsec_nanos())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

struct PokedexUi {
    search: SearchBar,
    favorites: FavoritesPanel,
    details: DetailPanel,
    sprite: SpriteView,
    stats: StatsChart,
    dialog: DialogBox,
    footer: Footer,
    layout: Option<AppLayout>,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            search: SearchBar::new(),
            favorites: FavoritesPanel::new(),
            details: DetailPanel,
            sprite: SpriteView,
            stats: StatsChart,
            dialog: DialogBox::new(),
            footer: Footer::new(),
            layout: None,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        _render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);
        let layout = AppLayout::new(area);
        self.layout = Some(layout);
        let blocked = state.has_dialog();

        let creature = state.creature.as_ref();
        self.details.render(
            frame,
            layout.details,
            DetailPanelProps {
                creature,
                evolution: state.evolution.as_deref(),
                evolution_loading: state.evolution_loading,
            },
        );
        self.sprite.render(
            frame,
            layout.sprite,
            SpriteViewProps {
                sprite: state.sprite.as_ref(),
                loading: state.sprite_loading,
                has_creature: creature.is_some(),
            },
        );
        self.stats.render(
            frame,
            layout.stats,
            StatsChartProps {
                stats: creature.map(|record| record.stats.as_slice()).unwrap_or(&[]),
            },
        );

        event_ctx.set_component_area(PokedexComponentId::Favorites, layout.favorites);
        self.favorites.render(
            frame,
            layout.favorites,
            FavoritesPanelProps {
                favorites: &state.favorites,
                is_focused: !blocked && state.focus == Focus::Favorites,
            },
        );

        self.footer.render(frame, layout.footer, FooterProps { state });

        // Search last so the overlay sits on top of the body.
        let overlay = layout.overlay(state.search.visible_suggestions().len());
        let search_area = if state.search.is_open() {
            layout.search.union(overlay)
        } else {
            layout.search
        };
        event_ctx.set_component_area(PokedexComponentId::Search, search_area);
        self.search.render(
            frame,
            layout.search,
            SearchBarProps {
                search: &state.search,
                is_focused: !blocked && state.focus == Focus::Search,
                overlay_area: overlay,
            },
        );

        if let Some(dialog) = &state.dialog {
            event_ctx.set_component_area(PokedexComponentId::Dialog, area);
            self.dialog.render(frame, area, DialogBoxProps { dialog });
        } else {
            event_ctx
                .component_areas
                .remove(&PokedexComponentId::Dialog);
        }
    }

    fn handle_search_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let overlay_area = self
            .layout
            .map(|layout| layout.overlay(state.search.visible_suggestions().len()))
            .unwrap_or_default();
        let props = SearchBarProps {
            search: &state.search,
            is_focused: state.focus == Focus::Search,
            overlay_area,
        };
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        handler_response(actions)
    }

    fn handle_favorites_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = FavoritesPanelProps {
            favorites: &state.favorites,
            is_focused: state.focus == Focus::Favorites,
        };
        let actions: Vec<_> = self
            .favorites
            .handle_event(event, props)
            .into_iter()
            .collect();
        handler_response(actions)
    }

    fn handle_dialog_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let Some(dialog) = &state.dialog else {
            return HandlerResponse::ignored();
        };
        let actions: Vec<_> = self
            .dialog
            .handle_event(event, DialogBoxProps { dialog })
            .into_iter()
            .collect();
        // Unhandled keys fall through; the reducer drops them while the dialog is up.
        handler_response(actions)
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn global_key(key: KeyEvent) -> HandlerResponse<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => HandlerResponse::action(Action::Quit),
        KeyCode::Char('r') if ctrl => HandlerResponse::action(Action::RandomFetch),
        KeyCode::Char('a') if ctrl => HandlerResponse::action(Action::FavoriteAdd),
        KeyCode::Char('d') if ctrl => HandlerResponse::action(Action::FavoriteRemove),
        KeyCode::Tab => HandlerResponse::action(Action::FocusNext),
        KeyCode::BackTab => HandlerResponse::action(Action::FocusPrev),
        _ => HandlerResponse::ignored(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    api: Arc<PokeApi>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> = EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_search = Rc::clone(&ui);
    bus.register(PokedexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_favorites = Rc::clone(&ui);
    bus.register(PokedexComponentId::Favorites, move |event, state| {
        ui_favorites
            .borrow_mut()
            .handle_favorites_event(&event.kind, state)
    });

    let ui_dialog = Rc::clone(&ui);
    bus.register(PokedexComponentId::Dialog, move |event, state| {
        ui_dialog
            .borrow_mut()
            .handle_dialog_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        EventKind::Key(key) => global_key(key),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&api)),
        )
        .await
}

/// Run fetches as keyed tasks; a new task replaces the one under the same key.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, api: Arc<PokeApi>) {
    match effect {
        Effect::LoadCatalog => {
            ctx.tasks().spawn(TaskKey::new("catalog"), async move {
                match api.fetch_catalog().await {
                    Ok(names) => {
                        tracing::info!(count = names.len(), "name catalog loaded");
                        Action::CatalogDidLoad(names)
                    }
                    Err(err) => {
                        tracing::warn!(%err, "name catalog unavailable");
                        Action::CatalogDidError(err)
                    }
                }
            });
        }
        Effect::LoadCreature { query } => {
            ctx.tasks().spawn(TaskKey::new("creature"), async move {
                tracing::debug!(%query, "creature lookup");
                match api.fetch_creature(&query).await {
                    Ok(record) => Action::CreatureDidLoad(record),
                    Err(error) => {
                        tracing::info!(%query, %error, "creature lookup failed");
                        Action::CreatureDidError { query, error }
                    }
                }
            });
        }
        Effect::LoadEvolution {
            creature_id,
            species_url,
        } => {
            ctx.tasks().spawn(TaskKey::new("evolution"), async move {
                match api.fetch_evolution_chain(&species_url).await {
                    Ok(chain) => Action::EvolutionDidLoad { creature_id, chain },
                    Err(err) => {
                        tracing::warn!(creature_id, %err, "evolution chain unavailable");
                        Action::EvolutionDidError {
                            creature_id,
                            error: err.to_string(),
                        }
                    }
                }
            });
        }
        Effect::LoadSprite { creature_id, url } => {
            ctx.tasks().spawn(TaskKey::new("sprite"), async move {
                let decoded = match api.fetch_bytes(&url).await {
                    Ok(bytes) => tokio::task::spawn_blocking(move || decode_sprite(&bytes))
                        .await
                        .unwrap_or_else(|err| Err(err.to_string())),
                    Err(err) => Err(err.to_string()),
                };
                match decoded {
                    Ok(sprite) => Action::SpriteDidLoad {
                        creature_id,
                        sprite,
                    },
                    Err(error) => {
                        tracing::warn!(creature_id, %url, %error, "sprite unavailable");
                        Action::SpriteDidError { creature_id, error }
                    }
                }
            });
        }
    }
}
