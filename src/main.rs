//! weatherdash - city weather in the terminal

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use tracing::info;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weatherdash::action::Action;
use weatherdash::api::{ForecastClient, WeatherProvider};
use weatherdash::components::{
    Component, SEARCH_BAR_HEIGHT, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps,
};
use weatherdash::config::{
    DEFAULT_BASE_URL, DEFAULT_FORECAST_DAYS, HourWindow, ProviderConfig, ResponseOrdering,
};
use weatherdash::controller;
use weatherdash::effect::Effect;
use weatherdash::logging;
use weatherdash::reducer::reducer;
use weatherdash::state::{AppState, SPINNER_TICK_MS};

/// Current conditions and a short forecast for any city
#[derive(Parser, Debug)]
#[command(name = "weatherdash")]
#[command(about = "Terminal weather dashboard backed by WeatherAPI.com")]
struct Args {
    /// WeatherAPI.com key
    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
    api_key: String,

    /// Provider base URL
    #[arg(long, env = "WEATHERAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of forecast days to request
    #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
    days: u8,

    /// City to look up on startup
    #[arg(long, short)]
    city: Option<String>,

    /// First hour (0-23) shown in the hourly strip
    #[arg(long, default_value_t = 15)]
    hour_start: usize,

    /// Number of hourly slots shown
    #[arg(long, default_value_t = 5)]
    hour_count: usize,

    /// Which response wins when requests overlap
    #[arg(long, value_enum, default_value_t = ResponseOrdering::LatestRequest)]
    ordering: ResponseOrdering,

    /// HTTP timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, env = "WEATHERDASH_LOG", default_value = "weatherdash.log")]
    log_file: PathBuf,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DashComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DashContext {
    Main,
    Search,
}

impl EventRoutingState<DashComponentId, DashContext> for AppState {
    fn focused(&self) -> Option<DashComponentId> {
        if self.search_focused {
            Some(DashComponentId::Search)
        } else {
            Some(DashComponentId::Display)
        }
    }

    fn modal(&self) -> Option<DashComponentId> {
        None
    }

    fn binding_context(&self, id: DashComponentId) -> DashContext {
        match id {
            DashComponentId::Display => DashContext::Main,
            DashComponentId::Search => DashContext::Search,
        }
    }

    fn default_context(&self) -> DashContext {
        DashContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        base_url,
        days,
        city,
        hour_start,
        hour_count,
        ordering,
        timeout_secs,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(&log_file)?;

    let window = HourWindow::new(hour_start, hour_count).map_err(config_error)?;
    let config = ProviderConfig {
        forecast_days: days,
        timeout_secs,
        ..ProviderConfig::new(api_key).with_base_url(base_url)
    };
    config.validate().map_err(config_error)?;
    info!(?config, ?window, ?ordering, "starting weatherdash");

    let provider: Arc<dyn WeatherProvider> =
        Arc::new(ForecastClient::new(config).map_err(io::Error::other)?);

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(window, ordering))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        provider,
        city.map(Action::CitySubmit),
        replay_actions,
    )
    .await;

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
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("weatherdash exited");
    Ok(())
}

struct DashUi {
    display: WeatherDisplay,
    search: SearchBar,
}

impl DashUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchBar::new(),
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            value: &state.search_input,
            is_focused,
            on_change: Action::SearchInputChange,
            on_submit: |_| Action::SearchSubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DashComponentId>,
    ) {
        let chunks =
            Layout::vertical([Constraint::Length(SEARCH_BAR_HEIGHT), Constraint::Min(1)])
                .split(area);

        event_ctx.set_component_area(DashComponentId::Search, chunks[0]);
        event_ctx.set_component_area(DashComponentId::Display, chunks[1]);

        let search_focused = render_ctx.is_focused() && state.search_focused;
        self.search
            .render(frame, chunks[0], Self::search_props(state, search_focused));

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_focused,
        };
        self.display.render(frame, chunks[1], props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
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

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions: Vec<_> = self
            .search
            .handle_event(event, Self::search_props(state, true))
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

fn config_error(error: weatherdash::config::ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    provider: Arc<dyn WeatherProvider>,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DashUi::new()));
    let mut bus: EventBus<AppState, Action, DashComponentId, DashContext> = EventBus::new();
    let keybindings: Keybindings<DashContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(DashComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(DashComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx: &mut EffectContext<Action>| handle_effect(&provider, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks
///
/// Each request gets its own task key so a newer submission never cancels an
/// older one; the reducer decides which result is applied.
fn handle_effect(
    provider: &Arc<dyn WeatherProvider>,
    effect: Effect,
    ctx: &mut EffectContext<Action>,
) {
    match effect {
        Effect::FetchForecast { seq, city } => {
            let provider = Arc::clone(provider);
            ctx.tasks()
                .spawn(TaskKey::new(format!("forecast_{seq}")), async move {
                    controller::run_fetch(provider.as_ref(), seq, &city).await
                });
        }
    }
}
