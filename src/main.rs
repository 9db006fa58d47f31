use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use matchday_lib::app::{launch_page_load, App, AsyncAction};
use matchday_lib::cache::{self, CachedSchedule};
use matchday_lib::config::AppConfig;
use matchday_lib::handlers::{async_actions, input, mouse};
use matchday_lib::params::WatchRequest;
use matchday_lib::player::Player;
use matchday_lib::ui;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Watch link (full URL or just the ?id=..&stream=.. query)
    link: Option<String>,

    /// Print config and cache state, then exit
    #[arg(long)]
    check: bool,

    /// Skip the schedule cache on the first load
    #[arg(long)]
    refresh: bool,

    /// Open streams in the browser instead of mpv
    #[arg(long)]
    no_player: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = AppConfig::load()?;

    // -- CLI MODE --
    if args.check {
        println!("api url:   {}", config.api_url);
        println!("guild id:  {}", config.discord_server_id);
        println!("page base: {}", config.page_base);
        match CachedSchedule::load() {
            Some(c) if c.is_fresh(cache::now_ms()) => println!("cache:     fresh"),
            Some(_) => println!("cache:     stale"),
            None => println!("cache:     empty"),
        }
        return Ok(());
    }

    // -- TUI MODE --
    let mut app = App::new(config);
    let player = Player::new(!args.no_player);

    // Async Channel
    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);

    if let Some(link) = &args.link {
        match WatchRequest::parse(link, &app.config.page_base) {
            Ok(request) => launch_page_load(&mut app, request, &tx, args.refresh),
            Err(e) => app.full_page_error(e),
        }
    }

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &player, tx, &mut rx).await;

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    player.stop();

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    player: &Player,
    tx: mpsc::Sender<AsyncAction>,
    rx: &mut mpsc::Receiver<AsyncAction>,
) -> io::Result<()>
where
    std::io::Error: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;
        app.loading_tick = app.loading_tick.wrapping_add(1);

        // Drain async results without blocking the draw loop.
        while let Ok(action) = rx.try_recv() {
            async_actions::handle_async_action(app, action, &tx, player).await;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => input::handle_key_event(app, key, &tx, player),
                Event::Mouse(mouse_event) => mouse::handle_mouse_event(app, mouse_event, &tx),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
