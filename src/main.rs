use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mealdex::{
    lookup::MealApi,
    state::Favorites,
    tui::app::{AppAction, MealApp},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not fight the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Database setup
    let database_url = "sqlite://mealdex.db";

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(database_url).await? {
        sqlx::Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    let favorites = Favorites::new(pool).await?;
    let api = MealApi::new()?;
    let (mut app, mut fetch_rx) = MealApp::new(api, favorites);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        // Drain finished lookups before drawing
        while let Ok(fetched) = fetch_rx.try_recv() {
            app.on_fetch(fetched);
        }

        // Draw UI
        terminal.draw(|f| app.render(f))?;

        // Handle input; poll so background results keep flowing in
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let AppAction::Exit = app.handle_key(key.code) {
                        break;
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
