// TUI module for the interactive client
mod app;
mod events;
mod layout;
mod net;
mod rendering;
mod timestamps;

use std::io;

use anyhow::Result;
pub use app::{App, QUERY_ERROR_ANSWER};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::ApiClient;

/// Run the interactive TUI against the given service client
pub async fn run_interactive(client: ApiClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state (kicks off the initial item list fetch)
    let mut app = App::new(client);

    // Run event loop
    let res = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
