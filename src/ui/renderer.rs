//! Terminal lifecycle and the main event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::service::MutationService;
use crate::theme::ThemeService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::EventHandler;

/// Run the application until the user quits.
///
/// Owns the terminal: raw mode and the alternate screen are entered here and
/// restored before returning, including on error.
pub async fn run(service: MutationService, theme_service: ThemeService, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, service, theme_service, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    service: MutationService,
    theme_service: ThemeService,
    config: &Config,
) -> Result<()> {
    let mut app = AppComponent::new(service, theme_service, config);
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| app.render(f))?;

        let event = events.next_event().await?;
        app.handle_event(event).await;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
