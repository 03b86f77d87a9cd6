//! Ratatui frontend for the `folio` portfolio viewer: terminal setup, the
//! synchronous event loop and the [`App`] it drives. The loop polls with a
//! short timeout while an entrance transition is animating and a long one
//! when idle; all state lives in [`App`] and every frame is recomputed from
//! it.

pub mod app;
mod effects;
mod scroll;
mod sidebar;
mod theme;
mod views;

use std::io::{self, Stdout};
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub use app::{App, AppOptions};

const IDLE_TICK: Duration = Duration::from_millis(250);
const ANIMATION_TICK: Duration = Duration::from_millis(33);

/// Take over the terminal and run the app until it asks to quit. The
/// terminal is restored on every exit path, including panics.
pub fn run(mut app: App) -> Result<()> {
    install_panic_restore();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = if app.is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Put the terminal back into a usable state before the default panic
/// message prints; otherwise the report lands inside the alternate screen.
fn install_panic_restore() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}
