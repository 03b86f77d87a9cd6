//! Full-frame render tests over a ratatui `TestBackend`: the drawn buffer
//! is a pure projection of app state, so these exercise the same surface a
//! user sees without a real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_core::{PortfolioDoc, SectionId, SIDEBAR_BREAKPOINT};
use folio_tui::{App, AppOptions};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn new_app(width: u16) -> Result<App, Box<dyn std::error::Error>> {
    let doc = PortfolioDoc::builtin()?;
    Ok(App::new(
        doc,
        AppOptions {
            initial_section: None,
            width,
            animations: false,
        },
    ))
}

fn draw(
    terminal: &mut Terminal<TestBackend>,
    app: &mut App,
) -> Result<Buffer, Box<dyn std::error::Error>> {
    terminal.draw(|frame| app.draw(frame))?;
    Ok(terminal.backend().buffer().clone())
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn initial_frame_shows_profile_nav_and_about() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
    let mut app = new_app(120)?;
    let text = buffer_text(&draw(&mut terminal, &mut app)?);

    assert!(text.contains("Charlie Cafaro"));
    assert!(text.contains("Unity Technical Artist"));
    assert!(text.contains("About"));
    assert!(text.contains("Years Unity"));
    Ok(())
}

#[test]
fn exactly_one_nav_row_carries_the_active_marker() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
    let mut app = new_app(120)?;

    for digit in ['1', '2', '3', '4', '5'] {
        press(&mut app, KeyCode::Char(digit));
        let text = buffer_text(&draw(&mut terminal, &mut app)?);
        let markers = text.matches('›').count();
        assert_eq!(markers, 1, "after pressing {digit}");
    }
    Ok(())
}

#[test]
fn consecutive_draws_with_unchanged_state_are_identical() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
    let mut app = new_app(120)?;
    press(&mut app, KeyCode::Char('2'));

    let first = draw(&mut terminal, &mut app)?;
    let second = draw(&mut terminal, &mut app)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn no_match_query_renders_the_placeholder_and_no_group_blocks() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
    let mut app = new_app(120)?;

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('/'));
    for ch in "zzz-no-match".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    let text = buffer_text(&draw(&mut terminal, &mut app)?);

    assert!(text.contains("No skills match"));
    assert!(!text.contains("Unity Development"));
    assert!(!text.contains("Graphics & Shaders"));
    Ok(())
}

#[test]
fn digit_navigation_switches_the_rendered_section() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
    let mut app = new_app(120)?;

    press(&mut app, KeyCode::Char('3'));
    let text = buffer_text(&draw(&mut terminal, &mut app)?);
    assert!(text.contains("Material Forge"));

    press(&mut app, KeyCode::Char('4'));
    let text = buffer_text(&draw(&mut terminal, &mut app)?);
    assert!(text.contains("Homa Games"));
    Ok(())
}

#[test]
fn clicking_a_nav_row_activates_its_section() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 32))?;
    let mut app = new_app(120)?;
    draw(&mut terminal, &mut app)?;

    // Sidebar rows start under the two profile lines and a blank line; the
    // third row is Projects.
    click(&mut app, 2, 5);
    assert_eq!(app.current_section(), SectionId::Projects);
    Ok(())
}

#[test]
fn narrow_terminal_shows_the_toggle_and_overlay_round_trips() -> TestResult {
    let width = SIDEBAR_BREAKPOINT - 20;
    let mut terminal = Terminal::new(TestBackend::new(width, 32))?;
    let mut app = new_app(width)?;

    let text = buffer_text(&draw(&mut terminal, &mut app)?);
    assert!(text.contains("menu (m)"));

    press(&mut app, KeyCode::Char('m'));
    assert!(app.menu_is_open());
    let text = buffer_text(&draw(&mut terminal, &mut app)?);
    assert!(text.contains("close (m)"));

    // A click outside the overlay closes it.
    click(&mut app, width - 2, 20);
    assert!(!app.menu_is_open());
    Ok(())
}

#[test]
fn expanded_project_reveals_its_nested_links_and_videos() -> TestResult {
    let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
    let mut app = new_app(120)?;

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let text = buffer_text(&draw(&mut terminal, &mut app)?);

    assert!(text.contains("▾ ActionForge"));
    assert!(text.contains("Node editor walkthrough"));
    Ok(())
}
