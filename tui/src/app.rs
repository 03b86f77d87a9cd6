use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_core::{FilterState, Navigator, PortfolioDoc, SectionId, SidebarMenu};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};
use ratatui::Frame;

use crate::effects::{Entrance, Reveal};
use crate::scroll::ListScroll;
use crate::sidebar::{self, SIDEBAR_WIDTH};
use crate::theme;
use crate::views;

#[derive(Clone, Copy, Debug)]
pub struct AppOptions {
    pub initial_section: Option<SectionId>,
    pub width: u16,
    pub animations: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_section: None,
            width: 100,
            animations: true,
        }
    }
}

/// All mutable UI state, explicitly constructed by the composition root and
/// wired to the event loop in `run`. The frame drawn by [`App::draw`] is a
/// pure projection of this state.
pub struct App {
    doc: PortfolioDoc,
    nav: Navigator,
    menu: SidebarMenu,
    filter: FilterState,
    entrance: Entrance,
    animations: bool,
    search_editing: bool,
    nav_focus: usize,
    content_scroll: u16,
    max_scroll: u16,
    projects_list: ListScroll,
    projects_expanded: Vec<bool>,
    nav_rects: Vec<(SectionId, Rect)>,
    sidebar_rect: Rect,
    toggle_rect: Option<Rect>,
    should_quit: bool,
}

impl App {
    pub fn new(doc: PortfolioDoc, options: AppOptions) -> Self {
        let initial = options.initial_section.unwrap_or(SectionId::About);
        let projects_expanded = vec![false; doc.projects.len()];
        Self {
            doc,
            nav: Navigator::starting_at(initial),
            menu: SidebarMenu::new(options.width),
            filter: FilterState::default(),
            entrance: Entrance::begin(),
            animations: options.animations,
            search_editing: false,
            nav_focus: initial.index(),
            content_scroll: 0,
            max_scroll: 0,
            projects_list: ListScroll::new(),
            projects_expanded,
            nav_rects: Vec::new(),
            sidebar_rect: Rect::default(),
            toggle_rect: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_section(&self) -> SectionId {
        self.nav.current()
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Whether the entrance transition still needs frames; drives the event
    /// loop's poll timeout.
    pub fn is_animating(&self) -> bool {
        self.animations && !self.entrance.done_at(Instant::now(), self.stagger_items())
    }

    fn stagger_items(&self) -> usize {
        match self.nav.current() {
            SectionId::About => self.doc.about.paragraphs.len() + self.doc.about.stats.len(),
            SectionId::Skills => {
                self.doc
                    .skills
                    .iter()
                    .map(|group| group.entries.len() + 1)
                    .sum()
            }
            SectionId::Projects => self.doc.projects.len(),
            SectionId::Experience => self.doc.experience.len(),
            SectionId::Contact => self.doc.contact.items.len(),
        }
    }

    fn goto(&mut self, id: SectionId) {
        let changed = self.nav.activate(id);
        // A nav activation closes an open overlay even when the target is
        // already current.
        self.menu.notify_nav();
        if changed {
            self.after_navigation();
        }
    }

    fn after_navigation(&mut self) {
        self.content_scroll = 0;
        self.nav_focus = self.nav.current().index();
        if self.animations {
            self.entrance.restart();
        }
    }

    fn toggle_selected_project(&mut self) {
        self.projects_list.clamp(self.doc.projects.len());
        if let Some(flag) = self.projects_expanded.get_mut(self.projects_list.cursor) {
            *flag = !*flag;
        }
    }

    fn scroll_up(&mut self, step: u16) {
        if self.nav.current() == SectionId::Projects {
            for _ in 0..step {
                self.projects_list.up();
            }
        } else {
            self.content_scroll = self.content_scroll.saturating_sub(step);
        }
    }

    fn scroll_down(&mut self, step: u16) {
        if self.nav.current() == SectionId::Projects {
            for _ in 0..step {
                self.projects_list.down(self.doc.projects.len());
            }
        } else {
            self.content_scroll = (self.content_scroll + step).min(self.max_scroll);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if self.search_editing && self.nav.current() == SectionId::Skills {
            self.handle_search_key(key);
            return;
        }
        self.search_editing = false;

        // History traversal, the browser back/forward analogue.
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Left => {
                    if self.nav.back() {
                        self.after_navigation();
                    }
                }
                KeyCode::Right => {
                    if self.nav.forward() {
                        self.after_navigation();
                    }
                }
                _ => {}
            }
            return;
        }

        // Everything below is unmodified input (Shift allowed for BackTab).
        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.menu.toggle(),
            KeyCode::Esc => {
                let _ = self.menu.escape();
            }
            KeyCode::Char(c @ '1'..='9') if key.modifiers.is_empty() => {
                if let Some(id) = c.to_digit(10).and_then(SectionId::from_digit) {
                    self.goto(id);
                }
            }
            KeyCode::Tab => {
                self.nav_focus = (self.nav_focus + 1) % SectionId::DECLARED.len();
            }
            KeyCode::BackTab => {
                let len = SectionId::DECLARED.len();
                self.nav_focus = (self.nav_focus + len - 1) % len;
            }
            KeyCode::Enter => {
                if self.nav.current() == SectionId::Projects {
                    self.toggle_selected_project();
                } else if let Some(id) = SectionId::DECLARED.get(self.nav_focus).copied() {
                    self.goto(id);
                }
            }
            KeyCode::Char('/') if self.nav.current() == SectionId::Skills => {
                self.search_editing = true;
            }
            KeyCode::Char('[') if self.nav.current() == SectionId::Skills => {
                self.filter.cycle_category(&self.doc.skills, -1);
            }
            KeyCode::Char(']') if self.nav.current() == SectionId::Skills => {
                self.filter.cycle_category(&self.doc.skills, 1);
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(8),
            KeyCode::PageDown => self.scroll_down(8),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filter.clear_query();
                self.search_editing = false;
            }
            KeyCode::Enter => self.search_editing = false,
            KeyCode::Backspace => self.filter.pop_query_char(),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.filter.push_query_char(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);
                if let Some(rect) = self.toggle_rect {
                    if contains(rect, x, y) {
                        self.menu.toggle();
                        return;
                    }
                }
                let hit = self
                    .nav_rects
                    .iter()
                    .find(|(_, rect)| contains(*rect, x, y))
                    .map(|(id, _)| *id);
                if let Some(id) = hit {
                    self.goto(id);
                    return;
                }
                if self.menu.is_overlay()
                    && self.menu.is_open()
                    && !contains(self.sidebar_rect, x, y)
                {
                    self.menu.outside_click();
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(1),
            MouseEventKind::ScrollDown => self.scroll_down(1),
            _ => {}
        }
    }

    pub fn handle_resize(&mut self, width: u16) {
        self.menu.resize(width);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.nav_rects.clear();
        self.toggle_rect = None;
        self.sidebar_rect = Rect::default();

        let buf = frame.buffer_mut();
        buf.set_style(
            area,
            Style::default().bg(theme::background()).fg(theme::text()),
        );
        if area.height < 2 || area.width == 0 {
            return;
        }

        let body = Rect {
            height: area.height - 1,
            ..area
        };
        let footer = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };

        if self.menu.is_overlay() {
            self.render_content(body, buf);
            self.toggle_rect = Some(sidebar::render_toggle_hint(body, self.menu.is_open(), buf));
            if self.menu.is_open() {
                let overlay = Rect {
                    width: SIDEBAR_WIDTH.min(body.width),
                    ..body
                };
                Clear.render(overlay, buf);
                buf.set_style(overlay, Style::default().bg(theme::surface()));
                self.sidebar_rect = overlay;
                self.nav_rects =
                    sidebar::render(&self.doc.profile, &self.nav, self.nav_focus, overlay, buf);
            }
        } else {
            let cols = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(body);
            self.sidebar_rect = cols[0];
            self.nav_rects =
                sidebar::render(&self.doc.profile, &self.nav, self.nav_focus, cols[0], buf);
            self.render_content(cols[1], buf);
        }

        self.render_footer(footer, buf);
    }

    fn render_content(&mut self, area: Rect, buf: &mut Buffer) {
        let reveal = if self.animations {
            Reveal::at(&self.entrance, Instant::now())
        } else {
            Reveal::settled()
        };
        let offset = reveal.offset_rows().min(area.height);
        let area = Rect {
            x: area.x + 2,
            y: area.y + 1 + offset,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(1 + offset),
        };
        if area.width < 10 || area.height < 4 {
            return;
        }

        let section = self.nav.current();
        let heading = vec![
            Line::from(Span::styled(
                section.title().to_string(),
                Style::default()
                    .fg(theme::text_bright())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(theme::border()),
            )),
        ];
        Paragraph::new(heading).render(
            Rect {
                height: 2,
                ..area
            },
            buf,
        );

        let body = Rect {
            y: area.y + 3,
            height: area.height - 3,
            ..area
        };
        let total = match section {
            SectionId::About => {
                views::about::render(&self.doc, reveal, self.content_scroll, body, buf)
            }
            SectionId::Skills => views::skills::render(
                &self.doc,
                &self.filter,
                self.search_editing,
                reveal,
                self.content_scroll,
                body,
                buf,
            ),
            SectionId::Projects => views::projects::render(
                &self.doc,
                &mut self.projects_list,
                &self.projects_expanded,
                reveal,
                body,
                buf,
            ),
            SectionId::Experience => {
                views::experience::render(&self.doc, reveal, self.content_scroll, body, buf)
            }
            SectionId::Contact => {
                views::contact::render(&self.doc, reveal, self.content_scroll, body, buf)
            }
        };
        self.max_scroll = total.saturating_sub(body.height as usize) as u16;
        self.content_scroll = self.content_scroll.min(self.max_scroll);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let key = |text: &str| Span::styled(text.to_string(), Style::default().fg(theme::primary()));
        let label =
            |text: &str| Span::styled(format!(" {text}  "), Style::default().fg(theme::text_dim()));

        let mut spans = Vec::new();
        if self.search_editing {
            spans.push(key("type"));
            spans.push(label("to filter"));
            spans.push(key("enter"));
            spans.push(label("done"));
            spans.push(key("esc"));
            spans.push(label("clear"));
        } else {
            spans.push(key("1-5"));
            spans.push(label("sections"));
            spans.push(key("alt+←→"));
            spans.push(label("history"));
            match self.nav.current() {
                SectionId::Skills => {
                    spans.push(key("/"));
                    spans.push(label("search"));
                    spans.push(key("[ ]"));
                    spans.push(label("category"));
                }
                SectionId::Projects => {
                    spans.push(key("↑↓"));
                    spans.push(label("select"));
                    spans.push(key("enter"));
                    spans.push(label("expand"));
                }
                _ => {
                    spans.push(key("↑↓"));
                    spans.push(label("scroll"));
                }
            }
            if self.menu.is_overlay() {
                spans.push(key("m"));
                spans.push(label("menu"));
            }
            spans.push(key("q"));
            spans.push(label("quit"));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme::surface()))
            .render(area, buf);
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
