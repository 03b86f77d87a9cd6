use folio_core::data::Profile;
use folio_core::{Navigator, SectionId};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Fixed sidebar column width; also the overlay width on narrow terminals.
pub(crate) const SIDEBAR_WIDTH: u16 = 26;

/// Render the navigation sidebar, returning one hit-test rect per nav row
/// so mouse clicks can be resolved back to a section.
pub(crate) fn render(
    profile: &Profile,
    nav: &Navigator,
    focus: usize,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<(SectionId, Rect)> {
    if area.width < 4 || area.height == 0 {
        return Vec::new();
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme::border()))
        .style(Style::default().bg(theme::surface()));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme::text_bright())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.title.clone(),
            Style::default().fg(theme::primary()),
        )),
        Line::from(""),
    ];
    let header_rows = lines.len() as u16;

    let mut rects = Vec::new();
    for (idx, id) in SectionId::DECLARED.iter().enumerate() {
        let is_active = nav.is_active(*id);
        let is_focused = focus == idx;

        let marker = if is_active { "› " } else { "  " };
        let mut style = Style::default().fg(theme::text());
        if is_active {
            style = Style::default()
                .fg(theme::primary())
                .add_modifier(Modifier::BOLD);
        }
        if is_focused {
            style = style.bg(theme::selection());
        }
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(format!("{} ", idx + 1), style.patch(Style::default().fg(theme::text_dim()))),
            Span::styled(id.title().to_string(), style),
        ]));

        let row_y = inner.y + header_rows + idx as u16;
        if row_y < inner.y + inner.height {
            rects.push((
                *id,
                Rect {
                    x: inner.x,
                    y: row_y,
                    width: inner.width,
                    height: 1,
                },
            ));
        }
    }

    if !profile.links.is_empty() {
        lines.push(Line::from(""));
        let labels: Vec<&str> = profile.links.iter().map(|link| link.label.as_str()).collect();
        lines.push(Line::from(Span::styled(
            labels.join(" · "),
            Style::default().fg(theme::text_dim()),
        )));
    }

    Paragraph::new(lines).render(inner, buf);
    rects
}

/// Render the overlay toggle control into the top-right corner of `area`,
/// returning its hit-test rect. Only shown below the sidebar breakpoint.
pub(crate) fn render_toggle_hint(area: Rect, open: bool, buf: &mut Buffer) -> Rect {
    let label = if open { "✕ close (m)" } else { "☰ menu (m)" };
    let width = (label.width() as u16).min(area.width);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: 1.min(area.height),
    };
    Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(theme::primary()).bg(theme::surface()),
    )))
    .render(rect, buf);
    rect
}
