use folio_core::data::LinkKind;
use folio_core::PortfolioDoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::effects::Reveal;
use crate::scroll::ListScroll;
use crate::theme;

/// Accordion over the project list: one header row per project, with the
/// expanded card showing summary, tags and the nested link/video lists.
pub(crate) fn render(
    doc: &PortfolioDoc,
    list: &mut ListScroll,
    expanded: &[bool],
    reveal: Reveal,
    area: Rect,
    buf: &mut Buffer,
) -> usize {
    let width = area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut header_rows: Vec<usize> = Vec::new();

    for (idx, project) in doc.projects.iter().enumerate() {
        let is_open = expanded.get(idx).copied().unwrap_or(false);
        let is_selected = list.cursor == idx;
        header_rows.push(lines.len());

        let marker = if is_open { "▾" } else { "▸" };
        let mut header_style = Style::default()
            .fg(reveal.item_fg(idx, theme::text_bright()))
            .add_modifier(Modifier::BOLD);
        if is_selected {
            header_style = header_style.bg(theme::selection());
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {}", project.title), header_style),
            Span::styled(
                format!("  [{}]", project.kind.badge()),
                Style::default().fg(reveal.item_fg(idx, theme::primary())),
            ),
        ]));

        if is_open {
            for wrapped in textwrap::wrap(&project.summary, width.saturating_sub(4)) {
                lines.push(Line::from(Span::styled(
                    format!("    {wrapped}"),
                    Style::default().fg(theme::text()),
                )));
            }
            if !project.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", project.tags.join(" · ")),
                    Style::default().fg(theme::text_dim()),
                )));
            }
            for link in &project.links {
                let fg = match link.kind {
                    LinkKind::Primary => theme::primary(),
                    LinkKind::Secondary => theme::text(),
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("    → {}  ", link.label),
                        Style::default().fg(fg),
                    ),
                    Span::styled(link.url.clone(), Style::default().fg(theme::text_dim())),
                ]));
            }
            for video in &project.videos {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("      ▶ {}  ", video.title),
                        Style::default().fg(theme::text()),
                    ),
                    Span::styled(video.url.clone(), Style::default().fg(theme::text_dim())),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    let total = lines.len();
    list.clamp(doc.projects.len());
    if let Some(row) = header_rows.get(list.cursor).copied() {
        list.ensure_visible(row, area.height as usize);
    }
    Paragraph::new(lines).scroll((list.top as u16, 0)).render(area, buf);
    total
}
