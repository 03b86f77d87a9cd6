use folio_core::PortfolioDoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::effects::Reveal;
use crate::theme;

pub(crate) fn render(
    doc: &PortfolioDoc,
    reveal: Reveal,
    scroll: u16,
    area: Rect,
    buf: &mut Buffer,
) -> usize {
    let width = area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        doc.contact.headline.clone(),
        Style::default()
            .fg(theme::text_bright())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    if !doc.contact.note.is_empty() {
        for wrapped in textwrap::wrap(&doc.contact.note, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(theme::text()),
            )));
        }
        lines.push(Line::from(""));
    }

    for (idx, item) in doc.contact.items.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", item.label),
                Style::default().fg(reveal.item_fg(idx, theme::primary())),
            ),
            Span::styled(
                item.value.clone(),
                Style::default().fg(reveal.item_fg(idx, theme::text())),
            ),
        ]));
    }

    if !doc.profile.links.is_empty() {
        lines.push(Line::from(""));
        for link in &doc.profile.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", link.label),
                    Style::default().fg(theme::text_dim()),
                ),
                Span::styled(link.url.clone(), Style::default().fg(theme::text())),
            ]));
        }
    }

    let total = lines.len();
    Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    total
}
