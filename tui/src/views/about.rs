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

    if !doc.profile.location.is_empty() || !doc.profile.availability.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} · {}", doc.profile.location, doc.profile.availability),
            Style::default().fg(theme::text_dim()),
        )));
        lines.push(Line::from(""));
    }

    let mut item = 0usize;
    for paragraph in &doc.about.paragraphs {
        let fg = reveal.item_fg(item, theme::text());
        for wrapped in textwrap::wrap(paragraph, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(fg),
            )));
        }
        lines.push(Line::from(""));
        item += 1;
    }

    for stat in &doc.about.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>4}  ", stat.value),
                Style::default()
                    .fg(reveal.item_fg(item, theme::primary()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                stat.label.clone(),
                Style::default().fg(reveal.item_fg(item, theme::text_dim())),
            ),
        ]));
        item += 1;
    }

    let total = lines.len();
    Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    total
}
