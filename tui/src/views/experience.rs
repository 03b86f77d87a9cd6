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

    for (idx, entry) in doc.experience.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                entry.company.clone(),
                Style::default()
                    .fg(reveal.item_fg(idx, theme::text_bright()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.role),
                Style::default().fg(reveal.item_fg(idx, theme::primary())),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            entry.period.clone(),
            Style::default().fg(theme::text_dim()),
        )));
        for wrapped in textwrap::wrap(&entry.summary, width) {
            lines.push(Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(reveal.item_fg(idx, theme::text())),
            )));
        }
        for achievement in &entry.achievements {
            let options = textwrap::Options::new(width.saturating_sub(2))
                .initial_indent("• ")
                .subsequent_indent("  ");
            for wrapped in textwrap::wrap(achievement, options) {
                lines.push(Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(reveal.item_fg(idx, theme::text())),
                )));
            }
        }
        if !entry.technologies.is_empty() {
            lines.push(Line::from(Span::styled(
                entry.technologies.join(" · "),
                Style::default().fg(theme::text_dim()),
            )));
        }
        lines.push(Line::from(""));
    }

    let total = lines.len();
    Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    total
}
