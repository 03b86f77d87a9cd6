use folio_core::{CatalogEntry, CategoryFilter, FilterState, PortfolioDoc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::effects::Reveal;
use crate::theme;

const NAME_COL: usize = 26;
const METER_CELLS: u8 = 5;

pub(crate) fn render(
    doc: &PortfolioDoc,
    filter: &FilterState,
    editing: bool,
    reveal: Reveal,
    scroll: u16,
    area: Rect,
    buf: &mut Buffer,
) -> usize {
    let lines = lines(doc, filter, editing, reveal);
    let total = lines.len();
    Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
    total
}

/// The full line list for the skills section: chip row, search row, grouped
/// catalog (or the no-results placeholder) and the fixed language list.
fn lines(
    doc: &PortfolioDoc,
    filter: &FilterState,
    editing: bool,
    reveal: Reveal,
) -> Vec<Line<'static>> {
    let mut lines = vec![chip_row(doc, filter), search_row(filter, editing), Line::from("")];

    let visible = filter.visible(&doc.skills);
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No skills match \"{}\".", filter.query),
            Style::default()
                .fg(theme::text_dim())
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    } else {
        let mut item = 0usize;
        for (group, entries) in visible {
            lines.push(Line::from(Span::styled(
                group.name.clone(),
                Style::default()
                    .fg(reveal.item_fg(item, theme::text_bright()))
                    .add_modifier(Modifier::BOLD),
            )));
            item += 1;
            for entry in entries {
                lines.push(entry_row(entry, reveal, item));
                item += 1;
            }
            lines.push(Line::from(""));
        }
    }

    if !doc.languages.is_empty() {
        lines.push(Line::from(Span::styled(
            "Languages".to_string(),
            Style::default()
                .fg(theme::text_bright())
                .add_modifier(Modifier::BOLD),
        )));
        for language in &doc.languages {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", language.name),
                    Style::default().fg(theme::text()),
                ),
                Span::styled(
                    language.level.clone(),
                    Style::default().fg(theme::text_dim()),
                ),
            ]));
        }
    }

    lines
}

fn chip_row(doc: &PortfolioDoc, filter: &FilterState) -> Line<'static> {
    let mut spans = Vec::new();
    let all_active = matches!(filter.category, CategoryFilter::All);
    push_chip(&mut spans, "All", all_active);
    for group in &doc.skills {
        let active = match &filter.category {
            CategoryFilter::Group(name) => *name == group.name,
            CategoryFilter::All => false,
        };
        push_chip(&mut spans, &group.name, active);
    }
    Line::from(spans)
}

fn push_chip(spans: &mut Vec<Span<'static>>, label: &str, active: bool) {
    let style = if active {
        Style::default()
            .fg(theme::text_bright())
            .bg(theme::selection())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::text_dim())
    };
    spans.push(Span::styled(format!(" {label} "), style));
    spans.push(Span::raw(" "));
}

fn search_row(filter: &FilterState, editing: bool) -> Line<'static> {
    let dim = Style::default().fg(theme::text_dim());
    if editing {
        Line::from(vec![
            Span::styled("Search: ".to_string(), dim),
            Span::styled(
                filter.query.clone(),
                Style::default().fg(theme::text_bright()),
            ),
            Span::styled("▏".to_string(), Style::default().fg(theme::warning())),
        ])
    } else if filter.query.is_empty() {
        Line::from(Span::styled("/ search".to_string(), dim))
    } else {
        Line::from(vec![
            Span::styled("Search: ".to_string(), dim),
            Span::styled(filter.query.clone(), Style::default().fg(theme::text())),
            Span::styled("  (/ to edit)".to_string(), dim),
        ])
    }
}

fn entry_row(entry: &CatalogEntry, reveal: Reveal, item: usize) -> Line<'static> {
    let level = entry.level.min(METER_CELLS);
    let meter = format!(
        "{}{}",
        "▰".repeat(level as usize),
        "▱".repeat((METER_CELLS - level) as usize)
    );
    let pad = NAME_COL.saturating_sub(entry.name.width());
    let mut spans = vec![
        Span::styled(
            format!("  {}{}", entry.name, " ".repeat(pad)),
            Style::default().fg(reveal.item_fg(item, theme::text())),
        ),
        Span::styled(
            format!("{:<7}", entry.kind.badge()),
            Style::default().fg(reveal.item_fg(item, theme::primary())),
        ),
        Span::styled(
            meter,
            Style::default().fg(reveal.item_fg(item, theme::success())),
        ),
    ];
    if !entry.tags.is_empty() {
        spans.push(Span::styled(
            format!("  {}", entry.tags.join(", ")),
            Style::default().fg(reveal.item_fg(item, theme::text_dim())),
        ));
    }
    Line::from(spans)
}
