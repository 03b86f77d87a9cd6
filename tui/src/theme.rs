//! Fixed palette for the portfolio screen. Accessors rather than constants
//! so call sites read the same everywhere and the palette can grow a config
//! layer without touching the views.

use ratatui::style::Color;

pub(crate) fn background() -> Color {
    Color::Rgb(17, 19, 26)
}

pub(crate) fn surface() -> Color {
    Color::Rgb(26, 29, 39)
}

pub(crate) fn text() -> Color {
    Color::Rgb(205, 209, 222)
}

pub(crate) fn text_dim() -> Color {
    Color::Rgb(120, 126, 144)
}

pub(crate) fn text_bright() -> Color {
    Color::Rgb(236, 239, 248)
}

pub(crate) fn primary() -> Color {
    Color::Rgb(122, 162, 247)
}

pub(crate) fn selection() -> Color {
    Color::Rgb(45, 52, 70)
}

pub(crate) fn success() -> Color {
    Color::Rgb(152, 195, 121)
}

pub(crate) fn warning() -> Color {
    Color::Rgb(229, 192, 123)
}

pub(crate) fn border() -> Color {
    Color::Rgb(59, 66, 86)
}
