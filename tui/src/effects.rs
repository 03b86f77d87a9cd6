//! Entrance transition for section content: a short vertical settle plus a
//! staggered reveal of the section's cards, mirroring the page-transition
//! feel of the original site. Everything is a pure function of elapsed time
//! so the curve is testable with explicit instants.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme;

/// Total duration of the settle/fade curve.
const ENTRANCE: Duration = Duration::from_millis(500);
/// Additional delay before each successive card becomes visible.
const STAGGER: Duration = Duration::from_millis(80);
/// How long a revealed card stays dim before reaching full color.
const ITEM_FADE: Duration = Duration::from_millis(200);
/// Rows the content starts shifted downward.
const MAX_OFFSET_ROWS: u16 = 2;

/// Clock for the transition of the currently visible section. Restarted on
/// every successful activation; fire-and-forget otherwise.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entrance {
    started: Instant,
}

impl Entrance {
    pub fn begin() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Settle progress in `0.0..=1.0`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = self.elapsed_at(now).as_secs_f32();
        (elapsed / ENTRANCE.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Rows the content is still shifted downward at `now`.
    pub fn offset_rows_at(&self, now: Instant) -> u16 {
        let settled = smoothstep(0.0, 1.0, self.progress_at(now));
        ((1.0 - settled) * f32::from(MAX_OFFSET_ROWS)).round() as u16
    }

    /// Whether the whole transition (including the last card a section of
    /// `items` cards can stagger) has finished.
    pub fn done_at(&self, now: Instant, items: usize) -> bool {
        let tail = STAGGER * items as u32 + ITEM_FADE;
        self.elapsed_at(now) >= ENTRANCE.max(tail)
    }
}

/// Snapshot of the entrance state taken once per frame and handed to the
/// views, so every card of a frame agrees on the same instant.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Reveal {
    elapsed: Duration,
    offset_rows: u16,
}

impl Reveal {
    /// A finished transition: no offset, every card in full color. Used when
    /// animations are disabled.
    pub fn settled() -> Self {
        Self {
            elapsed: ENTRANCE + Duration::from_secs(60),
            offset_rows: 0,
        }
    }

    pub fn at(entrance: &Entrance, now: Instant) -> Self {
        Self {
            elapsed: entrance.elapsed_at(now),
            offset_rows: entrance.offset_rows_at(now),
        }
    }

    pub fn offset_rows(&self) -> u16 {
        self.offset_rows
    }

    /// Foreground color for the card at `index`: invisible before its
    /// staggered delay, dim while fading, then `base`.
    pub fn item_fg(&self, index: usize, base: Color) -> Color {
        let delay = STAGGER * index as u32;
        if self.elapsed < delay {
            theme::background()
        } else if self.elapsed < delay + ITEM_FADE {
            theme::text_dim()
        } else {
            base
        }
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Entrance, Reveal, MAX_OFFSET_ROWS};
    use crate::theme;

    fn entrance_started_at(now: Instant, elapsed: Duration) -> Entrance {
        let mut entrance = Entrance::begin();
        entrance.started = now.checked_sub(elapsed).unwrap_or(now);
        entrance
    }

    #[test]
    fn offset_settles_monotonically_to_zero() {
        let now = Instant::now();
        let fresh = entrance_started_at(now, Duration::ZERO);
        let mid = entrance_started_at(now, Duration::from_millis(250));
        let done = entrance_started_at(now, Duration::from_millis(500));

        let start_offset = fresh.offset_rows_at(now);
        let mid_offset = mid.offset_rows_at(now);
        assert_eq!(start_offset, MAX_OFFSET_ROWS);
        assert!(mid_offset <= start_offset);
        assert_eq!(done.offset_rows_at(now), 0);
        assert!((done.progress_at(now) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn items_reveal_in_stagger_order() {
        let now = Instant::now();
        let entrance = entrance_started_at(now, Duration::from_millis(100));
        let reveal = Reveal::at(&entrance, now);

        // First card already fading in, third still hidden.
        assert_ne!(reveal.item_fg(0, theme::text()), theme::background());
        assert_eq!(reveal.item_fg(2, theme::background()), theme::background());
    }

    #[test]
    fn transition_completes_after_duration_and_tail() {
        let now = Instant::now();
        let entrance = entrance_started_at(now, Duration::from_millis(400));
        assert!(!entrance.done_at(now, 4));

        let entrance = entrance_started_at(now, Duration::from_millis(600));
        assert!(entrance.done_at(now, 1));
        // A long card list keeps the tail alive past the base duration.
        assert!(!entrance.done_at(now, 8));
    }

    #[test]
    fn settled_reveal_renders_everything_in_base_color() {
        let reveal = Reveal::settled();
        assert_eq!(reveal.offset_rows(), 0);
        for index in 0..16 {
            assert_eq!(reveal.item_fg(index, theme::text()), theme::text());
        }
    }
}
