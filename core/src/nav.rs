use std::str::FromStr;

use tracing::debug;

use crate::section::SectionId;

/// Owns "which section is currently visible" plus the back/forward history.
///
/// Every user-initiated activation pushes a history entry and truncates the
/// forward tail, so `back`/`forward` round-trip deterministically. Traversal
/// itself never pushes.
#[derive(Clone, Debug)]
pub struct Navigator {
    history: Vec<SectionId>,
    cursor: usize,
}

impl Navigator {
    /// Starts on the first declared section.
    pub fn new() -> Self {
        Self::starting_at(SectionId::About)
    }

    pub fn starting_at(initial: SectionId) -> Self {
        Self {
            history: vec![initial],
            cursor: 0,
        }
    }

    /// The visible section.
    pub fn current(&self) -> SectionId {
        self.history[self.cursor]
    }

    /// True iff `id` is the visible section. Drives the sidebar active
    /// marker, which is derived state — exactly one id satisfies this.
    pub fn is_active(&self, id: SectionId) -> bool {
        id == self.current()
    }

    /// Make `id` the visible section, recording a history entry. Activating
    /// the already-current section changes nothing. Returns whether the
    /// visible section changed.
    pub fn activate(&mut self, id: SectionId) -> bool {
        if id == self.current() {
            return false;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(id);
        self.cursor += 1;
        debug!(section = %id, "navigate");
        true
    }

    /// Deep-link entry point: activate a section by name. Unknown names are
    /// a silent no-op — no error, no state change.
    pub fn activate_named(&mut self, name: &str) -> bool {
        match SectionId::from_str(name.trim()) {
            Ok(id) => self.activate(id),
            Err(_) => {
                debug!(name, "ignoring unknown section name");
                false
            }
        }
    }

    /// Step back in history without pushing. No-op at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(section = %self.current(), "history back");
        true
    }

    /// Step forward in history without pushing. No-op at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        debug!(section = %self.current(), "history forward");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Navigator;
    use crate::section::SectionId;

    #[test]
    fn starts_on_about() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), SectionId::About);
        assert!(nav.is_active(SectionId::About));
    }

    #[test]
    fn activate_updates_current_and_marker_uniqueness() {
        let mut nav = Navigator::new();
        assert!(nav.activate(SectionId::Projects));
        assert_eq!(nav.current(), SectionId::Projects);

        let active: Vec<_> = SectionId::DECLARED
            .iter()
            .filter(|id| nav.is_active(**id))
            .collect();
        assert_eq!(active, vec![&SectionId::Projects]);
    }

    #[test]
    fn activating_current_section_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.activate(SectionId::Skills);
        assert!(!nav.activate(SectionId::Skills));
        assert_eq!(nav.current(), SectionId::Skills);
        // No duplicate history entry: back lands on the initial section.
        assert!(nav.back());
        assert_eq!(nav.current(), SectionId::About);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn unknown_names_change_nothing() {
        let mut nav = Navigator::new();
        nav.activate(SectionId::Contact);
        assert!(!nav.activate_named("guestbook"));
        assert_eq!(nav.current(), SectionId::Contact);
    }

    #[test]
    fn named_activation_parses_loosely() {
        let mut nav = Navigator::new();
        assert!(nav.activate_named(" Experience "));
        assert_eq!(nav.current(), SectionId::Experience);
    }

    #[test]
    fn back_and_forward_round_trip() {
        let mut nav = Navigator::new();
        nav.activate(SectionId::Skills);
        nav.activate(SectionId::Projects);

        assert!(nav.back());
        assert!(nav.back());
        assert_eq!(nav.current(), SectionId::About);
        assert!(!nav.back());

        assert!(nav.forward());
        assert_eq!(nav.current(), SectionId::Skills);
        assert!(nav.forward());
        assert_eq!(nav.current(), SectionId::Projects);
        assert!(!nav.forward());
    }

    #[test]
    fn fresh_activation_truncates_the_forward_tail() {
        let mut nav = Navigator::new();
        nav.activate(SectionId::Skills);
        nav.activate(SectionId::Projects);
        nav.back();
        nav.activate(SectionId::Contact);

        assert!(!nav.can_go_forward());
        assert!(nav.back());
        assert_eq!(nav.current(), SectionId::Skills);
    }
}
