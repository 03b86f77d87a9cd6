use tracing::debug;

/// Terminal width below which the sidebar collapses into a toggleable
/// overlay instead of a fixed column.
pub const SIDEBAR_BREAKPOINT: u16 = 80;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OverlayState {
    Closed,
    Open,
}

/// Presentation state of the navigation sidebar on narrow terminals.
///
/// Above the breakpoint the sidebar is a fixed column and this machine is
/// inert. Below it the sidebar renders as an overlay: toggle flips it, and
/// navigating, pressing Escape or clicking outside while open all close it.
/// Resizing back above the breakpoint closes it and removes the toggle.
#[derive(Clone, Debug)]
pub struct SidebarMenu {
    state: OverlayState,
    width: u16,
}

impl SidebarMenu {
    pub fn new(width: u16) -> Self {
        Self {
            state: OverlayState::Closed,
            width,
        }
    }

    /// Whether the sidebar currently renders as an overlay (and the toggle
    /// control is shown).
    pub fn is_overlay(&self) -> bool {
        self.width < SIDEBAR_BREAKPOINT
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Toggle control: flip open/closed. Inert above the breakpoint.
    pub fn toggle(&mut self) {
        if !self.is_overlay() {
            return;
        }
        self.state = match self.state {
            OverlayState::Closed => OverlayState::Open,
            OverlayState::Open => OverlayState::Closed,
        };
        debug!(open = self.is_open(), "sidebar overlay toggled");
    }

    /// A nav link was activated; an open overlay closes, navigation itself
    /// is unaffected.
    pub fn notify_nav(&mut self) {
        self.close_if_open();
    }

    /// A click landed outside the sidebar while the overlay was open.
    pub fn outside_click(&mut self) {
        self.close_if_open();
    }

    /// Escape pressed. Returns true when the overlay consumed the key.
    pub fn escape(&mut self) -> bool {
        if self.is_open() {
            self.state = OverlayState::Closed;
            true
        } else {
            false
        }
    }

    /// Track a viewport resize. Crossing the breakpoint upward closes the
    /// overlay along with the toggle control.
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        if !self.is_overlay() {
            self.state = OverlayState::Closed;
        }
    }

    fn close_if_open(&mut self) {
        if self.is_open() {
            self.state = OverlayState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SidebarMenu, SIDEBAR_BREAKPOINT};

    const NARROW: u16 = SIDEBAR_BREAKPOINT - 10;
    const WIDE: u16 = SIDEBAR_BREAKPOINT + 40;

    #[test]
    fn toggle_flips_only_below_breakpoint() {
        let mut menu = SidebarMenu::new(WIDE);
        menu.toggle();
        assert!(!menu.is_open());

        let mut menu = SidebarMenu::new(NARROW);
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn open_overlay_closes_on_nav_outside_click_and_escape() {
        let mut menu = SidebarMenu::new(NARROW);

        menu.toggle();
        menu.notify_nav();
        assert!(!menu.is_open());

        menu.toggle();
        menu.outside_click();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.escape());
        assert!(!menu.is_open());
        // Escape with the overlay closed is not consumed.
        assert!(!menu.escape());
    }

    #[test]
    fn closing_transitions_are_no_ops_while_closed() {
        let mut menu = SidebarMenu::new(NARROW);
        menu.notify_nav();
        menu.outside_click();
        assert!(!menu.is_open());
    }

    #[test]
    fn resizing_above_breakpoint_closes_and_disables_the_overlay() {
        let mut menu = SidebarMenu::new(NARROW);
        menu.toggle();
        assert!(menu.is_open());

        menu.resize(WIDE);
        assert!(!menu.is_open());
        assert!(!menu.is_overlay());

        // Dropping back below the breakpoint re-enables the toggle but does
        // not reopen anything.
        menu.resize(NARROW);
        assert!(menu.is_overlay());
        assert!(!menu.is_open());
    }
}
