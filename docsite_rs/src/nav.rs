//! Mobile navigation panel rules and the debounce ticket.

/// Open/close decisions for the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavPanel {
    breakpoint: f64,
}

impl NavPanel {
    /// Rules for a panel that collapses at or below `breakpoint` px.
    pub fn new(breakpoint: f64) -> Self {
        Self { breakpoint }
    }

    /// Viewport counts as mobile.
    pub fn is_narrow(&self, width: f64) -> bool {
        width <= self.breakpoint
    }

    /// A click landed outside both the panel and its toggle.
    pub fn closes_on_outside_click(&self, open: bool, width: f64) -> bool {
        open && self.is_narrow(width)
    }

    /// An in-page link was followed.
    pub fn closes_on_navigate(&self, width: f64) -> bool {
        self.is_narrow(width)
    }

    /// The resize debounce fired.
    pub fn closes_on_resize(&self, width: f64) -> bool {
        width > self.breakpoint
    }

    /// Smooth-scroll destination for an element whose viewport-relative top is
    /// `rect_top` while the page is scrolled to `page_y`.
    pub fn scroll_target(rect_top: f64, page_y: f64, offset: f64) -> f64 {
        rect_top + page_y - offset
    }
}

/// Identifies one scheduled timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce without cancelling timers: every event takes a
/// ticket, and a timer callback only acts if its ticket is still the latest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    /// Supersede any outstanding ticket.
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// No newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        let panel = NavPanel::new(768.0);
        assert!(panel.is_narrow(768.0));
        assert!(!panel.is_narrow(769.0));
        assert!(!panel.closes_on_resize(768.0));
        assert!(panel.closes_on_resize(1024.0));
    }

    #[test]
    fn test_outside_click() {
        let panel = NavPanel::new(768.0);
        assert!(panel.closes_on_outside_click(true, 400.0));
        assert!(!panel.closes_on_outside_click(false, 400.0));
        assert!(!panel.closes_on_outside_click(true, 1200.0));
    }

    #[test]
    fn test_navigate_closes_only_on_mobile() {
        let panel = NavPanel::new(768.0);
        assert!(panel.closes_on_navigate(375.0));
        assert!(!panel.closes_on_navigate(1440.0));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(NavPanel::scroll_target(300.0, 1200.0, 20.0), 1480.0);
        assert_eq!(NavPanel::scroll_target(-50.0, 600.0, 20.0), 530.0);
    }

    #[test]
    fn test_only_last_ticket_fires() {
        let mut debounce = Debouncer::default();
        let burst: Vec<_> = (0..5).map(|_| debounce.issue()).collect();

        let fired: Vec<_> = burst.iter().filter(|t| debounce.is_current(**t)).collect();
        assert_eq!(fired, vec![&burst[4]]);
    }

    #[test]
    fn test_ticket_after_quiet_period() {
        let mut debounce = Debouncer::default();
        let first = debounce.issue();
        assert!(debounce.is_current(first));
        let second = debounce.issue();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }
}
