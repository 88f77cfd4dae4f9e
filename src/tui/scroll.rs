// Scroll state for TUI panels
//
// Each panel owns its ScrollState. The event log and the system logs both
// stream, so they start in auto-follow: new entries keep the view pinned to
// the bottom until the user scrolls away, and reaching the bottom again
// resumes following.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible line
    offset: usize,

    /// Total number of lines
    total: usize,

    /// Number of lines visible in the viewport
    viewport: usize,

    /// Keep the view at the bottom as content grows
    pub auto_follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Update content and viewport dimensions (each render frame)
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = if self.auto_follow {
            self.bottom()
        } else {
            self.offset.min(self.bottom())
        };
    }

    /// User-driven move; following resumes exactly when the bottom is reached
    fn move_to(&mut self, offset: usize) {
        self.offset = offset.min(self.bottom());
        self.auto_follow = self.offset == self.bottom();
    }

    pub fn scroll_up(&mut self) {
        self.move_to(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.move_to(self.offset + 1);
    }

    pub fn page_up(&mut self) {
        self.move_to(self.offset.saturating_sub(self.page()));
    }

    pub fn page_down(&mut self) {
        self.move_to(self.offset + self.page());
    }

    pub fn scroll_to_top(&mut self) {
        self.move_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.move_to(self.bottom());
    }

    /// Follow again and forget the old position (after the content is cleared)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total = 0;
        self.auto_follow = true;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Half-open index range of visible lines
    pub fn visible_range(&self) -> (usize, usize) {
        (self.offset, (self.offset + self.viewport).min(self.total))
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Offset that shows the last line at the bottom
    fn bottom(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn page(&self) -> usize {
        self.viewport.max(1)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
