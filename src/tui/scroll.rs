// Scroll state for list panels
//
// Each panel owns one of these. It tracks a cursor (the highlighted item),
// the offset of the first visible item, and the sizes needed to clamp both.
// Dimensions are refreshed on every render; key handling only moves the
// cursor and lets the offset follow it.

/// Cursor plus viewport for a list of items
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Highlighted item
    cursor: usize,

    /// Index of the first visible item
    offset: usize,

    /// Total number of items
    total: usize,

    /// Number of items visible in the viewport
    viewport: usize,
}

impl ScrollState {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport sizes, clamping cursor and offset
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.cursor = self.cursor.min(total.saturating_sub(1));
        self.follow_cursor();
    }

    /// Back to the first item (new content)
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.total {
            self.cursor += 1;
        }
        self.follow_cursor();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.viewport.max(1));
        self.follow_cursor();
    }

    pub fn page_down(&mut self) {
        let last = self.total.saturating_sub(1);
        self.cursor = (self.cursor + self.viewport.max(1)).min(last);
        self.follow_cursor();
    }

    pub fn select_first(&mut self) {
        self.reset();
    }

    pub fn select_last(&mut self) {
        self.cursor = self.total.saturating_sub(1);
        self.follow_cursor();
    }

    /// Put the cursor on a specific item (mouse click)
    pub fn select(&mut self, index: usize) {
        if index < self.total {
            self.cursor = index;
            self.follow_cursor();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn follow_cursor(&mut self) {
        if self.viewport == 0 {
            self.offset = 0;
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.viewport {
            self.offset = self.cursor + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }
}
