//! Scroll window over rows of varying height.

use std::ops::Range;

#[derive(Debug, Default, Clone)]
pub struct ListWindow {
    offset: usize,
}

impl ListWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// First row drawn
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll just enough to keep `selected` fully visible, then return the
    /// rows that fit in `viewport`.
    ///
    /// The first visible row is always included, even when it is taller than
    /// the viewport.
    pub fn follow(&mut self, heights: &[u16], selected: Option<usize>, viewport: u16) -> Range<usize> {
        if heights.is_empty() {
            self.offset = 0;
            return 0..0;
        }

        let last = heights.len() - 1;
        self.offset = self.offset.min(last);
        let viewport = u32::from(viewport);

        if let Some(selected) = selected.map(|index| index.min(last)) {
            if selected < self.offset {
                self.offset = selected;
            }
            while self.offset < selected && total(&heights[self.offset..=selected]) > viewport {
                self.offset += 1;
            }
        }

        let mut used = 0;
        let mut end = self.offset;
        while end < heights.len() {
            let height = u32::from(heights[end]);
            if used + height > viewport && end > self.offset {
                break;
            }
            used += height;
            end += 1;
        }

        self.offset..end
    }
}

fn total(heights: &[u16]) -> u32 {
    heights.iter().map(|&h| u32::from(h)).sum()
}
