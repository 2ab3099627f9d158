use crate::rect::Rect;

/// Horizontal-only scroll.  `offset` is added to world x to get screen x,
/// so it is always zero or negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub offset: i32,
    pub level_width: i32,
    pub viewport_width: i32,
}

impl Camera {
    pub fn new(level_width: i32, viewport_width: i32) -> Camera {
        Camera {
            offset: 0,
            level_width,
            viewport_width,
        }
    }

    /// Most negative offset allowed.  Zero when the level fits on screen.
    pub fn min_offset(&self) -> i32 {
        if self.level_width <= self.viewport_width {
            0
        } else {
            -(self.level_width - self.viewport_width)
        }
    }

    /// Centre the view on `target`, clamped to the level.  No history is
    /// kept between calls.
    pub fn update(&mut self, target: &Rect) {
        let centred = -target.center_x() + self.viewport_width / 2;
        self.offset = centred.clamp(self.min_offset(), 0);
    }

    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translate(self.offset, 0)
    }

    /// World-space x span `(start, end)` of the visible area widened by
    /// `margin` on each side.
    pub fn activity_window(&self, margin: i32) -> (i32, i32) {
        let left = -self.offset;
        (left - margin, left + self.viewport_width + margin)
    }
}
