/// A laid-out box in pixels. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-area box cannot be hit.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First column past the right edge.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    pub const fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}
