/// A rectangle in virtual-desktop pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a `Rect` from Win32-style edge coordinates.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_computes_width_and_height() {
        let r = Rect::from_edges(1920, 0, 3840, 1080);
        assert_eq!(r, Rect::new(1920, 0, 1920, 1080));
    }

    #[test]
    fn from_edges_handles_negative_origin() {
        // Secondary monitors left of the primary have negative coordinates.
        let r = Rect::from_edges(-1920, 0, 0, 1080);
        assert_eq!(r.x, -1920);
        assert_eq!(r.width, 1920);
    }
}
