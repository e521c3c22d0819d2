//! Cursor over the product thumbnails.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves by `direction` thumbnails, wrapping at both ends.
    pub fn step(&mut self, direction: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
        Some(self.index)
    }

    pub fn forward(&mut self) -> Option<usize> {
        self.step(1)
    }

    pub fn back(&mut self) -> Option<usize> {
        self.step(-1)
    }

    /// Jumps to a thumbnail picked directly. Out-of-range picks are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.index = index;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_does_not_move() {
        let mut cursor = GalleryCursor::new(0);
        assert_eq!(cursor.forward(), None);
        assert_eq!(cursor.back(), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut cursor = GalleryCursor::new(4);
        assert_eq!(cursor.back(), Some(3));
    }

    #[test]
    fn select_then_next_continues_from_selection() {
        let mut cursor = GalleryCursor::new(5);
        cursor.select(3);
        assert_eq!(cursor.forward(), Some(4));
        assert_eq!(cursor.forward(), Some(0));
        assert_eq!(cursor.select(9), None);
        assert_eq!(cursor.index(), 0);
    }
}
