use super::direction::Direction;
use ratatui::layout::{Position, Rect, Size};

/// The playing field.  Cells are addressed by `Position`s relative to the
/// top-left corner of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Bounds {
    pub(super) width: u16,
    pub(super) height: u16,
    /// Whether moving off one edge of the grid brings the snake in on the
    /// opposite edge instead of crashing into a wall
    pub(super) wrap: bool,
}

impl Bounds {
    /// A square grid of `size` × `size` cells
    pub(super) fn square(size: u16, wrap: bool) -> Bounds {
        Bounds {
            width: size,
            height: size,
            wrap,
        }
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell in the grid, row by row
    pub(super) fn positions(self) -> impl Iterator<Item = Position> {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    #[cfg(test)]
    pub(super) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Where a new snake starts and which way it faces: a third of the way in
    /// from the top-left corner, heading up.  On the default 30×30 grid this
    /// is (10, 10).
    pub(super) fn snake_start(self) -> (Position, Direction) {
        (
            Position::new(self.width / 3, self.height / 3),
            Direction::North,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start() {
        let bounds = Bounds::square(30, false);
        assert_eq!(
            bounds.snake_start(),
            (Position::new(10, 10), Direction::North)
        );
        assert!(bounds.contains(Position::new(10, 10)));
    }

    #[test]
    fn positions_cover_grid() {
        let bounds = Bounds::square(8, true);
        assert_eq!(bounds.positions().count(), 64);
        assert!(bounds.positions().all(|p| bounds.contains(p)));
        assert!(!bounds.contains(Position::new(8, 0)));
    }
}
