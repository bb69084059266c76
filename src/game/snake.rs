use super::direction::Direction;
use super::grid::Bounds;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body and where it's going
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first, tail last.  Never empty.
    pub(super) cells: VecDeque<Position>,

    /// The direction in which the snake will move on the next step
    pub(super) direction: Direction,

    /// The direction in which the snake moved on its last step
    pub(super) heading: Direction,
}

impl Snake {
    /// Create a one-cell snake at `head` facing in `direction`
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            direction,
            heading: direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.cells.front().copied().expect("snake should never be empty")
    }

    /// Return the positions of the cells behind the head, from the neck to
    /// the tail
    pub(super) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().skip(1).copied()
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return the glyphs to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> &'static str {
        self.heading.head_symbol()
    }

    /// Change the direction the snake will next move in.  Turning back onto
    /// the direction of the previous move is ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.heading.reverse() {
            self.direction = direction;
        }
    }

    /// Return the cell the head will move into on the next step, or `None`
    /// if it would run into a wall.
    pub(super) fn next_head(&self, bounds: Bounds) -> Option<Position> {
        self.direction.advance(self.head(), bounds)
    }

    /// Does any part of the snake, tail included, occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Move the head into `pos`.  Unless `grow` is true, the tail moves up
    /// behind it so that the snake keeps its length.
    pub(super) fn step(&mut self, pos: Position, grow: bool) {
        self.cells.push_front(pos);
        self.heading = self.direction;
        if !grow {
            let _ = self.cells.pop_back();
        }
    }
}
