use super::grid::Bounds;
use crate::consts;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell next to `pos` in this direction.  Returns `None` if
    /// that would leave a grid without wraparound, i.e., the snake would hit
    /// the wall.
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = decrement_in_bounds(y, bounds.height, bounds.wrap)?,
            Direction::East => x = increment_in_bounds(x, bounds.width, bounds.wrap)?,
            Direction::South => y = increment_in_bounds(y, bounds.height, bounds.wrap)?,
            Direction::West => x = decrement_in_bounds(x, bounds.width, bounds.wrap)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Return the glyphs for drawing a snake's head facing this way
    pub(super) fn head_symbol(self) -> &'static str {
        match self {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

fn decrement_in_bounds(x: u16, max: u16, wrap: bool) -> Option<u16> {
    match x.checked_sub(1) {
        Some(x2) => Some(x2),
        None => wrap.then(|| max.saturating_sub(1)),
    }
}

fn increment_in_bounds(x: u16, max: u16, wrap: bool) -> Option<u16> {
    match x.checked_add(1).filter(|&x2| x2 < max) {
        Some(x2) => Some(x2),
        None => wrap.then_some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WALLED: Bounds = Bounds {
        width: 10,
        height: 15,
        wrap: false,
    };

    const WRAPPED: Bounds = Bounds {
        width: 10,
        height: 15,
        wrap: true,
    };

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), WALLED, Some(Position::new(2, 6)))]
    #[case(Direction::South, Position::new(2, 7), WALLED, Some(Position::new(2, 8)))]
    #[case(Direction::East, Position::new(2, 7), WALLED, Some(Position::new(3, 7)))]
    #[case(Direction::West, Position::new(2, 7), WALLED, Some(Position::new(1, 7)))]
    #[case(Direction::North, Position::new(2, 0), WALLED, None)]
    #[case(Direction::North, Position::new(2, 0), WRAPPED, Some(Position::new(2, 14)))]
    #[case(Direction::South, Position::new(2, 14), WALLED, None)]
    #[case(Direction::South, Position::new(2, 14), WRAPPED, Some(Position::new(2, 0)))]
    #[case(Direction::East, Position::new(9, 7), WALLED, None)]
    #[case(Direction::East, Position::new(9, 7), WRAPPED, Some(Position::new(0, 7)))]
    #[case(Direction::West, Position::new(0, 7), WALLED, None)]
    #[case(Direction::West, Position::new(0, 7), WRAPPED, Some(Position::new(9, 7)))]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] bounds: Bounds,
        #[case] r: Option<Position>,
    ) {
        assert_eq!(d.advance(pos, bounds), r);
    }

    #[test]
    fn reverse_is_involution() {
        for d in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }
}
