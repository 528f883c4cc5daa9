use serde::{Deserialize, Serialize};

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    /// The other direction
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Unit step `(d_row, d_col)` taken when reading a word in this direction
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "Across"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// A grid position.
///
/// Signed so that anchors computed above or left of the grid stay
/// representable; the board rejects them with a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Position `n` cells further along `direction`
    pub fn advance(self, direction: Direction, n: i32) -> Self {
        let (dr, dc) = direction.step();
        self.offset(dr * n, dc * n)
    }

    pub fn up(self) -> Self {
        self.offset(-1, 0)
    }

    pub fn down(self) -> Self {
        self.offset(1, 0)
    }

    pub fn left(self) -> Self {
        self.offset(0, -1)
    }

    pub fn right(self) -> Self {
        self.offset(0, 1)
    }

    /// The two orthogonal neighbours that flank a word running in `direction`
    pub fn sides(self, direction: Direction) -> [Self; 2] {
        match direction {
            Direction::Across => [self.up(), self.down()],
            Direction::Down => [self.left(), self.right()],
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Every cell a word of `len` letters covers from `anchor` along `direction`
pub fn projection(anchor: Coordinate, direction: Direction, len: usize) -> impl Iterator<Item = Coordinate> {
    (0..len as i32).map(move |i| anchor.advance(direction, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular() {
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
    }

    #[test]
    fn test_advance() {
        let c = Coordinate::new(2, 3);
        assert_eq!(c.advance(Direction::Across, 2), Coordinate::new(2, 5));
        assert_eq!(c.advance(Direction::Down, -3), Coordinate::new(-1, 3));
    }

    #[test]
    fn test_sides() {
        let c = Coordinate::new(1, 1);
        assert_eq!(c.sides(Direction::Across), [Coordinate::new(0, 1), Coordinate::new(2, 1)]);
        assert_eq!(c.sides(Direction::Down), [Coordinate::new(1, 0), Coordinate::new(1, 2)]);
    }

    #[test]
    fn test_projection() {
        let cells: Vec<_> = projection(Coordinate::new(4, 4), Direction::Down, 3).collect();
        assert_eq!(
            cells,
            vec![Coordinate::new(4, 4), Coordinate::new(5, 4), Coordinate::new(6, 4)]
        );
    }
}
