use crate::maze::Position;

/// Errors raised at the boundary of the maze engine.
///
/// An unreachable goal is not an error: it is reported through
/// [`crate::solvers::SolveStatus::Unreachable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    InvalidDimensions { rows: u16, cols: u16 },
    /// A position handed to the solver lies outside the grid.
    OutOfBounds {
        position: Position,
        rows: u16,
        cols: u16,
    },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid maze dimensions {}x{}: rows and cols must be at least 1",
                rows, cols
            ),
            MazeError::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "position (row {}, col {}) is outside the {}x{} grid",
                position.0, position.1, rows, cols
            ),
        }
    }
}

impl std::error::Error for MazeError {}

impl From<MazeError> for std::io::Error {
    fn from(err: MazeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MazeError::InvalidDimensions { rows: 0, cols: 4 };
        assert_eq!(
            err.to_string(),
            "invalid maze dimensions 0x4: rows and cols must be at least 1"
        );
        let err = MazeError::OutOfBounds {
            position: (3, 7),
            rows: 3,
            cols: 3,
        };
        assert!(err.to_string().contains("(row 3, col 7)"));
    }

    #[test]
    fn test_into_io_error() {
        let io_err: std::io::Error = MazeError::InvalidDimensions { rows: 0, cols: 0 }.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
