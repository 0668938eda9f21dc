use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::history::PathHistory;
use crate::maze::{Direction, Grid, Position, Weight};
use crate::solvers::Solver;

/// One two-column square of the terminal picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Wall,
    /// An unvisited cell, or an open passage between cells
    Floor(Weight),
    Visited,
    Route(Solver),
    Start,
    Goal,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

/// Color used for the route of each solver.
pub fn solver_color(solver: Solver) -> Color {
    match solver {
        Solver::Bfs => Color::Cyan,
        Solver::Dfs => Color::Magenta,
        Solver::Dijkstra => Color::Yellow,
        Solver::AStar => Color::Green,
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Floor(weight) => match weight {
                Weight::Light => "  ".with(Color::Reset),
                Weight::Medium => "░░".with(Color::DarkGrey),
                Weight::Heavy => "▓▓".with(Color::DarkGrey),
            },
            Glyph::Visited => "* ".with(Color::Blue),
            Glyph::Route(solver) => "██".with(solver_color(*solver)),
            Glyph::Start => "🟩".with(Color::Green),
            Glyph::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// The maze drawn on a doubled lattice: cells sit at odd coordinates,
/// the walls or passages between them at the even ones in between.
pub struct Frame {
    glyphs: Box<[Glyph]>,
    width: usize,
    height: usize,
}

impl Frame {
    /// Lays out the grid, the cells visited so far and every recorded route.
    /// Routes are drawn over visited cells; start and goal are drawn over everything.
    pub fn build(grid: &Grid, visited: &[Position], history: &PathHistory) -> Self {
        let width = grid.cols() as usize * 2 + 1;
        let height = grid.rows() as usize * 2 + 1;
        let mut frame = Frame {
            glyphs: vec![Glyph::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };

        for cell in grid.cells() {
            let coord = cell.position();
            frame[Frame::cell_slot(coord)] = Glyph::Floor(cell.weight);
            // Passages to the east and south; the other two are drawn by the neighbor
            for direction in [Direction::East, Direction::South] {
                if !cell.has_wall(direction) {
                    if let Some(slot) = Frame::passage_slot(grid, coord, direction) {
                        frame[slot] = Glyph::Floor(Weight::Light);
                    }
                }
            }
        }

        for &coord in visited {
            frame[Frame::cell_slot(coord)] = Glyph::Visited;
        }

        for layer in history.layers() {
            for &coord in &layer.path {
                frame[Frame::cell_slot(coord)] = Glyph::Route(layer.solver);
            }
            for pair in layer.path.windows(2) {
                let slot = Frame::between(pair[0], pair[1]);
                frame[slot] = Glyph::Route(layer.solver);
            }
        }

        frame[Frame::cell_slot(grid.start())] = Glyph::Start;
        frame[Frame::cell_slot(grid.end())] = Glyph::Goal;
        frame
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn cell_slot(coord: Position) -> (usize, usize) {
        (coord.0 as usize * 2 + 1, coord.1 as usize * 2 + 1)
    }

    fn passage_slot(grid: &Grid, coord: Position, direction: Direction) -> Option<(usize, usize)> {
        grid.neighbor(coord, direction)
            .map(|neighbor| Frame::between(coord, neighbor))
    }

    /// Slot between two adjacent cells.
    fn between(a: Position, b: Position) -> (usize, usize) {
        let (ar, ac) = Frame::cell_slot(a);
        let (br, bc) = Frame::cell_slot(b);
        ((ar + br) / 2, (ac + bc) / 2)
    }

    /// Queues the whole frame on `out` without flushing.
    pub fn queue_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                queue!(out, style::Print(self[(row, col)]))?;
            }
            queue!(out, style::Print("\r\n"))?;
        }
        Ok(())
    }
}

impl std::ops::Index<(usize, usize)> for Frame {
    type Output = Glyph;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.glyphs[index.0 * self.width + index.1]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Frame {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.glyphs[index.0 * self.width + index.1]
    }
}

/// Draws the maze at the top-left corner of the terminal, replacing the previous frame.
pub fn render<W: Write>(
    out: &mut W,
    grid: &Grid,
    visited: &[Position],
    history: &PathHistory,
) -> std::io::Result<()> {
    queue!(
        out,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0),
    )?;
    Frame::build(grid, visited, history).queue_to(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve_maze;

    fn corridor() -> Grid {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall((0, 0), (0, 1));
        grid.remove_wall((0, 1), (1, 1));
        grid
    }

    #[test]
    fn test_frame_layout() {
        let grid = corridor();
        let frame = Frame::build(&grid, &[], &PathHistory::new());
        assert_eq!(frame.width(), 5);
        assert_eq!(frame.height(), 5);
        assert_eq!(frame[(0, 0)], Glyph::Wall);
        assert_eq!(frame[(1, 1)], Glyph::Start);
        assert_eq!(frame[(3, 3)], Glyph::Goal);
        // Open passage between (0, 0) and (0, 1), wall between (0, 0) and (1, 0)
        assert_eq!(frame[(1, 2)], Glyph::Floor(Weight::Light));
        assert_eq!(frame[(2, 1)], Glyph::Wall);
        // Open passage between (0, 1) and (1, 1)
        assert_eq!(frame[(2, 3)], Glyph::Floor(Weight::Light));
    }

    #[test]
    fn test_frame_shows_weights_visits_and_routes() {
        let mut grid = corridor();
        grid.set_weight((1, 0), Weight::Heavy);
        let result = solve_maze(&grid, Solver::Dijkstra);
        let mut history = PathHistory::new();
        history.add(&result);

        let frame = Frame::build(&grid, &[], &history);
        assert_eq!(frame[(1, 3)], Glyph::Route(Solver::Dijkstra));
        assert_eq!(frame[(2, 3)], Glyph::Route(Solver::Dijkstra));
        assert_eq!(frame[(3, 1)], Glyph::Floor(Weight::Heavy));

        let frame = Frame::build(&grid, &[(1, 0)], &PathHistory::new());
        assert_eq!(frame[(3, 1)], Glyph::Visited);
    }

    #[test]
    fn test_glyph_display_width() {
        // Formatting checks the two-column width in debug builds
        for glyph in [
            Glyph::Wall,
            Glyph::Floor(Weight::Light),
            Glyph::Floor(Weight::Medium),
            Glyph::Floor(Weight::Heavy),
            Glyph::Visited,
            Glyph::Route(Solver::Bfs),
            Glyph::Start,
            Glyph::Goal,
        ] {
            assert!(!glyph.to_string().is_empty());
        }
    }

    #[test]
    fn test_queue_to_writes_every_row() {
        let grid = corridor();
        let frame = Frame::build(&grid, &[], &PathHistory::new());
        let mut out = Vec::new();
        frame.queue_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), frame.height());
        assert!(text.contains("🟩"));
        assert!(text.contains("🟥"));
    }
}
