use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable snapshot of what the player can see, safe to hand to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub status: GameStatus,
    pub mine_count: CellCount,
    pub mines_left: i32,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn new(
        size: Coord2,
        status: GameStatus,
        mine_count: CellCount,
        mines_left: i32,
        cells: Array2<CellView>,
    ) -> Result<Self> {
        let view = Self {
            size,
            status,
            mine_count,
            mines_left,
            cells,
        };
        view.validate()?;
        Ok(view)
    }

    pub fn from_board(board: &Board) -> Self {
        let cells = Array2::from_shape_fn(board.size().to_nd_index(), |(x, y)| {
            board.cell_view((x as Coord, y as Coord))
        });

        Self {
            size: board.size(),
            status: board.status(),
            mine_count: board.mine_count(),
            mines_left: board.mines_left(),
            cells,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(ConfigIssue::ShapeMismatch.into());
        }
        GameConfig::new_unchecked(self.size, self.mine_count).validate()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn concealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_concealed()).count()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (y, cell) in row.iter().enumerate() {
                if y > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
