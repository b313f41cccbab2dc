#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod difficulty;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Board dimensions and mine count, `size` is `(rows, columns)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks the raw parameters and builds a config from them.
    pub fn new(rows: i32, columns: i32, mines: i32) -> Result<Self> {
        if rows <= 0 || columns <= 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        let (Ok(rows), Ok(columns)) = (Coord::try_from(rows), Coord::try_from(columns)) else {
            return Err(ConfigIssue::BoardTooLarge.into());
        };
        if mines <= 0 {
            return Err(ConfigIssue::NoMines.into());
        }
        let config = match CellCount::try_from(mines) {
            Ok(mines) => Self::new_unchecked((rows, columns), mines),
            Err(_) => return Err(ConfigIssue::TooManyMines.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, columns) = self.size;
        if rows == 0 || columns == 0 {
            Err(ConfigIssue::EmptyBoard.into())
        } else if self.mines == 0 {
            Err(ConfigIssue::NoMines.into())
        } else if self.mines >= self.total_cells() {
            Err(ConfigIssue::TooManyMines.into())
        } else {
            Ok(())
        }
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Mine positions of a board before any play happens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutRaw")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct MineLayoutRaw {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineLayoutRaw> for MineLayout {
    type Error = GameError;

    fn try_from(raw: MineLayoutRaw) -> Result<Self> {
        let layout = Self::from_mine_mask(raw.mine_mask)?;
        if layout.mine_count != raw.mine_count {
            return Err(ConfigIssue::MineCountMismatch.into());
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if Coord::try_from(rows).is_err() || Coord::try_from(columns).is_err() {
            return Err(ConfigIssue::BoardTooLarge.into());
        }
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &(x, y) in mine_coords {
            let coords = locate(x, y, size)?;
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Used by generators, which already know the mask fits and how many
    /// mines they placed.
    pub(crate) fn from_generated(mine_mask: Array2<bool>, placed: CellCount) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if mine_count != placed {
            log::warn!(
                "Generated layout count mismatch, actual: {}, placed: {}",
                mine_count,
                placed
            );
        }
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .neighbors_of(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// Mine coordinates in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
            .collect()
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
