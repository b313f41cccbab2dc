use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Turns caller-supplied coordinates of any integer type into grid
/// coordinates, failing with [`GameError::OutOfBounds`] for anything outside
/// `bounds`, negative values included.
pub fn locate<T: TryInto<Coord>>(x: T, y: T, bounds: Coord2) -> Result<Coord2> {
    let x = x.try_into().map_err(|_| GameError::OutOfBounds)?;
    let y = y.try_into().map_err(|_| GameError::OutOfBounds)?;
    if x < bounds.0 && y < bounds.1 {
        Ok((x, y))
    } else {
        Err(GameError::OutOfBounds)
    }
}

pub trait NeighborIterExt {
    fn neighbors_of(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborIterExt for Array2<T> {
    fn neighbors_of(&self, center: Coord2) -> Neighbors {
        let (rows, columns) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(columns).unwrap_or(Coord::MAX),
        );
        Neighbors::new(center, bounds)
    }
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up-to-8 cells sharing an edge or a corner with `center`, clipped at
/// `bounds`.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    offset: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offset: 0,
        }
    }

    fn shifted(&self, (dx, dy): (i8, i8)) -> Option<Coord2> {
        let x = self.center.0.checked_add_signed(dx)?;
        let y = self.center.1.checked_add_signed(dy)?;
        (x < self.bounds.0 && y < self.bounds.1).then_some((x, y))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = OFFSETS.get(self.offset) {
            self.offset += 1;
            if let Some(coords) = self.shifted(delta) {
                return Some(coords);
            }
        }
        None
    }
}
