use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a single reveal changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub outcome: RevealOutcome,
    pub status: GameStatus,
    pub changes: Vec<CellChange>,
    /// The mine that ended the game, only set by the losing reveal.
    pub triggered_mine: Option<Coord2>,
    /// Every mine on the board, only filled by the losing reveal.
    pub exposed_mines: Vec<Coord2>,
}

impl ChangeSet {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            status,
            changes: Vec::new(),
            triggered_mine: None,
            exposed_mines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.outcome.has_update()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagChange {
    pub coords: Coord2,
    pub visibility: Visibility,
    pub outcome: MarkOutcome,
}

/// Owns the grid for one game, from the first reveal to the last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRaw")]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

/// Serialized form of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRaw {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<BoardRaw> for Board {
    type Error = GameError;

    fn try_from(raw: BoardRaw) -> Result<Self> {
        let BoardRaw {
            config,
            cells,
            revealed_count,
            flagged_count,
            status,
            triggered_mine,
        } = raw;

        config.validate()?;
        if cells.dim() != (usize::from(config.rows()), usize::from(config.columns())) {
            return Err(ConfigIssue::ShapeMismatch.into());
        }

        let mut mines: CellCount = 0;
        let mut revealed: CellCount = 0;
        let mut flagged: CellCount = 0;
        let mut revealed_mines = Vec::new();
        for ((x, y), cell) in cells.indexed_iter() {
            let coords = (x as Coord, y as Coord);
            let expected = if cell.is_mine() {
                0
            } else {
                cells
                    .neighbors_of(coords)
                    .filter(|&pos| cells[pos.to_nd_index()].is_mine())
                    .count() as u8
            };
            if cell.adjacent_mines() != expected {
                return Err(ConfigIssue::InconsistentState.into());
            }

            mines += CellCount::from(cell.is_mine());
            match cell.visibility() {
                Visibility::Hidden => {}
                Visibility::Flagged => flagged += 1,
                Visibility::Revealed => {
                    revealed += 1;
                    if cell.is_mine() {
                        revealed_mines.push(coords);
                    }
                }
            }
        }

        if mines != config.mines {
            return Err(ConfigIssue::MineCountMismatch.into());
        }
        if revealed != revealed_count || flagged != flagged_count {
            return Err(ConfigIssue::InconsistentState.into());
        }

        // a loss reveals exactly the triggering mine, nothing else reveals mines
        let cleared = revealed_count + config.mines == config.total_cells();
        let untouched = revealed_mines.is_empty() && triggered_mine.is_none();
        let consistent = match status {
            GameStatus::InProgress => untouched && !cleared,
            GameStatus::Won => untouched && cleared,
            GameStatus::Lost => {
                triggered_mine.is_some() && revealed_mines.as_slice() == triggered_mine.as_slice()
            }
        };
        if !consistent {
            return Err(ConfigIssue::InconsistentState.into());
        }

        Ok(Self {
            config,
            cells,
            revealed_count,
            flagged_count,
            status,
            triggered_mine,
        })
    }
}

impl Board {
    /// New board with mines laid out from an OS-seeded random source.
    #[cfg(feature = "std")]
    pub fn create(rows: i32, columns: i32, mines: i32) -> Result<Self> {
        use rand::Rng;

        let seed = rand::rng().random();
        Self::create_seeded(rows, columns, mines, seed)
    }

    pub fn create_seeded(rows: i32, columns: i32, mines: i32, seed: u64) -> Result<Self> {
        let config = GameConfig::new(rows, columns, mines)?;
        Self::generate(config, BernoulliMineGenerator::new(seed))
    }

    pub fn from_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::generate(difficulty.config()?, BernoulliMineGenerator::new(seed))
    }

    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        Self::from_layout(&generator.generate(config))
    }

    pub fn from_layout(layout: &MineLayout) -> Result<Self> {
        let config = layout.game_config();
        config.validate()?;

        let cells = Array2::from_shape_fn(config.size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell::new(layout.contains_mine(coords), layout.adjacent_mine_count(coords))
        });
        log::debug!(
            "New {}x{} board with {} mines",
            config.rows(),
            config.columns(),
            config.mines
        );

        Ok(Self {
            config,
            cells,
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::InProgress,
            triggered_mine: None,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn columns(&self) -> Coord {
        self.config.columns()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Validates coordinates of any integer type against this board.
    pub fn locate<T: TryInto<Coord>>(&self, x: T, y: T) -> Result<Coord2> {
        locate(x, y, self.size())
    }

    pub fn cell<T: TryInto<Coord>>(&self, x: T, y: T) -> Result<CellView> {
        let coords = self.locate(x, y)?;
        Ok(self.cell_view(coords))
    }

    /// Mine coordinates, withheld until the game is over.
    pub fn mine_positions(&self) -> Option<Vec<Coord2>> {
        self.is_finished().then(|| self.mine_coords())
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_board(self)
    }

    pub fn reveal<T: TryInto<Coord>>(&mut self, x: T, y: T) -> Result<ChangeSet> {
        let coords = self.locate(x, y)?;
        self.check_in_progress()?;

        let cell = self.cells[coords.to_nd_index()];
        if cell.visibility() != Visibility::Hidden {
            return Ok(ChangeSet::unchanged(self.status));
        }

        if cell.is_mine() {
            let change = self.reveal_cell(coords);
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return Ok(ChangeSet {
                outcome: RevealOutcome::HitMine,
                status: self.status,
                changes: vec![change],
                triggered_mine: Some(coords),
                exposed_mines: self.mine_coords(),
            });
        }

        let changes = self.flood_reveal(coords);
        let outcome = if self.revealed_count + self.config.mines == self.config.total_cells() {
            self.end_game(GameStatus::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        Ok(ChangeSet {
            outcome,
            status: self.status,
            changes,
            triggered_mine: None,
            exposed_mines: Vec::new(),
        })
    }

    pub fn toggle_flag<T: TryInto<Coord>>(&mut self, x: T, y: T) -> Result<FlagChange> {
        use MarkOutcome::*;
        use Visibility::*;

        let coords = self.locate(x, y)?;
        self.check_in_progress()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        let outcome = match cell.visibility() {
            Hidden => {
                cell.set_visibility(Flagged);
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                cell.set_visibility(Hidden);
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        };

        Ok(FlagChange {
            coords,
            visibility: cell.visibility(),
            outcome,
        })
    }

    /// Reveals `origin` and spreads through zero-count cells with an explicit
    /// stack, stopping at flags, mines and cells already revealed.
    fn flood_reveal(&mut self, origin: Coord2) -> Vec<CellChange> {
        let mut changes = Vec::new();
        let mut pending = vec![origin];

        while let Some(coords) = pending.pop() {
            let cell = self.cells[coords.to_nd_index()];
            if cell.is_mine() || cell.visibility() != Visibility::Hidden {
                continue;
            }

            changes.push(self.reveal_cell(coords));
            if cell.adjacent_mines() == 0 {
                pending.extend(
                    self.cells
                        .neighbors_of(coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].visibility() == Visibility::Hidden),
                );
            }
        }

        log::trace!("Reveal at {:?} opened {} cells", origin, changes.len());
        changes
    }

    fn reveal_cell(&mut self, coords: Coord2) -> CellChange {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.set_visibility(Visibility::Revealed);
        self.revealed_count += 1;
        log::trace!("Revealed cell at {:?}: {:?}", coords, cell.content());

        CellChange {
            coords,
            visibility: Visibility::Revealed,
            content: cell.content(),
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        self.status = status;
        log::debug!(
            "Game ended: {:?} with {} of {} safe cells revealed",
            status,
            self.revealed_count,
            self.config.safe_cells()
        );
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    fn mine_coords(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((x, y), _)| (x as Coord, y as Coord))
            .collect()
    }

    pub(crate) fn cell_view(&self, coords: Coord2) -> CellView {
        use GameStatus::*;
        use Visibility::*;

        let cell = self.cells[coords.to_nd_index()];
        match (cell.visibility(), self.status) {
            (Revealed, _) if cell.is_mine() => CellView::Exploded,
            (Revealed, _) => CellView::Revealed(cell.adjacent_mines()),
            (Flagged, Lost) if !cell.is_mine() => CellView::WrongFlag,
            (Flagged, _) => CellView::Flagged,
            (Hidden, Lost) if cell.is_mine() => CellView::Mine,
            (Hidden, Won) if cell.is_mine() => CellView::Flagged,
            (Hidden, _) => CellView::Hidden,
        }
    }

    #[cfg(test)]
    pub(crate) fn raw_cell(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }
}
