//! Numbered tiles and the board that holds them.
//!
//! Each tile carries a single [`TileStatus`]. A tile cannot be selected and
//! accepted at the same time because there is only one status to hold.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of tiles on the board (face values 1..=12).
pub const TILE_COUNT: usize = 12;

/// Sum of every face value on the board.
pub const TOTAL_VALUE: u32 = (TILE_COUNT * (TILE_COUNT + 1) / 2) as u32;

/// A set of tile indices. Inline capacity covers any selection
/// that can match a two-dice roll.
pub type TileSet = SmallVec<[usize; 4]>;

/// Face value of the tile at `index`.
#[inline]
#[must_use]
pub const fn tile_value(index: usize) -> u32 {
    index as u32 + 1
}

/// Status of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileStatus {
    /// Not selected, not closed.
    #[default]
    Open,
    /// Toggled on in the round in progress.
    Selected,
    /// Closed by an earlier accepted round.
    Accepted,
}

/// One numbered tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    index: usize,
    status: TileStatus,
}

impl Tile {
    /// Create an open tile at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            status: TileStatus::Open,
        }
    }

    /// Position on the board (0-based).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Face value (1-based).
    #[must_use]
    pub const fn value(&self) -> u32 {
        tile_value(self.index)
    }

    #[must_use]
    pub const fn status(&self) -> TileStatus {
        self.status
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.status == TileStatus::Selected
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == TileStatus::Accepted
    }
}

/// The twelve tiles, in index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with every tile open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: std::array::from_fn(Tile::new),
        }
    }

    /// Get a tile by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in index order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Set a tile's status. Callers are responsible for range checks
    /// and for keeping any running sum in step.
    pub(crate) fn set_status(&mut self, index: usize, status: TileStatus) {
        self.tiles[index].status = status;
    }

    /// Indices of tiles that are not accepted.
    #[must_use]
    pub fn open_indices(&self) -> TileSet {
        self.iter()
            .filter(|t| !t.is_accepted())
            .map(Tile::index)
            .collect()
    }

    /// Indices of currently selected tiles.
    #[must_use]
    pub fn selected_indices(&self) -> TileSet {
        self.iter()
            .filter(|t| t.is_selected())
            .map(Tile::index)
            .collect()
    }

    /// Sum of selected tile values, recomputed from scratch.
    #[must_use]
    pub fn selected_sum(&self) -> u32 {
        self.iter().filter(|t| t.is_selected()).map(Tile::value).sum()
    }

    /// Sum of values not yet accepted.
    #[must_use]
    pub fn open_value(&self) -> u32 {
        self.iter().filter(|t| !t.is_accepted()).map(Tile::value).sum()
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.iter().filter(|t| t.is_accepted()).count()
    }

    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.accepted_count() == TILE_COUNT
    }

    /// Promote every selected tile to accepted. Returns the closed indices.
    pub(crate) fn commit_selection(&mut self) -> TileSet {
        let closed = self.selected_indices();
        for &index in &closed {
            self.tiles[index].status = TileStatus::Accepted;
        }
        closed
    }
}
