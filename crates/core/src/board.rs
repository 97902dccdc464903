//! Board module - owns the 4x4 grid and the slide/merge rules
//!
//! Tiles live in a fixed arena of slots; the grid stores the slot index of the
//! tile occupying each cell. A cell is empty exactly when it stores `None`, so a
//! zero-valued tile never exists.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).

use arrayvec::ArrayVec;
use rand::Rng;

use crate::spawn::{choose_cell, spawn_value};
use crate::types::{is_tile_value, Direction, Pos, CELL_COUNT, GRID_SIZE};

/// Stable identity of a tile, unique within one board's lifetime.
///
/// Ids are handed out in spawn order and never reused, so a presentation layer
/// can match tiles across two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A live tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    /// Power of two, at least 2
    pub value: u32,
    pub row: usize,
    pub col: usize,
    /// Set when this tile absorbed another tile during the current move
    pub merged: bool,
}

/// What a single slide did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one tile changed cell or merged
    pub changed: bool,
    /// Number of tiles that ended in a different cell (merged-away tiles excluded)
    pub moved: u32,
    /// Number of merges; each merge removed exactly one tile
    pub merges: u32,
    /// Sum of the post-merge values of every merge
    pub score_delta: u32,
}

/// The game board - 4x4 grid of optional tiles backed by a slot arena
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Slot index of the tile in each cell, row-major
    grid: [[Option<usize>; GRID_SIZE]; GRID_SIZE],
    /// Tile arena. There are as many slots as cells, so an empty cell always
    /// has a free slot to go with it.
    slots: [Option<Tile>; CELL_COUNT],
    next_id: u32,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            grid: [[None; GRID_SIZE]; GRID_SIZE],
            slots: [None; CELL_COUNT],
            next_id: 0,
        }
    }

    /// Build a board from a grid of raw values (0 = empty).
    ///
    /// Returns `None` if any nonzero value is not a power of two of at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_values([
    ///     [2, 0, 0, 2],
    ///     [0, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.tile_count(), 3);
    ///
    /// assert!(Board::from_values([[3, 0, 0, 0]; 4]).is_none());
    /// ```
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !is_tile_value(value) {
                    return None;
                }
                board.place(row, col, value)?;
            }
        }
        Some(board)
    }

    /// Map signed coordinates to an in-bounds position
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<Pos> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Neighbor of `pos` one step along `(dr, dc)`, if in bounds
    #[inline(always)]
    fn step(pos: Pos, dr: i8, dc: i8) -> Option<Pos> {
        Self::index(pos.0 as i8 + dr, pos.1 as i8 + dc)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Tile at `(row, col)`, or `None` if the cell is empty or out of bounds
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        let slot = (*self.grid.get(row)?.get(col)?)?;
        self.slots[slot].as_ref()
    }

    /// Value at `(row, col)`; 0 for empty or out-of-bounds cells
    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        self.tile_at(row, col).map_or(0, |t| t.value)
    }

    /// Check if `(row, col)` is in bounds and empty
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE && self.grid[row][col].is_none()
    }

    /// Copy of the grid as raw values (0 = empty)
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, value) in line.iter_mut().enumerate() {
                *value = self.value_at(row, col);
            }
        }
        out
    }

    /// Live tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.grid
            .iter()
            .flatten()
            .filter_map(move |slot| slot.and_then(|s| self.slots[s].as_ref()))
    }

    pub fn tile_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.tile_count()
    }

    /// Empty cells in row-major order (stack-only, no allocation)
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        let mut out = ArrayVec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.grid[row][col].is_none() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Sum of every tile value
    pub fn value_sum(&self) -> u32 {
        self.tiles().map(|t| t.value).sum()
    }

    /// Largest tile value on the board (0 when empty)
    pub fn highest_tile(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Remove every tile. Tile ids keep counting up.
    pub fn clear(&mut self) {
        self.grid = [[None; GRID_SIZE]; GRID_SIZE];
        self.slots = [None; CELL_COUNT];
    }

    /// Put a new tile into an empty cell.
    ///
    /// Returns `None` if the cell is occupied or out of bounds.
    fn place(&mut self, row: usize, col: usize, value: u32) -> Option<Tile> {
        if !self.is_empty_cell(row, col) {
            return None;
        }
        let slot = self.slots.iter().position(|s| s.is_none())?;
        let tile = Tile {
            id: TileId(self.next_id),
            value,
            row,
            col,
            merged: false,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.slots[slot] = Some(tile);
        self.grid[row][col] = Some(slot);
        Some(tile)
    }

    /// Spawn a tile in a uniformly chosen empty cell.
    ///
    /// The value is 2 with probability 0.9 and 4 otherwise. Returns the new tile,
    /// or `None` (leaving the board untouched) when there is no empty cell.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        let empty = self.empty_cells();
        let (row, col) = choose_cell(&empty, rng)?;
        let value = spawn_value(rng);
        self.place(row, col, value)
    }

    /// Order in which one axis is scanned: the cells nearest the destination
    /// edge come first.
    fn axis_order(delta: i8) -> [usize; GRID_SIZE] {
        let mut order = [0; GRID_SIZE];
        for (i, idx) in order.iter_mut().enumerate() {
            *idx = if delta > 0 { GRID_SIZE - 1 - i } else { i };
        }
        order
    }

    /// Slide every tile as far as it goes in `direction`, merging equal pairs.
    ///
    /// Single pass: tiles closest to the destination edge settle first, so each
    /// tile only ever meets neighbors that are already in their final cell. A
    /// tile that absorbed another one this move refuses a second merge, which
    /// turns `[2, 2, 2, 2]` into `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    /// use tui_2048_types::Direction;
    ///
    /// let mut board = Board::from_values([
    ///     [4, 4, 8, 8],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 0],
    /// ])
    /// .unwrap();
    /// let outcome = board.slide(Direction::Left);
    /// assert!(outcome.changed);
    /// assert_eq!(outcome.score_delta, 24);
    /// assert_eq!(board.values()[0], [8, 16, 0, 0]);
    /// ```
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        for tile in self.slots.iter_mut().flatten() {
            tile.merged = false;
        }

        let (dr, dc) = direction.delta();
        let mut outcome = MoveOutcome::default();
        for row in Self::axis_order(dr) {
            for col in Self::axis_order(dc) {
                if self.grid[row][col].is_some() {
                    self.slide_tile((row, col), dr, dc, &mut outcome);
                }
            }
        }
        outcome
    }

    /// Slide the tile at `start` until it hits the edge, a blocker, or merges
    fn slide_tile(&mut self, start: Pos, dr: i8, dc: i8, outcome: &mut MoveOutcome) {
        let Some(slot) = self.grid[start.0][start.1] else {
            return;
        };

        let mut pos = start;
        while let Some(next) = Self::step(pos, dr, dc) {
            match self.grid[next.0][next.1] {
                None => {
                    self.grid[next.0][next.1] = Some(slot);
                    self.grid[pos.0][pos.1] = None;
                    pos = next;
                }
                Some(target) if self.can_merge(slot, target) => {
                    self.grid[pos.0][pos.1] = None;
                    self.slots[slot] = None;
                    if let Some(survivor) = self.slots[target].as_mut() {
                        survivor.value *= 2;
                        survivor.merged = true;
                        outcome.merges += 1;
                        outcome.score_delta += survivor.value;
                    }
                    outcome.changed = true;
                    return;
                }
                Some(_) => break,
            }
        }

        if pos != start {
            if let Some(tile) = self.slots[slot].as_mut() {
                tile.row = pos.0;
                tile.col = pos.1;
            }
            outcome.moved += 1;
            outcome.changed = true;
        }
    }

    /// A moving tile may merge into a target of equal value that has not
    /// already merged this move
    fn can_merge(&self, mover: usize, target: usize) -> bool {
        match (&self.slots[mover], &self.slots[target]) {
            (Some(m), Some(t)) => m.value == t.value && !t.merged,
            _ => false,
        }
    }

    /// Check whether sliding in `direction` would change anything.
    ///
    /// Does not mutate the board.
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut probe = self.clone();
        probe.slide(direction).changed
    }

    /// True iff the grid is full and no two 4-adjacent cells hold equal values.
    pub fn is_game_over(&self) -> bool {
        if self.empty_count() > 0 {
            return false;
        }
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.value_at(row, col);
                // Checking right and down neighbors covers every adjacent pair.
                if col + 1 < GRID_SIZE && self.value_at(row, col + 1) == value {
                    return false;
                }
                if row + 1 < GRID_SIZE && self.value_at(row + 1, col) == value {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row_board(row: [u32; GRID_SIZE]) -> Board {
        let mut values = [[0; GRID_SIZE]; GRID_SIZE];
        values[0] = row;
        Board::from_values(values).unwrap()
    }

    /// Arena slots and grid agree on every tile's position
    fn assert_consistent(board: &Board) {
        let mut seen = 0;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if let Some(slot) = board.grid[row][col] {
                    let tile = board.slots[slot].expect("grid points at empty slot");
                    assert_eq!((tile.row, tile.col), (row, col));
                    assert!(is_tile_value(tile.value));
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, board.tile_count());
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some((0, 0)));
        assert_eq!(Board::index(3, 3), Some((3, 3)));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 4), None);
        assert_eq!(Board::step((0, 0), 0, -1), None);
        assert_eq!(Board::step((0, 0), 1, 0), Some((1, 0)));
    }

    #[test]
    fn test_axis_order_starts_at_destination_edge() {
        assert_eq!(Board::axis_order(1), [3, 2, 1, 0]);
        assert_eq!(Board::axis_order(-1), [0, 1, 2, 3]);
        assert_eq!(Board::axis_order(0), [0, 1, 2, 3]);
    }

    #[test]
    fn test_slide_keeps_arena_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        for i in 0..200 {
            board.spawn_tile(&mut rng);
            board.slide(Direction::ALL[i % 4]);
            assert_consistent(&board);
            if board.is_game_over() {
                board.clear();
            }
        }
    }

    #[test]
    fn test_merge_survivor_keeps_its_id() {
        let mut board = row_board([2, 2, 0, 0]);
        let left_id = board.tile_at(0, 0).unwrap().id;
        board.slide(Direction::Left);
        let survivor = board.tile_at(0, 0).unwrap();
        assert_eq!(survivor.id, left_id);
        assert_eq!(survivor.value, 4);
        assert!(survivor.merged);
    }

    #[test]
    fn test_merge_flags_reset_each_move() {
        let mut board = row_board([2, 2, 4, 0]);
        board.slide(Direction::Left);
        assert_eq!(board.values()[0], [4, 4, 0, 0]);
        // The 4 that merged last move can merge again on the next one.
        let outcome = board.slide(Direction::Left);
        assert_eq!(board.values()[0], [8, 0, 0, 0]);
        assert_eq!(outcome.merges, 1);
    }

    #[test]
    fn test_moved_counter() {
        let mut board = row_board([0, 2, 0, 4]);
        let outcome = board.slide(Direction::Left);
        assert_eq!(outcome.moved, 2);
        assert_eq!(outcome.merges, 0);
        assert_eq!(board.values()[0], [2, 4, 0, 0]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new();
        let a = board.spawn_tile(&mut rng).unwrap().id;
        board.clear();
        let b = board.spawn_tile(&mut rng).unwrap().id;
        assert!(b > a);
    }
}
