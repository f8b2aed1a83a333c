use std::collections::BTreeMap;
use std::fmt;

use crate::error::BoardError;

pub const NUM_ROWS: usize = 4;
pub const NUM_COLS: usize = 4;
pub const BOARD_SIZE: usize = NUM_ROWS * NUM_COLS;

/// Cells that never hold a piece.
pub const INVALID_INDICES: [usize; 2] = [13, 14];

pub const INITIAL_LAYOUT: &str = "KKKKBBBBRRRR0iiP";
pub const INITIAL_EMPTY_INDEX: usize = 12;

/// The puzzle is solved once a Queen stands on this cell.
pub const GOAL_INDEX: usize = INITIAL_EMPTY_INDEX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Piece {
    Invalid,
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Piece {
    pub fn symbol(&self) -> char {
        match self {
            Piece::Invalid => 'i',
            Piece::Empty => '0',
            Piece::Pawn => 'P',
            Piece::Knight => 'K',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'i' => Some(Piece::Invalid),
            '0' => Some(Piece::Empty),
            'P' => Some(Piece::Pawn),
            'K' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Piece::Invalid => "Invalid",
            Piece::Empty => "Empty",
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn is_invalid_index(index: usize) -> bool {
    INVALID_INDICES.contains(&index)
}

/// A full assignment of the 16 cells.
///
/// Boards are plain values: moves produce new boards instead of editing
/// one in place, so a board can be used directly as a hash map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; BOARD_SIZE],
}

impl Board {
    pub fn initial() -> Self {
        let mut cells = [Piece::Empty; BOARD_SIZE];
        for (cell, symbol) in cells.iter_mut().zip(INITIAL_LAYOUT.chars()) {
            *cell = match Piece::from_symbol(symbol) {
                Some(piece) => piece,
                None => unreachable!("initial layout holds only known symbols"),
            };
        }
        Self { cells }
    }

    /// Parses a layout of 16 symbols, row by row. Whitespace is ignored so
    /// layouts can be written as `"KKKK BBBB RRRR 0iiP"`.
    pub fn parse(layout: &str) -> Result<Self, BoardError> {
        let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE {
            return Err(BoardError::WrongLength(symbols.len()));
        }

        let mut cells = [Piece::Empty; BOARD_SIZE];
        for (index, &symbol) in symbols.iter().enumerate() {
            let piece = Piece::from_symbol(symbol).ok_or(BoardError::UnknownSymbol { symbol, index })?;
            if (piece == Piece::Invalid) != is_invalid_index(index) {
                return Err(BoardError::MisplacedInvalid(index));
            }
            cells[index] = piece;
        }

        let empties = cells.iter().filter(|&&p| p == Piece::Empty).count();
        if empties != 1 {
            return Err(BoardError::EmptyCount(empties));
        }

        Ok(Self { cells })
    }

    pub fn get(&self, index: usize) -> Piece {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Piece; BOARD_SIZE] {
        &self.cells
    }

    pub fn empty_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&p| p == Piece::Empty)
            .unwrap_or_else(|| unreachable!("every board holds exactly one empty cell"))
    }

    /// Literal fixed-cell check: the Queen must sit on `GOAL_INDEX`.
    pub fn is_goal(&self) -> bool {
        self.cells[GOAL_INDEX] == Piece::Queen
    }

    /// Returns a copy with `piece` moved from `from` into the empty cell at
    /// `to`, leaving `from` empty.
    pub(crate) fn with_move(&self, from: usize, to: usize, piece: Piece) -> Self {
        let mut cells = self.cells;
        cells[to] = piece;
        cells[from] = Piece::Empty;
        Self { cells }
    }

    pub fn piece_counts(&self) -> BTreeMap<Piece, usize> {
        let mut counts = BTreeMap::new();
        for &piece in &self.cells {
            *counts.entry(piece).or_insert(0) += 1;
        }
        counts
    }

    pub fn layout(&self) -> String {
        self.cells.iter().map(Piece::symbol).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=======")?;
        for row in self.cells.chunks(NUM_COLS) {
            for &piece in row {
                if piece == Piece::Invalid {
                    write!(f, "  ")?;
                } else {
                    write!(f, "{} ", piece.symbol())?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "=======")
    }
}
