use std::fmt;

use crate::board::{is_invalid_index, Board, Piece, BOARD_SIZE, NUM_COLS};

/// A displacement from the empty cell to the piece that would slide into it.
///
/// `dx` is the column offset, `dy` the row offset (positive is down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

const UP: isize = -1;
const DOWN: isize = 1;
const LEFT: isize = -1;
const RIGHT: isize = 1;

impl Direction {
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// The only straight direction a Pawn may use: it sits directly below
    /// the empty cell and moves up into it.
    pub fn is_pawn_move(&self) -> bool {
        self.dx == 0 && self.dy == DOWN
    }
}

pub static STRAIGHT_MOVES: [Direction; 4] = [
    Direction::new(LEFT, 0),
    Direction::new(RIGHT, 0),
    Direction::new(0, UP),
    Direction::new(0, DOWN),
];

pub static DIAGONAL_MOVES: [Direction; 4] = [
    Direction::new(LEFT, UP),
    Direction::new(RIGHT, UP),
    Direction::new(LEFT, DOWN),
    Direction::new(RIGHT, DOWN),
];

pub static KNIGHT_MOVES: [Direction; 8] = [
    Direction::new(LEFT, UP * 2),
    Direction::new(RIGHT, UP * 2),
    Direction::new(RIGHT * 2, UP),
    Direction::new(RIGHT * 2, DOWN),
    Direction::new(LEFT, DOWN * 2),
    Direction::new(RIGHT, DOWN * 2),
    Direction::new(LEFT * 2, UP),
    Direction::new(LEFT * 2, DOWN),
];

/// Resolves `dir` applied to the empty cell, or `None` when it would leave
/// the board, wrap into a neighbouring row, or land on an invalid cell.
pub fn target_index(empty: usize, dir: Direction) -> Option<usize> {
    let empty = empty as isize;
    let cols = NUM_COLS as isize;

    let shifted = empty + dir.dx;
    if shifted < 0 || shifted / cols != empty / cols {
        return None;
    }

    let index = shifted + dir.dy * cols;
    if index < 0 || index >= BOARD_SIZE as isize {
        return None;
    }
    let index = index as usize;
    if is_invalid_index(index) {
        return None;
    }
    Some(index)
}

/// One piece sliding into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub from: usize,
    pub to: usize,
    pub promoted: bool,
}

impl Step {
    /// Recovers the step that turns `before` into `after`. The two boards
    /// must be one legal move apart.
    pub fn between(before: &Board, after: &Board) -> Self {
        let from = after.empty_index();
        let to = before.empty_index();
        let piece = before.get(from);
        Self {
            piece,
            from,
            to,
            promoted: piece != after.get(to),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)?;
        if self.promoted {
            write!(f, " (promoted)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub board: Board,
    pub empty_index: usize,
    pub step: Step,
}

/// Every board reachable from `board` by a single legal move, in the order
/// straight, diagonal, knight. `board` itself is left untouched.
pub fn generate_moves(board: &Board, empty: usize) -> Vec<Successor> {
    let mut successors = Vec::new();

    for &dir in &STRAIGHT_MOVES {
        if let Some(from) = target_index(empty, dir) {
            match board.get(from) {
                Piece::Queen | Piece::Rook => {
                    successors.push(slide(board, from, empty, false));
                }
                Piece::Pawn if dir.is_pawn_move() => {
                    let promotes = empty < NUM_COLS;
                    successors.push(slide(board, from, empty, promotes));
                }
                _ => {}
            }
        }
    }

    for &dir in &DIAGONAL_MOVES {
        if let Some(from) = target_index(empty, dir) {
            if matches!(board.get(from), Piece::Queen | Piece::Bishop) {
                successors.push(slide(board, from, empty, false));
            }
        }
    }

    for &dir in &KNIGHT_MOVES {
        if let Some(from) = target_index(empty, dir) {
            if board.get(from) == Piece::Knight {
                successors.push(slide(board, from, empty, false));
            }
        }
    }

    successors
}

fn slide(board: &Board, from: usize, to: usize, promotes: bool) -> Successor {
    let piece = board.get(from);
    let landed = if promotes { Piece::Queen } else { piece };
    Successor {
        board: board.with_move(from, to, landed),
        empty_index: from,
        step: Step {
            piece,
            from,
            to,
            promoted: promotes,
        },
    }
}
