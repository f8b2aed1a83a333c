//! Pawn-to-Queen puzzle solver
//!
//! A 4x4 board holds four Knights, four Bishops, four Rooks, a Pawn, one
//! empty cell and two dead cells. A move slides a single piece into the
//! empty cell, following that piece's chess movement for exactly one step:
//! - Rooks move straight, Bishops diagonally, Queens either way
//! - Knights jump
//! - The Pawn only moves up, and becomes a Queen on reaching the top row
//!
//! The puzzle is solved once a Queen stands on the cell that started empty.
//! [`search::solve_default`] finds a shortest move sequence by breadth-first
//! search.
//!
//! ```
//! use pawn_to_queen::{Board, solve};
//!
//! let start = Board::parse("KKKK BBBB QRRR 0iiP").unwrap();
//! let solution = solve(start).unwrap();
//! assert_eq!(solution.move_count, 1);
//! ```

pub mod board;
pub mod error;
pub mod moves;
pub mod search;
pub mod walk;

pub use board::{Board, Piece, GOAL_INDEX, INITIAL_EMPTY_INDEX};
pub use error::{BoardError, SolveError};
pub use moves::{generate_moves, Step, Successor};
pub use search::{solve, solve_default, SearchState, Solution, Solver, VisitedRecord};
