//! Breadth-first search over boards.
//!
//! Every move costs the same, so the first time BFS dequeues a goal board
//! its recorded move count is the minimum. Each board is recorded once, on
//! first discovery, together with the board it was reached from; the
//! solution path is rebuilt by walking those links back to the start.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, info};

use crate::board::{Board, INITIAL_EMPTY_INDEX};
use crate::error::{Result, SolveError};
use crate::moves::{generate_moves, Step};

const VISITED_CAPACITY: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Exploring,
    Found(Board),
    Exhausted,
}

/// How and when a board was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedRecord {
    pub empty_index: usize,
    pub move_count: usize,
    /// `None` only for the starting board.
    pub predecessor: Option<Board>,
}

pub struct Solver {
    initial: Board,
    visited: HashMap<Board, VisitedRecord>,
    frontier: VecDeque<Board>,
    expanded: usize,
    state: SearchState,
}

impl Solver {
    pub fn new(initial: Board, empty_index: usize) -> Self {
        let mut visited = HashMap::with_capacity(VISITED_CAPACITY);
        visited.insert(
            initial,
            VisitedRecord {
                empty_index,
                move_count: 0,
                predecessor: None,
            },
        );

        let mut frontier = VecDeque::new();
        frontier.push_back(initial);

        Self {
            initial,
            visited,
            frontier,
            expanded: 0,
            state: SearchState::Exploring,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of distinct boards recorded so far.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Number of boards taken off the frontier so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn record(&self, board: &Board) -> Option<&VisitedRecord> {
        self.visited.get(board)
    }

    pub fn records(&self) -> impl Iterator<Item = (&Board, &VisitedRecord)> {
        self.visited.iter()
    }

    /// Dequeues one board and either reports it as the goal or records its
    /// undiscovered successors. Once the search has stopped this is a no-op.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Exploring {
            return self.state;
        }

        let Some(current) = self.frontier.pop_front() else {
            info!(event = "search_exhausted", discovered = self.visited.len());
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.expanded += 1;

        let record = self.lookup(&current);
        if current.is_goal() {
            info!(
                event = "goal_found",
                moves = record.move_count,
                discovered = self.visited.len(),
                expanded = self.expanded
            );
            self.state = SearchState::Found(current);
            return self.state;
        }

        let next_count = record.move_count + 1;
        for successor in generate_moves(&current, record.empty_index) {
            if self.visited.contains_key(&successor.board) {
                continue;
            }
            self.visited.insert(
                successor.board,
                VisitedRecord {
                    empty_index: successor.empty_index,
                    move_count: next_count,
                    predecessor: Some(current),
                },
            );
            self.frontier.push_back(successor.board);
        }

        if let Some(head) = self.frontier.front() {
            let head_count = self.lookup(head).move_count;
            if head_count > record.move_count {
                debug!(
                    layer = head_count,
                    frontier = self.frontier.len(),
                    discovered = self.visited.len(),
                    "entering next layer"
                );
            }
        }

        self.state
    }

    /// Runs the search until it finds a goal or exhausts the frontier.
    pub fn run(&mut self) -> Result<Solution> {
        loop {
            match self.step() {
                SearchState::Exploring => continue,
                SearchState::Found(goal) => return Ok(self.reconstruct(goal)),
                SearchState::Exhausted => {
                    return Err(SolveError::Exhausted {
                        explored: self.visited.len(),
                    })
                }
            }
        }
    }

    /// Walks predecessor links from `goal` back to the starting board.
    pub fn reconstruct(&self, goal: Board) -> Solution {
        let move_count = self.lookup(&goal).move_count;
        let mut path = Vec::with_capacity(move_count + 1);

        let mut current = goal;
        loop {
            path.push(current);
            match self.lookup(&current).predecessor {
                Some(previous) => current = previous,
                None => break,
            }
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&self.initial));
        debug_assert_eq!(path.len(), move_count + 1);

        Solution {
            move_count,
            path,
            explored: self.visited.len(),
        }
    }

    fn lookup(&self, board: &Board) -> VisitedRecord {
        match self.visited.get(board) {
            Some(record) => *record,
            None => panic!("board {} has no visited record", board.layout()),
        }
    }
}

/// A shortest sequence of boards from the start to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub move_count: usize,
    /// Boards from the start (index 0) to the goal (index `move_count`).
    pub path: Vec<Board>,
    /// Distinct boards recorded when the search stopped.
    pub explored: usize,
}

impl Solution {
    pub fn initial(&self) -> &Board {
        &self.path[0]
    }

    pub fn goal(&self) -> &Board {
        &self.path[self.path.len() - 1]
    }

    pub fn steps(&self) -> Vec<Step> {
        self.path
            .windows(2)
            .map(|pair| Step::between(&pair[0], &pair[1]))
            .collect()
    }
}

pub fn solve(initial: Board) -> Result<Solution> {
    let empty_index = initial.empty_index();
    Solver::new(initial, empty_index).run()
}

/// Solves the fixed puzzle starting from `Board::initial()`.
pub fn solve_default() -> Result<Solution> {
    Solver::new(Board::initial(), INITIAL_EMPTY_INDEX).run()
}
