//! Random legal walks, used to reach arbitrary boards from a start.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::moves::generate_moves;

/// Plays up to `steps` random legal moves from `start` and returns every
/// board visited, `start` included. The walk stops early if a board has
/// no legal move.
pub fn random_walk<R: Rng + ?Sized>(start: &Board, steps: usize, rng: &mut R) -> Vec<Board> {
    let mut boards = Vec::with_capacity(steps + 1);
    boards.push(*start);

    let mut current = *start;
    let mut empty = start.empty_index();
    for _ in 0..steps {
        let successors = generate_moves(&current, empty);
        let Some(next) = successors.choose(rng) else {
            break;
        };
        current = next.board;
        empty = next.empty_index;
        boards.push(current);
    }
    boards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Step;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn walk_is_made_of_legal_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let boards = random_walk(&Board::initial(), 50, &mut rng);
        assert!(boards.len() >= 2 && boards.len() <= 51);
        assert_eq!(boards[0], Board::initial());

        for pair in boards.windows(2) {
            let step = Step::between(&pair[0], &pair[1]);
            let replayed = generate_moves(&pair[0], pair[0].empty_index());
            assert!(replayed.iter().any(|s| s.board == pair[1] && s.step == step));
        }
    }

    #[test]
    fn walk_stops_on_a_frozen_board() {
        let frozen = Board::parse("0BKKBRBKKBKKKiiR").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_walk(&frozen, 10, &mut rng), vec![frozen]);
    }
}
