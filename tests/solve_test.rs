use pawn_to_queen::board::INVALID_INDICES;
use pawn_to_queen::walk::random_walk;
use pawn_to_queen::{
    generate_moves, solve, solve_default, Board, Piece, SearchState, Solver, GOAL_INDEX,
    INITIAL_EMPTY_INDEX,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const KNOWN_MOVE_COUNT: usize = 22;

#[test]
fn fixed_puzzle_needs_known_move_count() {
    let solution = solve_default().unwrap();
    assert_eq!(solution.move_count, KNOWN_MOVE_COUNT);
    assert_eq!(solution.path.len(), KNOWN_MOVE_COUNT + 1);
    assert_eq!(*solution.initial(), Board::initial());
    assert_eq!(solution.goal().get(INITIAL_EMPTY_INDEX), Piece::Queen);
    assert!(solution.goal().is_goal());
}

#[test]
fn only_the_last_board_is_a_goal() {
    let solution = solve_default().unwrap();
    let (last, rest) = solution.path.split_last().unwrap();
    assert!(last.is_goal());
    assert!(rest.iter().all(|board| !board.is_goal()));
}

#[test]
fn replaying_steps_reaches_the_goal() {
    let solution = solve_default().unwrap();
    let steps = solution.steps();
    assert_eq!(steps.len(), solution.move_count);
    assert_eq!(steps.iter().filter(|s| s.promoted).count(), 1);

    let mut board = Board::initial();
    let mut empty = board.empty_index();
    for step in &steps {
        assert_eq!(step.to, empty);
        let next = generate_moves(&board, empty)
            .into_iter()
            .find(|s| s.step == *step)
            .unwrap();
        board = next.board;
        empty = next.empty_index;
    }
    assert_eq!(board, *solution.goal());
}

#[test]
fn repeated_searches_agree() {
    let first = solve(Board::initial()).unwrap();
    let second = solve_default().unwrap();
    assert_eq!(first.move_count, second.move_count);
    assert_eq!(first.path, second.path);
    assert_eq!(first.explored, second.explored);
}

#[test]
fn path_records_follow_layer_order() {
    let mut solver = Solver::new(Board::initial(), INITIAL_EMPTY_INDEX);
    let solution = solver.run().unwrap();
    assert!(matches!(solver.state(), SearchState::Found(_)));

    for (layer, board) in solution.path.iter().enumerate() {
        let record = solver.record(board).unwrap();
        assert_eq!(record.move_count, layer);
        assert_eq!(record.empty_index, board.empty_index());
        let expected = if layer == 0 { None } else { Some(solution.path[layer - 1]) };
        assert_eq!(record.predecessor, expected);
    }
}

#[test]
fn successors_are_never_more_than_one_layer_deeper() {
    let mut solver = Solver::new(Board::initial(), INITIAL_EMPTY_INDEX);
    solver.run().unwrap();

    for (board, record) in solver.records() {
        if record.move_count > 8 {
            continue;
        }
        for successor in generate_moves(board, record.empty_index) {
            let next = solver.record(&successor.board).unwrap();
            assert!(next.move_count <= record.move_count + 1);
        }
        if let Some(previous) = record.predecessor {
            let parent = solver.record(&previous).unwrap();
            assert_eq!(parent.move_count + 1, record.move_count);
        }
    }
}

#[test]
fn moves_keep_pieces_except_promotion() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        for board in random_walk(&Board::initial(), 40, &mut rng) {
            for successor in generate_moves(&board, board.empty_index()) {
                let before = board.piece_counts();
                let after = successor.board.piece_counts();
                assert_eq!(after[&Piece::Empty], 1);
                assert_eq!(after[&Piece::Invalid], 2);
                for index in INVALID_INDICES {
                    assert_eq!(successor.board.get(index), Piece::Invalid);
                }

                if successor.step.promoted {
                    assert_eq!(successor.step.piece, Piece::Pawn);
                    assert_eq!(before.get(&Piece::Pawn), Some(&1));
                    assert_eq!(after.get(&Piece::Pawn), None);
                    let queens = |counts: &std::collections::BTreeMap<Piece, usize>| {
                        counts.get(&Piece::Queen).copied().unwrap_or(0)
                    };
                    assert_eq!(queens(&after), queens(&before) + 1);
                } else {
                    assert_eq!(before, after);
                }
            }
        }
    }
}

#[test]
fn goal_square_is_fixed() {
    assert_eq!(GOAL_INDEX, INITIAL_EMPTY_INDEX);
    let solution = solve_default().unwrap();
    assert_eq!(solution.goal().get(GOAL_INDEX), Piece::Queen);
    assert_ne!(solution.goal().empty_index(), GOAL_INDEX);
}
