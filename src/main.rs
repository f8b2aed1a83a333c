use std::process::ExitCode;
use std::time::Instant;

use crossterm::style::{StyledContent, Stylize};
use pawn_to_queen::board::NUM_COLS;
use pawn_to_queen::{solve_default, Board, Piece, Solution};
use tracing_subscriber::EnvFilter;

fn styled(piece: Piece) -> StyledContent<String> {
    let symbol = piece.symbol().to_string();
    match piece {
        Piece::Queen => symbol.yellow().bold(),
        Piece::Pawn => symbol.green(),
        Piece::Empty => symbol.dark_grey(),
        _ => symbol.stylize(),
    }
}

fn print_board(board: &Board) {
    println!("=======");
    for row in board.cells().chunks(NUM_COLS) {
        for &piece in row {
            if piece == Piece::Invalid {
                print!("  ");
            } else {
                print!("{} ", styled(piece));
            }
        }
        println!();
    }
    println!("=======");
}

fn print_solution(solution: &Solution) {
    let steps = solution.steps();
    for (index, step) in steps.iter().enumerate().rev() {
        println!("\nMOVE {}: {}", index + 1, step);
        print_board(&solution.path[index + 1]);
    }

    println!("\nINITIAL BOARD:");
    print_board(solution.initial());
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let start = Instant::now();
    let result = solve_default();
    let elapsed = start.elapsed();

    let code = match result {
        Ok(solution) => {
            print_solution(&solution);
            println!(
                "\nFound optimal solution with: {} moves ({} boards explored)",
                solution.move_count, solution.explored
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("No solution found: {}", err);
            ExitCode::FAILURE
        }
    };

    println!("\nTime taken to run the program: {:.6} seconds", elapsed.as_secs_f64());
    code
}
