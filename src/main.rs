use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_rules::driver::move_script::{run_script, ScriptOptions};
use chess_rules::game_state::chess_rules::{
    RulesConfig, DEFAULT_FIFTY_MOVE_PLIES, DEFAULT_REPETITION_COUNT,
};

/// Play a script of `from,to[,promotion]` moves and report each outcome.
#[derive(Debug, Parser)]
#[command(name = "chess-rules", version, about)]
struct Cli {
    /// Move script to read; standard input when omitted.
    input: Option<PathBuf>,

    /// Also print every accepted move in algebraic notation.
    #[arg(long)]
    notation: bool,

    /// Render the final position when the script ends.
    #[arg(long)]
    show_board: bool,

    /// Plies without a capture or pawn move that draw the game.
    #[arg(long, default_value_t = DEFAULT_FIFTY_MOVE_PLIES)]
    fifty_move_plies: u16,

    /// Occurrences of one position that draw the game.
    #[arg(long, default_value_t = DEFAULT_REPETITION_COUNT)]
    repetition_count: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = ScriptOptions {
        notation: cli.notation,
        show_board: cli.show_board,
        rules: RulesConfig {
            fifty_move_plies: cli.fifty_move_plies,
            repetition_count: cli.repetition_count,
        },
    };

    match run(cli.input, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chess-rules: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: Option<PathBuf>, options: ScriptOptions) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match input {
        Some(path) => {
            let file = File::open(&path)?;
            run_script(BufReader::new(file), &mut stdout, options)?;
        }
        None => {
            run_script(io::stdin().lock(), &mut stdout, options)?;
        }
    }
    Ok(())
}
