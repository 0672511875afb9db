//! Line-oriented move script front-end.
//!
//! Reads one `from,to[,promotion]` move per line, plays it on a `ChessGame`,
//! and reports what happened: castles, en passant, captures, checks and
//! the game result. Once the game is over every further line is answered
//! with `Game already ended`.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::game_state::ChessGame;
use crate::moves::move_descriptions::{CastleKind, GameStatus, QualifiedMove};
use crate::utils::algebraic::{numbered_move, parse_move_line};
use crate::utils::render_game_state::render_game_state;

/// Output switches for a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Print each accepted move as numbered algebraic notation first.
    pub notation: bool,
    /// Render the final position after the last line.
    pub show_board: bool,
    pub rules: RulesConfig,
}

/// Play every line of `input` and write the transcript to `out`.
///
/// Returns the game as it stands after the last line.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    options: ScriptOptions,
) -> io::Result<ChessGame> {
    let mut script = MoveScript::new(options);

    for line in input.lines() {
        let line = line?;
        script.handle_line(&line, out)?;
    }

    if options.show_board {
        writeln!(out, "{}", render_game_state(&script.game))?;
    }
    out.flush()?;

    Ok(script.game)
}

struct MoveScript {
    game: ChessGame,
    options: ScriptOptions,
    ended: bool,
}

impl MoveScript {
    fn new(options: ScriptOptions) -> Self {
        Self {
            game: ChessGame::with_config(options.rules),
            options,
            ended: false,
        }
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        if self.ended {
            return writeln!(out, "Game already ended");
        }

        let played = parse_move_line(trimmed).and_then(|mv| self.game.make_move(mv));
        let mv = match played {
            Ok(mv) => mv,
            Err(err) => {
                debug!(line = trimmed, error = %err, "rejected move line");
                return writeln!(out, "Invalid move");
            }
        };

        if self.options.notation {
            let first_mover = self.game.history()[0].to_move;
            writeln!(out, "{}", numbered_move(self.game.move_count(), first_mover, &mv))?;
        }
        report_move(&mv, out)?;

        self.ended = mv.status.is_terminal();
        Ok(())
    }
}

fn report_move(mv: &QualifiedMove, out: &mut impl Write) -> io::Result<()> {
    if mv.castle != CastleKind::None {
        writeln!(out, "Castle")?;
    }
    if mv.en_passant {
        writeln!(out, "En passant")?;
    }
    if let Some(captured) = mv.capture {
        writeln!(out, "Captured {captured}")?;
    }

    match mv.status {
        GameStatus::InProgress => Ok(()),
        GameStatus::Check => writeln!(out, "{} in check", mv.piece.color.opposite()),
        result => writeln!(out, "{result}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{run_script, ScriptOptions};
    use crate::game_state::chess_rules::RulesConfig;
    use crate::moves::move_descriptions::GameStatus;

    fn transcript(script: &str, options: ScriptOptions) -> String {
        let mut out = Vec::new();
        run_script(script.as_bytes(), &mut out, options).expect("in-memory io");
        String::from_utf8(out).expect("utf-8 transcript")
    }

    #[test]
    fn fools_mate_then_game_over() {
        let script = "f2,f3\ne7,e5\ng2,g4\nd8,h4\ne2,e4\n";
        assert_eq!(
            transcript(script, ScriptOptions::default()),
            "Black wins\nGame already ended\n"
        );
    }

    #[test]
    fn reports_castle_en_passant_and_captures() {
        let script = "\
e2,e4
d7,d5
e4,d5
g8,f6
g1,f3
c7,c5
d5,c6
b8,c6
f1,b5
e7,e6
e1,g1
";
        assert_eq!(
            transcript(script, ScriptOptions::default()),
            "Captured Pawn\nEn passant\nCaptured Pawn\nCaptured Pawn\nCastle\n"
        );
    }

    #[test]
    fn invalid_lines_do_not_consume_a_turn() {
        let script = "e2,e5\nnonsense\n\n   \ne2,e4\ne7,e8,Q\nf7,f6\nd1,h5\n";
        assert_eq!(
            transcript(script, ScriptOptions::default()),
            "Invalid move\nInvalid move\nInvalid move\nBlack in check\n"
        );
    }

    #[test]
    fn notation_and_board_output() {
        let options = ScriptOptions {
            notation: true,
            show_board: true,
            ..ScriptOptions::default()
        };
        let text = transcript("e2,e4\ne7,e5\n", options);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1. e4"));
        assert_eq!(lines.next(), Some("1... e5"));
        assert_eq!(lines.next(), Some("  a b c d e f g h"));
        assert!(text.trim_end().ends_with("1. e4 e5"));
    }

    #[test]
    fn custom_rules_reach_a_draw() {
        let options = ScriptOptions {
            rules: RulesConfig {
                fifty_move_plies: 50,
                repetition_count: 2,
            },
            ..ScriptOptions::default()
        };
        let script = "g1,f3\ng8,f6\nf3,g1\nf6,g8\ne2,e4\n";
        let mut out = Vec::new();
        let game = run_script(script.as_bytes(), &mut out, options).expect("in-memory io");
        assert_eq!(
            String::from_utf8(out).expect("utf-8 transcript"),
            "Draw\nGame already ended\n"
        );
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.move_count(), 4);
    }
}
