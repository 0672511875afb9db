//! The game state machine.
//!
//! `ChessGame` owns the board and every piece of derived state (side to move,
//! castle rights, en-passant file, fifty-move clock, history) and is the only
//! place they change. A turn runs one way: the candidate move is checked
//! against the legal move list, the board is mutated, derived state is
//! updated, the new position is classified, and a `QualifiedMove` is returned
//! and recorded in the history.
//!
//! Undo does not reverse moves. Each history entry stores the board hash and
//! the derived state of its position, and rolling back restores them
//! wholesale.

use tracing::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::{Board, BoardPiece};
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::{king_home, rook_home, RulesConfig};
use crate::game_state::chess_types::{Color, Piece, PieceType};
use crate::game_state::square::{File, Square};
use crate::game_state::undo_state::{PositionKey, UndoState};
use crate::move_generation::legal_move_apply::{
    apply_to_board, is_promotion, update_castle_rights,
};
use crate::move_generation::legal_move_checks::{
    is_king_in_check, leaves_king_in_check, line_of_sight,
};
use crate::move_generation::legal_move_shared::squares_between;
use crate::move_generation::move_generator::pseudo_legal_targets;
use crate::moves::move_descriptions::{GameStatus, Move, QualifiedMove, QualifiedMoveBuilder};

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    to_move: Color,
    castle_rights: CastleRights,
    en_passant_file: Option<File>,
    halfmove_clock: u16,
    history: Vec<UndoState>,
    config: RulesConfig,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_parts(Board::standard(), Color::White, CastleRights::all(), config)
    }

    /// A game starting from an arbitrary placement.
    ///
    /// Each side needs exactly one king, and the side not to move must not be
    /// in check. Castle rights whose king or rook is not on its starting
    /// square are dropped.
    pub fn from_board(
        board: Board,
        to_move: Color,
        castle_rights: CastleRights,
    ) -> ChessResult<Self> {
        Self::from_board_with_config(board, to_move, castle_rights, RulesConfig::default())
    }

    pub fn from_board_with_config(
        board: Board,
        to_move: Color,
        castle_rights: CastleRights,
        config: RulesConfig,
    ) -> ChessResult<Self> {
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .into_iter()
                .filter(|bp| bp.piece_type() == PieceType::King)
                .count();
            match kings {
                0 => return Err(ChessError::MissingKing(color)),
                1 => {}
                _ => return Err(ChessError::DuplicateKing(color)),
            }
        }

        let waiting = to_move.opposite();
        if is_king_in_check(&board, waiting) {
            return Err(ChessError::OpponentInCheck(waiting));
        }

        let rights = castle_rights.intersect(placement_castle_rights(&board));
        Ok(Self::from_parts(board, to_move, rights, config))
    }

    fn from_parts(
        board: Board,
        to_move: Color,
        castle_rights: CastleRights,
        config: RulesConfig,
    ) -> Self {
        let mut game = Self {
            board,
            to_move,
            castle_rights,
            en_passant_file: None,
            halfmove_clock: 0,
            history: Vec::new(),
            config,
        };
        game.history.push(game.snapshot(None));
        game
    }

    // --- Read-only views ---

    /// A copy of the current board.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Persistent castle rights (not reduced by the current check state).
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn en_passant_file(&self) -> Option<File> {
        self.en_passant_file
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    /// Plies played so far.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    pub fn last_move(&self) -> Option<&QualifiedMove> {
        self.history.last().and_then(|state| state.last_move.as_ref())
    }

    /// Board as it stood after `ply` plies (`0` is the initial position).
    pub fn peek_board(&self, ply: usize) -> Option<Board> {
        self.history
            .get(ply)
            .map(|state| decode_board(&state.board_hash))
    }

    /// The move that produced the position after `ply` plies.
    pub fn peek_move(&self, ply: usize) -> Option<&QualifiedMove> {
        self.history.get(ply)?.last_move.as_ref()
    }

    /// Repetition fingerprint of the current position.
    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            board_hash: self.board.to_hash(),
            to_move: self.to_move,
            castle_rights: self.castle_rights,
            en_passant_file: self.en_passant_file,
        }
    }

    /// Status of the current position for the side to move.
    pub fn status(&self) -> GameStatus {
        let prior = &self.history[..self.history.len() - 1];
        self.classify(prior)
    }

    // --- Legality ---

    /// Whether the side to move's king is attacked.
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.board, self.to_move)
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.legal_moves(mv.from).contains(&mv.to)
    }

    /// Legal destinations of the piece on `square`; empty when the square is
    /// empty or holds a piece of the side not to move.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        match self.board.piece(square) {
            Some(piece) if piece.color == self.to_move => {
                self.legal_moves_for(BoardPiece { piece, square })
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move of the side to move, with each promotion expanded
    /// into the four promotion pieces.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        for bp in self.board.pieces_of(self.to_move) {
            for to in self.legal_moves_for(bp) {
                if is_promotion(bp.piece, to) {
                    out.extend(
                        PieceType::PROMOTIONS
                            .into_iter()
                            .map(|promotion| Move::with_promotion(bp.square, to, promotion)),
                    );
                } else {
                    out.push(Move::new(bp.square, to));
                }
            }
        }
        out
    }

    /// Legal pawn move onto the last rank; callers prompt for the piece first.
    pub fn is_promotion_move(&self, mv: &Move) -> bool {
        self.is_legal_move(mv)
            && self
                .board
                .piece(mv.from)
                .is_some_and(|piece| is_promotion(piece, mv.to))
    }

    fn legal_moves_for(&self, bp: BoardPiece) -> Vec<Square> {
        let color = bp.color();
        let castle_rights = if bp.piece_type() == PieceType::King {
            self.transient_castle_rights()
        } else {
            CastleRights::none()
        };

        pseudo_legal_targets(
            bp.piece,
            bp.square,
            &self.board,
            self.en_passant_file,
            castle_rights,
        )
        .into_iter()
        .filter(|to| !matches!(self.board.piece(*to), Some(other) if other.color == color))
        .filter(|to| !bp.piece_type().is_slider() || line_of_sight(&self.board, bp.square, *to))
        .filter(|to| !leaves_king_in_check(&self.board, color, bp.square, *to))
        .collect()
    }

    /// Persistent rights narrowed to what the side to move can use right now.
    fn transient_castle_rights(&self) -> CastleRights {
        let color = self.to_move;
        let king = Piece::new(PieceType::King, color);
        if self.board.piece(king_home(color)) != Some(king) || self.is_in_check() {
            return CastleRights::none();
        }

        let mut rights = self.castle_rights.disable_both(color.opposite());
        if !(rights.kingside(color) && self.castle_path_is_safe(color, true)) {
            rights = rights.disable_kingside(color);
        }
        if !(rights.queenside(color) && self.castle_path_is_safe(color, false)) {
            rights = rights.disable_queenside(color);
        }
        rights
    }

    /// Rook in its corner, nothing between it and the king, and no attacked
    /// square on the king's way.
    fn castle_path_is_safe(&self, color: Color, kingside: bool) -> bool {
        let home = king_home(color);
        let rook_square = rook_home(color, kingside);
        if self.board.piece(rook_square) != Some(Piece::new(PieceType::Rook, color)) {
            return false;
        }

        let path_clear = squares_between(home, rook_square)
            .is_some_and(|between| between.iter().all(|square| self.board.is_empty(*square)));
        if !path_clear {
            return false;
        }

        let transit: &[i8] = if kingside { &[1, 2] } else { &[-1, -2] };
        transit.iter().all(|&d_file| {
            let step = home.unchecked_add(d_file, 0);
            !leaves_king_in_check(&self.board, color, home, step)
        })
    }

    // --- Moves ---

    /// Commit `mv` and describe what it did.
    ///
    /// Fails without touching the game when the move is illegal, when a pawn
    /// reaches the last rank without a promotion piece, or when the promotion
    /// piece is a pawn or king.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<QualifiedMove> {
        let illegal = ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        };
        if !self.is_legal_move(&mv) {
            return Err(illegal);
        }
        let Some(piece) = self.board.piece(mv.from) else {
            return Err(illegal);
        };

        let promotion = if is_promotion(piece, mv.to) {
            match mv.promotion {
                None => return Err(ChessError::MissingPromotion { square: mv.to }),
                Some(promotion) if !promotion.is_promotion_target() => {
                    return Err(ChessError::InvalidPromotion { piece: promotion })
                }
                Some(promotion) => Some(promotion),
            }
        } else {
            None
        };

        let mut builder = QualifiedMoveBuilder::new(piece, mv.from, mv.to);
        self.disambiguate(&mut builder, piece, mv.from, mv.to);

        let applied = apply_to_board(&mut self.board, piece, mv.from, mv.to, promotion);
        builder
            .capture(applied.capture)
            .en_passant(applied.en_passant)
            .castle(applied.castle)
            .promotion(applied.promotion);

        let is_pawn = piece.piece_type == PieceType::Pawn;
        self.en_passant_file = if is_pawn && mv.to.rank().sub(mv.from.rank()).abs() == 2 {
            Some(mv.to.file())
        } else {
            None
        };

        self.castle_rights = update_castle_rights(self.castle_rights, piece, mv.from, mv.to);

        if is_pawn || applied.capture.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.to_move = self.to_move.opposite();

        let status = self.classify(&self.history);
        let qualified = builder.status(status).build();

        debug!(
            ply = self.history.len(),
            notation = %qualified,
            status = ?status,
            "move committed"
        );

        let state = self.snapshot(Some(qualified.clone()));
        self.history.push(state);
        Ok(qualified)
    }

    /// Flag file/rank disambiguation when another piece of the same kind
    /// could also legally reach `to`.
    fn disambiguate(
        &self,
        builder: &mut QualifiedMoveBuilder,
        piece: Piece,
        from: Square,
        to: Square,
    ) {
        let rivals: Vec<Square> = self
            .board
            .pieces_of(piece.color)
            .into_iter()
            .filter(|bp| bp.piece == piece && bp.square != from)
            .filter(|bp| self.is_legal_move(&Move::new(bp.square, to)))
            .map(|bp| bp.square)
            .collect();

        if rivals.is_empty() {
            return;
        }

        if rivals.iter().all(|square| square.file() != from.file()) {
            builder.disambiguate_file();
        } else if rivals.iter().all(|square| square.rank() != from.rank()) {
            builder.disambiguate_rank();
        } else {
            builder.disambiguate_file().disambiguate_rank();
        }
    }

    // --- Classification ---

    /// Classify the current position. `prior` holds the history entries
    /// before it.
    fn classify(&self, prior: &[UndoState]) -> GameStatus {
        let in_check = self.is_in_check();
        let has_legal_move = self
            .board
            .pieces_of(self.to_move)
            .into_iter()
            .any(|bp| !self.legal_moves_for(bp).is_empty());

        if !has_legal_move {
            trace!(in_check, "no legal moves");
            return if in_check {
                GameStatus::win_for(self.to_move.opposite())
            } else {
                GameStatus::Stalemate
            };
        }

        if self.halfmove_clock >= self.config.fifty_move_plies {
            trace!(clock = self.halfmove_clock, "fifty-move limit reached");
            return GameStatus::Draw;
        }

        let repetitions = self.repetitions(prior);
        if repetitions >= self.config.repetition_count {
            trace!(repetitions, "repetition limit reached");
            return GameStatus::Draw;
        }

        if self.has_insufficient_material(Color::White)
            && self.has_insufficient_material(Color::Black)
        {
            return GameStatus::InsufficientMaterial;
        }

        if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    /// Occurrences of the current position, itself included, since the last
    /// capture or pawn move.
    fn repetitions(&self, prior: &[UndoState]) -> usize {
        let key = self.position_key();
        let window_start = prior.len().saturating_sub(usize::from(self.halfmove_clock));
        1 + prior[window_start..]
            .iter()
            .filter(|state| state.is_same_position(&key))
            .count()
    }

    /// A bare king, or a king with a single bishop or knight.
    fn has_insufficient_material(&self, color: Color) -> bool {
        let pieces = self.board.pieces_of(color);
        match pieces.len() {
            1 => true,
            2 => pieces
                .iter()
                .any(|bp| matches!(bp.piece_type(), PieceType::Bishop | PieceType::Knight)),
            _ => false,
        }
    }

    // --- History ---

    /// Take back the last ply. Returns the move that led to the restored
    /// position, `None` when back at the start.
    ///
    /// # Panics
    /// If no ply has been played.
    pub fn undo(&mut self) -> Option<QualifiedMove> {
        self.undo_n(1)
    }

    /// Take back `count` plies.
    ///
    /// # Panics
    /// If `count` is zero or more plies than have been played.
    pub fn undo_n(&mut self, count: usize) -> Option<QualifiedMove> {
        assert!(
            count > 0 && count <= self.move_count(),
            "cannot undo {count} plies after {} played",
            self.move_count()
        );
        self.rollback(self.move_count() - count)
    }

    /// Rewind to the position before `color` played move `move_number`
    /// (1-based; one move is a white ply and a black ply).
    ///
    /// # Panics
    /// If that position is not in the history.
    pub fn undo_to(&mut self, move_number: usize, color: Color) -> Option<QualifiedMove> {
        assert!(move_number > 0, "move numbers start at 1");
        let index = (move_number - 1) * 2 + usize::from(color == Color::Black);
        assert!(
            index < self.history.len(),
            "history index {index} out of range ({} entries)",
            self.history.len()
        );
        self.rollback(index)
    }

    fn rollback(&mut self, index: usize) -> Option<QualifiedMove> {
        let state = self.history[index].clone();
        if let Err(err) = self.board.restore_hash(&state.board_hash) {
            panic!("corrupted history entry {index}: {err}");
        }
        self.to_move = state.to_move;
        self.castle_rights = state.castle_rights;
        self.en_passant_file = state.en_passant_file;
        self.halfmove_clock = state.halfmove_clock;
        self.history.truncate(index + 1);

        debug!(ply = index, "rolled back");
        state.last_move
    }

    fn snapshot(&self, last_move: Option<QualifiedMove>) -> UndoState {
        UndoState {
            last_move,
            board_hash: self.board.to_hash(),
            to_move: self.to_move,
            castle_rights: self.castle_rights,
            en_passant_file: self.en_passant_file,
            halfmove_clock: self.halfmove_clock,
        }
    }
}

/// Rights the placement alone allows: king and rook on their home squares.
fn placement_castle_rights(board: &Board) -> CastleRights {
    let at_home = |color: Color, kingside: bool| {
        board.piece(king_home(color)) == Some(Piece::new(PieceType::King, color))
            && board.piece(rook_home(color, kingside)) == Some(Piece::new(PieceType::Rook, color))
    };
    CastleRights::new(
        at_home(Color::White, true),
        at_home(Color::White, false),
        at_home(Color::Black, true),
        at_home(Color::Black, false),
    )
}

/// History hashes are produced by `Board::to_hash`; failing to decode one
/// means the history is corrupted.
fn decode_board(hash: &str) -> Board {
    match Board::from_hash(hash) {
        Ok(board) => board,
        Err(err) => panic!("corrupted history entry: {err}"),
    }
}
