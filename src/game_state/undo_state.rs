use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::Color;
use crate::game_state::square::File;
use crate::moves::move_descriptions::QualifiedMove;

/// One history entry: the position after a ply (or the initial position) and
/// the move that produced it.
///
/// The board is stored as its hash, so undo restores placement by decoding it
/// rather than by reversing the move's side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub last_move: Option<QualifiedMove>,
    pub board_hash: String,
    pub to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant_file: Option<File>,
    pub halfmove_clock: u16,
}

impl UndoState {
    /// Repetition fingerprint of the stored position.
    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            board_hash: self.board_hash.clone(),
            to_move: self.to_move,
            castle_rights: self.castle_rights,
            en_passant_file: self.en_passant_file,
        }
    }

    /// Whether this entry holds the same chess position as `key`.
    pub fn is_same_position(&self, key: &PositionKey) -> bool {
        self.board_hash == key.board_hash
            && self.to_move == key.to_move
            && self.castle_rights == key.castle_rights
            && self.en_passant_file == key.en_passant_file
    }
}

/// Everything that makes two positions the same for repetition purposes:
/// placement, side to move, castle rights and the en-passant file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub board_hash: String,
    pub to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant_file: Option<File>,
}
