use std::ops::{Deref, DerefMut};

use super::history::HistoryEntry;
use super::types::{CastlingRights, Color, Move, Piece};
use super::Board;

impl Board {
    /// Apply a move without checking legality.
    ///
    /// Repetition counts are left alone; use [`Board::play`] for moves that
    /// become part of the game record.
    pub fn make_move(&mut self, mv: Move) {
        self.history.push(HistoryEntry {
            mv,
            kings: self.kings,
            castling: self.castling,
            ep_square: self.ep_square,
            halfmove_clock: self.halfmove_clock,
            move_number: self.move_number,
            turn: self.turn,
        });

        let us = mv.color;
        let them = us.opponent();

        if mv.is_en_passant() {
            self.take_piece(mv.en_passant_victim());
        }
        self.take_piece(mv.from);
        self.squares[mv.to.index()] = Some((us, mv.promotion.unwrap_or(mv.piece)));

        match mv.piece {
            Piece::King => {
                self.kings[us.index()] = Some(mv.to);
                if let Some((rook_from, rook_to)) = mv.castling_rook() {
                    if let Some(rook) = self.take_piece(rook_from) {
                        self.squares[rook_to.index()] = Some(rook);
                    }
                }
                self.castling.remove(CastlingRights::for_color(us));
            }
            Piece::Rook => self.castling.clear_rook_corner(us, mv.from),
            _ => {}
        }
        if mv.captured.is_some() {
            self.castling.clear_rook_corner(them, mv.to);
        }

        self.ep_square = if mv.is_big_pawn() {
            mv.from.offset(us.pawn_push())
        } else {
            None
        };

        if mv.piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.move_number += 1;
        }
        self.turn = them;
    }

    /// Revert the most recent move made with [`Board::make_move`].
    pub fn unmake_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        let mv = entry.mv;

        self.kings = entry.kings;
        self.castling = entry.castling;
        self.ep_square = entry.ep_square;
        self.halfmove_clock = entry.halfmove_clock;
        self.move_number = entry.move_number;
        self.turn = entry.turn;

        let us = mv.color;
        self.take_piece(mv.to);
        self.squares[mv.from.index()] = Some((us, mv.piece));

        if let Some(captured) = mv.captured {
            let at = if mv.is_en_passant() {
                mv.en_passant_victim()
            } else {
                mv.to
            };
            self.squares[at.index()] = Some((us.opponent(), captured));
        }

        if let Some((rook_from, rook_to)) = mv.castling_rook() {
            if let Some(rook) = self.take_piece(rook_to) {
                self.squares[rook_from.index()] = Some(rook);
            }
        }

        Some(mv)
    }

    /// Make a move as part of the game record, counting the new position.
    pub fn play(&mut self, mv: Move) {
        self.make_move(mv);
        self.record_position();
    }

    /// Take back the last move of the game record.
    pub fn undo(&mut self) -> Option<Move> {
        if self.history.is_empty() {
            return None;
        }
        let key = self.position_key();
        self.position_counts.decrement(&key);
        self.unmake_move()
    }

    /// Make a move for the lifetime of the returned guard.
    ///
    /// The guard derefs to the board and unmakes the move when dropped, so
    /// every exit from a search frame restores the position.
    pub fn apply(&mut self, mv: Move) -> MoveGuard<'_> {
        self.make_move(mv);
        MoveGuard { board: self, mv }
    }

    /// Moves played since the last load, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Move> {
        self.history.iter().map(|entry| entry.mv).collect()
    }

    /// Number of moves played since the last load.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }
}

/// A move that is unmade when the guard goes out of scope.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl MoveGuard<'_> {
    /// The move this guard applied.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.unmake_move();
    }
}
