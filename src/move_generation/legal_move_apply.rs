//! Committing and undoing moves.
//!
//! `apply_move` validates, then mutates the board, appends history and runs
//! the special-move and portal side effects, and finally ticks the cooldown
//! queue once. Every failure is detected before the first mutation, so a
//! rejected commit leaves the game untouched.

use tracing::{info, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::legal_move_special::{
    castling_rook_move, en_passant_capture_square, is_en_passant_move,
};

pub fn apply_move(
    game_state: &mut GameState,
    start: Position,
    end: Position,
    promote_to: &PieceKind,
) -> ChessResult<()> {
    let board = &game_state.board;
    if !board.is_in_bounds(start) {
        return Err(ChessErrors::SquareOutOfRange(start));
    }
    if !board.is_in_bounds(end) {
        return Err(ChessErrors::SquareOutOfRange(end));
    }

    let moved = board
        .piece_at(start)
        .cloned()
        .ok_or(ChessErrors::EmptyStartSquare(start))?;
    let color = moved.color;

    if !game_state
        .validator
        .is_valid_move(&moved.kind, start, end, color, board, &game_state.portals)
    {
        return Err(ChessErrors::IllegalMove { start, end });
    }

    let is_pawn = moved.kind == PieceKind::Pawn;
    let promotes = is_pawn && end.rank == promotion_rank(color, board.board_size());
    if promotes && !promote_to.is_promotion_choice() {
        return Err(ChessErrors::InvalidPromotion(promote_to.to_string()));
    }

    let en_passant = is_pawn && is_en_passant_move(start, end, color, board);
    let castling = moved.kind == PieceKind::King
        && (end.file - start.file).abs() == 2
        && end.rank == start.rank;
    let rook_move = castling.then(|| castling_rook_move(start, end, board.board_size()));

    // Mirrors the validator's dispatch order: only moves that reached the
    // portal branch count as using the portal directly.
    let direct_portal = if castling || en_passant || promotes {
        None
    } else {
        game_state
            .portals
            .find_portal(start, end)
            .map(|portal| portal.id.clone())
    };

    let captured_at = if en_passant {
        en_passant_capture_square(start, end)
    } else {
        end
    };
    let captured = board.piece_at(captured_at).cloned();

    let landed = if promotes {
        Piece::new(promote_to.clone(), color)
    } else {
        moved.clone()
    };

    let board = &mut game_state.board;
    board.take_piece(start);
    if en_passant {
        board.take_piece(captured_at);
        info!(%start, %end, captured = %captured_at, "en passant capture");
    }
    board.set_square(end, Some(landed.clone()))?;
    if promotes {
        info!(%end, kind = %landed.kind, %color, "pawn promoted");
    }
    if let Some((rook_from, rook_to)) = rook_move {
        if let Some(rook) = board.take_piece(rook_from) {
            board.set_square(rook_to, Some(rook))?;
        }
        info!(%color, king = %end, rook = %rook_to, "castled");
    }

    game_state.move_history.push(MoveRecord {
        start,
        end,
        moved_piece: moved,
        captured_piece: captured,
        captured_at,
        rook_move,
    });

    if let Some(id) = direct_portal {
        game_state.portals.start_cooldown(&id);
    }

    teleport_from_entry(game_state, end, &landed)?;

    game_state.portals.update_cooldowns();
    Ok(())
}

/// Sends a piece that just landed on a portal entry through the first portal
/// from that square that is open, admits the piece's color and has no
/// friendly piece on its exit.
fn teleport_from_entry(
    game_state: &mut GameState,
    entry: Position,
    landed: &Piece,
) -> ChessResult<()> {
    let board = &game_state.board;
    let portals = &game_state.portals;
    let usable = portals.portals_from(entry).find(|portal| {
        board.is_in_bounds(portal.exit)
            && !matches!(board.piece_at(portal.exit), Some(piece) if piece.color == landed.color)
            && portals.remaining_cooldown(&portal.id) == 0
            && portal.allows(landed.color)
    });
    let Some(exit) = usable.map(|portal| portal.exit) else {
        return Ok(());
    };

    let occupant = board.piece_at(exit).cloned();
    game_state
        .move_history
        .push(MoveRecord::new(entry, exit, landed.clone(), occupant));
    game_state
        .portals
        .handle_portal_move(entry, exit, &mut game_state.board)?;
    info!(%entry, %exit, kind = %landed.kind, "piece teleported");
    Ok(())
}

/// Pops the latest record and puts the board back the way it was before it.
/// An empty history is a reported no-op. If the record cannot be restored it
/// goes back on the history and the board is left unchanged.
pub fn undo_move(game_state: &mut GameState) -> ChessResult<Option<MoveRecord>> {
    let Some(record) = game_state.move_history.pop() else {
        warn!("no moves to undo");
        return Ok(None);
    };

    let mut restored = game_state.board.clone();
    match restore(&mut restored, &record) {
        Ok(()) => {
            game_state.board = restored;
            info!(
                kind = %record.moved_piece.kind,
                from = %record.end,
                to = %record.start,
                "move undone"
            );
            game_state.portals.update_cooldowns();
            Ok(Some(record))
        }
        Err(err) => {
            warn!(error = %err, "error undoing move");
            game_state.move_history.push(record.clone());
            Err(ChessErrors::UndoRestorationFailed(record))
        }
    }
}

fn restore(board: &mut BoardState, record: &MoveRecord) -> ChessResult<()> {
    board.set_square(record.start, Some(record.moved_piece.clone()))?;
    board.set_square(record.end, None)?;
    if let Some(captured) = &record.captured_piece {
        board.set_square(record.captured_at, Some(captured.clone()))?;
    }
    if let Some((rook_from, rook_to)) = record.rook_move {
        let rook = board.get_square(rook_to)?.cloned();
        board.set_square(rook_to, None)?;
        board.set_square(rook_from, rook)?;
    }
    Ok(())
}
