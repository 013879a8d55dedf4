use shakmaty::{
    fen::Fen,
    san::SanPlus,
    uci::UciMove,
    zobrist::{Zobrist64, ZobristHash},
    CastlingMode, Chess, EnPassantMode, Move, Position as _, Rank, Role,
};

use crate::{Color, Piece, PieceType, Square};

use super::{DrawReason, EngineError, MoveRecord, MoveRequest, Position, RulesEngine};

const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// [`RulesEngine`] backed by the `shakmaty` move generator.
#[derive(Debug, Clone)]
pub struct ShakmatyEngine {
    pos: Chess,

    start: Position,
    start_turn: Color,
    start_move_number: u32,

    played: Vec<String>,
    // Hashes of every position since the last load, for repetition detection.
    seen: Vec<Zobrist64>,
}

impl ShakmatyEngine {
    fn from_chess(pos: Chess) -> Self {
        let mut engine = Self {
            pos,
            start: Position::new(STARTING_FEN),
            start_turn: Color::White,
            start_move_number: 1,
            played: Vec::new(),
            seen: Vec::new(),
        };
        engine.restart_history();
        engine
    }

    fn restart_history(&mut self) {
        self.start = self.fen();
        self.start_turn = self.turn();
        self.start_move_number = self.move_number();
        self.played.clear();
        self.seen = vec![self.position_hash()];
    }

    fn position_hash(&self) -> Zobrist64 {
        self.pos.zobrist_hash(EnPassantMode::Legal)
    }

    /// Resolves a request to a legal move. Castling is entered as the king's
    /// two-square move; the requested promotion only applies to a pawn
    /// reaching the last rank.
    fn find_legal_move(&self, request: MoveRequest) -> Option<Move> {
        let from = square_to_shakmaty(request.from);
        let to = square_to_shakmaty(request.to);

        let promotes = self.pos.board().role_at(from) == Some(Role::Pawn)
            && matches!(to.rank(), Rank::First | Rank::Eighth);
        let promotion = if promotes {
            Some(piece_type_to_role(request.promotion?))
        } else {
            None
        };

        UciMove::Normal {
            from,
            to,
            promotion,
        }
        .to_move(&self.pos)
        .ok()
        // Only the king's two-square move castles, not king onto rook.
        .filter(|m| !(m.is_castle() && m.to() == to))
    }

    fn repetitions(&self) -> usize {
        match self.seen.last() {
            Some(current) => self.seen.iter().filter(|key| *key == current).count(),
            None => 0,
        }
    }

    fn result_token(&self) -> Option<&'static str> {
        if self.is_checkmate() {
            Some(match self.turn() {
                Color::White => "0-1",
                Color::Black => "1-0",
            })
        } else if self.is_draw() {
            Some("1/2-1/2")
        } else {
            None
        }
    }
}

impl Default for ShakmatyEngine {
    fn default() -> Self {
        Self::from_chess(Chess::default())
    }
}

impl RulesEngine for ShakmatyEngine {
    fn new() -> Self {
        Self::default()
    }

    fn load(&mut self, position: &Position) -> Result<(), EngineError> {
        let malformed = |reason: String| EngineError::MalformedPosition {
            fen: position.to_string(),
            reason,
        };

        let fen: Fen = position
            .as_str()
            .parse()
            .map_err(|err: shakmaty::fen::ParseFenError| malformed(err.to_string()))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|err| malformed(err.to_string()))?;

        self.pos = pos;
        self.restart_history();
        Ok(())
    }

    fn get(&self, square: Square) -> Option<Piece> {
        self.pos
            .board()
            .piece_at(square_to_shakmaty(square))
            .map(piece_from_shakmaty)
    }

    fn turn(&self) -> Color {
        color_from_shakmaty(self.pos.turn())
    }

    fn try_move(&mut self, request: MoveRequest) -> Option<MoveRecord> {
        let m = self.find_legal_move(request)?;
        let promotion = m.promotion().map(role_to_piece_type);

        let san = SanPlus::from_move_and_play_unchecked(&mut self.pos, &m).to_string();

        self.played.push(san.clone());
        self.seen.push(self.position_hash());

        Some(MoveRecord {
            from: request.from,
            to: request.to,
            promotion,
            san,
        })
    }

    fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.pos.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.pos.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.pos.halfmoves() >= 100 {
            Some(DrawReason::FiftyMoveRule)
        } else if self.repetitions() >= 3 {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        }
    }

    fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    fn fen(&self) -> Position {
        Position::new(Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string())
    }

    fn board(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];

        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.get(Square::from_coords(row, col));
            }
        }

        grid
    }

    fn history(&self) -> Vec<String> {
        self.played.clone()
    }

    fn pgn(&self) -> String {
        let mut result = String::new();

        if self.start.as_str() != STARTING_FEN {
            result.push_str("[SetUp \"1\"]\n");
            result.push_str(&format!("[FEN \"{}\"]\n\n", self.start));
        }

        let mut tokens = Vec::new();
        let mut number = self.start_move_number;
        let mut white_to_move = self.start_turn.is_white();

        for (i, san) in self.played.iter().enumerate() {
            if white_to_move {
                tokens.push(format!("{number}. {san}"));
            } else if i == 0 {
                tokens.push(format!("{number}. ... {san}"));
            } else {
                tokens.push(san.clone());
            }

            if !white_to_move {
                number += 1;
            }
            white_to_move = !white_to_move;
        }

        if let Some(token) = self.result_token() {
            tokens.push(token.to_string());
        }

        result.push_str(&tokens.join(" "));
        result
    }

    fn move_number(&self) -> u32 {
        self.pos.fullmoves().get()
    }

    fn destinations(&self, from: Square) -> Vec<Square> {
        let from = square_to_shakmaty(from);
        let turn = self.pos.turn();
        let mut targets = Vec::new();

        for m in self.pos.legal_moves() {
            if m.from() != Some(from) {
                continue;
            }

            // Castling moves are stored king-takes-rook.
            let to = match m.castling_side() {
                Some(side) => side.king_to(turn),
                None => m.to(),
            };
            let to = square_from_shakmaty(to);

            if !targets.contains(&to) {
                targets.push(to);
            }
        }

        targets
    }
}

fn square_to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(square.index() as u32)
}

fn square_from_shakmaty(square: shakmaty::Square) -> Square {
    Square::from_index_unchecked(usize::from(square))
}

fn color_from_shakmaty(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn role_to_piece_type(role: Role) -> PieceType {
    match role {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King,
    }
}

fn piece_type_to_role(piece_type: PieceType) -> Role {
    match piece_type {
        PieceType::Pawn => Role::Pawn,
        PieceType::Knight => Role::Knight,
        PieceType::Bishop => Role::Bishop,
        PieceType::Rook => Role::Rook,
        PieceType::Queen => Role::Queen,
        PieceType::King => Role::King,
    }
}

fn piece_from_shakmaty(piece: shakmaty::Piece) -> Piece {
    Piece::new(
        color_from_shakmaty(piece.color),
        role_to_piece_type(piece.role),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn request(from: &str, to: &str) -> MoveRequest {
        MoveRequest {
            from: sq(from),
            to: sq(to),
            promotion: Some(PieceType::Queen),
        }
    }

    fn engine_at(fen: &str) -> ShakmatyEngine {
        let mut engine = ShakmatyEngine::new();
        engine.load(&Position::new(fen)).unwrap();
        engine
    }

    fn play(engine: &mut ShakmatyEngine, moves: &[(&str, &str)]) {
        for &(from, to) in moves {
            assert!(
                engine.try_move(request(from, to)).is_some(),
                "{from}{to} should be legal"
            );
        }
    }

    #[test]
    fn starts_in_standard_position() {
        let engine = ShakmatyEngine::new();

        assert_eq!(engine.fen().as_str(), STARTING_FEN);
        assert_eq!(engine.turn(), Color::White);
        assert_eq!(engine.get(sq("e1")), Some(Piece::white(PieceType::King)));
        assert_eq!(engine.get(sq("d8")), Some(Piece::black(PieceType::Queen)));
        assert_eq!(engine.get(sq("e4")), None);
        assert_eq!(engine.move_number(), 1);
    }

    #[test]
    fn board_is_rank_major_from_rank_eight() {
        let grid = ShakmatyEngine::new().board();

        assert_eq!(grid[0][0], Some(Piece::black(PieceType::Rook)));
        assert_eq!(grid[1][4], Some(Piece::black(PieceType::Pawn)));
        assert_eq!(grid[7][4], Some(Piece::white(PieceType::King)));
        assert_eq!(grid[4], [None; 8]);
    }

    #[test]
    fn legal_move_is_played_and_recorded() {
        let mut engine = ShakmatyEngine::new();

        let record = engine.try_move(request("e2", "e4")).unwrap();

        // Promotion is dropped for a move that doesn't promote.
        assert_eq!(
            record,
            MoveRecord {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None,
                san: "e4".to_string(),
            }
        );
        assert_eq!(
            engine.fen().as_str(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(engine.turn(), Color::Black);
        assert_eq!(engine.history(), vec!["e4".to_string()]);
    }

    #[test]
    fn illegal_move_is_rejected_without_side_effects() {
        let mut engine = ShakmatyEngine::new();

        assert_eq!(engine.try_move(request("e2", "e5")), None);
        assert_eq!(engine.try_move(request("e7", "e5")), None);
        assert_eq!(engine.try_move(request("e4", "e5")), None);

        assert_eq!(engine.fen().as_str(), STARTING_FEN);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn promotion_uses_requested_piece() {
        let mut engine = engine_at("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let record = engine.try_move(request("a7", "a8")).unwrap();
        assert_eq!(record.promotion, Some(PieceType::Queen));
        assert_eq!(record.san, "a8=Q");
        assert_eq!(engine.get(sq("a8")), Some(Piece::white(PieceType::Queen)));

        let mut engine = engine_at("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let record = engine
            .try_move(MoveRequest {
                from: sq("a7"),
                to: sq("a8"),
                promotion: Some(PieceType::Knight),
            })
            .unwrap();
        assert_eq!(record.san, "a8=N");

        let mut engine = engine_at("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let no_promotion = MoveRequest {
            from: sq("a7"),
            to: sq("a8"),
            promotion: None,
        };
        assert_eq!(engine.try_move(no_promotion), None);
    }

    #[test]
    fn castling_is_entered_as_king_move() {
        let mut engine = engine_at("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        let record = engine.try_move(request("e1", "g1")).unwrap();
        assert_eq!(record.san, "O-O");
        assert_eq!(engine.get(sq("g1")), Some(Piece::white(PieceType::King)));
        assert_eq!(engine.get(sq("f1")), Some(Piece::white(PieceType::Rook)));

        let record = engine.try_move(request("e8", "c8")).unwrap();
        assert_eq!(record.san, "O-O-O");
    }

    #[test]
    fn malformed_load_keeps_live_state() {
        let mut engine = ShakmatyEngine::new();
        play(&mut engine, &[("e2", "e4")]);
        let before = engine.fen();

        let err = engine.load(&Position::new("not a fen")).unwrap_err();
        assert!(matches!(err, EngineError::MalformedPosition { .. }));

        // Parses, but no kings.
        assert!(engine.load(&Position::new("8/8/8/8/8/8/8/8 w - - 0 1")).is_err());

        assert_eq!(engine.fen(), before);
        assert_eq!(engine.history(), vec!["e4".to_string()]);
    }

    #[test]
    fn load_restarts_history() {
        let mut engine = ShakmatyEngine::new();
        play(&mut engine, &[("e2", "e4"), ("e7", "e5")]);
        let fen = engine.fen();

        engine.load(&fen).unwrap();

        assert_eq!(engine.fen(), fen);
        assert!(engine.history().is_empty());
        assert_eq!(engine.move_number(), 2);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut engine = ShakmatyEngine::new();
        play(
            &mut engine,
            &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        );

        assert!(engine.is_checkmate());
        assert!(engine.is_check());
        assert!(!engine.is_stalemate());
        assert!(!engine.is_draw());
        assert_eq!(engine.turn(), Color::White);
        assert_eq!(engine.history().last().map(String::as_str), Some("Qh4#"));
        assert_eq!(engine.checked_king(), Some(sq("e1")));
        assert_eq!(engine.pgn(), "1. f3 e5 2. g4 Qh4# 0-1");
    }

    #[test]
    fn draw_reasons() {
        let engine = engine_at("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(engine.is_stalemate());
        assert_eq!(engine.draw_reason(), Some(DrawReason::Stalemate));

        let engine = engine_at("8/8/8/4k3/8/8/8/4K3 w - - 0 1");
        assert_eq!(engine.draw_reason(), Some(DrawReason::InsufficientMaterial));

        let engine = engine_at("8/8/8/4k3/8/8/8/R3K3 w - - 100 80");
        assert_eq!(engine.draw_reason(), Some(DrawReason::FiftyMoveRule));

        let engine = ShakmatyEngine::new();
        assert_eq!(engine.draw_reason(), None);
        assert!(!engine.is_draw());
    }

    #[test]
    fn threefold_repetition_is_a_draw() {
        let mut engine = ShakmatyEngine::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];

        play(&mut engine, &shuffle);
        assert_eq!(engine.draw_reason(), None);

        play(&mut engine, &shuffle);
        assert_eq!(
            engine.draw_reason(),
            Some(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn destinations_of_a_piece() {
        let engine = ShakmatyEngine::new();

        let mut pawn = engine.destinations(sq("e2"));
        pawn.sort();
        assert_eq!(pawn, vec![sq("e3"), sq("e4")]);

        let mut knight = engine.destinations(sq("g1"));
        knight.sort();
        assert_eq!(knight, vec![sq("f3"), sq("h3")]);

        assert!(engine.destinations(sq("e1")).is_empty());
        assert!(engine.destinations(sq("e4")).is_empty());
    }

    #[test]
    fn castling_destination_is_king_target() {
        let engine = engine_at("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

        let mut king = engine.destinations(sq("e1"));
        king.sort();
        assert_eq!(
            king,
            vec![sq("c1"), sq("d1"), sq("f1"), sq("g1"), sq("d2"), sq("e2"), sq("f2")]
        );

        // King onto its own rook is not a move.
        let mut engine = engine;
        assert_eq!(engine.try_move(request("e1", "h1")), None);
    }

    #[test]
    fn promotion_request_ignored_off_last_rank() {
        let mut engine = engine_at("7k/8/8/8/8/8/8/R3K3 w - - 0 1");

        let record = engine.try_move(request("a1", "a8")).unwrap();
        assert_eq!(record.promotion, None);
        assert_eq!(record.san, "Ra8+");
    }

    #[test]
    fn repetition_counts_same_position_reached_by_other_moves() {
        let mut engine = ShakmatyEngine::new();
        play(
            &mut engine,
            &[
                ("g1", "f3"),
                ("g8", "f6"),
                ("b1", "c3"),
                ("b8", "c6"),
                // Back via a different knight order.
                ("c3", "b1"),
                ("c6", "b8"),
                ("f3", "g1"),
                ("f6", "g8"),
                ("b1", "c3"),
                ("b8", "c6"),
                ("g1", "f3"),
                ("g8", "f6"),
            ],
        );
        assert_eq!(engine.draw_reason(), None);

        play(
            &mut engine,
            &[("f3", "g1"), ("f6", "g8"), ("c3", "b1"), ("c6", "b8")],
        );
        assert_eq!(
            engine.draw_reason(),
            Some(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn pgn_numbers_moves() {
        let mut engine = ShakmatyEngine::new();
        assert_eq!(engine.pgn(), "");

        play(&mut engine, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        assert_eq!(engine.pgn(), "1. e4 e5 2. Nf3");
    }

    #[test]
    fn pgn_from_custom_position() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let mut engine = engine_at(fen);
        play(&mut engine, &[("e7", "e5"), ("g1", "f3")]);

        assert_eq!(
            engine.pgn(),
            format!("[SetUp \"1\"]\n[FEN \"{fen}\"]\n\n1. ... e5 2. Nf3")
        );
    }
}
