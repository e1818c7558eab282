use chess_rules_core::{
    check_move, is_valid_move, legal_destinations, Board, Error, GameState, Piece, PieceKind,
    Rejection, Side, Square,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board_with(pieces: &[(&str, PieceKind, Side)]) -> Board {
    let mut board = Board::empty();
    for &(at, kind, side) in pieces {
        board.set(sq(at), Piece::new(kind, side));
    }
    board
}

#[test]
fn opening_sequence_from_the_start() {
    let mut game = GameState::new();

    game.play_text("e2 to e4").unwrap();
    game.play_text("e7 to e5").unwrap();

    // Pawns never capture straight ahead
    let err = game.play_text("e4 to e5").unwrap_err();
    assert!(matches!(
        err,
        Error::IllegalMove {
            reason: Rejection::PathBlocked,
            ..
        }
    ));

    // e2 has been vacated, so the f1-a6 diagonal is open
    assert!(game.is_legal("f1 to a6".parse().unwrap()));
}

#[test]
fn bishop_diagonal_blocked_until_cleared() {
    let mut game = GameState::new();
    assert_eq!(
        game.check("f1 to a6".parse().unwrap()),
        Err(Rejection::PathBlocked)
    );

    game.play_text("e2 to e3").unwrap();
    game.play_text("a7 to a6").unwrap();
    // a6 now holds a black pawn: capture along a clear diagonal
    assert!(game.is_legal("f1 to a6".parse().unwrap()));

    // Re-block the diagonal on c4
    let mut board = *game.board();
    board.set(sq("c4"), Piece::new(PieceKind::Pawn, Side::White));
    assert_eq!(
        check_move(&board, sq("f1"), sq("a6"), Side::White),
        Err(Rejection::PathBlocked)
    );
}

#[test]
fn king_cannot_take_own_pawn() {
    let board = Board::standard();
    assert_eq!(
        check_move(&board, sq("e1"), sq("e2"), Side::White),
        Err(Rejection::OwnPieceAtDestination)
    );
}

#[test]
fn double_push_needs_both_squares_empty() {
    for side in [Side::White, Side::Black] {
        let rank = side.pawn_rank();
        for file in 0..8 {
            let from = Square::new(file, rank).unwrap();
            let middle = from.offset(0, side.forward()).unwrap();
            let to = from.offset(0, 2 * side.forward()).unwrap();

            let board = Board::standard();
            assert!(is_valid_move(&board, from, to, side), "{} {}", from, to);

            for blocker_side in [Side::White, Side::Black] {
                for blocked in [middle, to] {
                    let mut board = Board::standard();
                    board.set(blocked, Piece::new(PieceKind::Knight, blocker_side));
                    assert!(
                        !is_valid_move(&board, from, to, side),
                        "{} {} with blocker on {}",
                        from,
                        to,
                        blocked
                    );
                }
            }
        }
    }
}

#[test]
fn any_single_blocker_stops_a_slider() {
    let lines = [
        (PieceKind::Rook, "a1", "a8"),
        (PieceKind::Rook, "h4", "a4"),
        (PieceKind::Bishop, "a1", "h8"),
        (PieceKind::Bishop, "h1", "a8"),
        (PieceKind::Queen, "d1", "d8"),
        (PieceKind::Queen, "b2", "g7"),
        (PieceKind::Queen, "h5", "a5"),
    ];
    let blockers = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    for (kind, from, to) in lines {
        let (from, to) = (sq(from), sq(to));
        let mut board = Board::empty();
        board.set(from, Piece::new(kind, Side::White));
        assert!(is_valid_move(&board, from, to, Side::White));

        let ray = chess_rules_core::rules::Ray::towards(from, to).unwrap();
        for between in ray.between() {
            for blocker in blockers {
                for side in [Side::White, Side::Black] {
                    let mut blocked = board;
                    blocked.set(between, Piece::new(blocker, side));
                    assert_eq!(
                        check_move(&blocked, from, to, Side::White),
                        Err(Rejection::PathBlocked),
                        "{:?} {}-{} blocked on {}",
                        kind,
                        from,
                        to,
                        between
                    );
                }
            }
        }
    }
}

#[test]
fn side_not_to_move_can_never_move() {
    let board = Board::standard();
    for (from, piece) in board.pieces() {
        for to in Square::all() {
            let other = piece.side.opponent();
            assert!(!is_valid_move(&board, from, to, other));
        }
    }
}

#[test]
fn knight_has_eight_jumps_regardless_of_neighbours() {
    let offsets = [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)];

    // Files b-g, ranks 2-7
    for file in 1..=6 {
        for rank in 1..=6 {
            let centre = Square::new(file, rank).unwrap();
            let mut expected: Vec<Square> = offsets
                .iter()
                .filter_map(|&(f, r)| centre.offset(f, r))
                .collect();
            expected.sort();
            if (2..=5).contains(&file) && (2..=5).contains(&rank) {
                assert_eq!(expected.len(), 8, "{}", centre);
            }

            let mut alone = Board::empty();
            alone.set(centre, Piece::new(PieceKind::Knight, Side::White));
            assert_eq!(
                legal_destinations(&alone, centre, Side::White),
                expected,
                "{}",
                centre
            );

            // Surround the knight completely with enemy pieces
            let mut boxed = alone;
            for df in -1..=1 {
                for dr in -1..=1 {
                    if let Some(neighbour) = centre.offset(df, dr).filter(|&n| n != centre) {
                        boxed.set(neighbour, Piece::new(PieceKind::Pawn, Side::Black));
                    }
                }
            }
            assert_eq!(
                legal_destinations(&boxed, centre, Side::White),
                expected,
                "{} boxed in",
                centre
            );
        }
    }
}

#[test]
fn null_moves_are_illegal() {
    let board = Board::standard();
    for (from, piece) in board.pieces() {
        assert_eq!(
            check_move(&board, from, from, piece.side),
            Err(Rejection::NullMove)
        );
    }
}

#[test]
fn king_moves_one_square_any_direction() {
    let board = board_with(&[("e4", PieceKind::King, Side::Black)]);
    let moves = legal_destinations(&board, sq("e4"), Side::Black);
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|&to| {
        let (f, r) = chess_rules_core::rules::Delta::between(sq("e4"), to).abs();
        f <= 1 && r <= 1
    }));

    let corner = board_with(&[("h8", PieceKind::King, Side::Black)]);
    assert_eq!(legal_destinations(&corner, sq("h8"), Side::Black).len(), 3);
}

#[test]
fn queen_counts_on_open_board() {
    let board = board_with(&[("d4", PieceKind::Queen, Side::White)]);
    assert_eq!(legal_destinations(&board, sq("d4"), Side::White).len(), 27);

    let rook = board_with(&[("a1", PieceKind::Rook, Side::White)]);
    assert_eq!(legal_destinations(&rook, sq("a1"), Side::White).len(), 14);
}

#[test]
fn pawn_on_far_rank_stays_a_pawn() {
    let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    game.play_text("a7 to a8").unwrap();
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Pawn, Side::White))
    );
    // No further forward move exists off the board
    game.play_text("e8 to d8").unwrap();
    assert!(legal_destinations(game.board(), sq("a8"), Side::White).is_empty());
}
