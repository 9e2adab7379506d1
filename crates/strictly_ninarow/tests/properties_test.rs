//! Property tests for board geometry and roster rotation.

use proptest::prelude::*;
use strictly_ninarow::{Board, BoardRules, Coord, Player, PlayerRoster};

proptest! {
    #[test]
    fn valid_rules_always_construct(size in 1usize..20, win in 1usize..20) {
        prop_assume!(win <= size);
        prop_assert!(Board::new(size, win).is_ok());
    }

    #[test]
    fn win_longer_than_board_always_fails(size in 1usize..20, extra in 1usize..5) {
        prop_assert!(Board::new(size, size + extra).is_err());
        prop_assert!(BoardRules::new(size, 0).is_err());
    }

    #[test]
    fn zero_size_always_fails(win in 0usize..5) {
        prop_assert!(Board::new(0, win).is_err());
    }

    #[test]
    fn numbering_is_a_bijection(size in 1usize..12) {
        let board = Board::new(size, 1).unwrap();
        let mut seen = vec![false; size * size];
        for square in board.first_square_number()..=board.last_square_number() {
            let coord = board.coord_of(square).unwrap();
            prop_assert!(coord.row < size && coord.col < size);
            prop_assert_eq!(board.square_at(coord), Some(square));
            let index = coord.row * size + coord.col;
            prop_assert!(!seen[index]);
            seen[index] = true;
        }
        prop_assert!(seen.iter().all(|&hit| hit));
        prop_assert!(board.coord_of(0).is_err());
        prop_assert!(board.coord_of(size * size + 1).is_err());
        prop_assert_eq!(board.square_at(Coord::new(size, 0)), None);
    }

    #[test]
    fn full_exactly_when_every_square_placed(
        size in 1usize..7,
        order in any::<u64>(),
    ) {
        let mut board = Board::new(size, size).unwrap();
        let player = Player::with_symbol("X").unwrap();
        let mut squares: Vec<usize> = (1..=size * size).collect();
        // Deterministic shuffle from the generated seed.
        let mut seed = order;
        for i in (1..squares.len()).rev() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (seed >> 33) as usize % (i + 1);
            squares.swap(i, j);
        }
        for (placed, square) in squares.iter().enumerate() {
            prop_assert!(!board.is_full(), "full after {} of {}", placed, size * size);
            board.place(*square, &player).unwrap();
        }
        prop_assert!(board.is_full());
    }

    #[test]
    fn rotation_is_cyclic(count in 1usize..8, laps in 1usize..4) {
        let symbols: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let mut roster = PlayerRoster::from_symbols(symbols).unwrap();
        let first = roster.next_player().unwrap().id();
        for _ in 0..laps {
            for _ in 1..count {
                prop_assert_ne!(roster.next_player().unwrap().id(), first);
            }
            prop_assert_eq!(roster.next_player().unwrap().id(), first);
        }
        prop_assert_eq!(roster.len(), count);
    }

    #[test]
    fn exact_win_length_boundary(size in 2usize..9, row in 0usize..9) {
        let row = row % size;
        let win = size;
        let mut board = Board::new(size, win).unwrap();
        let player = Player::with_symbol("X").unwrap();
        let first = row * size + 1;
        for square in first..first + win - 1 {
            board.place(square, &player).unwrap();
            prop_assert!(!board.is_winning_move(square, &player).unwrap());
        }
        let last = first + win - 1;
        board.place(last, &player).unwrap();
        prop_assert!(board.is_winning_move(last, &player).unwrap());
    }
}
