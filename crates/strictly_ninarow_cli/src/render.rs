//! Text rendering of boards and standings.

use strictly_ninarow::{PlayerRoster, Snapshot, SquareState, Standing};

/// Draws the board as a bordered grid.
///
/// Open squares show their number and taken squares their marker, each
/// right-aligned to `min_width`, the last square number, or the widest
/// marker on the board, whichever is widest:
///
/// ```text
/// +-+-+-+
/// |X|2|3|
/// +-+-+-+
/// ```
pub fn board(snapshot: Snapshot<'_>, min_width: usize) -> String {
    let number_width = snapshot.last_square_number().to_string().len();
    let width = snapshot
        .iter()
        .filter_map(|state| match state {
            SquareState::Taken(marker) => Some(marker.width()),
            SquareState::Open(_) => None,
        })
        .fold(number_width.max(min_width), usize::max);

    let border = format!("+{}", format!("{}+", "-".repeat(width)).repeat(snapshot.size()));
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in snapshot.rows() {
        let cells: String = row.map(|state| format!("{:>width$}|", state.to_string())).collect();
        out.push('|');
        out.push_str(&cells);
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// Width of the longest marker in the roster.
///
/// Passing this to [`board`] keeps the grid the same width for a whole
/// round, before and after long markers land.
pub fn marker_width(roster: &PlayerRoster) -> usize {
    roster.iter().map(|p| p.marker().width()).max().unwrap_or(0)
}

/// One line per player: "`<marker>` won `<n>` time(s)."
pub fn standings(standings: &[Standing]) -> String {
    standings
        .iter()
        .map(|s| format!("{} won {} time(s).\n", s.marker(), s.wins()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_ninarow::{Board, Player, PlayerRoster};

    #[test]
    fn test_empty_classic_board() {
        let board_ = Board::new(3, 3).unwrap();
        let expected = "\
+-+-+-+
|1|2|3|
+-+-+-+
|4|5|6|
+-+-+-+
|7|8|9|
+-+-+-+
";
        assert_eq!(board(board_.snapshot(), 0), expected);
    }

    #[test]
    fn test_wide_numbers_right_aligned() {
        let mut board_ = Board::new(4, 3).unwrap();
        let x = Player::with_symbol("X").unwrap();
        board_.place(1, &x).unwrap();
        let text = board(board_.snapshot(), 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+--+--+--+--+");
        assert_eq!(lines[1], "| X| 2| 3| 4|");
        assert_eq!(lines[7], "|13|14|15|16|");
    }

    #[test]
    fn test_long_marker_widens_cells() {
        let mut board_ = Board::new(2, 2).unwrap();
        let p = Player::with_symbol("AAA").unwrap();
        board_.place(4, &p).unwrap();
        let text = board(board_.snapshot(), 0);
        assert!(text.starts_with("+---+---+\n|  1|  2|\n"));
        assert!(text.contains("|  3|AAA|"));
    }

    #[test]
    fn test_roster_width_holds_grid_steady() {
        let roster = PlayerRoster::from_symbols(["AB", "X"]).unwrap();
        let width = marker_width(&roster);
        assert_eq!(width, 2);

        let mut board_ = Board::new(2, 2).unwrap();
        let before = board(board_.snapshot(), width);
        board_.place(1, roster.iter().next().unwrap()).unwrap();
        let after = board(board_.snapshot(), width);

        assert_eq!(before.lines().next(), Some("+--+--+"));
        assert_eq!(before.lines().next(), after.lines().next());
        assert!(before.contains("| 1| 2|"));
        assert!(after.contains("|AB| 2|"));
    }

    #[test]
    fn test_standings_lines() {
        let mut roster = PlayerRoster::from_symbols(["O", "X"]).unwrap();
        let x = roster.iter().nth(1).unwrap().id();
        roster.record_win(x).unwrap();
        assert_eq!(
            standings(&roster.final_standings()),
            "O won 0 time(s).\nX won 1 time(s).\n"
        );
    }
}
