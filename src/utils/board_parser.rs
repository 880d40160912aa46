//! Text-layout-to-board parser.
//!
//! A layout is a header line `<knight|queen> <1|2>` (movement rule and side to
//! move) followed by one line per row: `.` blank, `#` visited, `1`/`2` the
//! players' current squares. Leading whitespace on each line is ignored so
//! layouts can be written inline in tests.

use crate::errors::{IsolationError, IsolationResult};
use crate::game_state::board_types::PlayerId;
use crate::game_state::isolation_board::{IsolationBoard, MovementRule};

pub fn parse_board(layout: &str) -> IsolationResult<IsolationBoard> {
    let mut lines = layout.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| IsolationError::MalformedLayout("missing header line".to_owned()))?;
    let (movement, active) = parse_header(header)?;

    let rows: Vec<&str> = lines.collect();
    if rows.is_empty() {
        return Err(IsolationError::MalformedLayout("no board rows".to_owned()));
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    if width * height > 64 {
        return Err(IsolationError::InvalidDimensions {
            width: width as i32,
            height: height as i32,
        });
    }

    let mut blocked = 0u64;
    let mut positions: [Option<u8>; 2] = [None, None];

    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(IsolationError::MalformedLayout(format!(
                "row {row} has {} cells, expected {width}",
                line.chars().count()
            )));
        }
        for (col, ch) in line.chars().enumerate() {
            let sq = (row * width + col) as u8;
            match ch {
                '.' => {}
                '#' => blocked |= 1u64 << sq,
                '1' => place(&mut positions, PlayerId::Player1, sq)?,
                '2' => place(&mut positions, PlayerId::Player2, sq)?,
                _ => return Err(IsolationError::InvalidLayoutChar { ch, row, col }),
            }
        }
    }

    IsolationBoard::from_parts(
        width as i32,
        height as i32,
        movement,
        blocked,
        positions,
        active,
    )
}

fn parse_header(header: &str) -> IsolationResult<(MovementRule, PlayerId)> {
    let mut parts = header.split_whitespace();
    let movement = match parts.next() {
        Some(rule) if rule.eq_ignore_ascii_case("knight") => MovementRule::Knight,
        Some(rule) if rule.eq_ignore_ascii_case("queen") => MovementRule::Queen,
        other => {
            return Err(IsolationError::MalformedLayout(format!(
                "unknown movement rule {other:?}"
            )))
        }
    };
    let active = match parts.next() {
        Some("1") => PlayerId::Player1,
        Some("2") => PlayerId::Player2,
        other => {
            return Err(IsolationError::MalformedLayout(format!(
                "unknown side to move {other:?}"
            )))
        }
    };
    if parts.next().is_some() {
        return Err(IsolationError::MalformedLayout(
            "header has extra trailing fields".to_owned(),
        ));
    }
    Ok((movement, active))
}

fn place(positions: &mut [Option<u8>; 2], player: PlayerId, sq: u8) -> IsolationResult<()> {
    if positions[player.index()].is_some() {
        return Err(IsolationError::MalformedLayout(format!(
            "{player} appears more than once"
        )));
    }
    positions[player.index()] = Some(sq);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_board;
    use crate::errors::IsolationError;
    use crate::game_state::board_types::{Move, PlayerId};
    use crate::game_state::game_state::GameState;
    use crate::game_state::isolation_board::MovementRule;

    #[test]
    fn parses_positions_blocks_and_side_to_move() {
        let board = parse_board(
            "queen 2
             1#.
             ..2",
        )
        .expect("layout should parse");

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.movement(), MovementRule::Queen);
        assert_eq!(board.active_player(), PlayerId::Player2);
        assert_eq!(board.position(PlayerId::Player1), Some(Move::new(0, 0)));
        assert_eq!(board.position(PlayerId::Player2), Some(Move::new(1, 2)));
        assert_eq!(board.blank_cell_count(), 3);
    }

    #[test]
    fn rejects_ragged_rows_and_unknown_cells() {
        let ragged = parse_board("knight 1\n...\n..").expect_err("ragged rows");
        assert!(matches!(ragged, IsolationError::MalformedLayout(_)));

        let bad_char = parse_board("knight 1\n.x.").expect_err("unknown cell");
        assert_eq!(
            bad_char,
            IsolationError::InvalidLayoutChar {
                ch: 'x',
                row: 0,
                col: 1
            }
        );
    }

    #[test]
    fn rejects_duplicate_players_and_bad_header() {
        assert!(parse_board("knight 1\n1.1").is_err());
        assert!(parse_board("bishop 1\n...").is_err());
        assert!(parse_board("knight 3\n...").is_err());
    }
}
