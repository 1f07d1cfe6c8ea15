use ppg_core::PlayerStatRow;

use crate::aggregate::PlayerTable;

/// Turn aggregated players into report rows, lowest downside deviation first.
///
/// Players without games produce no row. The sort is stable, so equal
/// deviations keep the table's iteration order.
pub fn build_report(players: PlayerTable) -> Vec<PlayerStatRow> {
    let mut rows: Vec<PlayerStatRow> = players
        .into_iter()
        .filter_map(|(player, state)| PlayerStatRow::from_state(player, state))
        .collect();

    rows.sort_by(|a, b| a.downside_deviation.total_cmp(&b.downside_deviation));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ppg_core::PlayerState;

    fn state(points: &[f64]) -> PlayerState {
        let mut state = PlayerState::default();
        for (day, &pts) in points.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, 1, day as u32 + 1).unwrap();
            state.record_game(pts, date, "LAL");
        }
        state
    }

    #[test]
    fn test_rows_sorted_by_downside_deviation() {
        let mut players = PlayerTable::default();
        players.insert("Volatile".to_string(), state(&[0.0, 2.0, 30.0, 40.0]));
        players.insert("Steady".to_string(), state(&[20.0, 20.0, 20.0]));
        players.insert("Middle".to_string(), state(&[5.0, 10.0, 15.0, 20.0]));

        let rows = build_report(players);
        let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["Steady", "Middle", "Volatile"]);
        assert!(rows
            .windows(2)
            .all(|w| w[0].downside_deviation <= w[1].downside_deviation));
    }

    #[test]
    fn test_players_without_games_are_dropped() {
        let mut players = PlayerTable::default();
        players.insert("Empty".to_string(), PlayerState::default());
        players.insert("One".to_string(), state(&[12.0]));

        let rows = build_report(players);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player, "One");
        assert_eq!(rows[0].games_played, 1);
        assert_eq!(rows[0].p10, Some(12.0));
        assert_eq!(rows[0].downside_deviation, 0.0);
    }

    #[test]
    fn test_same_input_gives_same_rows() {
        let build = || {
            let mut players = PlayerTable::default();
            for (i, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
                players.insert(name.to_string(), state(&[10.0, 10.0 + i as f64]));
            }
            build_report(players)
        };
        assert_eq!(build(), build());
    }
}
