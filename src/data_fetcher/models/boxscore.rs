use super::game_id::GameId;
use std::collections::BTreeMap;
use std::fmt;

/// Runs, hits and errors for one team over a whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Totals {
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

/// Runs scored in one inning. `None` marks a half-inning that was not played
/// (the home half of the last inning when the home team is ahead).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InningScore {
    pub inning: u32,
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Inning by inning line score from `boxscore.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoxScore {
    pub game_id: GameId,
    pub home_team: String,
    pub away_team: String,
    pub innings: Vec<InningScore>,
    pub home_totals: Totals,
    pub away_totals: Totals,
}

impl GameBoxScore {
    /// Sum of the per-inning runs, ignoring unplayed halves.
    pub fn inning_runs(&self) -> (u32, u32) {
        self.innings.iter().fold((0, 0), |(home, away), inning| {
            (
                home + inning.home.unwrap_or(0),
                away + inning.away.unwrap_or(0),
            )
        })
    }
}

fn inning_cell(runs: Option<u32>) -> String {
    runs.map_or_else(|| "x".to_string(), |runs| runs.to_string())
}

impl fmt::Display for GameBoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .home_team
            .len()
            .max(self.away_team.len())
            .max("Inning".len());

        write!(f, "{:<width$}", "Inning")?;
        for inning in &self.innings {
            write!(f, " {:>2}", inning.inning)?;
        }
        writeln!(f, " | {:>2} {:>2} {:>2}", "R", "H", "E")?;

        write!(f, "{:<width$}", self.away_team)?;
        for inning in &self.innings {
            write!(f, " {:>2}", inning_cell(inning.away))?;
        }
        writeln!(
            f,
            " | {:>2} {:>2} {:>2}",
            self.away_totals.runs, self.away_totals.hits, self.away_totals.errors
        )?;

        write!(f, "{:<width$}", self.home_team)?;
        for inning in &self.innings {
            write!(f, " {:>2}", inning_cell(inning.home))?;
        }
        write!(
            f,
            " | {:>2} {:>2} {:>2}",
            self.home_totals.runs, self.home_totals.hits, self.home_totals.errors
        )
    }
}

/// One pitcher's line from a `<pitcher>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PitcherStats {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub outs: u32,
    pub batters_faced: u32,
    pub hits: u32,
    pub runs: u32,
    pub earned_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub home_runs: u32,
    pub pitches: u32,
    pub strikes: u32,
    pub era: String,
    pub win: bool,
    pub loss: bool,
    pub save: bool,
    pub note: String,
    /// Every attribute of the element, including the ones mapped above
    pub attributes: BTreeMap<String, String>,
}

impl PitcherStats {
    /// Innings pitched in the usual `6.2` notation.
    pub fn innings_pitched(&self) -> String {
        format!("{}.{}", self.outs / 3, self.outs % 3)
    }
}

/// One batter's line from a `<batter>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatterStats {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub position: String,
    /// Batting order slot, e.g. `100` for the lead-off hitter and `101` for
    /// the first substitute in that slot
    pub batting_order: Option<u32>,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub left_on_base: u32,
    pub stolen_bases: u32,
    pub avg: String,
    pub attributes: BTreeMap<String, String>,
}

impl BatterStats {
    /// Starters have a batting order ending in `00`.
    pub fn is_starter(&self) -> bool {
        self.batting_order.is_some_and(|order| order % 100 == 0)
    }
}

/// Per-player statistics for both teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub home_pitching: Vec<PitcherStats>,
    pub away_pitching: Vec<PitcherStats>,
    pub home_batting: Vec<BatterStats>,
    pub away_batting: Vec<BatterStats>,
}

/// Team totals taken from a `<pitching>` or `<batting>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamTotals {
    pub runs: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub attributes: BTreeMap<String, String>,
}

/// Team level statistics for both teams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub home_pitching: TeamTotals,
    pub away_pitching: TeamTotals,
    pub home_batting: TeamTotals,
    pub away_batting: TeamTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_score() -> GameBoxScore {
        GameBoxScore {
            game_id: GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap(),
            home_team: "Cubs".to_string(),
            away_team: "Cardinals".to_string(),
            innings: vec![
                InningScore {
                    inning: 1,
                    home: Some(0),
                    away: Some(2),
                },
                InningScore {
                    inning: 2,
                    home: Some(1),
                    away: Some(1),
                },
                InningScore {
                    inning: 3,
                    home: None,
                    away: Some(0),
                },
            ],
            home_totals: Totals {
                runs: 1,
                hits: 4,
                errors: 1,
            },
            away_totals: Totals {
                runs: 3,
                hits: 9,
                errors: 0,
            },
        }
    }

    #[test]
    fn test_inning_runs_skip_unplayed_halves() {
        assert_eq!(box_score().inning_runs(), (1, 3));
    }

    #[test]
    fn test_display_renders_line_score_table() {
        let rendered = box_score().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Inning     1  2  3 |  R  H  E");
        assert_eq!(lines[1], "Cardinals  2  1  0 |  3  9  0");
        assert_eq!(lines[2], "Cubs       0  1  x |  1  4  1");
    }

    #[test]
    fn test_innings_pitched_notation() {
        let pitcher = PitcherStats {
            outs: 20,
            ..Default::default()
        };
        assert_eq!(pitcher.innings_pitched(), "6.2");
    }

    #[test]
    fn test_starter_detection() {
        let starter = BatterStats {
            batting_order: Some(300),
            ..Default::default()
        };
        let substitute = BatterStats {
            batting_order: Some(301),
            ..Default::default()
        };
        assert!(starter.is_starter());
        assert!(!substitute.is_starter());
        assert!(!BatterStats::default().is_starter());
    }
}
