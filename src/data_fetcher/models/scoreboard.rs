use super::game_id::GameId;
use chrono::NaiveDate;
use std::fmt;

/// Section of `scoreboard.xml` a game was listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    /// `go_game`: the game is over
    Final,
    /// `ig_game`: the game is being played
    InProgress,
    /// `sg_game`: the game has not started
    Scheduled,
}

impl GameKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "go_game" => Some(GameKind::Final),
            "ig_game" => Some(GameKind::InProgress),
            "sg_game" => Some(GameKind::Scheduled),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            GameKind::Final => "go_game",
            GameKind::InProgress => "ig_game",
            GameKind::Scheduled => "sg_game",
        }
    }
}

/// Runs, hits and errors for one side of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeamLine {
    pub name: String,
    pub code: String,
    pub runs: u32,
    pub hits: u32,
    pub errors: u32,
}

impl TeamLine {
    /// Matches a team by display name (exact) or club code (case-insensitive).
    pub fn matches(&self, team: &str) -> bool {
        self.name == team || (!self.code.is_empty() && self.code.eq_ignore_ascii_case(team))
    }
}

/// A pitcher of record as listed on the scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PitcherRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
}

/// One game as listed in a day's `scoreboard.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameScoreboard {
    pub game_id: GameId,
    pub kind: GameKind,
    pub league: String,
    pub status: String,
    pub start_time: String,
    pub home: TeamLine,
    pub away: TeamLine,
    pub winning_pitcher: Option<PitcherRecord>,
    pub losing_pitcher: Option<PitcherRecord>,
    pub save_pitcher: Option<PitcherRecord>,
    pub home_probable_pitcher: Option<PitcherRecord>,
    pub away_probable_pitcher: Option<PitcherRecord>,
}

impl GameScoreboard {
    pub fn date(&self) -> NaiveDate {
        self.game_id.date()
    }

    pub fn is_final(&self) -> bool {
        self.kind == GameKind::Final
    }

    /// Name of the team that won, for finished games that did not end tied.
    pub fn winning_team(&self) -> Option<&str> {
        if !self.is_final() {
            return None;
        }
        if self.home.runs > self.away.runs {
            Some(&self.home.name)
        } else if self.away.runs > self.home.runs {
            Some(&self.away.name)
        } else {
            None
        }
    }

    pub fn losing_team(&self) -> Option<&str> {
        if !self.is_final() {
            return None;
        }
        if self.home.runs < self.away.runs {
            Some(&self.home.name)
        } else if self.away.runs < self.home.runs {
            Some(&self.away.name)
        } else {
            None
        }
    }
}

impl fmt::Display for GameScoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GameKind::Scheduled => write!(
                f,
                "{} vs {} ({})",
                self.away.name, self.home.name, self.start_time
            ),
            _ => write!(
                f,
                "{} ({}) at {} ({})",
                self.away.name, self.away.runs, self.home.name, self.home.runs
            ),
        }
    }
}

/// Team filter applied to scoreboard listings.
///
/// A game is kept when no team is given, when its home team matches `home`,
/// or when its away team matches `away`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub home: Option<String>,
    pub away: Option<String>,
}

impl TeamFilter {
    pub fn all() -> Self {
        TeamFilter::default()
    }

    pub fn home(team: impl Into<String>) -> Self {
        TeamFilter {
            home: Some(team.into()),
            away: None,
        }
    }

    pub fn away(team: impl Into<String>) -> Self {
        TeamFilter {
            home: None,
            away: Some(team.into()),
        }
    }

    pub fn matches(&self, home: &TeamLine, away: &TeamLine) -> bool {
        match (&self.home, &self.away) {
            (None, None) => true,
            (wanted_home, wanted_away) => {
                wanted_home.as_deref().is_some_and(|team| home.matches(team))
                    || wanted_away.as_deref().is_some_and(|team| away.matches(team))
            }
        }
    }
}
