use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub id: String,
    pub first: String,
    pub last: String,
    pub number: String,
    pub position: String,
    pub team_abbrev: String,
    pub bats: String,
    pub throws: String,
    pub status: String,
    pub attributes: BTreeMap<String, String>,
}

impl PlayerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last).trim().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coach {
    pub id: String,
    pub first: String,
    pub last: String,
    pub number: String,
    pub position: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Umpire {
    pub id: String,
    pub name: String,
    /// `home`, `first`, `second` or `third`
    pub position: String,
    pub attributes: BTreeMap<String, String>,
}

/// Players and coaches of one side, from a `<team type>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    pub id: String,
    pub name: String,
    pub players: Vec<PlayerInfo>,
    pub coaches: Vec<Coach>,
}

/// Everyone taking part in a game, from `players.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePlayers {
    pub home: TeamRoster,
    pub away: TeamRoster,
    pub umpires: Vec<Umpire>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let player = PlayerInfo {
            first: "Anthony".to_string(),
            last: "Rizzo".to_string(),
            ..Default::default()
        };
        assert_eq!(player.full_name(), "Anthony Rizzo");

        let last_only = PlayerInfo {
            last: "Ichiro".to_string(),
            ..Default::default()
        };
        assert_eq!(last_only.full_name(), "Ichiro");
    }
}
