use std::collections::BTreeMap;
use std::fmt;

/// League level properties from `mlb_properties.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueInfo {
    pub id: String,
    pub club: String,
    pub club_full_name: String,
    pub attributes: BTreeMap<String, String>,
}

impl LeagueInfo {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A club as listed under `<teams>` in `mlb_properties.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamInfo {
    pub team_id: String,
    pub club: String,
    pub club_full_name: String,
    pub club_common_name: String,
    pub team_code: String,
    pub division: String,
    pub league: String,
    pub attributes: BTreeMap<String, String>,
}

impl TeamInfo {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl fmt::Display for TeamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.club_full_name, self.club.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_display_uppercases_club() {
        let team = TeamInfo {
            club: "chc".to_string(),
            club_full_name: "Chicago Cubs".to_string(),
            ..Default::default()
        };
        assert_eq!(team.to_string(), "Chicago Cubs (CHC)");
    }
}
