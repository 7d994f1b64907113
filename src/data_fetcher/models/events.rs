use std::collections::BTreeMap;

/// A single pitch thrown during an at-bat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pitch {
    pub description: String,
    /// `B` (ball), `S` (strike) or `X` (in play)
    pub result: String,
    pub pitch_type: String,
    pub start_speed: Option<f64>,
    pub attributes: BTreeMap<String, String>,
}

/// A completed plate appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtBat {
    pub num: Option<u32>,
    pub batter: String,
    pub pitcher: String,
    pub balls: u32,
    pub strikes: u32,
    pub outs: u32,
    pub event: String,
    pub description: String,
    pub home_team_runs: Option<u32>,
    pub away_team_runs: Option<u32>,
    pub pitches: Vec<Pitch>,
    pub attributes: BTreeMap<String, String>,
}

/// Something that happened between pitches: substitutions, stolen bases,
/// wild pitches, mound visits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub player: String,
    pub balls: u32,
    pub strikes: u32,
    pub outs: u32,
    pub event: String,
    pub description: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    AtBat(AtBat),
    Action(Action),
}

impl GameEvent {
    pub fn description(&self) -> &str {
        match self {
            GameEvent::AtBat(at_bat) => &at_bat.description,
            GameEvent::Action(action) => &action.description,
        }
    }

    pub fn event(&self) -> &str {
        match self {
            GameEvent::AtBat(at_bat) => &at_bat.event,
            GameEvent::Action(action) => &action.event,
        }
    }
}

/// Events of one inning, each half in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InningEvents {
    pub num: u32,
    pub top: Vec<GameEvent>,
    pub bottom: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameEvents {
    pub innings: Vec<InningEvents>,
}

impl GameEvents {
    /// All at-bats of the game in order.
    pub fn at_bats(&self) -> impl Iterator<Item = &AtBat> {
        self.innings
            .iter()
            .flat_map(|inning| inning.top.iter().chain(inning.bottom.iter()))
            .filter_map(|event| match event {
                GameEvent::AtBat(at_bat) => Some(at_bat),
                GameEvent::Action(_) => None,
            })
    }
}
