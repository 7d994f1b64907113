pub mod boxscore;
pub mod events;
pub mod game_id;
pub mod injuries;
pub mod league;
pub mod lookup;
pub mod overview;
pub mod players;
pub mod roster;
pub mod scoreboard;
pub mod standings;

pub use boxscore::{
    BatterStats, GameBoxScore, InningScore, PitcherStats, PlayerStats, TeamStats, TeamTotals,
    Totals,
};
pub use events::{Action, AtBat, GameEvent, GameEvents, InningEvents, Pitch};
pub use game_id::GameId;
pub use injuries::{Injuries, Injury, InjuryResponse};
pub use league::{LeagueInfo, TeamInfo};
pub use lookup::{OneOrMany, QueryResults};
pub use overview::{GameOverview, Record};
pub use players::{Coach, GamePlayers, PlayerInfo, TeamRoster, Umpire};
pub use roster::{Roster, RosterPlayer, RosterResponse};
pub use scoreboard::{GameKind, GameScoreboard, PitcherRecord, TeamFilter, TeamLine};
pub use standings::{Division, Standings, StandingsResponse, StandingsTeam};
