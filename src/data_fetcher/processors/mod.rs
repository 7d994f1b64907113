pub mod boxscore;
pub mod events;
pub mod league;
pub mod lookups;
pub mod overview;
pub mod players;
pub mod scoreboard;

pub use boxscore::{process_box_score, process_player_stats, process_team_stats};
pub use events::process_game_events;
pub use league::{process_league, process_teams};
pub use lookups::{parse_last_update, process_injuries, process_roster, process_standings};
pub use overview::process_overview;
pub use players::process_players;
pub use scoreboard::{parse_scoreboard, process_scoreboard};
