//! Sample GameDay documents and lookup responses for tests.
//!
//! The documents are trimmed copies of real 2015 opening day files, keeping
//! the elements and attributes the parsers read.

/// Scoreboard with one final, one in-progress and one scheduled game.
pub const SCOREBOARD_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scoreboard>
  <go_game>
    <game id="2015_04_05_slnmlb_chnmlb_1" league="NN" status="FINAL" start_time="07:05 PM"/>
    <team name="Cubs" code="chn">
      <gameteam R="0" H="7" E="1"/>
    </team>
    <team name="Cardinals" code="sln">
      <gameteam R="3" H="9" E="0"/>
    </team>
    <w_pitcher wins="1" losses="0"><pitcher name="Adam Wainwright"/></w_pitcher>
    <l_pitcher wins="0" losses="1"><pitcher name="Jon Lester"/></l_pitcher>
    <sv_pitcher saves="1"><pitcher name="Trevor Rosenthal"/></sv_pitcher>
  </go_game>
  <ig_game>
    <game id="2015_04_05_nyamlb_bosmlb_1" league="AA" status="IN_PROGRESS" start_time="08:05 PM"/>
    <team name="Red Sox" code="bos">
      <gameteam R="2" H="5" E="0"/>
    </team>
    <team name="Yankees" code="nya">
      <gameteam R="1" H="3" E="1"/>
    </team>
    <w_pitcher wins="0" losses="0"><pitcher name=""/></w_pitcher>
  </ig_game>
  <sg_game>
    <game id="2015_04_05_sfnmlb_lanmlb_1" league="NN" status="PRE_GAME" start_time="10:10 PM"/>
    <team name="Dodgers" code="lan">
      <gameteam R="0" H="0" E="0"/>
    </team>
    <team name="Giants" code="sfn">
      <gameteam R="0" H="0" E="0"/>
    </team>
    <p_pitcher wins="0" losses="0"><pitcher name="Clayton Kershaw"/></p_pitcher>
    <p_pitcher wins="0" losses="0"><pitcher name="Madison Bumgarner"/></p_pitcher>
  </sg_game>
</scoreboard>"#;

pub const BOXSCORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<boxscore game_id="2015/04/05/slnmlb-chnmlb-1" venue_name="Wrigley Field" home_team_code="chn" away_team_code="sln" home_fname="Chicago Cubs" away_fname="St. Louis Cardinals" home_sname="Chi Cubs" away_sname="St. Louis" status_ind="F">
  <linescore away_team_runs="3" home_team_runs="0" away_team_hits="9" home_team_hits="7" away_team_errors="0" home_team_errors="1">
    <inning_line_score away="1" home="0" inning="1"/>
    <inning_line_score away="0" home="0" inning="2"/>
    <inning_line_score away="0" home="0" inning="3"/>
    <inning_line_score away="1" home="0" inning="4"/>
    <inning_line_score away="0" home="0" inning="5"/>
    <inning_line_score away="0" home="0" inning="6"/>
    <inning_line_score away="0" home="0" inning="7"/>
    <inning_line_score away="1" home="0" inning="8"/>
    <inning_line_score away="0" home="x" inning="9"/>
  </linescore>
  <pitching team_flag="away" out="27" h="7" r="0" er="0" bb="2" so="10" hr="0" bf="32" era="0.00">
    <pitcher id="425794" name="Wainwright" name_display_first_last="Adam Wainwright" pos="P" out="18" bf="22" er="0" r="0" h="5" so="6" hr="0" bb="1" np="96" s="62" w="1" l="0" sv="0" era="0.00" win="true" note="(W, 1-0)"/>
    <pitcher id="572096" name="Rosenthal" name_display_first_last="Trevor Rosenthal" pos="P" out="3" bf="4" er="0" r="0" h="1" so="2" hr="0" bb="0" np="18" s="12" w="0" l="0" sv="1" era="0.00" save="true" note="(S, 1)"/>
  </pitching>
  <pitching team_flag="home" out="24" h="9" r="3" er="3" bb="3" so="6" hr="0" bf="38" era="3.38">
    <pitcher id="452657" name="Lester" name_display_first_last="Jon Lester" pos="P" out="13" bf="23" er="3" r="3" h="8" so="3" hr="0" bb="2" np="88" s="55" w="0" l="1" sv="0" era="6.23" loss="true" note="(L, 0-1)"/>
  </pitching>
  <batting team_flag="home" ab="30" r="0" h="7" d="1" t="0" hr="0" rbi="0" bb="2" so="10" lob="8" avg=".233">
    <batter id="656941" name="Fowler" name_display_first_last="Dexter Fowler" pos="CF" bo="100" ab="4" r="0" h="2" d="1" t="0" hr="0" rbi="0" bb="0" so="1" lob="1" sb="0" avg=".500" obp=".500"/>
    <batter id="519203" name="Rizzo" name_display_first_last="Anthony Rizzo" pos="1B" bo="300" ab="3" r="0" h="0" d="0" t="0" hr="0" rbi="0" bb="1" so="1" lob="2" sb="0" avg=".000" obp=".250"/>
  </batting>
  <batting team_flag="away" ab="35" r="3" h="9" d="2" t="0" hr="0" rbi="3" bb="3" so="6" lob="9" avg=".257">
    <batter id="572761" name="Carpenter" name_display_first_last="Matt Carpenter" pos="3B" bo="100" ab="4" r="1" h="2" d="1" t="0" hr="0" rbi="0" bb="1" so="0" lob="1" sb="0" avg=".500" obp=".500"/>
  </batting>
</boxscore>"#;

pub const LINESCORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<game id="2015/04/05/slnmlb-chnmlb-1" venue="Wrigley Field" game_type="R" status="Final" inning="9" top_inning="N" time="7:05" ampm="PM" home_team_name="Cubs" away_team_name="Cardinals" home_name_abbrev="CHC" away_name_abbrev="STL" home_team_runs="0" away_team_runs="3" home_team_hits="7" away_team_hits="9" home_team_errors="1" away_team_errors="0" home_win="0" home_loss="1" away_win="1" away_loss="0">
  <linescore inning="1" home_inning_runs="0" away_inning_runs="1"/>
  <linescore inning="2" home_inning_runs="0" away_inning_runs="0"/>
  <linescore inning="3" home_inning_runs="0" away_inning_runs="0"/>
  <linescore inning="4" home_inning_runs="0" away_inning_runs="1"/>
  <linescore inning="5" home_inning_runs="0" away_inning_runs="0"/>
  <linescore inning="6" home_inning_runs="0" away_inning_runs="0"/>
  <linescore inning="7" home_inning_runs="0" away_inning_runs="0"/>
  <linescore inning="8" home_inning_runs="0" away_inning_runs="1"/>
  <linescore inning="9" home_inning_runs="" away_inning_runs="0"/>
</game>"#;

pub const GAME_EVENTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<game>
  <inning num="1">
    <top>
      <atbat num="1" b="1" s="0" o="0" batter="572761" pitcher="452657" event="Single" des="Matt Carpenter singles on a line drive to right fielder Jorge Soler." home_team_runs="0" away_team_runs="0">
        <pitch des="Ball" type="B" pitch_type="SI" start_speed="91.8"/>
        <pitch des="In play, no out" type="X" pitch_type="FF" start_speed="93.4"/>
      </atbat>
      <action b="0" s="1" o="0" des="Matt Carpenter steals (1) 2nd base." event="Stolen Base 2B" player="572761"/>
      <atbat num="2" b="0" s="3" o="1" batter="571431" pitcher="452657" event="Strikeout" des="Jason Heyward strikes out swinging." home_team_runs="0" away_team_runs="0">
        <pitch des="Swinging Strike" type="S" pitch_type="FC" start_speed="88.9"/>
      </atbat>
    </top>
    <bottom>
      <atbat num="3" b="0" s="2" o="1" batter="656941" pitcher="425794" event="Groundout" des="Dexter Fowler grounds out." home_team_runs="0" away_team_runs="1"/>
    </bottom>
  </inning>
  <inning num="2">
    <top>
      <atbat num="4" b="2" s="2" o="1" batter="425877" pitcher="452657" event="Flyout" des="Yadier Molina flies out to center fielder Dexter Fowler." home_team_runs="0" away_team_runs="1"/>
    </top>
  </inning>
</game>"#;

pub const PLAYERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<game venue="Wrigley Field" date="April 5, 2015">
  <team type="home" id="CHN" name="Chicago Cubs">
    <player id="519203" first="Anthony" last="Rizzo" num="44" boxname="Rizzo" rl="L" bats="L" position="1B" status="A" team_abbrev="CHC" team_id="112" avg=".000" hr="0" rbi="0"/>
    <player id="452657" first="Jon" last="Lester" num="34" boxname="Lester" rl="L" bats="L" position="P" status="A" team_abbrev="CHC" team_id="112" wins="0" losses="1" era="6.23"/>
    <coach position="manager" first="Joe" last="Maddon" id="118942" num="70"/>
  </team>
  <team type="away" id="SLN" name="St. Louis Cardinals">
    <player id="425794" first="Adam" last="Wainwright" num="50" boxname="Wainwright" rl="R" bats="R" position="P" status="A" team_abbrev="STL" team_id="138" wins="1" losses="0" era="0.00"/>
  </team>
  <umpires>
    <umpire position="home" name="Joe West" id="427541" first="Joe" last="West"/>
    <umpire position="first" name="Tom Hallion" id="427220" first="Tom" last="Hallion"/>
  </umpires>
</game>"#;

pub const PROPERTIES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mlb>
  <leagues>
    <league id="1" club="mlb" club_full_name="Major League Baseball" twitter="MLB" url_prod="mlb.mlb.com">
      <teams>
        <team team_id="112" club="chc" club_full_name="Chicago Cubs" club_common_name="Cubs" team_code="chn" division="C" league="NL" venue="Wrigley Field"/>
        <team team_id="138" club="stl" club_full_name="St. Louis Cardinals" club_common_name="Cardinals" team_code="sln" division="C" league="NL" venue="Busch Stadium"/>
      </teams>
    </league>
  </leagues>
</mlb>"#;

pub const ROSTER_JSON: &str = r#"{"roster_40":{"queryResults":{"created":"2016-04-03T12:00:00","totalSize":"2","row":[
  {"player_id":"519203","name_display_first_last":"Anthony Rizzo","name_first":"Anthony","name_last":"Rizzo","jersey_number":"44","position_txt":"1B","primary_position":"3","bats":"L","throws":"L","team_id":"112","team_abbrev":"CHC","team_name":"Chicago Cubs","status_code":"A"},
  {"player_id":"592178","name_display_first_last":"Kris Bryant","name_first":"Kris","name_last":"Bryant","jersey_number":"17","position_txt":"3B","primary_position":"5","bats":"R","throws":"R","team_id":"112","team_abbrev":"CHC","team_name":"Chicago Cubs","status_code":"A"}
]}}}"#;

pub const ROSTER_SINGLE_JSON: &str = r#"{"roster_40":{"queryResults":{"created":"2016-04-03T12:00:00","totalSize":"1","row":
  {"player_id":"519203","name_display_first_last":"Anthony Rizzo","team_id":"112"}
}}}"#;

pub const STANDINGS_JSON: &str = r#"{"standings_schedule_date":{"standings_all_date_rptr":{"standings_all_date":[
  {"league_id":"103","queryResults":{"created":"2016-06-01T09:00:00","totalSize":"2","row":[
    {"team_id":"147","team_full":"New York Yankees","team_abbrev":"NYY","division_id":"201","w":"26","l":"25","pct":".510","gb":"4.0","place":"3"},
    {"team_id":"114","team_full":"Cleveland Indians","team_abbrev":"CLE","division_id":"202","w":"29","l":"22","pct":".569","gb":"-","place":"1"}
  ]}},
  {"league_id":"104","queryResults":{"created":"2016-06-01T09:00:00","totalSize":"3","row":[
    {"team_id":"112","team_full":"Chicago Cubs","team_abbrev":"CHC","division_id":"205","w":"37","l":"14","pct":".725","gb":"-","place":"1"},
    {"team_id":"138","team_full":"St. Louis Cardinals","team_abbrev":"STL","division_id":"205","w":"28","l":"25","pct":".528","gb":"10.0","place":"2"},
    {"team_id":"121","team_full":"New York Mets","team_abbrev":"NYM","division_id":"204","w":"29","l":"22","pct":".569","gb":"2.0","place":"2","elim":"-"}
  ]}}
]}}}"#;

pub const INJURIES_JSON: &str = r#"{"wsfb_news_injury":{"queryResults":{"created":"2016-06-01T09:00:00","totalSize":"2","row":[
  {"player_id":"656941","name_first":"Kyle","name_last":"Schwarber","position":"LF","team_id":"112","team_name":"Cubs","injury_status":"60-day DL","injury_desc":"Torn left ACL","due_back":"2017"},
  {"player_id":"425794","name_first":"Adam","name_last":"Wainwright","position":"P","team_id":"138","team_name":"Cardinals","injury_status":"15-day DL","injury_desc":"Left Achilles","due_back":"September"}
]}}}"#;

/// Builders for GameDay documents with custom contents.
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A `go_game` entry; teams are `(name, code, runs)`.
    pub fn final_game(game_id: &str, home: (&str, &str, u32), away: (&str, &str, u32)) -> String {
        format!(
            r#"<go_game>
    <game id="{game_id}" league="NN" status="FINAL" start_time="07:05 PM"/>
    <team name="{}" code="{}"><gameteam R="{}" H="8" E="0"/></team>
    <team name="{}" code="{}"><gameteam R="{}" H="8" E="0"/></team>
  </go_game>"#,
            home.0, home.1, home.2, away.0, away.1, away.2
        )
    }

    /// A `sg_game` entry for a game that has not started.
    pub fn scheduled_game(game_id: &str, home: (&str, &str), away: (&str, &str)) -> String {
        format!(
            r#"<sg_game>
    <game id="{game_id}" league="NN" status="PRE_GAME" start_time="01:20 PM"/>
    <team name="{}" code="{}"><gameteam R="0" H="0" E="0"/></team>
    <team name="{}" code="{}"><gameteam R="0" H="0" E="0"/></team>
  </sg_game>"#,
            home.0, home.1, away.0, away.1
        )
    }

    /// Wraps game entries in a scoreboard document.
    pub fn scoreboard(games: &[String]) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<scoreboard>\n  {}\n</scoreboard>",
            games.join("\n  ")
        )
    }

    /// Minimal box score with a single inning and the given final runs.
    pub fn box_score(home_runs: u32, away_runs: u32) -> String {
        format!(
            r#"<boxscore home_fname="Home" away_fname="Away">
  <linescore home_team_runs="{home_runs}" away_team_runs="{away_runs}">
    <inning_line_score inning="1" home="{home_runs}" away="{away_runs}"/>
  </linescore>
</boxscore>"#
        )
    }
}
