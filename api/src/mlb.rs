/// MLB stats API raw wire types.
/// The schedule endpoint (/api/v1/schedule?sportId=1) lists little more than
/// game ids; scores, status and boxscore detail come from the per-game live
/// feed (/api/v1.1/game/{pk}/feed/live). Teams directory:
/// /api/v1/teams?sportId=1.
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbScheduleResponse {
    pub dates: Option<Vec<MlbScheduleDate>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbScheduleDate {
    #[serde(default)]
    pub games: Vec<MlbScheduledGame>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbScheduledGame {
    pub game_pk: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbTeamsResponse {
    pub teams: Option<Vec<MlbTeam>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbTeam {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

// ---------------------------------------------------------------------------
// Live feed
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbFeedResponse {
    pub game_data: Option<MlbGameData>,
    pub live_data: Option<MlbLiveData>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbGameData {
    pub status: Option<MlbStatus>,
    pub teams: Option<MlbFeedTeams>,
    pub datetime: Option<MlbDatetime>,
    pub probable_pitchers: Option<MlbProbablePitchers>,
    /// Keyed "ID{personId}"; resolves probable-pitcher ids to names.
    #[serde(default)]
    pub players: HashMap<String, MlbPlayer>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbStatus {
    pub abstract_game_state: Option<String>, // "Preview" | "Live" | "Final"
    pub detailed_state: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbFeedTeams {
    pub home: Option<MlbFeedTeam>,
    pub away: Option<MlbFeedTeam>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbFeedTeam {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbDatetime {
    pub date_time: Option<String>, // ISO 8601
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbProbablePitchers {
    pub home: Option<MlbPitcherRef>,
    pub away: Option<MlbPitcherRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbPitcherRef {
    pub id: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbPlayer {
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbLiveData {
    pub linescore: Option<MlbLinescore>,
    pub boxscore: Option<MlbBoxscore>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbLinescore {
    pub current_inning: Option<u32>,
    pub inning_state: Option<String>, // "Top" | "Bottom" | "Middle" | "End"
    pub balls: Option<u8>,
    pub strikes: Option<u8>,
    pub outs: Option<u8>,
    pub teams: Option<MlbLinescoreTeams>,
    pub offense: Option<MlbOffense>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbLinescoreTeams {
    pub home: Option<MlbLinescoreSide>,
    pub away: Option<MlbLinescoreSide>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbLinescoreSide {
    pub runs: Option<u32>,
    pub hits: Option<u32>,
}

/// Base occupancy. The feed nests a whole player object under each occupied
/// base; only presence matters here.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbOffense {
    pub first: Option<serde_json::Value>,
    pub second: Option<serde_json::Value>,
    pub third: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbBoxscore {
    pub teams: Option<MlbBoxscoreTeams>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlbBoxscoreTeams {
    pub home: Option<MlbBoxscoreTeam>,
    pub away: Option<MlbBoxscoreTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MlbBoxscoreTeam {
    pub team_stats: Option<MlbTeamStats>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbTeamStats {
    pub fielding: Option<MlbFielding>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MlbFielding {
    pub errors: Option<u32>,
}
