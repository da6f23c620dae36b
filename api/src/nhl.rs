/// NHL stats API raw wire types — serde shapes for deserializing responses.
/// Endpoints: /api/v1/schedule?expand=schedule.linescore&date=YYYY-MM-DD
/// and /api/v1/teams. These map to the domain types via client.rs.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NhlScheduleResponse {
    /// Empty (or absent) on days with no scheduled games.
    pub dates: Option<Vec<NhlScheduleDate>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NhlScheduleDate {
    #[serde(default)]
    pub games: Vec<NhlGame>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NhlGame {
    pub game_pk: Option<u64>,
    pub game_date: Option<String>, // ISO 8601
    pub status: Option<NhlGameStatus>,
    pub teams: Option<NhlGameTeams>,
    /// Only present with expand=schedule.linescore; sparse before puck drop.
    pub linescore: Option<NhlLinescore>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NhlGameStatus {
    pub abstract_game_state: Option<String>, // "Preview" | "Live" | "Final"
    pub detailed_state: Option<String>,      // "Scheduled", "Postponed", ...
}

#[derive(Debug, Deserialize, Clone)]
pub struct NhlGameTeams {
    pub home: Option<NhlGameSide>,
    pub away: Option<NhlGameSide>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NhlGameSide {
    pub team: Option<NhlTeamRef>,
    pub score: Option<u32>,
}

/// The schedule carries team names but not abbreviations; those come from
/// the teams directory endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct NhlTeamRef {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NhlLinescore {
    pub current_period: Option<u32>,
    pub current_period_ordinal: Option<String>, // "1st", "OT", "SO"
    pub current_period_time_remaining: Option<String>, // "12:34", "END"
}

// ---------------------------------------------------------------------------
// Teams directory
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NhlTeamsResponse {
    pub teams: Option<Vec<NhlTeam>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NhlTeam {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}
