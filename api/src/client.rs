use crate::mlb::{self, MlbFeedResponse, MlbScheduleResponse, MlbTeamsResponse};
use crate::nhl::{self, NhlScheduleResponse, NhlTeamsResponse};
use crate::{GameDetail, GameSnapshot, GameState, League, MlbDetail, NhlDetail};
use chrono::{DateTime, Local, Utc};
use log::warn;
use reqwest::blocking::Client;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const NHL_API: &str = "https://statsapi.web.nhl.com/api/v1";
const MLB_API: &str = "https://statsapi.mlb.com/api/v1";
const MLB_FEED_API: &str = "https://statsapi.mlb.com/api/v1.1";

const USER_AGENT: &str = "ledboard/0.1 (led matrix scoreboard)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder the NHL linescore fields take before puck drop.
const NOT_STARTED: &str = "Not Started";

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// One league's fetch+normalize component. Two operations only: the team
/// directory (name → abbreviation) and today's games as snapshots.
pub trait LeagueAdapter {
    fn league(&self) -> League;

    fn fetch_teams(&self) -> ApiResult<HashMap<String, String>>;

    /// Today's schedule, normalized and sorted by game id ascending.
    /// A day with zero scheduled games yields exactly one no-games
    /// sentinel, never an empty sequence.
    fn fetch_games(&self) -> ApiResult<Vec<GameSnapshot>>;
}

fn build_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

fn get_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> ApiResult<T> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| ApiError::Network(e, url.to_owned()))?;

    match response.error_for_status() {
        Ok(res) => res
            .json::<T>()
            .map_err(|e| ApiError::Parsing(e, url.to_owned())),
        Err(e) => Err(ApiError::Api(e, url.to_owned())),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Scores only exist once a game is underway; postponed games keep stale
/// numbers upstream, so both cases drop them.
fn has_scores(state: GameState, detailed_status: &str) -> bool {
    !matches!(state, GameState::NotStarted | GameState::Postponed)
        && detailed_status != "Postponed"
}

// ---------------------------------------------------------------------------
// NHL adapter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct NhlApi {
    client: Client,
    base_url: String,
}

impl NhlApi {
    pub fn new() -> Self {
        Self::with_base_url(NHL_API.to_owned())
    }

    /// Base URL override for tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self { client: build_client(), base_url }
    }
}

impl Default for NhlApi {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueAdapter for NhlApi {
    fn league(&self) -> League {
        League::Nhl
    }

    fn fetch_teams(&self) -> ApiResult<HashMap<String, String>> {
        let url = format!("{}/teams", self.base_url);
        let raw: NhlTeamsResponse = get_json(&self.client, &url)?;
        Ok(raw
            .teams
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| Some((t.name?, t.abbreviation?)))
            .collect())
    }

    fn fetch_games(&self) -> ApiResult<Vec<GameSnapshot>> {
        // The schedule omits abbreviations; build the directory first.
        let teams = self.fetch_teams()?;

        let today = Local::now().format("%Y-%m-%d");
        let url = format!(
            "{}/schedule?expand=schedule.linescore&date={today}",
            self.base_url
        );
        let raw: NhlScheduleResponse = get_json(&self.client, &url)?;

        let mut wire: Vec<nhl::NhlGame> = raw
            .dates
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|d| d.games)
            .unwrap_or_default();
        // Sort on the numeric id so stringifying it later cannot perturb
        // display order as games end.
        wire.sort_by_key(|g| g.game_pk.unwrap_or(u64::MAX));

        let mut games = Vec::with_capacity(wire.len());
        for game in &wire {
            match map_nhl_game(game, &teams) {
                Ok(snapshot) => games.push(snapshot),
                Err(field) => {
                    warn!("nhl: skipping game {:?}: missing {field}", game.game_pk)
                }
            }
        }

        if games.is_empty() {
            games.push(GameSnapshot::no_games(League::Nhl));
        }
        Ok(games)
    }
}

fn map_nhl_game(
    game: &nhl::NhlGame,
    teams: &HashMap<String, String>,
) -> Result<GameSnapshot, &'static str> {
    let id = game.game_pk.ok_or("gamePk")?.to_string();

    let status = game.status.as_ref().ok_or("status")?;
    let state = GameState::from_abstract(
        status
            .abstract_game_state
            .as_deref()
            .ok_or("status.abstractGameState")?,
    );
    let detailed_status = status.detailed_state.clone().unwrap_or_default();

    let sides = game.teams.as_ref().ok_or("teams")?;
    let home = sides.home.as_ref().ok_or("teams.home")?;
    let away = sides.away.as_ref().ok_or("teams.away")?;
    let home_team = home
        .team
        .as_ref()
        .and_then(|t| t.name.clone())
        .ok_or("teams.home.team.name")?;
    let away_team = away
        .team
        .as_ref()
        .and_then(|t| t.name.clone())
        .ok_or("teams.away.team.name")?;
    let home_abbrev = teams.get(&home_team).cloned().ok_or("home abbreviation")?;
    let away_abbrev = teams.get(&away_team).cloned().ok_or("away abbreviation")?;

    let (home_score, away_score) = if has_scores(state, &detailed_status) {
        (home.score, away.score)
    } else {
        (None, None)
    };

    let linescore = game.linescore.clone().unwrap_or_default();
    let detail = NhlDetail {
        period_number: linescore.current_period.unwrap_or(0),
        period_name: linescore
            .current_period_ordinal
            .unwrap_or_else(|| NOT_STARTED.to_owned()),
        time_remaining: linescore
            .current_period_time_remaining
            .unwrap_or_else(|| NOT_STARTED.to_owned()),
    };

    Ok(GameSnapshot {
        id,
        league: League::Nhl,
        home_team,
        home_abbrev,
        away_team,
        away_abbrev,
        state,
        detailed_status,
        home_score,
        away_score,
        start_time: game.game_date.as_deref().and_then(parse_timestamp),
        detail: Some(GameDetail::Nhl(detail)),
    })
}

// ---------------------------------------------------------------------------
// MLB adapter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MlbApi {
    client: Client,
    base_url: String,
    feed_url: String,
}

impl MlbApi {
    pub fn new() -> Self {
        Self::with_base_urls(MLB_API.to_owned(), MLB_FEED_API.to_owned())
    }

    /// Base URL overrides for tests. The live feed lives on a different API
    /// version than the schedule, hence two bases.
    pub fn with_base_urls(base_url: String, feed_url: String) -> Self {
        Self { client: build_client(), base_url, feed_url }
    }
}

impl Default for MlbApi {
    fn default() -> Self {
        Self::new()
    }
}

impl LeagueAdapter for MlbApi {
    fn league(&self) -> League {
        League::Mlb
    }

    fn fetch_teams(&self) -> ApiResult<HashMap<String, String>> {
        let url = format!("{}/teams?sportId=1", self.base_url);
        let raw: MlbTeamsResponse = get_json(&self.client, &url)?;
        Ok(raw
            .teams
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| Some((t.name?, t.abbreviation?)))
            .collect())
    }

    fn fetch_games(&self) -> ApiResult<Vec<GameSnapshot>> {
        let teams = self.fetch_teams()?;

        let url = format!("{}/schedule?sportId=1", self.base_url);
        let raw: MlbScheduleResponse = get_json(&self.client, &url)?;

        let mut pks: Vec<u64> = raw
            .dates
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|d| d.games)
            .unwrap_or_default()
            .iter()
            .filter_map(|g| g.game_pk)
            .collect();
        pks.sort_unstable();

        // The schedule is ids only; everything else comes from the per-game
        // live feed. A feed that won't map skips that one game; a feed that
        // won't fetch fails the attempt and lands in the retry loop.
        let mut games = Vec::with_capacity(pks.len());
        for pk in pks {
            let feed_url = format!("{}/game/{pk}/feed/live", self.feed_url);
            let feed: MlbFeedResponse = get_json(&self.client, &feed_url)?;
            match map_mlb_feed(pk, &feed, &teams) {
                Ok(snapshot) => games.push(snapshot),
                Err(field) => warn!("mlb: skipping game {pk}: missing {field}"),
            }
        }

        if games.is_empty() {
            games.push(GameSnapshot::no_games(League::Mlb));
        }
        Ok(games)
    }
}

fn map_mlb_feed(
    pk: u64,
    feed: &MlbFeedResponse,
    teams: &HashMap<String, String>,
) -> Result<GameSnapshot, &'static str> {
    let game_data = feed.game_data.as_ref().ok_or("gameData")?;

    let status = game_data.status.as_ref().ok_or("gameData.status")?;
    let state = GameState::from_abstract(
        status
            .abstract_game_state
            .as_deref()
            .ok_or("status.abstractGameState")?,
    );
    let detailed_status = status.detailed_state.clone().unwrap_or_default();

    let feed_teams = game_data.teams.as_ref().ok_or("gameData.teams")?;
    let home = feed_teams.home.as_ref().ok_or("teams.home")?;
    let away = feed_teams.away.as_ref().ok_or("teams.away")?;
    let home_team = home.name.clone().ok_or("teams.home.name")?;
    let away_team = away.name.clone().ok_or("teams.away.name")?;
    let home_abbrev = home
        .abbreviation
        .clone()
        .or_else(|| teams.get(&home_team).cloned())
        .ok_or("home abbreviation")?;
    let away_abbrev = away
        .abbreviation
        .clone()
        .or_else(|| teams.get(&away_team).cloned())
        .ok_or("away abbreviation")?;

    let live = feed.live_data.clone().unwrap_or_default();
    let linescore = live.linescore.unwrap_or_default();
    let offense = linescore.offense.clone().unwrap_or_default();

    let (home_runs, home_hits) = linescore
        .teams
        .as_ref()
        .and_then(|t| t.home.as_ref())
        .map(|s| (s.runs, s.hits.unwrap_or(0)))
        .unwrap_or((None, 0));
    let (away_runs, away_hits) = linescore
        .teams
        .as_ref()
        .and_then(|t| t.away.as_ref())
        .map(|s| (s.runs, s.hits.unwrap_or(0)))
        .unwrap_or((None, 0));

    let boxscore_teams = live.boxscore.unwrap_or_default().teams;
    let fielding_errors = |side: Option<&mlb::MlbBoxscoreTeam>| -> u32 {
        side.and_then(|t| t.team_stats.as_ref())
            .and_then(|s| s.fielding.as_ref())
            .and_then(|f| f.errors)
            .unwrap_or(0)
    };
    let home_errors = fielding_errors(boxscore_teams.as_ref().and_then(|t| t.home.as_ref()));
    let away_errors = fielding_errors(boxscore_teams.as_ref().and_then(|t| t.away.as_ref()));

    let pitchers = game_data.probable_pitchers.clone().unwrap_or_default();
    let detail = MlbDetail {
        inning: linescore.current_inning.unwrap_or(0),
        inning_state: linescore.inning_state.clone().unwrap_or_default(),
        balls: linescore.balls.unwrap_or(0),
        strikes: linescore.strikes.unwrap_or(0),
        outs: linescore.outs.unwrap_or(0),
        on_first: offense.first.is_some(),
        on_second: offense.second.is_some(),
        on_third: offense.third.is_some(),
        home_hits,
        away_hits,
        home_errors,
        away_errors,
        home_pitcher: pitcher_name(game_data, pitchers.home.as_ref()),
        away_pitcher: pitcher_name(game_data, pitchers.away.as_ref()),
    };

    let (home_score, away_score) = if has_scores(state, &detailed_status) {
        (home_runs, away_runs)
    } else {
        (None, None)
    };

    Ok(GameSnapshot {
        id: pk.to_string(),
        league: League::Mlb,
        home_team,
        home_abbrev,
        away_team,
        away_abbrev,
        state,
        detailed_status,
        home_score,
        away_score,
        start_time: game_data
            .datetime
            .as_ref()
            .and_then(|d| d.date_time.as_deref())
            .and_then(parse_timestamp),
        detail: Some(GameDetail::Mlb(detail)),
    })
}

fn pitcher_name(game_data: &mlb::MlbGameData, pitcher: Option<&mlb::MlbPitcherRef>) -> String {
    pitcher
        .and_then(|p| p.id)
        .and_then(|id| game_data.players.get(&format!("ID{id}")))
        .and_then(|p| p.last_name.clone())
        .unwrap_or_else(|| "TBD".to_owned())
}
