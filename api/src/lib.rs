pub mod aggregator;
pub mod client;
pub mod mlb;
pub mod nhl;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of either stats API's wire format
// ---------------------------------------------------------------------------

/// Game id an adapter emits when its league has nothing scheduled today.
pub const NO_GAMES_ID: &str = "NO_GAMES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Nhl,
    Mlb,
}

impl League {
    /// Lowercase tag used in logo asset paths and log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            League::Nhl => "nhl",
            League::Mlb => "mlb",
        }
    }
}

/// Normalized form of the generic ("abstract") status both stats APIs share.
/// The raw detailed status string travels separately on the snapshot because
/// it is authoritative for postponement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Final,
    Postponed,
}

impl GameState {
    pub fn from_abstract(s: &str) -> Self {
        match s {
            "Preview" => GameState::NotStarted,
            "Final" => GameState::Final,
            "Postponed" => GameState::Postponed,
            // "Live" plus anything the API grows later; an unknown state on a
            // scheduled game still renders sanely as in-progress.
            _ => GameState::InProgress,
        }
    }
}

/// One game's state at a single fetch moment. Rebuilt from scratch every
/// cycle and discarded after rendering; no history is kept.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Upstream gamePk as a string; `NO_GAMES_ID` for the sentinel. Adapters
    /// sort on the numeric id before stringifying, so display order is
    /// stable across refreshes.
    pub id: String,
    pub league: League,
    pub home_team: String,
    pub home_abbrev: String,
    pub away_team: String,
    pub away_abbrev: String,
    pub state: GameState,
    /// Raw detailed status ("Scheduled", "In Progress", "Postponed", ...).
    pub detailed_status: String,
    /// None until the game is underway; postponed games also carry none.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub start_time: Option<DateTime<Utc>>,
    /// League-specific payload, forwarded untouched to the renderer. The
    /// classifier never reads it.
    pub detail: Option<GameDetail>,
}

impl GameSnapshot {
    /// The sentinel a league adapter returns instead of an empty sequence.
    pub fn no_games(league: League) -> Self {
        Self {
            id: NO_GAMES_ID.to_owned(),
            league,
            home_team: String::new(),
            home_abbrev: String::new(),
            away_team: String::new(),
            away_abbrev: String::new(),
            state: GameState::NotStarted,
            detailed_status: String::new(),
            home_score: None,
            away_score: None,
            start_time: None,
            detail: None,
        }
    }

    pub fn is_no_games(&self) -> bool {
        self.id == NO_GAMES_ID
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameDetail {
    Nhl(NhlDetail),
    Mlb(MlbDetail),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NhlDetail {
    pub period_number: u32,
    /// "1st", "2nd", "OT", "SO" — "Not Started" before puck drop.
    pub period_name: String,
    /// "MM:SS", or "END" during intermission.
    pub time_remaining: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MlbDetail {
    pub inning: u32,
    /// "Top", "Bottom", "Middle", "End".
    pub inning_state: String,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
    pub on_first: bool,
    pub on_second: bool,
    pub on_third: bool,
    pub home_hits: u32,
    pub away_hits: u32,
    pub home_errors: u32,
    pub away_errors: u32,
    /// Probable pitcher surnames; "TBD" when unannounced.
    pub home_pitcher: String,
    pub away_pitcher: String,
}

// ---------------------------------------------------------------------------
// Status classifier
// ---------------------------------------------------------------------------

/// The screen layout selected for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenVariant {
    NoGames,
    Postponed,
    NotStarted,
    Final,
    InProgress,
}

impl ScreenVariant {
    /// Pick the screen for a snapshot. First match wins, and the order is
    /// load-bearing: the detailed status string is authoritative over the
    /// generic state, so a postponed game the API still reports as
    /// "Preview" classifies as Postponed, not NotStarted.
    pub fn classify(snapshot: &GameSnapshot) -> Self {
        if snapshot.id == NO_GAMES_ID {
            ScreenVariant::NoGames
        } else if snapshot.detailed_status == "Postponed"
            || snapshot.state == GameState::Postponed
        {
            ScreenVariant::Postponed
        } else if snapshot.state == GameState::NotStarted {
            ScreenVariant::NotStarted
        } else if snapshot.state == GameState::Final {
            ScreenVariant::Final
        } else {
            ScreenVariant::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: GameState, detailed: &str) -> GameSnapshot {
        GameSnapshot {
            id: "2022020001".to_owned(),
            league: League::Nhl,
            home_team: "Toronto Maple Leafs".to_owned(),
            home_abbrev: "TOR".to_owned(),
            away_team: "Boston Bruins".to_owned(),
            away_abbrev: "BOS".to_owned(),
            state,
            detailed_status: detailed.to_owned(),
            home_score: Some(2),
            away_score: Some(1),
            start_time: None,
            detail: None,
        }
    }

    #[test]
    fn classify_matches_each_state() {
        assert_eq!(
            ScreenVariant::classify(&snapshot(GameState::NotStarted, "Scheduled")),
            ScreenVariant::NotStarted
        );
        assert_eq!(
            ScreenVariant::classify(&snapshot(GameState::InProgress, "In Progress")),
            ScreenVariant::InProgress
        );
        assert_eq!(
            ScreenVariant::classify(&snapshot(GameState::Final, "Final")),
            ScreenVariant::Final
        );
        assert_eq!(
            ScreenVariant::classify(&snapshot(GameState::Postponed, "Postponed")),
            ScreenVariant::Postponed
        );
    }

    #[test]
    fn postponed_detail_beats_not_started_state() {
        // The schedule can keep reporting "Preview" after a postponement;
        // the detailed status must win.
        let game = snapshot(GameState::NotStarted, "Postponed");
        assert_eq!(ScreenVariant::classify(&game), ScreenVariant::Postponed);
    }

    #[test]
    fn sentinel_wins_regardless_of_other_fields() {
        let mut game = snapshot(GameState::Final, "Postponed");
        game.id = NO_GAMES_ID.to_owned();
        game.home_score = None;
        assert_eq!(ScreenVariant::classify(&game), ScreenVariant::NoGames);
    }

    #[test]
    fn classify_is_pure() {
        let game = snapshot(GameState::InProgress, "In Progress");
        assert_eq!(ScreenVariant::classify(&game), ScreenVariant::classify(&game));
    }

    #[test]
    fn no_games_sentinel_has_no_scores_or_detail() {
        let sentinel = GameSnapshot::no_games(League::Mlb);
        assert!(sentinel.is_no_games());
        assert_eq!(sentinel.league, League::Mlb);
        assert!(sentinel.home_score.is_none());
        assert!(sentinel.away_score.is_none());
        assert!(sentinel.detail.is_none());
    }

    #[test]
    fn unknown_abstract_state_reads_as_in_progress() {
        assert_eq!(GameState::from_abstract("Live"), GameState::InProgress);
        assert_eq!(GameState::from_abstract("Warmup?"), GameState::InProgress);
        assert_eq!(GameState::from_abstract("Preview"), GameState::NotStarted);
    }
}
