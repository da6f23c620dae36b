//! End-to-end: two adapters → aggregator → classifier.

use scoreboard_api::aggregator::Aggregator;
use scoreboard_api::client::{ApiError, LeagueAdapter};
use scoreboard_api::{GameSnapshot, GameState, League, ScreenVariant};
use std::collections::HashMap;
use std::time::Duration;

struct FixedAdapter {
    league: League,
    games: Vec<GameSnapshot>,
}

impl LeagueAdapter for FixedAdapter {
    fn league(&self) -> League {
        self.league
    }

    fn fetch_teams(&self) -> Result<HashMap<String, String>, ApiError> {
        Ok(HashMap::new())
    }

    fn fetch_games(&self) -> Result<Vec<GameSnapshot>, ApiError> {
        Ok(self.games.clone())
    }
}

fn game(id: &str, state: GameState) -> GameSnapshot {
    GameSnapshot {
        id: id.to_owned(),
        league: League::Nhl,
        home_team: "Toronto Maple Leafs".to_owned(),
        home_abbrev: "TOR".to_owned(),
        away_team: "Boston Bruins".to_owned(),
        away_abbrev: "BOS".to_owned(),
        state,
        detailed_status: String::new(),
        home_score: Some(3),
        away_score: Some(1),
        start_time: None,
        detail: None,
    }
}

#[test]
fn aggregate_output_is_the_union_and_classifies_per_game() {
    let nhl = FixedAdapter {
        league: League::Nhl,
        games: vec![game("2", GameState::InProgress), game("5", GameState::Final)],
    };
    let mlb = FixedAdapter {
        league: League::Mlb,
        games: vec![GameSnapshot::no_games(League::Mlb)],
    };

    let aggregator =
        Aggregator::new(vec![Box::new(nhl), Box::new(mlb)]).with_retry(1, Duration::ZERO);
    let games = aggregator.fetch_all().expect("fetch should succeed");

    // Post-shuffle order is nondeterministic; the multiset of ids is not.
    assert_eq!(games.len(), 3);
    let mut ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["2", "5", "NO_GAMES"]);

    for g in &games {
        let variant = ScreenVariant::classify(g);
        match g.id.as_str() {
            "2" => assert_eq!(variant, ScreenVariant::InProgress),
            "5" => assert_eq!(variant, ScreenVariant::Final),
            "NO_GAMES" => assert_eq!(variant, ScreenVariant::NoGames),
            other => panic!("unexpected game id {other}"),
        }
    }
}
