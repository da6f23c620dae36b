//! Layout pieces shared by both leagues, plus the league-independent
//! loading / error / no-games-today screens.

use super::{Color, DrawOp, FontId, ImageSource, RED, WHITE};
use chrono::{DateTime, Local, Utc};
use scoreboard_api::{GameSnapshot, League};

/// First column clear of the logo region, usable for centered text.
pub const FIRST_MIDDLE_COL: i32 = 21;

/// Away logo on the left, home on the right, centered beside the text
/// region.
pub fn team_logos(game: &GameSnapshot) -> Vec<DrawOp> {
    vec![
        DrawOp::Image {
            x: 2,
            y: 8,
            max_w: 20,
            max_h: 20,
            source: ImageSource::TeamLogo {
                league: game.league,
                abbrev: game.away_abbrev.clone(),
            },
        },
        DrawOp::Image {
            x: 42,
            y: 8,
            max_w: 20,
            max_h: 20,
            source: ImageSource::TeamLogo {
                league: game.league,
                abbrev: game.home_abbrev.clone(),
            },
        },
    ]
}

pub fn start_time_text(start: Option<DateTime<Utc>>) -> String {
    match start {
        Some(t) => t.with_timezone(&Local).format("%-I:%M %p").to_string(),
        None => "TBD".to_owned(),
    }
}

/// Score fills: the leading team is red, ties leave both white.
pub fn score_fills(away: u32, home: u32) -> (Color, Color) {
    if away > home {
        (RED, WHITE)
    } else if home > away {
        (WHITE, RED)
    } else {
        (WHITE, WHITE)
    }
}

/// "Final" with a tall F and hand-kerned small letters.
pub fn final_lettering(x: i32, y: i32) -> Vec<DrawOp> {
    vec![
        DrawOp::text(x, y, FontId::MedReg, WHITE, "F"),
        DrawOp::text(x + 4, y + 2, FontId::SmallReg, WHITE, "i"),
        DrawOp::text(x + 8, y + 2, FontId::SmallReg, WHITE, "n"),
        DrawOp::text(x + 13, y + 2, FontId::SmallReg, WHITE, "a"),
        DrawOp::text(x + 16, y + 2, FontId::SmallReg, WHITE, "l"),
    ]
}

/// Both league logos while the first fetch is in flight.
pub fn loading_screen() -> Vec<DrawOp> {
    vec![
        DrawOp::Image {
            x: 1,
            y: 1,
            max_w: 40,
            max_h: 30,
            source: ImageSource::LeagueLogo(League::Nhl),
        },
        DrawOp::Image {
            x: 30,
            y: 8,
            max_w: 30,
            max_h: 24,
            source: ImageSource::LeagueLogo(League::Mlb),
        },
    ]
}

pub fn error_screen(msg: &str) -> Vec<DrawOp> {
    vec![
        DrawOp::text(32, 0, FontId::MedReg, WHITE, "Error"),
        DrawOp::text(32, 10, FontId::MedReg, WHITE, msg),
    ]
}

/// Shown when every league reports a no-games sentinel.
pub fn no_games_today() -> Vec<DrawOp> {
    vec![
        DrawOp::Image {
            x: 1,
            y: 1,
            max_w: 25,
            max_h: 15,
            source: ImageSource::LeagueLogo(League::Nhl),
        },
        DrawOp::Image {
            x: 1,
            y: 20,
            max_w: 20,
            max_h: 11,
            source: ImageSource::LeagueLogo(League::Mlb),
        },
        DrawOp::text(32, 0, FontId::MedReg, WHITE, "No"),
        DrawOp::text(32, 10, FontId::MedReg, WHITE, "Games"),
        DrawOp::text(32, 20, FontId::MedReg, WHITE, "Today"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_is_red_ties_are_white() {
        assert_eq!(score_fills(3, 1), (RED, WHITE));
        assert_eq!(score_fills(1, 3), (WHITE, RED));
        assert_eq!(score_fills(2, 2), (WHITE, WHITE));
    }

    #[test]
    fn missing_start_time_reads_tbd() {
        assert_eq!(start_time_text(None), "TBD");
    }

    #[test]
    fn final_lettering_spells_final() {
        let word: String = final_lettering(21, 0)
            .iter()
            .map(|op| match op {
                DrawOp::Text { text, .. } => text.clone(),
                other => panic!("unexpected op {other:?}"),
            })
            .collect();
        assert_eq!(word, "Final");
    }
}
