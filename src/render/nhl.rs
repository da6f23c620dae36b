//! NHL screen layouts, one per variant.

use super::common::{
    FIRST_MIDDLE_COL, final_lettering, score_fills, start_time_text, team_logos,
};
use super::{DrawOp, FontId, ImageSource, WHITE};
use scoreboard_api::{GameDetail, GameSnapshot, League, NhlDetail, ScreenVariant};

pub fn layout(game: &GameSnapshot, variant: ScreenVariant) -> Vec<DrawOp> {
    match variant {
        ScreenVariant::NoGames => no_games(),
        ScreenVariant::Postponed => postponed(game),
        ScreenVariant::NotStarted => not_started(game),
        ScreenVariant::Final => game_over(game),
        ScreenVariant::InProgress => in_progress(game),
    }
}

fn nhl_detail(game: &GameSnapshot) -> Option<&NhlDetail> {
    match &game.detail {
        Some(GameDetail::Nhl(detail)) => Some(detail),
        _ => None,
    }
}

fn no_games() -> Vec<DrawOp> {
    vec![
        DrawOp::Image {
            x: 16,
            y: 2,
            max_w: 32,
            max_h: 18,
            source: ImageSource::LeagueLogo(League::Nhl),
        },
        DrawOp::text(12, 22, FontId::SmallReg, WHITE, "No games"),
    ]
}

fn not_started(game: &GameSnapshot) -> Vec<DrawOp> {
    let mut ops = team_logos(game);
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 1,
        12,
        FontId::SmallReg,
        WHITE,
        start_time_text(game.start_time),
    ));
    ops
}

fn postponed(game: &GameSnapshot) -> Vec<DrawOp> {
    let mut ops = team_logos(game);
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 2,
        0,
        FontId::MedReg,
        WHITE,
        "PPD",
    ));
    ops
}

fn game_over(game: &GameSnapshot) -> Vec<DrawOp> {
    let mut ops = team_logos(game);
    ops.extend(final_lettering(FIRST_MIDDLE_COL + 1, 0));

    // Tag overtime and shootout finishes under the lettering.
    if let Some(detail) = nhl_detail(game) {
        if detail.period_name == "OT" || detail.period_name == "SO" {
            ops.push(DrawOp::text(
                FIRST_MIDDLE_COL + 6,
                9,
                FontId::MedReg,
                WHITE,
                &detail.period_name,
            ));
        } else if detail.period_number > 4 {
            // 2OT or later.
            ops.push(DrawOp::text(
                FIRST_MIDDLE_COL + 3,
                9,
                FontId::MedReg,
                WHITE,
                &detail.period_name,
            ));
        }
    }

    ops.extend(score(game));
    ops
}

fn in_progress(game: &GameSnapshot) -> Vec<DrawOp> {
    let mut ops = team_logos(game);
    if let Some(detail) = nhl_detail(game) {
        ops.extend(period(detail));
    }
    ops.extend(score(game));
    ops
}

fn score(game: &GameSnapshot) -> Vec<DrawOp> {
    let away = game.away_score.unwrap_or(0);
    let home = game.home_score.unwrap_or(0);
    let (away_fill, home_fill) = score_fills(away, home);
    vec![
        DrawOp::text(26, -1, FontId::LargeBold, away_fill, away.to_string()),
        DrawOp::text(26, 16, FontId::LargeBold, home_fill, home.to_string()),
    ]
}

/// Period ordinal with hand-kerned suffix letters, plus the clock line.
fn period(detail: &NhlDetail) -> Vec<DrawOp> {
    let fmc = FIRST_MIDDLE_COL;
    let mut ops = Vec::new();

    match detail.period_number {
        1 => {
            ops.push(DrawOp::text(fmc + 5, 0, FontId::MedReg, WHITE, "1"));
            ops.push(DrawOp::text(fmc + 9, 0, FontId::SmallReg, WHITE, "s"));
            ops.push(DrawOp::text(fmc + 13, 0, FontId::SmallReg, WHITE, "t"));
        }
        2 => {
            ops.push(DrawOp::text(fmc + 4, 0, FontId::MedReg, WHITE, "2"));
            ops.push(DrawOp::text(fmc + 10, 0, FontId::SmallReg, WHITE, "n"));
            ops.push(DrawOp::text(fmc + 14, 0, FontId::SmallReg, WHITE, "d"));
        }
        3 => {
            ops.push(DrawOp::text(fmc + 4, 0, FontId::MedReg, WHITE, "3"));
            ops.push(DrawOp::text(fmc + 10, 0, FontId::SmallReg, WHITE, "r"));
            ops.push(DrawOp::text(fmc + 14, 0, FontId::SmallReg, WHITE, "d"));
        }
        _ if detail.period_name == "OT" || detail.period_name == "SO" => {
            ops.push(DrawOp::text(
                fmc + 5,
                0,
                FontId::MedReg,
                WHITE,
                &detail.period_name,
            ));
        }
        _ => {
            // 2OT or later; the wider label starts further left.
            ops.push(DrawOp::text(
                fmc + 3,
                0,
                FontId::MedReg,
                WHITE,
                &detail.period_name,
            ));
        }
    }

    // The clock is hidden during shootouts, and "END" means intermission.
    if detail.period_name != "SO" {
        if detail.time_remaining == "END" {
            ops.push(DrawOp::text(fmc + 2, 8, FontId::MedReg, WHITE, "INT"));
        } else {
            ops.extend(time_remaining(&detail.time_remaining));
        }
    }

    ops
}

/// MM:SS clock with digit spacing that depends on the leading minute digit.
fn time_remaining(time: &str) -> Vec<DrawOp> {
    let fmc = FIRST_MIDDLE_COL;
    let c: Vec<char> = time.chars().collect();
    if c.len() != 5 {
        // Anything that isn't MM:SS (e.g. a placeholder) draws verbatim.
        return vec![DrawOp::text(fmc + 1, 9, FontId::SmallReg, WHITE, time)];
    }

    let digit = |x: i32, ch: char| DrawOp::text(x, 9, FontId::SmallReg, WHITE, ch.to_string());
    let colon = |x: i32| {
        [
            DrawOp::Rect { x0: x, y0: 12, x1: x, y1: 12, color: WHITE },
            DrawOp::Rect { x0: x, y0: 14, x1: x, y1: 14, color: WHITE },
        ]
    };

    let mut ops = Vec::new();
    match c[0] {
        '2' => {
            ops.push(digit(fmc + 1, c[0]));
            ops.push(digit(fmc + 5, c[1]));
            ops.extend(colon(fmc + 10));
            ops.push(digit(fmc + 12, c[3]));
            ops.push(digit(fmc + 16, c[4]));
        }
        '1' => {
            ops.push(digit(fmc, c[0]));
            ops.push(digit(fmc + 5, c[1]));
            ops.extend(colon(fmc + 10));
            ops.push(digit(fmc + 12, c[3]));
            ops.push(digit(fmc + 17, c[4]));
        }
        _ => {
            // Under ten minutes: drop the leading zero.
            ops.push(digit(fmc + 3, c[1]));
            ops.extend(colon(fmc + 8));
            ops.push(digit(fmc + 10, c[3]));
            ops.push(digit(fmc + 15, c[4]));
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_api::GameState;

    fn game(state: GameState, detail: NhlDetail) -> GameSnapshot {
        GameSnapshot {
            id: "2022020001".to_owned(),
            league: League::Nhl,
            home_team: "Toronto Maple Leafs".to_owned(),
            home_abbrev: "TOR".to_owned(),
            away_team: "Boston Bruins".to_owned(),
            away_abbrev: "BOS".to_owned(),
            state,
            detailed_status: String::new(),
            home_score: Some(2),
            away_score: Some(3),
            start_time: None,
            detail: Some(GameDetail::Nhl(detail)),
        }
    }

    fn texts(ops: &[DrawOp]) -> Vec<(&str, i32, i32)> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_period_is_kerned_by_hand() {
        let detail = NhlDetail {
            period_number: 1,
            period_name: "1st".to_owned(),
            time_remaining: "15:02".to_owned(),
        };
        let ops = layout(&game(GameState::InProgress, detail), ScreenVariant::InProgress);
        let texts = texts(&ops);
        assert!(texts.contains(&("1", 26, 0)));
        assert!(texts.contains(&("s", 30, 0)));
        assert!(texts.contains(&("t", 34, 0)));
    }

    #[test]
    fn intermission_replaces_the_clock() {
        let detail = NhlDetail {
            period_number: 2,
            period_name: "2nd".to_owned(),
            time_remaining: "END".to_owned(),
        };
        let ops = layout(&game(GameState::InProgress, detail), ScreenVariant::InProgress);
        let texts = texts(&ops);
        assert!(texts.contains(&("INT", 23, 8)));
        assert!(!texts.iter().any(|(t, _, _)| t.contains(':')));
    }

    #[test]
    fn shootout_hides_the_clock() {
        let detail = NhlDetail {
            period_number: 5,
            period_name: "SO".to_owned(),
            time_remaining: "00:00".to_owned(),
        };
        let ops = layout(&game(GameState::InProgress, detail), ScreenVariant::InProgress);
        let texts = texts(&ops);
        assert!(texts.contains(&("SO", 26, 0)));
        assert!(!texts.iter().any(|(_, _, y)| *y == 9));
    }

    #[test]
    fn sub_ten_minute_clock_drops_the_leading_zero() {
        let ops = time_remaining("07:41");
        let texts: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["7", "4", "1"]);
    }

    #[test]
    fn final_in_overtime_is_tagged() {
        let detail = NhlDetail {
            period_number: 4,
            period_name: "OT".to_owned(),
            time_remaining: "00:00".to_owned(),
        };
        let ops = layout(&game(GameState::Final, detail), ScreenVariant::Final);
        let texts = texts(&ops);
        assert!(texts.contains(&("F", 22, 0)));
        assert!(texts.contains(&("OT", 27, 9)));
    }

    #[test]
    fn postponed_shows_ppd_and_no_score() {
        let ops = layout(
            &game(GameState::NotStarted, NhlDetail::default()),
            ScreenVariant::Postponed,
        );
        let texts = texts(&ops);
        assert!(texts.contains(&("PPD", 23, 0)));
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn not_started_shows_the_start_time_slot() {
        let ops = layout(
            &game(GameState::NotStarted, NhlDetail::default()),
            ScreenVariant::NotStarted,
        );
        // No start time on the snapshot → placeholder text.
        assert!(texts(&ops).contains(&("TBD", 22, 12)));
    }

    #[test]
    fn away_leader_is_red() {
        let detail = NhlDetail {
            period_number: 3,
            period_name: "3rd".to_owned(),
            time_remaining: "10:00".to_owned(),
        };
        let ops = layout(&game(GameState::InProgress, detail), ScreenVariant::InProgress);
        let away = ops.iter().find_map(|op| match op {
            DrawOp::Text { text, y, color, .. } if *y == -1 => Some((text.clone(), *color)),
            _ => None,
        });
        assert_eq!(away, Some(("3".to_owned(), super::super::RED)));
    }

    #[test]
    fn layouts_are_pure() {
        let detail = NhlDetail {
            period_number: 1,
            period_name: "1st".to_owned(),
            time_remaining: "20:00".to_owned(),
        };
        let g = game(GameState::InProgress, detail);
        assert_eq!(
            layout(&g, ScreenVariant::InProgress),
            layout(&g, ScreenVariant::InProgress)
        );
    }
}
