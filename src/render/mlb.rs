//! MLB screen layouts, one per variant.

use super::common::{
    FIRST_MIDDLE_COL, final_lettering, score_fills, start_time_text, team_logos,
};
use super::{DrawOp, FontId, ImageSource, WHITE};
use scoreboard_api::{GameDetail, GameSnapshot, League, MlbDetail, ScreenVariant};

pub fn layout(game: &GameSnapshot, variant: ScreenVariant) -> Vec<DrawOp> {
    match variant {
        ScreenVariant::NoGames => no_games(),
        ScreenVariant::Postponed => postponed(game),
        ScreenVariant::NotStarted => not_started(game),
        ScreenVariant::Final => game_over(game),
        ScreenVariant::InProgress => in_progress(game),
    }
}

fn mlb_detail(game: &GameSnapshot) -> MlbDetail {
    match &game.detail {
        Some(GameDetail::Mlb(detail)) => detail.clone(),
        _ => MlbDetail::default(),
    }
}

fn no_games() -> Vec<DrawOp> {
    vec![
        DrawOp::Image {
            x: 16,
            y: 4,
            max_w: 32,
            max_h: 32,
            source: ImageSource::LeagueLogo(League::Mlb),
        },
        DrawOp::text(12, 22, FontId::SmallReg, WHITE, "No games"),
    ]
}

fn not_started(game: &GameSnapshot) -> Vec<DrawOp> {
    let detail = mlb_detail(game);
    let mut ops = team_logos(game);
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL,
        0,
        FontId::SmallReg,
        WHITE,
        start_time_text(game.start_time),
    ));
    // Probable pitchers, away over home.
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 1,
        8,
        FontId::SmallReg,
        WHITE,
        detail.away_pitcher,
    ));
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 3,
        16,
        FontId::SmallReg,
        WHITE,
        "vs",
    ));
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 1,
        24,
        FontId::SmallReg,
        WHITE,
        detail.home_pitcher,
    ));
    ops
}

fn postponed(game: &GameSnapshot) -> Vec<DrawOp> {
    let mut ops = team_logos(game);
    ops.push(DrawOp::text(
        FIRST_MIDDLE_COL + 12,
        10,
        FontId::MedReg,
        WHITE,
        "PPD",
    ));
    ops
}

fn game_over(game: &GameSnapshot) -> Vec<DrawOp> {
    let detail = mlb_detail(game);
    let mut ops = team_logos(game);
    ops.extend(final_lettering(40, 11));
    ops.extend(score_block(game, &detail));
    ops
}

fn in_progress(game: &GameSnapshot) -> Vec<DrawOp> {
    let detail = mlb_detail(game);
    let mut ops = team_logos(game);

    // Inning-half arrows beside the inning number; both show between
    // half-innings.
    if detail.inning_state != "Top" {
        ops.push(DrawOp::Polygon {
            points: vec![(43, 17), (45, 17), (44, 18)],
            fill: Some(WHITE),
            outline: WHITE,
        });
    }
    if detail.inning_state != "Bottom" {
        ops.push(DrawOp::Polygon {
            points: vec![(43, 15), (45, 15), (44, 14)],
            fill: Some(WHITE),
            outline: WHITE,
        });
    }

    ops.extend(at_bat(&detail));
    ops.extend(base_runners(&detail));
    ops.push(DrawOp::text(
        47,
        12,
        FontId::SmallReg,
        WHITE,
        detail.inning.to_string(),
    ));
    ops.extend(score_block(game, &detail));
    ops
}

/// Ball-strike count and the two out markers.
fn at_bat(detail: &MlbDetail) -> Vec<DrawOp> {
    let filled = |n: u8| if detail.outs > n { Some(WHITE) } else { None };
    vec![
        DrawOp::text(
            41,
            22,
            FontId::SmallReg,
            WHITE,
            format!("{}-{}", detail.balls, detail.strikes),
        ),
        DrawOp::Ellipse { x0: 58, y0: 4, x1: 62, y1: 8, fill: filled(0), outline: WHITE },
        DrawOp::Ellipse { x0: 58, y0: 10, x1: 62, y1: 14, fill: filled(1), outline: WHITE },
    ]
}

/// The base diamond, third-second-first from the left.
fn base_runners(detail: &MlbDetail) -> Vec<DrawOp> {
    let fill = |occupied: bool| if occupied { Some(WHITE) } else { None };
    vec![
        DrawOp::Polygon {
            points: vec![(39, 9), (42, 6), (45, 9), (42, 12)],
            fill: fill(detail.on_third),
            outline: WHITE,
        },
        DrawOp::Polygon {
            points: vec![(44, 4), (47, 1), (50, 4), (47, 7)],
            fill: fill(detail.on_second),
            outline: WHITE,
        },
        DrawOp::Polygon {
            points: vec![(49, 9), (52, 6), (55, 9), (52, 12)],
            fill: fill(detail.on_first),
            outline: WHITE,
        },
    ]
}

/// Runs and hits, away on top, leader's runs in red.
fn score_block(game: &GameSnapshot, detail: &MlbDetail) -> Vec<DrawOp> {
    let away_runs = game.away_score.unwrap_or(0);
    let home_runs = game.home_score.unwrap_or(0);
    let (away_fill, home_fill) = score_fills(away_runs, home_runs);
    vec![
        DrawOp::text(21, -1, FontId::SmallReg, away_fill, "R"),
        DrawOp::text(26, -1, FontId::SmallReg, away_fill, away_runs.to_string()),
        DrawOp::text(21, 6, FontId::SmallReg, WHITE, "H"),
        DrawOp::text(26, 6, FontId::SmallReg, WHITE, detail.away_hits.to_string()),
        DrawOp::text(21, 16, FontId::SmallReg, home_fill, "R"),
        DrawOp::text(26, 16, FontId::SmallReg, home_fill, home_runs.to_string()),
        DrawOp::text(21, 23, FontId::SmallReg, WHITE, "H"),
        DrawOp::text(26, 23, FontId::SmallReg, WHITE, detail.home_hits.to_string()),
    ]
}
