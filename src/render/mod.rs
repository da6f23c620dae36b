//! Screen layouts as data. Each league module turns a snapshot plus its
//! classified variant into a flat list of draw primitives; executing them
//! against pixels (and any asset IO) is the display layer's job, so layouts
//! stay pure and testable.

pub mod common;
pub mod mlb;
pub mod nhl;

use scoreboard_api::{GameSnapshot, League, ScreenVariant};

pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
pub const RED: Color = Color { r: 255, g: 50, b: 50 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    SmallReg,
    MedReg,
    LargeBold,
}

/// Symbolic reference to a logo asset; resolved by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    TeamLogo { league: League, abbrev: String },
    LeagueLogo(League),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: i32,
        y: i32,
        font: FontId,
        color: Color,
        text: String,
    },
    /// Filled axis-aligned rectangle, corners inclusive.
    Rect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    /// `fill: None` draws the outline only.
    Polygon {
        points: Vec<(i32, i32)>,
        fill: Option<Color>,
        outline: Color,
    },
    /// Ellipse inscribed in the inclusive bounding box.
    Ellipse {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        fill: Option<Color>,
        outline: Color,
    },
    /// Blit an asset anchored at (x, y), shrunk to fit (max_w, max_h).
    Image {
        x: i32,
        y: i32,
        max_w: u32,
        max_h: u32,
        source: ImageSource,
    },
}

impl DrawOp {
    pub fn text(x: i32, y: i32, font: FontId, color: Color, text: impl Into<String>) -> Self {
        DrawOp::Text { x, y, font, color, text: text.into() }
    }
}

/// Lay out one screen for a snapshot. Pure: same inputs, same op list.
pub fn layout(game: &GameSnapshot, variant: ScreenVariant) -> Vec<DrawOp> {
    match game.league {
        League::Nhl => nhl::layout(game, variant),
        League::Mlb => mlb::layout(game, variant),
    }
}
