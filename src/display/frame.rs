//! The offscreen framebuffer draw ops are executed into.

use crate::assets::LogoStore;
use crate::render::{Color, DrawOp, FontId};
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X12, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Ellipse, Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle,
};
use embedded_graphics::text::{Baseline, Text};
use image::RgbImage;

impl From<Color> for Rgb888 {
    fn from(c: Color) -> Self {
        Rgb888::new(c.r, c.g, c.b)
    }
}

fn font(id: FontId) -> &'static MonoFont<'static> {
    match id {
        FontId::SmallReg => &FONT_5X8,
        FontId::MedReg => &FONT_6X12,
        FontId::LargeBold => &FONT_9X15_BOLD,
    }
}

fn shape_style(fill: Option<Color>, outline: Color) -> PrimitiveStyle<Rgb888> {
    let mut builder = PrimitiveStyleBuilder::new()
        .stroke_color(outline.into())
        .stroke_width(1);
    if let Some(fill) = fill {
        builder = builder.fill_color(fill.into());
    }
    builder.build()
}

pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb888::BLACK);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb888 {
        self.pixels[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: i32, y: i32, color: Rgb888) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
    }

    pub fn blit(&mut self, x: i32, y: i32, image: &RgbImage) {
        for (px, py, pixel) in image.enumerate_pixels() {
            self.set(
                x + px as i32,
                y + py as i32,
                Rgb888::new(pixel.0[0], pixel.0[1], pixel.0[2]),
            );
        }
    }

    /// Clear, then execute the op list in order. Later ops paint over
    /// earlier ones.
    pub fn render(&mut self, ops: &[DrawOp], logos: &mut LogoStore) {
        self.clear();
        for op in ops {
            self.draw_op(op, logos);
        }
    }

    fn draw_op(&mut self, op: &DrawOp, logos: &mut LogoStore) {
        match op {
            DrawOp::Text { x, y, font: id, color, text } => {
                let style = MonoTextStyle::new(font(*id), (*color).into());
                let _ = Text::with_baseline(text, Point::new(*x, *y), style, Baseline::Top)
                    .draw(self);
            }
            DrawOp::Rect { x0, y0, x1, y1, color } => {
                let _ = Rectangle::with_corners(Point::new(*x0, *y0), Point::new(*x1, *y1))
                    .into_styled(PrimitiveStyle::with_fill((*color).into()))
                    .draw(self);
            }
            DrawOp::Ellipse { x0, y0, x1, y1, fill, outline } => {
                let size = Size::new((x1 - x0 + 1).max(1) as u32, (y1 - y0 + 1).max(1) as u32);
                let _ = Ellipse::new(Point::new(*x0, *y0), size)
                    .into_styled(shape_style(*fill, *outline))
                    .draw(self);
            }
            DrawOp::Polygon { points, fill, outline } => {
                self.draw_polygon(points, *fill, *outline);
            }
            DrawOp::Image { x, y, max_w, max_h, source } => {
                if let Some(logo) = logos.get(source, *max_w, *max_h) {
                    let logo = logo.clone();
                    self.blit(*x, *y, &logo);
                }
            }
        }
    }

    /// Triangles draw natively; quads fill as two triangles with a closed
    /// polyline outline.
    fn draw_polygon(&mut self, points: &[(i32, i32)], fill: Option<Color>, outline: Color) {
        let pts: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        match pts.len() {
            3 => {
                let _ = Triangle::new(pts[0], pts[1], pts[2])
                    .into_styled(shape_style(fill, outline))
                    .draw(self);
            }
            4 => {
                if let Some(fill) = fill {
                    let style = PrimitiveStyle::with_fill(fill.into());
                    let _ = Triangle::new(pts[0], pts[1], pts[2]).into_styled(style).draw(self);
                    let _ = Triangle::new(pts[0], pts[2], pts[3]).into_styled(style).draw(self);
                }
                let mut outline_pts = pts.clone();
                outline_pts.push(pts[0]);
                let _ = Polyline::new(&outline_pts)
                    .into_styled(PrimitiveStyle::with_stroke(outline.into(), 1))
                    .draw(self);
            }
            _ => {
                if pts.len() >= 2 {
                    let mut outline_pts = pts.clone();
                    outline_pts.push(pts[0]);
                    let _ = Polyline::new(&outline_pts)
                        .into_styled(PrimitiveStyle::with_stroke(outline.into(), 1))
                        .draw(self);
                }
            }
        }
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point.x, point.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::WHITE;

    fn lit_pixels(frame: &Frame) -> usize {
        let mut count = 0;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) != Rgb888::BLACK {
                    count += 1;
                }
            }
        }
        count
    }

    fn store() -> LogoStore {
        LogoStore::new("/nonexistent/assets")
    }

    #[test]
    fn rect_fills_the_inclusive_box() {
        let mut frame = Frame::new(64, 32);
        frame.render(
            &[DrawOp::Rect { x0: 2, y0: 3, x1: 4, y1: 5, color: WHITE }],
            &mut store(),
        );
        assert_eq!(lit_pixels(&frame), 9);
        assert_eq!(frame.pixel(2, 3), Rgb888::WHITE);
        assert_eq!(frame.pixel(4, 5), Rgb888::WHITE);
        assert_eq!(frame.pixel(5, 5), Rgb888::BLACK);
    }

    #[test]
    fn text_paints_pixels_and_clips_offscreen() {
        let mut frame = Frame::new(64, 32);
        frame.render(
            &[
                DrawOp::text(2, 2, FontId::MedReg, WHITE, "F"),
                // Entirely off the panel; must not panic or wrap.
                DrawOp::text(-200, 2, FontId::MedReg, WHITE, "x"),
            ],
            &mut store(),
        );
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn filled_diamond_covers_its_center() {
        let mut frame = Frame::new(64, 32);
        frame.render(
            &[DrawOp::Polygon {
                points: vec![(44, 4), (47, 1), (50, 4), (47, 7)],
                fill: Some(WHITE),
                outline: WHITE,
            }],
            &mut store(),
        );
        assert_eq!(frame.pixel(47, 4), Rgb888::WHITE);
    }

    #[test]
    fn outline_only_diamond_leaves_the_center_dark() {
        let mut frame = Frame::new(64, 32);
        frame.render(
            &[DrawOp::Polygon {
                points: vec![(44, 4), (47, 1), (50, 4), (47, 7)],
                fill: None,
                outline: WHITE,
            }],
            &mut store(),
        );
        assert_eq!(frame.pixel(47, 4), Rgb888::BLACK);
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn blit_clips_at_the_panel_edge() {
        let mut frame = Frame::new(64, 32);
        let mut logo = RgbImage::new(4, 4);
        for pixel in logo.pixels_mut() {
            pixel.0 = [0, 0, 255];
        }
        frame.blit(62, 30, &logo);
        assert_eq!(lit_pixels(&frame), 4);
    }

    #[test]
    fn render_clears_the_previous_frame() {
        let mut frame = Frame::new(64, 32);
        frame.render(
            &[DrawOp::Rect { x0: 0, y0: 0, x1: 10, y1: 10, color: WHITE }],
            &mut store(),
        );
        frame.render(&[], &mut store());
        assert_eq!(lit_pixels(&frame), 0);
    }
}
