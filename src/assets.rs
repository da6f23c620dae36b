//! Logo loading: PNG decode, crop to the opaque content box, shrink to fit,
//! cache per (asset, bound). A missing file warns once and the blit is
//! skipped.

use crate::render::ImageSource;
use image::{RgbImage, RgbaImage, imageops};
use log::warn;
use scoreboard_api::League;
use std::collections::HashMap;
use std::path::PathBuf;

pub struct LogoStore {
    root: PathBuf,
    cache: HashMap<(ImageSource, u32, u32), Option<RgbImage>>,
}

impl LogoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), cache: HashMap::new() }
    }

    pub fn get(&mut self, source: &ImageSource, max_w: u32, max_h: u32) -> Option<&RgbImage> {
        let key = (source.clone(), max_w, max_h);
        if !self.cache.contains_key(&key) {
            let loaded = self.load(source, max_w, max_h);
            if loaded.is_none() {
                warn!(
                    "no usable logo for {source:?} under {}",
                    self.root.display()
                );
            }
            self.cache.insert(key.clone(), loaded);
        }
        self.cache.get(&key).and_then(|entry| entry.as_ref())
    }

    fn path_for(&self, source: &ImageSource) -> PathBuf {
        match source {
            ImageSource::TeamLogo { league, abbrev } => self
                .root
                .join("team logos")
                .join(league.tag())
                .join("png")
                .join(format!("{abbrev}.png")),
            ImageSource::LeagueLogo(League::Nhl) => self.root.join("NHL_Logo_Simplified.png"),
            ImageSource::LeagueLogo(League::Mlb) => self.root.join("MLB_Logo.png"),
        }
    }

    fn load(&self, source: &ImageSource, max_w: u32, max_h: u32) -> Option<RgbImage> {
        let path = self.path_for(source);
        let img = image::open(&path).ok()?.to_rgba8();
        let cropped = crop_to_content(&img)?;
        Some(bound_resize(&cropped, max_w, max_h))
    }
}

/// Trim fully transparent margins, compositing what remains onto black.
/// None for an image with no opaque pixels at all.
pub fn crop_to_content(img: &RgbaImage) -> Option<RgbImage> {
    let (width, height) = img.dimensions();
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (width, height, 0u32, 0u32);
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel.0[3] > 0 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }
    if min_x > max_x || min_y > max_y {
        return None;
    }

    let mut out = RgbImage::new(max_x - min_x + 1, max_y - min_y + 1);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let src = img.get_pixel(x + min_x, y + min_y);
        let alpha = u32::from(src.0[3]);
        pixel.0 = [
            (u32::from(src.0[0]) * alpha / 255) as u8,
            (u32::from(src.0[1]) * alpha / 255) as u8,
            (u32::from(src.0[2]) * alpha / 255) as u8,
        ];
    }
    Some(out)
}

/// Shrink to fit within (max_w, max_h) preserving aspect ratio; never
/// upscales.
pub fn bound_resize(img: &RgbImage, max_w: u32, max_h: u32) -> RgbImage {
    let (w, h) = img.dimensions();
    if w <= max_w && h <= max_h {
        return img.clone();
    }
    let scale = f64::min(f64::from(max_w) / f64::from(w), f64::from(max_h) / f64::from(h));
    let new_w = ((f64::from(w) * scale).floor() as u32).max(1);
    let new_h = ((f64::from(h) * scale).floor() as u32).max(1);
    imageops::resize(img, new_w, new_h, imageops::FilterType::Triangle)
}
