//! The cycle controller: fetch, classify, lay out, rasterize, fade.

use crate::assets::LogoStore;
use crate::config::Config;
use crate::display::brightness::max_brightness;
use crate::display::frame::Frame;
use crate::display::matrix::DisplayBackend;
use crate::render::{self, DrawOp, common};
use chrono::{Local, Timelike};
use log::{error, info};
use scoreboard_api::aggregator::Aggregator;
use scoreboard_api::{GameSnapshot, ScreenVariant};
use std::thread;

pub struct Scoreboard<B: DisplayBackend> {
    config: Config,
    aggregator: Aggregator,
    logos: LogoStore,
    backend: B,
    frame: Frame,
}

impl<B: DisplayBackend> Scoreboard<B> {
    pub fn new(config: Config, aggregator: Aggregator, logos: LogoStore, backend: B) -> Self {
        let frame = Frame::new(config.cols, config.rows);
        Self { config, aggregator, logos, backend, frame }
    }

    /// The outer loop, expected to run unattended indefinitely. A failed
    /// fetch shows an error screen and keeps the last good data cycling;
    /// nothing here ends the process.
    pub fn run(mut self) -> ! {
        let (max, _) = self.current_brightness();
        self.backend.set_brightness(max);
        self.show(&common::loading_screen());

        let mut games: Vec<GameSnapshot> = Vec::new();
        loop {
            match self.aggregator.fetch_all() {
                Ok(fresh) => {
                    info!("fetched {} snapshot(s)", fresh.len());
                    games = fresh;
                }
                Err(err) => {
                    error!("{err}");
                    let (max, step) = self.current_brightness();
                    self.fade_out(step);
                    self.show(&common::error_screen("fetch failed"));
                    self.fade_in(max, step);
                    thread::sleep(self.config.cycle_time);
                    self.fade_out(step);
                    if games.is_empty() {
                        continue;
                    }
                }
            }

            // An all-sentinel day idles on one combined screen rather than
            // flipping between two empty ones.
            if !games.is_empty() && games.iter().all(GameSnapshot::is_no_games) {
                let (max, _) = self.current_brightness();
                self.backend.set_brightness(max);
                self.show(&common::no_games_today());
                thread::sleep(self.config.idle_poll);
                continue;
            }

            let hold = if games.len() == 1 {
                self.config.single_screen_cycle_time
            } else {
                self.config.cycle_time
            };

            let (max, step) = self.current_brightness();
            for game in &games {
                let variant = ScreenVariant::classify(game);
                let ops = render::layout(game, variant);
                self.frame.render(&ops, &mut self.logos);
                self.fade_in(max, step);
                thread::sleep(hold);
                self.fade_out(step);
            }
        }
    }

    fn current_brightness(&self) -> (u8, u8) {
        max_brightness(Local::now().hour())
    }

    fn show(&mut self, ops: &[DrawOp]) {
        self.frame.render(ops, &mut self.logos);
        self.backend.show(&self.frame);
    }

    /// Step brightness up to max, re-showing the current frame each tick.
    fn fade_in(&mut self, max: u8, step: u8) {
        let mut level = 0u16;
        while level < u16::from(max) {
            self.backend.set_brightness(level as u8);
            self.backend.show(&self.frame);
            thread::sleep(self.config.fade_tick);
            level += u16::from(step.max(1));
        }
        self.backend.set_brightness(max);
        self.backend.show(&self.frame);
    }

    /// Step brightness down to zero, then blank the panel between screens.
    fn fade_out(&mut self, step: u8) {
        let mut level = i16::from(self.current_brightness().0);
        while level > 0 {
            self.backend.set_brightness(level as u8);
            self.backend.show(&self.frame);
            thread::sleep(self.config.fade_tick);
            level -= i16::from(step.max(1));
        }
        self.backend.set_brightness(0);
        self.frame.clear();
        self.backend.show(&self.frame);
    }
}
