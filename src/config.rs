use std::path::PathBuf;
use std::time::Duration;

/// Every knob in one explicitly constructed value, built in main and passed
/// down — no module-level globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: u32,
    pub cols: u32,
    // Panel wiring, read only by the hardware backend.
    #[cfg_attr(not(feature = "hardware"), allow(dead_code))]
    pub chain_length: u32,
    #[cfg_attr(not(feature = "hardware"), allow(dead_code))]
    pub parallel: u32,
    #[cfg_attr(not(feature = "hardware"), allow(dead_code))]
    pub gpio_slowdown: u32,
    #[cfg_attr(not(feature = "hardware"), allow(dead_code))]
    pub hardware_mapping: String,
    /// Directory holding league and team logo PNGs.
    pub asset_dir: PathBuf,
    /// Hold per screen when several games are cycling.
    pub cycle_time: Duration,
    /// Hold when a single screen is all there is to show.
    pub single_screen_cycle_time: Duration,
    /// Delay between brightness steps during fades.
    pub fade_tick: Duration,
    /// Wait before re-polling when no league has games today.
    pub idle_poll: Duration,
}

impl Config {
    /// Defaults for a 64x32 panel on an Adafruit HAT. `LEDBOARD_ASSETS`
    /// overrides where logos are looked up.
    pub fn from_env() -> Self {
        let asset_dir = std::env::var("LEDBOARD_ASSETS")
            .unwrap_or_else(|_| "assets/images".to_owned());
        Self {
            rows: 32,
            cols: 64,
            chain_length: 1,
            parallel: 1,
            gpio_slowdown: 2,
            hardware_mapping: "adafruit-hat".to_owned(),
            asset_dir: asset_dir.into(),
            cycle_time: Duration::from_millis(3500),
            single_screen_cycle_time: Duration::from_secs(10),
            fade_tick: Duration::from_millis(25),
            idle_poll: Duration::from_secs(600),
        }
    }
}
