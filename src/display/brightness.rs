/// Panel brightness by hour of day: peak 100 at noon, tapering linearly to
/// a floor of 15 overnight. Midnight is clamped to the 1 a.m. value so the
/// panel never goes fully dark. Returns (max_brightness, fade_step); the
/// step splits the fade into about fifteen increments.
pub fn max_brightness(hour: u32) -> (u8, u8) {
    let hour = if hour == 0 { 1 } else { hour };
    let raw = if hour <= 12 {
        (100 * hour).div_ceil(12)
    } else {
        (100 * (24 - hour)).div_ceil(12)
    };
    let max = raw.max(15) as u8;
    let step = max.div_ceil(15);
    (max, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_is_full_brightness() {
        assert_eq!(max_brightness(12), (100, 7));
    }

    #[test]
    fn evening_tapers_linearly() {
        assert_eq!(max_brightness(18), (50, 4));
        assert_eq!(max_brightness(6), (50, 4));
    }

    #[test]
    fn overnight_hits_the_floor() {
        assert_eq!(max_brightness(23), (15, 1));
        assert_eq!(max_brightness(1), (15, 1));
    }

    #[test]
    fn midnight_is_clamped_to_one_am() {
        assert_eq!(max_brightness(0), max_brightness(1));
    }
}
