//! Display backends. The real panel sits behind the `hardware` feature so
//! the default build runs anywhere.

use super::frame::Frame;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use log::debug;

pub trait DisplayBackend {
    fn show(&mut self, frame: &Frame);
    /// 0–100; values above 100 clamp.
    fn set_brightness(&mut self, value: u8);
}

/// Sink for development hosts without a panel attached.
pub struct HeadlessBackend {
    brightness: u8,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self { brightness: 100 }
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for HeadlessBackend {
    fn show(&mut self, frame: &Frame) {
        let mut lit = 0u32;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) != Rgb888::BLACK {
                    lit += 1;
                }
            }
        }
        debug!(
            "frame {}x{} shown, {lit} lit pixel(s) at brightness {}",
            frame.width(),
            frame.height(),
            self.brightness
        );
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value.min(100);
    }
}

#[cfg(feature = "hardware")]
pub use hardware::MatrixBackend;

#[cfg(feature = "hardware")]
mod hardware {
    use super::DisplayBackend;
    use crate::config::Config;
    use crate::display::frame::Frame;
    use embedded_graphics::pixelcolor::RgbColor;
    use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};

    pub struct MatrixBackend {
        matrix: LedMatrix,
        canvas: Option<LedCanvas>,
        brightness: u8,
    }

    impl MatrixBackend {
        pub fn new(config: &Config) -> anyhow::Result<Self> {
            let mut options = LedMatrixOptions::new();
            options.set_rows(config.rows);
            options.set_cols(config.cols);
            options.set_chain_length(config.chain_length);
            options.set_parallel(config.parallel);
            options.set_hardware_mapping(&config.hardware_mapping);

            let mut runtime = LedRuntimeOptions::new();
            runtime.set_gpio_slowdown(config.gpio_slowdown);

            let matrix = LedMatrix::new(Some(options), Some(runtime))
                .map_err(|e| anyhow::anyhow!("matrix init failed: {e}"))?;
            let canvas = matrix.offscreen_canvas();
            Ok(Self { matrix, canvas: Some(canvas), brightness: 100 })
        }
    }

    impl DisplayBackend for MatrixBackend {
        fn show(&mut self, frame: &Frame) {
            // The bindings fix panel brightness at construction time, so
            // fades scale pixel values instead.
            let scale = u32::from(self.brightness);
            if let Some(mut canvas) = self.canvas.take() {
                for y in 0..frame.height() {
                    for x in 0..frame.width() {
                        let pixel = frame.pixel(x, y);
                        let color = LedColor {
                            red: (u32::from(pixel.r()) * scale / 100) as u8,
                            green: (u32::from(pixel.g()) * scale / 100) as u8,
                            blue: (u32::from(pixel.b()) * scale / 100) as u8,
                        };
                        canvas.set(x as i32, y as i32, &color);
                    }
                }
                self.canvas = Some(self.matrix.swap(canvas));
            }
        }

        fn set_brightness(&mut self, value: u8) {
            self.brightness = value.min(100);
        }
    }
}
