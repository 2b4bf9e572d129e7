//! Timer HUD
//!
//! Survival time in whole seconds, anchored to the top-right corner.

use crate::error::Result;
use crate::render::{Rgb, Surface};
use crate::text::text_width;

const MARGIN: i32 = 20;
const SCALE: u32 = 3;

#[derive(Debug, Default)]
pub struct TimerHud;

impl TimerHud {
    pub fn new() -> Self {
        TimerHud
    }

    pub fn label(elapsed_seconds: u32) -> String {
        format!("TIME: {}", elapsed_seconds)
    }

    pub fn render(&self, surface: &mut dyn Surface, width: u32, elapsed_seconds: u32) -> Result<()> {
        let label = Self::label(elapsed_seconds);
        let x = width as i32 - MARGIN - text_width(&label, SCALE) as i32;
        surface.draw_text(&label, x, MARGIN, Rgb::WHITE, SCALE)
    }
}
