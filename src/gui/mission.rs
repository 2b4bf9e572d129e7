//! Mission Briefing Screen
//!
//! Shows the mission title and the briefing lines from the configuration.
//! Lines are drawn one per row; wrapping is the config author's job.

use crate::error::Result;
use crate::render::{Rgb, Surface};
use crate::text::{centered_x, text_height};

#[derive(Debug, Clone)]
pub struct MissionStyle {
    pub background_color: Rgb,
    pub title_color: Rgb,
    pub body_color: Rgb,
    pub prompt_color: Rgb,
    pub title_scale: u32,
    pub body_scale: u32,
    pub line_spacing: u32,
}

impl Default for MissionStyle {
    fn default() -> Self {
        MissionStyle {
            background_color: Rgb::BLACK,
            title_color: Rgb::new(255, 255, 100),
            body_color: Rgb::WHITE,
            prompt_color: Rgb::new(150, 150, 160),
            title_scale: 5,
            body_scale: 2,
            line_spacing: 10,
        }
    }
}

pub struct MissionScreen {
    lines: Vec<String>,
    style: MissionStyle,
}

impl MissionScreen {
    pub fn new(lines: Vec<String>) -> Self {
        MissionScreen {
            lines,
            style: MissionStyle::default(),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, width: u32, height: u32) -> Result<()> {
        surface.clear(self.style.background_color)?;
        let center_x = width as i32 / 2;

        let title = "MISSION";
        surface.draw_text(
            title,
            centered_x(title, self.style.title_scale, center_x),
            80,
            self.style.title_color,
            self.style.title_scale,
        )?;

        let row_height = (text_height(self.style.body_scale) + self.style.line_spacing) as i32;
        let mut y = 200;
        for line in &self.lines {
            surface.draw_text(
                line,
                centered_x(line, self.style.body_scale, center_x),
                y,
                self.style.body_color,
                self.style.body_scale,
            )?;
            y += row_height;
        }

        let prompt = "PRESS ENTER TO TAKE OFF";
        surface.draw_text(
            prompt,
            centered_x(prompt, self.style.body_scale, center_x),
            height as i32 - 80,
            self.style.prompt_color,
            self.style.body_scale,
        )
    }
}
