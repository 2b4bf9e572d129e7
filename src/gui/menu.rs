//! Title Screen
//!
//! Black screen with a large "BEGIN" in the centre. Any confirm input
//! (Enter, Space or a mouse click) moves on to the mission briefing.

use crate::error::Result;
use crate::render::{Rgb, Surface};
use crate::text::{centered_x, text_height};

/// Configuration for title screen appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub background_color: Rgb,
    pub title_color: Rgb,
    pub prompt_color: Rgb,
    pub title_scale: u32,
    pub prompt_scale: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Rgb::BLACK,
            title_color: Rgb::WHITE,
            prompt_color: Rgb::new(150, 150, 160),
            title_scale: 8,
            prompt_scale: 2,
        }
    }
}

pub struct MenuScreen {
    title: String,
    prompt: String,
    style: MenuStyle,
}

impl MenuScreen {
    pub fn new() -> Self {
        MenuScreen {
            title: "BEGIN".to_string(),
            prompt: "PRESS ENTER OR CLICK".to_string(),
            style: MenuStyle::default(),
        }
    }

    /// Draws the full title screen (clears the frame first)
    pub fn render(&self, surface: &mut dyn Surface, width: u32, height: u32) -> Result<()> {
        surface.clear(self.style.background_color)?;

        let center_x = width as i32 / 2;
        let title_y = (height as i32 - text_height(self.style.title_scale) as i32) / 2;
        surface.draw_text(
            &self.title,
            centered_x(&self.title, self.style.title_scale, center_x),
            title_y,
            self.style.title_color,
            self.style.title_scale,
        )?;

        surface.draw_text(
            &self.prompt,
            centered_x(&self.prompt, self.style.prompt_scale, center_x),
            title_y + 100,
            self.style.prompt_color,
            self.style.prompt_scale,
        )
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
