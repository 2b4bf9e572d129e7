//! Game Over Screen
//!
//! Darkens the frozen scene and shows how long the player survived, with a
//! prompt to fly again. Drawn on top of the world render, never instead of it.

use crate::error::Result;
use crate::render::{Rgb, Surface};
use crate::text::centered_x;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// "GAME OVER" text color
    pub title_color: Rgb,

    /// Survived time text color
    pub score_color: Rgb,

    /// Restart prompt color
    pub instruction_color: Rgb,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            overlay_alpha: 180,
            title_color: Rgb::new(255, 50, 50),
            score_color: Rgb::new(255, 255, 100),
            instruction_color: Rgb::new(150, 150, 160),
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn score_text(survived_seconds: u32) -> String {
        format!("SURVIVED: {} S", survived_seconds)
    }

    pub fn render(
        &self,
        surface: &mut dyn Surface,
        width: u32,
        height: u32,
        survived_seconds: u32,
    ) -> Result<()> {
        surface.fill_overlay(Rgb::BLACK, self.style.overlay_alpha)?;

        let center_x = width as i32 / 2;
        let center_y = height as i32 / 2;

        let title = "GAME OVER";
        surface.draw_text(
            title,
            centered_x(title, 6, center_x),
            center_y - 90,
            self.style.title_color,
            6,
        )?;

        let score = Self::score_text(survived_seconds);
        surface.draw_text(
            &score,
            centered_x(&score, 3, center_x),
            center_y,
            self.style.score_color,
            3,
        )?;

        let prompt = "PRESS ENTER TO FLY AGAIN";
        surface.draw_text(
            prompt,
            centered_x(prompt, 2, center_x),
            center_y + 80,
            self.style.instruction_color,
            2,
        )
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::RecordingSurface;

    #[test]
    fn test_overlay_then_text() {
        let mut surface = RecordingSurface::default();
        GameOverScreen::new().render(&mut surface, 800, 600, 33).unwrap();

        assert_eq!(surface.overlays(), vec![180]);
        let texts = surface.texts();
        assert_eq!(texts[0], "GAME OVER");
        assert_eq!(texts[1], "SURVIVED: 33 S");
    }
}
