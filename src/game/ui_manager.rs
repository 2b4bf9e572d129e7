// UIManager struct
//
// Holds the screen-space GUI components so the controller can draw whichever
// one the current screen needs.

use crate::config::GameConfig;
use crate::gui::{GameOverScreen, MenuScreen, MissionScreen, TimerHud};

pub struct UIManager {
    pub menu: MenuScreen,
    pub mission: MissionScreen,
    pub hud: TimerHud,
    pub game_over: GameOverScreen,
}

impl UIManager {
    pub fn new(config: &GameConfig) -> Self {
        UIManager {
            menu: MenuScreen::new(),
            mission: MissionScreen::new(config.mission_lines.clone()),
            hud: TimerHud::new(),
            game_over: GameOverScreen::new(),
        }
    }
}
