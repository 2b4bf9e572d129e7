// Systems holds the per-frame systems that operate on the world
//
// The screen controller decides which of them run each frame.

use crate::config::GameConfig;
use crate::input_system::InputSystem;
use crate::movement::MovementSystem;
use crate::render::RenderSystem;
use crate::tornado::TornadoSystem;

pub struct Systems {
    pub input: InputSystem,
    pub movement: MovementSystem,
    pub tornado: TornadoSystem,
    pub render: RenderSystem,
}

impl Systems {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Systems {
            input: InputSystem::new(),
            movement: MovementSystem::new(config.field_width(), config.field_height()),
            tornado: TornadoSystem::new(&config.spawn, seed),
            render: RenderSystem::new(),
        }
    }
}
