use crate::game::world::World;

/// Discrete actions produced by input events
///
/// This enum decouples raw input (keyboard, mouse, window events) from the
/// game. The platform layer translates its events into `GameAction`s and the
/// screen controller decides what each one means in the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Advance the current screen (begin, start mission, restart)
    Confirm,
    /// Leave the game from any screen
    Quit,
}

/// Directional keys currently held down
///
/// Polled once per frame from the keyboard state, not from events, so holding
/// a key keeps the helicopter moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Everything the game needs to know about input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub actions: Vec<GameAction>,
    pub held: HeldKeys,
    /// Wall-clock milliseconds since the platform started
    pub now_ms: u64,
}

impl FrameInput {
    pub fn new(now_ms: u64) -> Self {
        FrameInput {
            actions: Vec::new(),
            held: HeldKeys::none(),
            now_ms,
        }
    }

    pub fn with_action(mut self, action: GameAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_held(mut self, held: HeldKeys) -> Self {
        self.held = held;
        self
    }
}

/// InputSystem writes the desired velocity onto every entity that can move
///
/// Velocity is rebuilt from scratch every frame: each axis is `±speed` when a
/// key is held and zero otherwise. Diagonals are not normalised, so holding two
/// keys requests `speed` on both axes.
#[derive(Debug, Default)]
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    pub fn update(&self, world: &mut World, held: &HeldKeys) {
        for entity in world.iter_mut() {
            if let Some(velocity) = entity.velocity.as_mut() {
                velocity.dx = 0.0;
                velocity.dy = 0.0;
                if held.left {
                    velocity.dx = -velocity.speed;
                }
                if held.right {
                    velocity.dx = velocity.speed;
                }
                if held.up {
                    velocity.dy = -velocity.speed;
                }
                if held.down {
                    velocity.dy = velocity.speed;
                }
            }
        }
    }
}
