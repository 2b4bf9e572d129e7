// Game module - screen controller and everything it owns
//
// This module contains:
// - world.rs: World struct, entities and factories
// - systems.rs: the per-frame systems bundle
// - types.rs: Screen enum, timers and intro constants
// - ui_manager.rs: screen-space GUI components
//
// `Game` is the finite-state machine that decides which systems run each
// frame: Menu -> Mission -> IntroAnimation -> Playing -> GameOver -> Playing.

pub mod systems;
pub mod types;
pub mod ui_manager;
pub mod world;

pub use types::*;
pub use world::{Entity, EntityId, World};

use crate::audio::{Audio, Track};
use crate::config::GameConfig;
use crate::error::Result;
use crate::input_system::{FrameInput, GameAction};
use crate::render::{Rgb, Surface};
use crate::sprite::GameAssets;
use crate::tornado::HazardOutcome;
use systems::Systems;
use ui_manager::UIManager;

pub struct Game {
    config: GameConfig,
    assets: GameAssets,
    world: World,
    systems: Systems,
    ui: UIManager,
    screen: Screen,
    state: SimulationState,
    helicopter: Option<EntityId>,
    running: bool,
}

impl Game {
    /// Creates a game sitting on the title screen
    ///
    /// `seed` drives tornado placement; the same seed replays the same run.
    pub fn new(config: GameConfig, assets: GameAssets, seed: u64) -> Self {
        let systems = Systems::new(&config, seed);
        let ui = UIManager::new(&config);
        Game {
            config,
            assets,
            world: World::new(),
            systems,
            ui,
            screen: Screen::Menu,
            state: SimulationState::new(),
            helicopter: None,
            running: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn helicopter(&self) -> Option<EntityId> {
        self.helicopter
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reacts to one discrete input event
    pub fn handle_action(&mut self, action: GameAction, now_ms: u64, audio: &mut dyn Audio) {
        match (action, self.screen) {
            (GameAction::Quit, _) => {
                log::info!("Quit requested on {:?}", self.screen);
                self.running = false;
            }
            (GameAction::Confirm, Screen::Menu) => {
                self.set_screen(Screen::Mission);
            }
            (GameAction::Confirm, Screen::Mission) => {
                self.start_intro(audio);
            }
            (GameAction::Confirm, Screen::GameOver) => {
                self.start_run(now_ms, audio);
            }
            (GameAction::Confirm, Screen::IntroAnimation | Screen::Playing) => {}
        }
    }

    /// Runs one frame of simulation for the current screen
    ///
    /// At most one screen transition happens per frame: once a confirm has
    /// moved to a new screen, further confirms in the same frame are dropped.
    pub fn update(&mut self, input: &FrameInput, audio: &mut dyn Audio) {
        let frame_screen = self.screen;
        for &action in &input.actions {
            if action == GameAction::Confirm && self.screen != frame_screen {
                continue;
            }
            self.handle_action(action, input.now_ms, audio);
        }
        if !self.running {
            return;
        }

        match self.screen {
            Screen::Menu | Screen::Mission | Screen::GameOver => {}
            Screen::IntroAnimation => self.update_intro(input.now_ms, audio),
            Screen::Playing => self.update_playing(input, audio),
        }
    }

    /// Draws the current screen and presents it
    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let (width, height) = (self.config.window_width, self.config.window_height);
        match self.screen {
            Screen::Menu => self.ui.menu.render(surface, width, height)?,
            Screen::Mission => self.ui.mission.render(surface, width, height)?,
            Screen::IntroAnimation => {
                surface.clear(Rgb::SEA_BLUE)?;
                self.systems.render.update(&mut self.world, surface)?;
                if self.state.fade_alpha > 0 {
                    surface.fill_overlay(Rgb::BLACK, self.state.fade_alpha)?;
                }
            }
            Screen::Playing => {
                surface.clear(Rgb::SEA_BLUE)?;
                self.systems.render.update(&mut self.world, surface)?;
                self.ui.hud.render(surface, width, self.state.elapsed_seconds)?;
            }
            Screen::GameOver => {
                // The frozen scene stays visible under the overlay
                surface.clear(Rgb::SEA_BLUE)?;
                self.systems.render.update(&mut self.world, surface)?;
                self.ui
                    .game_over
                    .render(surface, width, height, self.state.elapsed_seconds)?;
            }
        }
        surface.present();
        Ok(())
    }

    fn set_screen(&mut self, screen: Screen) {
        log::info!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    /// Parks the helicopter on the boat and starts the take-off sequence
    fn start_intro(&mut self, audio: &mut dyn Audio) {
        self.world.clear();
        self.state.reset_intro();
        self.world.spawn_boat(&self.assets, &self.config);
        let (x, y) = self.config.helicopter_start();
        self.helicopter = Some(self.world.spawn_helicopter(&self.assets, &self.config, x, y));
        audio.play(Track::Rotor, true);
        self.set_screen(Screen::IntroAnimation);
    }

    fn update_intro(&mut self, now_ms: u64, audio: &mut dyn Audio) {
        self.state.intro_frame += 1;
        let frame = self.state.intro_frame;

        if frame >= INTRO_END {
            self.start_run(now_ms, audio);
            return;
        }

        let Some(helicopter) = self.helicopter.and_then(|id| self.world.get_mut(id)) else {
            log::error!("Intro running without a helicopter");
            return;
        };

        if frame < INTRO_WARMUP_END {
            if let Some(rotor) = helicopter.rotor.as_mut() {
                rotor.rotation_speed = (rotor.rotation_speed + 1.0).min(self.config.rotor_warmup_speed);
            }
        } else if frame < INTRO_TAKEOFF_END {
            if let Some(rotor) = helicopter.rotor.as_mut() {
                rotor.rotation_speed = self.config.rotor_flight_speed;
            }
            if let Some(position) = helicopter.position.as_mut() {
                position.y -= self.config.intro_rise_rate;
            }
        } else {
            self.state.fade_alpha = self.state.fade_alpha.saturating_add(FADE_STEP);
        }
    }

    /// Resets the world to a single helicopter at the start position and plays
    ///
    /// Used both when the intro finishes and when restarting after a crash.
    fn start_run(&mut self, now_ms: u64, audio: &mut dyn Audio) {
        self.world.clear();
        let (x, y) = self.config.helicopter_start();
        let id = self.world.spawn_helicopter(&self.assets, &self.config, x, y);
        if let Some(rotor) = self.world.get_mut(id).and_then(|e| e.rotor.as_mut()) {
            rotor.rotation_speed = self.config.rotor_flight_speed;
        }
        self.helicopter = Some(id);

        self.state.reset_intro();
        self.state.reset_clock(now_ms);
        self.systems.tornado.reset(&self.config.spawn);
        audio.play(Track::Storm, true);
        self.set_screen(Screen::Playing);
    }

    fn update_playing(&mut self, input: &FrameInput, audio: &mut dyn Audio) {
        self.systems.input.update(&mut self.world, &input.held);
        self.systems.movement.update(&mut self.world);

        let outcome = self.systems.tornado.update(
            &mut self.world,
            &self.assets,
            &self.config,
            self.state.elapsed_seconds,
        );
        if outcome == HazardOutcome::Collision {
            log::info!("Hit a tornado after {} s", self.state.elapsed_seconds);
            audio.stop();
            self.set_screen(Screen::GameOver);
            return;
        }

        if self.state.tick_clock(input.now_ms) {
            log::debug!("Survived {} s", self.state.elapsed_seconds);
        }
    }
}
