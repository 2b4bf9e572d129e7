//! Tornado spawning, movement, collision and culling
//!
//! The tornado system runs once per frame during play:
//!
//! 1. Recompute the spawn interval from elapsed play time (difficulty ramp)
//! 2. Advance every tornado downwards and spin its sprite
//! 3. Test every tornado against every sprite-bearing entity; stop at the first hit
//! 4. Cull tornadoes that have fallen out of the field
//! 5. Spawn a new tornado when the frame counter reaches the interval
//!
//! Spawn positions come from a seeded `Pcg32`, so a fixed seed replays the same run.

use crate::collision::{circle_hits_hitbox, hitbox_radius, sprite_center};
use crate::config::{GameConfig, SpawnConfig};
use crate::game::world::World;
use crate::sprite::{GameAssets, tornado_visual_size};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Result of one tornado update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardOutcome {
    /// Nothing lethal happened this frame
    Continue,
    /// A tornado touched the helicopter; the run is over
    Collision,
}

/// Frames between spawns after `elapsed_seconds` of play
///
/// Shrinks by `step` every `difficulty_interval` seconds and never drops
/// below `min_rate`.
pub fn spawn_interval(spawn: &SpawnConfig, elapsed_seconds: u32) -> u32 {
    let steps = elapsed_seconds / spawn.difficulty_interval.max(1);
    let reduction = steps.saturating_mul(spawn.step);
    spawn.initial_rate.saturating_sub(reduction).max(spawn.min_rate)
}

pub struct TornadoSystem {
    frames_since_spawn: u32,
    spawn_interval: u32,
    rng: Pcg32,
}

impl TornadoSystem {
    pub fn new(spawn: &SpawnConfig, seed: u64) -> Self {
        TornadoSystem {
            frames_since_spawn: 0,
            spawn_interval: spawn.initial_rate,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restarts the spawn timer for a new run
    pub fn reset(&mut self, spawn: &SpawnConfig) {
        self.frames_since_spawn = 0;
        self.spawn_interval = spawn.initial_rate;
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    pub fn frames_since_spawn(&self) -> u32 {
        self.frames_since_spawn
    }

    pub fn update(
        &mut self,
        world: &mut World,
        assets: &GameAssets,
        config: &GameConfig,
        elapsed_seconds: u32,
    ) -> HazardOutcome {
        self.spawn_interval = spawn_interval(&config.spawn, elapsed_seconds);

        for entity in world.iter_mut() {
            if let (Some(position), Some(tornado)) =
                (entity.position.as_mut(), entity.tornado.as_mut())
            {
                position.y += tornado.speed;
                tornado.spin(config.tornado_spin_step);
            }
        }

        if self.any_collision(world) {
            return HazardOutcome::Collision;
        }

        let field_height = config.field_height();
        let before = world.len();
        world.retain(|entity| match (&entity.position, &entity.tornado) {
            (Some(position), Some(_)) => position.y <= field_height,
            _ => true,
        });
        let culled = before - world.len();
        if culled > 0 {
            log::debug!("Culled {} tornadoes", culled);
        }

        self.frames_since_spawn += 1;
        if self.frames_since_spawn >= self.spawn_interval {
            self.frames_since_spawn = 0;
            self.spawn(world, assets, config);
        }

        HazardOutcome::Continue
    }

    fn any_collision(&self, world: &World) -> bool {
        let hitboxes: Vec<((f32, f32), f32)> = world
            .iter()
            .filter_map(|entity| {
                let position = entity.position.as_ref()?;
                let sprite = entity.sprite.as_ref()?;
                Some((
                    sprite_center(position, &sprite.image),
                    hitbox_radius(&sprite.original_image),
                ))
            })
            .collect();

        world.iter().any(|entity| {
            let (Some(position), Some(tornado)) = (&entity.position, &entity.tornado) else {
                return false;
            };
            let center = (position.x, position.y);
            hitboxes.iter().any(|&(hitbox_center, radius)| {
                circle_hits_hitbox(center, tornado.radius, hitbox_center, radius)
            })
        })
    }

    fn spawn(&mut self, world: &mut World, assets: &GameAssets, config: &GameConfig) {
        let half = tornado_visual_size(config.tornado_radius) as f32 / 2.0;
        let min_x = half;
        let max_x = config.field_width() - half;
        let x = if max_x > min_x {
            self.rng.random_range(min_x..=max_x)
        } else {
            config.field_width() / 2.0
        };
        let id = world.spawn_tornado(assets, config, x, -half);
        log::debug!(
            "Spawned tornado {:?} at x={:.1} (interval {} frames)",
            id,
            x,
            self.spawn_interval
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::tests::test_assets;
    use crate::game::world::EntityId;
    use approx::assert_relative_eq;

    fn setup() -> (World, GameAssets, GameConfig, TornadoSystem) {
        let config = GameConfig::default();
        let assets = test_assets(&config);
        let system = TornadoSystem::new(&config.spawn, 42);
        (World::new(), assets, config, system)
    }

    fn tornado_count(world: &World) -> usize {
        world.iter().filter(|e| e.tornado.is_some()).count()
    }

    #[test]
    fn test_spawn_interval_curve() {
        let spawn = SpawnConfig::default();
        assert_eq!(spawn_interval(&spawn, 0), 60);
        assert_eq!(spawn_interval(&spawn, 9), 60);
        assert_eq!(spawn_interval(&spawn, 10), 55);
        assert_eq!(spawn_interval(&spawn, 45), 40);
        assert_eq!(spawn_interval(&spawn, 90), 15);
        assert_eq!(spawn_interval(&spawn, 10_000), 15);
    }

    #[test]
    fn test_spawn_interval_monotonic_with_floor() {
        let spawn = SpawnConfig::default();
        let mut previous = spawn_interval(&spawn, 0);
        for seconds in 1..600 {
            let current = spawn_interval(&spawn, seconds);
            assert!(current <= previous);
            assert!(current >= spawn.min_rate);
            previous = current;
        }
    }

    #[test]
    fn test_tornado_falls_at_constant_speed() {
        let (mut world, assets, config, mut system) = setup();
        let id = world.spawn_tornado(&assets, &config, 400.0, 10.0);

        for _ in 0..25 {
            assert_eq!(
                system.update(&mut world, &assets, &config, 0),
                HazardOutcome::Continue
            );
        }

        let entity = world.get(id).unwrap();
        let tornado = entity.tornado.as_ref().unwrap();
        assert_relative_eq!(entity.position.unwrap().y, 10.0 + 25.0 * config.tornado_fall_speed);
        assert_relative_eq!(tornado.radius, config.tornado_radius);
        assert_relative_eq!(tornado.angle, 25.0 * config.tornado_spin_step);
    }

    #[test]
    fn test_spawns_on_interval() {
        let (mut world, assets, config, mut system) = setup();

        for _ in 0..59 {
            system.update(&mut world, &assets, &config, 0);
        }
        assert_eq!(tornado_count(&world), 0);

        system.update(&mut world, &assets, &config, 0);
        assert_eq!(tornado_count(&world), 1);
        assert_eq!(system.frames_since_spawn(), 0);

        let entity = world.iter().find(|e| e.tornado.is_some()).unwrap();
        let position = entity.position.unwrap();
        assert!(position.x >= 25.0 && position.x <= 775.0);
        assert_relative_eq!(position.y, -25.0);
    }

    #[test]
    fn test_interval_tracks_elapsed_time() {
        let (mut world, assets, config, mut system) = setup();
        system.update(&mut world, &assets, &config, 95);
        assert_eq!(system.spawn_interval(), 15);

        system.reset(&config.spawn);
        assert_eq!(system.spawn_interval(), 60);
        assert_eq!(system.frames_since_spawn(), 0);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let spawn_xs = |seed: u64| {
            let config = GameConfig::default();
            let assets = test_assets(&config);
            let mut world = World::new();
            let mut system = TornadoSystem::new(&config.spawn, seed);
            for _ in 0..180 {
                system.update(&mut world, &assets, &config, 0);
            }
            world
                .iter()
                .filter_map(|e| e.tornado.as_ref().and(e.position))
                .map(|p| p.x)
                .collect::<Vec<_>>()
        };
        assert_eq!(spawn_xs(7), spawn_xs(7));
        assert_eq!(spawn_xs(7).len(), 3);
    }

    #[test]
    fn test_culls_once_centre_passes_bottom_edge() {
        let (mut world, assets, config, mut system) = setup();
        let on_edge = world.spawn_tornado(&assets, &config, 200.0, 596.0);
        let past_edge = world.spawn_tornado(&assets, &config, 600.0, 598.0);

        // Centres move to 600 and 602
        system.update(&mut world, &assets, &config, 0);
        assert!(world.get(on_edge).is_some());
        assert!(world.get(past_edge).is_none());

        system.update(&mut world, &assets, &config, 0);
        assert!(world.get(on_edge).is_none());
    }

    fn place_heli(world: &mut World, assets: &GameAssets, config: &GameConfig) -> EntityId {
        // Helicopter 52x104 at (374, 268): centre (400, 320), hitbox radius 26
        world.spawn_helicopter(assets, config, 374.0, 268.0)
    }

    #[test]
    fn test_collision_boundary_is_strict() {
        let (mut world, assets, config, mut system) = setup();
        place_heli(&mut world, &assets, &config);

        // After one advance the tornado centre is 46 = 20 + 26 above the heli centre
        let tornado = world.spawn_tornado(&assets, &config, 400.0, 320.0 - 46.0 - 4.0);
        assert_eq!(
            system.update(&mut world, &assets, &config, 0),
            HazardOutcome::Continue
        );

        world.despawn(tornado);
        world.spawn_tornado(&assets, &config, 400.0, 320.0 - 45.0 - 4.0);
        assert_eq!(
            system.update(&mut world, &assets, &config, 0),
            HazardOutcome::Collision
        );
    }

    #[test]
    fn test_collision_short_circuits_cull_and_spawn() {
        let (mut world, assets, config, mut system) = setup();
        place_heli(&mut world, &assets, &config);
        world.spawn_tornado(&assets, &config, 400.0, 320.0);
        let falling = world.spawn_tornado(&assets, &config, 100.0, 700.0);

        assert_eq!(
            system.update(&mut world, &assets, &config, 0),
            HazardOutcome::Collision
        );
        // The off-screen tornado was not culled on the lethal frame
        assert!(world.get(falling).is_some());
        assert_eq!(system.frames_since_spawn(), 0);
    }
}
