// World struct and entity management
//
// This module contains the World struct which owns every live entity.
// It provides the factories for the boat, helicopter and tornadoes, and the
// bookkeeping the systems need (lookup by id, culling, clearing).

use crate::components::{
    PositionComponent, RotorComponent, SpriteComponent, TornadoComponent, VelocityComponent,
};
use crate::config::GameConfig;
use crate::sprite::GameAssets;

/// Identifier of a live entity
///
/// Ids are never reused while the `World` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// An entity is an id plus one optional slot per component kind
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub position: Option<PositionComponent>,
    pub velocity: Option<VelocityComponent>,
    pub sprite: Option<SpriteComponent>,
    pub rotor: Option<RotorComponent>,
    pub tornado: Option<TornadoComponent>,
}

impl Entity {
    fn empty(id: EntityId) -> Self {
        Entity {
            id,
            position: None,
            velocity: None,
            sprite: None,
            rotor: None,
            tornado: None,
        }
    }
}

/// Builder for the component slots of a new entity
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    position: Option<PositionComponent>,
    velocity: Option<VelocityComponent>,
    sprite: Option<SpriteComponent>,
    rotor: Option<RotorComponent>,
    tornado: Option<TornadoComponent>,
}

impl EntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Some(PositionComponent::new(x, y));
        self
    }

    pub fn velocity(mut self, velocity: VelocityComponent) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn rotor(mut self, rotor: RotorComponent) -> Self {
        self.rotor = Some(rotor);
        self
    }

    pub fn tornado(mut self, tornado: TornadoComponent) -> Self {
        self.tornado = Some(tornado);
        self
    }
}

/// World owns every live entity
///
/// Entities are stored in creation order. Removing an entity drops all of its
/// components with it; nothing else holds references into the world.
#[derive(Debug, Default)]
pub struct World {
    entities: Vec<Entity>,
    next_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity built from `builder` and returns its id
    pub fn spawn(&mut self, builder: EntityBuilder) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let mut entity = Entity::empty(id);
        entity.position = builder.position;
        entity.velocity = builder.velocity;
        entity.sprite = builder.sprite;
        entity.rotor = builder.rotor;
        entity.tornado = builder.tornado;
        self.entities.push(entity);
        id
    }

    /// Removes an entity; returns false if it was not alive
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|entity| entity.id != id);
        self.entities.len() != before
    }

    /// Keeps only the entities for which `keep` returns true
    pub fn retain(&mut self, keep: impl FnMut(&Entity) -> bool) {
        self.entities.retain(keep);
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Spawns the boat centred in the play field
    pub fn spawn_boat(&mut self, assets: &GameAssets, config: &GameConfig) -> EntityId {
        let (x, y) = config.boat_position();
        let id = self.spawn(
            EntityBuilder::new()
                .position(x, y)
                .sprite(SpriteComponent::new(assets.boat.clone())),
        );
        log::debug!("Spawned boat {:?} at ({}, {})", id, x, y);
        id
    }

    /// Spawns the player helicopter with its top-left at `(x, y)`
    ///
    /// The rotor starts stopped; callers set its speed.
    pub fn spawn_helicopter(
        &mut self,
        assets: &GameAssets,
        config: &GameConfig,
        x: f32,
        y: f32,
    ) -> EntityId {
        let id = self.spawn(
            EntityBuilder::new()
                .position(x, y)
                .velocity(VelocityComponent::new(config.helicopter_speed))
                .sprite(SpriteComponent::new(assets.helicopter.clone()))
                .rotor(RotorComponent::new(assets.rotor.clone())),
        );
        log::debug!("Spawned helicopter {:?} at ({}, {})", id, x, y);
        id
    }

    /// Spawns a tornado centred on `(x, y)`
    pub fn spawn_tornado(
        &mut self,
        assets: &GameAssets,
        config: &GameConfig,
        x: f32,
        y: f32,
    ) -> EntityId {
        self.spawn(
            EntityBuilder::new()
                .position(x, y)
                .tornado(TornadoComponent::new(
                    config.tornado_radius,
                    config.tornado_fall_speed,
                    assets.tornado.clone(),
                )),
        )
    }
}
