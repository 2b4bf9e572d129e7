//! Component types attached to entities
//!
//! Each entity carries an optional slot per component kind (see
//! [`Entity`](crate::game::world::Entity)). Systems check slot presence and
//! skip entities that lack what they need.
//!
//! # Anchors
//!
//! `PositionComponent` means different things depending on what else the
//! entity owns:
//! - sprite-bearing entities (boat, helicopter): top-left of the drawn image
//! - tornadoes: centre of the collision circle
//!
//! Rendering and collision both rely on this split.

use crate::sprite::Image;

/// The helicopter artwork points up, which is 90 degrees in screen angles
pub const ARTWORK_FACING_DEGREES: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionComponent {
    pub x: f32,
    pub y: f32,
}

impl PositionComponent {
    pub fn new(x: f32, y: f32) -> Self {
        PositionComponent { x, y }
    }
}

/// Requested motion for this frame
///
/// `dx`/`dy` are overwritten from the keyboard every frame, never accumulated.
/// `speed` is the fixed magnitude used for both input and displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityComponent {
    pub dx: f32,
    pub dy: f32,
    pub speed: f32,
}

impl VelocityComponent {
    pub fn new(speed: f32) -> Self {
        VelocityComponent {
            dx: 0.0,
            dy: 0.0,
            speed,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Body sprite with a facing direction
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Source of truth; never modified after creation
    pub original_image: Image,
    /// `original_image` rotated to match `angle`
    pub image: Image,
    /// Facing direction in degrees (0 = right, 90 = up)
    pub angle: f32,
}

impl SpriteComponent {
    pub fn new(image: Image) -> Self {
        SpriteComponent {
            image: image.clone(),
            original_image: image,
            angle: 0.0,
        }
    }

    /// Turns the sprite to face `angle` degrees, re-deriving the drawn image
    pub fn face(&mut self, angle: f32) {
        self.angle = angle;
        self.image = self.original_image.rotated(angle - ARTWORK_FACING_DEGREES);
    }
}

/// Spinning rotor drawn over the body sprite
#[derive(Debug, Clone, PartialEq)]
pub struct RotorComponent {
    pub original_image: Image,
    pub image: Image,
    pub angle: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
}

impl RotorComponent {
    pub fn new(image: Image) -> Self {
        RotorComponent {
            image: image.clone(),
            original_image: image,
            angle: 0.0,
            rotation_speed: 0.0,
        }
    }

    /// Advances the rotor by one frame at its current speed
    pub fn spin(&mut self) {
        self.angle = (self.angle + self.rotation_speed).rem_euclid(360.0);
        self.image = self.original_image.rotated(self.angle);
    }
}

/// A falling tornado
///
/// `radius` is the collision radius. The sprite is larger on purpose, see
/// [`tornado_visual_size`](crate::sprite::tornado_visual_size).
#[derive(Debug, Clone, PartialEq)]
pub struct TornadoComponent {
    pub radius: f32,
    /// Pixels per frame, downwards
    pub speed: f32,
    /// Decorative spin in degrees, independent of movement
    pub angle: f32,
    pub original_image: Image,
    pub image: Image,
}

impl TornadoComponent {
    pub fn new(radius: f32, speed: f32, image: Image) -> Self {
        TornadoComponent {
            radius,
            speed,
            angle: 0.0,
            image: image.clone(),
            original_image: image,
        }
    }

    pub fn spin(&mut self, step: f32) {
        self.angle = (self.angle + step).rem_euclid(360.0);
        self.image = self.original_image.rotated(self.angle);
    }
}
