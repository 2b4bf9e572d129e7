//! Kinematic movement with sprite orientation
//!
//! Only entities with a position, a velocity *and* a sprite move. There is no
//! point-mass path: an entity without a sprite keeps its position whatever its
//! velocity says.
//!
//! # Algorithm
//!
//! 1. Zero velocity: nothing changes, including the facing angle.
//! 2. Facing angle = `atan2(-dy, dx)` in degrees (screen y grows downwards).
//! 3. The sprite is re-derived from its base image for that angle.
//! 4. Displacement is re-projected from `speed` along the facing angle, so the
//!    helicopter always travels exactly where its nose points.
//! 5. The position is clamped so the *rotated* image stays inside the field.

use crate::game::world::World;

pub struct MovementSystem {
    field_width: f32,
    field_height: f32,
}

impl MovementSystem {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        MovementSystem {
            field_width,
            field_height,
        }
    }

    pub fn update(&self, world: &mut World) {
        for entity in world.iter_mut() {
            let (Some(position), Some(velocity), Some(sprite)) = (
                entity.position.as_mut(),
                entity.velocity.as_ref(),
                entity.sprite.as_mut(),
            ) else {
                continue;
            };

            if velocity.is_zero() {
                continue;
            }

            let angle = (-velocity.dy).atan2(velocity.dx).to_degrees();
            sprite.face(angle);

            let angle_rad = angle.to_radians();
            position.x += velocity.speed * angle_rad.cos();
            position.y -= velocity.speed * angle_rad.sin();

            // Extents come from the rotated image; they change with the angle
            let max_x = self.field_width - sprite.image.width() as f32;
            let max_y = self.field_height - sprite.image.height() as f32;
            position.x = position.x.min(max_x).max(0.0);
            position.y = position.y.min(max_y).max(0.0);
        }
    }
}
