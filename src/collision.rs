/// Collision detection for tornadoes against the helicopter
///
/// Tornadoes are circles. The helicopter is treated as a circle too: its
/// centre is the centre of the image *as drawn* (rotated bounding box), while
/// its radius comes from the *unrotated* base image. Turning the helicopter
/// therefore never inflates its hitbox.
///
/// # Architecture
///
/// - Pure functions only; the tornado system feeds them component data
/// - Touching exactly at the combined radius is not a hit (strict inequality)
use crate::components::PositionComponent;
use crate::sprite::Image;

/// Centre of a sprite drawn with its top-left at `position`
pub fn sprite_center(position: &PositionComponent, image: &Image) -> (f32, f32) {
    (
        position.x + image.width() as f32 / 2.0,
        position.y + image.height() as f32 / 2.0,
    )
}

/// Radius of the circle used as a sprite's hitbox
///
/// Half the smaller side of the unrotated image.
pub fn hitbox_radius(base_image: &Image) -> f32 {
    base_image.base_width().min(base_image.base_height()) as f32 / 2.0
}

/// Euclidean distance between two points
pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Checks whether a tornado circle overlaps a sprite hitbox
///
/// # Returns
///
/// `true` when the centres are strictly closer than the sum of the radii.
pub fn circle_hits_hitbox(
    circle_center: (f32, f32),
    circle_radius: f32,
    hitbox_center: (f32, f32),
    hitbox_radius: f32,
) -> bool {
    distance(circle_center, hitbox_center) < circle_radius + hitbox_radius
}
