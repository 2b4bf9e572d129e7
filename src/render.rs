/// Entity render system and the presentation surface contract
///
/// The render system is a pure consumer of the world: it draws whatever
/// components an entity owns, in a fixed layer order, and holds no game rules.
///
/// # Layer order (per entity)
///
/// 1. Tornado, centred on its position
/// 2. Body sprite, top-left at its position
/// 3. Rotor, centred over the body sprite (needs a sibling sprite)
///
/// Entities are visited in creation order, so the boat is always below the
/// helicopter during the intro.
use crate::error::Result;
use crate::game::world::World;
use crate::sprite::Image;

/// Vertical offset of the rotor hub below the top quarter of the body
const ROTOR_HUB_OFFSET: f32 = 20.0;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const SEA_BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Presentation backend the core draws through
///
/// Implemented by the SDL2 platform layer, and by a recording surface in tests.
pub trait Surface {
    /// Fills the whole frame with `color`
    fn clear(&mut self, color: Rgb) -> Result<()>;

    /// Draws `image` with the top-left of its (rotated) bounding box at `(x, y)`
    fn draw_image(&mut self, image: &Image, x: f32, y: f32) -> Result<()>;

    /// Blends a full-screen rectangle of `color` at `alpha` over the frame
    fn fill_overlay(&mut self, color: Rgb, alpha: u8) -> Result<()>;

    /// Draws bitmap text with its top-left at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb, scale: u32) -> Result<()>;

    /// Shows the finished frame
    fn present(&mut self);
}

#[derive(Debug, Default)]
pub struct RenderSystem;

impl RenderSystem {
    pub fn new() -> Self {
        RenderSystem
    }

    /// Draws every positioned entity and advances rotors by one frame
    pub fn update(&self, world: &mut World, surface: &mut dyn Surface) -> Result<()> {
        for entity in world.iter_mut() {
            let Some(position) = entity.position else {
                continue;
            };

            if let Some(tornado) = &entity.tornado {
                let image = &tornado.image;
                surface.draw_image(
                    image,
                    position.x - image.width() as f32 / 2.0,
                    position.y - image.height() as f32 / 2.0,
                )?;
            }

            if let Some(sprite) = &entity.sprite {
                surface.draw_image(&sprite.image, position.x, position.y)?;
            }

            if let Some(rotor) = entity.rotor.as_mut() {
                rotor.spin();
                if let Some(sprite) = &entity.sprite {
                    let body = &sprite.image;
                    let blades = &rotor.image;
                    let x = position.x + body.width() as f32 / 2.0 - blades.width() as f32 / 2.0;
                    let y = position.y + body.height() as f32 / 4.0 - blades.height() as f32 / 2.0
                        + ROTOR_HUB_OFFSET;
                    surface.draw_image(blades, x, y)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::components::{RotorComponent, SpriteComponent, TornadoComponent};
    use crate::game::world::EntityBuilder;
    use crate::sprite::TextureId;
    use approx::assert_relative_eq;

    /// One recorded call on the surface
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Clear(Rgb),
        Image { texture: TextureId, x: f32, y: f32 },
        Overlay(Rgb, u8),
        Text(String),
        Present,
    }

    /// Surface that records draw calls instead of drawing
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn images(&self) -> Vec<(TextureId, f32, f32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Image { texture, x, y } => Some((*texture, *x, *y)),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text(text) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn overlays(&self) -> Vec<u8> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Overlay(_, alpha) => Some(*alpha),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Rgb) -> Result<()> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn draw_image(&mut self, image: &Image, x: f32, y: f32) -> Result<()> {
            self.calls.push(DrawCall::Image {
                texture: image.texture(),
                x,
                y,
            });
            Ok(())
        }

        fn fill_overlay(&mut self, color: Rgb, alpha: u8) -> Result<()> {
            self.calls.push(DrawCall::Overlay(color, alpha));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _color: Rgb, _scale: u32) -> Result<()> {
            self.calls.push(DrawCall::Text(text.to_string()));
            Ok(())
        }

        fn present(&mut self) {
            self.calls.push(DrawCall::Present);
        }
    }

    const BODY: TextureId = TextureId(1);
    const BLADES: TextureId = TextureId(2);
    const FUNNEL: TextureId = TextureId(3);

    #[test]
    fn test_layer_order_within_entity() {
        let mut world = World::new();
        world.spawn(
            EntityBuilder::new()
                .position(100.0, 100.0)
                .tornado(TornadoComponent::new(20.0, 4.0, Image::new(FUNNEL, 50, 50)))
                .sprite(SpriteComponent::new(Image::new(BODY, 52, 104)))
                .rotor(RotorComponent::new(Image::new(BLADES, 92, 92))),
        );

        let mut surface = RecordingSurface::default();
        RenderSystem::new().update(&mut world, &mut surface).unwrap();

        let textures: Vec<TextureId> = surface.images().iter().map(|(t, _, _)| *t).collect();
        assert_eq!(textures, vec![FUNNEL, BODY, BLADES]);
    }

    #[test]
    fn test_tornado_drawn_centered() {
        let mut world = World::new();
        world.spawn(
            EntityBuilder::new()
                .position(200.0, 300.0)
                .tornado(TornadoComponent::new(20.0, 4.0, Image::new(FUNNEL, 50, 50))),
        );

        let mut surface = RecordingSurface::default();
        RenderSystem::new().update(&mut world, &mut surface).unwrap();
        assert_eq!(surface.images(), vec![(FUNNEL, 175.0, 275.0)]);
    }

    #[test]
    fn test_rotor_centered_over_body() {
        let mut world = World::new();
        world.spawn(
            EntityBuilder::new()
                .position(374.0, 268.0)
                .sprite(SpriteComponent::new(Image::new(BODY, 52, 104)))
                .rotor(RotorComponent::new(Image::new(BLADES, 92, 92))),
        );

        let mut surface = RecordingSurface::default();
        RenderSystem::new().update(&mut world, &mut surface).unwrap();

        let (_, x, y) = surface.images()[1];
        assert_relative_eq!(x, 374.0 + 26.0 - 46.0);
        assert_relative_eq!(y, 268.0 + 26.0 - 46.0 + 20.0);
    }

    #[test]
    fn test_rotor_spins_every_render() {
        let mut world = World::new();
        let mut rotor = RotorComponent::new(Image::new(BLADES, 92, 92));
        rotor.rotation_speed = 30.0;
        let id = world.spawn(
            EntityBuilder::new()
                .position(0.0, 0.0)
                .sprite(SpriteComponent::new(Image::new(BODY, 52, 104)))
                .rotor(rotor),
        );

        let system = RenderSystem::new();
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            system.update(&mut world, &mut surface).unwrap();
        }
        assert_relative_eq!(world.get(id).unwrap().rotor.as_ref().unwrap().angle, 90.0);
    }

    #[test]
    fn test_unpositioned_entities_are_skipped() {
        let mut world = World::new();
        world.spawn(EntityBuilder::new().sprite(SpriteComponent::new(Image::new(BODY, 10, 10))));

        let mut surface = RecordingSurface::default();
        RenderSystem::new().update(&mut world, &mut surface).unwrap();
        assert!(surface.calls.is_empty());
    }
}
