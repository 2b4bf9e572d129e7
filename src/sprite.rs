//! Images and the asset provider contract
//!
//! The simulation never touches pixels. An `Image` is a handle to a texture the
//! backend owns, plus the geometry the game logic needs: the unrotated (base)
//! size, the current on-screen extent, and the rotation applied to it.
//!
//! Scaling and rotating are pure: they return a new `Image` and leave the
//! receiver untouched, so a component can keep its base image forever and
//! re-derive a rotated copy every frame without drift.

use crate::config::GameConfig;
use crate::error::Result;

/// Opaque handle to a texture owned by the presentation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    texture: TextureId,
    base_width: u32,
    base_height: u32,
    width: u32,
    height: u32,
    angle: f32,
}

impl Image {
    /// Wraps a texture of the given pixel size, unrotated
    pub fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Image {
            texture,
            base_width: width,
            base_height: height,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Width of the bounding box as drawn (grows with rotation)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the bounding box as drawn (grows with rotation)
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn base_width(&self) -> u32 {
        self.base_width
    }

    pub fn base_height(&self) -> u32 {
        self.base_height
    }

    /// Counter-clockwise rotation in degrees, relative to the base image
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Returns an unrotated copy stretched to `width` x `height`
    pub fn scaled(&self, width: u32, height: u32) -> Image {
        Image::new(self.texture, width, height)
    }

    /// Returns a copy rotated counter-clockwise by `degrees`
    ///
    /// Rotations compose on the stored angle, but the extent is always
    /// computed from the base size so repeated rotation never inflates it.
    pub fn rotated(&self, degrees: f32) -> Image {
        let angle = self.angle + degrees;
        let (width, height) = rotated_extent(self.base_width, self.base_height, angle);
        Image {
            texture: self.texture,
            base_width: self.base_width,
            base_height: self.base_height,
            width,
            height,
            angle,
        }
    }
}

/// Bounding box of a `width` x `height` raster rotated by `degrees`
///
/// Quarter turns are exact. Any other angle truncates the rotated corner
/// extents to whole pixels.
pub fn rotated_extent(width: u32, height: u32, degrees: f32) -> (u32, u32) {
    let normalized = (degrees as f64).rem_euclid(360.0);
    if normalized == 0.0 || normalized == 180.0 {
        return (width, height);
    }
    if normalized == 90.0 || normalized == 270.0 {
        return (height, width);
    }

    let radians = normalized.to_radians();
    let (sin, cos) = radians.sin_cos();
    let (w, h) = (width as f64, height as f64);
    let (cx, cy, sx, sy) = (cos * w, cos * h, sin * w, sin * h);

    let new_width = (cx + sy).abs().max((cx - sy).abs());
    let new_height = (sx + cy).abs().max((sx - cy).abs());
    (new_width as u32, new_height as u32)
}

/// Source of images; implemented by the presentation backend
///
/// Failures are fatal: the game cannot start with a missing sprite.
pub trait AssetProvider {
    fn load(&mut self, path: &str) -> Result<Image>;
}

/// Every image the game needs, loaded and scaled once at startup
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub boat: Image,
    pub helicopter: Image,
    pub rotor: Image,
    pub tornado: Image,
}

impl GameAssets {
    pub fn load(provider: &mut dyn AssetProvider, config: &GameConfig) -> Result<Self> {
        let boat = provider
            .load(&config.assets.boat)?
            .scaled(config.boat_size.width, config.boat_size.height);
        let helicopter = provider
            .load(&config.assets.helicopter)?
            .scaled(config.helicopter_size.width, config.helicopter_size.height);
        let rotor = provider
            .load(&config.assets.rotor)?
            .scaled(config.rotor_size.width, config.rotor_size.height);

        // Tornado art is drawn larger than its collision circle
        let tornado_size = tornado_visual_size(config.tornado_radius);
        let tornado = provider
            .load(&config.assets.tornado)?
            .scaled(tornado_size, tornado_size);

        log::info!("Loaded boat, helicopter, rotor and tornado sprites");
        Ok(GameAssets {
            boat,
            helicopter,
            rotor,
            tornado,
        })
    }
}

/// Side length of the square tornado sprite for a given collision radius
pub fn tornado_visual_size(radius: f32) -> u32 {
    (radius * 2.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::collections::HashMap;

    struct FakeProvider {
        sizes: HashMap<String, (u32, u32)>,
        next_id: usize,
    }

    impl AssetProvider for FakeProvider {
        fn load(&mut self, path: &str) -> Result<Image> {
            let (w, h) = self.sizes.get(path).copied().ok_or_else(|| GameError::AssetLoad {
                path: path.to_string(),
                reason: "not found".to_string(),
            })?;
            self.next_id += 1;
            Ok(Image::new(TextureId(self.next_id), w, h))
        }
    }

    fn provider_for(config: &GameConfig) -> FakeProvider {
        let mut sizes = HashMap::new();
        for path in [
            &config.assets.boat,
            &config.assets.helicopter,
            &config.assets.rotor,
            &config.assets.tornado,
        ] {
            sizes.insert(path.clone(), (256, 256));
        }
        FakeProvider { sizes, next_id: 0 }
    }

    #[test]
    fn test_quarter_turns_are_exact() {
        assert_eq!(rotated_extent(52, 104, 0.0), (52, 104));
        assert_eq!(rotated_extent(52, 104, 90.0), (104, 52));
        assert_eq!(rotated_extent(52, 104, -90.0), (104, 52));
        assert_eq!(rotated_extent(52, 104, 180.0), (52, 104));
        assert_eq!(rotated_extent(52, 104, 360.0), (52, 104));
    }

    #[test]
    fn test_diagonal_rotation_grows_extent() {
        // 45 degrees: both sides become (w + h) / sqrt(2)
        let (w, h) = rotated_extent(52, 104, 45.0);
        assert_eq!(w, 110);
        assert_eq!(h, 110);
    }

    #[test]
    fn test_rotation_does_not_mutate_base() {
        let base = Image::new(TextureId(1), 52, 104);
        let rotated = base.rotated(45.0);

        assert_eq!(base.width(), 52);
        assert_eq!(base.height(), 104);
        assert_eq!(base.angle(), 0.0);
        assert_eq!(rotated.base_width(), 52);
        assert_eq!(rotated.base_height(), 104);
        assert_eq!(rotated.angle(), 45.0);
    }

    #[test]
    fn test_repeated_rotation_does_not_inflate() {
        let base = Image::new(TextureId(1), 52, 104);
        let mut image = base.clone();
        for _ in 0..8 {
            image = image.rotated(45.0);
        }
        assert_eq!((image.width(), image.height()), (52, 104));
    }

    #[test]
    fn test_assets_are_scaled_to_config() {
        let config = GameConfig::default();
        let mut provider = provider_for(&config);
        let assets = GameAssets::load(&mut provider, &config).unwrap();

        assert_eq!((assets.boat.width(), assets.boat.height()), (103, 212));
        assert_eq!((assets.helicopter.width(), assets.helicopter.height()), (52, 104));
        assert_eq!((assets.rotor.width(), assets.rotor.height()), (92, 92));
        assert_eq!((assets.tornado.width(), assets.tornado.height()), (50, 50));
    }

    #[test]
    fn test_missing_asset_is_fatal() {
        let config = GameConfig::default();
        let mut provider = provider_for(&config);
        provider.sizes.remove(&config.assets.rotor);

        let result = GameAssets::load(&mut provider, &config);
        assert!(matches!(result, Err(GameError::AssetLoad { .. })));
    }
}
