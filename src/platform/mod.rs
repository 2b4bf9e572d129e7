//! Platform backends
//!
//! The simulation talks to the outside world through four narrow contracts:
//! [`AssetProvider`](crate::sprite::AssetProvider),
//! [`Surface`](crate::render::Surface), [`FrameInput`](crate::input_system::FrameInput)
//! and [`Audio`](crate::audio::Audio). Backends here implement them.

#[cfg(feature = "sdl")]
pub mod sdl;
