//! Helicopter storm-dodging arcade game
//!
//! The simulation core (world, systems, screen controller) is platform
//! independent and drives everything through the [`render::Surface`],
//! [`sprite::AssetProvider`] and [`audio::Audio`] traits. The SDL2 backend
//! in [`platform`] is only compiled with the `sdl` feature.

pub mod audio;
pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod movement;
pub mod platform;
pub mod render;
pub mod sprite;
pub mod text;
pub mod tornado;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, Screen};
