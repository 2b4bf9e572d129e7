//! Error types for Heli Storm
//!
//! Asset and configuration errors only happen at startup and are fatal there.
//! Render and platform errors bubble out of the frame loop and end the run.

use thiserror::Error;

/// Errors that can occur while setting up or running the game
#[derive(Debug, Error)]
pub enum GameError {
    /// An image could not be loaded or scaled
    #[error("Failed to load {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The presentation surface rejected a draw call
    #[error("Render error: {0}")]
    Render(String),

    /// Window, event pump or other backend setup failed
    #[error("Platform error: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
