//! Screen-Space GUI
//!
//! Static screens and overlays drawn at fixed screen positions, independent
//! of the entities in the world. Every component draws through the
//! [`Surface`](crate::render::Surface) trait so it can be tested without a
//! window.
//!
//! # Available Components
//!
//! - [`MenuScreen`] - Title screen with the "BEGIN" prompt
//! - [`MissionScreen`] - Mission briefing shown before take-off
//! - [`TimerHud`] - Elapsed time in the top-right corner during play
//! - [`GameOverScreen`] - Overlay with the survived time and restart prompt
//!
//! # Example Usage
//!
//! ```ignore
//! let menu = MenuScreen::new();
//! menu.render(&mut surface, 800, 600)?;
//! surface.present();
//! ```

pub mod game_over;
pub mod hud;
pub mod menu;
pub mod mission;

pub use game_over::GameOverScreen;
pub use hud::TimerHud;
pub use menu::MenuScreen;
pub use mission::MissionScreen;
