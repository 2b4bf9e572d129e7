//! SDL2 backend
//!
//! - [`SdlPlatform`] owns the window, canvas and event pump, and turns SDL
//!   events and keyboard state into a [`FrameInput`] each frame
//! - [`TextureStore`] loads PNGs through `sdl2::image` and hands out [`Image`]s
//! - [`SdlSurface`] draws the core's images, overlays and bitmap text
//!
//! Textures borrow the texture creator, so the store lives next to the
//! platform rather than inside it.

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::input_system::{FrameInput, GameAction, HeldKeys};
use crate::render::{Rgb, Surface};
use crate::sprite::{AssetProvider, Image, TextureId};
use crate::text::text_pixels;
use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::time::Instant;

const WINDOW_TITLE: &str = "Helicopter Exploration";

fn color(rgb: Rgb) -> Color {
    Color::RGB(rgb.r, rgb.g, rgb.b)
}

pub struct SdlPlatform {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    started: Instant,
    // Keep SDL alive for as long as the canvas
    _image_context: sdl2::image::Sdl2ImageContext,
    _sdl_context: sdl2::Sdl,
}

impl SdlPlatform {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(GameError::Platform)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Platform)?;
        let image_context =
            sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Platform)?;

        let window = video_subsystem
            .window(WINDOW_TITLE, config.window_width, config.window_height)
            .position_centered()
            .build()
            .map_err(|e| GameError::Platform(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| GameError::Platform(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Platform)?;

        log::info!(
            "Opened {}x{} window \"{}\"",
            config.window_width,
            config.window_height,
            WINDOW_TITLE
        );

        Ok(SdlPlatform {
            canvas,
            event_pump,
            started: Instant::now(),
            _image_context: image_context,
            _sdl_context: sdl_context,
        })
    }

    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Milliseconds since the platform was created
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Drains pending events and samples the held arrow keys
    pub fn poll_input(&mut self) -> FrameInput {
        let mut input = FrameInput::new(self.now_ms());

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    input.actions.push(GameAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Return | Keycode::KpEnter | Keycode::Space),
                    repeat: false,
                    ..
                } => {
                    input.actions.push(GameAction::Confirm);
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    input.actions.push(GameAction::Confirm);
                }
                _ => {}
            }
        }

        let keyboard = self.event_pump.keyboard_state();
        input.held = HeldKeys {
            left: keyboard.is_scancode_pressed(Scancode::Left),
            right: keyboard.is_scancode_pressed(Scancode::Right),
            up: keyboard.is_scancode_pressed(Scancode::Up),
            down: keyboard.is_scancode_pressed(Scancode::Down),
        };
        input
    }

    /// Borrows the canvas as a [`Surface`] for one frame
    pub fn surface<'p, 't>(&'p mut self, textures: &'p TextureStore<'t>) -> SdlSurface<'p, 't> {
        SdlSurface {
            canvas: &mut self.canvas,
            textures,
        }
    }
}

/// Textures loaded from disk, indexed by [`TextureId`]
pub struct TextureStore<'t> {
    creator: &'t TextureCreator<WindowContext>,
    textures: Vec<Texture<'t>>,
}

impl<'t> TextureStore<'t> {
    pub fn new(creator: &'t TextureCreator<WindowContext>) -> Self {
        TextureStore {
            creator,
            textures: Vec::new(),
        }
    }

    fn get(&self, id: TextureId) -> Option<&Texture<'t>> {
        self.textures.get(id.0)
    }
}

impl AssetProvider for TextureStore<'_> {
    fn load(&mut self, path: &str) -> Result<Image> {
        let texture = self
            .creator
            .load_texture(path)
            .map_err(|reason| GameError::AssetLoad {
                path: path.to_string(),
                reason,
            })?;
        let query = texture.query();
        let id = TextureId(self.textures.len());
        self.textures.push(texture);
        log::debug!("Loaded {} ({}x{}) as {:?}", path, query.width, query.height, id);
        Ok(Image::new(id, query.width, query.height))
    }
}

pub struct SdlSurface<'p, 't> {
    canvas: &'p mut Canvas<Window>,
    textures: &'p TextureStore<'t>,
}

impl Surface for SdlSurface<'_, '_> {
    fn clear(&mut self, rgb: Rgb) -> Result<()> {
        self.canvas.set_draw_color(color(rgb));
        self.canvas.clear();
        Ok(())
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32) -> Result<()> {
        let texture = self
            .textures
            .get(image.texture())
            .ok_or_else(|| GameError::Render(format!("unknown texture {:?}", image.texture())))?;

        // SDL rotates the destination rect about its centre, so place the
        // unrotated rect in the middle of the rotated bounding box
        let offset_x = (image.width() as f32 - image.base_width() as f32) / 2.0;
        let offset_y = (image.height() as f32 - image.base_height() as f32) / 2.0;
        let dest = Rect::new(
            (x + offset_x).round() as i32,
            (y + offset_y).round() as i32,
            image.base_width(),
            image.base_height(),
        );

        // Image angles are counter-clockwise, SDL's are clockwise
        self.canvas
            .copy_ex(texture, None, Some(dest), -image.angle() as f64, None, false, false)
            .map_err(GameError::Render)
    }

    fn fill_overlay(&mut self, rgb: Rgb, alpha: u8) -> Result<()> {
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas
            .set_draw_color(Color::RGBA(rgb.r, rgb.g, rgb.b, alpha));
        let result = self.canvas.fill_rect(None).map_err(GameError::Render);
        self.canvas.set_blend_mode(BlendMode::None);
        result
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, rgb: Rgb, scale: u32) -> Result<()> {
        self.canvas.set_draw_color(color(rgb));
        for (px, py) in text_pixels(text, x, y, scale) {
            self.canvas
                .fill_rect(Rect::new(px, py, scale, scale))
                .map_err(GameError::Render)?;
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
