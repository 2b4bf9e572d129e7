use env_logger::Env;
use heli_storm::audio::SilentAudio;
use heli_storm::platform::sdl::{SdlPlatform, TextureStore};
use heli_storm::sprite::GameAssets;
use heli_storm::{Game, GameConfig, Result};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = GameConfig::load_or_default()?;
    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Tornado seed: {}", seed);

    let mut platform = SdlPlatform::new(&config)?;
    let texture_creator = platform.texture_creator();
    let mut textures = TextureStore::new(&texture_creator);
    let assets = GameAssets::load(&mut textures, &config)?;

    let frame_budget = config.frame_budget();
    let mut game = Game::new(config, assets, seed);
    let mut audio = SilentAudio::new();

    'running: loop {
        let frame_start = Instant::now();

        let input = platform.poll_input();
        game.update(&input, &mut audio);
        if !game.is_running() {
            break 'running;
        }

        game.render(&mut platform.surface(&textures))?;

        // Hold the frame rate at the configured FPS
        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("Goodbye");
    Ok(())
}
