//! Audio playback contract
//!
//! Audio is fire-and-forget: the game asks for a track and never reads
//! anything back, so sound can never influence the simulation.

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Rotor spin-up and take-off during the intro
    Rotor,
    /// In-flight storm ambience
    Storm,
}

pub trait Audio {
    /// Starts `track`, replacing whatever was playing
    fn play(&mut self, track: Track, looped: bool);

    /// Stops playback
    fn stop(&mut self);
}

/// Audio backend that plays nothing and only logs requests
#[derive(Debug, Default)]
pub struct SilentAudio {
    current: Option<Track>,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track that would be playing right now
    pub fn current(&self) -> Option<Track> {
        self.current
    }
}

impl Audio for SilentAudio {
    fn play(&mut self, track: Track, looped: bool) {
        log::debug!("Audio: play {:?} (looped: {})", track, looped);
        self.current = Some(track);
    }

    fn stop(&mut self) {
        if let Some(track) = self.current.take() {
            log::debug!("Audio: stop {:?}", track);
        }
    }
}
