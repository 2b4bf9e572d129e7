// Shared enums and helper structs used by the screen controller

/// Last frame (exclusive) of the rotor warm-up on the deck
pub const INTRO_WARMUP_END: u32 = 120;
/// Last frame (exclusive) of the vertical take-off
pub const INTRO_TAKEOFF_END: u32 = 300;
/// Frame on which the intro hands over to play
pub const INTRO_END: u32 = 360;
/// Fade-to-black opacity added per frame after take-off
pub const FADE_STEP: u8 = 5;
/// Wall-clock milliseconds per scored second
pub const SCORE_TICK_MS: u64 = 1000;

/// Which screen the game is on
///
/// Transitions are linear except for the restart edge:
/// `Menu -> Mission -> IntroAnimation -> Playing -> GameOver -> Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Mission,
    IntroAnimation,
    Playing,
    GameOver,
}

/// Timers and counters that drive the screens
///
/// Two clocks run side by side on purpose: the intro is staged on a frame
/// counter, while the score counts wall-clock seconds so frame hitches do not
/// change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    /// Frames since the intro started
    pub intro_frame: u32,
    /// Opacity of the fade-to-black overlay
    pub fade_alpha: u8,
    /// Whole seconds survived in the current run
    pub elapsed_seconds: u32,
    /// Wall-clock time of the last scored second
    pub last_tick_ms: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_intro(&mut self) {
        self.intro_frame = 0;
        self.fade_alpha = 0;
    }

    pub fn reset_clock(&mut self, now_ms: u64) {
        self.elapsed_seconds = 0;
        self.last_tick_ms = now_ms;
    }

    /// Adds a second once a full second has passed since the last one
    ///
    /// Returns true when the counter advanced.
    pub fn tick_clock(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_tick_ms) >= SCORE_TICK_MS {
            self.elapsed_seconds += 1;
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_ticks_once_per_second() {
        let mut state = SimulationState::new();
        state.reset_clock(5_000);

        assert!(!state.tick_clock(5_999));
        assert_eq!(state.elapsed_seconds, 0);
        assert!(state.tick_clock(6_000));
        assert_eq!(state.elapsed_seconds, 1);
        // The next second is measured from the tick, not from the start
        assert!(!state.tick_clock(6_500));
        assert!(state.tick_clock(7_100));
        assert_eq!(state.elapsed_seconds, 2);
    }

    #[test]
    fn test_slow_frame_counts_one_second() {
        let mut state = SimulationState::new();
        state.reset_clock(0);
        assert!(state.tick_clock(3_500));
        assert_eq!(state.elapsed_seconds, 1);
    }

    #[test]
    fn test_reset_intro() {
        let mut state = SimulationState {
            intro_frame: 200,
            fade_alpha: 90,
            elapsed_seconds: 4,
            last_tick_ms: 10,
        };
        state.reset_intro();
        assert_eq!(state.intro_frame, 0);
        assert_eq!(state.fade_alpha, 0);
        assert_eq!(state.elapsed_seconds, 4);
    }
}
