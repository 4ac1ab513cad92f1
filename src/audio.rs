//! Ambient audio mix
//!
//! The simulation never plays sound. It emits [`AudioCue`]s on state
//! transitions and the host feeds them to an [`AmbientMix`], which keeps the
//! target volume of each looping track. The host's audio backend reads the
//! mix and applies it.

use serde::{Deserialize, Serialize};

/// Background music volume during play
pub const MUSIC_VOLUME: f32 = 0.2;
/// River ambience volume during play
pub const WAVES_VOLUME: f32 = 0.08;
/// Ducked volumes while the game-over screen is up
pub const MUSIC_VOLUME_DUCKED: f32 = 0.05;
pub const WAVES_VOLUME_DUCKED: f32 = 0.02;
/// One-shot game over sting
pub const GAME_OVER_STING_VOLUME: f32 = 0.5;

/// Ambient loudness requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbientLevel {
    Normal,
    Ducked,
}

/// Discrete cue keyed to a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Start the music and river loops
    StartAmbient,
    /// Play the game over sting once
    GameOverSting,
    /// Change the loops' volume
    AmbientVolume(AmbientLevel),
}

/// A looping track's state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    pub playing: bool,
    pub volume: f32,
}

/// Target mix for the looping tracks plus pending one-shots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmbientMix {
    pub music: Track,
    pub waves: Track,
    /// One-shot volumes queued since the last [`AmbientMix::take_one_shots`]
    one_shots: Vec<f32>,
}

impl AmbientMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a cue from the simulation
    pub fn apply(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::StartAmbient => {
                self.music = Track {
                    playing: true,
                    volume: MUSIC_VOLUME,
                };
                self.waves = Track {
                    playing: true,
                    volume: WAVES_VOLUME,
                };
            }
            AudioCue::GameOverSting => self.one_shots.push(GAME_OVER_STING_VOLUME),
            AudioCue::AmbientVolume(level) => {
                let (music, waves) = match level {
                    AmbientLevel::Normal => (MUSIC_VOLUME, WAVES_VOLUME),
                    AmbientLevel::Ducked => (MUSIC_VOLUME_DUCKED, WAVES_VOLUME_DUCKED),
                };
                self.music.volume = music;
                self.waves.volume = waves;
                // Restoring volume also restarts loops that were stopped
                if level == AmbientLevel::Normal {
                    self.music.playing = true;
                    self.waves.playing = true;
                }
            }
        }
        log::debug!(
            "Audio cue {:?}: music {:.2}, waves {:.2}",
            cue,
            self.music.volume,
            self.waves.volume
        );
    }

    /// Drain queued one-shot volumes
    pub fn take_one_shots(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.one_shots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_until_started() {
        let mix = AmbientMix::new();
        assert!(!mix.music.playing);
        assert!(!mix.waves.playing);
    }

    #[test]
    fn test_start_duck_restore() {
        let mut mix = AmbientMix::new();
        mix.apply(AudioCue::StartAmbient);
        assert_eq!(mix.music.volume, MUSIC_VOLUME);
        assert_eq!(mix.waves.volume, WAVES_VOLUME);

        mix.apply(AudioCue::AmbientVolume(AmbientLevel::Ducked));
        assert_eq!(mix.music.volume, MUSIC_VOLUME_DUCKED);
        assert_eq!(mix.waves.volume, WAVES_VOLUME_DUCKED);
        assert!(mix.music.playing);

        mix.apply(AudioCue::AmbientVolume(AmbientLevel::Normal));
        assert_eq!(mix.music.volume, MUSIC_VOLUME);
        assert_eq!(mix.waves.volume, WAVES_VOLUME);
    }

    #[test]
    fn test_sting_is_one_shot() {
        let mut mix = AmbientMix::new();
        mix.apply(AudioCue::GameOverSting);
        assert_eq!(mix.take_one_shots(), vec![GAME_OVER_STING_VOLUME]);
        assert!(mix.take_one_shots().is_empty());
    }
}
