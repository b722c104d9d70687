use std::path::Path;
use std::time::Duration;
use anyhow::Context;
use kira::{AudioManager, AudioManagerSettings, Decibels, DefaultBackend, Tween};
use kira::sound::PlaybackState;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use lineplay_core::Player;

const STOP_FADE: Duration = Duration::from_millis(80);

/// Plays voice files through the default output device.
pub struct KiraPlayer {
    manager: AudioManager<DefaultBackend>,
    handle: Option<StaticSoundHandle>,
    volume: Decibels,
}

impl KiraPlayer {
    pub fn new(volume: f32) -> anyhow::Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to initialize audio manager: {:?}", e))?;
        Ok(Self {
            manager,
            handle: None,
            volume: Self::amplitude_to_db(volume),
        })
    }

    fn amplitude_to_db(amplitude: f32) -> Decibels {
        if amplitude <= 0.001 {
            Decibels::SILENCE
        } else {
            Decibels(20.0 * amplitude.log10())
        }
    }
}

impl Player for KiraPlayer {
    fn play(&mut self, path: &Path) -> anyhow::Result<()> {
        self.stop();
        let data = StaticSoundData::from_file(path)
            .with_context(|| format!("{:?} cannot be loaded", path))?
            .volume(self.volume);
        let handle = self.manager.play(data)
            .map_err(|e| anyhow::anyhow!("kira play error: {:?}", e))?;
        log::debug!("Voice playing: {:?}", path);
        self.handle = Some(handle);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop(Tween { duration: STOP_FADE, ..Default::default() });
        }
    }

    fn is_playing(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|h| !matches!(h.state(), PlaybackState::Stopped))
    }
}
