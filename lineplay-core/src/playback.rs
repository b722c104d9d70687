use std::path::{Path, PathBuf};
use crate::config::VoiceConfig;

/// External audio collaborator.
///
/// `play` starts playback and returns without waiting for the sound to end;
/// `stop` cancels whatever is in flight. Neither is called concurrently.
pub trait Player {
    fn play(&mut self, path: &Path) -> anyhow::Result<()>;
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn play(&mut self, path: &Path) -> anyhow::Result<()> {
        (**self).play(path)
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }
}

/// Maps a resource id to `<voice_dir>/<id>.<extension>`. Never touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceResolver {
    base: PathBuf,
    extension: String,
}

impl VoiceResolver {
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        Self {
            base: base.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn from_config(cfg: &VoiceConfig) -> Self {
        Self::new(&cfg.voice_dir, cfg.extension.as_str())
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, resource_id: &str) -> PathBuf {
        if self.extension.is_empty() {
            self.base.join(resource_id)
        } else {
            self.base.join(format!("{}.{}", resource_id, self.extension))
        }
    }
}
