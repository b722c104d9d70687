use std::path::Path;
use lineplay_core::Player;

/// Stand-in used when the binary is built without the `audio` feature.
/// Only reports what would have played.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    current: Option<String>,
}

impl Player for SilentPlayer {
    fn play(&mut self, path: &Path) -> anyhow::Result<()> {
        if !path.is_file() {
            log::warn!("{:?} cannot be found", path);
            anyhow::bail!("{} cannot be found", path.display());
        }
        log::info!("(silent) playing {:?}", path);
        self.current = Some(path.display().to_string());
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(p) = self.current.take() {
            log::debug!("(silent) stopped {}", p);
        }
    }

    fn is_playing(&self) -> bool {
        self.current.is_some()
    }
}
