use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub script_path: String,
    pub log_path:    String,
    pub log_level:   String,
    pub log_to_stdout: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub voice_dir: String,
    pub extension: String, // 不带点
    pub volume:    f32,
    pub autoplay:  bool,
    pub advance_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub show_script: bool,
}

impl SystemConfig {
    pub fn load() -> Self {
        lineplay_shared::config::get("system")
    }
}

impl VoiceConfig {
    pub fn load() -> Self {
        lineplay_shared::config::get("voice")
    }
}

impl DebugConfig {
    pub fn load() -> Self {
        lineplay_shared::config::get("debug")
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            script_path: "script.txt".into(),
            log_path:    "logs/".into(),
            log_level:   "info".into(),
            log_to_stdout: true,
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice_dir: "voices/".into(),
            extension: "ogg".into(),
            volume: 1.0,
            autoplay: true,
            advance_delay_ms: 500,
        }
    }
}
