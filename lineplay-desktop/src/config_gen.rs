use std::fs;
use std::path::Path;
use serde::Serialize;
use lineplay_core::config::{DebugConfig, SystemConfig, VoiceConfig};

#[derive(Serialize, Default)]
struct FullConfig {
    system: SystemConfig,
    voice: VoiceConfig,
    debug: DebugConfig,
}

pub fn default_config_toml() -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(&FullConfig::default())?)
}

// 日志还没初始化，只能直接打印
pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let toml_str = match default_config_toml() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        println!("Config file created successfully.");
    }
}
