use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Loads `path` into the global store. A missing file means "all defaults".
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    init_from_str(&content)
}

pub fn init_from_str(content: &str) -> anyhow::Result<()> {
    let table: Table = toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    });

    GLOBAL_CONFIG.set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Reads section `[key]`, falling back to `T::default()` when it is absent or malformed.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config read for '[{}]' before init, using default.", key);
        return T::default();
    };
    let Ok(read_guard) = store.read() else {
        log::error!("Config store poisoned, using default for '[{}]'.", key);
        return T::default();
    };

    match read_guard.get(key) {
        Some(value) => value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

/// Overrides a single `[section] key = value` entry at runtime (command-line flags).
pub fn set(section: &str, key: &str, value: impl Into<toml::Value>) -> anyhow::Result<()> {
    let store = GLOBAL_CONFIG.get()
        .ok_or_else(|| anyhow::anyhow!("Config not initialized"))?;
    let mut write_guard = store.write()
        .map_err(|_| anyhow::anyhow!("Config store poisoned"))?;

    let entry = write_guard
        .entry(section.to_string())
        .or_insert(toml::Value::Table(Table::new()));
    match entry.as_table_mut() {
        Some(table) => {
            table.insert(key.to_string(), value.into());
            Ok(())
        }
        None => anyhow::bail!("Config key '{}' is not a section", section),
    }
}
