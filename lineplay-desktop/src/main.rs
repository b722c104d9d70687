mod setup;
mod config_gen;
mod source;
#[cfg_attr(feature = "audio", allow(dead_code))]
mod player;
#[cfg(feature = "audio")]
mod audio;

use std::env;
use std::path::Path;
use std::sync::Arc;
use anyhow::Context;
use linescript_core::parser::Parser;
use lineplay_core::config::{DebugConfig, SystemConfig, VoiceConfig};
use lineplay_core::renderer::driver::Driver;
use lineplay_core::{Player, Session, TerminalRenderer};

const USAGE: &str = "usage: lineplay-desktop [SCRIPT] [--voices DIR] [--speaker NAME]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    script: Option<String>,
    voices: Option<String>,
    speaker: Option<String>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => out.help = true,
            "--voices" => out.voices = Some(it.next().context("--voices needs a directory")?),
            "--speaker" => out.speaker = Some(it.next().context("--speaker needs a name")?),
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {}\n{}", flag, USAGE),
            _ => out.script = Some(arg),
        }
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    setup::init();
    log::info!(">>> Lineplay Launcher Started <<<");

    if let Some(script) = &args.script {
        lineplay_shared::config::set("system", "script_path", script.as_str())?;
    }
    if let Some(dir) = &args.voices {
        lineplay_shared::config::set("voice", "voice_dir", dir.as_str())?;
    }

    let sys_cfg = SystemConfig::load();
    let voice_cfg = VoiceConfig::load();
    let script_path = &sys_cfg.script_path;

    log::info!("Loading script from config: {}", script_path);
    if !Path::new(script_path).exists() {
        log::error!("Script file not found: {}", script_path);
        anyhow::bail!("Script '{}' not found. Please check config.toml or file path.", script_path);
    }

    let paragraphs = source::read_paragraphs(script_path)?;
    let script = Parser::new(&paragraphs)
        .parse()
        .with_context(|| format!("Parse failed for {}", script_path))?;
    if DebugConfig::load().show_script {
        log::debug!("Script: {:#?}", script);
    }
    log::info!(
        "Parsing complete: {} entries, {} lines, speakers {:?}",
        script.len(),
        script.item_count(),
        script.speakers()
    );

    let player = make_player(&voice_cfg)?;
    let mut session = Session::new(Arc::new(script), player, &voice_cfg);
    if let Some(name) = args.speaker.as_deref() {
        session.set_filter(Some(name));
    }

    let steps = Driver::new(session, TerminalRenderer::new()).run();
    log::info!("Session closed after {} inputs", steps);
    Ok(())
}

#[cfg(feature = "audio")]
fn make_player(cfg: &VoiceConfig) -> anyhow::Result<Box<dyn Player>> {
    log::info!("Audio: kira");
    Ok(Box::new(audio::KiraPlayer::new(cfg.volume)?))
}

#[cfg(not(feature = "audio"))]
fn make_player(_cfg: &VoiceConfig) -> anyhow::Result<Box<dyn Player>> {
    log::info!("Audio: disabled (build with --features audio)");
    Ok(Box::new(player::SilentPlayer::default()))
}
