use std::sync::Arc;
use std::time::Duration;
use linescript_core::ast::Script;
use crate::config::VoiceConfig;
use crate::event::{InputEvent, OutputEvent};
use crate::navigator::{Navigator, Position};
use crate::playback::{Player, VoiceResolver};

/// Couples the cursor with a [`Player`] so that only one line is ever in flight.
///
/// Every batch returned by [`Session::feed`] ends with its interactive event.
pub struct Session<P> {
    nav: Navigator,
    player: P,
    voices: VoiceResolver,
    autoplay: bool,
    advance_delay: Duration,
}

impl<P: Player> Session<P> {
    pub fn new(script: impl Into<Arc<Script>>, player: P, cfg: &VoiceConfig) -> Self {
        Self {
            nav: Navigator::new(script),
            player,
            voices: VoiceResolver::from_config(cfg),
            autoplay: cfg.autoplay,
            advance_delay: Duration::from_millis(cfg.advance_delay_ms),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// The first screen, before any input.
    pub fn start(&mut self) -> Vec<OutputEvent> {
        let mut out = Vec::new();
        if self.autoplay {
            self.play_current(&mut out);
        }
        out.push(self.show());
        out
    }

    pub fn feed(&mut self, ev: InputEvent) -> Vec<OutputEvent> {
        let mut out = Vec::new();
        match ev {
            InputEvent::Next => {
                let before = self.nav.position();
                self.nav.advance();
                if self.moved(before) {
                    self.stop(&mut out);
                    if self.autoplay {
                        if !self.advance_delay.is_zero() {
                            std::thread::sleep(self.advance_delay);
                        }
                        self.play_current(&mut out);
                    }
                }
            }
            InputEvent::Prev => {
                let before = self.nav.position();
                self.nav.retreat();
                if self.moved(before) {
                    self.stop(&mut out);
                    if self.autoplay {
                        self.play_current(&mut out);
                    }
                }
            }
            InputEvent::Replay => {
                self.stop(&mut out);
                self.play_current(&mut out);
            }
            InputEvent::Stop => self.stop(&mut out),
            InputEvent::Reset => {
                let before = self.nav.position();
                self.nav.reset();
                if self.moved(before) {
                    self.stop(&mut out);
                }
            }
            InputEvent::SetFilter(speaker) => self.set_filter(speaker.as_deref()),
            InputEvent::ListSpeakers => out.push(OutputEvent::Speakers {
                names: self
                    .nav
                    .available_speakers()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                selected: self.nav.filter().map(str::to_string),
            }),
            InputEvent::Exit => {
                self.stop(&mut out);
                out.push(OutputEvent::End);
                return out;
            }
        }
        out.push(self.show());
        out
    }

    /// Applies a speaker filter without rendering, e.g. before [`Session::start`].
    pub fn set_filter(&mut self, speaker: Option<&str>) {
        log::info!("Speaker filter: {}", speaker.unwrap_or("<all>"));
        self.nav.set_filter(speaker);
    }

    fn moved(&self, before: Option<Position>) -> bool {
        self.nav.position() != before
    }

    fn stop(&mut self, out: &mut Vec<OutputEvent>) {
        if self.player.is_playing() {
            self.player.stop();
            out.push(OutputEvent::StopVoice);
        }
    }

    fn play_current(&mut self, out: &mut Vec<OutputEvent>) {
        let Some(item) = self.nav.current() else {
            return;
        };
        let resource_id = item.resource_id().to_string();
        let path = self.voices.resolve(&resource_id);
        match self.player.play(&path) {
            Ok(()) => out.push(OutputEvent::PlayVoice { resource_id, path }),
            Err(e) => {
                log::error!("Playback of {:?} failed: {:#}", path, e);
                out.push(OutputEvent::PlaybackFailed {
                    resource_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn show(&self) -> OutputEvent {
        match self.nav.peek() {
            Some(cue) => OutputEvent::ShowLine {
                speaker: cue.speaker.to_string(),
                text: cue.item.text().to_string(),
                resource_id: cue.item.resource_id().to_string(),
                entry: cue.position.entry + 1,
                item: cue.position.item + 1,
                entries: self.nav.len(),
                has_prev: self.nav.has_prev(),
                has_next: self.nav.has_next(),
                filter: self.nav.filter().map(str::to_string),
            },
            None => OutputEvent::ShowEmpty {
                filter: self.nav.filter().map(str::to_string),
            },
        }
    }
}
