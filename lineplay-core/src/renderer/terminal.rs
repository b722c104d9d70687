use crate::event::{InputEvent, OutputEvent};
use crate::renderer::Renderer;
use std::io::{stdin, stdout, BufRead, Write};

const HELP: &str = "[enter/n] next  [p] prev  [r] replay  [s] stop  [0] restart  \
                    [:speakers] list  [:filter NAME] / [:all]  [q] quit";

/// Line-oriented stdin/stdout surface.
pub struct TerminalRenderer<I = std::io::StdinLock<'static>, O = std::io::Stdout> {
    input: I,
    output: O,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_io(stdin().lock(), stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: BufRead, O: Write> TerminalRenderer<I, O> {
    pub fn with_io(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            log::warn!("terminal write failed: {}", e);
        }
    }

    fn wait_input(&mut self) -> Option<InputEvent> {
        loop {
            let _ = write!(self.output, "> ");
            let _ = self.output.flush();
            let mut buf = String::new();
            match self.input.read_line(&mut buf) {
                // EOF
                Ok(0) => return Some(InputEvent::Exit),
                Ok(_) => {}
                Err(e) => {
                    log::error!("stdin read failed: {}", e);
                    return Some(InputEvent::Exit);
                }
            }
            if let Some(ev) = InputEvent::from_command(&buf) {
                return Some(ev);
            }
            if buf.trim() == "?" {
                self.say(format_args!("{}", HELP));
            } else {
                self.say(format_args!("invalid"));
            }
        }
    }
}

impl<I: BufRead, O: Write> Renderer for TerminalRenderer<I, O> {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        match out {
            OutputEvent::ShowLine { speaker, text, resource_id, entry, item, entries, has_next, filter, .. } => {
                let scope = filter.as_deref().unwrap_or("all");
                self.say(format_args!("[{}/{} #{} {}] ({})", entry, entries, item, scope, resource_id));
                self.say(format_args!("{}: {}", speaker, text));
                if !has_next {
                    self.say(format_args!("-- end of {} --", scope));
                }
                self.wait_input()
            }
            OutputEvent::ShowEmpty { filter } => {
                match filter {
                    Some(name) => self.say(format_args!("[Empty] no lines for {}", name)),
                    None => self.say(format_args!("[Empty] script has no dialogue")),
                }
                self.wait_input()
            }
            OutputEvent::Speakers { names, selected } => {
                self.say(format_args!("--- speakers ---"));
                for n in names {
                    let mark = if selected.as_deref() == Some(n.as_str()) { "*" } else { " " };
                    self.say(format_args!(" {} {}", mark, n));
                }
                None
            }
            OutputEvent::PlayVoice { path, .. } => {
                log::debug!("[PlayVoice] {:?}", path);
                None
            }
            OutputEvent::PlaybackFailed { resource_id, reason } => {
                self.say(format_args!("[Voice] {} unavailable: {}", resource_id, reason));
                None
            }
            OutputEvent::StopVoice => None,
            OutputEvent::End => {
                self.say(format_args!("bye"));
                None
            }
        }
    }
}
