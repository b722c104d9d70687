use crate::event::{InputEvent, OutputEvent};
use crate::playback::Player;
use crate::renderer::Renderer;
use crate::session::Session;

/// Pumps a [`Session`] through a [`Renderer`] until the surface exits.
pub struct Driver<P, R> {
    session: Session<P>,
    renderer: R,
}

impl<P: Player, R: Renderer> Driver<P, R> {
    pub fn new(session: Session<P>, renderer: R) -> Self {
        Self { session, renderer }
    }

    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    pub fn into_parts(self) -> (Session<P>, R) {
        (self.session, self.renderer)
    }

    /// Returns the number of inputs consumed.
    pub fn run(&mut self) -> usize {
        let mut steps = 0;
        let mut batch = self.session.start();
        loop {
            let Some(input) = self.dispatch(&batch) else {
                log::info!("Driver finished after {} inputs", steps);
                return steps;
            };
            log::debug!("input: {:?}", input);
            steps += 1;
            batch = self.session.feed(input);
        }
    }

    fn dispatch(&mut self, batch: &[OutputEvent]) -> Option<InputEvent> {
        let mut input = None;
        for ev in batch {
            if matches!(ev, OutputEvent::End) {
                self.renderer.render(ev);
                return None;
            }
            let answer = self.renderer.render(ev);
            if ev.is_interactive() {
                // surface gave up
                input = Some(answer.unwrap_or(InputEvent::Exit));
            }
        }
        input
    }
}
