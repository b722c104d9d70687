pub mod terminal;
pub mod driver;

use crate::event::{InputEvent, OutputEvent};

/// An interactive surface. Returns input only for interactive events.
pub trait Renderer {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        (**self).render(out)
    }
}
