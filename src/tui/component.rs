use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props come in as struct fields, usually borrowed from the current
/// `View`. `render` takes `&mut self` because the option list writes its
/// scroll offset back into `ListState` while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to key presses.
///
/// Returns a component-level event (e.g. "activate item 3") and leaves it to
/// the event loop to turn that into a core `Action`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
