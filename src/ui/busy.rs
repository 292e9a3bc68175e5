use fltk::{
    app,
    enums::{Color, Cursor},
    misc::Progress,
    prelude::*,
    window::Window,
};

/// Busy flag shown while a blocking extraction runs on the UI thread.
///
/// The event loop is stalled during the call, so this is a static "working"
/// bar plus a wait cursor rather than an animation.
pub struct BusyIndicator {
    progress: Progress,
    window: Window,
}

impl BusyIndicator {
    pub fn new(progress: Progress, window: Window) -> Self {
        Self { progress, window }
    }

    pub fn start(&mut self) {
        self.progress.set_selection_color(Color::from_rgb(70, 130, 180));
        self.progress.set_value(self.progress.maximum());
        self.progress.set_label("Working...");
        self.window.set_cursor(Cursor::Wait);
        self.progress.redraw();
        // Paint now, before the caller blocks
        app::flush();
    }

    pub fn stop(&mut self) {
        self.progress.set_value(self.progress.minimum());
        self.progress.set_label("");
        self.window.set_cursor(Cursor::Default);
        self.progress.redraw();
    }
}
