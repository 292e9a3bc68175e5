use fltk::{app, prelude::*};

use ferris_scan::app::domain::Message;
use ferris_scan::app::state::AppState;
use ferris_scan::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets);
    state.widgets.wind.show();
    // After show() so the Windows title bar has a handle to theme
    state.set_dark_mode(false);

    log::info!("FerrisScan {} started (OCR language {})", env!("CARGO_PKG_VERSION"), state.language.code());

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpen => state.file_open(),
                Message::SaveText => state.save_text(),
                Message::CopyText => state.copy_text(),
                Message::SelectLanguage(label) => state.select_language(&label),
                Message::SetDarkMode(is_dark) => state.set_dark_mode(is_dark),
                Message::WindowClose => app.quit(),
            }
        }
    }
}
