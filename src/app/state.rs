use std::path::Path;

use fltk::{app, dialog, prelude::*};

use super::domain::language::LanguageSelection;
use super::infrastructure::buffer::buffer_text;
use super::services::extraction::extract_text;
use super::services::output::{clipboard_payload, text_to_save, write_text};
use crate::ui::busy::BusyIndicator;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub widgets: MainWidgets,
    pub busy: BusyIndicator,
    pub language: LanguageSelection,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets) -> Self {
        let busy = BusyIndicator::new(widgets.progress.clone(), widgets.wind.clone());
        Self {
            widgets,
            busy,
            language: LanguageSelection::default(),
            dark_mode: false,
        }
    }

    fn show_error(&self, message: &str) {
        dialog::message_title("Error");
        dialog::alert_default(message);
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog() {
            self.open_path(&path);
        }
    }

    /// Clear the display, extract `path` on this thread and show the result.
    /// On failure the display stays empty and an error dialog is shown.
    pub fn open_path(&mut self, path: &Path) {
        let mut buffer = self.widgets.text_buffer();
        buffer.set_text("");

        self.busy.start();
        let result = extract_text(path, self.language.current());
        self.busy.stop();

        match result {
            Ok(text) => {
                buffer.set_text(&text);
                self.widgets.display.scroll(0, 0);
            }
            Err(e) => {
                log::error!("Failed to extract {}: {}", path.display(), e);
                self.show_error(&format!("Error processing file: {}", e));
            }
        }
    }

    pub fn save_text(&mut self) {
        let text = buffer_text(&self.widgets.text_buffer());
        let text = match text_to_save(&text) {
            Ok(text) => text,
            Err(e) => {
                self.show_error(&e.to_string());
                return;
            }
        };

        if let Some(path) = native_save_dialog() {
            if let Err(e) = write_text(&path, text) {
                log::error!("Failed to save {}: {}", path.display(), e);
                self.show_error(&format!("Error saving file: {}", e));
            }
        }
    }

    pub fn copy_text(&mut self) {
        let text = buffer_text(&self.widgets.text_buffer());
        if let Some(payload) = clipboard_payload(&text) {
            app::copy(payload);
            log::debug!("Copied {} characters to the clipboard", payload.chars().count());
        }
    }

    // --- Options ---

    pub fn select_language(&mut self, label: &str) {
        if self.language.select(label) {
            log::info!("OCR language set to {}", self.language.code());
        } else {
            log::warn!("Ignoring unknown language '{}', keeping {}", label, self.language.code());
        }
    }

    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
        apply_theme(&mut self.widgets, is_dark);
        if self.widgets.theme_toggle.value() != is_dark {
            self.widgets.theme_toggle.set_value(is_dark);
        }
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, is_dark);
    }
}
