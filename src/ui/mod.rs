pub mod busy;
pub mod file_dialogs;
pub mod main_window;
pub mod theme;
