use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Filter for the open dialog. FLTK adds "All Files" on its own, so any
/// file can still be picked.
pub fn open_dialog_filter() -> &'static str {
    "Images and PDFs\t*.{pdf,png,jpg}"
}

fn run_chooser(kind: FileDialogType, title: &str, filter: Option<&str>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    if let Some(filter) = filter {
        nfc.set_filter(filter);
    }
    nfc.show(); // blocks until closed
    chosen_path(nfc.filename())
}

/// An empty path means the dialog was cancelled. The path is otherwise
/// passed on untouched, so non-UTF-8 names survive.
fn chosen_path(path: PathBuf) -> Option<PathBuf> {
    if path.as_os_str().is_empty() { None } else { Some(path) }
}

pub fn native_open_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open Image or PDF", Some(open_dialog_filter()))
}

/// Save dialog. No extension is appended and existing files are replaced
/// without asking.
pub fn native_save_dialog() -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save Text", None)
}
