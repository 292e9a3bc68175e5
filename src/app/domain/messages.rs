/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    SaveText,
    WindowClose,

    // Text
    CopyText,

    // Options
    /// Carries the label picked in the language choice
    SelectLanguage(String),
    /// Carries the toggle button's new state
    SetDarkMode(bool),
}
