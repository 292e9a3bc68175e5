use fltk::{
    app::{self, Sender},
    button::{Button, ToggleButton},
    enums::{Event, Shortcut},
    group::{Flex, FlexType},
    menu::Choice,
    misc::Progress,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

use crate::app::domain::language::OcrLanguage;
use crate::app::domain::messages::Message;

pub const WINDOW_TITLE: &str = "Tesseract OCR Redesign";

pub struct MainWidgets {
    pub wind: Window,
    pub open_button: Button,
    pub language_choice: Choice,
    pub display: TextDisplay,
    pub progress: Progress,
    pub save_button: Button,
    pub copy_button: Button,
    pub theme_toggle: ToggleButton,
}

impl MainWidgets {
    /// Buffer behind the read-only text display
    pub fn text_buffer(&self) -> TextBuffer {
        self.display.buffer().unwrap_or_default()
    }
}

/// Labels for the language choice, `|`-separated as `Choice::add_choice` expects
pub fn language_choice_items() -> String {
    OcrLanguage::all()
        .iter()
        .map(|lang| lang.label())
        .collect::<Vec<_>>()
        .join("|")
}

/// Window in its startup state: English selected, dark mode off.
pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let s = *sender;

    let mut wind = Window::default()
        .with_size(600, 500)
        .with_label(WINDOW_TITLE)
        .center_screen();
    wind.set_xclass("FerrisScan");

    let mut flex = Flex::new(0, 0, 600, 500, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(6);
    flex.set_spacing(6);

    // Open + language row
    let mut top_row = Flex::default();
    top_row.set_type(FlexType::Row);
    top_row.set_spacing(6);
    let mut open_button = Button::default().with_label("Open Image/PDF");
    open_button.set_shortcut(Shortcut::Ctrl | 'o');
    open_button.set_callback(move |_| s.send(Message::FileOpen));

    let mut language_choice = Choice::default();
    language_choice.add_choice(&language_choice_items());
    let index = OcrLanguage::all().iter().position(|l| *l == OcrLanguage::default()).unwrap_or(0);
    language_choice.set_value(index as i32);
    language_choice.set_callback(move |c| {
        if let Some(label) = c.choice() {
            s.send(Message::SelectLanguage(label));
        }
    });
    top_row.fixed(&language_choice, 120);
    top_row.end();
    flex.fixed(&top_row, 32);

    let mut display = TextDisplay::default();
    display.set_buffer(TextBuffer::default());
    display.wrap_mode(WrapMode::AtBounds, 0);

    let mut progress = Progress::default();
    progress.set_minimum(0.0);
    progress.set_maximum(100.0);
    progress.set_value(0.0);
    flex.fixed(&progress, 18);

    // Save / copy / theme row
    let mut button_row = Flex::default();
    button_row.set_type(FlexType::Row);
    button_row.set_spacing(6);
    let mut save_button = Button::default().with_label("Save Text");
    save_button.set_shortcut(Shortcut::Ctrl | 's');
    save_button.set_callback(move |_| s.send(Message::SaveText));

    let mut copy_button = Button::default().with_label("Copy Text");
    copy_button.set_shortcut(Shortcut::Ctrl | Shortcut::Shift | 'c');
    copy_button.set_callback(move |_| s.send(Message::CopyText));

    let mut theme_toggle = ToggleButton::default().with_label("Dark Mode");
    theme_toggle.set_callback(move |b| s.send(Message::SetDarkMode(b.value())));
    button_row.end();
    flex.fixed(&button_row, 32);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Escape would otherwise close the window without going through the dispatch loop
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        open_button,
        language_choice,
        display,
        progress,
        save_button,
        copy_button,
        theme_toggle,
    }
}
