use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;

/// The colours a theme sets. Both palettes set every field, so switching
/// back and forth always lands on exactly the same colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text_background: Color,
    pub text_foreground: Color,
    pub window_background: Color,
    pub button_background: Color,
    pub button_label: Color,
}

pub fn light_gray() -> Color {
    Color::from_rgb(192, 192, 192)
}

pub fn dark_gray() -> Color {
    Color::from_rgb(64, 64, 64)
}

impl Palette {
    pub fn light() -> Palette {
        Palette {
            text_background: Color::White,
            text_foreground: Color::Black,
            window_background: light_gray(),
            button_background: Color::White,
            button_label: Color::Black,
        }
    }

    pub fn dark() -> Palette {
        Palette {
            text_background: dark_gray(),
            text_foreground: Color::White,
            window_background: dark_gray(),
            button_background: dark_gray(),
            button_label: Color::White,
        }
    }

    pub fn for_mode(is_dark: bool) -> Palette {
        if is_dark { Self::dark() } else { Self::light() }
    }
}

/// Recolour the window. Only colours change; sizes and layout are untouched.
pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let palette = Palette::for_mode(is_dark);

    widgets.display.set_color(palette.text_background);
    widgets.display.set_text_color(palette.text_foreground);
    widgets.display.set_cursor_color(palette.text_foreground);
    widgets.wind.set_color(palette.window_background);

    for button in [&mut widgets.open_button, &mut widgets.save_button, &mut widgets.copy_button] {
        button.set_color(palette.button_background);
        button.set_label_color(palette.button_label);
        button.redraw();
    }

    widgets.display.redraw();
    widgets.wind.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };
    let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

    // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE on Windows 10 2004+ and 11, 19 before that
    for attribute in [20, 19] {
        // SAFETY: hwnd belongs to a shown window and `on` outlives the call.
        unsafe {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
