use fltk::text::TextBuffer;

/// Copy the contents of a `TextBuffer` into a Rust `String`.
///
/// `TextBuffer::text()` in fltk-rs leaves the `malloc()`'d copy returned by
/// `Fl_Text_Buffer_text()` behind. Extracted PDFs can run to megabytes and the
/// display is read on every save and copy, so this goes through the C API and
/// frees the copy itself.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf.as_ptr()` is the live FLTK buffer owned by `buf`.
    // `Fl_Text_Buffer_text` returns a NUL-terminated malloc'd string (or null),
    // which is copied out before being released with the matching `free`.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
