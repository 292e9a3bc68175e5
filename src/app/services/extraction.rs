//! Turning a chosen file into text.
//!
//! The file name's suffix alone picks the route: PDFs go through
//! `pdf-extract`, JPEG and PNG images through Tesseract. Anything else
//! yields an empty string rather than an error.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use rusty_tesseract::{Args, Image};

use crate::app::domain::language::OcrLanguage;
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    Pdf,
    Ocr,
    Unsupported,
}

impl ExtractionStrategy {
    /// Decide from the text after the last `.` in the file name, ignoring case.
    pub fn for_path(path: &Path) -> Self {
        let extension = file_extension(path);
        if extension.eq_ignore_ascii_case("pdf") {
            Self::Pdf
        } else if extension.eq_ignore_ascii_case("jpg") || extension.eq_ignore_ascii_case("png") {
            Self::Ocr
        } else {
            Self::Unsupported
        }
    }
}

/// Suffix after the last dot of the file name, or "" when there is none.
///
/// Unlike `Path::extension`, a dot-file such as `.png` counts as having the
/// suffix `png`.
pub fn file_extension(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// Extract the text of `path`. Blocks until the underlying library returns.
pub fn extract_text(path: &Path, language: OcrLanguage) -> Result<String> {
    let strategy = ExtractionStrategy::for_path(path);
    log::info!("Extracting {} ({:?})", path.display(), strategy);

    let text = match strategy {
        ExtractionStrategy::Pdf => extract_pdf_text(path)?,
        ExtractionStrategy::Ocr => ocr_image(path, language)?,
        ExtractionStrategy::Unsupported => {
            log::warn!("Unsupported file type, nothing extracted: {}", path.display());
            String::new()
        }
    };

    log::info!("Extracted {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}

/// Text of every page, in document order.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    // pdf-extract panics on some malformed documents instead of returning an error
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path))) {
        Ok(result) => Ok(result?),
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unreadable document".to_string());
            log::error!("PDF extraction panicked for {}: {}", path.display(), reason);
            Err(AppError::Pdf(reason))
        }
    }
}

/// Run Tesseract on an image file with the given language model.
pub fn ocr_image(path: &Path, language: OcrLanguage) -> Result<String> {
    let image = load_ocr_image(path)?;
    let args = tesseract_args(language);
    log::debug!("Running tesseract with -l {}", args.lang);
    Ok(rusty_tesseract::image_to_string(&image, &args)?)
}

/// Decode the file ourselves so Tesseract never re-judges the file name;
/// `Image::from_path` rejects dot-files such as `.png`.
pub fn load_ocr_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)?;
    Ok(Image::from_dynamic_image(&decoded)?)
}

/// Only the language is set; dpi, page segmentation and engine mode are
/// left to Tesseract.
pub fn tesseract_args(language: OcrLanguage) -> Args {
    Args {
        lang: language.code().to_string(),
        config_variables: HashMap::new(),
        dpi: None,
        psm: None,
        oem: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_pdf_suffix_any_case() {
        for name in ["report.pdf", "REPORT.PDF", "scan.Pdf", "/tmp/a.b/c.pdf"] {
            assert_eq!(ExtractionStrategy::for_path(Path::new(name)), ExtractionStrategy::Pdf, "{name}");
        }
    }

    #[test]
    fn test_image_suffixes_any_case() {
        for name in ["photo.jpg", "photo.JPG", "shot.png", "shot.PnG"] {
            assert_eq!(ExtractionStrategy::for_path(Path::new(name)), ExtractionStrategy::Ocr, "{name}");
        }
    }

    #[test]
    fn test_other_suffixes_unsupported() {
        for name in ["notes.txt", "photo.jpeg", "scan.tiff", "README", "archive.pdf.zip", "trailing."] {
            assert_eq!(
                ExtractionStrategy::for_path(Path::new(name)),
                ExtractionStrategy::Unsupported,
                "{name}"
            );
        }
    }

    #[test]
    fn test_directory_dots_do_not_count() {
        let path = PathBuf::from("/home/user/scans.pdf/README");
        assert_eq!(ExtractionStrategy::for_path(&path), ExtractionStrategy::Unsupported);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("a/b/page.tar.PNG")), "PNG");
        assert_eq!(file_extension(Path::new(".png")), "png");
        assert_eq!(file_extension(Path::new("noext")), "");
        assert_eq!(file_extension(Path::new("dot.")), "");
    }

    #[test]
    fn test_unsupported_file_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text is not extracted").unwrap();

        let text = extract_text(&path, OcrLanguage::English).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_missing_extension_yields_empty_text() {
        let text = extract_text(Path::new("/nonexistent/file-without-extension"), OcrLanguage::French).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_pdf_suffix_goes_to_pdf_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.PDF");
        fs::write(&path, "this is not a PDF document").unwrap();

        let err = extract_text(&path, OcrLanguage::English).unwrap_err();
        assert!(matches!(err, AppError::Pdf(_)), "got {err:?}");
    }

    fn write_blank_png(path: &Path) {
        image::RgbImage::from_pixel(64, 32, image::Rgb([255, 255, 255]))
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    /// Two-page PDF with one line of text per page.
    fn write_two_page_pdf(path: &Path, first: &str, second: &str) {
        use lopdf::content::{Content, Operation};
        use lopdf::{Document, Object, Stream, dictionary};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in [first, second] {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => 2,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_pdf_text_from_every_page_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two-pages.pdf");
        write_two_page_pdf(&path, "FirstPageText", "SecondPageText");

        let text = extract_text(&path, OcrLanguage::English).unwrap();
        let first = text.find("FirstPageText").expect("first page missing");
        let second = text.find("SecondPageText").expect("second page missing");
        assert!(first < second);
    }

    #[test]
    fn test_tesseract_args_use_selected_language() {
        assert_eq!(tesseract_args(OcrLanguage::English).lang, "eng");
        assert_eq!(tesseract_args(OcrLanguage::Spanish).lang, "spa");
        assert_eq!(tesseract_args(OcrLanguage::French).lang, "fra");
    }

    #[test]
    fn test_tesseract_args_add_no_tuning() {
        let args = tesseract_args(OcrLanguage::English);
        assert_eq!(args.dpi, None);
        assert_eq!(args.psm, None);
        assert_eq!(args.oem, None);
        assert!(args.config_variables.is_empty());
    }

    #[test]
    fn test_dot_file_png_loads_for_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".png");
        write_blank_png(&path);

        assert_eq!(ExtractionStrategy::for_path(&path), ExtractionStrategy::Ocr);
        assert!(load_ocr_image(&path).is_ok());
    }

    #[test]
    fn test_dot_file_png_extracts_without_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".png");
        write_blank_png(&path);

        // Without a tesseract binary this is an OCR error, but never a format rejection
        match extract_text(&path, OcrLanguage::English) {
            Ok(text) => assert!(text.trim().is_empty()),
            Err(AppError::Ocr(msg)) => assert!(!msg.contains("allowed image formats"), "{msg}"),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_image_suffix_goes_to_ocr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = extract_text(&path, OcrLanguage::Spanish).unwrap_err();
        assert!(matches!(err, AppError::Ocr(_)), "got {err:?}");
    }
}
