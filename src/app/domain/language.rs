/// Languages offered for OCR. Each maps to a Tesseract traineddata code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrLanguage {
    #[default]
    English,
    Spanish,
    French,
}

impl OcrLanguage {
    /// Tesseract language code passed with `-l`
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::Spanish => "spa",
            Self::French => "fra",
        }
    }

    /// Label shown in the language choice
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
        }
    }

    /// All languages, in the order they appear in the choice widget
    pub fn all() -> &'static [OcrLanguage] {
        &[Self::English, Self::Spanish, Self::French]
    }

    /// Match a choice label, ignoring case. Anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.label().eq_ignore_ascii_case(label))
    }
}

/// The language currently used for OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSelection {
    current: OcrLanguage,
}

impl LanguageSelection {
    pub fn current(&self) -> OcrLanguage {
        self.current
    }

    pub fn code(&self) -> &'static str {
        self.current.code()
    }

    /// Select by label. Returns false and keeps the previous language when
    /// the label is not one of ours.
    pub fn select(&mut self, label: &str) -> bool {
        match OcrLanguage::from_label(label) {
            Some(lang) => {
                self.current = lang;
                true
            }
            None => false,
        }
    }
}
