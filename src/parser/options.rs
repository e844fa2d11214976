//! Parsing options and configuration.

/// Options for parsing Markdown resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Apply Unicode NFC normalization before splitting lines
    pub normalize_unicode: bool,

    /// Drop a leading byte order mark
    pub strip_bom: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable byte order mark stripping.
    pub fn with_bom_stripping(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Take the input exactly as given, apart from line endings.
    pub fn raw(self) -> Self {
        self.with_unicode_normalization(false).with_bom_stripping(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            strip_bom: true,
        }
    }
}
