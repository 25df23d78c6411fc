//! Encoding and decoding options, plus buffer sizing rules.

/// Maximum line width of wrapped output.
///
/// Only the two widths used by MIME (76) and PEM (64) are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineLength {
    /// Single unbroken line
    #[default]
    None,
    /// 64 characters per line
    Columns64,
    /// 76 characters per line
    Columns76,
}

impl LineLength {
    /// Parse a line length from its column count or name.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "0" | "none" | "off" => Ok(LineLength::None),
            "64" => Ok(LineLength::Columns64),
            "76" => Ok(LineLength::Columns76),
            _ => Err(format!(
                "Unsupported line length: {} (expected 0, 64 or 76)",
                s
            )),
        }
    }

    /// Build from a numeric column count.
    pub fn from_columns(columns: usize) -> Result<Self, String> {
        match columns {
            0 => Ok(LineLength::None),
            64 => Ok(LineLength::Columns64),
            76 => Ok(LineLength::Columns76),
            _ => Err(format!(
                "Unsupported line length: {} (expected 0, 64 or 76)",
                columns
            )),
        }
    }

    /// Number of output characters per line; 0 means no wrapping.
    pub fn columns(&self) -> usize {
        match self {
            LineLength::None => 0,
            LineLength::Columns64 => 64,
            LineLength::Columns76 => 76,
        }
    }
}

/// Line terminator written between wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// Carriage return (`\r`)
    Cr,
    /// Line feed (`\n`)
    Lf,
    /// Carriage return then line feed (`\r\n`)
    #[default]
    CrLf,
}

impl LineTerminator {
    /// Parse a terminator name.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "cr" => Ok(LineTerminator::Cr),
            "lf" | "nl" => Ok(LineTerminator::Lf),
            "crlf" => Ok(LineTerminator::CrLf),
            _ => Err(format!(
                "Unknown line terminator: {} (expected cr, lf or crlf)",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Cr => "cr",
            LineTerminator::Lf => "lf",
            LineTerminator::CrLf => "crlf",
        }
    }

    /// The bytes emitted for this terminator.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineTerminator::Cr => b"\r",
            LineTerminator::Lf => b"\n",
            LineTerminator::CrLf => b"\r\n",
        }
    }
}

/// Options controlling encoder output layout.
///
/// The default produces a single line with no terminators.
///
/// # Example
///
/// ```
/// use sextet::{EncodingOptions, LineTerminator};
///
/// let options = EncodingOptions::wrap_64().with_terminator(LineTerminator::Lf);
/// assert_eq!(options.line_length.columns(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodingOptions {
    pub line_length: LineLength,
    /// Explicit terminator; `None` falls back to CRLF when wrapping.
    pub terminator: Option<LineTerminator>,
}

impl EncodingOptions {
    /// Unwrapped output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap at 64 characters (PEM style).
    pub fn wrap_64() -> Self {
        Self::new().with_line_length(LineLength::Columns64)
    }

    /// Wrap at 76 characters (MIME style).
    pub fn wrap_76() -> Self {
        Self::new().with_line_length(LineLength::Columns76)
    }

    pub fn with_line_length(mut self, line_length: LineLength) -> Self {
        self.line_length = line_length;
        self
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = Some(terminator);
        self
    }

    /// True when line wrapping is requested.
    pub fn wraps(&self) -> bool {
        self.line_length != LineLength::None
    }

    /// The terminator actually written when wrapping.
    pub fn effective_terminator(&self) -> LineTerminator {
        self.terminator.unwrap_or_default()
    }
}

/// Options controlling decoder strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodingOptions {
    /// Skip bytes outside the alphabet instead of failing.
    ///
    /// In this mode a trailing incomplete quartet is not an error: bytes
    /// already completed are kept and the leftover bits are dropped.
    pub ignore_unknown_characters: bool,
}

impl DecodingOptions {
    /// Strict decoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoding that skips unknown characters such as whitespace.
    pub fn lenient() -> Self {
        Self {
            ignore_unknown_characters: true,
        }
    }
}

/// Exact length of `encode` output for `n` input bytes.
pub fn encoded_len(n: usize, options: &EncodingOptions) -> usize {
    let chars = n.div_ceil(3) * 4;
    let columns = options.line_length.columns();
    if columns == 0 || chars == 0 {
        return chars;
    }

    // One terminator per full line, except after the last character
    let breaks = (chars - 1) / columns;
    chars + breaks * options.effective_terminator().as_bytes().len()
}

/// Worst-case output size for `n` input bytes under any options.
///
/// Every 48 input bytes become 64 characters plus a two-byte terminator.
pub fn estimate_encoded_capacity(n: usize) -> usize {
    ((n + 47) * 66) / 48
}

/// Upper bound on decoded size for `n` input bytes.
pub fn decoded_capacity(n: usize) -> usize {
    (n * 3) / 4
}
