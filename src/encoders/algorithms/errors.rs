use std::fmt;

/// Errors that can occur during decoding.
///
/// Decoding is all-or-nothing: an error never carries partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the alphabet and padding, in strict mode
    InvalidCharacter { byte: u8, position: usize },
    /// A data character follows padding
    InvalidPadding { position: usize },
    /// Alphabet characters plus padding do not form whole quartets
    InvalidLength { actual: usize },
}

/// The three failure categories, without diagnostic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    InvalidCharacter,
    InvalidPadding,
    InvalidLength,
}

impl DecodeError {
    /// Create an InvalidCharacter error
    pub fn invalid_character(byte: u8, position: usize) -> Self {
        DecodeError::InvalidCharacter { byte, position }
    }

    /// Create an InvalidPadding error
    pub fn invalid_padding(position: usize) -> Self {
        DecodeError::InvalidPadding { position }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(actual: usize) -> Self {
        DecodeError::InvalidLength { actual }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidCharacter { .. } => DecodeErrorKind::InvalidCharacter,
            DecodeError::InvalidPadding { .. } => DecodeErrorKind::InvalidPadding,
            DecodeError::InvalidLength { .. } => DecodeErrorKind::InvalidLength,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (error, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::InvalidCharacter { byte, position } => {
                if byte.is_ascii_graphic() {
                    writeln!(
                        f,
                        "{} invalid character '{}' at position {}",
                        error, *byte as char, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "{} invalid byte 0x{:02x} at position {}",
                        error, byte, position
                    )?;
                }
                writeln!(f)?;
                write!(
                    f,
                    "{} valid characters: {}= (use lenient decoding to skip others)",
                    hint,
                    crate::core::alphabet::ALPHABET_STR
                )
            }
            DecodeError::InvalidPadding { position } => {
                writeln!(
                    f,
                    "{} invalid padding: data at position {} follows '='",
                    error, position
                )?;
                write!(
                    f,
                    "\n{} '=' may only appear at the end of input",
                    hint
                )
            }
            DecodeError::InvalidLength { actual } => {
                writeln!(f, "{} invalid length for decode", error)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input has {} base64 characters, expected a multiple of 4",
                    actual
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "{} add padding (=) or check for missing characters",
                    hint
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
