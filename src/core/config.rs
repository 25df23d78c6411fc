use serde::{Deserialize, Serialize};

use super::options::{DecodingOptions, EncodingOptions, LineLength, LineTerminator};

/// A line length as written in TOML: `76`, `"76"` or `"none"`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum LineLengthSetting {
    Columns(usize),
    Name(String),
}

impl LineLengthSetting {
    /// Resolve to one of the supported widths.
    pub fn resolve(&self) -> Result<LineLength, String> {
        match self {
            LineLengthSetting::Columns(columns) => LineLength::from_columns(*columns),
            LineLengthSetting::Name(name) => LineLength::from_str(name),
        }
    }
}

/// Encoder defaults as written in a settings file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct EncodeSettings {
    /// Wrap width: 0, 64 or 76
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_length: Option<LineLengthSetting>,
    /// Line terminator name: "cr", "lf" or "crlf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminator: Option<String>,
}

/// Decoder defaults as written in a settings file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Skip bytes outside the alphabet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_unknown_characters: Option<bool>,
}

/// Codec settings loaded from TOML files.
///
/// Every field is optional so that a later file only overrides what it
/// mentions.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub encode: EncodeSettings,
    #[serde(default)]
    pub decode: DecodeSettings,
}

impl Settings {
    /// Parses settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads settings from a custom file path.
    ///
    /// Unsupported values are rejected here, so a bad file is skipped as a
    /// whole rather than failing later commands.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every value present names a supported option.
    pub fn validate(&self) -> Result<(), String> {
        self.encoding_options().map(|_| ())
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/sextet/config.toml` (user overrides)
    /// 3. `./sextet.toml` (project-local overrides)
    ///
    /// Later files override earlier ones field by field.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("sextet").join("config.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_settings) => settings.merge(user_settings),
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("sextet.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_settings) => settings.merge(local_settings),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(settings)
    }

    /// Merges another set of settings into this one.
    ///
    /// Fields present in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.encode.line_length.is_some() {
            self.encode.line_length = other.encode.line_length;
        }
        if other.encode.terminator.is_some() {
            self.encode.terminator = other.encode.terminator;
        }
        if other.decode.ignore_unknown_characters.is_some() {
            self.decode.ignore_unknown_characters = other.decode.ignore_unknown_characters;
        }
    }

    /// Resolves the encoder section into options.
    pub fn encoding_options(&self) -> Result<EncodingOptions, String> {
        let mut options = EncodingOptions::new();
        if let Some(line_length) = &self.encode.line_length {
            options = options.with_line_length(line_length.resolve()?);
        }
        if let Some(name) = &self.encode.terminator {
            options = options.with_terminator(LineTerminator::from_str(name)?);
        }
        Ok(options)
    }

    /// Resolves the decoder section into options.
    pub fn decoding_options(&self) -> DecodingOptions {
        DecodingOptions {
            ignore_unknown_characters: self.decode.ignore_unknown_characters.unwrap_or(false),
        }
    }
}
