//! Password field display mode.

use crate::domain::messages::{GLYPH_MASKED, GLYPH_VISIBLE};

/// Whether the password input shows its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Visible,
}

impl PasswordVisibility {
    /// Reads the mode back from an input `type` attribute. Anything other than
    /// `password` is plain text.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some("password") => Self::Masked,
            _ => Self::Visible,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Visible,
            Self::Visible => Self::Masked,
        }
    }

    /// The `type` attribute for the password input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Visible => "text",
        }
    }

    /// The toggle control's label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Masked => GLYPH_MASKED,
            Self::Visible => GLYPH_VISIBLE,
        }
    }
}
