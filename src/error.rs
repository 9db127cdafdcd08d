//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the application.
///
/// Every variant renders as the user-facing body of an alert, so messages are
/// written as full sentences.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Color '{0}' is not a valid hex color. Format should be #RRGGBB.")]
    InvalidColor(String),

    #[error("Palette must have a name and at least one color.")]
    InvalidPalette,

    #[error("Palette text must start with a name line followed by at least one color line.")]
    InvalidImportFormat,

    #[error("A palette with the name '{0}' already exists.")]
    DuplicateName(String),

    #[error("Please select a palette to edit.")]
    NoPaletteSelected,

    #[error("The palette '{0}' could not be found.")]
    PaletteNotFound(String),

    #[error("Please add at least one color palette before saving.")]
    NothingToSave,

    #[error("No color palettes were found in the selected file.")]
    NoPalettesFound,
}

impl AppError {
    /// Short heading used as the alert title.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Io(_) | AppError::Json(_) => "File Error",
            AppError::InvalidColor(_) => "Invalid Color Format",
            AppError::InvalidPalette => "Invalid Palette",
            AppError::InvalidImportFormat => "Invalid Palette Format",
            AppError::DuplicateName(_) => "Palette Name Already Exists",
            AppError::NoPaletteSelected => "No Palette Selected",
            AppError::PaletteNotFound(_) => "Palette Not Found",
            AppError::NothingToSave => "No Palettes to Save",
            AppError::NoPalettesFound => "No Palettes Found",
        }
    }

    /// Whether the condition is a user-level warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AppError::NoPaletteSelected | AppError::NothingToSave | AppError::NoPalettesFound
        )
    }
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
