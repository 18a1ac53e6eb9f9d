//! Common error infrastructure for sheet-core.
//!
//! The derivation engine itself never fails: malformed inputs degrade to
//! neutral values. Errors only surface from the two parsers that turn raw
//! content into typed values (attribute paths and progression tables), and the
//! engine swallows [`PathError`] by skipping the offending adjustment.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid content; reject or skip without retry.
    ///
    /// Examples: unknown attribute path, malformed progression row
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all sheet-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// A dotted attribute path (`"saves.doom"`, `"abilities.str"`) that does not
/// name anything on the character sheet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("attribute path is empty")]
    Empty,

    #[error("unknown attribute path `{0}`")]
    Unknown(String),

    #[error("unknown ability `{0}`")]
    UnknownAbility(String),

    #[error("unknown saving throw `{0}`")]
    UnknownSave(String),

    #[error("skill path `{0}` does not name a skill")]
    MissingSkill(String),
}

impl SheetError for PathError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "PATH_EMPTY",
            Self::Unknown(_) => "PATH_UNKNOWN",
            Self::UnknownAbility(_) => "PATH_UNKNOWN_ABILITY",
            Self::UnknownSave(_) => "PATH_UNKNOWN_SAVE",
            Self::MissingSkill(_) => "PATH_MISSING_SKILL",
        }
    }
}

/// A spell progression table that cannot be indexed by level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("progression table has no rows")]
    Empty,

    #[error("progression table has {rows} rows, at most {max} levels are supported")]
    TooManyRows { rows: usize, max: usize },

    #[error("progression row for level {level} has {width} ranks, expected {expected}")]
    RowWidth {
        level: usize,
        width: usize,
        expected: usize,
    },
}

impl SheetError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "PROGRESSION_EMPTY",
            Self::TooManyRows { .. } => "PROGRESSION_TOO_MANY_ROWS",
            Self::RowWidth { .. } => "PROGRESSION_ROW_WIDTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_are_validation_failures() {
        let path = PathError::Unknown("abilities.luck".into());
        assert_eq!(path.severity(), ErrorSeverity::Validation);
        assert_eq!(path.error_code(), "PATH_UNKNOWN");

        let table = ProgressionError::TooManyRows { rows: 16, max: 15 };
        assert_eq!(table.severity().as_str(), "validation");
        assert_eq!(
            table.to_string(),
            "progression table has 16 rows, at most 15 levels are supported"
        );
    }
}
