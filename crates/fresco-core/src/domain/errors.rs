use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FrescoResult<T> = Result<T, FrescoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrescoErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    RejectedOperation,
    InternalError,
}

impl FrescoErrorCategory {
    pub const fn exit_class(self) -> ExitClass {
        match self {
            Self::Success => ExitClass {
                exit_code: 0,
                rust_category: "Success",
                severity: "INFO",
            },
            Self::InputValidationError => ExitClass {
                exit_code: 2,
                rust_category: "InputValidationError",
                severity: "ERROR",
            },
            Self::IoSystemError => ExitClass {
                exit_code: 3,
                rust_category: "IoSystemError",
                severity: "ERROR",
            },
            Self::RejectedOperation => ExitClass {
                exit_code: 4,
                rust_category: "RejectedOperation",
                severity: "ERROR",
            },
            Self::InternalError => ExitClass {
                exit_code: 5,
                rust_category: "InternalError",
                severity: "ERROR",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_class().exit_code
    }

    pub const fn rust_category(self) -> &'static str {
        self.exit_class().rust_category
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitClass {
    pub exit_code: i32,
    pub rust_category: &'static str,
    pub severity: &'static str,
}

/// Error surfaced to callers of the input-deck tooling.
///
/// Best-effort conditions (malformed lines, unknown names, failed coercions)
/// are reported through summaries instead; this type only carries
/// operations that were refused or could not run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrescoError {
    category: FrescoErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl FrescoError {
    pub fn new(
        category: FrescoErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            FrescoErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(FrescoErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn rejected(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(FrescoErrorCategory::RejectedOperation, placeholder, message)
    }

    pub const fn category(&self) -> FrescoErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!(
            "{}: [{}] {}",
            self.category.exit_class().severity,
            self.placeholder,
            self.message
        )
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for FrescoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.rust_category(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for FrescoError {}

#[cfg(test)]
mod tests {
    use super::{FrescoError, FrescoErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (FrescoErrorCategory::Success, 0, "Success"),
            (
                FrescoErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (FrescoErrorCategory::IoSystemError, 3, "IoSystemError"),
            (FrescoErrorCategory::RejectedOperation, 4, "RejectedOperation"),
            (FrescoErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, rust_category) in cases {
            let class = category.exit_class();
            assert_eq!(class.exit_code, exit_code);
            assert_eq!(class.rust_category, rust_category);
        }
    }

    #[test]
    fn rejected_move_renders_diagnostic_lines() {
        let error = FrescoError::rejected(
            "CATEGORIZE.PROTECTED_PARAMETER",
            "cannot move default parameter 'hcm' to the advanced section",
        );

        assert_eq!(error.exit_code(), 4);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [CATEGORIZE.PROTECTED_PARAMETER] cannot move default parameter 'hcm' to the advanced section"
        );
        assert_eq!(
            error.fatal_exit_line().as_deref(),
            Some("FATAL EXIT CODE: 4")
        );
    }

    #[test]
    fn success_category_has_no_fatal_line() {
        let info = FrescoError::new(FrescoErrorCategory::Success, "INFO.DONE", "ok");
        assert_eq!(info.diagnostic_line(), "INFO: [INFO.DONE] ok");
        assert!(info.fatal_exit_line().is_none());
    }
}
