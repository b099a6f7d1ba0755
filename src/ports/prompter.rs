use crate::domain::{AppError, LanguageVariant};

/// Port for collecting answers the command line did not supply.
///
/// `Ok(None)` means the user cancelled.
pub trait Prompter {
    fn package_name(&self) -> Result<Option<String>, AppError>;

    fn scope(&self) -> Result<Option<String>, AppError>;

    fn language_variant(&self) -> Result<Option<LanguageVariant>, AppError>;

    fn will_use_in_browser(&self) -> Result<Option<bool>, AppError>;
}
