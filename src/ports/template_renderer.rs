use serde::Serialize;

use crate::domain::AppError;

/// Port for rendering text templates against a serializable context.
pub trait TemplateRenderer {
    fn render<C: Serialize>(
        &self,
        template_name: &str,
        template: &str,
        context: &C,
    ) -> Result<String, AppError>;
}
