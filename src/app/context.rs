use crate::ports::{ProjectFilesystem, TemplateRenderer, TemplateTreeStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, T: TemplateTreeStore, R: TemplateRenderer> {
    filesystem: F,
    templates: T,
    renderer: R,
}

impl<F: ProjectFilesystem, T: TemplateTreeStore, R: TemplateRenderer> AppContext<F, T, R> {
    /// Create a new application context.
    pub fn new(filesystem: F, templates: T, renderer: R) -> Self {
        Self { filesystem, templates, renderer }
    }

    /// Filesystem rooted at the project being generated.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the template tree store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
