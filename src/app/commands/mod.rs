pub mod create;

pub use create::{CreateOptions, CreateOutcome, InstallStatus, VcsStatus};
