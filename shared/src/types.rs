/// Workspace-wide result type for plumbing that does not need a tagged error.
pub type Result<T> = anyhow::Result<T>;
