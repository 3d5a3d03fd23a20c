use async_trait::async_trait;

use crate::error::AppError;

/// A portfolio project as shown on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

/// Input for adding a project. The store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_file_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_file_name: image_file_name.into(),
        }
    }
}

/// Backend-agnostic project store.
///
/// Route handlers call this trait, never a concrete implementation.
/// No field constraints are enforced here; form validation happens in the caller.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Create the projects table if needed and seed it when empty.
    /// Returns how many seed rows were inserted (0 once any row exists).
    async fn initialize(&self) -> Result<usize, AppError>;

    /// List all projects, newest (highest id) first.
    async fn list_all(&self) -> Result<Vec<Project>, AppError>;

    /// Insert a project, letting the store assign the next id.
    async fn add(&self, input: NewProject) -> Result<(), AppError>;

    /// Number of stored projects.
    async fn count(&self) -> Result<usize, AppError>;
}
