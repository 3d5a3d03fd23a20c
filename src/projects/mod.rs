pub mod store;
pub mod sqlite_store;
pub mod handlers;

pub use store::{
    ProjectStore,
    Project,
    NewProject,
};
pub use sqlite_store::{SqliteProjectStore, SEED_PROJECTS};
