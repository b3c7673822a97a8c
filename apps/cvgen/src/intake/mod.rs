pub mod form;
pub mod loader;
pub mod normalize;
pub mod snapshot;
pub mod validation;

pub use form::{FormSnapshotProvider, FormState, StaticForm};
pub use loader::{FileSource, TemplateSource, UrlSource};
pub use snapshot::SnapshotStore;
pub use validation::validate_record;
