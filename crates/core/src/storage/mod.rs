mod error;
mod http_mapping;
mod timeout;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use timeout::{with_timeout, OPERATION_TIMEOUT};
pub use traits::NoteRepository;
