pub(crate) mod api_client;
pub(crate) mod error;
pub(crate) mod failure_kind;

pub use api_client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use failure_kind::FailureKind;
