/*
[INPUT]:  HTTP client configuration and Conduit API methods
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - Conduit API communication
[UPDATE]: When adding new methods or changing client behavior
*/

pub mod capabilities;
pub mod client;
pub mod error;
pub mod maniphest;
pub mod project;
pub mod search;

pub use capabilities::{Capabilities, MethodSpec, PageStyle};
pub use client::{ClientConfig, ConduitClient};
pub use error::{ConduitError, Result};
