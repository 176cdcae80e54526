//! External service integrations.

pub mod transport {
    pub use crate::transport::*;
}

pub mod voyager_client {
    pub use crate::voyager_client::*;
}
