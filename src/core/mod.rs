// Normalization layer: pure transforms from raw payloads to records
pub mod models {
    pub use crate::models::*;
}

pub mod scrubbing {
    pub use crate::scrubbing::*;
}

pub mod extract {
    pub use crate::extract::*;
}

pub mod errors {
    pub use crate::errors::*;
}
