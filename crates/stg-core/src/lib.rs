pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, StairError};
pub use tolerance::Tolerance;
pub use traits::{BoundingBox, Validate};
