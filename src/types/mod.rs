pub mod error;
pub mod form;
pub mod id;
pub mod timestamp;

pub use error::Error;
pub use id::Id;
pub use timestamp::Timestamp;
