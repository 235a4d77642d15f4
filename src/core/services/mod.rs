pub mod clock;
pub mod storage;

pub use clock::*;
pub use storage::*;
