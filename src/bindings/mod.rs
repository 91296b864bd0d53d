pub mod analysis;
pub mod core;
pub mod search;


pub use analysis::*;
pub use self::core::*;
pub use search::*;
