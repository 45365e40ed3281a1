pub mod relation;
pub mod speaker;
pub mod token;

pub use relation::*;
pub use speaker::*;
pub use token::*;
