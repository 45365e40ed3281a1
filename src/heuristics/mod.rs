pub mod fingerprint;
pub mod stop_words;

pub use fingerprint::*;
pub use stop_words::*;
