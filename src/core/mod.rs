pub mod mutation;
pub mod reveal;
pub mod scores;

pub use mutation::*;
pub use reveal::*;
pub use scores::*;
