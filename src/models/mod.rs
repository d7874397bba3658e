pub mod crop;
pub mod recommendation;
pub mod season;

pub use crop::*;
pub use recommendation::*;
pub use season::*;
