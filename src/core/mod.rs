pub mod byte;
pub mod chunk;
pub mod line;
pub mod naming;
pub mod output;
pub mod source;

pub use naming::*;
pub use output::*;
pub use source::*;
