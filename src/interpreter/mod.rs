mod interpreter;
mod value;

pub use interpreter::*;
pub use value::*;
