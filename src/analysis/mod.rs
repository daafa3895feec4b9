pub mod parser;
pub mod prompts;
pub mod types;

pub use parser::*;
pub use prompts::*;
pub use types::*;
