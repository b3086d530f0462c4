/*!
## Rust Machine Module

This Rust module loads a listing into a program and runs it.

*/

pub type Address = usize;

mod canvas;
mod function;
mod listing;
mod program;
mod runtime;
mod var;

pub use canvas::file_name;
pub use canvas::Canvas;
pub use function::Function;
pub use listing::Listing;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
