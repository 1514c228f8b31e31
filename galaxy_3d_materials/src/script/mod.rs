//! Script module
//!
//! Turns `.shaderset` / `.material` text files into generic trees of named
//! nodes. The material factory only consumes the trees.

mod script_node;
mod script_parser;
mod script_loader;

pub use script_node::ScriptNode;
pub use script_parser::ScriptFile;
pub use script_loader::ScriptLoader;
