/// Column decode command.
pub mod decode;
/// Per-field wire dump command.
pub mod dump;
/// JSON lines encode command.
pub mod encode;
/// Tag table listing command.
pub mod tags;

mod util;
