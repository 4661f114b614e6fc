/// Mesh extraction command.
pub mod extract;
/// File-level statistics command.
pub mod info;
/// Payload hex dump command.
pub mod payload;
/// Layout heuristic diagnostics command.
pub mod probe;
/// Chunk tree dump command.
pub mod tree;
/// Shared argument parsing and rendering helpers.
pub(crate) mod util;
