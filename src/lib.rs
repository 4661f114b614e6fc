//! Public library API for decoding chunked scene containers and extracting mesh geometry.

/// Chunk tree decoding, layout heuristics, mesh assembly, and OBJ export.
pub mod scene;
