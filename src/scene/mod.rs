mod bytes;
mod chunk;
mod error;
mod extract;
mod file;
mod layout;
mod mesh;
mod obj;
mod query;
/// Tag constants for the paired mesh chunks.
pub mod tags;

#[cfg(test)]
mod test_support;

/// Bounds-checked little-endian readers.
pub use bytes::{Cursor, read_f32_le, read_u16_le, read_u32_le};
/// Chunk tree types and decoder entry points.
pub use chunk::{Chunk, ChunkHeader, DecodeOptions, HEADER_SIZE, decode, decode_all, decode_all_with, decode_with};
/// Error and result aliases.
pub use error::{Result, SceneError};
/// Batch extraction and export.
pub use extract::{
	ArtifactStems, ExportReport, ExtractOptions, MeshOutcome, MeshSource, SkippedMesh, WrittenMesh, export_meshes, extract_meshes, pair_mesh_chunks,
	sanitize_stem,
};
/// In-memory container file.
pub use file::SceneFile;
/// Payload start heuristics.
pub use layout::{PADDING_BYTE, ProbeOptions, all_plausible_normal_offsets, first_non_padding_offset, first_plausible_normal_offset};
/// Mesh record and assembly.
pub use mesh::{Face, FaceVertex, Mesh, MeshLayout, VertexStart, assemble_mesh, decode_faces, decode_name, vertex_stream_start};
/// OBJ serialization.
pub use obj::{save_obj, write_obj};
/// Tree queries and statistics.
pub use query::{TreeStats, find_all, find_all_in, find_at_offset, walk};
/// Tag constants and helpers.
pub use tags::{ChunkTags, is_parent_tag, tag_hex, tag_name};
