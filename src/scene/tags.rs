/// High bit marking a tag whose payload is a sequence of nested chunks.
pub const PARENT_FLAG: u32 = 0x8000_0000;

/// Interleaved vertex stream of one mesh.
pub const MESH_DATA: u32 = 0x0013_4B01;
/// Mesh descriptor carrying the mesh name.
pub const MESH_NAME: u32 = 0x0013_4011;
/// Triangle list of 16-bit vertex indices.
pub const TRIANGLE_INDICES: u32 = 0x0013_4B03;

/// Return `true` when `tag` marks a parent chunk.
pub fn is_parent_tag(tag: u32) -> bool {
	tag & PARENT_FLAG != 0
}

/// Short role name for tags this crate understands.
pub fn tag_name(tag: u32) -> Option<&'static str> {
	match tag {
		MESH_DATA => Some("mesh_data"),
		MESH_NAME => Some("mesh_name"),
		TRIANGLE_INDICES => Some("triangle_indices"),
		_ => None,
	}
}

/// Render a tag as fixed-width hex.
pub fn tag_hex(tag: u32) -> String {
	format!("0x{tag:08X}")
}

/// Tags used to locate the three chunk kinds paired during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkTags {
	/// Vertex stream chunks.
	pub mesh: u32,
	/// Name chunks, paired with meshes by position.
	pub name: u32,
	/// Triangle index chunks, paired with meshes by position.
	pub indices: u32,
}

impl Default for ChunkTags {
	fn default() -> Self {
		Self {
			mesh: MESH_DATA,
			name: MESH_NAME,
			indices: TRIANGLE_INDICES,
		}
	}
}
