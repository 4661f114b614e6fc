use glam::{Vec2, Vec3};

use crate::scene::bytes::{Cursor, read_f32_le, read_f32x3_le};
use crate::scene::layout::ProbeOptions;
use crate::scene::{Chunk, Result, SceneError};

/// Bytes per triangle in an index stream (three `u16`).
const TRIANGLE_WIDTH: usize = 6;

/// How the first vertex record inside a mesh payload is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexStart {
	/// First byte after the leading padding sentinels.
	#[default]
	PaddingSentinel,
	/// First unit-length normal, backed off by the record's normal offset.
	FirstNormal,
}

/// Reverse-engineered placement of mesh attributes and names.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshLayout {
	/// Bytes per interleaved vertex record.
	pub stride: usize,
	/// Position triple offset inside a record.
	pub position_offset: usize,
	/// Normal triple offset inside a record.
	pub normal_offset: usize,
	/// Texture coordinate pair offset inside a record.
	pub texcoord_offset: usize,
	/// Offset of the NUL-terminated name inside a name chunk payload.
	pub name_offset: usize,
	/// Vertex stream start heuristic.
	pub vertex_start: VertexStart,
	/// Probe tunables shared by the start heuristics.
	pub probe: ProbeOptions,
}

impl Default for MeshLayout {
	fn default() -> Self {
		Self {
			stride: 36,
			position_offset: 0,
			normal_offset: 12,
			texcoord_offset: 28,
			name_offset: 164,
			vertex_start: VertexStart::PaddingSentinel,
			probe: ProbeOptions::default(),
		}
	}
}

impl MeshLayout {
	/// Reject layouts whose attribute windows do not fit in one record.
	pub fn validate(&self) -> Result<()> {
		if self.stride == 0 {
			return Err(SceneError::InvalidLayout {
				reason: "stride must be non-zero".to_owned(),
			});
		}

		for (label, offset, width) in [
			("position", self.position_offset, 12),
			("normal", self.normal_offset, 12),
			("texcoord", self.texcoord_offset, 8),
		] {
			if offset.checked_add(width).is_none_or(|end| end > self.stride) {
				return Err(SceneError::InvalidLayout {
					reason: format!("{label} at {offset} (+{width}) exceeds stride {}", self.stride),
				});
			}
		}
		Ok(())
	}
}

/// One face corner; indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
	/// Position index.
	pub position: u32,
	/// Texture coordinate index.
	pub texcoord: u32,
	/// Normal index.
	pub normal: u32,
}

impl FaceVertex {
	/// Corner using one index for every attribute.
	pub fn shared(index: u32) -> Self {
		Self {
			position: index,
			texcoord: index,
			normal: index,
		}
	}
}

/// Triangle face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
	/// Corners in winding order.
	pub corners: [FaceVertex; 3],
}

/// Geometry recovered from one mesh chunk.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
	/// Name decoded from the paired name chunk.
	pub name: Option<String>,
	/// Header offset of the source mesh chunk.
	pub source_offset: usize,
	/// Vertex positions.
	pub positions: Vec<Vec3>,
	/// Vertex normals, index-aligned with `positions`.
	pub normals: Vec<Vec3>,
	/// Texture coordinates, index-aligned with `positions`.
	pub texcoords: Vec<Vec2>,
	/// Triangles referencing the vertex arrays.
	pub faces: Vec<Face>,
}

impl Mesh {
	/// Number of decoded vertices.
	pub fn vertex_count(&self) -> usize {
		self.positions.len()
	}

	/// Largest face index, if any face exists.
	pub fn max_face_index(&self) -> Option<u32> {
		self.faces.iter().flat_map(|face| face.corners).map(|corner| corner.position).max()
	}
}

/// Build a mesh from its vertex chunk and the chunks paired with it.
///
/// Missing `indices` yields a mesh without faces; missing `name` leaves the
/// name unset. Heuristic misses and short name payloads surface as
/// mesh-local errors (see [`SceneError::is_mesh_local`]).
pub fn assemble_mesh(mesh: &Chunk<'_>, name: Option<&Chunk<'_>>, indices: Option<&Chunk<'_>>, layout: &MeshLayout) -> Result<Mesh> {
	layout.validate()?;

	let mut out = Mesh {
		source_offset: mesh.offset,
		..Mesh::default()
	};
	decode_vertices(mesh, layout, &mut out)?;
	if let Some(indices) = indices {
		out.faces = decode_faces(indices, &layout.probe)?;
	}
	if let Some(name) = name {
		out.name = Some(decode_name(name, layout.name_offset)?);
	}

	if let Some(max) = out.max_face_index() {
		if max as usize > out.vertex_count() {
			tracing::warn!(
				offset = mesh.offset,
				max_index = max,
				vertices = out.vertex_count(),
				"face indices exceed vertex count"
			);
		}
	}

	tracing::debug!(
		offset = mesh.offset,
		vertices = out.vertex_count(),
		faces = out.faces.len(),
		name = out.name.as_deref().unwrap_or("-"),
		"assembled mesh"
	);
	Ok(out)
}

/// Locate the first vertex record inside a mesh chunk payload.
pub fn vertex_stream_start(mesh: &Chunk<'_>, layout: &MeshLayout) -> Result<usize> {
	match layout.vertex_start {
		VertexStart::PaddingSentinel => layout.probe.first_non_padding(mesh.payload).ok_or(SceneError::HeuristicMiss {
			what: "vertex stream",
			at: mesh.offset,
		}),
		VertexStart::FirstNormal => layout
			.probe
			.first_plausible_normal(mesh.payload)
			.and_then(|normal| normal.checked_sub(layout.normal_offset))
			.ok_or(SceneError::HeuristicMiss {
				what: "unit normal",
				at: mesh.offset,
			}),
	}
}

fn decode_vertices(mesh: &Chunk<'_>, layout: &MeshLayout, out: &mut Mesh) -> Result<()> {
	let start = vertex_stream_start(mesh, layout)?;
	let records = mesh.payload.get(start..).unwrap_or(&[]);

	let count = records.len() / layout.stride;
	out.positions.reserve(count);
	out.normals.reserve(count);
	out.texcoords.reserve(count);

	for record in records.chunks_exact(layout.stride) {
		out.positions.push(Vec3::from_array(read_f32x3_le(record, layout.position_offset)?));
		out.normals.push(Vec3::from_array(read_f32x3_le(record, layout.normal_offset)?));
		let u = read_f32_le(record, layout.texcoord_offset)?;
		let v = read_f32_le(record, layout.texcoord_offset + 4)?;
		out.texcoords.push(Vec2::new(u, v));
	}
	Ok(())
}

/// Decode a triangle index chunk into 1-based faces.
pub fn decode_faces(indices: &Chunk<'_>, probe: &ProbeOptions) -> Result<Vec<Face>> {
	let start = probe.first_non_padding(indices.payload).ok_or(SceneError::HeuristicMiss {
		what: "index stream",
		at: indices.offset,
	})?;

	let mut faces = Vec::with_capacity((indices.payload.len() - start) / TRIANGLE_WIDTH);
	for triangle in indices.payload[start..].chunks_exact(TRIANGLE_WIDTH) {
		let mut cursor = Cursor::new(triangle);
		let mut corners = [FaceVertex::shared(0); 3];
		for corner in &mut corners {
			*corner = FaceVertex::shared(u32::from(cursor.read_u16_le()?) + 1);
		}
		faces.push(Face { corners });
	}
	Ok(faces)
}

/// Decode the NUL-terminated name stored at `name_offset` of a name chunk.
pub fn decode_name(name: &Chunk<'_>, name_offset: usize) -> Result<String> {
	let need = name_offset.saturating_add(1);
	let short = || SceneError::NameDecode {
		at: name.offset,
		len: name.payload.len(),
		need,
	};
	if name.payload.len() < need {
		return Err(short());
	}

	let raw = Cursor::at(name.payload, name_offset).read_cstring_bytes().map_err(|_| short())?;
	Ok(String::from_utf8_lossy(raw).into_owned())
}
