use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::scene::chunk::DecodeOptions;
use crate::scene::mesh::{Mesh, MeshLayout, assemble_mesh};
use crate::scene::obj::save_obj;
use crate::scene::tags::ChunkTags;
use crate::scene::{Chunk, Result, SceneError, find_all_in};

/// Everything that steers one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
	/// Tags of the paired chunk kinds.
	pub tags: ChunkTags,
	/// Record layout and start heuristics.
	pub layout: MeshLayout,
	/// Decoder limits.
	pub decode: DecodeOptions,
}

/// One mesh chunk with the name and index chunks at the same ordinal.
#[derive(Debug, Clone, Copy)]
pub struct MeshSource<'t, 'a> {
	/// Zero-based position among mesh chunks.
	pub ordinal: usize,
	/// Vertex stream chunk.
	pub mesh: &'t Chunk<'a>,
	/// Paired name chunk, absent when the file has none.
	pub name: Option<&'t Chunk<'a>>,
	/// Paired index chunk, absent when the file has none.
	pub indices: Option<&'t Chunk<'a>>,
}

/// Pair mesh, name and index chunks by their pre-order occurrence.
///
/// Name and index lists must each be empty or exactly as long as the mesh
/// list. Anything else would pair chunks blindly, so it fails.
pub fn pair_mesh_chunks<'t, 'a>(roots: &'t [Chunk<'a>], tags: &ChunkTags) -> Result<Vec<MeshSource<'t, 'a>>> {
	let meshes = find_all_in(roots, tags.mesh);
	let names = find_all_in(roots, tags.name);
	let indices = find_all_in(roots, tags.indices);

	let pairs = |count: usize| count == 0 || count == meshes.len();
	if !pairs(names.len()) || !pairs(indices.len()) {
		return Err(SceneError::CorrelationMismatch {
			meshes: meshes.len(),
			names: names.len(),
			indices: indices.len(),
		});
	}

	Ok(meshes
		.into_iter()
		.enumerate()
		.map(|(ordinal, mesh)| MeshSource {
			ordinal,
			mesh,
			name: names.get(ordinal).copied(),
			indices: indices.get(ordinal).copied(),
		})
		.collect())
}

/// Result of assembling one paired mesh.
#[derive(Debug)]
pub enum MeshOutcome {
	/// Mesh decoded.
	Assembled {
		/// Zero-based mesh ordinal.
		ordinal: usize,
		/// Decoded geometry.
		mesh: Mesh,
	},
	/// Mesh skipped after a mesh-local failure.
	Skipped {
		/// Zero-based mesh ordinal.
		ordinal: usize,
		/// Header offset of the mesh chunk.
		offset: usize,
		/// Failure that caused the skip.
		reason: SceneError,
	},
}

/// Assemble every paired mesh in `roots`.
///
/// Heuristic misses and name failures skip only their mesh; structural
/// failures abort.
pub fn extract_meshes(roots: &[Chunk<'_>], options: &ExtractOptions) -> Result<Vec<MeshOutcome>> {
	options.layout.validate()?;
	let sources = pair_mesh_chunks(roots, &options.tags)?;

	let mut outcomes = Vec::with_capacity(sources.len());
	for source in sources {
		match assemble_mesh(source.mesh, source.name, source.indices, &options.layout) {
			Ok(mesh) => outcomes.push(MeshOutcome::Assembled {
				ordinal: source.ordinal,
				mesh,
			}),
			Err(reason) if reason.is_mesh_local() => {
				tracing::warn!(ordinal = source.ordinal, offset = source.mesh.offset, %reason, "skipping mesh");
				outcomes.push(MeshOutcome::Skipped {
					ordinal: source.ordinal,
					offset: source.mesh.offset,
					reason,
				});
			}
			Err(err) => return Err(err),
		}
	}
	Ok(outcomes)
}

/// Written artifact.
#[derive(Debug, Clone)]
pub struct WrittenMesh {
	/// Zero-based mesh ordinal.
	pub ordinal: usize,
	/// Decoded mesh name.
	pub name: Option<String>,
	/// Output file path.
	pub path: PathBuf,
	/// Vertex count.
	pub vertices: usize,
	/// Face count.
	pub faces: usize,
}

/// Mesh that produced no artifact.
#[derive(Debug, Clone)]
pub struct SkippedMesh {
	/// Zero-based mesh ordinal.
	pub ordinal: usize,
	/// Header offset of the mesh chunk.
	pub offset: usize,
	/// Rendered failure.
	pub reason: String,
}

/// Summary of one export batch.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
	/// Artifacts written.
	pub written: Vec<WrittenMesh>,
	/// Meshes skipped during assembly.
	pub skipped: Vec<SkippedMesh>,
	/// Meshes assembled but not written because of IO failures.
	pub failed: Vec<SkippedMesh>,
}

/// Write every assembled mesh as `<stem>.obj` into `out_dir`.
///
/// IO failures are recorded per mesh and do not stop the batch.
pub fn export_meshes(outcomes: Vec<MeshOutcome>, out_dir: &Path) -> ExportReport {
	let mut report = ExportReport::default();
	let mut stems = ArtifactStems::default();

	for outcome in outcomes {
		match outcome {
			MeshOutcome::Skipped { ordinal, offset, reason } => report.skipped.push(SkippedMesh {
				ordinal,
				offset,
				reason: reason.to_string(),
			}),
			MeshOutcome::Assembled { ordinal, mesh } => {
				let path = out_dir.join(format!("{}.obj", stems.claim(mesh.name.as_deref(), ordinal)));
				match save_obj(&mesh, &path) {
					Ok(()) => {
						tracing::info!(path = %path.display(), vertices = mesh.vertex_count(), faces = mesh.faces.len(), "wrote mesh");
						report.written.push(WrittenMesh {
							ordinal,
							name: mesh.name,
							vertices: mesh.positions.len(),
							faces: mesh.faces.len(),
							path,
						});
					}
					Err(err) => {
						tracing::warn!(path = %path.display(), offset = mesh.source_offset, %err, "failed to write mesh");
						report.failed.push(SkippedMesh {
							ordinal,
							offset: mesh.source_offset,
							reason: err.to_string(),
						});
					}
				}
			}
		}
	}
	report
}

/// Hands out unique, filesystem-safe file stems.
#[derive(Debug, Default)]
pub struct ArtifactStems {
	used: HashSet<String>,
}

impl ArtifactStems {
	/// Stem for a mesh: its sanitized name, else its ordinal; collisions get `_<ordinal>`.
	///
	/// Names without any ASCII letter or digit fall back to the ordinal.
	pub fn claim(&mut self, name: Option<&str>, ordinal: usize) -> String {
		let base = name.map(sanitize_stem).filter(|stem| stem.chars().any(|ch| ch.is_ascii_alphanumeric()));
		let base = base.unwrap_or_else(|| ordinal.to_string());

		let mut stem = base.clone();
		let mut bump = 0_usize;
		while self.used.contains(&stem) {
			stem = if bump == 0 { format!("{base}_{ordinal}") } else { format!("{base}_{ordinal}_{bump}") };
			bump += 1;
		}
		self.used.insert(stem.clone());
		stem
	}
}

/// Replace characters outside `[A-Za-z0-9._-]` with `_`.
///
/// A leading `.` or `-` becomes `_` as well.
pub fn sanitize_stem(name: &str) -> String {
	name.chars()
		.enumerate()
		.map(|(idx, ch)| match ch {
			'.' | '-' if idx == 0 => '_',
			'.' | '_' | '-' => ch,
			_ if ch.is_ascii_alphanumeric() => ch,
			_ => '_',
		})
		.collect()
}
