use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::scene::mesh::{FaceVertex, Mesh};
use crate::scene::{Result, SceneError};

/// Serialize `mesh` as Wavefront OBJ text.
///
/// Emits all `v` lines, then `vn`, then `vt`, then `f` lines with
/// `position/texcoord/normal` corners.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
	for position in &mesh.positions {
		writeln!(writer, "v {} {} {}", position.x, position.y, position.z)?;
	}
	for normal in &mesh.normals {
		writeln!(writer, "vn {} {} {}", normal.x, normal.y, normal.z)?;
	}
	for texcoord in &mesh.texcoords {
		writeln!(writer, "vt {} {}", texcoord.x, texcoord.y)?;
	}
	for face in &mesh.faces {
		let [a, b, c] = face.corners;
		writeln!(writer, "f {} {} {}", corner(a), corner(b), corner(c))?;
	}
	Ok(())
}

/// Write `mesh` to a new OBJ file at `path`.
///
/// A file left incomplete by a write failure is removed before the error is
/// returned.
pub fn save_obj(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
	write_file(path.as_ref(), |writer| write_obj(mesh, writer))
}

fn write_file(path: &Path, fill: impl FnOnce(&mut BufWriter<File>) -> Result<()>) -> Result<()> {
	let mut writer = BufWriter::new(File::create(path)?);
	let written = fill(&mut writer).and_then(|()| writer.flush().map_err(SceneError::from));
	let Err(err) = written else {
		return Ok(());
	};

	drop(writer);
	if let Err(cleanup) = fs::remove_file(path) {
		tracing::warn!(path = %path.display(), %cleanup, "failed to remove partial file");
	}
	Err(err)
}

fn corner(vertex: FaceVertex) -> String {
	format!("{}/{}/{}", vertex.position, vertex.texcoord, vertex.normal)
}
