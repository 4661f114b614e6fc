use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while decoding chunk trees and extracting meshes.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A fixed-width read would run past the end of the buffer.
	#[error("read out of bounds at offset {at}, need {need} bytes, remaining {rem}")]
	OutOfBounds {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Declared chunk size exceeds the bytes left in the buffer or the enclosing chunk.
	#[error("chunk at offset {at} declares size {size} but only {rem} bytes remain")]
	Truncated {
		/// Chunk header offset.
		at: usize,
		/// Declared payload size.
		size: u32,
		/// Bytes available for the payload.
		rem: usize,
	},
	/// Chunk nesting exceeded the configured depth ceiling.
	#[error("chunk nesting at offset {at} exceeds max depth {max_depth}")]
	DepthExceeded {
		/// Header offset of the chunk that exceeded the limit.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// A layout heuristic found no plausible start offset in a payload.
	#[error("no {what} found in chunk at offset {at}")]
	HeuristicMiss {
		/// Which stream start was being located.
		what: &'static str,
		/// Header offset of the scanned chunk.
		at: usize,
	},
	/// Name chunk payload cannot hold a terminated string at the name offset.
	#[error("name chunk at offset {at} has {len} payload bytes, need at least {need} with a terminator")]
	NameDecode {
		/// Header offset of the name chunk.
		at: usize,
		/// Payload length.
		len: usize,
		/// Minimum payload length for a terminated name.
		need: usize,
	},
	/// Mesh, name and index chunk counts cannot be paired by ordinal position.
	#[error("cannot pair chunks by position: meshes={meshes}, names={names}, indices={indices}")]
	CorrelationMismatch {
		/// Mesh chunk count.
		meshes: usize,
		/// Name chunk count.
		names: usize,
		/// Index chunk count.
		indices: usize,
	},
	/// Mesh record layout does not fit inside its stride.
	#[error("invalid mesh layout: {reason}")]
	InvalidLayout {
		/// What is wrong with the layout.
		reason: String,
	},
	/// CLI numeric literal (tag, byte, offset) was invalid.
	#[error("invalid literal: {value}")]
	InvalidLiteral {
		/// User-provided literal.
		value: String,
	},
	/// No chunk header starts at the requested offset.
	#[error("no chunk at offset {offset}")]
	ChunkNotFound {
		/// Requested header offset.
		offset: usize,
	},
}

impl SceneError {
	/// Return `true` for failures that only invalidate the current mesh.
	///
	/// Everything else is structural and aborts the whole run.
	pub fn is_mesh_local(&self) -> bool {
		matches!(self, Self::HeuristicMiss { .. } | Self::NameDecode { .. })
	}
}
