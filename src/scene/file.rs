use std::fs;
use std::path::Path;

use crate::scene::chunk::{DecodeOptions, decode, decode_all_with, decode_with};
use crate::scene::{Chunk, Result};

/// Whole container file held in memory.
pub struct SceneFile {
	bytes: Vec<u8>,
}

impl SceneFile {
	/// Read the file at `path` fully into memory.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self::from_bytes(fs::read(path)?))
	}

	/// Wrap bytes that were already loaded.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Raw file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the chunk at offset 0.
	pub fn root(&self) -> Result<Chunk<'_>> {
		decode(&self.bytes)
	}

	/// Decode the root forest selected by `opt`.
	///
	/// By default this is the single chunk at offset 0 and any bytes after it
	/// are ignored. With [`DecodeOptions::all_roots`] every consecutive
	/// top-level chunk is read.
	pub fn roots(&self, opt: &DecodeOptions) -> Result<Vec<Chunk<'_>>> {
		if opt.all_roots {
			return decode_all_with(&self.bytes, opt);
		}
		Ok(vec![decode_with(&self.bytes, opt)?])
	}
}
