use std::fmt;

use crate::scene::bytes::Cursor;
use crate::scene::tags::{is_parent_tag, tag_hex};
use crate::scene::{Result, SceneError};

/// Size of the tag + size header preceding every chunk payload.
pub const HEADER_SIZE: usize = 8;

/// Parsed 8-byte chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
	/// Semantic role tag.
	pub tag: u32,
	/// Declared payload length, header excluded.
	pub size: u32,
}

impl ChunkHeader {
	/// Parse a header from cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let tag = cursor.read_u32_le()?;
		let size = cursor.read_u32_le()?;
		Ok(Self { tag, size })
	}
}

/// One decoded node of the container tree.
///
/// Parent chunks own their children and carry an empty payload; leaf chunks
/// borrow exactly `size` payload bytes from the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
	/// Semantic role tag.
	pub tag: u32,
	/// Declared payload length, header excluded.
	pub size: u32,
	/// Header offset within the decoded buffer.
	pub offset: usize,
	/// Non-padding children in stream order.
	pub children: Vec<Chunk<'a>>,
	/// Raw payload of a leaf chunk.
	pub payload: &'a [u8],
}

impl Chunk<'_> {
	/// Return `true` when the tag marks nested chunks.
	pub fn is_parent(&self) -> bool {
		is_parent_tag(self.tag)
	}

	/// Offset of the first payload byte.
	pub fn payload_offset(&self) -> usize {
		self.offset + HEADER_SIZE
	}

	/// Offset one past the last framed byte.
	pub fn end(&self) -> usize {
		self.payload_offset() + self.size as usize
	}
}

impl fmt::Display for Chunk<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Chunk[tag={}, size={}, offset={}, children={}]",
			tag_hex(self.tag),
			self.size,
			self.offset,
			self.children.len()
		)
	}
}

/// Decoder limits.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum parent nesting depth below the root.
	pub max_depth: u32,
	/// Read consecutive top-level chunks instead of the single root at offset 0.
	pub all_roots: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			all_roots: false,
		}
	}
}

/// Decode the chunk starting at offset 0 of `buffer`.
pub fn decode(buffer: &[u8]) -> Result<Chunk<'_>> {
	decode_with(buffer, &DecodeOptions::default())
}

/// Decode the chunk starting at offset 0 of `buffer` with explicit limits.
pub fn decode_with<'a>(buffer: &'a [u8], opt: &DecodeOptions) -> Result<Chunk<'a>> {
	decode_at(buffer, 0, buffer.len(), opt, 0)
}

/// Decode every consecutive top-level chunk in `buffer`.
///
/// Zero-size top-level chunks are dropped the same way nested padding is.
/// A tail shorter than one header is ignored.
pub fn decode_all(buffer: &[u8]) -> Result<Vec<Chunk<'_>>> {
	decode_all_with(buffer, &DecodeOptions::default())
}

/// Decode every consecutive top-level chunk in `buffer` with explicit limits.
pub fn decode_all_with<'a>(buffer: &'a [u8], opt: &DecodeOptions) -> Result<Vec<Chunk<'a>>> {
	let mut roots = Vec::new();
	let mut pos = 0;
	while buffer.len() - pos >= HEADER_SIZE {
		let chunk = decode_at(buffer, pos, buffer.len(), opt, 0)?;
		pos = chunk.end();
		if chunk.size == 0 {
			continue;
		}
		tracing::debug!(offset = chunk.offset, tag = %tag_hex(chunk.tag), size = chunk.size, "decoded top-level chunk");
		roots.push(chunk);
	}
	if pos < buffer.len() {
		tracing::debug!(offset = pos, bytes = buffer.len() - pos, "ignoring trailing bytes");
	}
	Ok(roots)
}

/// Decode one chunk whose framed extent must end at or before `limit`.
fn decode_at<'a>(buffer: &'a [u8], offset: usize, limit: usize, opt: &DecodeOptions, depth: u32) -> Result<Chunk<'a>> {
	if depth > opt.max_depth {
		return Err(SceneError::DepthExceeded {
			at: offset,
			max_depth: opt.max_depth,
		});
	}

	let mut cursor = Cursor::at(buffer, offset);
	let header = ChunkHeader::parse(&mut cursor)?;
	let start = cursor.pos();
	let size = header.size as usize;

	let rem = limit.saturating_sub(start);
	if start > limit || size > rem {
		return Err(SceneError::Truncated {
			at: offset,
			size: header.size,
			rem,
		});
	}
	let end = start + size;

	if !is_parent_tag(header.tag) {
		return Ok(Chunk {
			tag: header.tag,
			size: header.size,
			offset,
			children: Vec::new(),
			payload: &buffer[start..end],
		});
	}

	let mut children = Vec::new();
	let mut pos = start;
	while pos < end {
		let child = decode_at(buffer, pos, end, opt, depth + 1)?;
		pos = child.end();
		if child.size > 0 {
			children.push(child);
		}
	}

	Ok(Chunk {
		tag: header.tag,
		size: header.size,
		offset,
		children,
		payload: &[],
	})
}
