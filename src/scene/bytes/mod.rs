use crate::scene::{Result, SceneError};

/// Borrow `N` bytes at `offset`, failing when the window leaves `buffer`.
fn window<const N: usize>(buffer: &[u8], offset: usize) -> Result<[u8; N]> {
	let raw = offset
		.checked_add(N)
		.and_then(|end| buffer.get(offset..end))
		.ok_or(SceneError::OutOfBounds {
			at: offset,
			need: N,
			rem: buffer.len().saturating_sub(offset),
		})?;
	let mut out = [0_u8; N];
	out.copy_from_slice(raw);
	Ok(out)
}

/// Read a little-endian `u16` at `offset`.
pub fn read_u16_le(buffer: &[u8], offset: usize) -> Result<u16> {
	window::<2>(buffer, offset).map(u16::from_le_bytes)
}

/// Read a little-endian `u32` at `offset`.
pub fn read_u32_le(buffer: &[u8], offset: usize) -> Result<u32> {
	window::<4>(buffer, offset).map(u32::from_le_bytes)
}

/// Read a little-endian IEEE-754 `f32` at `offset`.
pub fn read_f32_le(buffer: &[u8], offset: usize) -> Result<f32> {
	window::<4>(buffer, offset).map(f32::from_le_bytes)
}

/// Read three consecutive little-endian `f32` values at `offset`.
pub fn read_f32x3_le(buffer: &[u8], offset: usize) -> Result<[f32; 3]> {
	Ok([read_f32_le(buffer, offset)?, read_f32_le(buffer, offset + 4)?, read_f32_le(buffer, offset + 8)?])
}

/// Simple bounded cursor over an immutable byte slice.
///
/// Offsets reported in errors are absolute when the cursor was created with
/// [`Cursor::at`].
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor positioned at `pos`.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let value = read_u16_le(self.bytes, self.pos)?;
		self.pos += 2;
		Ok(value)
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let value = read_u32_le(self.bytes, self.pos)?;
		self.pos += 4;
		Ok(value)
	}

	/// Read a zero-terminated byte string without the terminator.
	pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
		let start = self.pos;
		let rem = self.bytes.get(self.pos..).unwrap_or(&[]);
		let Some(rel_end) = rem.iter().position(|byte| *byte == 0) else {
			return Err(SceneError::OutOfBounds {
				at: self.pos,
				need: rem.len() + 1,
				rem: rem.len(),
			});
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok(&self.bytes[start..end])
	}
}
