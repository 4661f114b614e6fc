//! Byte-pattern probes locating structured data inside opaque leaf payloads.
//!
//! The container never declares where vertex or index streams start inside a
//! payload, so the start is inferred: either as the first byte after a run of
//! padding sentinels, or as the first aligned float triple with unit length.
//! Both probes are best-effort; `None` means "skip this chunk".

use crate::scene::bytes::read_f32x3_le;

/// Byte observed filling the head of mesh and index payloads.
pub const PADDING_BYTE: u8 = 0x11;

/// Bytes spanned by one candidate normal.
const NORMAL_WIDTH: usize = 12;

/// Tunables shared by both probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOptions {
	/// Sentinel byte skipped by the padding scan.
	pub padding_byte: u8,
	/// Inclusive lower bound of an accepted normal length.
	pub norm_min: f32,
	/// Inclusive upper bound of an accepted normal length.
	pub norm_max: f32,
	/// Distance between normal-scan candidates.
	pub step: usize,
}

impl Default for ProbeOptions {
	fn default() -> Self {
		Self {
			padding_byte: PADDING_BYTE,
			norm_min: 0.9999,
			norm_max: 1.0001,
			step: 4,
		}
	}
}

impl ProbeOptions {
	/// Offset of the first byte that is not the padding sentinel.
	pub fn first_non_padding(&self, payload: &[u8]) -> Option<usize> {
		payload.iter().position(|byte| *byte != self.padding_byte)
	}

	/// Offsets whose next 12 bytes decode to a unit-length float triple.
	pub fn plausible_normals<'p>(&self, payload: &'p [u8]) -> impl Iterator<Item = usize> + use<'p> {
		let probe = *self;
		let window_starts = payload.len().saturating_sub(NORMAL_WIDTH - 1);
		(0..window_starts)
			.step_by(probe.step.max(1))
			.filter(move |offset| probe.is_unit_normal_at(payload, *offset))
	}

	/// Offset of the first plausible unit normal.
	pub fn first_plausible_normal(&self, payload: &[u8]) -> Option<usize> {
		self.plausible_normals(payload).next()
	}

	fn is_unit_normal_at(&self, payload: &[u8], offset: usize) -> bool {
		let Ok([x, y, z]) = read_f32x3_le(payload, offset) else {
			return false;
		};
		let norm = (x * x + y * y + z * z).sqrt();
		norm >= self.norm_min && norm <= self.norm_max
	}
}

/// Index of the first byte differing from [`PADDING_BYTE`].
pub fn first_non_padding_offset(payload: &[u8]) -> Option<usize> {
	ProbeOptions::default().first_non_padding(payload)
}

/// First 4-byte aligned offset holding a unit-length float triple.
pub fn first_plausible_normal_offset(payload: &[u8]) -> Option<usize> {
	ProbeOptions::default().first_plausible_normal(payload)
}

/// Every 4-byte aligned offset holding a unit-length float triple.
pub fn all_plausible_normal_offsets(payload: &[u8]) -> Vec<usize> {
	ProbeOptions::default().plausible_normals(payload).collect()
}
