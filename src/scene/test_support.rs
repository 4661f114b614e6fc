//! Byte builders for synthetic containers used by unit tests.

use crate::scene::tags::PARENT_FLAG;

pub(crate) const CONTAINER: u32 = PARENT_FLAG | 0x0001;

pub(crate) fn leaf(tag: u32, payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(payload.len() + 8);
	out.extend_from_slice(&tag.to_le_bytes());
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}

pub(crate) fn parent(tag: u32, children: &[Vec<u8>]) -> Vec<u8> {
	let body: Vec<u8> = children.concat();
	leaf(tag, &body)
}

pub(crate) fn padding(tag: u32) -> Vec<u8> {
	leaf(tag, &[])
}

pub(crate) fn floats(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// One 36-byte vertex record with the unused slot filled with NaN.
pub(crate) fn vertex_record(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vec<u8> {
	let mut out = floats(&position);
	out.extend(floats(&normal));
	out.extend(floats(&[f32::NAN]));
	out.extend(floats(&uv));
	out
}

pub(crate) fn sentinel_prefixed(prefix: usize, body: &[u8]) -> Vec<u8> {
	let mut out = vec![0x11_u8; prefix];
	out.extend_from_slice(body);
	out
}

pub(crate) fn triangles(tris: &[[u16; 3]]) -> Vec<u8> {
	tris.iter().flatten().flat_map(|index| index.to_le_bytes()).collect()
}

/// Name chunk payload with `name` terminated at byte 164.
pub(crate) fn name_payload(name: &str) -> Vec<u8> {
	let mut out = vec![0_u8; 164];
	out.extend_from_slice(name.as_bytes());
	out.push(0);
	out
}
