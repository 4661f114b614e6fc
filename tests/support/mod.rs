//! Synthetic container builders shared by integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use proptest::prelude::*;

pub const CONTAINER: u32 = 0x8000_0001;
pub const MESH_DATA: u32 = 0x0013_4B01;
pub const MESH_NAME: u32 = 0x0013_4011;
pub const TRIANGLE_INDICES: u32 = 0x0013_4B03;

pub fn leaf(tag: u32, payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(payload.len() + 8);
	out.extend_from_slice(&tag.to_le_bytes());
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	out
}

pub fn parent(tag: u32, children: &[Vec<u8>]) -> Vec<u8> {
	leaf(tag, &children.concat())
}

pub fn floats(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

pub fn vertex_record(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vec<u8> {
	let mut out = floats(&position);
	out.extend(floats(&normal));
	out.extend(0xFFFF_FFFF_u32.to_le_bytes());
	out.extend(floats(&uv));
	out
}

pub fn triangles(tris: &[[u16; 3]]) -> Vec<u8> {
	tris.iter().flatten().flat_map(|index| index.to_le_bytes()).collect()
}

pub fn name_payload(name: &str) -> Vec<u8> {
	let mut out = vec![0x11_u8; 164];
	out.extend_from_slice(name.as_bytes());
	out.push(0);
	out
}

/// Two named meshes plus one all-padding mesh between them.
pub fn sample_scene() -> Vec<u8> {
	let quad = [
		vertex_record([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
		vertex_record([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
		vertex_record([1.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
		vertex_record([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
	]
	.concat();
	let mut padded_quad = vec![0x11_u8; 12];
	padded_quad.extend(&quad);

	let group = |name: &str, mesh: &[u8], tris: &[[u16; 3]]| {
		parent(
			0x8013_4000,
			&[
				leaf(MESH_NAME, &name_payload(name)),
				leaf(0, &[]),
				leaf(MESH_DATA, mesh),
				leaf(TRIANGLE_INDICES, &triangles(tris)),
			],
		)
	};

	parent(
		CONTAINER,
		&[
			group("floor", &padded_quad, &[[0, 1, 2], [0, 2, 3]]),
			group("ghost", &[0x11; 48], &[[0, 1, 2]]),
			group("roof/top", &quad, &[[2, 1, 0]]),
		],
	)
}

pub fn write_temp(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.path().join(name);
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}

/// Generated chunk tree model.
#[derive(Debug, Clone)]
pub enum Node {
	Leaf(u32, Vec<u8>),
	Parent(u32, Vec<Node>),
}

impl Node {
	pub fn tag(&self) -> u32 {
		match self {
			Node::Leaf(tag, _) | Node::Parent(tag, _) => *tag,
		}
	}

	pub fn size(&self) -> u32 {
		match self {
			Node::Leaf(_, payload) => payload.len() as u32,
			Node::Parent(_, children) => children.iter().map(|child| child.size() + 8).sum(),
		}
	}

	pub fn encode(&self) -> Vec<u8> {
		match self {
			Node::Leaf(tag, payload) => leaf(*tag, payload),
			Node::Parent(tag, children) => parent(*tag, &children.iter().map(Node::encode).collect::<Vec<_>>()),
		}
	}
}

pub fn node_strategy() -> impl Strategy<Value = Node> {
	let leaf_tag = prop_oneof![Just(MESH_DATA), Just(MESH_NAME), 0_u32..0x10];
	let leaf = (leaf_tag, prop::collection::vec(any::<u8>(), 0..24)).prop_map(|(tag, payload)| Node::Leaf(tag, payload));
	leaf.prop_recursive(4, 64, 6, |inner| {
		(0x8000_0000_u32..0x8000_0004, prop::collection::vec(inner, 0..6)).prop_map(|(tag, children)| Node::Parent(tag, children))
	})
}
