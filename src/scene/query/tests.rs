use crate::scene::query::{TreeStats, find_all, find_all_in, find_at_offset, walk};
use crate::scene::test_support::{CONTAINER, leaf, parent};
use crate::scene::{decode, decode_all};

const A: u32 = 0x21;
const B: u32 = 0x22;

fn sample() -> Vec<u8> {
	let inner = parent(CONTAINER, &[leaf(A, b"2"), leaf(B, b"x"), leaf(A, b"3")]);
	parent(CONTAINER, &[leaf(A, b"1"), inner, leaf(A, b"4")])
}

#[test]
fn find_all_returns_matches_in_pre_order() {
	let bytes = sample();
	let root = decode(&bytes).expect("tree decodes");

	let payloads: Vec<&[u8]> = find_all(&root, A).into_iter().map(|chunk| chunk.payload).collect();
	assert_eq!(payloads, vec![b"1".as_slice(), b"2".as_slice(), b"3".as_slice(), b"4".as_slice()]);

	let parents = find_all(&root, CONTAINER);
	assert_eq!(parents.len(), 2);
	assert_eq!(parents[0].offset, 0, "root is visited before its children");
}

#[test]
fn find_all_is_idempotent_and_empty_for_unknown_tags() {
	let bytes = sample();
	let root = decode(&bytes).expect("tree decodes");

	let first: Vec<usize> = find_all(&root, A).iter().map(|chunk| chunk.offset).collect();
	let second: Vec<usize> = find_all(&root, A).iter().map(|chunk| chunk.offset).collect();
	assert_eq!(first, second);
	assert!(find_all(&root, 0xDEAD).is_empty());
}

#[test]
fn forest_queries_keep_root_order() {
	let mut bytes = parent(CONTAINER, &[leaf(A, b"1")]);
	bytes.extend(leaf(A, b"2"));
	let roots = decode_all(&bytes).expect("stream decodes");

	let payloads: Vec<&[u8]> = find_all_in(&roots, A).into_iter().map(|chunk| chunk.payload).collect();
	assert_eq!(payloads, vec![b"1".as_slice(), b"2".as_slice()]);
}

#[test]
fn find_at_offset_locates_nested_headers() {
	let bytes = sample();
	let roots = decode_all(&bytes).expect("stream decodes");
	let b = find_all_in(&roots, B)[0];

	let found = find_at_offset(&roots, b.offset).expect("chunk exists");
	assert_eq!(found.payload, b"x");
	assert!(find_at_offset(&roots, b.offset + 1).is_none());
}

#[test]
fn walk_reports_depth_and_stats_aggregate() {
	let bytes = sample();
	let roots = decode_all(&bytes).expect("stream decodes");

	let mut depths = Vec::new();
	walk(&roots[0], &mut |chunk, depth| depths.push((chunk.tag, depth)));
	assert_eq!(depths, vec![(CONTAINER, 0), (A, 1), (CONTAINER, 1), (A, 2), (B, 2), (A, 2), (A, 1)]);

	let stats = TreeStats::scan(&roots);
	assert_eq!(stats.chunk_count, 7);
	assert_eq!(stats.parent_count, 2);
	assert_eq!(stats.leaf_count, 5);
	assert_eq!(stats.max_depth, 2);
	assert_eq!(stats.payload_bytes, 5);
	assert_eq!(stats.count(A), 4);
	assert_eq!(stats.count(0xDEAD), 0);
}
