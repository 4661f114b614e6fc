use std::collections::BTreeMap;

use crate::scene::Chunk;

/// Collect every chunk tagged `tag` under `root` (inclusive), in pre-order.
pub fn find_all<'t, 'a>(root: &'t Chunk<'a>, tag: u32) -> Vec<&'t Chunk<'a>> {
	let mut out = Vec::new();
	walk(root, &mut |chunk, _| {
		if chunk.tag == tag {
			out.push(chunk);
		}
	});
	out
}

/// Collect every chunk tagged `tag` across `roots`, root order then pre-order.
pub fn find_all_in<'t, 'a>(roots: &'t [Chunk<'a>], tag: u32) -> Vec<&'t Chunk<'a>> {
	roots.iter().flat_map(|root| find_all(root, tag)).collect()
}

/// Find the chunk whose header starts at `offset`.
pub fn find_at_offset<'t, 'a>(roots: &'t [Chunk<'a>], offset: usize) -> Option<&'t Chunk<'a>> {
	let mut stack: Vec<&'t Chunk<'a>> = roots.iter().rev().collect();
	while let Some(chunk) = stack.pop() {
		if chunk.offset == offset {
			return Some(chunk);
		}
		if offset < chunk.offset || offset >= chunk.end() {
			continue;
		}
		stack.extend(chunk.children.iter().rev());
	}
	None
}

/// Visit `root` and its descendants in pre-order with their depth.
pub fn walk<'t, 'a>(root: &'t Chunk<'a>, visit: &mut impl FnMut(&'t Chunk<'a>, usize)) {
	let mut stack = vec![(root, 0_usize)];
	while let Some((chunk, depth)) = stack.pop() {
		visit(chunk, depth);
		stack.extend(chunk.children.iter().rev().map(|child| (child, depth + 1)));
	}
}

/// Aggregate counts over a decoded forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Materialized chunks, roots included.
	pub chunk_count: usize,
	/// Chunks with a parent tag.
	pub parent_count: usize,
	/// Chunks with a leaf tag.
	pub leaf_count: usize,
	/// Deepest nesting level, roots at 0.
	pub max_depth: usize,
	/// Summed leaf payload bytes.
	pub payload_bytes: u64,
	/// Occurrences per tag.
	pub tags: BTreeMap<u32, usize>,
}

impl TreeStats {
	/// Gather statistics for every chunk reachable from `roots`.
	pub fn scan(roots: &[Chunk<'_>]) -> Self {
		let mut stats = Self::default();
		for root in roots {
			walk(root, &mut |chunk, depth| {
				stats.chunk_count += 1;
				if chunk.is_parent() {
					stats.parent_count += 1;
				} else {
					stats.leaf_count += 1;
					stats.payload_bytes += chunk.payload.len() as u64;
				}
				stats.max_depth = stats.max_depth.max(depth);
				*stats.tags.entry(chunk.tag).or_insert(0) += 1;
			});
		}
		stats
	}

	/// Occurrences of `tag`.
	pub fn count(&self, tag: u32) -> usize {
		self.tags.get(&tag).copied().unwrap_or(0)
	}
}

#[cfg(test)]
mod tests;
