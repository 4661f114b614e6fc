use std::path::PathBuf;

use chunkobj::scene::{ChunkTags, Result, SceneFile, TreeStats, tag_hex, tag_name};

use crate::cmd::util::{DecodeArgs, emit_json, tag_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level file and chunk statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, decode, json } = args;

	let scene = SceneFile::open(&path)?;
	let roots = scene.roots(&decode.to_options())?;
	let stats = TreeStats::scan(&roots);
	let tags = ChunkTags::default();

	let mut entries: Vec<_> = stats.tags.iter().map(|(tag, count)| (*tag, *count)).collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			file_size: scene.bytes().len(),
			root_count: roots.len(),
			chunk_count: stats.chunk_count,
			parent_count: stats.parent_count,
			leaf_count: stats.leaf_count,
			max_depth: stats.max_depth,
			payload_bytes: stats.payload_bytes,
			mesh_chunks: stats.count(tags.mesh),
			name_chunks: stats.count(tags.name),
			index_chunks: stats.count(tags.indices),
			top_tags: entries
				.iter()
				.take(12)
				.map(|(tag, count)| TagCountJson {
					tag: tag_hex(*tag),
					name: tag_name(*tag),
					count: *count,
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("file_size: {}", scene.bytes().len());
	println!("root_count: {}", roots.len());
	println!("chunk_count: {}", stats.chunk_count);
	println!("parent_count: {}", stats.parent_count);
	println!("leaf_count: {}", stats.leaf_count);
	println!("max_depth: {}", stats.max_depth);
	println!("payload_bytes: {}", stats.payload_bytes);
	println!("mesh_chunks: {}", stats.count(tags.mesh));
	println!("name_chunks: {}", stats.count(tags.name));
	println!("index_chunks: {}", stats.count(tags.indices));

	println!("top_tags:");
	for (tag, count) in entries.into_iter().take(12) {
		println!("  {}: {}", tag_label(tag), count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TagCountJson {
	tag: String,
	name: Option<&'static str>,
	count: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	file_size: usize,
	root_count: usize,
	chunk_count: usize,
	parent_count: usize,
	leaf_count: usize,
	max_depth: usize,
	payload_bytes: u64,
	mesh_chunks: usize,
	name_chunks: usize,
	index_chunks: usize,
	top_tags: Vec<TagCountJson>,
}
