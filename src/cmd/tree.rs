use std::path::PathBuf;

use chunkobj::scene::{Chunk, Result, SceneFile, tag_hex, tag_name, walk};

use crate::cmd::util::{DecodeArgs, emit_json, tag_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub decode: DecodeArgs,
	/// Deepest level to print, roots at 0.
	#[arg(long)]
	pub depth: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Print the decoded chunk tree, one chunk per line.
pub fn run(args: Args) -> Result<()> {
	let Args { path, depth, decode, json } = args;
	let max_depth = depth.unwrap_or(usize::MAX);

	let scene = SceneFile::open(&path)?;
	let roots = scene.roots(&decode.to_options())?;

	if json {
		let nodes: Vec<_> = roots.iter().map(|root| node_json(root, 0, max_depth)).collect();
		emit_json(&nodes);
		return Ok(());
	}

	println!("path: {}", path.display());
	for root in &roots {
		walk(root, &mut |chunk, level| {
			if level > max_depth {
				return;
			}
			let indent = "  ".repeat(level);
			if chunk.is_parent() {
				println!("{indent}@{} {} size={} children={}", chunk.offset, tag_label(chunk.tag), chunk.size, chunk.children.len());
			} else {
				println!("{indent}@{} {} size={}", chunk.offset, tag_label(chunk.tag), chunk.size);
			}
		});
	}

	Ok(())
}

fn node_json(chunk: &Chunk<'_>, level: usize, max_depth: usize) -> TreeNodeJson {
	let children = if level < max_depth {
		chunk.children.iter().map(|child| node_json(child, level + 1, max_depth)).collect()
	} else {
		Vec::new()
	};

	TreeNodeJson {
		offset: chunk.offset,
		tag: tag_hex(chunk.tag),
		name: tag_name(chunk.tag),
		size: chunk.size,
		parent: chunk.is_parent(),
		child_count: chunk.children.len(),
		children,
	}
}

#[derive(serde::Serialize)]
struct TreeNodeJson {
	offset: usize,
	tag: String,
	name: Option<&'static str>,
	size: u32,
	parent: bool,
	child_count: usize,
	children: Vec<TreeNodeJson>,
}
