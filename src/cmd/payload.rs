use std::path::PathBuf;

use chunkobj::scene::{Result, SceneError, SceneFile, find_at_offset};

use crate::cmd::util::{DecodeArgs, hex_row, parse_usize, tag_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Header offset of the chunk to dump.
	#[arg(long)]
	pub offset: String,
	/// Maximum payload bytes to dump.
	#[arg(long, default_value_t = 256)]
	pub limit: usize,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

/// Hex dump the payload of the chunk whose header starts at `--offset`.
pub fn run(args: Args) -> Result<()> {
	let Args { path, offset, limit, decode } = args;
	let offset = parse_usize(&offset)?;

	let scene = SceneFile::open(&path)?;
	let roots = scene.roots(&decode.to_options())?;
	let chunk = find_at_offset(&roots, offset).ok_or(SceneError::ChunkNotFound { offset })?;

	println!("path: {}", path.display());
	println!("offset: {}", chunk.offset);
	println!("tag: {}", tag_label(chunk.tag));
	println!("size: {}", chunk.size);

	if chunk.is_parent() {
		println!("children: {}", chunk.children.len());
		for child in &chunk.children {
			println!("  @{} {} size={}", child.offset, tag_label(child.tag), child.size);
		}
		return Ok(());
	}

	let shown = &chunk.payload[..chunk.payload.len().min(limit)];
	for (row, bytes) in shown.chunks(16).enumerate() {
		println!("{}", hex_row(chunk.payload_offset() + row * 16, bytes));
	}
	if shown.len() < chunk.payload.len() {
		println!("... {} more bytes", chunk.payload.len() - shown.len());
	}

	Ok(())
}
