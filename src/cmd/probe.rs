use std::path::PathBuf;

use chunkobj::scene::{Result, SceneFile, find_all_in, vertex_stream_start};

use crate::cmd::util::{LayoutArgs, emit_json, tag_label};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub layout: LayoutArgs,
	/// Maximum normal candidates listed per chunk in text mode.
	#[arg(long, default_value_t = 8)]
	pub limit: usize,
	#[arg(long)]
	pub json: bool,
}

/// Report where each start heuristic lands inside every mesh chunk.
pub fn run(args: Args) -> Result<()> {
	let Args { path, layout, limit, json } = args;
	let options = layout.to_options()?;
	let probe = options.layout.probe;

	let scene = SceneFile::open(&path)?;
	let roots = scene.roots(&options.decode)?;
	let meshes = find_all_in(&roots, options.tags.mesh);

	let rows: Vec<ProbeJson> = meshes
		.iter()
		.enumerate()
		.map(|(ordinal, chunk)| {
			let vertex_start = vertex_stream_start(chunk, &options.layout).ok();
			ProbeJson {
				ordinal,
				offset: chunk.offset,
				size: chunk.size,
				padding_end: probe.first_non_padding(chunk.payload),
				first_normal: probe.first_plausible_normal(chunk.payload),
				vertex_start,
				records: vertex_start
					.map(|start| chunk.payload.len().saturating_sub(start) / options.layout.stride.max(1))
					.unwrap_or(0),
				normals: probe.plausible_normals(chunk.payload).collect(),
			}
		})
		.collect();

	if json {
		emit_json(&rows);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("tag: {}", tag_label(options.tags.mesh));
	println!("mesh_chunks: {}", rows.len());
	println!("idx\toffset\tsize\tpadding_end\tfirst_normal\tvertex_start\trecords\tnormals");
	for row in &rows {
		let mut normals: Vec<String> = row.normals.iter().take(limit).map(usize::to_string).collect();
		if row.normals.len() > limit {
			normals.push(format!("... {} more", row.normals.len() - limit));
		}
		println!(
			"{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
			row.ordinal,
			row.offset,
			row.size,
			opt_label(row.padding_end),
			opt_label(row.first_normal),
			opt_label(row.vertex_start),
			row.records,
			if normals.is_empty() { "-".to_owned() } else { normals.join(",") }
		);
	}

	Ok(())
}

fn opt_label(value: Option<usize>) -> String {
	value.map(|item| item.to_string()).unwrap_or_else(|| "-".to_owned())
}

#[derive(serde::Serialize)]
struct ProbeJson {
	ordinal: usize,
	offset: usize,
	size: u32,
	padding_end: Option<usize>,
	first_normal: Option<usize>,
	vertex_start: Option<usize>,
	records: usize,
	normals: Vec<usize>,
}
