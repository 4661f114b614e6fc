use std::fs;
use std::path::PathBuf;

use chunkobj::scene::{ExportReport, Result, SceneFile, export_meshes, extract_meshes};

use crate::cmd::util::{LayoutArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Output directory, created when missing.
	#[arg(long, default_value = "out")]
	pub out: PathBuf,
	#[command(flatten)]
	pub layout: LayoutArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode the container and write one OBJ file per assembled mesh.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out, layout, json } = args;
	let options = layout.to_options()?;

	let scene = SceneFile::open(&path)?;
	let roots = scene.roots(&options.decode)?;
	let outcomes = extract_meshes(&roots, &options)?;
	tracing::info!(meshes = outcomes.len(), "found mesh chunks");

	fs::create_dir_all(&out)?;
	let report = export_meshes(outcomes, &out);

	if json {
		print_json(&path, &out, &report);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("out: {}", out.display());
	println!("written: {}", report.written.len());
	for item in &report.written {
		println!("  {}\t{}\tvertices={}\tfaces={}", item.ordinal, item.path.display(), item.vertices, item.faces);
	}
	println!("skipped: {}", report.skipped.len());
	for item in &report.skipped {
		println!("  {}\t@{}\t{}", item.ordinal, item.offset, item.reason);
	}
	if !report.failed.is_empty() {
		println!("failed: {}", report.failed.len());
		for item in &report.failed {
			println!("  {}\t@{}\t{}", item.ordinal, item.offset, item.reason);
		}
	}

	Ok(())
}

fn print_json(path: &std::path::Path, out: &std::path::Path, report: &ExportReport) {
	let skipped = |items: &[chunkobj::scene::SkippedMesh]| {
		items
			.iter()
			.map(|item| SkippedJson {
				ordinal: item.ordinal,
				offset: item.offset,
				reason: item.reason.clone(),
			})
			.collect::<Vec<_>>()
	};

	let payload = ExtractJson {
		path: path.display().to_string(),
		out: out.display().to_string(),
		written: report
			.written
			.iter()
			.map(|item| WrittenJson {
				ordinal: item.ordinal,
				name: item.name.clone(),
				path: item.path.display().to_string(),
				vertices: item.vertices,
				faces: item.faces,
			})
			.collect(),
		skipped: skipped(&report.skipped),
		failed: skipped(&report.failed),
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct WrittenJson {
	ordinal: usize,
	name: Option<String>,
	path: String,
	vertices: usize,
	faces: usize,
}

#[derive(serde::Serialize)]
struct SkippedJson {
	ordinal: usize,
	offset: usize,
	reason: String,
}

#[derive(serde::Serialize)]
struct ExtractJson {
	path: String,
	out: String,
	written: Vec<WrittenJson>,
	skipped: Vec<SkippedJson>,
	failed: Vec<SkippedJson>,
}
