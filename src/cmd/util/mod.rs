use chunkobj::scene::{DecodeOptions, ExtractOptions, Result, SceneError, VertexStart, tag_hex, tag_name};

/// Root selection shared by every command.
#[derive(clap::Args, Default)]
pub struct DecodeArgs {
	/// Read every consecutive top-level chunk instead of only the root at offset 0.
	#[arg(long = "all-roots")]
	pub all_roots: bool,
}

impl DecodeArgs {
	/// Decoder options with the root selection applied.
	pub fn to_options(&self) -> DecodeOptions {
		DecodeOptions {
			all_roots: self.all_roots,
			..DecodeOptions::default()
		}
	}
}

/// Layout and tag overrides shared by `probe` and `extract`.
#[derive(clap::Args, Default)]
pub struct LayoutArgs {
	/// Mesh vertex stream tag.
	#[arg(long = "mesh-tag")]
	pub mesh_tag: Option<String>,
	/// Mesh name tag.
	#[arg(long = "name-tag")]
	pub name_tag: Option<String>,
	/// Triangle index tag.
	#[arg(long = "index-tag")]
	pub index_tag: Option<String>,
	/// Padding sentinel byte.
	#[arg(long = "padding-byte")]
	pub padding_byte: Option<String>,
	/// Vertex record stride in bytes.
	#[arg(long)]
	pub stride: Option<String>,
	/// Name string offset inside name payloads.
	#[arg(long = "name-offset")]
	pub name_offset: Option<String>,
	/// Vertex stream start heuristic.
	#[arg(long = "vertex-start", value_enum)]
	pub vertex_start: Option<VertexStartArg>,
	#[command(flatten)]
	pub decode: DecodeArgs,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum VertexStartArg {
	/// First byte after leading padding sentinels.
	Padding,
	/// First unit-length normal minus the normal offset.
	Normal,
}

impl LayoutArgs {
	/// Build extraction options with every provided override applied.
	pub fn to_options(&self) -> Result<ExtractOptions> {
		let mut options = ExtractOptions {
			decode: self.decode.to_options(),
			..ExtractOptions::default()
		};
		if let Some(value) = &self.mesh_tag {
			options.tags.mesh = parse_u32(value)?;
		}
		if let Some(value) = &self.name_tag {
			options.tags.name = parse_u32(value)?;
		}
		if let Some(value) = &self.index_tag {
			options.tags.indices = parse_u32(value)?;
		}
		if let Some(value) = &self.padding_byte {
			options.layout.probe.padding_byte = u8::try_from(parse_u32(value)?).map_err(|_| invalid(value))?;
		}
		if let Some(value) = &self.stride {
			options.layout.stride = parse_usize(value)?;
		}
		if let Some(value) = &self.name_offset {
			options.layout.name_offset = parse_usize(value)?;
		}
		if let Some(start) = self.vertex_start {
			options.layout.vertex_start = match start {
				VertexStartArg::Padding => VertexStart::PaddingSentinel,
				VertexStartArg::Normal => VertexStart::FirstNormal,
			};
		}
		Ok(options)
	}
}

/// Parse decimal or `0x`-prefixed hex `u32` literal.
pub(crate) fn parse_u32(value: &str) -> Result<u32> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u32::from_str_radix(stripped, 16)
	} else {
		value.parse::<u32>()
	};

	parsed.map_err(|_| invalid(value))
}

/// Parse decimal or `0x`-prefixed hex offset literal.
pub(crate) fn parse_usize(value: &str) -> Result<usize> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		usize::from_str_radix(stripped, 16)
	} else {
		value.parse::<usize>()
	};

	parsed.map_err(|_| invalid(value))
}

fn invalid(value: &str) -> SceneError {
	SceneError::InvalidLiteral { value: value.to_owned() }
}

/// Render a tag with its role name when known.
pub(crate) fn tag_label(tag: u32) -> String {
	match tag_name(tag) {
		Some(name) => format!("{} ({name})", tag_hex(tag)),
		None => tag_hex(tag),
	}
}

/// Render one 16-byte hex dump row starting at absolute offset `at`.
pub(crate) fn hex_row(at: usize, bytes: &[u8]) -> String {
	let mut hex = String::with_capacity(48);
	for (idx, byte) in bytes.iter().enumerate() {
		if idx > 0 {
			hex.push(' ');
		}
		hex.push_str(&format!("{byte:02X}"));
	}
	let ascii: String = bytes
		.iter()
		.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
		.collect();
	format!("{at:08x}  {hex:<47}  |{ascii}|")
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

#[cfg(test)]
mod tests;
