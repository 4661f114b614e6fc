use chunkobj::scene::{SceneError, VertexStart};

use crate::cmd::util::{DecodeArgs, LayoutArgs, VertexStartArg, hex_row, parse_u32, parse_usize, tag_label};

#[test]
fn literals_accept_decimal_and_hex() {
	assert_eq!(parse_u32("0x134B01").expect("hex parses"), 0x0013_4B01);
	assert_eq!(parse_u32("17").expect("decimal parses"), 17);
	assert_eq!(parse_usize("0X10").expect("upper prefix parses"), 16);
	assert!(matches!(parse_u32("0xZZ"), Err(SceneError::InvalidLiteral { .. })));
	assert!(matches!(parse_usize("-1"), Err(SceneError::InvalidLiteral { .. })));
}

#[test]
fn layout_args_override_defaults() {
	let args = LayoutArgs {
		mesh_tag: Some("0x10".to_owned()),
		padding_byte: Some("0xCD".to_owned()),
		stride: Some("40".to_owned()),
		vertex_start: Some(VertexStartArg::Normal),
		..LayoutArgs::default()
	};

	let options = args.to_options().expect("options build");
	assert_eq!(options.tags.mesh, 0x10);
	assert_eq!(options.tags.name, 0x0013_4011);
	assert_eq!(options.layout.probe.padding_byte, 0xCD);
	assert_eq!(options.layout.stride, 40);
	assert_eq!(options.layout.name_offset, 164);
	assert_eq!(options.layout.vertex_start, VertexStart::FirstNormal);
	assert!(!options.decode.all_roots, "single root unless asked");
}

#[test]
fn all_roots_flag_reaches_decoder_options() {
	let args = LayoutArgs {
		decode: DecodeArgs { all_roots: true },
		..LayoutArgs::default()
	};
	let options = args.to_options().expect("options build");
	assert!(options.decode.all_roots);
	assert_eq!(options.decode.max_depth, 64);
}

#[test]
fn padding_byte_must_fit_a_byte() {
	let args = LayoutArgs {
		padding_byte: Some("0x100".to_owned()),
		..LayoutArgs::default()
	};
	assert!(matches!(args.to_options(), Err(SceneError::InvalidLiteral { .. })));
}

#[test]
fn renders_labels_and_hex_rows() {
	assert_eq!(tag_label(0x0013_4B01), "0x00134B01 (mesh_data)");
	assert_eq!(tag_label(0x8000_0000), "0x80000000");
	assert_eq!(hex_row(0x20, b"AB\x11"), format!("00000020  41 42 11{}  |AB.|", " ".repeat(39)));
}
