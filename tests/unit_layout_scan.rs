#![allow(missing_docs)]

mod support;

use chunkobj::scene::{all_plausible_normal_offsets, first_non_padding_offset, first_plausible_normal_offset};
use proptest::prelude::*;

use support::floats;

proptest! {
	#[test]
	fn all_sentinel_payloads_have_no_data_start(len in 0_usize..512) {
		prop_assert_eq!(first_non_padding_offset(&vec![0x11; len]), None);
	}

	#[test]
	fn single_marker_is_found_where_placed((len, k) in (1_usize..512).prop_flat_map(|len| (Just(len), 0..len)), marker in any::<u8>().prop_filter("not the sentinel", |byte| *byte != 0x11)) {
		let mut payload = vec![0x11; len];
		payload[k] = marker;
		prop_assert_eq!(first_non_padding_offset(&payload), Some(k));
	}

	#[test]
	fn unit_x_after_non_unit_prefix_is_found(words in 0_usize..64, tail in 0_usize..16) {
		let mut payload = floats(&vec![7.0; words]);
		payload.extend(floats(&[1.0, 0.0, 0.0]));
		payload.extend(vec![0xAB; tail]);
		prop_assert_eq!(first_plausible_normal_offset(&payload), Some(words * 4));
	}

	#[test]
	fn zero_payloads_have_no_normals(len in 0_usize..512) {
		prop_assert_eq!(first_plausible_normal_offset(&vec![0; len]), None);
		prop_assert!(all_plausible_normal_offsets(&vec![0; len]).is_empty());
	}

	#[test]
	fn every_reported_normal_is_aligned_and_in_window(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
		let offsets = all_plausible_normal_offsets(&bytes);
		prop_assert_eq!(offsets.first().copied(), first_plausible_normal_offset(&bytes));
		for offset in offsets {
			prop_assert_eq!(offset % 4, 0);
			prop_assert!(offset + 12 <= bytes.len());
		}
	}
}
