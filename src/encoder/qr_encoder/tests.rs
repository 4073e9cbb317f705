use super::*;
use crate::encoder::bch::BchEncoder;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::modes::ByteSegment;
use crate::encoder::tables::total_codewords;
use crate::error::EncodeError;
use proptest::prelude::*;

fn v(n: u8) -> Version {
    Version::new(n).unwrap()
}

fn hello(version: Version, level: ECLevel) -> QrEncoder {
    let mut qr = QrEncoder::new(version, level);
    qr.add_segment("HELLO WORLD");
    qr.build().unwrap();
    qr
}

/// Walk the data area with the function mask, undo the mask and pack bits into bytes
fn read_codewords(qr: &QrEncoder) -> Vec<u8> {
    let size = qr.module_count();
    let fm = FunctionMask::new(qr.version());
    let mask = qr.mask_pattern().unwrap();
    let mut bits = Vec::new();
    let mut upward = true;
    let mut right = size as isize - 1;
    while right > 0 {
        if right == 6 {
            right -= 1;
        }
        for i in 0..size {
            let row = if upward { size - 1 - i } else { i };
            for col in [right as usize, right as usize - 1] {
                if !fm.is_function(row, col) {
                    bits.push(qr.is_dark(row, col) ^ mask.is_masked(row, col));
                }
            }
        }
        upward = !upward;
        right -= 2;
    }
    bits.chunks_exact(8)
        .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

/// Both format words: the copy around the top-left finder, then the split copy
fn read_format_words(qr: &QrEncoder) -> (u16, u16) {
    let size = qr.module_count();
    let bit = |row: usize, col: usize| qr.is_dark(row, col) as u16;
    let mut first = 0u16;
    let mut second = 0u16;
    for i in 0..15 {
        let (row, col) = match i {
            0..=5 => (i, 8),
            6 => (7, 8),
            7 => (8, 8),
            8 => (8, 7),
            _ => (8, 14 - i),
        };
        first |= bit(row, col) << i;
        let (row, col) = if i < 8 {
            (8, size - 1 - i)
        } else {
            (size - 15 + i, 8)
        };
        second |= bit(row, col) << i;
    }
    (first, second)
}

fn assert_finder(qr: &QrEncoder, top: usize, left: usize) {
    for r in 0..7 {
        for c in 0..7 {
            let ring = r == 0 || r == 6 || c == 0 || c == 6;
            let core = (2..=4).contains(&r) && (2..=4).contains(&c);
            assert_eq!(qr.is_dark(top + r, left + c), ring || core, "finder at ({top}, {left})");
        }
    }
}

#[test]
fn test_hello_world_end_to_end() {
    for level in [ECLevel::L, ECLevel::M] {
        let qr = hello(Version::MIN, level);
        assert_eq!(qr.module_count(), 21);
        assert!(qr.is_dark(0, 0));
        assert!(qr.mask_pattern().is_some());
        assert_eq!(qr.codewords().len(), 26);
        assert_eq!(qr.codewords()[0], 0x40);
    }
}

#[test]
fn test_rebuild_is_identical() {
    let mut qr = hello(v(1), ECLevel::M);
    let first = qr.modules().clone();
    let mask = qr.mask_pattern();
    qr.build().unwrap();
    assert_eq!(qr.modules(), &first);
    assert_eq!(qr.mask_pattern(), mask);

    let other = hello(v(1), ECLevel::M);
    assert_eq!(other.modules(), &first);
}

#[test]
fn test_unbuilt_reads_light() {
    let qr = QrEncoder::new(v(3), ECLevel::Q);
    assert_eq!(qr.module_count(), 29);
    assert!(!qr.is_dark(0, 0));
    assert_eq!(qr.mask_pattern(), None);
    assert!(qr.codewords().is_empty());
}

#[test]
fn test_function_patterns_every_version() {
    for version in Version::MIN.up_to_max() {
        let mut qr = QrEncoder::new(version, ECLevel::L);
        qr.add_segment("function patterns");
        qr.build_with_mask(MaskPattern::Pattern3).unwrap();
        let size = qr.module_count();

        assert_finder(&qr, 0, 0);
        assert_finder(&qr, size - 7, 0);
        assert_finder(&qr, 0, size - 7);
        for i in 0..8 {
            assert!(!qr.is_dark(7, i));
            assert!(!qr.is_dark(i, 7));
            assert!(!qr.is_dark(7, size - 1 - i));
            assert!(!qr.is_dark(size - 1 - i, 7));
        }
        for i in 8..size - 8 {
            assert_eq!(qr.is_dark(6, i), i % 2 == 0, "row timing v{}", version.number());
            assert_eq!(qr.is_dark(i, 6), i % 2 == 0, "col timing v{}", version.number());
        }
        assert!(qr.is_dark(size - 8, 8));
        assert!(qr.modules().is_complete());
    }
}

#[test]
fn test_alignment_patterns_placed() {
    let qr = hello(v(7), ECLevel::M);
    // centers at 6, 22, 38; (22, 22) is a full pattern
    for r in 0..5 {
        for c in 0..5 {
            let dark = r == 0 || r == 4 || c == 0 || c == 4 || (r == 2 && c == 2);
            assert_eq!(qr.is_dark(20 + r, 20 + c), dark);
        }
    }
}

#[test]
fn test_codewords_read_back() {
    for (n, level) in [
        (1, ECLevel::M),
        (2, ECLevel::H),
        (5, ECLevel::Q),
        (7, ECLevel::L),
        (14, ECLevel::M),
        (27, ECLevel::H),
    ] {
        let mut qr = QrEncoder::new(v(n), level);
        qr.add_segment("QR read back");
        qr.build().unwrap();
        let read = read_codewords(&qr);
        assert_eq!(read.len(), total_codewords(v(n)));
        assert_eq!(read, qr.codewords(), "version {n} {level:?}");
    }
}

#[test]
fn test_format_info_decodes() {
    for level in ECLevel::ALL {
        for mask in MaskPattern::ALL {
            let mut qr = QrEncoder::new(v(2), level);
            qr.add_segment("format");
            qr.build_with_mask(mask).unwrap();

            let (first, second) = read_format_words(&qr);
            assert_eq!(first, second);
            assert!(BchEncoder::check_type_info(first));
            let data = ((first ^ 0x5412) >> 10) as u8;
            assert_eq!(ECLevel::from_format_bits(data >> 3), level);
            assert_eq!(MaskPattern::from_bits(data & 0x07).unwrap(), mask);
        }
    }
}

#[test]
fn test_version_info_placed() {
    let qr = hello(v(7), ECLevel::L);
    let size = qr.module_count();
    let mut top_right = 0u32;
    let mut bottom_left = 0u32;
    for i in 0..18 {
        top_right |= (qr.is_dark(i / 3, size - 11 + i % 3) as u32) << i;
        bottom_left |= (qr.is_dark(size - 11 + i % 3, i / 3) as u32) << i;
    }
    assert_eq!(top_right, BchEncoder::type_number(7));
    assert_eq!(bottom_left, top_right);
    assert_eq!(top_right, 0b000111110010010100);
}

#[test]
fn test_capacity_overflow() {
    let mut qr = QrEncoder::new(v(1), ECLevel::L);
    qr.add_segment("A".repeat(17));
    assert!(qr.build().is_ok());
    assert_eq!(qr.data_bits(), 148);
    assert_eq!(qr.capacity_bits(), 152);

    let mut qr = QrEncoder::new(v(1), ECLevel::L);
    qr.add_segment("A".repeat(18));
    match qr.build() {
        Err(EncodeError::CapacityOverflow {
            needed_bits,
            available_bits,
        }) => {
            assert_eq!(needed_bits, 156);
            assert_eq!(available_bits, 152);
        }
        other => panic!("expected overflow, got {other:?}"),
    }
    assert_eq!(qr.mask_pattern(), None);
}

#[test]
fn test_multiple_segments_and_clear() {
    let mut qr = QrEncoder::new(v(2), ECLevel::M);
    qr.add_segment("abc");
    qr.add_segment(ByteSegment::from_bytes(vec![0x00, 0xFF]));
    assert_eq!(qr.segments().len(), 2);
    qr.build().unwrap();
    // 0100 00000011 'a'
    assert_eq!(&qr.codewords()[..2], &[0x40, 0x36]);

    let built = qr.modules().clone();
    qr.clear_segments();
    assert!(qr.segments().is_empty());
    assert_eq!(qr.modules(), &built);
}

#[test]
fn test_build_with_mask() {
    let mut qr = QrEncoder::new(v(3), ECLevel::Q);
    qr.add_segment("forced");
    qr.build_with_mask(MaskPattern::Pattern6).unwrap();
    assert_eq!(qr.mask_pattern(), Some(MaskPattern::Pattern6));
    assert_eq!(read_codewords(&qr), qr.codewords());
}

#[test]
fn test_selected_mask_has_lowest_score() {
    let qr = hello(v(4), ECLevel::H);
    let scores: Vec<u32> = MaskPattern::ALL
        .iter()
        .map(|&mask| evaluate(qr.version(), qr.ec_level(), qr.codewords(), mask))
        .collect();
    let min = *scores.iter().min().unwrap();
    let first_min = scores.iter().position(|&s| s == min).unwrap();
    assert_eq!(qr.penalty_score(), Some(min));
    assert_eq!(qr.mask_pattern().unwrap().bits() as usize, first_min);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let mut qr = QrEncoder::new(v(12), ECLevel::M);
    qr.add_segment("parallel mask search");
    qr.build().unwrap();
    let sequential = MaskPattern::ALL
        .iter()
        .map(|&mask| (evaluate(qr.version(), qr.ec_level(), qr.codewords(), mask), mask))
        .min()
        .unwrap();
    assert_eq!(qr.mask_pattern(), Some(sequential.1));
    assert_eq!(qr.penalty_score(), Some(sequential.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_mask_choice_is_deterministic(payload in proptest::collection::vec(any::<u8>(), 0..40)) {
        let build = || {
            let mut qr = QrEncoder::new(v(3), ECLevel::L);
            qr.add_segment(ByteSegment::from_bytes(payload.clone()));
            qr.build().unwrap();
            qr
        };
        let a = build();
        let b = build();
        prop_assert_eq!(a.mask_pattern(), b.mask_pattern());
        prop_assert_eq!(a.modules(), b.modules());
        prop_assert_eq!(read_codewords(&a), a.codewords().to_vec());
    }
}
