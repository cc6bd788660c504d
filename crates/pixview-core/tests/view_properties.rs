//! Behavioral properties of image views.
//!
//! Exercises the public API only: layout clamping, emptiness, packedness,
//! structural equality, row iteration and format rendering.

use approx::assert_relative_eq;
use half::f16;
use pixview_core::prelude::*;
use pixview_core::{get_nr_channels, Error};
use std::collections::HashSet;

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_understated_stride_is_raised() {
    let data = vec![0u8; 4 * 5 * 3];
    for stride in [0, 1, 4, 19] {
        let view =
            ConstantImageView::<PixelRgba8>::new(&data[..], TypedLayout::new(5, 3, stride)).unwrap();
        assert_eq!(view.stride_bytes(), 20, "stride {stride}");
        assert!(view.is_packed());
    }
}

#[test]
fn test_packed_iff_stride_matches_row() {
    let data = vec![0u16; 64];
    let bytes: &[u8] = bytemuck::cast_slice(&data[..]);
    for (width, stride) in [(4u32, 8usize), (4, 10), (4, 16), (3, 6), (3, 8), (1, 2)] {
        let view = ConstantImageView::<u16>::new(bytes, TypedLayout::new(width, 4, stride)).unwrap();
        assert_eq!(
            view.is_packed(),
            view.stride_bytes() == view.width() as usize * 2,
            "width {width} stride {stride}"
        );
    }
}

#[test]
fn test_is_empty_all_combinations() {
    let data = [0u8; 16];
    for has_data in [false, true] {
        for width in [0u32, 4] {
            for height in [0u32, 4] {
                let layout = TypedLayout::packed(width, height);
                let view = ConstantImageView::<u8>::from_parts(has_data.then_some(&data[..]), layout)
                    .unwrap();
                let expected = !has_data || width == 0 || height == 0;
                assert_eq!(view.is_empty(), expected, "{has_data} {width}x{height}");
                assert_eq!(view.is_valid(), !expected);
            }
        }
    }
}

#[test]
fn test_gray_4x3_packed() {
    let data: Vec<u8> = (0..12).collect();
    let view = ConstantImageView::<u8>::new(&data[..], TypedLayout::new(4, 3, 4)).unwrap();
    assert_eq!(view.row_bytes(), 4);
    assert_eq!(view.total_bytes(), 12);
    assert!(view.is_packed());
}

#[test]
fn test_gray_4x3_padded_equals_packed() {
    let packed: Vec<u8> = (0..12).collect();
    let mut padded = vec![0x55u8; 18];
    for y in 0..3 {
        padded[y * 6..y * 6 + 4].copy_from_slice(&packed[y * 4..y * 4 + 4]);
    }

    let a = ConstantImageView::<u8>::new(&packed[..], TypedLayout::new(4, 3, 4)).unwrap();
    let b = ConstantImageView::<u8>::new(&padded[..], TypedLayout::new(4, 3, 6)).unwrap();
    assert!(!b.is_packed());
    assert_eq!(b.total_bytes(), 18);
    assert!(equal(&a, &b));
}

// ============================================================================
// Construction errors
// ============================================================================

#[test]
fn test_construction_rejections() {
    let data = vec![0u32; 6];
    let bytes: &[u8] = bytemuck::cast_slice(&data[..]);

    let short = ConstantImageView::<u32>::new(&bytes[..20], TypedLayout::packed(3, 2));
    assert_eq!(short.unwrap_err(), Error::insufficient_data(24, 20));

    let misaligned = ConstantImageView::<u32>::new(&bytes[2..], TypedLayout::packed(1, 2));
    assert_eq!(misaligned.unwrap_err(), Error::Misaligned { align: 4 });

    let odd_stride = ConstantImageView::<u32>::new(bytes, TypedLayout::new(1, 2, 6));
    assert_eq!(odd_stride.unwrap_err(), Error::InvalidStride { stride: 6, align: 4 });
}

#[test]
fn test_error_messages() {
    let err = Error::insufficient_data(12, 8);
    assert_eq!(err.to_string(), "data holds 8 bytes, layout requires 12");
    let err = Error::out_of_bounds(4, 0, 4, 3);
    assert_eq!(err.to_string(), "pixel (4, 0) out of bounds for image 4x3");
}

// ============================================================================
// Access
// ============================================================================

#[test]
fn test_try_at_exact_bounds() {
    let data = [0u8; 15];
    let view = ConstantImageView::<u8>::new(&data[..], TypedLayout::packed(5, 3)).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let inside = x < 5 && y < 3;
            assert_eq!(view.try_at(x, y).is_ok(), inside, "({x}, {y})");
            if !inside {
                assert!(view.try_at(x, y).unwrap_err().is_bounds_error());
            }
        }
    }
}

#[test]
#[should_panic]
fn test_at_panics_outside_memory() {
    let data = [0u8; 4];
    let view = ConstantImageView::<u8>::new(&data[..], TypedLayout::packed(2, 2)).unwrap();
    let _ = view.at(0, 5);
}

#[test]
fn test_fill_leaves_padding() {
    let mut data = vec![0x11u16; 5 * 3];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut data[..]);
    let mut view = MutableImageView::<u16>::new(bytes, TypedLayout::new(3, 3, 10)).unwrap();
    view.fill(0xBEEF);
    for row in data.chunks(5) {
        assert_eq!(&row[..3], &[0xBEEF; 3]);
        assert_eq!(&row[3..], &[0x11; 2]);
    }
}

#[test]
fn test_float_samples() {
    let pixels = vec![PixelRgbF32::new([0.25, 0.5, 1.0]); 4];
    let view = ConstantImageView::from_pixels(&pixels, TypedLayout::packed(2, 2)).unwrap();
    let sum: f32 = view.rows().flat_map(|row| row.pixels().iter().map(|px| px[1])).sum();
    assert_relative_eq!(sum, 2.0);

    let halves = vec![f16::from_f32(0.1); 6];
    let view = ConstantImageView::from_pixels(&halves, TypedLayout::packed(3, 2)).unwrap();
    assert_eq!(view.row_bytes(), 6);
    assert_relative_eq!(view.at(2, 1).to_f32(), 0.1, epsilon = 1e-3);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equal_reflexive_symmetric() {
    let a_data: Vec<u8> = (0..24).collect();
    let mut b_data = a_data.clone();
    b_data[23] = 0;

    let a = ConstantImageView::<PixelRgb8>::new(&a_data[..], TypedLayout::packed(4, 2)).unwrap();
    let b = ConstantImageView::<PixelRgb8>::new(&b_data[..], TypedLayout::packed(4, 2)).unwrap();
    let c = ConstantImageView::<PixelRgb8>::new(&a_data[..], TypedLayout::packed(2, 4)).unwrap();

    for view in [a, b, c] {
        assert!(equal(&view, &view));
    }
    for (x, y) in [(a, b), (a, c), (b, c)] {
        assert_eq!(equal(&x, &y), equal(&y, &x));
    }
    assert!(!equal(&a, &b));
}

#[test]
fn test_equal_zero_dimension_pairs() {
    let data = [0u8; 8];
    let zero = ConstantImageView::<u8>::new(&data[..], TypedLayout::packed(0, 0)).unwrap();
    let wide = ConstantImageView::<u8>::new(&data[..], TypedLayout::packed(5, 0)).unwrap();
    assert!(equal(&zero, &wide));
    assert!(equal(&wide, &zero));
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_rows_ascending_and_restartable() {
    let data: Vec<u8> = (0..35).collect();
    let view = ConstantImageView::<u8>::new(&data[..], TypedLayout::new(5, 7, 5)).unwrap();

    let first: Vec<(u32, Vec<u8>)> = view.rows().map(|r| (r.index(), r.to_vec())).collect();
    let second: Vec<(u32, Vec<u8>)> = (&view).into_iter().map(|r| (r.index(), r.to_vec())).collect();
    assert_eq!(first.len(), 7);
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].0 + 1 == w[1].0));
    assert_eq!(first[6].1, [30, 31, 32, 33, 34]);
}

#[test]
fn test_rows_count_matches_height_for_zero_width() {
    let data = [0u8; 4];
    for height in [1u32, 3, 8] {
        let view = ConstantImageView::<u16>::from_parts(Some(&data[..0]), TypedLayout::packed(0, height))
            .unwrap();
        assert_eq!(view.rows().count(), height as usize);
        assert_eq!(view.rows().len(), height as usize);
    }
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn test_format_rendering_distinct() {
    let formats: HashSet<String> = PixelFormat::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(formats.len(), PixelFormat::ALL.len());
    let samples: HashSet<String> = SampleType::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(samples.len(), SampleType::ALL.len());
    assert!(formats.iter().chain(samples.iter()).all(|s| !s.is_empty()));
    assert_eq!(PixelFormat::RGBA.to_string(), "PixelFormat::RGBA");
}

#[test]
fn test_channel_counts() {
    assert_eq!(get_nr_channels(PixelFormat::Y), 1);
    assert_eq!(get_nr_channels(PixelFormat::XX), 2);
    assert_eq!(get_nr_channels(PixelFormat::CIELab), 3);
    assert_eq!(get_nr_channels(PixelFormat::ABGR), 4);
    assert_eq!(get_nr_channels(PixelFormat::Unknown), 0);
    for format in PixelFormat::ALL {
        assert_eq!(get_nr_channels(format), format.nr_channels());
    }
    assert_eq!(get_nr_channels(<PixelCmyk8 as PixelTraits>::FORMAT), PixelCmyk8::CHANNELS);
}
