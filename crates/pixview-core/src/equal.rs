//! Structural equality of image views.
//!
//! [`equal()`] compares the visible pixels of two views, possibly of different
//! element types, as long as the types describe the same memory layout:
//!
//! - the same channel [`Element`](PixelTraits::Element) type (trait bound)
//! - the same number of channels
//! - the same pixel format channel count, or [`PixelFormat::Unknown`] on
//!   either side
//! - the same size in bytes
//!
//! The last three are checked when `equal` is instantiated, so a mismatch
//! is a build error rather than a runtime `false`:
//!
//! ```compile_fail
//! use pixview_core::{equal, ConstantImageView, PixelRgb8, PixelRgba8};
//!
//! let a = ConstantImageView::<PixelRgb8>::default();
//! let b = ConstantImageView::<PixelRgba8>::default();
//! equal(&a, &b); // 3 vs 4 channels
//! ```
//!
//! ```compile_fail
//! use pixview_core::{equal, ConstantImageView};
//!
//! let a = ConstantImageView::<u8>::default();
//! let b = ConstantImageView::<u16>::default();
//! equal(&a, &b); // different element types
//! ```
//!
//! [`PixelFormat::Unknown`]: crate::PixelFormat::Unknown

use crate::pixel::PixelTraits;
use crate::view::{Modifiability, TypedImageView};
use tracing::trace;

/// Returns `true` if both views show the same pixels.
///
/// Only the tight row data is compared, so views that differ in padding
/// (stride) but not in content are equal. A view with zero width or height
/// is equal to every other view with zero width or height, whatever their
/// other dimension; it is also equal to any non-empty view. A view without
/// memory but with a non-zero geometry compares as rows of no bytes.
///
/// # Example
///
/// ```rust
/// use pixview_core::{equal, ConstantImageView, PixelY8, TypedLayout};
///
/// let packed = [1u8, 2, 3, 4];
/// let padded = [1u8, 2, 0xFF, 3, 4, 0xFF];
///
/// let a = ConstantImageView::<u8>::new(&packed[..], TypedLayout::packed(2, 2)).unwrap();
/// let b = ConstantImageView::<PixelY8>::new(&padded[..], TypedLayout::new(2, 2, 3)).unwrap();
/// assert!(equal(&a, &b));
/// ```
pub fn equal<P0, P1, M0, M1>(
    img_0: &TypedImageView<'_, P0, M0>,
    img_1: &TypedImageView<'_, P1, M1>,
) -> bool
where
    P0: PixelTraits,
    P1: PixelTraits<Element = P0::Element>,
    M0: Modifiability,
    M1: Modifiability,
{
    const {
        assert!(
            P0::CHANNELS == P1::CHANNELS,
            "pixel types differ in channel count"
        );
        assert!(
            P0::FORMAT.nr_channels() == P1::FORMAT.nr_channels()
                || P0::FORMAT.is_unknown()
                || P1::FORMAT.is_unknown(),
            "pixel formats differ in channel count"
        );
        assert!(P0::NR_BYTES == P1::NR_BYTES, "pixel types differ in size");
    }

    trace!(
        dims_0 = ?img_0.dimensions(),
        dims_1 = ?img_1.dimensions(),
        "Comparing image views"
    );

    if img_0.layout().has_zero_area() || img_1.layout().has_zero_area() {
        trace!("Zero-area view, treating as equal");
        return true;
    }
    if img_0.dimensions() != img_1.dimensions() {
        trace!("Dimensions differ");
        return false;
    }

    for y in 0..img_0.height() {
        if img_0.row_byte_slice(y) != img_1.row_byte_slice(y) {
            trace!(y, "Row content differs");
            return false;
        }
    }
    true
}
