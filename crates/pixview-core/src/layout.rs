//! Row-major image layout.
//!
//! [`TypedLayout`] is the geometry half of an image view: width and height in
//! pixels plus the row stride in bytes. It knows nothing about the element
//! type, so element-size dependent quantities take the element as a type
//! parameter:
//!
//! ```text
//!            row_bytes            padding
//!   ┌──────────────────────────┬─────────┐
//!   │ P P P P ... P            │ . . .   │  ← row 0
//!   │ P P P P ... P            │ . . .   │  ← row 1
//!   └──────────────────────────┴─────────┘
//!   ◄─────────────── stride_bytes ────────►
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixview_core::TypedLayout;
//!
//! let layout = TypedLayout::new(4, 3, 6);
//! assert_eq!(layout.row_bytes::<u8>(), 4);
//! assert_eq!(layout.total_bytes::<u8>(), 18);
//! assert!(!layout.is_packed::<u8>());
//! ```

use crate::pixel::PixelTraits;

/// Width, height and row stride of an image.
///
/// The stride is stored as given. A stride smaller than the tight row size
/// (including the `0` used by [`packed`](Self::packed)) is treated as the
/// tight row size by every query here, and an image view stores the clamped
/// value when it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedLayout {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bytes between the starts of consecutive rows
    pub stride_bytes: usize,
}

impl TypedLayout {
    /// Creates a layout with an explicit row stride.
    #[inline]
    pub const fn new(width: u32, height: u32, stride_bytes: usize) -> Self {
        Self {
            width,
            height,
            stride_bytes,
        }
    }

    /// Creates a layout whose rows carry no padding, whatever the element size.
    #[inline]
    pub const fn packed(width: u32, height: u32) -> Self {
        Self::new(width, height, 0)
    }

    /// Returns `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if width or height is zero.
    #[inline]
    pub const fn has_zero_area(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes of pixel data in one row: `width * size_of::<P>()`, saturating
    /// at `usize::MAX`.
    #[inline]
    pub const fn row_bytes<P: PixelTraits>(&self) -> usize {
        (self.width as usize).saturating_mul(P::NR_BYTES)
    }

    /// The stride a view over this layout ends up with.
    #[inline]
    pub const fn effective_stride<P: PixelTraits>(&self) -> usize {
        let row_bytes = self.row_bytes::<P>();
        if self.stride_bytes < row_bytes {
            row_bytes
        } else {
            self.stride_bytes
        }
    }

    /// Total addressable bytes: `stride * height`.
    ///
    /// Saturates at `usize::MAX`; image views never hold such a layout, since
    /// construction rejects byte extents that overflow.
    #[inline]
    pub const fn total_bytes<P: PixelTraits>(&self) -> usize {
        self.effective_stride::<P>().saturating_mul(self.height as usize)
    }

    /// Returns `true` if rows carry no padding.
    #[inline]
    pub const fn is_packed<P: PixelTraits>(&self) -> bool {
        self.effective_stride::<P>() == self.row_bytes::<P>()
    }

    /// Returns this layout with the stride raised to at least the tight row size.
    #[inline]
    pub const fn clamped<P: PixelTraits>(self) -> Self {
        Self::new(self.width, self.height, self.effective_stride::<P>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{PixelRgb8, PixelRgba16};

    #[test]
    fn test_packed_layout() {
        let layout = TypedLayout::packed(4, 3);
        assert_eq!(layout.stride_bytes, 0);
        assert_eq!(layout.row_bytes::<u8>(), 4);
        assert_eq!(layout.effective_stride::<u8>(), 4);
        assert_eq!(layout.total_bytes::<u8>(), 12);
        assert!(layout.is_packed::<u8>());
    }

    #[test]
    fn test_padded_layout() {
        let layout = TypedLayout::new(4, 3, 6);
        assert_eq!(layout.total_bytes::<u8>(), 18);
        assert!(!layout.is_packed::<u8>());
    }

    #[test]
    fn test_element_size() {
        let layout = TypedLayout::new(10, 2, 32);
        assert_eq!(layout.row_bytes::<PixelRgb8>(), 30);
        assert!(!layout.is_packed::<PixelRgb8>());
        // 10 * 8 bytes outgrows the given stride
        assert_eq!(layout.row_bytes::<PixelRgba16>(), 80);
        assert_eq!(layout.effective_stride::<PixelRgba16>(), 80);
        assert!(layout.is_packed::<PixelRgba16>());
    }

    #[test]
    fn test_clamped_never_shrinks() {
        let layout = TypedLayout::new(4, 3, 100).clamped::<u8>();
        assert_eq!(layout.stride_bytes, 100);
        let layout = TypedLayout::new(4, 3, 1).clamped::<u32>();
        assert_eq!(layout.stride_bytes, 16);
    }

    #[test]
    fn test_total_bytes_saturates() {
        let layout = TypedLayout::new(1, 3, usize::MAX);
        assert_eq!(layout.total_bytes::<u8>(), usize::MAX);
        assert_eq!(TypedLayout::new(2, 1, usize::MAX).total_bytes::<u32>(), usize::MAX);
    }

    #[test]
    fn test_zero_area() {
        assert!(TypedLayout::default().has_zero_area());
        assert!(TypedLayout::packed(5, 0).has_zero_area());
        assert!(!TypedLayout::packed(1, 1).has_zero_area());
        assert_eq!(TypedLayout::packed(7, 9).dimensions(), (7, 9));
    }
}
