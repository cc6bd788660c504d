//! Error types for pixview-core operations.
//!
//! Views are cheap to build and cheap to query, so the only fallible
//! operations are construction (the borrowed span has to actually hold the
//! declared layout) and the checked element accessors.
//!
//! # Usage
//!
//! ```rust
//! use pixview_core::{ConstantImageView, Error, TypedLayout};
//!
//! let bytes = [0u8; 8];
//! // 4x3 grayscale needs 12 bytes
//! let err = ConstantImageView::<u8>::new(&bytes[..], TypedLayout::packed(4, 3)).unwrap_err();
//! assert!(matches!(err, Error::InsufficientData { required: 12, actual: 8 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::view::TypedImageView`] - construction and checked access

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or indexing an image view.
///
/// # Categories
///
/// - **Bounds errors**: [`OutOfBounds`](Error::OutOfBounds)
/// - **Layout errors**: [`InsufficientData`](Error::InsufficientData),
///   [`InvalidStride`](Error::InvalidStride), [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Memory errors**: [`Misaligned`](Error::Misaligned)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pixel coordinates are outside the view bounds.
    ///
    /// Returned by the checked accessors when `x >= width` or `y >= height`.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// View width
        width: u32,
        /// View height
        height: u32,
    },

    /// The borrowed span is shorter than the layout requires.
    ///
    /// `required` counts the bytes from the start of row 0 up to the end of
    /// the last row's pixel data; padding after the last row is not needed.
    #[error("data holds {actual} bytes, layout requires {required}")]
    InsufficientData {
        /// Bytes needed by the layout
        required: usize,
        /// Bytes actually borrowed
        actual: usize,
    },

    /// The borrowed span does not start at an address suitable for the
    /// element type.
    #[error("data is not aligned to {align} bytes for the element type")]
    Misaligned {
        /// Required alignment in bytes
        align: usize,
    },

    /// Stride would place rows at addresses misaligned for the element type.
    #[error("stride {stride} is not a multiple of element alignment {align}")]
    InvalidStride {
        /// Effective stride in bytes
        stride: usize,
        /// Required alignment in bytes
        align: usize,
    },

    /// Dimensions whose byte extent cannot be represented.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InsufficientData`] error.
    #[inline]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if the layout or memory handed to a view was rejected.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        !self.is_bounds_error()
    }
}
