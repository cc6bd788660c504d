//! # pixview-core
//!
//! Typed, non-owning views over pixel memory.
//!
//! Every image algorithm needs to walk rows of pixels that live in somebody
//! else's buffer: a decoder's output, a GPU readback, a frame from a capture
//! card. This crate provides the accessor for that memory:
//!
//! - [`TypedImageView`] - Borrowed, row-strided view with a compile-time element type
//! - [`TypedLayout`] - Width, height and row stride
//! - [`Pixel`], [`PixelTraits`] - Element types and what a view knows about them
//! - [`PixelFormat`], [`SampleType`] - Channel layout and numeric kind descriptors
//! - [`equal()`] - Structural comparison of views, across compatible element types
//!
//! ## Design Philosophy
//!
//! Mistakes that can be caught by the compiler are. Writing through a
//! read-only view, comparing RGB against RGBA, or keeping a view alive after
//! its buffer is dropped are build errors:
//!
//! ```ignore
//! let view: ConstantImageView<PixelRgb8> = ConstantImageView::from_pixels(&pixels, layout)?;
//! let copy = view;               // cheap copy, both read the same memory
//! // *view.at_mut(0, 0) = px;    // Compile error: constant view
//! // drop(pixels); view.at(0, 0) // Compile error: buffer still borrowed
//! ```
//!
//! Layout problems the compiler cannot see (buffer too short, misaligned for
//! the element type) are reported by [`TypedImageView::new`] as an [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pixview_core::prelude::*;
//!
//! let mut buffer = vec![0u8; 8 * 4 * 2];
//! let mut view = MutableImageView::<PixelRgba8>::new(&mut buffer[..], TypedLayout::packed(4, 2))?;
//! view.fill(PixelRgba8::new([255, 0, 0, 255]));
//! *view.at_mut(1, 1) = PixelRgba8::splat(7);
//!
//! let read = view.constant_view();
//! assert_eq!(read.rows().count(), 2);
//! assert_eq!(read.at(1, 1).into_array(), [7; 4]);
//! # Ok::<(), pixview_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Parallel row iteration through rayon
//! - `serde` - Serialization for layout and format descriptors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod equal;
pub mod error;
pub mod format;
pub mod layout;
pub mod pixel;
pub mod row;
pub mod tag;
pub mod view;

// Re-exports for convenience
pub use equal::equal;
pub use error::*;
pub use format::*;
pub use layout::TypedLayout;
pub use pixel::*;
pub use row::{ImageRow, ImageRowMut, Rows, RowsMut};
pub use tag::FormatTag;
pub use view::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixview_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equal::equal;
    pub use crate::error::{Error, Result};
    pub use crate::format::{PixelFormat, SampleType};
    pub use crate::layout::TypedLayout;
    pub use crate::pixel::{
        Pixel, PixelBgr8, PixelBgra8, PixelCmyk8, PixelRgb16, PixelRgb8, PixelRgbF32,
        PixelRgba16, PixelRgba8, PixelRgbaF32, PixelTraits, PixelY16, PixelY8, PixelYA8,
        PixelYF32, Sample,
    };
    pub use crate::tag::{self, FormatTag};
    pub use crate::view::{
        Constant, ConstantImageView, ImageModifiability, Modifiability, MutableImageView,
        Mutable, TypedImageView,
    };
}
