//! Pixel element types.
//!
//! An image view is generic over its element type `P`. Anything that
//! implements [`PixelTraits`] can be viewed; this module provides the
//! building blocks:
//!
//! - [`Sample`] - Trait for primitive channel types (u8, i16, f16, f32, ...)
//! - [`Pixel`] - N interleaved samples tagged with a compile-time [`FormatTag`]
//! - [`PixelTraits`] - What views and [`equal`](fn@crate::equal) know about an element
//!
//! # Memory Layout
//!
//! [`Pixel`] is `#[repr(transparent)]` over `[T; N]`, so a row of
//! `Pixel<u8, 3, tag::Rgb>` is exactly `RGBRGBRGB...` in memory and can be
//! viewed straight from decoder output.
//!
//! ```
//! use pixview_core::prelude::*;
//!
//! let px = PixelRgb8::new([255, 128, 0]);
//! assert_eq!(px[1], 128);
//! assert_eq!(<PixelRgb8 as PixelTraits>::NR_BYTES, 3);
//! assert_eq!(<PixelRgb8 as PixelTraits>::SAMPLE_TYPE, SampleType::UnsignedInteger);
//! ```
//!
//! # Dependencies
//!
//! - `bytemuck` for the `Pod` guarantee behind every byte reinterpretation
//! - `half` crate for `f16` support

use crate::format::{PixelFormat, SampleType};
use crate::tag::{self, FormatTag};
use bytemuck::{Pod, Zeroable};
use half::f16;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Trait for primitive channel value types.
///
/// # Constants
///
/// - [`SAMPLE_TYPE`](Sample::SAMPLE_TYPE) - Numeric kind of the type
/// - [`BITS`](Sample::BITS) - Bit depth of the type
/// - [`IS_FLOAT`](Sample::IS_FLOAT) - Whether this is a floating-point type
pub trait Sample: Pod + PartialEq + fmt::Debug + Send + Sync {
    /// Numeric kind of this sample type.
    const SAMPLE_TYPE: SampleType;

    /// Number of bits per sample.
    const BITS: u32;

    /// Whether this is a floating-point format.
    const IS_FLOAT: bool = matches!(Self::SAMPLE_TYPE, SampleType::FloatingPoint);
}

macro_rules! impl_sample {
    ($($t:ty => $kind:ident, $bits:expr;)*) => {$(
        impl Sample for $t {
            const SAMPLE_TYPE: SampleType = SampleType::$kind;
            const BITS: u32 = $bits;
        }
    )*};
}

impl_sample! {
    u8 => UnsignedInteger, 8;
    u16 => UnsignedInteger, 16;
    u32 => UnsignedInteger, 32;
    u64 => UnsignedInteger, 64;
    i8 => SignedInteger, 8;
    i16 => SignedInteger, 16;
    i32 => SignedInteger, 32;
    i64 => SignedInteger, 64;
    f16 => FloatingPoint, 16;
    f32 => FloatingPoint, 32;
    f64 => FloatingPoint, 64;
}

/// Static description of a pixel element type.
///
/// Implemented for every [`Sample`] primitive (one channel, unknown format)
/// and for every [`Pixel`]. Custom `#[repr(C)]` pixel structs can implement
/// it too, provided they are [`Pod`]:
///
/// ```
/// use bytemuck::{Pod, Zeroable};
/// use pixview_core::{PixelFormat, PixelTraits};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Packed565(u16);
///
/// impl PixelTraits for Packed565 {
///     type Element = u16;
///     const CHANNELS: usize = 1;
///     const FORMAT: PixelFormat = PixelFormat::Unknown;
/// }
/// assert_eq!(Packed565::NR_BYTES, 2);
/// ```
pub trait PixelTraits: Pod {
    /// Type of each channel value.
    type Element: Sample;

    /// Number of interleaved channels.
    const CHANNELS: usize;

    /// Pixel format; [`PixelFormat::Unknown`] when not specified.
    const FORMAT: PixelFormat;

    /// Size of one element in bytes.
    const NR_BYTES: usize = std::mem::size_of::<Self>();

    /// Numeric kind of each channel.
    const SAMPLE_TYPE: SampleType = <Self::Element as Sample>::SAMPLE_TYPE;
}

macro_rules! impl_pixel_traits_for_samples {
    ($($t:ty),*) => {$(
        impl PixelTraits for $t {
            type Element = $t;
            const CHANNELS: usize = 1;
            const FORMAT: PixelFormat = PixelFormat::Unknown;
        }
    )*};
}

impl_pixel_traits_for_samples!(u8, u16, u32, u64, i8, i16, i32, i64, f16, f32, f64);

/// A pixel of `N` interleaved samples of type `T`, in format `F`.
///
/// # Example
///
/// ```
/// use pixview_core::{tag, Pixel};
///
/// let px: Pixel<u16, 4, tag::Rgba> = Pixel::new([1, 2, 3, 4]);
/// assert_eq!(px.into_array(), [1, 2, 3, 4]);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Pixel<T: Sample, const N: usize, F: FormatTag = tag::Unknown> {
    channels: [T; N],
    _format: PhantomData<F>,
}

// SAFETY: `Pixel` is `repr(transparent)` over `[T; N]` (the `PhantomData` is a
// ZST), and an array of `Pod` values has no padding and no invalid bit
// patterns.
unsafe impl<T: Sample, const N: usize, F: FormatTag> Zeroable for Pixel<T, N, F> {}
// SAFETY: see above.
unsafe impl<T: Sample, const N: usize, F: FormatTag> Pod for Pixel<T, N, F> {}

impl<T: Sample, const N: usize, F: FormatTag> Pixel<T, N, F> {
    /// Creates a pixel from its channel values.
    #[inline]
    pub const fn new(channels: [T; N]) -> Self {
        Self {
            channels,
            _format: PhantomData,
        }
    }

    /// Creates a pixel with every channel set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Returns the channel values.
    #[inline]
    pub const fn channels(&self) -> &[T; N] {
        &self.channels
    }

    /// Returns the channel values mutably.
    #[inline]
    pub fn channels_mut(&mut self) -> &mut [T; N] {
        &mut self.channels
    }

    /// Consumes the pixel, returning its channel values.
    #[inline]
    pub const fn into_array(self) -> [T; N] {
        self.channels
    }

    /// Reinterprets the pixel under another format tag. No data changes.
    #[inline]
    pub const fn retag<G: FormatTag>(self) -> Pixel<T, N, G> {
        Pixel::new(self.channels)
    }
}

impl<T: Sample, const N: usize, F: FormatTag> PixelTraits for Pixel<T, N, F> {
    type Element = T;
    const CHANNELS: usize = N;
    const FORMAT: PixelFormat = F::FORMAT;
}

impl<T: Sample, const N: usize, F: FormatTag> Default for Pixel<T, N, F> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Sample, const N: usize, F: FormatTag> From<[T; N]> for Pixel<T, N, F> {
    #[inline]
    fn from(channels: [T; N]) -> Self {
        Self::new(channels)
    }
}

impl<T: Sample, const N: usize, F: FormatTag> Deref for Pixel<T, N, F> {
    type Target = [T; N];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.channels
    }
}

impl<T: Sample, const N: usize, F: FormatTag> DerefMut for Pixel<T, N, F> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.channels
    }
}

impl<T: Sample, const N: usize, F: FormatTag> fmt::Debug for Pixel<T, N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pixel")
            .field(&F::FORMAT)
            .field(&self.channels)
            .finish()
    }
}

/// 8-bit grayscale.
pub type PixelY8 = Pixel<u8, 1, tag::Y>;
/// 16-bit grayscale.
pub type PixelY16 = Pixel<u16, 1, tag::Y>;
/// 32-bit float grayscale.
pub type PixelYF32 = Pixel<f32, 1, tag::Y>;
/// 8-bit grayscale with alpha.
pub type PixelYA8 = Pixel<u8, 2, tag::Ya>;
/// 8-bit RGB.
pub type PixelRgb8 = Pixel<u8, 3, tag::Rgb>;
/// 16-bit RGB.
pub type PixelRgb16 = Pixel<u16, 3, tag::Rgb>;
/// 32-bit float RGB.
pub type PixelRgbF32 = Pixel<f32, 3, tag::Rgb>;
/// 8-bit BGR.
pub type PixelBgr8 = Pixel<u8, 3, tag::Bgr>;
/// 8-bit RGBA.
pub type PixelRgba8 = Pixel<u8, 4, tag::Rgba>;
/// 16-bit RGBA.
pub type PixelRgba16 = Pixel<u16, 4, tag::Rgba>;
/// 32-bit float RGBA.
pub type PixelRgbaF32 = Pixel<f32, 4, tag::Rgba>;
/// 8-bit BGRA.
pub type PixelBgra8 = Pixel<u8, 4, tag::Bgra>;
/// 8-bit CMYK.
pub type PixelCmyk8 = Pixel<u8, 4, tag::Cmyk>;
