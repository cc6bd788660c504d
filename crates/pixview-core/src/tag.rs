//! Compile-time pixel format tags.
//!
//! A [`PixelFormat`] is a runtime value; generic code that wants the format
//! baked into a type needs a type instead. Each tag here is a zero-sized
//! marker naming exactly one [`PixelFormat`], used as the third parameter of
//! [`Pixel`](crate::pixel::Pixel):
//!
//! ```
//! use pixview_core::{tag, Pixel, PixelFormat, PixelTraits};
//!
//! type Bgr8 = Pixel<u8, 3, tag::Bgr>;
//! assert_eq!(<Bgr8 as PixelTraits>::FORMAT, PixelFormat::BGR);
//! ```
//!
//! Tags carry no data and exist only to drive the compatibility checks of
//! [`equal`](fn@crate::equal).

use crate::format::PixelFormat;
use std::fmt;

/// Trait for pixel format marker types.
pub trait FormatTag: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// The runtime format this tag stands for.
    const FORMAT: PixelFormat;

    /// Channel count implied by [`FORMAT`](Self::FORMAT).
    const NR_CHANNELS: usize = Self::FORMAT.nr_channels();
}

macro_rules! format_tags {
    ($($(#[$doc:meta])* $tag:ident => $format:ident;)*) => {$(
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $tag;

        impl FormatTag for $tag {
            const FORMAT: PixelFormat = PixelFormat::$format;
        }
    )*};
}

format_tags! {
    /// Luminance.
    Y => Y;
    /// Generic single channel.
    X => X;
    /// Luminance with alpha.
    Ya => YA;
    /// Generic two channels.
    Xx => XX;
    /// Red, green, blue.
    Rgb => RGB;
    /// Blue, green, red.
    Bgr => BGR;
    /// YCbCr.
    YCbCr => YCbCr;
    /// CIE L*a*b*.
    CieLab => CIELab;
    /// ICC L*a*b*.
    IccLab => ICCLab;
    /// Generic three channels.
    Xxx => XXX;
    /// Red, green, blue, alpha.
    Rgba => RGBA;
    /// Blue, green, red, alpha.
    Bgra => BGRA;
    /// Alpha, red, green, blue.
    Argb => ARGB;
    /// Alpha, blue, green, red.
    Abgr => ABGR;
    /// Cyan, magenta, yellow, key.
    Cmyk => CMYK;
    /// YCbCr with key.
    Ycck => YCCK;
    /// Generic four channels.
    Xxxx => XXXX;
    /// No format specified. Compatible with any channel layout in [`equal`](fn@crate::equal).
    Unknown => Unknown;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_formats() {
        assert_eq!(Rgb::FORMAT, PixelFormat::RGB);
        assert_eq!(CieLab::FORMAT, PixelFormat::CIELab);
        assert_eq!(Unknown::FORMAT, PixelFormat::Unknown);
    }

    #[test]
    fn test_tag_channels() {
        assert_eq!(Y::NR_CHANNELS, 1);
        assert_eq!(Ya::NR_CHANNELS, 2);
        assert_eq!(Bgr::NR_CHANNELS, 3);
        assert_eq!(Cmyk::NR_CHANNELS, 4);
        assert_eq!(Unknown::NR_CHANNELS, 0);
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Rgba>(), 0);
        assert_eq!(std::mem::size_of::<Unknown>(), 0);
    }
}
