//! Pixel format and sample type descriptors.
//!
//! Two closed enumerations describing what the bytes of a pixel mean:
//!
//! - [`PixelFormat`] - channel semantics and ordering (grayscale, RGB, RGBA, CMYK, ...)
//! - [`SampleType`] - numeric kind of each channel value
//!
//! Both are pure metadata. Their [`Display`](std::fmt::Display) output is
//! meant for diagnostics and logging and carries no stability guarantee.
//!
//! # Usage
//!
//! ```rust
//! use pixview_core::format::{PixelFormat, SampleType};
//!
//! assert_eq!(PixelFormat::RGBA.to_string(), "PixelFormat::RGBA");
//! assert_eq!(PixelFormat::RGBA.nr_channels(), 4);
//! assert_eq!(SampleType::FloatingPoint.to_string(), "SampleType::FloatingPoint");
//! ```

use std::fmt;

/// Channel layout of a pixel.
///
/// The `X*` variants describe generic N-channel data without fixed semantics.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// Luminance (grayscale).
    Y,
    /// Generic single channel.
    X,
    /// Luminance with alpha.
    YA,
    /// Generic two channels.
    XX,
    /// Red, green, blue.
    RGB,
    /// Blue, green, red.
    BGR,
    /// Luma with blue- and red-difference chroma.
    YCbCr,
    /// CIE L*a*b*.
    CIELab,
    /// ICC L*a*b* encoding.
    ICCLab,
    /// Generic three channels.
    XXX,
    /// Red, green, blue, alpha.
    RGBA,
    /// Blue, green, red, alpha.
    BGRA,
    /// Alpha, red, green, blue.
    ARGB,
    /// Alpha, blue, green, red.
    ABGR,
    /// Cyan, magenta, yellow, key.
    CMYK,
    /// YCbCr with key.
    YCCK,
    /// Generic four channels.
    XXXX,
    /// Format not specified.
    #[default]
    Unknown,
}

impl PixelFormat {
    /// Every pixel format, in declaration order.
    pub const ALL: [PixelFormat; 18] = [
        Self::Y,
        Self::X,
        Self::YA,
        Self::XX,
        Self::RGB,
        Self::BGR,
        Self::YCbCr,
        Self::CIELab,
        Self::ICCLab,
        Self::XXX,
        Self::RGBA,
        Self::BGRA,
        Self::ARGB,
        Self::ABGR,
        Self::CMYK,
        Self::YCCK,
        Self::XXXX,
        Self::Unknown,
    ];

    /// Diagnostic name, e.g. `"PixelFormat::RGB"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Y => "PixelFormat::Y",
            Self::X => "PixelFormat::X",
            Self::YA => "PixelFormat::YA",
            Self::XX => "PixelFormat::XX",
            Self::RGB => "PixelFormat::RGB",
            Self::BGR => "PixelFormat::BGR",
            Self::YCbCr => "PixelFormat::YCbCr",
            Self::CIELab => "PixelFormat::CIELab",
            Self::ICCLab => "PixelFormat::ICCLab",
            Self::XXX => "PixelFormat::XXX",
            Self::RGBA => "PixelFormat::RGBA",
            Self::BGRA => "PixelFormat::BGRA",
            Self::ARGB => "PixelFormat::ARGB",
            Self::ABGR => "PixelFormat::ABGR",
            Self::CMYK => "PixelFormat::CMYK",
            Self::YCCK => "PixelFormat::YCCK",
            Self::XXXX => "PixelFormat::XXXX",
            Self::Unknown => "PixelFormat::Unknown",
        }
    }

    /// Number of channels implied by the format; 0 for [`Unknown`](Self::Unknown).
    #[inline]
    pub const fn nr_channels(&self) -> usize {
        get_nr_channels(*self)
    }

    /// Whether the format carries an alpha channel.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            Self::YA | Self::RGBA | Self::BGRA | Self::ARGB | Self::ABGR
        )
    }

    /// Whether this is the unspecified format.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Number of channels implied by `format`.
///
/// Usable in constant expressions, which is how [`equal`](fn@crate::equal) checks
/// pixel type compatibility at build time.
pub const fn get_nr_channels(format: PixelFormat) -> usize {
    match format {
        PixelFormat::Y | PixelFormat::X => 1,
        PixelFormat::YA | PixelFormat::XX => 2,
        PixelFormat::RGB
        | PixelFormat::BGR
        | PixelFormat::YCbCr
        | PixelFormat::CIELab
        | PixelFormat::ICCLab
        | PixelFormat::XXX => 3,
        PixelFormat::RGBA
        | PixelFormat::BGRA
        | PixelFormat::ARGB
        | PixelFormat::ABGR
        | PixelFormat::CMYK
        | PixelFormat::YCCK
        | PixelFormat::XXXX => 4,
        PixelFormat::Unknown => 0,
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric kind of a single channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleType {
    /// Unsigned integer samples (u8, u16, ...).
    UnsignedInteger,
    /// Signed integer samples (i8, i16, ...).
    SignedInteger,
    /// IEEE floating point samples (f16, f32, f64).
    FloatingPoint,
    /// Sample type not specified.
    #[default]
    Unknown,
}

impl SampleType {
    /// Every sample type, in declaration order.
    pub const ALL: [SampleType; 4] = [
        Self::UnsignedInteger,
        Self::SignedInteger,
        Self::FloatingPoint,
        Self::Unknown,
    ];

    /// Diagnostic name, e.g. `"SampleType::SignedInteger"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnsignedInteger => "SampleType::UnsignedInteger",
            Self::SignedInteger => "SampleType::SignedInteger",
            Self::FloatingPoint => "SampleType::FloatingPoint",
            Self::Unknown => "SampleType::Unknown",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pixel_format_names_distinct() {
        let names: HashSet<String> = PixelFormat::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names.len(), PixelFormat::ALL.len());
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_sample_type_names_distinct() {
        let names: HashSet<&str> = SampleType::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), SampleType::ALL.len());
    }

    #[test]
    fn test_rendering() {
        assert_eq!(PixelFormat::Y.to_string(), "PixelFormat::Y");
        assert_eq!(PixelFormat::YCbCr.to_string(), "PixelFormat::YCbCr");
        assert_eq!(PixelFormat::Unknown.to_string(), "PixelFormat::Unknown");
        assert_eq!(SampleType::UnsignedInteger.to_string(), "SampleType::UnsignedInteger");
        assert_eq!(SampleType::Unknown.to_string(), "SampleType::Unknown");
    }

    #[test]
    fn test_nr_channels() {
        assert_eq!(PixelFormat::X.nr_channels(), 1);
        assert_eq!(PixelFormat::YA.nr_channels(), 2);
        assert_eq!(PixelFormat::ICCLab.nr_channels(), 3);
        assert_eq!(PixelFormat::YCCK.nr_channels(), 4);
        assert_eq!(PixelFormat::Unknown.nr_channels(), 0);
        // every known format maps to 1..=4 channels
        for format in PixelFormat::ALL.iter().filter(|f| !f.is_unknown()) {
            assert!((1..=4).contains(&format.nr_channels()), "{format}");
        }
    }

    #[test]
    fn test_has_alpha() {
        assert!(PixelFormat::ARGB.has_alpha());
        assert!(PixelFormat::YA.has_alpha());
        assert!(!PixelFormat::CMYK.has_alpha());
        assert!(!PixelFormat::Unknown.has_alpha());
    }
}
