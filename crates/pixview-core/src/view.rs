//! Statically typed, non-owning image views.
//!
//! This module provides the view type every image algorithm reads and
//! writes through:
//! - [`TypedImageView`] - Borrowed, row-strided view with element type `P`
//! - [`ConstantImageView`] - Alias for a read-only view
//! - [`MutableImageView`] - Alias for a read-write view
//!
//! # Design Philosophy
//!
//! The view uses generics for compile-time guarantees:
//! - `P: PixelTraits` - Element type, fixing the element size used for all
//!   offset arithmetic
//! - `M: Modifiability` - [`Constant`] or [`Mutable`]; mutable accessors only
//!   exist on `Mutable` views
//!
//! ```compile_fail
//! use pixview_core::{ConstantImageView, TypedLayout};
//!
//! let bytes = [0u8; 4];
//! let view = ConstantImageView::<u8>::new(&bytes[..], TypedLayout::packed(2, 2)).unwrap();
//! *view.at_mut(0, 0) = 1; // no `at_mut` on a constant view
//! ```
//!
//! The view never owns its memory. It borrows a byte slice for `'a`, so the
//! buffer outliving the view is checked by the compiler instead of being a
//! caller promise.
//!
//! # Memory Layout
//!
//! Rows are stored top-to-bottom, `stride_bytes` apart. Only the first
//! `row_bytes()` bytes of each row are pixel data:
//!
//! ```text
//! byte offset of (x, y) = stride_bytes * y + size_of::<P>() * x
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixview_core::{MutableImageView, TypedLayout};
//!
//! // 4x3 grayscale with 2 padding bytes per row
//! let mut buffer = vec![0u8; 6 * 3];
//! let mut view = MutableImageView::<u8>::new(&mut buffer[..], TypedLayout::new(4, 3, 6)).unwrap();
//! assert_eq!(view.row_bytes(), 4);
//! assert_eq!(view.total_bytes(), 18);
//!
//! *view.at_mut(3, 2) = 200;
//! assert_eq!(*view.at(3, 2), 200);
//! assert_eq!(buffer[6 * 2 + 3], 200);
//! ```
//!
//! # Bounds Checking
//!
//! [`at`](TypedImageView::at) and [`row`](TypedImageView::row) go through
//! slice indexing and panic on indices outside the borrowed memory.
//! [`at_unchecked`](TypedImageView::at_unchecked) is the branch-free path
//! for callers that already iterate within `width() x height()`, and
//! [`try_at`](TypedImageView::try_at) reports coordinates outside the view
//! as [`Error::OutOfBounds`].

use crate::error::{Error, Result};
use crate::layout::TypedLayout;
use crate::pixel::PixelTraits;
use crate::row::{Rows, RowsMut};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use tracing::debug;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Constant {}
    impl Sealed for super::Mutable {}
}

/// Runtime counterpart of the [`Modifiability`] markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageModifiability {
    /// Contents may only be read.
    Constant,
    /// Contents may be read and written.
    Mutable,
}

/// Marker trait selecting whether a view may modify its pixels.
///
/// Sealed: [`Constant`] and [`Mutable`] are the only implementations.
pub trait Modifiability:
    sealed::Sealed + Copy + Clone + Default + fmt::Debug + Send + Sync + 'static
{
    /// How the view borrows its bytes.
    type Data<'a>: Deref<Target = [u8]>;

    /// Runtime value of this marker.
    const MODIFIABILITY: ImageModifiability;

    /// Whether views with this marker hand out mutable references.
    const IS_MODIFIABLE: bool = matches!(Self::MODIFIABILITY, ImageModifiability::Mutable);
}

/// Marker for views over read-only memory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constant;

impl Modifiability for Constant {
    type Data<'a> = &'a [u8];
    const MODIFIABILITY: ImageModifiability = ImageModifiability::Constant;
}

/// Marker for views over writable memory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mutable;

impl Modifiability for Mutable {
    type Data<'a> = &'a mut [u8];
    const MODIFIABILITY: ImageModifiability = ImageModifiability::Mutable;
}

/// Statically typed view onto borrowed image memory.
///
/// `TypedImageView<'a, P, M>` pairs a borrowed byte span with a
/// [`TypedLayout`]:
/// - `'a` - Lifetime of the borrowed memory
/// - `P` - Element type ([`u8`], [`PixelRgb8`](crate::PixelRgb8), ...)
/// - `M` - [`Constant`] (default) or [`Mutable`]
///
/// A view without memory is allowed and is always
/// [empty](Self::is_empty); it is what [`Default`] and
/// [`clear`](Self::clear) produce.
///
/// Constant views are `Copy`. Mutable views are not; a second handle to the
/// same memory is a reborrow through [`view`](Self::view) or a read-only
/// [`constant_view`](Self::constant_view).
///
/// The view is invariant in `'a`: a `ConstantImageView<'static, _>` does not
/// coerce to a shorter lifetime on its own. Use
/// [`shorten`](ConstantImageView::shorten) where a shorter-lived view is expected.
pub struct TypedImageView<'a, P: PixelTraits, M: Modifiability = Constant> {
    data: Option<M::Data<'a>>,
    layout: TypedLayout,
    _pixel: PhantomData<P>,
}

/// An image view pointing to constant data.
pub type ConstantImageView<'a, P> = TypedImageView<'a, P, Constant>;

/// An image view pointing to mutable data.
pub type MutableImageView<'a, P> = TypedImageView<'a, P, Mutable>;

impl<'a, P: PixelTraits, M: Modifiability> TypedImageView<'a, P, M> {
    /// Creates a view over `data` with the given layout.
    ///
    /// The stored stride is `max(layout.stride_bytes, width * size_of::<P>())`.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientData`] if `data` cannot hold every row
    /// - [`Error::Misaligned`] if `data` does not start at an address aligned for `P`
    /// - [`Error::InvalidStride`] if the stride is not a multiple of `P`'s alignment
    /// - [`Error::InvalidDimensions`] if the byte extent overflows `usize`
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixview_core::{ConstantImageView, TypedLayout};
    ///
    /// let pixels = [0u8; 12];
    /// // stride 1 understates the 4-byte rows and is raised
    /// let view = ConstantImageView::<u8>::new(&pixels[..], TypedLayout::new(4, 3, 1)).unwrap();
    /// assert_eq!(view.stride_bytes(), 4);
    /// ```
    pub fn new(data: M::Data<'a>, layout: TypedLayout) -> Result<Self> {
        Self::from_parts(Some(data), layout)
    }

    /// Creates a view from optional memory and a layout.
    ///
    /// `None` builds a view that carries geometry but no memory; it reports
    /// the layout's dimensions yet is [empty](Self::is_empty).
    pub fn from_parts(data: Option<M::Data<'a>>, layout: TypedLayout) -> Result<Self> {
        const {
            assert!(P::NR_BYTES > 0, "zero-sized pixel types cannot be viewed");
        }

        let layout = checked_layout::<P>(layout, data.as_deref()).inspect_err(|err| {
            debug!(
                %err,
                width = layout.width,
                height = layout.height,
                stride = layout.stride_bytes,
                "Rejected image view layout"
            );
        })?;

        Ok(Self {
            data,
            layout,
            _pixel: PhantomData,
        })
    }

    /// Returns the layout, with the stride already clamped.
    #[inline]
    pub fn layout(&self) -> &TypedLayout {
        &self.layout
    }

    /// Returns the view width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Returns the view height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.layout.dimensions()
    }

    /// Returns the row stride in bytes.
    ///
    /// Always `>= row_bytes()`; equal iff [`is_packed`](Self::is_packed).
    #[inline]
    pub fn stride_bytes(&self) -> usize {
        self.layout.stride_bytes
    }

    /// Returns the number of pixel data bytes per row: `width * size_of::<P>()`.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.layout.row_bytes::<P>()
    }

    /// Returns `stride_bytes() * height()`.
    #[inline]
    pub fn total_bytes(&self) -> usize {
        self.layout.total_bytes::<P>()
    }

    /// Returns `true` if rows carry no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.layout.is_packed::<P>()
    }

    /// Returns `true` if the view has no memory, zero width, or zero height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_none() || self.layout.has_zero_area()
    }

    /// Returns `!is_empty()`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    /// Returns whether this view may modify its pixels.
    #[inline]
    pub const fn modifiability(&self) -> ImageModifiability {
        M::MODIFIABILITY
    }

    /// Byte offset of the start of row `y`.
    #[inline]
    pub fn row_offset(&self, y: u32) -> usize {
        self.layout.stride_bytes * y as usize
    }

    /// Byte offset of the element at `(x, y)`.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        self.layout.stride_bytes * y as usize + P::NR_BYTES * x as usize
    }

    /// Returns all borrowed bytes, including padding. Empty if there is no memory.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }

    /// Returns the pixel data bytes of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the borrowed memory.
    #[inline]
    pub fn row_byte_slice(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.layout.height, "row out of bounds");
        match self.data.as_deref() {
            Some(_) if self.layout.width == 0 => &[],
            Some(bytes) => {
                let start = self.row_offset(y);
                &bytes[start..start + self.row_bytes()]
            }
            None => &[],
        }
    }

    /// Returns the elements of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the borrowed memory.
    #[inline]
    pub fn row(&self, y: u32) -> &[P] {
        let bytes = self.row_byte_slice(y);
        if bytes.is_empty() {
            return &[];
        }
        bytemuck::cast_slice(bytes)
    }

    /// Returns the element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` lies outside row `y`, or the row outside the borrowed memory.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> &P {
        debug_assert!(x < self.layout.width, "column out of bounds");
        &self.row(y)[x as usize]
    }

    /// Returns the element at `(x, y)` without any bounds check.
    ///
    /// # Safety
    ///
    /// The view must be valid and `x < width()`, `y < height()`.
    #[inline]
    pub unsafe fn at_unchecked(&self, x: u32, y: u32) -> &P {
        let offset = self.pixel_offset(x, y);
        // SAFETY: the caller keeps (x, y) inside the layout, which construction
        // checked against the borrowed span; the base pointer and stride are
        // aligned for `P`, so `offset` is too.
        unsafe { &*self.as_bytes().as_ptr().add(offset).cast::<P>() }
    }

    /// Returns the element at `(x, y)`, or [`Error::OutOfBounds`].
    #[inline]
    pub fn try_at(&self, x: u32, y: u32) -> Result<&P> {
        self.check_bounds(x, y)?;
        // SAFETY: bounds checked above.
        Ok(unsafe { self.at_unchecked(x, y) })
    }

    /// Returns the element at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        self.try_at(x, y).ok()
    }

    /// Iterates over the rows of the view, top to bottom.
    ///
    /// Each call starts again from row 0 and yields `height()` rows; a view
    /// of zero width yields that many rows of no elements. Views without
    /// memory yield no rows.
    pub fn rows(&self) -> Rows<'_, P> {
        if self.data.is_none() {
            return Rows::empty();
        }
        Rows::new(
            self.as_bytes(),
            self.layout.stride_bytes,
            self.row_bytes(),
            self.layout.height,
        )
    }

    /// Returns a read-only view of the same memory and layout.
    #[inline]
    pub fn constant_view(&self) -> ConstantImageView<'_, P> {
        TypedImageView {
            data: self.data.as_deref(),
            layout: self.layout,
            _pixel: PhantomData,
        }
    }

    /// Resets the view to the state after [`Default`]. The memory is not touched.
    pub fn clear(&mut self) {
        self.data = None;
        self.layout = TypedLayout::default();
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if self.is_empty() || x >= self.layout.width || y >= self.layout.height {
            return Err(Error::out_of_bounds(
                x,
                y,
                self.layout.width,
                self.layout.height,
            ));
        }
        Ok(())
    }
}

impl<'a, P: PixelTraits> TypedImageView<'a, P, Constant> {
    /// Creates a view over a typed slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixview_core::{ConstantImageView, PixelRgb8, TypedLayout};
    ///
    /// let pixels = vec![PixelRgb8::new([1, 2, 3]); 6];
    /// let view = ConstantImageView::from_pixels(&pixels, TypedLayout::packed(3, 2)).unwrap();
    /// assert_eq!(view.row_bytes(), 9);
    /// assert_eq!(view.at(2, 1).into_array(), [1, 2, 3]);
    /// ```
    pub fn from_pixels(pixels: &'a [P], layout: TypedLayout) -> Result<Self> {
        Self::new(bytemuck::cast_slice(pixels), layout)
    }

    /// Returns a copy of this view.
    #[inline]
    pub fn view(&self) -> ConstantImageView<'a, P> {
        *self
    }

    /// Returns this view with its borrow narrowed to `'b`.
    #[inline]
    pub fn shorten<'b>(self) -> ConstantImageView<'b, P>
    where
        'a: 'b,
    {
        TypedImageView {
            data: self.data,
            layout: self.layout,
            _pixel: PhantomData,
        }
    }
}

impl<'a, P: PixelTraits> TypedImageView<'a, P, Mutable> {
    /// Creates a mutable view over a typed slice.
    pub fn from_pixels_mut(pixels: &'a mut [P], layout: TypedLayout) -> Result<Self> {
        Self::new(bytemuck::cast_slice_mut(pixels), layout)
    }

    /// Returns a mutable view reborrowing the same memory.
    #[inline]
    pub fn view(&mut self) -> MutableImageView<'_, P> {
        TypedImageView {
            data: self.data.as_deref_mut(),
            layout: self.layout,
            _pixel: PhantomData,
        }
    }

    /// Converts into a read-only view with the same lifetime.
    #[inline]
    pub fn into_constant(self) -> ConstantImageView<'a, P> {
        TypedImageView {
            data: self.data.map(|bytes| &*bytes),
            layout: self.layout,
            _pixel: PhantomData,
        }
    }

    /// Returns all borrowed bytes mutably, including padding.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data.as_deref_mut().unwrap_or_default()
    }

    /// Returns the pixel data bytes of row `y` mutably, without padding.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the borrowed memory.
    #[inline]
    pub fn row_byte_slice_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.layout.height, "row out of bounds");
        let start = self.row_offset(y);
        let end = start + self.row_bytes();
        match self.data.as_deref_mut() {
            Some(bytes) if end > start => &mut bytes[start..end],
            _ => Default::default(),
        }
    }

    /// Returns the elements of row `y` mutably.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let bytes = self.row_byte_slice_mut(y);
        if bytes.is_empty() {
            return Default::default();
        }
        bytemuck::cast_slice_mut(bytes)
    }

    /// Returns a mutable reference to the element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` lies outside row `y`, or the row outside the borrowed memory.
    #[inline]
    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut P {
        debug_assert!(x < self.layout.width, "column out of bounds");
        &mut self.row_mut(y)[x as usize]
    }

    /// Returns a mutable reference to the element at `(x, y)` without any bounds check.
    ///
    /// # Safety
    ///
    /// The view must be valid and `x < width()`, `y < height()`.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, x: u32, y: u32) -> &mut P {
        let offset = self.pixel_offset(x, y);
        // SAFETY: see `at_unchecked`; `&mut self` makes the reference unique.
        unsafe { &mut *self.as_bytes_mut().as_mut_ptr().add(offset).cast::<P>() }
    }

    /// Returns a mutable reference to the element at `(x, y)`, or [`Error::OutOfBounds`].
    #[inline]
    pub fn try_at_mut(&mut self, x: u32, y: u32) -> Result<&mut P> {
        self.check_bounds(x, y)?;
        // SAFETY: bounds checked above.
        Ok(unsafe { self.at_unchecked_mut(x, y) })
    }

    /// Returns a mutable reference to the element at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut P> {
        self.try_at_mut(x, y).ok()
    }

    /// Iterates mutably over the rows of the view, top to bottom.
    pub fn rows_mut(&mut self) -> RowsMut<'_, P> {
        if self.data.is_none() {
            return RowsMut::empty();
        }
        let (stride, row_bytes, height) =
            (self.layout.stride_bytes, self.row_bytes(), self.layout.height);
        RowsMut::new(self.as_bytes_mut(), stride, row_bytes, height)
    }

    /// Sets every element to `value`. Row padding is left untouched.
    pub fn fill(&mut self, value: P) {
        for mut row in self.rows_mut() {
            row.fill(value);
        }
    }
}

impl<P: PixelTraits, M: Modifiability> Default for TypedImageView<'_, P, M> {
    fn default() -> Self {
        Self {
            data: None,
            layout: TypedLayout::default(),
            _pixel: PhantomData,
        }
    }
}

impl<P: PixelTraits> Clone for TypedImageView<'_, P, Constant> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PixelTraits> Copy for TypedImageView<'_, P, Constant> {}

impl<'a, P: PixelTraits> From<MutableImageView<'a, P>> for ConstantImageView<'a, P> {
    fn from(view: MutableImageView<'a, P>) -> Self {
        view.into_constant()
    }
}

impl<P: PixelTraits, M: Modifiability> fmt::Debug for TypedImageView<'_, P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedImageView")
            .field("width", &self.layout.width)
            .field("height", &self.layout.height)
            .field("stride_bytes", &self.layout.stride_bytes)
            .field("format", &P::FORMAT)
            .field("modifiability", &M::MODIFIABILITY)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}

impl<'v, P: PixelTraits, M: Modifiability> IntoIterator for &'v TypedImageView<'_, P, M> {
    type Item = crate::row::ImageRow<'v, P>;
    type IntoIter = Rows<'v, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

/// Clamps the stride and checks `layout` against the borrowed span, if any.
fn checked_layout<P: PixelTraits>(layout: TypedLayout, data: Option<&[u8]>) -> Result<TypedLayout> {
    let (width, height) = layout.dimensions();
    let row_bytes = (width as usize)
        .checked_mul(P::NR_BYTES)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "row size overflows usize"))?;
    let layout = TypedLayout::new(width, height, layout.stride_bytes.max(row_bytes));
    let stride = layout.stride_bytes;
    if stride.checked_mul(height as usize).is_none() {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "byte extent overflows usize",
        ));
    }

    let Some(bytes) = data else {
        return Ok(layout);
    };
    if layout.has_zero_area() {
        return Ok(layout);
    }

    let align = std::mem::align_of::<P>();
    if stride % align != 0 {
        return Err(Error::InvalidStride { stride, align });
    }
    // Padding after the last row need not be borrowed.
    let required = stride * (height as usize - 1) + row_bytes;
    if bytes.len() < required {
        return Err(Error::insufficient_data(required, bytes.len()));
    }
    if (bytes.as_ptr() as usize) % align != 0 {
        return Err(Error::Misaligned { align });
    }
    Ok(layout)
}
