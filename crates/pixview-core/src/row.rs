//! Row iteration over image views.
//!
//! [`TypedImageView::rows`](crate::TypedImageView::rows) and
//! [`TypedImageView::rows_mut`](crate::TypedImageView::rows_mut) walk the image
//! top to bottom, yielding one [`ImageRow`] / [`ImageRowMut`] per row. Each
//! row exposes exactly `width()` elements; padding bytes between rows are
//! never part of a row.
//!
//! ```rust
//! use pixview_core::{ConstantImageView, TypedLayout};
//!
//! // 3x2 image, 4-byte stride: the fourth byte of each row is padding
//! let bytes = [1u8, 2, 3, 0xFF, 4, 5, 6, 0xFF];
//! let view = ConstantImageView::<u8>::new(&bytes[..], TypedLayout::new(3, 2, 4)).unwrap();
//!
//! let sums: Vec<u32> = view.rows().map(|row| row.iter().map(|&v| v as u32).sum()).collect();
//! assert_eq!(sums, [6, 15]);
//! ```
//!
//! With the `parallel` feature, `par_rows` and `par_rows_mut` hand rows to
//! rayon's thread pool.

use crate::pixel::PixelTraits;
#[cfg(feature = "parallel")]
use crate::view::{Modifiability, Mutable, TypedImageView};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// One row of a view.
#[derive(Debug, Clone, Copy)]
pub struct ImageRow<'a, P> {
    index: u32,
    pixels: &'a [P],
}

impl<'a, P: PixelTraits> ImageRow<'a, P> {
    pub(crate) fn new(index: u32, pixels: &'a [P]) -> Self {
        Self { index, pixels }
    }

    /// Row number, counted from the top.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The row's elements.
    #[inline]
    pub fn pixels(&self) -> &'a [P] {
        self.pixels
    }

    /// The row's elements as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.pixels)
    }
}

impl<P> Deref for ImageRow<'_, P> {
    type Target = [P];

    #[inline]
    fn deref(&self) -> &[P] {
        self.pixels
    }
}

impl<'a, P> IntoIterator for ImageRow<'a, P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// One row of a mutable view.
#[derive(Debug)]
pub struct ImageRowMut<'a, P> {
    index: u32,
    pixels: &'a mut [P],
}

impl<'a, P: PixelTraits> ImageRowMut<'a, P> {
    pub(crate) fn new(index: u32, pixels: &'a mut [P]) -> Self {
        Self { index, pixels }
    }

    /// Row number, counted from the top.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The row's elements.
    #[inline]
    pub fn pixels(&self) -> &[P] {
        self.pixels
    }

    /// The row's elements, mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [P] {
        self.pixels
    }

    /// Consumes the row, keeping the borrow of the view's memory.
    #[inline]
    pub fn into_pixels(self) -> &'a mut [P] {
        self.pixels
    }

    /// The row's elements as raw bytes, mutably.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(self.pixels)
    }
}

impl<P> Deref for ImageRowMut<'_, P> {
    type Target = [P];

    #[inline]
    fn deref(&self) -> &[P] {
        self.pixels
    }
}

impl<P> DerefMut for ImageRowMut<'_, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [P] {
        self.pixels
    }
}

/// Iterator over the rows of a view.
///
/// Created by [`TypedImageView::rows`](crate::TypedImageView::rows).
#[derive(Clone)]
pub struct Rows<'a, P> {
    bytes: &'a [u8],
    stride: usize,
    row_bytes: usize,
    front: u32,
    back: u32,
    _pixel: PhantomData<&'a [P]>,
}

impl<'a, P: PixelTraits> Rows<'a, P> {
    pub(crate) fn new(bytes: &'a [u8], stride: usize, row_bytes: usize, height: u32) -> Self {
        Self {
            bytes,
            stride,
            row_bytes,
            front: 0,
            back: height,
            _pixel: PhantomData,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(&[], 0, 0, 0)
    }

    fn row(&self, y: u32) -> ImageRow<'a, P> {
        ImageRow::new(y, row_pixels(self.bytes, self.stride, self.row_bytes, y))
    }
}

impl<'a, P: PixelTraits> Iterator for Rows<'a, P> {
    type Item = ImageRow<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let row = self.row(self.front);
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl<P: PixelTraits> DoubleEndedIterator for Rows<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.row(self.back))
    }
}

impl<P: PixelTraits> ExactSizeIterator for Rows<'_, P> {}

impl<P: PixelTraits> FusedIterator for Rows<'_, P> {}

/// Iterator over the rows of a mutable view.
///
/// Created by [`TypedImageView::rows_mut`](crate::TypedImageView::rows_mut).
/// Rows are split off the borrowed memory, so every yielded row may be held
/// at the same time.
pub struct RowsMut<'a, P> {
    // Bytes from the start of row `front` on.
    rest: &'a mut [u8],
    stride: usize,
    row_bytes: usize,
    front: u32,
    back: u32,
    _pixel: PhantomData<&'a mut [P]>,
}

impl<'a, P: PixelTraits> RowsMut<'a, P> {
    pub(crate) fn new(bytes: &'a mut [u8], stride: usize, row_bytes: usize, height: u32) -> Self {
        Self {
            rest: bytes,
            stride,
            row_bytes,
            front: 0,
            back: height,
            _pixel: PhantomData,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Default::default(), 0, 0, 0)
    }
}

impl<'a, P: PixelTraits> Iterator for RowsMut<'a, P> {
    type Item = ImageRowMut<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        if self.row_bytes == 0 {
            self.front += 1;
            return Some(ImageRowMut::new(self.front - 1, Default::default()));
        }
        let rest = std::mem::take(&mut self.rest);
        // the last row may end without padding
        let mid = self.stride.min(rest.len());
        let (head, tail) = rest.split_at_mut(mid);
        self.rest = tail;

        let row = ImageRowMut::new(
            self.front,
            bytemuck::cast_slice_mut(&mut head[..self.row_bytes]),
        );
        self.front += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl<P: PixelTraits> DoubleEndedIterator for RowsMut<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        if self.row_bytes == 0 {
            return Some(ImageRowMut::new(self.back, Default::default()));
        }
        let rest = std::mem::take(&mut self.rest);
        let start = self.stride * (self.back - self.front) as usize;
        let (head, tail) = rest.split_at_mut(start);
        self.rest = head;

        Some(ImageRowMut::new(
            self.back,
            bytemuck::cast_slice_mut(&mut tail[..self.row_bytes]),
        ))
    }
}

impl<P: PixelTraits> ExactSizeIterator for RowsMut<'_, P> {}

impl<P: PixelTraits> FusedIterator for RowsMut<'_, P> {}

/// Elements of row `y`. Zero-width rows never touch `bytes`: the layout
/// checks are skipped for them, so the stride may point past the span.
fn row_pixels<P: PixelTraits>(bytes: &[u8], stride: usize, row_bytes: usize, y: u32) -> &[P] {
    if row_bytes == 0 {
        return &[];
    }
    let start = stride * y as usize;
    bytemuck::cast_slice(&bytes[start..start + row_bytes])
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use rayon::iter::Either;
    use rayon::prelude::*;

    impl<P: PixelTraits + Sync, M: Modifiability> TypedImageView<'_, P, M> {
        /// Parallel iterator over the rows of the view.
        ///
        /// Rows arrive in no particular order; use [`ImageRow::index`] to place them.
        pub fn par_rows(&self) -> impl IndexedParallelIterator<Item = ImageRow<'_, P>> {
            let bytes = self.as_bytes();
            let (stride, row_bytes) = (self.stride_bytes(), self.row_bytes());
            let height = self.rows().len() as u32;

            (0..height)
                .into_par_iter()
                .map(move |y| ImageRow::new(y, row_pixels(bytes, stride, row_bytes, y)))
        }
    }

    impl<P: PixelTraits + Send> TypedImageView<'_, P, Mutable> {
        /// Parallel iterator over the rows of the view, mutably.
        pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = ImageRowMut<'_, P>> {
            let height = self.rows().len();
            let (stride, row_bytes) = (self.stride_bytes(), self.row_bytes());

            if row_bytes == 0 {
                return Either::Left(
                    (0..height as u32)
                        .into_par_iter()
                        .map(|y| ImageRowMut::new(y, Default::default())),
                );
            }
            Either::Right(
                self.as_bytes_mut()
                    .par_chunks_mut(stride)
                    .take(height)
                    .enumerate()
                    .map(move |(y, chunk)| {
                        ImageRowMut::new(y as u32, bytemuck::cast_slice_mut(&mut chunk[..row_bytes]))
                    }),
            )
        }
    }
}
