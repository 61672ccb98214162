// A collection of internal helper types
// like arrays that can only be indexed by the right position structs

use crate::board::{Cell, Digit};
use crate::consts::{N_CELLS, N_DIGITS};
use std::ops::{Deref, DerefMut, Index, IndexMut};

macro_rules! get {
    ($array:expr, $idx:expr) => {{
        #[cfg(feature = "unchecked_indexing")]
        let item = unsafe { $array.get_unchecked($idx) };
        #[cfg(not(feature = "unchecked_indexing"))]
        let item = &$array[$idx];
        item
    }};
}

macro_rules! get_mut {
    ($array:expr, $idx:expr) => {{
        #[cfg(feature = "unchecked_indexing")]
        let item = unsafe { $array.get_unchecked_mut($idx) };
        #[cfg(not(feature = "unchecked_indexing"))]
        let item = &mut $array[$idx];
        item
    }};
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Container with one slot for each cell.
pub(crate) struct CellArray<T>(pub [T; N_CELLS]);

impl<T> Deref for CellArray<T> {
    type Target = [T; N_CELLS];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for CellArray<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// the position types can only be constructed in range,
// so the index is valid whenever `unchecked_indexing` is active
impl<T> Index<Cell> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: Cell) -> &Self::Output {
        get!(self.0, idx.as_index())
    }
}

impl<T> IndexMut<Cell> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Cell) -> &mut Self::Output {
        get_mut!(self.0, idx.as_index())
    }
}

///////////////////////////////
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Container with one slot for each digit.
pub(crate) struct DigitArray<T>(pub [T; N_DIGITS]);

impl<T> Index<Digit> for DigitArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: Digit) -> &Self::Output {
        get!(self.0, idx.as_index())
    }
}

impl<T> IndexMut<Digit> for DigitArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Digit) -> &mut Self::Output {
        get_mut!(self.0, idx.as_index())
    }
}
