//! A fixed-size bitboard packed into one unsigned integer.
//!
//! The computer opponent keeps its set of undiscovered fields in a
//! [`CellSet`], a 10x10 board stored in a `u128`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Set of on-board coordinates.
pub type CellSet = BitBoard<u128, { BOARD_SIZE as usize }>;

/// An N×N grid of bits stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Option<T> {
        if row >= N || col >= N {
            return None;
        }
        Some(T::one() << (row * N + col))
    }

    /// Board with no bits set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Board with every bit set.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Bit at (row, col); out-of-range positions read as unset.
    pub fn get(&self, row: usize, col: usize) -> bool {
        Self::bit(row, col).is_some_and(|b| !(self.bits & b).is_zero())
    }

    /// Sets the bit at (row, col). Returns `false` when out of range.
    pub fn set(&mut self, row: usize, col: usize) -> bool {
        match Self::bit(row, col) {
            Some(b) => {
                self.bits = self.bits | b;
                true
            }
            None => false,
        }
    }

    /// Clears the bit at (row, col), returning whether it was set.
    pub fn unset(&mut self, row: usize, col: usize) -> bool {
        match Self::bit(row, col) {
            Some(b) if !(self.bits & b).is_zero() => {
                self.bits = self.bits & !b;
                true
            }
            _ => false,
        }
    }

    /// Positions of the set bits in row-major order.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::BOARD_BITS)
            .filter(move |&idx| !((self.bits >> idx) & T::one()).is_zero())
            .map(|idx| (idx / N, idx % N))
    }
}

impl CellSet {
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.to_index().is_ok_and(|(r, c)| self.get(r, c))
    }

    /// Adds `coord`; off-board coordinates are ignored.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        coord.to_index().is_ok_and(|(r, c)| self.set(r, c))
    }

    /// Removes `coord`, returning whether it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        coord.to_index().is_ok_and(|(r, c)| self.unset(r, c))
    }

    /// Members in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter_set_bits()
            .filter_map(|(r, c)| Coordinate::from_index(r, c).ok())
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                write!(f, "{} ", if self.get(r, c) { '■' } else { '□' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
