use std::{
    fmt::{self, Display},
    ops::{Add, Sub},
};

use crate::{relocatable, types::errors::math_errors::MathError, Felt252};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

#[derive(
    Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Copy, Debug, Default, Serialize, Deserialize,
)]
pub struct Relocatable {
    pub segment_index: isize,
    pub offset: usize,
}

#[derive(Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Debug, Serialize, Deserialize)]
pub enum MaybeRelocatable {
    RelocatableValue(Relocatable),
    Int(Felt252),
}

impl From<(isize, usize)> for Relocatable {
    fn from(index_offset: (isize, usize)) -> Self {
        Relocatable {
            segment_index: index_offset.0,
            offset: index_offset.1,
        }
    }
}

impl From<(isize, usize)> for MaybeRelocatable {
    fn from(index_offset: (isize, usize)) -> Self {
        MaybeRelocatable::RelocatableValue(Relocatable::from(index_offset))
    }
}

impl From<usize> for MaybeRelocatable {
    fn from(num: usize) -> Self {
        MaybeRelocatable::Int(Felt252::from(num))
    }
}

impl From<u64> for MaybeRelocatable {
    fn from(num: u64) -> Self {
        MaybeRelocatable::Int(Felt252::from(num))
    }
}

impl From<Felt252> for MaybeRelocatable {
    fn from(num: Felt252) -> Self {
        MaybeRelocatable::Int(num)
    }
}

impl From<&Felt252> for MaybeRelocatable {
    fn from(val: &Felt252) -> Self {
        MaybeRelocatable::Int(*val)
    }
}

impl From<Relocatable> for MaybeRelocatable {
    fn from(rel: Relocatable) -> Self {
        MaybeRelocatable::RelocatableValue(rel)
    }
}

impl From<&Relocatable> for MaybeRelocatable {
    fn from(rel: &Relocatable) -> Self {
        MaybeRelocatable::RelocatableValue(*rel)
    }
}

impl From<&MaybeRelocatable> for MaybeRelocatable {
    fn from(other: &MaybeRelocatable) -> Self {
        other.clone()
    }
}

impl Display for MaybeRelocatable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MaybeRelocatable::RelocatableValue(rel) => rel.fmt(f),
            MaybeRelocatable::Int(num) => write!(f, "{num}"),
        }
    }
}

impl Display for Relocatable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.segment_index, self.offset)
    }
}

impl Add<usize> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn add(self, other: usize) -> Result<Self, MathError> {
        self.offset
            .checked_add(other)
            .map(|x| Relocatable::from((self.segment_index, x)))
            .ok_or_else(|| MathError::RelocatableAddUsizeOffsetExceeded(Box::new((self, other))))
    }
}

impl Add<i32> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn add(self, other: i32) -> Result<Self, MathError> {
        if other >= 0 {
            self + other as usize
        } else {
            self - other.unsigned_abs() as usize
        }
    }
}

impl Add<&Felt252> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn add(self, other: &Felt252) -> Result<Relocatable, MathError> {
        let new_offset = (Felt252::from(self.offset) + *other)
            .to_usize()
            .ok_or_else(|| {
                MathError::RelocatableAddFelt252OffsetExceeded(Box::new((self, *other)))
            })?;
        Ok((self.segment_index, new_offset).into())
    }
}

impl Sub<usize> for Relocatable {
    type Output = Result<Relocatable, MathError>;
    fn sub(self, other: usize) -> Result<Self, MathError> {
        if self.offset < other {
            return Err(MathError::RelocatableSubUsizeNegOffset(Box::new((
                self, other,
            ))));
        }
        let new_offset = self.offset - other;
        Ok(relocatable!(self.segment_index, new_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn add_relocatable_felt(offset in 0..(u32::MAX as usize), delta in any::<u32>()) {
            let felt = Felt252::from(delta);
            let rel = Relocatable::from((0, offset));
            prop_assert_eq!(
                (rel + &felt).ok(),
                Some(Relocatable::from((0, offset + delta as usize)))
            );
        }
    }

    #[test]
    fn add_usize_to_relocatable() {
        let addr = Relocatable::from((7, 65));
        assert_eq!(addr + 2, Ok(Relocatable::from((7, 67))));
    }

    #[test]
    fn add_usize_offset_exceeded() {
        let addr = Relocatable::from((0, usize::MAX));
        assert_matches!(
            addr + 1,
            Err(MathError::RelocatableAddUsizeOffsetExceeded(bx)) if *bx == (addr, 1)
        );
    }

    #[test]
    fn relocatable_add_i32() {
        let reloc = relocatable!(1, 5);
        assert_eq!(reloc + 3_i32, Ok(relocatable!(1, 8)));
        assert_eq!(reloc + (-3_i32), Ok(relocatable!(1, 2)));
    }

    #[test]
    fn relocatable_add_i32_with_overflow() {
        let reloc = relocatable!(1, 1);
        assert_eq!(
            reloc + (-3_i32),
            Err(MathError::RelocatableSubUsizeNegOffset(Box::new((
                relocatable!(1, 1),
                3
            ))))
        );
    }

    #[test]
    fn relocatable_add_felt_out_of_range() {
        let reloc = relocatable!(1, 1);
        let minus_one = Felt252::ZERO - Felt252::ONE;
        assert_matches!(
            reloc + &minus_one,
            Err(MathError::RelocatableAddFelt252OffsetExceeded(_))
        );
    }

    #[test]
    fn relocatable_display() {
        assert_eq!(
            format!("{}", Relocatable::from((1, 0))),
            String::from("1:0")
        );
    }

    #[test]
    fn maybe_relocatable_display() {
        assert_eq!(
            format!("{}", MaybeRelocatable::from((1, 0))),
            String::from("1:0")
        );
        assert_eq!(
            format!("{}", MaybeRelocatable::from(Felt252::from(6))),
            String::from("6")
        );
    }
}
