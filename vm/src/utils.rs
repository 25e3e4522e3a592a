use crate::{types::relocatable::Relocatable, Felt252};
use num_traits::ToPrimitive;

use crate::vm::errors::hint_errors::HintError;

#[macro_export]
macro_rules! relocatable {
    ($val1 : expr, $val2 : expr) => {
        Relocatable {
            segment_index: $val1,
            offset: $val2,
        }
    };
}

/// Converts a felt holding a length or position into a `u64`.
pub fn felt_to_u64(felt: &Felt252) -> Result<u64, HintError> {
    felt.to_u64()
        .ok_or_else(|| HintError::BigintToU64Fail(Box::new(*felt)))
}

/// Returns the offset of `end` relative to the start of its segment, checking it belongs to the
/// same segment as `start`.
pub fn offset_within_segment(start: Relocatable, end: Relocatable) -> Result<usize, HintError> {
    if start.segment_index != end.segment_index || end.offset < start.offset {
        return Err(HintError::SquashedDictOutOfSegment(Box::new((start, end))));
    }
    Ok(end.offset)
}
