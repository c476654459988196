//! Interfaces for access to the previous block of a block candidate.

use chrono::{DateTime, Utc};

use crate::block;

/// The chain state a new block is built on, as seen by consensus rules that
/// depend on the previous block.
///
/// Implementations must return values that refer to the same block, and must
/// not change while a block candidate is being built or verified.
pub trait ChainTip {
    /// Returns the height of the tip block.
    fn height(&self) -> block::Height;

    /// Returns the median time past of the tip block: the median block time of
    /// the tip and the ten blocks before it.
    fn median_time_past(&self) -> DateTime<Utc>;

    /// Returns the height of the block candidate that extends this tip, or
    /// `None` if the tip is already at [`block::Height::MAX`].
    fn next_block_height(&self) -> Option<block::Height> {
        self.height().next()
    }
}

/// A plain [`ChainTip`] value, as captured from the block index while it is locked.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChainTipInfo {
    /// The height of the tip block.
    pub height: block::Height,

    /// The median time past of the tip block.
    pub median_time_past: DateTime<Utc>,
}

impl ChainTipInfo {
    /// Creates a new [`ChainTipInfo`].
    pub fn new(height: block::Height, median_time_past: DateTime<Utc>) -> Self {
        Self {
            height,
            median_time_past,
        }
    }
}

impl ChainTip for ChainTipInfo {
    fn height(&self) -> block::Height {
        self.height
    }

    fn median_time_past(&self) -> DateTime<Utc> {
        self.median_time_past
    }
}
