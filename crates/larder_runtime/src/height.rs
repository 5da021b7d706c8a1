//! Sources of the height stamped on each submitted call.

use larder_foundation::Height;

/// Supplies the height for the next call in the stream.
///
/// Called once per submitted operation, under the registry lock.
pub trait HeightSource: Send {
    /// Returns the height for the call about to be applied.
    fn next_height(&mut self) -> Height;
}

/// Every call happens at the same height.
///
/// Matches an environment where many calls share one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedHeight(pub Height);

impl HeightSource for FixedHeight {
    fn next_height(&mut self) -> Height {
        self.0
    }
}

/// Each call happens one height after the previous call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickingHeight {
    next: Height,
}

impl TickingHeight {
    /// Starts at `first`.
    #[must_use]
    pub const fn starting_at(first: Height) -> Self {
        Self { next: first }
    }

    /// Returns the height the next call will receive.
    #[must_use]
    pub const fn peek(&self) -> Height {
        self.next
    }
}

impl HeightSource for TickingHeight {
    fn next_height(&mut self) -> Height {
        let current = self.next;
        self.next = current.next();
        current
    }
}
