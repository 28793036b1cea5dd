//! Generation counter used to discard superseded renders.

use serde::Serialize;

/// Identifies one scheduled render request.
///
/// Tokens are issued in strictly increasing order by [`RenderRequests`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RenderToken(u64);

impl RenderToken {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Issues render tokens and remembers the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequests {
    latest: u64,
}

impl RenderRequests {
    /// Creates a counter that has not issued any token yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issues a token newer than every token issued before it.
    pub const fn issue(&mut self) -> RenderToken {
        self.latest = self.latest.saturating_add(1);
        RenderToken(self.latest)
    }

    /// Returns true when `token` is the most recently issued one.
    #[must_use]
    pub const fn is_current(&self, token: RenderToken) -> bool {
        token.0 == self.latest
    }

    /// Returns the latest issued token, if any.
    #[must_use]
    pub const fn latest(&self) -> Option<RenderToken> {
        if self.latest == 0 {
            None
        } else {
            Some(RenderToken(self.latest))
        }
    }
}
