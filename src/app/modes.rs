//! Search state machine types.
//!
//! # State Machine
//!
//! ```text
//!            text entered (non-empty)
//!   Idle ──────────────────────────────► Loading ──ok──► Ready
//!    ▲                                     ▲  │            │
//!    │ text cleared (from any state)       │  └─err──► Failed
//!    └─────────────────────────────────────┴── new text ───┘
//! ```
//!
//! There is no terminal state: the screen cycles with user input for as long
//! as the plugin is loaded.

use crate::fetch::RequestToken;

/// Lookup status of the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Query is empty and no results are shown.
    Idle,

    /// A lookup is in flight.
    ///
    /// `token` is the only request whose completion will be applied.
    Loading {
        token: RequestToken,
    },

    /// The last lookup succeeded.
    Ready {
        /// Total matches reported by the catalog (may exceed the page shown).
        total: usize,
    },

    /// The last lookup failed. Not sticky: the next keystroke leaves it.
    Failed {
        /// Inline message shown under the search bar.
        message: String,
    },
}

impl SearchStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Token of the in-flight request, if any.
    #[must_use]
    pub const fn pending_token(&self) -> Option<RequestToken> {
        match self {
            Self::Loading { token } => Some(*token),
            _ => None,
        }
    }
}

/// Whether the option list is expanded below the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Open,
    Closed,
}

impl Dropdown {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}
