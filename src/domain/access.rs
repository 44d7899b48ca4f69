// SPDX-License-Identifier: MPL-2.0
//! Gallery write-access states.

/// Result of negotiating write access to the gallery.
///
/// `Limited` exists for platforms that can grant access to a subset of the
/// library; for the purpose of adding a new asset it is as good as a full
/// grant. Platforms without a limited concept report only `Granted`,
/// `Denied`, or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// Full write access is granted.
    Granted,
    /// Partial library access; still sufficient to add new assets.
    Limited,
    /// The user or platform refused access.
    Denied,
    /// The platform reported an unrecognized or undetermined status,
    /// including a dismissed prompt.
    Unknown,
}

impl AccessState {
    /// Whether this state allows an export to proceed.
    #[must_use]
    pub fn is_sufficient(self) -> bool {
        matches!(self, AccessState::Granted | AccessState::Limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_and_limited_are_sufficient() {
        assert!(AccessState::Granted.is_sufficient());
        assert!(AccessState::Limited.is_sufficient());
    }

    #[test]
    fn denied_and_unknown_are_not() {
        assert!(!AccessState::Denied.is_sufficient());
        assert!(!AccessState::Unknown.is_sufficient());
    }
}
