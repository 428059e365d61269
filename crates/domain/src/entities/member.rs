//! Member entity - a named participant of exactly one club

use crate::ids::MemberId;
use crate::value_objects::MemberName;

/// Role assigned when none is given.
pub const DEFAULT_ROLE: &str = "member";

/// A club member.
///
/// Members are immutable once created; a club replaces or removes them,
/// never edits them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: MemberName,
    role: String,
}

impl Member {
    pub(crate) fn new(name: MemberName, role: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name,
            role: role.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> &MemberId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &MemberName {
        &self.name
    }

    #[inline]
    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_gets_fresh_id() {
        let a = Member::new(MemberName::new("Jordan").unwrap(), DEFAULT_ROLE);
        let b = Member::new(MemberName::new("Jordan").unwrap(), DEFAULT_ROLE);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.role(), "member");
    }

    #[test]
    fn custom_role_is_kept() {
        let m = Member::new(MemberName::new("Priya").unwrap(), "treasurer");
        assert_eq!(m.name().as_str(), "Priya");
        assert_eq!(m.role(), "treasurer");
    }
}
