//! Type qualifiers and declaration specifiers.

use bitflags::bitflags;

use crate::ReprError;

bitflags! {
    /// cv-qualifiers of a qualified type.
    #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

bitflags! {
    /// Declaration specifiers.
    ///
    /// Validated once per declaration; see [`Specifiers::validate`].
    #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
    pub struct Specifiers: u32 {
        // === Storage (bits 0-7) ===
        const REGISTER = 1 << 0;
        const STATIC = 1 << 1;
        const EXTERN = 1 << 2;
        const MUTABLE = 1 << 3;
        /// Combines with `STATIC` or `EXTERN`, never with `REGISTER` or
        /// `MUTABLE`.
        const THREAD_LOCAL = 1 << 4;

        // === Function (bits 8-15) ===
        const INLINE = 1 << 8;
        const VIRTUAL = 1 << 9;
        const EXPLICIT = 1 << 10;
        /// Pure virtual (`= 0`); requires `VIRTUAL`.
        const PURE = 1 << 11;

        // === Access (bits 16-23) ===
        const PUBLIC = 1 << 16;
        const PROTECTED = 1 << 17;
        const PRIVATE = 1 << 18;

        // === Misc (bits 24-31) ===
        const FRIEND = 1 << 24;
        const TYPEDEF = 1 << 25;
        const CONSTEXPR = 1 << 26;
        const CONSTEVAL = 1 << 27;
        const EXPORT = 1 << 28;

        // === Masks ===
        const STORAGE = Self::REGISTER.bits()
            | Self::STATIC.bits()
            | Self::EXTERN.bits()
            | Self::MUTABLE.bits();
        const ACCESS = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::PRIVATE.bits();
    }
}

impl Specifiers {
    /// Reject combinations no declaration can carry.
    ///
    /// At most one storage class and one access level; `THREAD_LOCAL` only
    /// with static or extern storage; `CONSTEXPR` and `CONSTEVAL` are
    /// exclusive; `PURE` needs `VIRTUAL`.
    pub fn validate(self) -> Result<Self, ReprError> {
        let conflicting = (self & Self::STORAGE).bits().count_ones() > 1
            || (self.contains(Self::THREAD_LOCAL)
                && self.intersects(Self::REGISTER | Self::MUTABLE))
            || (self & Self::ACCESS).bits().count_ones() > 1
            || self.contains(Self::CONSTEXPR | Self::CONSTEVAL)
            || (self.contains(Self::PURE) && !self.contains(Self::VIRTUAL));
        if conflicting {
            Err(ReprError::ConflictingSpecifiers(self))
        } else {
            Ok(self)
        }
    }

    /// Access level, if one was given.
    pub fn access(self) -> Option<Specifiers> {
        let access = self & Self::ACCESS;
        (!access.is_empty()).then_some(access)
    }
}
