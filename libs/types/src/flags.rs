//! Option sets over integer backing values
//!
//! Several payload fields are bit-flag sets: each bit independently denotes
//! a capability or a "this element changed" marker, composed by union and
//! intersection with no ordering significance. The `option_set!` macro
//! generates the thin integer wrappers so the per-set definitions stay
//! declarative.

/// Generate an option-set type over an unsigned backing integer
///
/// Produces a `Copy` value type with named bit constants, `|`/`&`
/// composition, and raw-value conversion that is total in both directions
/// (unknown bits are carried, never rejected).
#[macro_export]
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $( $(#[$flag_meta:meta])* $flag:ident = $value:expr; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name($repr);

        impl $name {
            $( $(#[$flag_meta])* pub const $flag: Self = Self($value); )*

            /// The set with no flags raised
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Wrap a raw backing value, preserving unrecognized bits
            pub const fn from_raw(raw: $repr) -> Self {
                Self(raw)
            }

            /// The raw backing value
            pub const fn raw_value(self) -> $repr {
                self.0
            }

            /// True when every flag in `other` is raised in `self`
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// True when no flags are raised
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }
    };
}

option_set! {
    /// Physical interface capabilities of an external source
    ExternalInterfaces(u8) {
        SDI = 1;
        HDMI = 1 << 1;
        COMPONENT = 1 << 2;
        COMPOSITE = 1 << 3;
        S_VIDEO = 1 << 4;
    }
}

option_set! {
    /// Where a source may be routed or used
    SourceAvailability(u8) {
        AUXILIARY = 1;
        MULTIVIEWER = 1 << 1;
        SUPER_SOURCE_ART = 1 << 2;
        SUPER_SOURCE_BOX = 1 << 3;
        KEY_SOURCE = 1 << 4;
    }
}

option_set! {
    /// Mix effects a source is available on
    MixEffects(u8) {
        ME1 = 1;
        ME2 = 1 << 1;
    }
}
