//! Flag types shared by the scanner and the parser.

bitflags::bitflags! {
    /// Flags for scanned tokens, matching TypeScript's TokenFlags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                    = 0;
        const PRECEDING_LINE_BREAK    = 1 << 0;
        const UNTERMINATED            = 1 << 1;
        const SCIENTIFIC              = 1 << 2;
        const HEX_SPECIFIER           = 1 << 3;
        const BINARY_SPECIFIER        = 1 << 4;
        const OCTAL_SPECIFIER         = 1 << 5;
        /// `017`-style octal, or a decimal with a leading zero (`08`).
        const LEGACY_OCTAL            = 1 << 6;
        const CONTAINS_SEPARATOR      = 1 << 7;
        /// An identifier or keyword written with `\u` escapes.
        const UNICODE_ESCAPE          = 1 << 8;
        const CONTAINS_INVALID_ESCAPE = 1 << 9;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::LEGACY_OCTAL.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

bitflags::bitflags! {
    /// Modifiers collected in front of a class member, parameter or declaration.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u16 {
        const NONE      = 0;
        const EXPORT    = 1 << 0;
        const DECLARE   = 1 << 1;
        const PUBLIC    = 1 << 2;
        const PRIVATE   = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC    = 1 << 5;
        const READONLY  = 1 << 6;
        const ACCESSOR  = 1 << 7;
        const ABSTRACT  = 1 << 8;
        const ASYNC     = 1 << 9;
        const DEFAULT   = 1 << 10;
        const CONST     = 1 << 11;
        const OVERRIDE  = 1 << 12;
        const IN        = 1 << 13;
        const OUT       = 1 << 14;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
    }
}

impl ModifierFlags {
    /// The ESTree `accessibility` value, if any accessibility modifier is set.
    pub fn accessibility(self) -> Option<crate::Accessibility> {
        if self.contains(ModifierFlags::PRIVATE) {
            Some(crate::Accessibility::Private)
        } else if self.contains(ModifierFlags::PROTECTED) {
            Some(crate::Accessibility::Protected)
        } else if self.contains(ModifierFlags::PUBLIC) {
            Some(crate::Accessibility::Public)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility() {
        assert_eq!(ModifierFlags::NONE.accessibility(), None);
        let flags = ModifierFlags::STATIC | ModifierFlags::PROTECTED;
        assert_eq!(flags.accessibility(), Some(crate::Accessibility::Protected));
        assert!(ModifierFlags::PARAMETER_PROPERTY_MODIFIER.intersects(ModifierFlags::READONLY));
    }
}
