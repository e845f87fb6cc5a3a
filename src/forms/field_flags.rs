//! Field flags for interactive form fields.
//!
//! The /Ff entry is a single integer bitmask whose meaning depends on the
//! field type. Common flags occupy the low bits of every field type; the
//! button, text, and choice tables each claim their own higher bits
//! (ISO 32000-1:2008, Tables 221/226/228/230).

use bitflags::bitflags;

bitflags! {
    /// Field flags common to all field types (Table 221).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldFlags: u32 {
        /// Bit 1: Field is read-only; user cannot change the value
        const READ_ONLY = 1 << 0;

        /// Bit 2: Field is required; must have a value before submit
        const REQUIRED = 1 << 1;

        /// Bit 3: Field should not be exported by submit-form action
        const NO_EXPORT = 1 << 2;
    }
}

bitflags! {
    /// Button field flags, /FT /Btn (Table 226).
    ///
    /// A button with neither RADIO nor PUSHBUTTON set is a checkbox.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ButtonFieldFlags: u32 {
        /// Bit 15: No toggle to off; one button in the group must stay on
        const NO_TOGGLE_TO_OFF = 1 << 14;

        /// Bit 16: This is a radio button
        const RADIO = 1 << 15;

        /// Bit 17: This is a push button (performs action, holds no value)
        const PUSHBUTTON = 1 << 16;

        /// Bit 26: Radio buttons with the same /V value turn on together
        const RADIOS_IN_UNISON = 1 << 25;
    }
}

bitflags! {
    /// Text field flags, /FT /Tx (Table 228).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextFieldFlags: u32 {
        /// Bit 13: Text may span multiple lines
        const MULTILINE = 1 << 12;

        /// Bit 14: Text is displayed obscured (password entry)
        const PASSWORD = 1 << 13;

        /// Bit 21: Value is a file path to submit
        const FILE_SELECT = 1 << 20;

        /// Bit 23: Text should not be spell-checked
        const DO_NOT_SPELL_CHECK = 1 << 22;

        /// Bit 24: Text should not scroll beyond the visible area
        const DO_NOT_SCROLL = 1 << 23;

        /// Bit 25: Field is divided into equally spaced comb positions
        const COMB = 1 << 24;

        /// Bit 26: Field contains rich text
        const RICH_TEXT = 1 << 25;
    }
}

bitflags! {
    /// Choice field flags, /FT /Ch (Table 230).
    ///
    /// A choice field without COMBO is a list box.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChoiceFieldFlags: u32 {
        /// Bit 18: This is a combo box (dropdown)
        const COMBO = 1 << 17;

        /// Bit 19: (combo only) User may type a custom value
        const EDIT = 1 << 18;

        /// Bit 20: Options are presented sorted
        const SORT = 1 << 19;

        /// Bit 22: (list only) Multiple selections allowed
        const MULTI_SELECT = 1 << 21;

        /// Bit 23: Text should not be spell-checked (editable combo)
        const DO_NOT_SPELL_CHECK = 1 << 22;

        /// Bit 27: Value is committed when the selection changes
        const COMMIT_ON_SEL_CHANGE = 1 << 26;
    }
}

impl Default for FieldFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for ButtonFieldFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for TextFieldFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for ChoiceFieldFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_flag_bits() {
        assert_eq!(FieldFlags::READ_ONLY.bits(), 1);
        assert_eq!(FieldFlags::REQUIRED.bits(), 2);
        assert_eq!(FieldFlags::NO_EXPORT.bits(), 4);
    }

    #[test]
    fn test_button_flag_bits() {
        assert_eq!(ButtonFieldFlags::RADIO.bits(), 1 << 15);
        assert_eq!(ButtonFieldFlags::PUSHBUTTON.bits(), 1 << 16);
        assert_eq!(ButtonFieldFlags::NO_TOGGLE_TO_OFF.bits(), 1 << 14);
    }

    #[test]
    fn test_text_flag_bits() {
        assert_eq!(TextFieldFlags::MULTILINE.bits(), 1 << 12);
        assert_eq!(TextFieldFlags::PASSWORD.bits(), 1 << 13);
        assert_eq!(TextFieldFlags::COMB.bits(), 1 << 24);
    }

    #[test]
    fn test_choice_flag_bits() {
        assert_eq!(ChoiceFieldFlags::COMBO.bits(), 1 << 17);
        assert_eq!(ChoiceFieldFlags::MULTI_SELECT.bits(), 1 << 21);
    }

    #[test]
    fn test_flag_sets_do_not_collide_within_type() {
        // Button and choice discriminator bits live above the common range.
        let common = FieldFlags::all().bits();
        assert_eq!(common & ButtonFieldFlags::all().bits(), 0);
        assert_eq!(common & ChoiceFieldFlags::all().bits(), 0);
        assert_eq!(common & TextFieldFlags::all().bits(), 0);
    }

    #[test]
    fn test_combined_flags() {
        let flags = ButtonFieldFlags::RADIO | ButtonFieldFlags::NO_TOGGLE_TO_OFF;
        assert!(flags.contains(ButtonFieldFlags::RADIO));
        assert!(!flags.contains(ButtonFieldFlags::PUSHBUTTON));
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(FieldFlags::default(), FieldFlags::empty());
        assert_eq!(ButtonFieldFlags::default(), ButtonFieldFlags::empty());
    }
}
