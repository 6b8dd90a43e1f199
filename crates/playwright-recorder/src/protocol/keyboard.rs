// Keyboard modifiers - canonical encoding of recorded modifier state
//
// The recorder reports held modifiers as a bitmask. The protocol wants an
// ordered list of modifier names, and `press` wants a `+`-joined key chord.
//
// See: https://playwright.dev/docs/api/class-keyboard#keyboard-press

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the parts of a key chord (`Control+Shift+A`)
pub const KEY_CHORD_SEPARATOR: char = '+';

/// Keyboard modifier keys
///
/// Variant order is the canonical encoding order: Alt, Control, Meta, Shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyboardModifier {
    /// Alt key
    Alt,
    /// Control key
    Control,
    /// Meta key (Command on macOS, Windows key on Windows)
    Meta,
    /// Shift key
    Shift,
}

impl KeyboardModifier {
    /// All modifiers in canonical order
    pub const ALL: [KeyboardModifier; 4] = [
        KeyboardModifier::Alt,
        KeyboardModifier::Control,
        KeyboardModifier::Meta,
        KeyboardModifier::Shift,
    ];

    /// Bit used for this modifier in the recorder's bitmask
    pub const fn bit(self) -> u8 {
        match self {
            KeyboardModifier::Alt => 1,
            KeyboardModifier::Control => 2,
            KeyboardModifier::Meta => 4,
            KeyboardModifier::Shift => 8,
        }
    }

    /// Protocol name of the modifier
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyboardModifier::Alt => "Alt",
            KeyboardModifier::Control => "Control",
            KeyboardModifier::Meta => "Meta",
            KeyboardModifier::Shift => "Shift",
        }
    }
}

impl fmt::Display for KeyboardModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of held keyboard modifiers
///
/// Stored as the recorder bitmask (Alt=1, Control=2, Meta=4, Shift=8), so
/// insertion order never leaks into the encoded output. Unknown bits are
/// dropped on construction.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::protocol::keyboard::{KeyboardModifier, KeyboardModifiers};
///
/// let modifiers: KeyboardModifiers =
///     [KeyboardModifier::Shift, KeyboardModifier::Control].into_iter().collect();
/// assert_eq!(modifiers.bits(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct KeyboardModifiers(u8);

impl KeyboardModifiers {
    const MASK: u8 = 0b1111;

    /// Empty modifier set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from a recorder bitmask, ignoring unknown bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw bitmask
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, modifier: KeyboardModifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub fn insert(&mut self, modifier: KeyboardModifier) {
        self.0 |= modifier.bit();
    }

    /// Adds a modifier, returning the updated set
    pub fn with(mut self, modifier: KeyboardModifier) -> Self {
        self.insert(modifier);
        self
    }

    /// Iterates the held modifiers in canonical order
    pub fn iter(self) -> impl Iterator<Item = KeyboardModifier> {
        KeyboardModifier::ALL
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }
}

impl From<u8> for KeyboardModifiers {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<KeyboardModifiers> for u8 {
    fn from(modifiers: KeyboardModifiers) -> Self {
        modifiers.bits()
    }
}

impl FromIterator<KeyboardModifier> for KeyboardModifiers {
    fn from_iter<I: IntoIterator<Item = KeyboardModifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, modifier| set.with(modifier))
    }
}

/// Encodes a modifier set as the protocol's ordered modifier list.
///
/// An empty set yields an empty list.
pub fn to_keyboard_modifiers(modifiers: KeyboardModifiers) -> Vec<KeyboardModifier> {
    modifiers.iter().collect()
}

/// Joins the held modifiers and the primary key into a key chord.
///
/// `{Control, Shift}` + `"A"` gives `"Control+Shift+A"`; with no modifiers the
/// key is returned as-is.
pub fn key_chord(modifiers: KeyboardModifiers, key: &str) -> String {
    let held = modifiers.bits().count_ones() as usize;
    let mut chord = String::with_capacity(key.len() + 8 * held);
    for modifier in modifiers.iter() {
        chord.push_str(modifier.as_str());
        chord.push(KEY_CHORD_SEPARATOR);
    }
    chord.push_str(key);
    chord
}
