//! Symbolic names for the vowel marks offered by input front ends.
//! Only the presentation layer reads this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NikkudMark {
    pub name: &'static str,
    pub mark: char,
    /// Reduced (hataf) vowel
    pub chataf: bool,
}

const fn mark(name: &'static str, mark: char, chataf: bool) -> NikkudMark {
    NikkudMark { name, mark, chataf }
}

pub const NIKKUD: &[NikkudMark] = &[
    mark("SHVA", '\u{05B0}', false),
    mark("CHIRIK", '\u{05B4}', false),
    mark("TZERE", '\u{05B5}', false),
    mark("SEGOL", '\u{05B6}', false),
    mark("PATACH", '\u{05B7}', false),
    mark("KAMATZ", '\u{05B8}', false),
    mark("CHOLEM", '\u{05B9}', false),
    mark("KUBUTZ", '\u{05BB}', false),
    mark("DAGESH", '\u{05BC}', false),
    mark("SHIN_DOT", '\u{05C1}', false),
    mark("SIN_DOT", '\u{05C2}', false),
    mark("CHATAF_SEGOL", '\u{05B1}', true),
    mark("CHATAF_PATACH", '\u{05B2}', true),
    mark("CHATAF_KAMATZ", '\u{05B3}', true),
];

/// Case-insensitive lookup by name.
pub fn lookup(name: &str) -> Option<&'static NikkudMark> {
    NIKKUD.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}
