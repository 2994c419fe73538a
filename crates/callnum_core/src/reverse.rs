/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reverse shelf keys, for browsing backwards from a call number.

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sorts before everything a forward key can contain.
pub const SORT_FIRST: char = '\u{0}';

/// Sorts after everything a forward key can contain.
pub const SORT_LAST: char = char::MAX;

/// Reverse keys are padded to at least this many characters.
pub const REVERSE_KEY_LENGTH: usize = 75;

const ALPHANUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `0 -> Z`, `1 -> Y`, ... `A -> P`, ... `Z -> 0`.
static REVERSE_ALPHANUM: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| ALPHANUM.chars().zip(ALPHANUM.chars().rev()).collect());

/// Latin letters whose base form does not come out of canonical decomposition.
static LATIN_FOLDS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    HashMap::from([
        ('Ø', 'O'),
        ('Ł', 'L'),
        ('Đ', 'D'),
        ('Ð', 'D'),
        ('Ħ', 'H'),
        ('Ŧ', 'T'),
        ('Ŀ', 'L'),
    ])
});

/// Map a forward shelf key to one that sorts in the opposite order.
///
/// Letters and digits are mirrored through `0..9A..Z`. Punctuation becomes
/// [`SORT_LAST`], except `{ | } ~` (which sort after letters going forward)
/// and anything that cannot be mapped, which become [`SORT_FIRST`].
///
/// ```
/// use callnum_core::reverse::reverse_shelf_key;
/// let key = reverse_shelf_key("A1");
/// assert!(key.starts_with("PY"));
/// assert_eq!(key.chars().count(), 75);
/// ```
pub fn reverse_shelf_key(key: &str) -> String {
    let mut reversed: String = key.chars().map(reverse_char).collect();
    let len = reversed.chars().count();
    if len < REVERSE_KEY_LENGTH {
        reversed.extend(std::iter::repeat(SORT_LAST).take(REVERSE_KEY_LENGTH - len));
    }
    reversed
}

fn reverse_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    };

    if is_combining_mark(c) {
        return SORT_FIRST;
    }
    if c.is_alphanumeric() {
        return REVERSE_ALPHANUM
            .get(&c)
            .or_else(|| fold_latin(c).and_then(|base| REVERSE_ALPHANUM.get(&base)))
            .copied()
            .unwrap_or(SORT_FIRST);
    }
    match c {
        '{' | '|' | '}' | '~' => SORT_FIRST,
        _ => SORT_LAST,
    }
}

/// `É -> E`, `Ø -> O`; `None` for anything without an ASCII base.
fn fold_latin(c: char) -> Option<char> {
    if let Some(base) = LATIN_FOLDS.get(&c) {
        return Some(*base);
    }
    std::iter::once(c)
        .nfd()
        .next()
        .filter(|base| *base != c && base.is_ascii_alphanumeric())
        .map(|base| base.to_ascii_uppercase())
}
