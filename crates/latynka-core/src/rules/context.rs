//! Candidate selection for the context-dependent rules.
//!
//! `buf` is the whole working buffer and offsets are byte offsets into it.
//! Word boundaries are only the buffer edges (and, for `y-or-i`, a preceding
//! line break); spaces and punctuation do not start or end a word here.

use crate::unicode::{is_all_upper, is_v_follower, is_y_preceder};

// sibilants
const LOWER: usize = 0;
const UPPER: usize = 1;

// v-or-w
const V: usize = 0;
const W: usize = 1;

// small-vowels, capital-vowels
const PLAIN: usize = 0;
const GLIDE: usize = 1;
const GLIDE_UPPER: usize = 2;

// y-or-i
const INITIAL: usize = 0;
const AFTER_VOWEL: usize = 1;
const APOSTROPHE: usize = 2;

fn prev_char(buf: &str, at: usize) -> Option<char> {
    buf[..at].chars().next_back()
}

/// The upper form is used only when the whole buffer is uppercase, so a
/// capitalised word gets `Zh` and an all-caps one gets `ZH`.
pub(super) fn sibilant(buf: &str) -> usize {
    if is_all_upper(buf) {
        UPPER
    } else {
        LOWER
    }
}

/// `end` is the byte offset just past the occurrence. A buffer ending in
/// `grapheme` turns every occurrence into the `w` form.
pub(super) fn v_or_w(buf: &str, grapheme: &str, end: usize) -> usize {
    if buf.ends_with(grapheme) {
        return W;
    }
    match buf[end..].chars().next() {
        Some(c) if is_v_follower(c) => V,
        _ => W,
    }
}

pub(super) fn small_vowel(buf: &str, at: usize) -> usize {
    match prev_char(buf, at) {
        Some(c) if !matches!(c, '\'' | 'ь') => PLAIN,
        _ => GLIDE,
    }
}

pub(super) fn capital_vowel(buf: &str, at: usize) -> usize {
    // Apostrophes are not letters, so only the soft sign can block here.
    let prev_letter = buf[..at].chars().rev().find(|c| c.is_alphabetic());
    if matches!(prev_letter, Some(c) if c != 'Ь') {
        return PLAIN;
    }

    let letters: String = buf.chars().filter(|c| c.is_alphabetic()).collect();
    let sole = prev_letter.is_none() && letters.chars().count() == 1;
    if sole || !is_all_upper(&letters) {
        GLIDE
    } else {
        GLIDE_UPPER
    }
}

pub(super) fn y_or_i(buf: &str, at: usize) -> usize {
    match prev_char(buf, at) {
        None | Some('\n') => INITIAL,
        Some(c) if is_y_preceder(c) => AFTER_VOWEL,
        Some(_) => APOSTROPHE,
    }
}
