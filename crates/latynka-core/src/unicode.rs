//! Character-level classification consulted by the rule contexts.

/// Letters after which `в` keeps its "v" reading.
const V_FOLLOWERS: &str = "aeyoiuєяAEYOIUЄЯ";

/// Vowels after which `й` is written "i".
const Y_PRECEDERS: &str = "aeiouyAEIOUY";

pub fn is_v_follower(c: char) -> bool {
    V_FOLLOWERS.contains(c)
}

pub fn is_y_preceder(c: char) -> bool {
    Y_PRECEDERS.contains(c)
}

/// True when `s` has at least one cased character and no lowercase one.
pub fn is_all_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
