use crate::romanize;

fn check(cases: &[(&str, &str)]) {
    for &(input, expected) in cases {
        assert_eq!(romanize(input), expected, "input: {input:?}");
    }
}

// --- Unambiguous letters only ---

#[test]
fn test_plain_words() {
    check(&[("мама", "mama"), ("хата", "chata"), ("щука", "shjuka")]);
}

#[test]
fn test_empty_and_latin() {
    check(&[("", ""), ("abc", "abc"), ("Hello, world!\n", "Hello, world!\n")]);
}

#[test]
fn test_mixed_script() {
    check(&[("hello, світ!", "hello, svit!")]);
}

// --- doubles ---

#[test]
fn test_doubled_consonants() {
    check(&[
        ("жж", "zhh"),
        ("шш", "shh"),
        ("чч", "jj"),
        ("ЖЖ", "ZHH"),
        ("ШШ", "SHH"),
        ("ЧЧ", "JJ"),
        ("Вв", "Wv"),
        ("ВВ", "WV"),
    ]);
}

#[test]
fn test_doubled_v_inside_word() {
    check(&[("ввічливий", "wvijlyvyi")]);
}

#[test]
fn test_bigraphs_with_mapped_letters_never_match() {
    // д is mapped before the rules run, so "дж" reaches the sibilant rule
    // as "dж".
    check(&[("дж", "dzh"), ("сьогодні", "sohodni")]);
}

// --- sibilants ---

#[test]
fn test_sibilants_follow_buffer_case() {
    check(&[
        ("чай", "jai"),
        ("Жаба", "Zhaba"),
        ("Щука", "Shjuka"),
        ("Хата", "Chata"),
        ("Чай", "Jai"),
    ]);
}

#[test]
fn test_sibilants_all_caps() {
    check(&[
        ("ЖАБА", "ZHABA"),
        ("ХАТА", "CHATA"),
        ("ЩО", "SHJO"),
        ("Ж", "ZH"),
    ]);
}

#[test]
fn test_sibilants_in_mixed_case_text() {
    // One lowercase letter anywhere keeps every sibilant in title form.
    check(&[("Щасливі ЖЖ дні", "Shjaslyvi ZHH dni")]);
}

// --- v-or-w ---

#[test]
fn test_v_before_vowel() {
    check(&[("мальва", "malva"), ("ВАЗА", "VAZA")]);
}

#[test]
fn test_w_at_end_or_before_consonant() {
    check(&[("лев", "lew"), ("вовк", "vowk"), ("Львів", "Lwiw")]);
}

#[test]
fn test_w_everywhere_when_text_ends_in_v() {
    check(&[("вів", "wiw"), ("вода лев", "woda lew")]);
}

// --- small-vowels ---

#[test]
fn test_small_vowel_glide_at_start() {
    check(&[("яблуко", "yabluko")]);
}

#[test]
fn test_small_vowel_after_consonant_or_vowel() {
    check(&[("пісня", "pisnia"), ("Україна", "Ukraiyna")]);
}

#[test]
fn test_small_vowel_after_apostrophe() {
    check(&[("м'ята", "m'yata"), ("сім'я", "sim'ya")]);
}

#[test]
fn test_small_vowel_after_space() {
    // A space does not start a new word.
    check(&[("та я", "ta ia")]);
}

#[test]
fn test_small_vowel_after_line_break() {
    // Only the buffer start counts as a word start for this rule.
    check(&[("мама\nяма", "mama\niama")]);
}

// --- capital-vowels ---

#[test]
fn test_capital_vowel_mixed_case_word() {
    check(&[("Юля", "Yulia"), ("Євген", "Yewhen")]);
}

#[test]
fn test_capital_vowel_all_caps_word() {
    check(&[("ЮЛЯ", "YULIA")]);
}

#[test]
fn test_capital_vowel_single_letter() {
    check(&[("Я", "Ya")]);
}

// --- y-or-i ---

#[test]
fn test_y_initial() {
    check(&[("йогурт", "yohurt")]);
}

#[test]
fn test_i_after_vowel() {
    check(&[("мій", "mii")]);
}

#[test]
fn test_apostrophe_y_after_consonant() {
    check(&[("підйом", "pid'yom")]);
}

#[test]
fn test_word_boundaries_are_line_breaks_only() {
    check(&[("мій\nйод", "mii\nyod"), ("мій йод", "mii 'yod")]);
}

// --- softener ---

#[test]
fn test_softener_deleted() {
    check(&[("ь", ""), ("Ь", ""), ("тінь", "tin")]);
}
