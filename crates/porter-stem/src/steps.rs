//! The six ordered rewrite steps.
//!
//! Each step inspects the tail of the word and rewrites it in place. Order
//! matters and is fixed by [`run`].

use crate::buffer::WordBuffer;

/// `(dispatch char, [(suffix, replacement)])`, tried in order.
type SuffixTable = &'static [(char, &'static [(&'static str, &'static str)])];

/// Double suffixes mapped to single ones, keyed by the second-to-last char.
const DOUBLE_SUFFIXES: SuffixTable = &[
    ('a', &[("ational", "ate"), ("tional", "tion")]),
    ('c', &[("enci", "ence"), ("anci", "ance")]),
    ('e', &[("izer", "ize")]),
    (
        'l',
        &[
            ("bli", "ble"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
        ],
    ),
    ('o', &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")]),
    (
        's',
        &[
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
        ],
    ),
    ('t', &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")]),
    ('g', &[("logi", "log")]),
];

/// -ic-, -full, -ness etc., keyed by the last char.
const DERIVATIONAL_SUFFIXES: SuffixTable = &[
    ('e', &[("icate", "ic"), ("ative", ""), ("alize", "al")]),
    ('i', &[("iciti", "ic")]),
    ('l', &[("ical", "ic"), ("ful", "")]),
    ('s', &[("ness", "")]),
];

/// Suffixes protected from the `<c>vcvc<v>` cut, keyed by the second-to-last
/// char. A char missing from the table leaves the word alone.
const RESIDUAL_SUFFIXES: &[(char, &[&str])] = &[
    ('a', &["al"]),
    ('c', &["ance", "ence"]),
    ('i', &["ic"]),
    ('l', &["able", "ible"]),
    // element etc. not stripped before the m
    ('n', &["ant", "ement", "ment", "ent"]),
    ('o', &["ion", "ou"]),
    ('s', &["ism"]),
    ('t', &["ate", "iti"]),
    ('u', &["ous"]),
    ('v', &["ive"]),
    ('z', &["ize"]),
];

/// Run all steps in order. Words shorter than three characters are left alone.
pub(crate) fn run(word: &mut WordBuffer) {
    if word.end() <= 2 {
        return;
    }
    step1(word);
    step2(word);
    step3(word);
    step4(word);
    step5(word);
    step6(word);
}

/// Plurals and -ed or -ing.
///
/// ```text
/// caresses -> caress    feed     -> feed     matting  -> mat
/// ponies   -> poni      agreed   -> agree    mating   -> mate
/// ties     -> ti        disabled -> disable  meeting  -> meet
/// caress   -> caress                         milling  -> mill
/// cats     -> cat                            messing  -> mess
/// meetings -> meet
/// ```
pub(crate) fn step1(word: &mut WordBuffer) {
    if word.last() == Some('s') {
        if word.ends("sses") {
            word.truncate_by(2);
        } else if word.ends("ies") {
            word.set_to("i");
        } else if word.penultimate() != Some('s') {
            word.truncate_by(1);
        }
    }

    if word.ends("eed") {
        if word.measure() > 0 {
            word.truncate_by(1);
        }
    } else if (word.ends("ed") || word.ends("ing")) && word.vowel_in_stem() {
        word.truncate_to_stem();
        if word.ends("at") {
            word.set_to("ate");
        } else if word.ends("bl") {
            word.set_to("ble");
        } else if word.ends("iz") {
            word.set_to("ize");
        } else if word.double_consonant(word.end() - 1) {
            if !matches!(word.last(), Some('l' | 's' | 'z')) {
                word.truncate_by(1);
            }
        } else if word.measure() == 1 && word.cvc(word.end() - 1) {
            word.set_to("e");
        }
    }
}

/// Terminal y to i when there is another vowel in the stem.
pub(crate) fn step2(word: &mut WordBuffer) {
    if word.ends("y") && word.vowel_in_stem() {
        word.set_last('i');
    }
}

/// Double suffixes to single ones: -ization (-ize plus -ation) maps to -ize.
pub(crate) fn step3(word: &mut WordBuffer) {
    let key = word.penultimate();
    replace_first(word, key, DOUBLE_SUFFIXES);
}

/// -ic-, -full, -ness etc. Same strategy as step3, keyed on the last char.
pub(crate) fn step4(word: &mut WordBuffer) {
    let key = word.last();
    replace_first(word, key, DERIVATIONAL_SUFFIXES);
}

/// Cuts back to the stem window in context `<c>vcvc<v>`, unless the word ends
/// in one of its row's suffixes (-ion only after s or t).
///
/// When nothing in the row matches, the window is whatever the last
/// successful `ends` of this or an earlier step left behind.
pub(crate) fn step5(word: &mut WordBuffer) {
    let Some(key) = word.penultimate() else {
        return;
    };
    let Some((_, suffixes)) = RESIDUAL_SUFFIXES.iter().find(|(c, _)| *c == key) else {
        return;
    };

    for suffix in suffixes.iter() {
        if word.ends(suffix)
            && (*suffix != "ion" || matches!(word.before_suffix(), Some('s' | 't')))
        {
            return;
        }
    }
    if word.measure() > 1 {
        word.truncate_to_stem();
    }
}

/// Removes a final -e if `m() > 1`, and changes -ll to -l if `m() > 1`.
pub(crate) fn step6(word: &mut WordBuffer) {
    word.mark_whole_word();
    if word.last() == Some('e') {
        let m = word.measure();
        let short_cvc = word.end().checked_sub(2).is_some_and(|i| word.cvc(i));
        if m > 1 || (m == 1 && !short_cvc) {
            word.truncate_by(1);
        }
    }
    if word.last() == Some('l') && word.double_consonant(word.end() - 1) && word.measure() > 1 {
        word.truncate_by(1);
    }
}

/// Apply the guarded replace for the first suffix in `key`'s row that the
/// word ends with. Later suffixes in the row are not tried.
fn replace_first(word: &mut WordBuffer, key: Option<char>, table: SuffixTable) {
    let Some(key) = key else {
        return;
    };
    let Some((_, rules)) = table.iter().find(|(c, _)| *c == key) else {
        return;
    };
    for &(suffix, replacement) in rules.iter() {
        if word.ends(suffix) {
            word.replace(replacement);
            return;
        }
    }
}
