//! Working buffer and the predicates every step is built from.
//!
//! The buffer keeps two cursors, both stored as exclusive ends:
//! - `end`: one past the last character of the current word (`k + 1` in the
//!   published algorithm).
//! - `stem_end`: one past the last character before the most recently matched
//!   suffix (`j + 1`). Set by a successful [`WordBuffer::ends`] or by
//!   [`WordBuffer::mark_whole_word`], empty for a fresh word. It is not reset
//!   between steps, so it can lag behind (or run past) `end`.
//!
//! Characters past `end` are kept; cutting back to a stale `stem_end` can
//! bring them back into the word.

/// The word being stemmed, plus its cursors. Lives for a single stem call.
#[derive(Debug, Clone)]
pub(crate) struct WordBuffer {
    b: Vec<char>,
    end: usize,
    stem_end: usize,
}

impl WordBuffer {
    pub(crate) fn new(chars: Vec<char>) -> Self {
        Self {
            end: chars.len(),
            b: chars,
            stem_end: 0,
        }
    }

    /// Length of the current word.
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    pub(crate) fn last(&self) -> Option<char> {
        self.end.checked_sub(1).map(|i| self.b[i])
    }

    /// Second-to-last character of the current word.
    pub(crate) fn penultimate(&self) -> Option<char> {
        self.end.checked_sub(2).map(|i| self.b[i])
    }

    /// Character immediately before the matched suffix.
    pub(crate) fn before_suffix(&self) -> Option<char> {
        self.stem_end.checked_sub(1).map(|i| self.b[i])
    }

    /// Consonant classification of `b[..len]`, scanned left to right.
    ///
    /// `y` is a consonant at the start of the word or after a vowel, and a
    /// vowel after a consonant.
    fn consonants(&self, len: usize) -> impl Iterator<Item = bool> + '_ {
        self.b[..len].iter().scan(None, |prev: &mut Option<bool>, &ch| {
            let consonant = match ch {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => prev.map_or(true, |p| !p),
                _ => true,
            };
            *prev = Some(consonant);
            Some(consonant)
        })
    }

    pub(crate) fn is_consonant(&self, i: usize) -> bool {
        self.consonants(i + 1).last().unwrap_or(false)
    }

    /// Number of vowel-consonant groups in the stem window `b[..stem_end]`.
    ///
    /// ```text
    /// <c><v>       gives 0
    /// <c>vc<v>     gives 1
    /// <c>vcvc<v>   gives 2
    /// ```
    pub(crate) fn measure(&self) -> usize {
        let mask: Vec<bool> = self.consonants(self.stem_end).collect();
        mask.windows(2).filter(|w| !w[0] && w[1]).count()
    }

    pub(crate) fn vowel_in_stem(&self) -> bool {
        self.consonants(self.stem_end).any(|c| !c)
    }

    /// `b[pos-1..=pos]` is a doubled consonant.
    pub(crate) fn double_consonant(&self, pos: usize) -> bool {
        pos >= 1 && self.b[pos] == self.b[pos - 1] && self.is_consonant(pos)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and `b[i]` is not w, x or y.
    ///
    /// Restores an e at the end of a short word: cav(e), lov(e), hop(e),
    /// crim(e), but snow, box, tray.
    pub(crate) fn cvc(&self, i: usize) -> bool {
        if i < 2 {
            return false;
        }
        let mut mask = self.consonants(i + 1).skip(i - 2);
        let shape = (mask.next(), mask.next(), mask.next());
        if shape != (Some(true), Some(false), Some(true)) {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// Whether the current word ends with `suffix`. On a match the stem
    /// window is moved to just before the suffix; otherwise it is untouched.
    pub(crate) fn ends(&mut self, suffix: &str) -> bool {
        debug_assert!(suffix.is_ascii());
        let len = suffix.len();
        if len > self.end {
            return false;
        }
        let start = self.end - len;
        if !self.b[start..self.end].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.stem_end = start;
        true
    }

    /// Overwrite everything after the stem window with `replacement`.
    pub(crate) fn set_to(&mut self, replacement: &str) {
        debug_assert!(
            self.stem_end <= self.end,
            "stem window {} past end of word {}",
            self.stem_end,
            self.end
        );
        for (offset, ch) in replacement.chars().enumerate() {
            let pos = self.stem_end + offset;
            if pos < self.b.len() {
                self.b[pos] = ch;
            } else {
                debug_assert_eq!(pos, self.b.len());
                self.b.push(ch);
            }
        }
        self.end = self.stem_end + replacement.chars().count();
    }

    /// Guarded replace: [`Self::set_to`] only when the stem has `m() > 0`.
    pub(crate) fn replace(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    pub(crate) fn set_last(&mut self, ch: char) {
        debug_assert!(self.end > 0);
        self.b[self.end - 1] = ch;
    }

    /// Drop the last `n` characters of the word.
    pub(crate) fn truncate_by(&mut self, n: usize) {
        debug_assert!(n <= self.end);
        self.end -= n;
    }

    /// Move the end of the word to the end of the stem window.
    pub(crate) fn truncate_to_stem(&mut self) {
        debug_assert!(self.stem_end <= self.b.len());
        self.end = self.stem_end;
    }

    /// Make the stem window span the whole current word.
    pub(crate) fn mark_whole_word(&mut self) {
        self.stem_end = self.end;
    }

    pub(crate) fn into_string(self) -> String {
        self.b[..self.end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(word: &str) -> WordBuffer {
        WordBuffer::new(word.chars().collect())
    }

    #[test]
    fn test_measure_whole_word() {
        let measure = |word: &str| {
            let mut b = buffer(word);
            b.mark_whole_word();
            b.measure()
        };
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("troubles"), 2);
        assert_eq!(measure("by"), 0);
        assert_eq!(measure("oaten"), 2);
        assert_eq!(measure("private"), 2);
        assert_eq!(measure("orrery"), 2);
    }

    #[test]
    fn test_fresh_word_has_empty_window() {
        let b = buffer("troubles");
        assert_eq!(b.measure(), 0);
        assert!(!b.vowel_in_stem());
    }

    #[test]
    fn test_truncate_to_stale_window_restores_chars() {
        let mut b = buffer("occurr");
        b.mark_whole_word();
        b.truncate_by(1);
        assert_eq!(b.end(), 5);
        b.truncate_to_stem();
        assert_eq!(b.into_string(), "occurr");
    }

    #[test]
    fn test_measure_uses_stem_window() {
        let mut b = buffer("troubles");
        assert!(b.ends("les"));
        // "troub"
        assert_eq!(b.measure(), 1);
        assert!(b.ends("s"));
        assert_eq!(b.measure(), 1);
        b.mark_whole_word();
        assert_eq!(b.measure(), 2);
    }

    #[test]
    fn test_y_classification() {
        // Leading y is a consonant.
        assert!(buffer("yes").is_consonant(0));
        assert!(buffer("y").is_consonant(0));
        // y after a vowel is a consonant, after a consonant a vowel.
        assert!(buffer("toy").is_consonant(2));
        assert!(!buffer("by").is_consonant(1));
        // syzygy: s y z y g y -> c v c v c v
        let b = buffer("syzygy");
        let mask: Vec<bool> = (0..6).map(|i| b.is_consonant(i)).collect();
        assert_eq!(mask, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_non_letters_are_consonants() {
        let b = buffer("a1-");
        assert!(!b.is_consonant(0));
        assert!(b.is_consonant(1));
        assert!(b.is_consonant(2));
    }

    #[test]
    fn test_vowel_in_stem() {
        let mut b = buffer("sky");
        assert!(b.ends("y"));
        assert!(!b.vowel_in_stem());

        let mut b = buffer("happy");
        assert!(b.ends("y"));
        assert!(b.vowel_in_stem());

        // "ing" alone leaves an empty stem.
        let mut b = buffer("ing");
        assert!(b.ends("ing"));
        assert!(!b.vowel_in_stem());
    }

    #[test]
    fn test_double_consonant() {
        assert!(buffer("hopp").double_consonant(3));
        assert!(buffer("fall").double_consonant(3));
        assert!(!buffer("tree").double_consonant(3));
        assert!(!buffer("hop").double_consonant(2));
        assert!(!buffer("s").double_consonant(0));
    }

    #[test]
    fn test_cvc() {
        assert!(buffer("hop").cvc(2));
        assert!(buffer("cav").cvc(2));
        assert!(!buffer("snow").cvc(3));
        assert!(!buffer("box").cvc(2));
        assert!(!buffer("tray").cvc(3));
        assert!(!buffer("fail").cvc(3));
        assert!(!buffer("op").cvc(1));
    }

    #[test]
    fn test_ends_leaves_window_on_failure() {
        let mut b = buffer("meetings");
        assert!(b.ends("s"));
        assert_eq!(b.stem_end, 7);
        assert!(!b.ends("ies"));
        assert_eq!(b.stem_end, 7);
        assert!(!b.ends("longerthanthewordmeetings"));
        assert_eq!(b.stem_end, 7);
    }

    #[test]
    fn test_set_to_rewrites_tail_without_truncating_buffer() {
        let mut b = buffer("ponies");
        assert!(b.ends("ies"));
        b.set_to("i");
        assert_eq!(b.end(), 4);
        assert_eq!(b.b.len(), 6);
        assert_eq!(b.into_string(), "poni");
    }

    #[test]
    fn test_set_to_appends_past_buffer() {
        let mut b = buffer("hop");
        b.mark_whole_word();
        b.set_to("e");
        assert_eq!(b.into_string(), "hope");
    }

    #[test]
    fn test_replace_requires_measure() {
        let mut b = buffer("rational");
        assert!(b.ends("ational"));
        // "r" has m() == 0
        b.replace("ate");
        assert_eq!(b.into_string(), "rational");

        let mut b = buffer("relational");
        assert!(b.ends("ational"));
        b.replace("ate");
        assert_eq!(b.into_string(), "relate");
    }
}
