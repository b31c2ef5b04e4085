// roundtrip_tests.rs

use proptest::prelude::*;
use winsplit::{join, quote, split, split_legacy, split_modern, SplitOptions};

fn word_from(alphabet: &'static [char], max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(alphabet), 0..=max_len)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

const ARGV_ALPHABET: &[char] = &[' ', '\t', 'x', '"', '\\', 'é'];
const CMD_ALPHABET: &[char] = &[' ', 'x', '"', '\\', '^', '&', '!', '%', '(', '<', '|'];
const UNQUOTED_ALPHABET: &[char] = &[' ', '\t', '\\', 'x'];

fn argv_only() -> SplitOptions {
    SplitOptions::default().shell_aware(false)
}

proptest! {
    #[test]
    fn argv_join_splits_back(words in prop::collection::vec(word_from(ARGV_ALPHABET, 8), 0..5)) {
        let line = join(&words, false);
        prop_assert_eq!(split(&line, argv_only()), Ok(words));
    }

    #[test]
    fn argv_join_splits_back_any_text(words in prop::collection::vec(".{0,10}", 0..4)) {
        let line = join(&words, false);
        prop_assert_eq!(split(&line, argv_only()), Ok(words));
    }

    #[test]
    fn cmd_join_splits_back(words in prop::collection::vec(word_from(CMD_ALPHABET, 6), 0..5)) {
        let line = join(&words, true);
        prop_assert_eq!(split(&line, SplitOptions::default()), Ok(words));
    }

    #[test]
    fn quoted_word_pairs_split_to_pairs(word in word_from(CMD_ALPHABET, 8)) {
        let q = quote(&word, true);
        let line = format!("{} {}", q, q);
        prop_assert_eq!(split(&line, SplitOptions::default()), Ok(vec![word.clone(), word]));
    }

    #[test]
    fn argv_quoted_word_pairs_split_to_pairs(word in word_from(ARGV_ALPHABET, 8)) {
        let q = quote(&word, false);
        let line = format!("{} {}", q, q);
        prop_assert_eq!(split(&line, argv_only()), Ok(vec![word.clone(), word]));
    }

    #[test]
    fn runtimes_agree_without_quotes(line in "[^\"]{0,24}") {
        prop_assert_eq!(split_legacy(&line), split_modern(&line));
    }

    #[test]
    fn runtimes_agree_on_backslash_heavy_lines(line in word_from(UNQUOTED_ALPHABET, 24)) {
        prop_assert_eq!(split_legacy(&line), split_modern(&line));
    }
}
