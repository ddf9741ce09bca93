use proptest::prelude::*;

use bsv_bip39::{normalize, Wordlist};

fn english() -> Wordlist {
    Wordlist::parse("english", ' ', include_str!("fixtures/english.txt"))
}

fn spanish() -> Wordlist {
    Wordlist::parse("spanish", ' ', include_str!("fixtures/spanish.txt"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn indices_words_roundtrip(seed in prop::collection::vec(any::<usize>(), 0..24)) {
        let list = english();
        let indices: Vec<usize> = seed.iter().map(|i| i % list.word_count()).collect();
        let words = list.words_at(&indices).unwrap();
        prop_assert_eq!(list.indices_from_words(&words).unwrap(), indices);
    }

    #[test]
    fn split_inverts_sentence(seed in prop::collection::vec(any::<usize>(), 0..24)) {
        let list = spanish();
        let indices: Vec<usize> = seed.iter().map(|i| i % list.word_count()).collect();
        let sentence = list.sentence_from_indices(&indices).unwrap();
        prop_assert_eq!(list.split(&sentence), list.words_at(&indices).unwrap());
    }

    #[test]
    fn normalization_is_idempotent(word in "\\PC{0,12}") {
        let list = spanish();
        prop_assert_eq!(normalize(&normalize(&word)), normalize(&word));
        prop_assert_eq!(list.word_exists(&normalize(&word)), list.word_exists(&word));
    }

    #[test]
    fn vocabulary_words_normalize_to_themselves(index in 0usize..18) {
        let list = spanish();
        let word = list.word_at(index).unwrap();
        prop_assert_eq!(normalize(word), word);
        prop_assert_eq!(list.word_exists(word), Some(index));
    }
}
