//! Property tests for the text normalizer.

use corpus_text::{LanguageResources, NormalizerOptions, TextNormalizer};
use proptest::prelude::*;

fn options() -> impl Strategy<Value = NormalizerOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(remove_special_chars, remove_stopwords)| {
        NormalizerOptions {
            remove_special_chars,
            remove_stopwords,
        }
    })
}

proptest! {
    #[test]
    fn normalize_is_a_fixed_point(
        text in "[a-zA-Z0-9 ,.!?'\t\n-]{0,80}",
        options in options(),
    ) {
        let normalizer = TextNormalizer::new(options, &LanguageResources::english());
        let once = normalizer.normalize(Some(&text));
        let twice = normalizer.normalize(Some(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn missing_input_is_always_empty(options in options()) {
        let normalizer = TextNormalizer::new(options, &LanguageResources::english());
        prop_assert_eq!(normalizer.normalize(None), "");
    }

    #[test]
    fn output_has_no_redundant_whitespace(
        text in "[a-zA-Z ,.\t\n]{0,80}",
        options in options(),
    ) {
        let normalizer = TextNormalizer::new(options, &LanguageResources::english());
        let cleaned = normalizer.normalize(Some(&text));
        prop_assert!(!cleaned.starts_with(' '));
        prop_assert!(!cleaned.ends_with(' '));
        prop_assert!(!cleaned.contains("  "));
        prop_assert!(!cleaned.contains('\t'));
        prop_assert!(!cleaned.contains('\n'));
    }

    #[test]
    fn output_is_lowercase(text in "[a-zA-Z .]{0,80}", options in options()) {
        let normalizer = TextNormalizer::new(options, &LanguageResources::english());
        let cleaned = normalizer.normalize(Some(&text));
        prop_assert_eq!(cleaned.to_lowercase(), cleaned);
    }
}
