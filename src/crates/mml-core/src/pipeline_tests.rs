// End-to-end checks of the whole conversion pipeline

#[cfg(test)]
mod tests {
    use crate::convert::{convert_fragments, convert_voice};
    use crate::compact::compact;
    use crate::percussion::entries;
    use crate::pitch::{absolute, Accidental};
    use proptest::prelude::*;

    fn full(raw: &str) -> String {
        compact(&convert_voice(raw))
    }

    fn rendered(raw: &str) -> Vec<String> {
        convert_fragments(raw).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_bare_c_stays_unmapped() {
        assert_eq!(convert_voice("c"), "l4 n48");
        assert_eq!(full("c"), "l4n48");
    }

    #[test]
    fn test_octave_two_a() {
        assert_eq!(absolute(2, 'a', Accidental::Natural), Ok(35));
        assert_eq!(absolute(2, 'a', Accidental::Sharp), Ok(34));
    }

    #[test]
    fn test_every_table_key_round_trips() {
        for (key, mapped) in entries() {
            assert_eq!(full(&format!("n{}", key)), format!("l4n{}", mapped), "key {}", key);
        }
    }

    #[test]
    fn test_tie_example() {
        assert_eq!(rendered("c&c"), vec!["l4 n48", "&", "l4 r"]);
        assert_eq!(convert_voice("c&c"), "l4 n48 & l4 r");
        assert_eq!(full("c&c"), "l4n48&r");
    }

    #[test]
    fn test_drum_line() {
        // octave 2 drum line with a length change
        assert_eq!(full("o2 l8 c d f+ d c16 c16 r8"), "l8n53n57n69n57l16n53n53l8r");
    }

    #[test]
    fn test_relative_then_absolute_mapped_once() {
        // 35 maps to 64; 64 must not be looked up a second time
        assert_eq!(full("o2 a n35 n64"), "l4n64n64n64");
    }

    #[test]
    fn test_passthrough_survives_compaction() {
        assert_eq!(full("t120 v12 l16 o3 c c"), "t120v12l16n65n65");
    }

    #[test]
    fn test_garbage_degrades_to_empty() {
        assert_eq!(full("XYZ!?"), "");
        assert_eq!(full(""), "");
    }

    fn note_level_token() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "c", "d8", "e4.", "f+", "g-16", "a", "b2.", "r", "r16", "r.", "n35", "n23.",
            "n47", "l8", "l16.", "l4", "o1", "o2", "o3", ">", "<", "&",
        ])
    }

    proptest! {
        #[test]
        fn compaction_is_idempotent(tokens in prop::collection::vec(note_level_token(), 0..40)) {
            let once = full(&tokens.concat());
            prop_assert_eq!(compact(&once), once.clone());
        }

        #[test]
        fn output_has_no_whitespace(input in "[-a-gnorlvt0-9<>&.+ ]{0,60}") {
            prop_assert!(!full(&input).chars().any(char::is_whitespace));
        }

        #[test]
        fn conversion_is_total(input in any::<String>()) {
            let _ = full(&input);
        }

        #[test]
        fn octave_tokens_never_reach_output(tokens in prop::collection::vec(note_level_token(), 0..40)) {
            let converted = convert_voice(&tokens.join(" "));
            prop_assert!(!converted.contains('o'));
            prop_assert!(!converted.contains('<'));
            prop_assert!(!converted.contains('>'));
        }
    }
}
