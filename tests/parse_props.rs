//! Property-based tests for the CSV state machine

use csvfsm::csv::{CsvParser, ParseOptions, State};
use csvfsm::{parse, parse_chars, parse_with};
use proptest::prelude::*;

/// Unquoted field text: no delimiter, quote or line terminator
fn plain_field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.;:-]{0,8}"
}

/// Records with at least one non-empty field so the line is never blank
fn plain_record_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_field_strategy(), 1..6)
        .prop_filter("line must not be blank", |fields| {
            fields.len() > 1 || !fields[0].is_empty()
        })
}

/// Arbitrary input made mostly of characters the state machine cares about
fn csv_noise_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('"'),
            Just(','),
            Just('\r'),
            Just('\n'),
            Just('a'),
            Just('b'),
            Just('é'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Quote a field the conventional way
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_unquoted_matches_naive_split(records in prop::collection::vec(plain_record_strategy(), 0..8)) {
        let input: String = records
            .iter()
            .map(|r| format!("{}\n", r.join(",")))
            .collect();

        let expected: Vec<Vec<String>> = input
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();

        prop_assert_eq!(parse(&input).to_vecs(), expected);
    }

    #[test]
    fn prop_quoted_fields_preserve_content(
        fields in prop::collection::vec("[a-z,\"\n ]{0,10}", 1..5),
        crlf in any::<bool>(),
    ) {
        let terminator = if crlf { "\r\n" } else { "\n" };
        let line = fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",");
        let input = format!("{line}{terminator}");

        let doc = parse_with(&input, ParseOptions::new().strict(true)).unwrap();
        prop_assert_eq!(doc.to_vecs(), vec![fields]);
    }

    #[test]
    fn prop_chunked_feed_matches_one_shot(input in csv_noise_strategy(), split in 1usize..7) {
        let expected = parse(&input);

        let mut parser = CsvParser::new();
        let chars: Vec<char> = input.chars().collect();
        for chunk in chars.chunks(split) {
            let chunk: String = chunk.iter().collect();
            parser.feed_str(&chunk).unwrap();
        }

        prop_assert_eq!(parser.finish().unwrap(), expected);
    }

    #[test]
    fn prop_parse_chars_matches_parse(input in csv_noise_strategy()) {
        prop_assert_eq!(parse_chars(input.chars()), parse(&input));
    }

    #[test]
    fn prop_no_record_open_between_records(input in csv_noise_strategy()) {
        let mut parser = CsvParser::new();
        parser.feed_str(&input).unwrap();
        let state = parser.state();
        let completed = parser.records().len();
        let doc = parser.finish().unwrap();

        // Only an open record can add one more at end of input
        if state.has_open_record() {
            prop_assert_eq!(doc.len(), completed + 1);
        } else {
            prop_assert!(matches!(state, State::RecordStart | State::CReturnInStart));
            prop_assert_eq!(doc.len(), completed);
        }
    }

    #[test]
    fn prop_no_empty_records(input in csv_noise_strategy()) {
        prop_assert!(parse(&input).iter().all(|record| !record.is_empty()));
    }

    #[test]
    fn prop_strict_accepts_what_it_finishes(input in csv_noise_strategy()) {
        // Whenever strict mode succeeds it agrees with lenient mode
        if let Ok(doc) = parse_with(&input, ParseOptions::new().strict(true)) {
            prop_assert_eq!(doc, parse(&input));
        }
    }
}
