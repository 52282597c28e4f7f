use fixup::scanner::{scan, scan_with, terminator, Balance, Delimiters};
use proptest::prelude::*;
use rstest::rstest;

#[cfg(test)]
mod scanner_examples {
    use super::*;

    #[test]
    fn test_nested_parens_consume_all_lines() {
        let lines = ["foo(", "  bar(", "  );", ");"];
        let statement = scan_with(&lines, 0, Delimiters::Parens, terminator::always).unwrap();

        assert_eq!(statement.start, 0);
        assert_eq!(statement.end, 3, "paren balance goes 1, 2, 1, 0");
        assert_eq!(statement.text, "foo(  bar(  ););");
    }

    #[test]
    fn test_self_terminating_line() {
        let lines = ["print('hello');", "next();"];
        let statement = scan(&lines, 0, terminator::closes_call).unwrap();

        assert_eq!(statement.end, 0, "should stop on the start line");
        assert_eq!(statement.text, "print('hello');");
        assert_eq!(statement.line_count(), 1);
    }

    #[test]
    fn test_waits_for_terminator_after_balance_closes() {
        let lines = ["print('a' + {\n", "  'k': v,\n", "}\n", ".toString());\n", "tail();\n"];
        let statement = scan(&lines, 0, terminator::closes_call).unwrap();

        assert_eq!(statement.end, 3);
        assert!(statement.text.ends_with(".toString());\n"));
    }

    #[test]
    fn test_unbalanced_runs_to_end() {
        let lines = ["call(", "  a,", "  b,"];
        let statement = scan(&lines, 0, terminator::always).unwrap();

        assert_eq!(statement.end, 2, "best effort returns the rest of the input");
        assert_eq!(statement.text, "call(  a,  b,");
    }

    #[test]
    fn test_scan_from_middle() {
        let lines = ["a();", "b({", "});", "c();"];
        let statement = scan(&lines, 1, terminator::closes_call).unwrap();
        assert_eq!((statement.start, statement.end), (1, 2));
    }

    #[test]
    fn test_delimiters_in_strings_are_counted() {
        // Known blind spot: the brace inside the literal keeps the scan open.
        let lines = ["print('{');", "x();", "y();"];
        let statement = scan(&lines, 0, terminator::closes_call).unwrap();
        assert_eq!(statement.end, 2);
    }

    #[rstest]
    #[case("{{(", 2, 1)]
    #[case("})", -1, -1)]
    #[case("f(a, {b: (c)})", 0, 0)]
    #[case("plain text", 0, 0)]
    fn test_balance_of_line(#[case] line: &str, #[case] braces: i32, #[case] parens: i32) {
        assert_eq!(Balance::of(line, Delimiters::Both), Balance { braces, parens });
    }

    #[rstest]
    #[case(Delimiters::Braces, Balance { braces: 1, parens: 0 })]
    #[case(Delimiters::Parens, Balance { braces: 0, parens: 2 })]
    fn test_balance_respects_delimiters(#[case] delimiters: Delimiters, #[case] expected: Balance) {
        assert_eq!(Balance::of("{((", delimiters), expected);
    }
}

fn code_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a".to_string()),
            Just(" ".to_string()),
            Just(";".to_string()),
            Just("'x'".to_string()),
            Just(",".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn any_line() -> impl Strategy<Value = String> {
    "[a-z(){};' ]{0,12}"
}

proptest! {
    #[test]
    fn prop_never_panics_and_stays_in_range(
        lines in prop::collection::vec(any_line(), 1..20),
        start_seed in 0usize..20,
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let start = start_seed % refs.len();
        let statement = scan(&refs, start, terminator::closes_call).unwrap();

        prop_assert_eq!(statement.start, start);
        prop_assert!(statement.end >= start && statement.end < refs.len());
        prop_assert_eq!(statement.text.as_ref(), refs[start..=statement.end].concat());
    }

    #[test]
    fn prop_never_terminating_consumes_everything(
        lines in prop::collection::vec(code_line(), 1..20),
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let statement = scan(&refs, 0, terminator::never).unwrap();

        prop_assert_eq!(statement.end, refs.len() - 1);
        prop_assert_eq!(statement.text.as_ref(), refs.concat());
    }

    #[test]
    fn prop_result_is_minimal(
        lines in prop::collection::vec(any_line(), 1..20),
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let statement = scan(&refs, 0, terminator::closes_call).unwrap();

        // No shorter prefix is both closed and terminated.
        for end in 0..statement.end {
            let text = refs[..=end].concat();
            let balance = Balance::of(&text, Delimiters::Both);
            prop_assert!(balance.is_open() || !terminator::closes_call(&text));
        }
    }
}
