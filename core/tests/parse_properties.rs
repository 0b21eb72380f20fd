use optline_core::{CommandLine, CommandLineError, ErrorKind, OptionDetails, OptionSchema};

fn required(names: &[&str]) -> OptionSchema {
    names
        .iter()
        .fold(OptionSchema::new(), |schema, name| schema.with_valued(*name, ""))
}

fn not_required(names: &[&str]) -> OptionSchema {
    names
        .iter()
        .fold(OptionSchema::new(), |schema, name| schema.with_flag(*name, ""))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn mixed_binding_syntaxes_and_positionals() {
    let schema = required(&["--a", "--b"]);
    let cl = CommandLine::parse(["prog", "--a", "x", "--b=y", "pos1"], &schema).unwrap();

    assert_eq!(cl.program(), "prog");
    assert_eq!(
        cl.options()["--a"],
        OptionDetails {
            values: vec!["x".to_string()],
            last_index: 1
        }
    );
    assert_eq!(
        cl.options()["--b"],
        OptionDetails {
            values: vec!["y".to_string()],
            last_index: 3
        }
    );
    assert_eq!(cl.arguments(), ["pos1"]);
}

#[test]
fn lone_flag_records_empty_placeholder() {
    let schema = not_required(&["--flag"]);
    let cl = CommandLine::parse(["prog", "--flag"], &schema).unwrap();

    assert_eq!(cl.option_values("--flag").unwrap(), [""]);
    assert_eq!(cl.option_last_index("--flag").unwrap(), 1);
}

#[test]
fn non_numeric_value_is_conversion_failure() {
    let schema = required(&["--n"]);
    let cl = CommandLine::parse(["prog", "--n=abc"], &schema).unwrap();

    let err = cl.option_value_as_int("--n", 0, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConversionFailure);
    assert_eq!(
        err,
        CommandLineError::ConversionFailure {
            option: "--n".to_string(),
            value: "abc".to_string()
        }
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn flag_without_value_at_any_position() {
    let schema = not_required(&["--flag"]);
    for leading in 0..5 {
        let mut tokens = vec!["prog".to_string()];
        tokens.extend((0..leading).map(|i| format!("p{i}")));
        tokens.push("--flag".to_string());

        let cl = CommandLine::parse(tokens, &schema).unwrap();
        assert_eq!(cl.option_values("--flag").unwrap(), [""]);
        assert_eq!(cl.option_last_index("--flag").unwrap(), leading + 1);
        assert_eq!(cl.arguments().len(), leading);
    }
}

#[test]
fn both_syntaxes_store_identical_values() {
    let schema = required(&["--v"]);
    for value in ["plain", "", "with space", "=", "a=b", "--v", "-1", "ünïcode"] {
        let attached = format!("--v={value}");
        let a = CommandLine::parse(["prog", attached.as_str()], &schema).unwrap();
        let b = CommandLine::parse(["prog", "--v", value], &schema).unwrap();

        assert_eq!(a.option_value("--v").unwrap(), value);
        assert_eq!(b.option_value("--v").unwrap(), value);
        assert_eq!(a.options(), b.options());
    }
}

#[test]
fn attached_value_on_flag_is_always_unexpected() {
    let schema = not_required(&["--flag"]);
    for token in ["--flag=", "--flag=1", "--flag==", "--flag=x=y"] {
        let err = CommandLine::parse(["prog", token], &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedValue, "token {token}");
        assert_eq!(err.option(), "--flag");
    }
}

#[test]
fn trailing_value_flag_is_missing_value() {
    let schema = required(&["--out"]);
    for tokens in [
        vec!["prog", "--out"],
        vec!["prog", "a", "--out"],
        vec!["prog", "--out", "x", "--out"],
    ] {
        let err = CommandLine::parse(tokens, &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingValue);
        assert_eq!(err.option(), "--out");
    }
}

#[test]
fn undeclared_flag_is_unknown_with_or_without_value() {
    let schema = required(&["--known"]);
    for (token, name) in [
        ("--other", "--other"),
        ("--other=1", "--other"),
        ("--other=", "--other"),
        ("--=x", "--"),
    ] {
        let err = CommandLine::parse(["prog", token], &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOption);
        assert_eq!(err.option(), name);
    }
}

#[test]
fn failure_after_valid_tokens_still_fails() {
    let schema = required(&["--a"]);
    let err = CommandLine::parse(["prog", "--a", "1", "pos", "--zzz"], &schema).unwrap_err();
    assert_eq!(
        err,
        CommandLineError::UnknownOption {
            option: "--zzz".to_string()
        }
    );
}

#[test]
fn positional_order_is_preserved() {
    let mut schema = required(&["--in"]);
    schema.insert("--all", optline_core::OptionAttributes::flag(""));

    let cl = CommandLine::parse(
        [
            "prog", "one", "--in", "consumed", "two", "--all", "-x", "--", "--in=also", "three",
        ],
        &schema,
    )
    .unwrap();

    assert_eq!(cl.arguments(), ["one", "two", "-x", "--", "three"]);
    assert_eq!(cl.option_values("--in").unwrap(), ["consumed", "also"]);
}

#[test]
fn repeated_occurrences_accumulate_in_order() {
    let schema = required(&["--tag"]);
    let cl = CommandLine::parse(
        ["prog", "--tag", "a", "--tag=b", "x", "--tag", "a"],
        &schema,
    )
    .unwrap();

    assert_eq!(cl.option_values("--tag").unwrap(), ["a", "b", "a"]);
    assert_eq!(cl.option_last_index("--tag").unwrap(), 5);
    assert_eq!(cl.option_value("--tag").unwrap(), "a");
}

#[test]
fn integer_accessors_round_trip_and_reject() {
    let schema = required(&["--n"]);

    for value in [i32::MIN, -42, -1, 0, 1, 7, i32::MAX] {
        let token = format!("--n={value}");
        let cl = CommandLine::parse(["prog", token.as_str()], &schema).unwrap();
        assert_eq!(cl.option_value_as_int("--n", i32::MIN, i32::MAX).unwrap(), value);
    }

    for value in [0u64, 1, 1000, u64::MAX] {
        let token = format!("--n={value}");
        let cl = CommandLine::parse(["prog", token.as_str()], &schema).unwrap();
        assert_eq!(cl.option_value_as_unsigned("--n", 0, u64::MAX).unwrap(), value);
    }

    for (raw, kind) in [
        ("11", ErrorKind::RangeViolation),
        ("-1", ErrorKind::RangeViolation),
        ("ten", ErrorKind::ConversionFailure),
        ("5x", ErrorKind::ConversionFailure),
        ("", ErrorKind::ConversionFailure),
        ("99999999999", ErrorKind::ConversionFailure),
    ] {
        let cl = CommandLine::parse(["prog", "--n", raw], &schema).unwrap();
        assert_eq!(
            cl.option_value_as_int("--n", 0, 10).unwrap_err().kind(),
            kind,
            "value {raw:?}"
        );
    }

    let cl = CommandLine::parse(["prog", "--n", "-1"], &schema).unwrap();
    assert_eq!(
        cl.option_value_as_unsigned("--n", 0, 10).unwrap_err().kind(),
        ErrorKind::ConversionFailure
    );
}

#[test]
fn parse_result_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let schema = required(&["--a"]);
    let cl = CommandLine::parse(["prog", "--a", "1"], &schema).unwrap();
    assert_send_sync(&cl);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(cl.option_value("--a").unwrap(), "1"));
        }
    });
}
