use plain_json_parser::{parse, value::Value};

#[test]
fn parse_basics() {
    let data = r#"
    {
        "hello": "wolrd",
        "vec": [
            {
        "num1": 1,
        "num2": 1.2,
        "num3": 1.2e12,
        "num4": -12
    }
        ],
    "is": false,
    "is_not": true,
    "empty": null
    }
    "#;

    let value = parse(data).unwrap();
    let object = value.as_object().unwrap();

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["hello", "vec", "is", "is_not", "empty"]);

    let nums = object["vec"].as_array().unwrap()[0].as_object().unwrap();
    assert_eq!(nums["num1"], Value::Integer(1));
    assert_eq!(nums["num2"], Value::Float(1.2));
    assert_eq!(nums["num3"], Value::Float(1.2e12));
    assert_eq!(nums["num4"], Value::Integer(-12));

    assert_eq!(object["is"], Value::Bool(false));
    assert!(object["empty"].is_null());
}

mod literal {
    use plain_json_parser::{parse, value::Value};

    #[test]
    fn root_literals() {
        assert_eq!(parse("123").unwrap(), Value::Integer(123));
        assert_eq!(parse("1.5e2").unwrap(), Value::Float(150.0));
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn root_null_is_the_same_null_as_in_containers() {
        let root = parse("null").unwrap();
        let in_array = parse("[null]").unwrap();
        let in_object = parse(r#"{"a": null}"#).unwrap();

        assert_eq!(root, Value::Null);
        assert!(matches!(root, Value::Null));
        assert_ne!(root, Value::from("null"));
        assert!(root.is_null());
        assert_eq!(&root, &in_array.as_array().unwrap()[0]);
        assert_eq!(&root, &in_object.as_object().unwrap()["a"]);
    }

    #[test]
    fn integers_wider_than_32_bits_become_floats() {
        assert_eq!(parse("3000000000").unwrap(), Value::Float(3e9));
        assert_eq!(parse("[-2147483648]").unwrap(), Value::Array(vec![Value::Integer(i32::MIN)]));
    }

    #[test]
    fn literal_delimited_by_brackets() {
        assert_eq!(
            parse("[true,false,null,7]").unwrap(),
            Value::Array(vec![
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
                Value::Integer(7)
            ])
        );
    }
}

mod string {
    use plain_json_parser::{parse, value::Value};

    #[test]
    fn escaped_newline() {
        assert_eq!(parse("\"a\\nb\"").unwrap(), Value::from("a\nb"));
    }

    #[test]
    fn unicode_escape() {
        assert_eq!(parse("\"\\u0041\"").unwrap(), Value::from("A"));
    }

    #[test]
    fn escaped_null_in_key() {
        let data = "{\"foo\\u0000bar\": 42}";

        let parsed = parse(data).unwrap();
        let object = parsed.as_object().unwrap();

        let (key, value) = object.get_index(0).unwrap();

        assert_eq!(key, "foo\u{0}bar");
        assert_eq!(value, &Value::Integer(42));
    }

    #[test]
    fn delimiters_inside_strings_are_content() {
        assert_eq!(
            parse(r#"["[{,:}]", " "]"#).unwrap(),
            Value::Array(vec![Value::from("[{,:}]"), Value::from(" ")])
        );
    }
}

mod errors {
    use plain_json_parser::{error::Kind, parse, value::Position};

    #[test]
    fn unterminated_array() {
        let error = parse("[1,2").unwrap_err();

        assert_eq!(error.kind, Kind::UnclosedArray);
        assert_eq!(error.position, Position { line: 1, col: 4 });
    }

    #[test]
    fn stray_comma_in_object() {
        let error = parse(r#"{"a":1,}"#).unwrap_err();

        assert_eq!(error.kind, Kind::TrailingComma('}'));
        assert_eq!(error.position, Position { line: 1, col: 7 });
        assert_eq!(error.to_string(), "unknown.json(1,7): trailing ',' before '}'");
    }

    #[test]
    fn unmatched_bracket() {
        let error = parse("]").unwrap_err();

        assert_eq!(error.kind, Kind::UnmatchedBracket);
        assert_eq!(error.to_string(), "unknown.json(1,1): unmatched ']'");
    }

    #[test]
    fn malformed_literal() {
        let error = parse("[1, tru]").unwrap_err();

        assert_eq!(error.kind, Kind::MalformedLiteral("tru".to_string()));
        assert_eq!(error.position, Position { line: 1, col: 8 });
    }

    #[test]
    fn unterminated_string() {
        let error = parse("[\"abc").unwrap_err();

        assert_eq!(error.kind, Kind::UnterminatedString);
    }

    #[test]
    fn unterminated_unicode_escape() {
        let error = parse("\"\\u12").unwrap_err();

        assert_eq!(error.kind, Kind::UnterminatedEscape);
    }

    #[test]
    fn invalid_escape() {
        let error = parse(r#""\q""#).unwrap_err();

        assert_eq!(error.kind, Kind::InvalidEscape('q'));
        assert_eq!(error.position, Position { line: 1, col: 3 });
    }

    #[test]
    fn line_is_counted_across_crlf_and_lf() {
        let error = parse("[\r\n1,\n2,\r3 4]").unwrap_err();

        assert_eq!(error.kind, Kind::UnexpectedLiteral("4".to_string()));
        assert_eq!(error.position.line, 4);
        assert_eq!(error.position.col, 4);
    }
}
