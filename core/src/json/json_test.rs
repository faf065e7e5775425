use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::json::{
    MAX_SAFE_INTEGER, from_json_str, json_to_value, to_json_string, to_json_string_pretty,
    value_to_json,
};
use crate::symbol::Symbol;
use crate::value::{Value, ValueKind};

fn read(text: &str) -> Value {
    Value::read_from_string(text).unwrap()
}

fn int(n: i64) -> Value {
    Value::from(n)
}

#[test]
fn test_scalars() {
    assert_eq!(value_to_json(&Value::null()), json!(null));
    assert_eq!(value_to_json(&Value::from(true)), json!(true));
    assert_eq!(value_to_json(&Value::from("s")), json!("s"));
    assert_eq!(
        value_to_json(&Value::symbol("sym")),
        json!({"_type": "symbol", "value": "sym"})
    );
}

#[test]
fn test_integer_range() {
    assert_eq!(value_to_json(&int(MAX_SAFE_INTEGER)), json!(9007199254740991i64));
    assert_eq!(value_to_json(&int(-MAX_SAFE_INTEGER)), json!(-9007199254740991i64));
    assert_eq!(
        value_to_json(&int(MAX_SAFE_INTEGER + 1)),
        json!({"_type": "integer", "value": "9007199254740992"})
    );

    let big = Value::from(-(BigInt::from(1u8) << 80u32));
    let encoded = value_to_json(&big);
    assert_eq!(
        encoded,
        json!({"_type": "integer", "value": "-1208925819614629174706176"})
    );
    assert_eq!(json_to_value(&encoded), big);
}

#[test]
fn test_containers() {
    let value = read("Foo{x:1 y:[2 3]}");
    assert_eq!(
        to_json_string(&value),
        r#"{"_type":"map","elements":[[{"_type":"symbol","value":"x"},1],[{"_type":"symbol","value":"y"},[2,3]]],"tag":"Foo"}"#
    );

    assert_eq!(
        value_to_json(&read("(1 2)")),
        json!({"_type": "tuple", "elements": [1, 2]})
    );
    assert_eq!(
        value_to_json(&read("T{{1}}")),
        json!({"_type": "set", "elements": [1], "tag": "T"})
    );
    assert_eq!(
        value_to_json(&read("S[]")),
        json!({"_type": "sequence", "elements": [], "tag": "S"})
    );
    assert_eq!(
        to_json_string(&read(r#"["z":1 "a":2]"#)),
        r#"{"_type":"ordered map","elements":[["z",1],["a",2]]}"#
    );
}

#[test]
fn test_string_keyed_map_is_plain_object() {
    let value = read(r#"{"b":1 "a":[true null]}"#);
    assert_eq!(to_json_string(&value), r#"{"a":[true,null],"b":1}"#);
    assert_eq!(from_json_str(r#"{"b":1,"a":[true,null]}"#).unwrap(), value);

    // One non-string key forces the elements form.
    assert_eq!(
        value_to_json(&read(r#"{"a":1 2:3}"#)),
        json!({"_type": "map", "elements": [[2, 3], ["a", 1]]})
    );
}

#[test]
fn test_empty_set_and_map_share_braces() {
    assert_eq!(to_json_string(&Value::map([])), "{}");
    assert_eq!(to_json_string(&Value::set([])), "{}");

    let back = from_json_str("{}").unwrap();
    assert_eq!(back.kind(), ValueKind::Map);
    assert_eq!(back.container_size(), Ok(0));
}

#[test]
fn test_round_trip_of_representable_values() {
    let inputs = [
        "null",
        "[1 -2 \"three\" false]",
        "sym",
        "`odd symbol`",
        "0x1ffffffffffffffffffff",
        "T(1 (2 3))",
        "{{1 2 3}}",
        r#"{"k":{"nested":[]}}"#,
        "{1:2 3:{{4}}}",
        "M{a:1}",
        "[c:3 a:1 b:2]",
        "O[:]",
        "Set{{}}",
    ];
    for input in inputs {
        let value = read(input);
        let json = value_to_json(&value);
        assert_eq!(json_to_value(&json), value, "via {}", json);

        let text = to_json_string(&value);
        assert_eq!(from_json_str(&text).unwrap(), value, "via {}", text);
    }
}

#[test]
fn test_reverse_mapping_is_tolerant() {
    // Wrong member types fall back to a plain map.
    assert_eq!(
        json_to_value(&json!({"_type": "sequence", "elements": 5})),
        Value::map([
            (Value::from("_type"), Value::from("sequence")),
            (Value::from("elements"), int(5)),
        ])
    );
    assert_eq!(
        json_to_value(&json!({"_type": "map", "elements": [[1, 2, 3]]})).kind(),
        ValueKind::Map
    );
    assert_eq!(
        json_to_value(&json!({"_type": "unknown"})),
        Value::map([(Value::from("_type"), Value::from("unknown"))])
    );

    // Duplicates keep the first occurrence.
    assert_eq!(
        json_to_value(&json!({"_type": "map", "elements": [[1, 2], [1, 3]]})),
        Value::map([(int(1), int(2))])
    );
    assert_eq!(
        json_to_value(&json!({"_type": "set", "elements": [1, 1]})),
        Value::set([int(1)])
    );

    let om = json_to_value(&json!({"_type": "ordered map", "elements": [["b", 0], ["a", 1], ["b", 2]], "tag": "T"}));
    assert_eq!(om.tagged_container_get_tag(), Ok(Symbol::new("T")));
    assert_eq!(om.to_string(), r#"T["b":0 "a":1]"#);
}

#[test]
fn test_non_string_tag_is_ignored() {
    assert_eq!(
        json_to_value(&json!({"_type": "tuple", "elements": [1, 2], "tag": 5})),
        Value::tuple([int(1), int(2)])
    );
    assert_eq!(
        json_to_value(&json!({"_type": "map", "elements": [["k", null]], "tag": null})),
        Value::map([(Value::from("k"), Value::null())])
    );
}

#[test]
fn test_numbers_that_are_not_integers() {
    assert_eq!(from_json_str("1.5").unwrap(), Value::from("1.5"));
    assert_eq!(from_json_str("[1e3]").unwrap(), Value::seq([Value::from("1e3")]));
    assert_eq!(
        from_json_str("123456789012345678901234567890").unwrap(),
        Value::from("123456789012345678901234567890".parse::<BigInt>().unwrap())
    );
}

#[test]
fn test_pretty() {
    assert_eq!(to_json_string_pretty(&read("[1 2]")), "[\n  1,\n  2\n]");
}

#[test]
fn test_json_syntax_errors() {
    let err = from_json_str("[1, 2").unwrap_err();
    let syntax = err.as_syntax().unwrap();
    assert_eq!(syntax.location.line, 1);
    assert!(
        syntax.message.starts_with("Invalid JSON: EOF while parsing a list"),
        "{}",
        syntax.message
    );
    assert!(!syntax.message.contains(" at line "));

    let err = from_json_str("[1,\n  x]").unwrap_err();
    let syntax = err.as_syntax().unwrap();
    assert_eq!(syntax.location.line, 2);
    assert!(syntax.location.byte_offset >= 4);
    assert!(err.to_string().starts_with("2:"));
}
