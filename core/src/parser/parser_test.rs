use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

use num_bigint::BigInt;

use pretty_assertions::assert_eq;

use crate::error::PathError;
use crate::parser::{FromParser, NavStep, PathParser, parse_opt_to, parse_to};
use crate::symbol::Symbol;
use crate::value::{Integer, ToValue, Value, ValueKind};

fn read(text: &str) -> Value {
    Value::read_from_string(text).unwrap()
}

fn int(n: i64) -> Value {
    Value::from(n)
}

fn parser(value: &Value) -> PathParser<'_> {
    PathParser::set_self_check_on_construct(true);
    PathParser::new(value)
}

fn message<T: std::fmt::Debug>(result: Result<T, PathError>) -> String {
    result.unwrap_err().to_string()
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Data {
    x: i32,
    y: i32,
}

impl FromParser for Data {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.check_tagged_map_tag("Data")?;
        Ok(Data {
            x: parse_to(&p.map_get_value_at_sym("x")?)?,
            y: parse_to(&p.map_get_value_at_sym("y")?)?,
        })
    }
}

impl ToValue for Data {
    fn to_value(&self) -> Value {
        Value::map([
            (Value::symbol("x"), self.x.to_value()),
            (Value::symbol("y"), self.y.to_value()),
        ])
        .with_tag(Symbol::new("Data"))
    }
}

#[test]
fn test_bool() {
    assert_eq!(parse_to::<bool>(&parser(&Value::from(true))), Ok(true));
    assert_eq!(parse_to::<bool>(&parser(&Value::from(false))), Ok(false));
    assert_eq!(
        message(parse_to::<bool>(&parser(&Value::null()))),
        "At GDV path <top>: expected symbol `true` or `false`, not null"
    );
}

#[test]
fn test_integers() {
    assert_eq!(parse_to::<i32>(&parser(&int(3))), Ok(3));
    assert_eq!(parse_to::<i64>(&parser(&int(i64::MIN))), Ok(i64::MIN));
    assert_eq!(
        message(parse_to::<i32>(&parser(&int(i64::MAX)))),
        "At GDV path <top>: number too large to represent as `i32`: 9223372036854775807"
    );
    assert_eq!(
        message(parse_to::<i32>(&parser(&Value::null()))),
        "At GDV path <top>: expected small integer, not symbol"
    );
}

#[test]
fn test_string() {
    assert_eq!(parse_to::<String>(&parser(&Value::from("abc"))), Ok("abc".to_owned()));
    assert_eq!(
        message(parse_to::<String>(&parser(&Value::symbol("abc")))),
        "At GDV path <top>: expected string, not symbol"
    );
}

#[test]
fn test_user_type() {
    let value = read("Data{x:3 y:4}");
    assert_eq!(parse_to::<Data>(&parser(&value)), Ok(Data { x: 3, y: 4 }));

    let p = parser(&value);
    assert!(message(p.map_get_value_at_sym("z")).ends_with("key z, but it does not"));
    assert_eq!(
        message(p.tuple_get_value_at(0)),
        "At GDV path <top>: expected tuple, not tagged map"
    );
    assert_eq!(
        message(p.map_get_value_at_sym("x").unwrap().symbol_get()),
        "At GDV path <top>.x: expected symbol, not small integer"
    );

    let other = read("Other{x:1 y:2}");
    assert_eq!(
        message(parse_to::<Data>(&parser(&other))),
        "At GDV path <top>: expected container to have tag Data, but it instead has tag Other"
    );
}

#[test]
fn test_collections() {
    let value = read("[Data{x:1 y:2} Data{x:3 y:4}]");
    assert_eq!(
        parse_to::<Vec<Data>>(&parser(&value)),
        Ok(vec![Data { x: 1, y: 2 }, Data { x: 3, y: 4 }])
    );

    let p = parser(&value);
    assert!(message(p.sequence_get_value_at(2)).ends_with("index 2, but it only has 2 elements"));
    assert_eq!(
        message(p.sequence_get_value_at(1).unwrap().sequence_get_value_at(0)),
        "At GDV path <top>[1]: expected sequence, not tagged map"
    );

    let bad = read("[1 x]");
    assert_eq!(
        message(parse_to::<Vec<i32>>(&parser(&bad))),
        "At GDV path <top>[1]: expected small integer, not symbol"
    );

    let set = read("{{2 3 5 7}}");
    assert_eq!(
        parse_to::<BTreeSet<i32>>(&parser(&set)),
        Ok(BTreeSet::from([2, 3, 5, 7]))
    );

    let map = read(r#"{"bar":[Data{x:5 y:6}] "foo":[Data{x:1 y:2}]}"#);
    let parsed = parse_to::<BTreeMap<String, Vec<Data>>>(&parser(&map)).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed["bar"], vec![Data { x: 5, y: 6 }]);

    let bad_map = read(r#"{"foo":[Data{x:1 y:"2"}]}"#);
    assert_eq!(
        message(parse_to::<BTreeMap<String, Vec<Data>>>(&parser(&bad_map))),
        r#"At GDV path <top>."foo"[0].y: expected small integer, not string"#
    );
}

#[test]
fn test_optional_values() {
    let not_a_map = Value::null();
    assert_eq!(
        message(parser(&not_a_map).map_get_value_at_sym_opt("foo")),
        "At GDV path <top>: expected map, not symbol"
    );

    let mut map = Value::map([]);
    assert!(parser(&map).map_get_value_at_sym_opt("foo").unwrap().is_none());
    map.map_set_value_at(Value::symbol("foo"), int(3)).unwrap();
    let p = parser(&map);
    let found = p.map_get_value_at_sym_opt("foo").unwrap().unwrap();
    assert_eq!(found.value(), &int(3));

    assert_eq!(parse_opt_to::<i32>(Some(found)), Ok(3));
    assert_eq!(parse_opt_to::<i32>(p.map_get_value_at_sym_opt("bar").unwrap()), Ok(0));
    assert_eq!(parse_to::<Option<i32>>(&parser(&Value::null())), Ok(None));

    let with_str = read(r#"{s1:"v" "intList":[1 2 3]}"#);
    let p = parser(&with_str);
    assert_eq!(
        parse_opt_to::<Vec<i32>>(p.map_get_value_at_str_opt("intList").unwrap()),
        Ok(vec![1, 2, 3])
    );
    assert_eq!(p.map_get_value_at_str("intList").unwrap().container_size(), Ok(3));
    assert!(p.map_get_value_at_str_opt("s1").unwrap().is_none());
}

fn sample() -> Value {
    read(
        r#"{
          1:2
          three:"four"
          1234567890123456789012345678901234567890:-17
          seq:["one" two 3 (4 "five" {{6 "seven" [8:"nine"]}})]
          [1 2 3]:4
          omap:[3:"three" 2:"two" 1:"one" zero:0]
          tmap:tmaptag{"a":"b"}
          tomap:tomaptag["c":"d"]
        }"#,
    )
}

#[test]
fn test_paths() {
    let value = sample();
    let p = parser(&value);
    let big = read("1234567890123456789012345678901234567890");
    let seq = p.map_get_value_at_sym("seq").unwrap();
    let set = seq
        .sequence_get_value_at(3)
        .unwrap()
        .tuple_get_value_at(2)
        .unwrap();
    let om_key = read(r#"[8:"nine"]"#);

    let cases: Vec<(Result<(), PathError>, &str)> = vec![
        (
            p.map_get_key_at(&int(1)).unwrap().check_is_symbol(),
            "<top>@1: expected symbol, not small integer",
        ),
        (
            p.map_get_key_at(&read("[1 2 3]"))
                .unwrap()
                .sequence_get_value_at(0)
                .unwrap()
                .check_is_symbol(),
            "<top>@[1 2 3][0]: expected symbol, not small integer",
        ),
        (
            p.map_get_value_at(&int(1)).unwrap().check_is_symbol(),
            "<top>.1: expected symbol, not small integer",
        ),
        (
            p.map_get_key_at(&Value::symbol("three")).unwrap().check_is_integer(),
            "<top>@three: expected integer, not symbol",
        ),
        (
            p.map_get_value_at_sym("three").unwrap().check_is_integer(),
            "<top>.three: expected integer, not string",
        ),
        (
            p.map_get_value_at(&big).unwrap().check_is_map(),
            "<top>.1234567890123456789012345678901234567890: expected map, not small integer",
        ),
        (
            seq.sequence_get_value_at(1).unwrap().check_is_integer(),
            "<top>.seq[1]: expected integer, not symbol",
        ),
        (
            seq.sequence_get_value_at(3).unwrap().check_is_integer(),
            "<top>.seq[3]: expected integer, not tuple",
        ),
        (
            set.check_is_symbol(),
            "<top>.seq[3][2]: expected symbol, not set",
        ),
        (
            set.set_get_value(&int(6)).unwrap().check_is_symbol(),
            "<top>.seq[3][2]@6: expected symbol, not small integer",
        ),
        (
            set.set_get_value(&om_key).unwrap().check_is_symbol(),
            r#"<top>.seq[3][2]@[8:"nine"]: expected symbol, not ordered map"#,
        ),
        (
            set.set_get_value(&om_key)
                .unwrap()
                .ordered_map_get_value_at(&int(8))
                .unwrap()
                .check_is_symbol(),
            r#"<top>.seq[3][2]@[8:"nine"].8: expected symbol, not string"#,
        ),
        (
            seq.check_is_pomap(),
            "<top>.seq: expected (possibly ordered) map, not sequence",
        ),
    ];
    for (result, expected) in cases {
        assert_eq!(message(result), format!("At GDV path {}", expected));
    }
}

#[test]
fn test_relayed_accessors() {
    let value = sample();
    let p = parser(&value);
    let big = read("1234567890123456789012345678901234567890");
    let seq = p.map_get_value_at_sym("seq").unwrap();

    assert_eq!(p.map_get_value_at(&int(1)).unwrap().small_integer_get(), Ok(2));
    assert_eq!(
        message(p.map_get_value_at_sym("three").unwrap().integer_get()),
        "At GDV path <top>.three: expected integer, not string"
    );
    assert_eq!(p.map_get_value_at(&int(1)).unwrap().integer_is_negative(), Ok(false));
    assert_eq!(p.map_get_value_at(&big).unwrap().integer_is_negative(), Ok(true));
    assert_eq!(p.map_get_key_at(&big).unwrap().integer_is_negative(), Ok(false));
    assert_eq!(
        Value::Integer(p.map_get_key_at(&big).unwrap().integer_get().unwrap().clone()),
        big
    );

    assert_eq!(seq.sequence_get_value_at(3).unwrap().tuple_get().unwrap()[0], int(4));
    assert_eq!(
        message(seq.sequence_get_value_at(2).unwrap().tuple_get()),
        "At GDV path <top>.seq[2]: expected tuple, not small integer"
    );
    assert_eq!(
        message(seq.sequence_get_value_at(3).unwrap().tuple_get_value_at(3)),
        "At GDV path <top>.seq[3]: expected tuple to have element at index 3, but it only has 3 elements"
    );

    let set = seq.sequence_get_value_at(3).unwrap().tuple_get_value_at(2).unwrap();
    assert!(set.is_set());
    assert_eq!(set.set_get_value(&int(6)).unwrap().small_integer_get(), Ok(6));
    assert_eq!(
        message(set.set_get_value(&int(66))),
        "At GDV path <top>.seq[3][2]: expected set to have element 66, but it does not"
    );

    assert_eq!(
        message(p.map_get_key_at(&Value::symbol("nonexist"))),
        "At GDV path <top>: expected map to have key nonexist, but it does not"
    );
    assert_eq!(p.map_contains_sym("seq"), Ok(true));
    assert_eq!(p.map_contains_sym("nonexist"), Ok(false));
}

#[test]
fn test_ordered_maps_and_tags() {
    let value = sample();
    let p = parser(&value);
    let omap = p.map_get_value_at_sym("omap").unwrap();

    assert_eq!(omap.ordered_map_get().unwrap().value_at_index(0), Some(&Value::from("three")));
    assert_eq!(omap.check_is_pomap(), Ok(()));
    assert_eq!(omap.ordered_map_get_key_at(&int(1)).unwrap().value(), &int(1));
    assert_eq!(
        message(omap.ordered_map_get_key_at(&int(4))),
        "At GDV path <top>.omap: expected ordered map to have key 4, but it does not"
    );
    assert_eq!(
        omap.ordered_map_get_value_at(&int(1)).unwrap().value(),
        &Value::from("one")
    );
    assert_eq!(
        message(omap.ordered_map_get_value_at(&int(4))),
        "At GDV path <top>.omap: expected ordered map to have key 4, but it does not"
    );
    assert_eq!(omap.ordered_map_contains_sym("x"), Ok(false));
    assert_eq!(omap.ordered_map_get_value_at_sym("zero").unwrap().value(), &int(0));

    let tmap = p.map_get_value_at_sym("tmap").unwrap();
    assert_eq!(tmap.tagged_container_get_tag(), Ok(Symbol::new("tmaptag")));
    assert_eq!(tmap.tagged_container_get_tag_name(), Ok("tmaptag"));
    assert_eq!(
        message(tmap.check_container_tag("z")),
        "At GDV path <top>.tmap: expected container to have tag z, but it instead has tag tmaptag"
    );
    assert_eq!(
        message(tmap.check_tagged_ordered_map_tag("tomaptag")),
        "At GDV path <top>.tmap: expected tagged ordered map, not tagged map"
    );
    assert_eq!(tmap.check_tagged_map_tag("tmaptag"), Ok(()));
    assert_eq!(
        p.map_get_value_at_sym("tomap").unwrap().check_tagged_ordered_map_tag("tomaptag"),
        Ok(())
    );
    assert_eq!(
        message(parser(&int(1)).check_container_tag("x")),
        "At GDV path <top>: expected tagged container, not small integer"
    );
}

#[test]
fn test_error_outlives_parser() {
    let err = {
        let value = Value::map([(int(1), int(2))]);
        let p = PathParser::new(&value);
        p.map_get_value_at(&int(1)).unwrap().check_is_tagged_ordered_map().unwrap_err()
    };
    assert_eq!(
        err.to_string(),
        "At GDV path <top>.1: expected tagged ordered map, not small integer"
    );
}

#[test]
fn test_simple_queries() {
    let value = sample();
    let p = parser(&value);
    assert_eq!(p.kind_name(), "Map");
    assert_eq!(p.super_kind(), ValueKind::Map);
    assert_eq!(p.map_get_key_at(&int(1)).unwrap().super_kind(), ValueKind::Integer);
    assert!(!p.is_symbol());
    assert!(!p.is_tagged_pomap());
    assert!(p.is_pomap());
    assert!(!p.is_ordered_container());
    assert!(p.is_unordered_container());
    assert!(!p.is_null());
    assert!(parser(&Value::null()).is_null());
    assert!(parser(&Value::from(true)).is_bool());
    assert_eq!(p.container_is_empty(), Ok(false));
    assert_eq!(
        p.map_get_key_at(&read("[1 2 3]")).unwrap().sequence_get().unwrap(),
        &vec![int(1), int(2), int(3)]
    );
}

#[test]
fn test_clone_keeps_path() {
    let value = sample();
    let p = parser(&value);
    let seq = p.map_get_value_at_sym("seq").unwrap();
    let copy = seq.clone();
    assert_eq!(copy.path_string(), "<top>.seq");
    assert_eq!(copy.sequence_get_value_at(0).unwrap().value(), &Value::from("one"));
    assert!(std::ptr::eq(copy.top(), &value));
    assert_eq!(copy.self_check(), Ok(()));
}

#[test]
fn test_elements_and_entries() {
    let value = read("[a:1 b:(x y)]");
    let p = parser(&value);
    let entries = p.entries().unwrap();
    let paths: Vec<_> = entries
        .iter()
        .map(|(k, v)| (k.path_string(), v.path_string()))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("<top>@a".to_owned(), "<top>.a".to_owned()),
            ("<top>@b".to_owned(), "<top>.b".to_owned()),
        ]
    );

    let tuple = &entries[1].1;
    let elements = tuple.elements().unwrap();
    assert_eq!(elements[1].path_string(), "<top>.b[1]");
    assert_eq!(elements[1].self_check(), Ok(()));
    assert!(matches!(elements[1].path().last(), Some(NavStep::Index(1))));
    assert_eq!(
        message(entries[0].1.elements()),
        "At GDV path <top>.a: expected sequence or tuple, not small integer"
    );
}

/// Build a value from `data` and parse it back.
fn check_round_trip<T: ToValue + FromParser + PartialEq + Debug>(data: T) {
    let value = data.to_value();
    assert_eq!(parse_to::<T>(&parser(&value)), Ok(data), "via {}", value);
}

#[test]
fn test_to_value_shapes() {
    assert_eq!(Data { x: 1, y: 2 }.to_value().to_string(), "Data{x:1 y:2}");
    assert_eq!(vec![Some(1), None].to_value().to_string(), "[1 null]");
    assert_eq!(
        BTreeMap::from([("b", 2u32), ("a", 1)]).to_value().to_string(),
        r#"{"a":1 "b":2}"#
    );
    assert_eq!(BTreeSet::from([3i64, 1]).to_value().to_string(), "{{1 3}}");
    assert_eq!(Box::new(Symbol::new("s")).to_value(), Value::symbol("s"));
    assert_eq!(VecDeque::from([true]).to_value().to_string(), "[true]");
}

#[test]
fn test_to_value_then_parse_gives_back_equal_data() {
    check_round_trip(true);
    check_round_trip(-5i32);
    check_round_trip(7usize);
    check_round_trip(u32::MAX);
    check_round_trip(u64::MAX);
    check_round_trip(i64::MIN);
    check_round_trip(Integer::from(BigInt::from(-3) << 90u32));
    check_round_trip("text".to_owned());
    check_round_trip(Symbol::new("sym"));
    check_round_trip(read("T(1 {{2}} [a:b])"));
    check_round_trip(vec![vec![1i64, 2], vec![]]);
    check_round_trip(VecDeque::from([String::from("x"), String::from("y")]));
    check_round_trip(BTreeSet::from([Data { x: 1, y: 2 }, Data { x: 0, y: 5 }]));
    check_round_trip(BTreeMap::from([
        ("k".to_owned(), vec![Some(1), None]),
        ("j".to_owned(), vec![]),
    ]));
    check_round_trip(Box::new(Data { x: 9, y: -9 }));
    check_round_trip(Some(Box::new(Data { x: 0, y: 0 })));
    check_round_trip(None::<Box<Data>>);
}

#[test]
fn test_u64_range() {
    assert_eq!(
        message(parse_to::<u64>(&parser(&int(-1)))),
        "At GDV path <top>: number too large to represent as `u64`: -1"
    );
    let too_big = Value::from(BigInt::from(1u8) << 64u32);
    assert_eq!(
        message(parse_to::<u64>(&parser(&too_big))),
        "At GDV path <top>: number too large to represent as `u64`: 0x10000000000000000"
    );
}

#[test]
fn test_box_keeps_path_in_errors() {
    let value = read("[Data{x:1 y:z}]");
    assert_eq!(
        message(parse_to::<Vec<Box<Data>>>(&parser(&value))),
        "At GDV path <top>[0].y: expected small integer, not symbol"
    );
}

#[test]
fn test_path_through_sequence_and_tuple() {
    let value = read(r#"{seq:[1 "two" (3 "three")]}"#);
    let p = parser(&value);
    let err = p
        .map_get_value_at_sym("seq")
        .and_then(|seq| seq.sequence_get_value_at(2))
        .and_then(|tuple| tuple.tuple_get_value_at(1))
        .and_then(|element| element.check_is_symbol())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "At GDV path <top>.seq[2][1]: expected symbol, not string"
    );
}
