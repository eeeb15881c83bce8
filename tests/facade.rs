use std::collections::BTreeMap;

use vc_inspect::structs::{self, StructView, Value, derive::Record};

#[derive(Record)]
struct Address {
    #[tag(map = "city,omitempty")]
    pub city: String,
    pub zip: u32,
}

#[derive(Record)]
struct Person {
    #[tag(map = "full_name")]
    pub name: String,
    #[tag(map = ",omitnested")]
    pub home: Address,
    #[tag(map = ",flatten")]
    pub work: Option<Address>,
    pub labels: BTreeMap<String, Address>,
    #[tag(map = ",string")]
    pub age: u8,
    note: String,
}

fn person() -> Person {
    Person {
        name: "ann".into(),
        home: Address { city: "Oslo".into(), zip: 150 },
        work: Some(Address { city: String::new(), zip: 42 }),
        labels: BTreeMap::from([(
            String::from("old"),
            Address { city: "Rome".into(), zip: 1 },
        )]),
        age: 30,
        note: "private".into(),
    }
}

#[test]
fn encodes_through_the_facade() {
    let person = person();
    let map = structs::map(&person).unwrap();

    assert_eq!(map["full_name"], Value::from("ann"));
    assert_eq!(map["age"], Value::from("30"));
    assert!(matches!(map["home"], Value::Opaque(_)));

    // flattened work address, with its empty city omitted
    assert_eq!(map["zip"], Value::Uint(42));
    assert!(!map.contains_key("city"));
    assert!(!map.contains_key("work"));

    let Value::Map(labels) = &map["labels"] else {
        panic!("labels should encode as a map");
    };
    let Value::Map(old) = &labels["old"] else {
        panic!("label values should be nested maps");
    };
    assert_eq!(old["city"], Value::from("Rome"));

    assert!(!map.contains_key("note"));
    assert_eq!(person.note, "private");
}

#[test]
fn views_and_writes() {
    let mut person = person();

    let view = StructView::of(&person);
    assert_eq!(view.name(), "Person");
    assert_eq!(view.names(), ["name", "home", "work", "labels", "age", "note"]);
    assert!(!view.is_zero());

    let mut view = StructView::new_mut(&mut person).unwrap();
    let mut home = view.field_mut("home").unwrap();
    home.field_mut("zip").unwrap().set(7_u32).unwrap();
    view.field_mut("work").unwrap().set_zero().unwrap();

    assert_eq!(person.home.zip, 7);
    assert!(person.work.is_none());
    assert!(structs::has_zero(&person).unwrap());
}

#[test]
fn json_rendering() {
    let person = person();
    let map = structs::map_with_tag(&person, "json").unwrap();
    let json = serde_json::to_value(Value::Map(map)).unwrap();

    assert_eq!(json["name"], "ann");
    assert_eq!(json["work"]["zip"], 42);
    assert_eq!(json["labels"]["old"]["city"], "Rome");
}
