use treewalk::{Field, Value};

/// A heterogeneous tree covering every scalar kind and width, nested
/// mappings, sequences of mixed kinds and sequences of mappings.
pub fn mixed_tree() -> Value {
    Value::Map(vec![
        entry("string_val", "hello world"),
        entry("int_val", 42isize),
        entry("int32_val", 32i32),
        entry("int64_val", 64i64),
        entry("uint_val", 10usize),
        entry("uint64_val", 64u64),
        entry("float32_val", 3.14f32),
        entry("float64_val", 6.28f64),
        entry("bool_val", true),
        (
            "nested".to_string(),
            Value::Map(vec![
                entry("deep_string", "nested value"),
                entry("deep_int", 100isize),
                entry("deep_float", 99.99f64),
                entry("deep_bool", false),
                entry("deep_uint", 200u64),
            ]),
        ),
        (
            "array".to_string(),
            Value::Seq(vec![
                Value::from("array_string"),
                Value::from(123isize),
                Value::from(45.67f64),
                Value::from(false),
                Value::from(88usize),
                Value::Map(vec![
                    entry("array_nested_string", "found me"),
                    entry("array_nested_int", 999isize),
                    entry("array_nested_float", 123.456f64),
                    entry("array_nested_bool", true),
                    entry("array_nested_uint", 888u64),
                ]),
            ]),
        ),
        (
            "users".to_string(),
            Value::Seq(vec![user("Alice", 30, 1250.50, true, 1001), user("Bob", 25, 750.25, false, 1002)]),
        ),
    ])
}

fn entry(key: &str, value: impl Into<Value>) -> (String, Value) {
    (key.to_string(), value.into())
}

fn user(name: &str, age: isize, balance: f64, active: bool, id: u64) -> Value {
    Value::Map(vec![
        entry("name", name),
        entry("age", age),
        entry("balance", balance),
        entry("active", active),
        entry("id", id),
    ])
}

/// A record with one private field between two public ones.
pub fn account_record() -> Value {
    Value::record(
        "Account",
        vec![
            Field::public("Owner", "ada"),
            Field::private("token", "s3cret"),
            Field::public(
                "Limits",
                Value::record(
                    "Limits",
                    vec![
                        Field::public("Daily", 500u32),
                        Field::private("internal", 1u32),
                    ],
                ),
            ),
        ],
    )
}
