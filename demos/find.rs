use serde_json::json;
use std::env;
use treewalk::{Kind, QueryError, Value, find};

fn main() -> Result<(), QueryError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "treewalk_query=debug"); }
    }
    env_logger::init();

    let data = Value::from(json!({
        "user": {
            "name": "Ephemeral",
            "age": 30
        },
        "active": true
    }));

    let result = find(&data, |n| n.key == "name" && n.kind() == Kind::Str)?;

    println!("{}", result.to_json()); // "Ephemeral"
    Ok(())
}
