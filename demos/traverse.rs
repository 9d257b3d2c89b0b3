use serde_json::json;
use std::env;
use treewalk::{QueryError, Value, traverse_string};

fn main() -> Result<(), QueryError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "treewalk_query=debug"); }
    }
    env_logger::init();

    let data = Value::from(json!({
        "users": [
            { "name": "Alice" },
            { "name": "Bob" }
        ]
    }));

    for name in traverse_string(&data, |n| n.key == "name")? {
        println!("{}", name);
    }
    // Alice
    // Bob
    Ok(())
}
