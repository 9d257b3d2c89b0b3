//! Locates a nested mapping, collects the sequences under it and decodes each
//! one into a typed struct.
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::env;
use treewalk::{Kind, Value, find, traverse};

#[derive(Debug, Serialize)]
struct User {
    username: String,
    nickname: String,
    age: u32,
}

impl User {
    /// Decodes `[username, nickname, age]`.
    fn from_row(row: &Value) -> Option<User> {
        match row.as_seq()? {
            [username, nickname, age] => Some(User {
                username: username.as_str()?.to_string(),
                nickname: nickname.as_str()?.to_string(),
                age: age.as_str()?.parse().ok()?,
            }),
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "treewalk_query=debug"); }
    }
    env_logger::init();

    let mut users = BTreeMap::new();
    users.insert("bob454", vec!["bob454", "Bob", "19"]);
    users.insert("alice13", vec!["alice13", "Alice", "25"]);
    users.insert("nick23", vec!["nick23", "Nick", "25"]);

    let data: Value = [(
        "contents",
        [("list", [("users", Value::from(users))].into_iter().collect::<Value>())]
            .into_iter()
            .collect::<Value>(),
    )]
    .into_iter()
    .collect();

    // Find the users map
    let users_map = find(&data, |n| n.key == "users")?;

    // Every row under it
    let rows = traverse(users_map, |n| n.kind() == Kind::Seq)?;

    let users: Vec<User> = rows.into_iter().filter_map(User::from_row).collect();

    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}
