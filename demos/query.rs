//! Prints every node of a JSON document that matches a key, a path or a kind.
//!
//! ```text
//! cargo run --example query -- data.json --key name
//! cargo run --example query -- data.json --kind int
//! ```
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use treewalk::{Kind, Node, from_json_str, traverse_nodes};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    String,
    Bool,
    Int,
    Uint,
    Float,
    Null,
    Map,
    Seq,
}

impl KindArg {
    fn admits(self, kind: Kind) -> bool {
        match self {
            KindArg::String => kind == Kind::Str,
            KindArg::Bool => kind == Kind::Bool,
            KindArg::Int => kind.is_int(),
            KindArg::Uint => kind.is_uint(),
            KindArg::Float => kind.is_float(),
            KindArg::Null => kind == Kind::Null,
            KindArg::Map => kind == Kind::Map,
            KindArg::Seq => kind == Kind::Seq,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON document to query
    input: PathBuf,

    /// Match nodes whose immediate key equals this
    #[arg(long)]
    key: Option<String>,

    /// Match the node at exactly this path (e.g. `users[1].name`)
    #[arg(long)]
    path: Option<String>,

    /// Match nodes of this kind
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Args {
    fn matches(&self, node: &Node<'_>) -> bool {
        self.key.as_ref().is_none_or(|k| &node.key == k)
            && self.path.as_ref().is_none_or(|p| &node.full_key == p)
            && self.kind.is_none_or(|k| k.admits(node.kind()))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let source = fs::read_to_string(&args.input)?;
    let tree = from_json_str(&source)?;

    let nodes = traverse_nodes(&tree, |n| args.matches(n))?;
    if nodes.is_empty() {
        eprintln!("no matches");
    }
    for node in nodes {
        let path = if node.full_key.is_empty() { "<root>" } else { node.full_key.as_str() };
        println!("{}\t{}\t{}", path, node.kind(), node.value.to_json());
    }
    Ok(())
}
