use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The tree handed to the query was `Value::Null`.
    #[error("tree is nil")]
    NilTree,

    /// The walk finished without any predicate match.
    #[error("no item found")]
    NotFound,
}
