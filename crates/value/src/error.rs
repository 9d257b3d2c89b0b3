use crate::kind::Kind;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("{0}")]
    Custom(String),

    #[error("Map key must be a scalar, found {0}")]
    KeyMustBeScalar(Kind),
}

impl serde::ser::Error for ValueError {
    fn custom<T: Display>(msg: T) -> Self {
        ValueError::Custom(msg.to_string())
    }
}
