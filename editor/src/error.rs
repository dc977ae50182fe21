use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid number {input:?}")]
    MalformedNumericInput { input: String },

    #[error(transparent)]
    Curve(#[from] nurbs::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
