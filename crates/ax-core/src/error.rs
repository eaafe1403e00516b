use thiserror::Error;

pub type AxResult<T> = Result<T, AxError>;

#[derive(Error, Debug)]
pub enum AxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
