use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("read error: {0}")]
    Read(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("{table}.csv line {line}: {message}")]
    Decode {
        table: &'static str,
        line: usize,
        message: String,
    },

    #[error("encode error: {0}")]
    Encode(String),
}
