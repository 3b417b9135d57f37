#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {context}, {error}")]
    Io {
        context: String,
        error: std::io::Error,
    },

    #[error("Serialize error: {context}, {error}")]
    Serialize {
        context: String,
        error: serde_json::Error,
    },

    #[error("Input closed before an address for server {slot} was entered")]
    InputClosed { slot: usize },
}

impl Error {
    pub fn io_error(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        move |error| Self::Io {
            context: context.into(),
            error,
        }
    }

    pub fn serialize_error(context: impl Into<String>) -> impl FnOnce(serde_json::Error) -> Self {
        move |error| Self::Serialize {
            context: context.into(),
            error,
        }
    }

    pub fn input_closed(slot: usize) -> Self {
        Self::InputClosed { slot }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
