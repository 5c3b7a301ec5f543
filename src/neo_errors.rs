use thiserror::Error;

pub type Result<T> = std::result::Result<T, NeoError>;

#[derive(Error, Debug)]
pub enum NeoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feed response carries no near earth objects: {0}")]
    MissingFeedData(String),

    #[error("Osculation epoch '{value}' of {name} is not a valid julian date")]
    InvalidEpoch { name: String, value: String },

    #[error("Orbital element '{field}' of {name} is not a finite number")]
    InvalidElements { name: String, field: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PartialEq for NeoError {
    fn eq(&self, other: &Self) -> bool {
        use NeoError::*;
        match (self, other) {
            // opaque sources: same variant is enough
            (Http(_), Http(_)) => true,
            (Io(_), Io(_)) => true,
            (Toml(_), Toml(_)) => true,
            (MalformedResponse { url: a, .. }, MalformedResponse { url: b, .. }) => a == b,

            (MissingFeedData(a), MissingFeedData(b)) => a == b,
            (
                InvalidEpoch {
                    name: n1,
                    value: v1,
                },
                InvalidEpoch {
                    name: n2,
                    value: v2,
                },
            ) => n1 == n2 && v1 == v2,
            (
                InvalidElements {
                    name: n1,
                    field: f1,
                },
                InvalidElements {
                    name: n2,
                    field: f2,
                },
            ) => n1 == n2 && f1 == f2,
            (Config(a), Config(b)) => a == b,

            _ => false,
        }
    }
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::neo_errors::NeoError::Config( format!( $fmt $(, $arg)* ))
    };
}
pub(crate) use config_error;
