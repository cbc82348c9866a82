use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `PROVAS_*` variable could not be read into
    /// [`crate::ProvasConfig`].
    #[error("failed to read provas config: {0}")]
    Figment(#[from] figment::Error),

    /// `section` has no usable value, e.g. `auth` without a token.
    #[error("provas config has no {section} settings")]
    NotConfigured { section: String },

    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
