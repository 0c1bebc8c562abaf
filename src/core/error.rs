use thiserror::Error;

/// Errors that can occur while converting between CII documents and invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// XML decoding or encoding failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// A code was not found in the code list used to translate it.
    #[error("unsupported {list} code: {code}")]
    UnsupportedCode {
        /// Name of the code list (e.g. "UNTDID 1001 document type").
        list: &'static str,
        /// The offending code or canonical value.
        code: String,
    },

    /// A date could not be resolved.
    #[error("invalid date at {field}: {source}")]
    Date {
        /// Dot-separated path to the date field.
        field: String,
        #[source]
        source: DateError,
    },

    /// An amount, quantity or percentage is not a valid decimal.
    #[error("invalid decimal '{value}' at {field}")]
    Decimal { field: String, value: String },

    /// A value required by the target model is absent.
    #[error("missing required value at {field}")]
    Missing { field: String },

    /// Any other field that cannot be mapped.
    #[error("{field}: {message}")]
    Mapping { field: String, message: String },
}

impl ConversionError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub(crate) fn mapping(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapping {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Dot-separated path of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Date { field, .. }
            | Self::Decimal { field, .. }
            | Self::Missing { field }
            | Self::Mapping { field, .. } => Some(field.as_str()),
            Self::Xml(_) | Self::UnsupportedCode { .. } => None,
        }
    }
}

/// Reasons a date value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// The format discriminator is not "102".
    #[error("unsupported date format '{0}'")]
    UnsupportedFormat(String),

    /// The string is not eight ASCII digits.
    #[error("malformed date '{0}', expected YYYYMMDD")]
    Malformed(String),

    /// Eight digits, but not a real calendar date.
    #[error("date '{0}' is out of range")]
    OutOfRange(String),
}
