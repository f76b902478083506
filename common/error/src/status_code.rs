//! Unified status codes for error classification.
//!
//! Status code format: XX_YYY (5-digit)
//! - XX = Category (00-99)
//! - YYY = Code within category (000-999)
//!
//! Category layout:
//! - General/Core (01-05): Common, Input, IO, Network, Auth
//! - Business (10-12): Config, Provider, Resource

use strum::AsRefStr;
use strum::EnumIter;
use strum::FromRepr;

/// Status code metadata.
#[derive(Debug, Clone, Copy)]
pub struct StatusMeta {
    pub retryable: bool,
    pub log_error: bool,
    pub category: StatusCategory,
}

/// Status code category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Success (00_xxx)
    Success,
    /// Common/internal errors (01_xxx)
    Common,
    /// Parameter/validation errors (02_xxx)
    Input,
    /// IO/storage errors (03_xxx)
    IO,
    /// Network/transport errors (04_xxx)
    Network,
    /// Authentication/authorization errors (05_xxx)
    Auth,
    /// Configuration errors (10_xxx)
    Config,
    /// LLM provider/model errors (11_xxx)
    Provider,
    /// Resource limits (12_xxx)
    Resource,
}

macro_rules! define_status_codes {
    ($(
        $(#[$attr:meta])*
        $name:ident = $value:expr => {
            retryable: $retry:expr,
            log_error: $log:expr,
            category: $cat:ident $(,)?
        }
    ),* $(,)?) => {
        /// Status codes for error classification.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, FromRepr)]
        #[repr(i32)]
        pub enum StatusCode {
            $($(#[$attr])* $name = $value,)*
        }

        impl StatusCode {
            /// Returns the metadata for this status code.
            pub const fn meta(&self) -> StatusMeta {
                match self {
                    $(Self::$name => StatusMeta {
                        retryable: $retry,
                        log_error: $log,
                        category: StatusCategory::$cat,
                    },)*
                }
            }

            /// Returns the string name of this status code.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }
    };
}

define_status_codes! {
    // ====== Success (00_xxx) ======
    /// Operation succeeded.
    Success = 00_000 => { retryable: false, log_error: false, category: Success },

    // ====== Common errors (01_xxx) ======
    /// Unknown error.
    Unknown = 01_000 => { retryable: false, log_error: true, category: Common },
    /// Internal error, unexpected bug.
    Internal = 01_001 => { retryable: true, log_error: true, category: Common },
    /// Unsupported operation.
    Unsupported = 01_002 => { retryable: false, log_error: false, category: Common },
    /// Task was cancelled.
    Cancelled = 01_003 => { retryable: false, log_error: false, category: Common },
    /// Caused by an external system.
    External = 01_004 => { retryable: false, log_error: true, category: Common },

    // ====== Input/Validation errors (02_xxx) ======
    /// Invalid arguments.
    InvalidArguments = 02_000 => { retryable: false, log_error: false, category: Input },
    /// Invalid request format.
    InvalidRequest = 02_001 => { retryable: false, log_error: false, category: Input },
    /// Parse/deserialize error.
    ParseError = 02_002 => { retryable: false, log_error: false, category: Input },
    /// Invalid JSON.
    InvalidJson = 02_003 => { retryable: false, log_error: false, category: Input },

    // ====== IO/Storage errors (03_xxx) ======
    /// IO error.
    IoError = 03_000 => { retryable: false, log_error: false, category: IO },
    /// File not found.
    FileNotFound = 03_001 => { retryable: false, log_error: false, category: IO },

    // ====== Network/Transport errors (04_xxx) ======
    /// Network error.
    NetworkError = 04_000 => { retryable: true, log_error: false, category: Network },
    /// Connection failed.
    ConnectionFailed = 04_001 => { retryable: true, log_error: false, category: Network },
    /// Service unavailable.
    ServiceUnavailable = 04_002 => { retryable: true, log_error: false, category: Network },

    // ====== Auth errors (05_xxx) ======
    /// Authentication failed (invalid credentials).
    AuthenticationFailed = 05_000 => { retryable: false, log_error: false, category: Auth },
    /// Permission denied.
    PermissionDenied = 05_001 => { retryable: false, log_error: false, category: Auth },

    // ====== Config errors (10_xxx) ======
    /// Invalid configuration.
    InvalidConfig = 10_000 => { retryable: false, log_error: false, category: Config },

    // ====== Provider/Model errors (11_xxx) ======
    /// Provider not found or not configured.
    ProviderNotFound = 11_000 => { retryable: false, log_error: false, category: Provider },
    /// Model not found or not available.
    ModelNotFound = 11_001 => { retryable: false, log_error: false, category: Provider },
    /// Provider returned an error.
    ProviderError = 11_002 => { retryable: false, log_error: true, category: Provider },
    /// Streaming error.
    StreamError = 11_003 => { retryable: true, log_error: true, category: Provider },

    // ====== Resource/Limit errors (12_xxx) ======
    /// Rate limit exceeded.
    RateLimited = 12_000 => { retryable: true, log_error: false, category: Resource },
    /// Runtime resources exhausted.
    ResourcesExhausted = 12_001 => { retryable: true, log_error: false, category: Resource },
    /// Request timeout.
    Timeout = 12_002 => { retryable: true, log_error: false, category: Resource },
}

impl StatusCode {
    /// Returns true if the error is retryable.
    pub const fn is_retryable(&self) -> bool {
        self.meta().retryable
    }

    /// Returns true if the error should be logged.
    pub const fn should_log_error(&self) -> bool {
        self.meta().log_error
    }

    /// Returns the category of this status code.
    pub const fn category(&self) -> StatusCategory {
        self.meta().category
    }

    /// Convert from i32.
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
#[path = "status_code.test.rs"]
mod tests;
