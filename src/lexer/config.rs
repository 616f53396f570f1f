//! Scan configuration

/// How a scan reports stopping early on malformed input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Stop quietly and return the tokens produced so far
    #[default]
    Silent,
    /// Stop at the same place, but report `Error::TruncatedInput`
    Error,
}

/// Configuration for a single scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Reporting policy for early stops (default: silent)
    pub on_truncation: TruncationPolicy,
}

impl ScanConfig {
    /// Configuration that reports truncation as an error
    pub fn strict() -> Self {
        ScanConfig {
            on_truncation: TruncationPolicy::Error,
        }
    }
}
