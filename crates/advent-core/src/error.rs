use crate::location::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the world model, the travel table, and the save format.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An object id outside `1..MAXOBJ`.
    #[error("unknown object id: {0}")]
    UnknownObject(i32),

    /// A location id outside `0..MAXLOC`.
    #[error("unknown location id: {0}")]
    UnknownLocation(i32),

    /// A travel rule that does not decode to a known condition or destination.
    #[error("bad travel rule {code} at location {from}")]
    TravelData {
        /// Location owning the rule.
        from: LocationId,
        /// The raw `cond * 1000 + dest` code.
        code: u32,
    },

    /// A save file whose content is structurally wrong.
    #[error("save file format error: {0}")]
    Format(String),

    /// A save file whose sections are not in the required order.
    #[error("save file field order mismatch: expected {expected}, found {found}")]
    FieldOrder {
        /// Section name that should have come next.
        expected: &'static str,
        /// Section name that was actually read.
        found: &'static str,
    },

    /// A save file written by an incompatible format version.
    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u16),

    /// MessagePack encoding failure.
    #[error("failed to encode save file: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// MessagePack decoding failure.
    #[error("failed to decode save file: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
