use thiserror::Error;

/// Returned by the checked accessors of [`Optional`](crate::Optional) when
/// no value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("bad optional access")]
pub struct BadOptionalAccess;
