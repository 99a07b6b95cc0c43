use serde::{Deserialize, Serialize};

/// Semantic colour of a status badge or stock bar.
///
/// Every status enum maps onto a `Tone` with an exhaustive `match`, so adding a status without
/// deciding how it looks is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Grey.
    Neutral,
    /// Blue.
    Info,
    /// Yellow.
    Warning,
    /// Green.
    Success,
    /// Red.
    Danger,
}
