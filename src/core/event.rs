use serde::{Deserialize, Serialize};

/// Single synthetic listen/like interaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenEvent {
    /// Listener identifier, uniform over `0..=5000`.
    pub user_id: u32,
    /// Plausible display name for the listener.
    pub user_name: String,
    /// Track identifier drawn from the reference catalog.
    pub track_id: String,
    /// Whether the listener liked the track (0 or 1).
    pub like: u8,
    /// Unix timestamp in seconds, captured at generation time.
    pub timestamp: f64,
}
