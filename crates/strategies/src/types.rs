// In crates/strategies/src/types.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingMeanSettings {
    /// Number of trailing observations averaged per row.
    pub window: usize,
}
