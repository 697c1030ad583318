#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Largest playable subset. Domain rule: 5.
    pub max_play_size: usize,
    /// How many ranked breakdowns to return.
    pub top_n: usize,
    /// Enumeration guard; hands beyond this are rejected rather than
    /// searched.
    pub max_hand_size: usize,
    /// Subset counts below this stay on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_play_size: 5,
            top_n: 3,
            max_hand_size: 16,
            parallel_threshold: 64,
        }
    }
}
