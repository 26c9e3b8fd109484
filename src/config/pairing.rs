//! Trade idea generation limits

/// How many ideas each generator is allowed to surface.
pub struct PairingConfig {
    // Weekly + daily aligned setups
    pub high_conviction_limit: usize,
    // Applied separately to the LONG and SHORT swing lists
    pub swing_list_limit: usize,
    // Daily-only pairs, counted after removing high-conviction duplicates
    pub intraday_limit: usize,
}

pub const PAIRING: PairingConfig = PairingConfig {
    high_conviction_limit: 3,
    swing_list_limit: 6,
    intraday_limit: 6,
};
