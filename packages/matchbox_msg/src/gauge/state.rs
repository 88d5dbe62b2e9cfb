use matchbox_base::utils::SECONDS_PER_DAY;

/// MEZO governance token on Mezo mainnet
pub const MEZO_MAINNET: &str = "0x7b7C000000B2719Bea324FF0d4CD22fb06b2a1bb";

/// gauge voting epochs are aligned to unix weeks, genesis on Thu Jun 13 00:00:00 UTC 2024
pub const GENESIS_EPOCH_START_DATE: u64 = 1_718_236_800;
/// gauge voting epoch lasts 7 days
pub const EPOCH_LENGTH: u64 = 7 * SECONDS_PER_DAY;
/// voting is blocked within 1 h of both epoch edges
pub const VOTE_WINDOW_BUFFER: u64 = 3_600;

/// MEZO/USD oracle feed isn't live yet, the dashboard ships with a fixed quote
pub const MEZO_USD_PLACEHOLDER: &str = "0.22";

/// veBTC and veMEZO voting power share the 1e18 scale
pub const VOTING_POWER_DECIMALS: u32 = 18;
pub const VOTING_POWER_SCALE: u128 = 1_000_000_000_000_000_000;
