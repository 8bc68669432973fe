pub mod tiers;
pub mod time;
