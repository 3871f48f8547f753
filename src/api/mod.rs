// ============================================================================
// Module : api
// ============================================================================
// Client de l'API de prix (CoinGecko)
// ============================================================================

pub mod coingecko; // Client API CoinGecko

// Re-export des fonctions principales
pub use coingecko::{extract_price, fetch_price};
