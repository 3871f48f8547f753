// ============================================================================
// Module : models
// ============================================================================
// Structures de données de l'application : tables des cryptos et fiats
// supportées, et configuration résolue.
// ============================================================================

pub mod coin;     // Cryptomonnaies supportées (table + URL CoinGecko)
pub mod fiat;     // Monnaies fiat supportées (nom + glyphe)
pub mod settings; // Configuration résolue (crypto, fiat, montant, modes)

// Re-export des structures principales pour simplifier les imports
// On peut faire : use coinprice::models::Coin;
pub use coin::Coin;
pub use fiat::Fiat;
pub use settings::{Direction, DisplayMode, Settings};
