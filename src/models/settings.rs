// ============================================================================
// Structure : Settings
// ============================================================================
// Configuration résolue pour une exécution : crypto, fiat, montant détenu,
// sens de conversion et mode d'affichage.
//
// Cycle de vie :
// 1. Settings::default()            -> valeurs par défaut (BTC / USD / 0)
// 2. config::load(&mut settings)    -> fichier de config
// 3. cli::read_args(&mut settings)  -> les flags écrasent la config
// 4. lecture seule pour le fetch et l'affichage
//
// CONCEPT RUST : Pas d'état global
// - La structure est passée explicitement (&mut pendant la résolution,
//   & ensuite), le compilateur garantit qu'un seul endroit la modifie
// ============================================================================

use crate::models::{Coin, Fiat};

/// Sens de conversion du montant détenu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Le montant est en crypto, on affiche sa valeur en fiat
    #[default]
    CryptoToFiat,

    /// Le montant est en fiat, on affiche combien de crypto il achète
    FiatToCrypto,
}

/// Ce que le programme affiche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Prix unitaire : "1 btc = $43123.00000000000"
    #[default]
    Price,

    /// Conversion du montant détenu
    Holdings,
}

/// Configuration résolue
///
/// Coin et Fiat ne sont jamais "non définis" : Default garantit des valeurs
/// valides même sans fichier de config ni flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub coin: Coin,
    pub fiat: Fiat,

    /// Montant détenu (crypto ou fiat selon `direction`), 0 par défaut
    pub holdings: f64,

    pub direction: Direction,
    pub display: DisplayMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.coin, Coin::Btc);
        assert_eq!(settings.fiat, Fiat::Usd);
        assert_eq!(settings.holdings, 0.0);
        assert_eq!(settings.direction, Direction::CryptoToFiat);
        assert_eq!(settings.display, DisplayMode::Price);
    }
}
