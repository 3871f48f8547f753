// ============================================================================
// Rendu de la ligne de sortie
// ============================================================================
// Une seule ligne sur stdout, 11 décimales :
// - prix         : "1 btc = $43123.00000000000"
// - crypto->fiat : "0.50000000000 btc = $21561.50000000000"
// - fiat->crypto : "$100.00000000000 = 0.00231895740 btc"
// ============================================================================

use crate::models::{Coin, Direction, DisplayMode, Fiat, Settings};

/// Nombre de décimales affichées
pub const PRECISION: usize = 11;

/// Construit la ligne à afficher pour un prix unitaire donné
pub fn render(settings: &Settings, price: f64) -> String {
    match settings.display {
        DisplayMode::Price => format_price(settings.coin, settings.fiat, price),
        DisplayMode::Holdings => format_holdings(
            settings.coin,
            settings.fiat,
            settings.holdings,
            settings.direction,
            price,
        ),
    }
}

/// "1 <symbole> = <glyphe><prix>"
pub fn format_price(coin: Coin, fiat: Fiat, price: f64) -> String {
    format!("1 {} = {}{:.*}", coin.symbol(), fiat.glyph(), PRECISION, price)
}

/// Conversion du montant détenu dans le sens demandé
pub fn format_holdings(coin: Coin, fiat: Fiat, holdings: f64, direction: Direction, price: f64) -> String {
    match direction {
        Direction::CryptoToFiat => format!(
            "{:.*} {} = {}{:.*}",
            PRECISION,
            holdings,
            coin.symbol(),
            fiat.glyph(),
            PRECISION,
            holdings * price
        ),
        Direction::FiatToCrypto => format!(
            "{}{:.*} = {:.*} {}",
            fiat.glyph(),
            PRECISION,
            holdings,
            PRECISION,
            holdings / price,
            coin.symbol()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Coin::Btc, Fiat::Usd, 43123.0), "1 btc = $43123.00000000000");
        assert_eq!(format_price(Coin::Xmr, Fiat::Gbp, 120.5), "1 xmr = £120.50000000000");
    }

    #[test]
    fn test_render_holdings_crypto_to_fiat() {
        let settings = Settings {
            coin: Coin::Eth,
            fiat: Fiat::Eur,
            holdings: 3.5,
            direction: Direction::CryptoToFiat,
            display: DisplayMode::Holdings,
        };
        assert_eq!(
            render(&settings, 2000.0),
            "3.50000000000 eth = €7000.00000000000"
        );
    }

    #[test]
    fn test_render_holdings_fiat_to_crypto() {
        let settings = Settings {
            coin: Coin::Btc,
            fiat: Fiat::Usd,
            holdings: 100.0,
            direction: Direction::FiatToCrypto,
            display: DisplayMode::Holdings,
        };
        assert_eq!(render(&settings, 50000.0), "$100.00000000000 = 0.00200000000 btc");
    }

    #[test]
    fn test_render_price_ignores_holdings() {
        let settings = Settings {
            holdings: 9.0,
            ..Settings::default()
        };
        assert_eq!(render(&settings, 2.0), "1 btc = $2.00000000000");
    }
}
