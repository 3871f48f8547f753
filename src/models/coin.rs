// ============================================================================
// Enum : Coin
// ============================================================================
// Les cryptomonnaies supportées par coinprice
//
// CONCEPTS RUST :
// 1. Enum "C-like" : chaque variant est une simple valeur, Copy + Eq
// 2. Table statique : Coin::ALL sert de table de recherche (ordre fixe)
// 3. match exhaustif : le compilateur vérifie qu'aucune crypto n'est oubliée
// ============================================================================

use std::fmt;

use crate::models::Fiat;

/// Endpoint CoinGecko "simple/price", sans les paramètres
const SIMPLE_PRICE_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Cryptomonnaie supportée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Coin {
    #[default]
    Btc,
    Xmr,
    Ltc,
    Eth,
    Doge,
    Bch,
    Usdt,
    /// Peu liquide, CoinGecko ne le cote pas toujours
    Wow,
}

impl Coin {
    /// Toutes les cryptos, dans l'ordre de recherche par préfixe
    pub const ALL: [Coin; 8] = [
        Coin::Btc,
        Coin::Xmr,
        Coin::Ltc,
        Coin::Eth,
        Coin::Doge,
        Coin::Bch,
        Coin::Usdt,
        Coin::Wow,
    ];

    /// Symbole court (ex: "btc"), utilisé dans la config, les flags et l'affichage
    pub fn symbol(&self) -> &'static str {
        match self {
            Coin::Btc => "btc",
            Coin::Xmr => "xmr",
            Coin::Ltc => "ltc",
            Coin::Eth => "eth",
            Coin::Doge => "doge",
            Coin::Bch => "bch",
            Coin::Usdt => "usdt",
            Coin::Wow => "wow",
        }
    }

    /// Identifiant CoinGecko (ex: "bitcoin"), clé de la réponse JSON
    pub fn full_name(&self) -> &'static str {
        match self {
            Coin::Btc => "bitcoin",
            Coin::Xmr => "monero",
            Coin::Ltc => "litecoin",
            Coin::Eth => "ethereum",
            Coin::Doge => "dogecoin",
            Coin::Bch => "bitcoin-cash",
            Coin::Usdt => "tether",
            Coin::Wow => "wownero",
        }
    }

    /// URL de prix incomplète : il ne manque que la fiat à la fin
    ///
    /// Format : `.../simple/price?ids=bitcoin&vs_currencies=`
    pub fn url_template(&self) -> String {
        format!(
            "{}?ids={}&vs_currencies=",
            SIMPLE_PRICE_ENDPOINT,
            self.full_name()
        )
    }

    /// URL complète pour une fiat donnée
    pub fn price_url(&self, fiat: Fiat) -> String {
        let mut url = self.url_template();
        url.push_str(fiat.name());
        url
    }

    /// Cherche la première crypto dont le symbole est un PRÉFIXE de `value`
    ///
    /// Ce n'est pas une égalité : "btcfoo" donne Btc. Ce comportement est
    /// celui attendu par les fichiers de config existants, on le garde.
    ///
    /// CONCEPT RUST : Iterator::find
    /// - Parcourt la table et s'arrête au premier élément qui matche
    /// - Retourne Option<&Coin>, copied() donne Option<Coin>
    pub fn from_prefix(value: &str) -> Option<Coin> {
        Coin::ALL
            .iter()
            .find(|coin| value.starts_with(coin.symbol()))
            .copied()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix_exact() {
        for coin in Coin::ALL {
            assert_eq!(Coin::from_prefix(coin.symbol()), Some(coin));
        }
    }

    #[test]
    fn test_from_prefix_accepts_trailing_text() {
        assert_eq!(Coin::from_prefix("btcXYZ"), Some(Coin::Btc));
        assert_eq!(Coin::from_prefix("ethereum"), Some(Coin::Eth));
    }

    #[test]
    fn test_from_prefix_rejects_unknown() {
        assert_eq!(Coin::from_prefix("sol"), None);
        assert_eq!(Coin::from_prefix(""), None);
        // Sensible à la casse, comme strncmp
        assert_eq!(Coin::from_prefix("BTC"), None);
        // Le symbole doit être au début
        assert_eq!(Coin::from_prefix(" btc"), None);
    }

    #[test]
    fn test_price_url() {
        assert_eq!(
            Coin::Bch.price_url(Fiat::Eur),
            "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin-cash&vs_currencies=eur"
        );
        assert!(Coin::Xmr.url_template().ends_with("ids=monero&vs_currencies="));
    }

    #[test]
    fn test_doge_uses_coingecko_id() {
        // "doge" n'est pas un id CoinGecko : la réponse serait "{}"
        assert_eq!(Coin::Doge.symbol(), "doge");
        assert_eq!(Coin::Doge.full_name(), "dogecoin");
        assert!(Coin::Doge.price_url(Fiat::Usd).contains("ids=dogecoin&"));
    }

    #[test]
    fn test_default_is_btc() {
        assert_eq!(Coin::default(), Coin::Btc);
    }
}
