// ============================================================================
// Enum : Fiat
// ============================================================================
// Les monnaies fiat supportées (devise de cotation)
// ============================================================================

use std::fmt;

/// Monnaie fiat supportée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fiat {
    Gbp,
    #[default]
    Usd,
    Eur,
}

impl Fiat {
    /// Toutes les fiats, dans l'ordre de recherche par préfixe
    pub const ALL: [Fiat; 3] = [Fiat::Gbp, Fiat::Usd, Fiat::Eur];

    /// Nom canonique (ex: "usd") : clé de config et paramètre `vs_currencies`
    pub fn name(&self) -> &'static str {
        match self {
            Fiat::Gbp => "gbp",
            Fiat::Usd => "usd",
            Fiat::Eur => "eur",
        }
    }

    /// Glyphe affiché devant les montants
    pub fn glyph(&self) -> &'static str {
        match self {
            Fiat::Gbp => "\u{00a3}",
            Fiat::Usd => "$",
            Fiat::Eur => "\u{20ac}",
        }
    }

    /// Première fiat dont le nom est un préfixe de `value` (même règle que Coin)
    pub fn from_prefix(value: &str) -> Option<Fiat> {
        Fiat::ALL
            .iter()
            .find(|fiat| value.starts_with(fiat.name()))
            .copied()
    }
}

impl fmt::Display for Fiat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
