// ============================================================================
// Évaluateur d'options
// ============================================================================
// Valide un couple (commande, valeur) et l'applique aux Settings.
// Partagé par le fichier de config et par les flags de la ligne de commande.
//
// CONCEPTS RUST :
// 1. Table statique de descripteurs : &'static [TokenDescriptor]
// 2. Le type de valeur découle du token : pas de descripteur incohérent
// 3. Pas de mutation en cas d'erreur : on valide AVANT d'écrire
// ============================================================================

use tracing::debug;

use crate::error::OptionError;
use crate::models::{Coin, Fiat, Settings};

/// Réglage visé par une commande
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Coin,
    Fiat,
    Holdings,
}

/// Type de valeur attendu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Valeur énumérée, résolue par préfixe dans une table
    Str,
    /// Nombre décimal, parsing permissif
    Decimal,
}

impl TokenKind {
    /// Type de valeur attendu pour ce réglage
    pub fn value_type(&self) -> ValueType {
        match self {
            TokenKind::Coin | TokenKind::Fiat => ValueType::Str,
            TokenKind::Holdings => ValueType::Decimal,
        }
    }
}

/// Entrée de la table des commandes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub command: &'static str,
    pub kind: TokenKind,
}

pub const COIN: TokenDescriptor = TokenDescriptor {
    command: "coin",
    kind: TokenKind::Coin,
};

pub const FIAT: TokenDescriptor = TokenDescriptor {
    command: "fiat",
    kind: TokenKind::Fiat,
};

pub const HOLDINGS: TokenDescriptor = TokenDescriptor {
    command: "holdings",
    kind: TokenKind::Holdings,
};

/// Commandes reconnues dans le fichier de config
pub const TOKENS: [TokenDescriptor; 3] = [COIN, FIAT, HOLDINGS];

/// Cherche une commande par égalité exacte (pas de préfixe ici)
pub fn lookup(command: &str) -> Option<&'static TokenDescriptor> {
    TOKENS.iter().find(|token| token.command == command)
}

/// Applique "commande=valeur" aux Settings
pub fn apply(settings: &mut Settings, command: &str, value: &str) -> Result<(), OptionError> {
    let descriptor =
        lookup(command).ok_or_else(|| OptionError::UnknownOption(command.to_string()))?;
    apply_token(settings, descriptor, value)
}

/// Applique une valeur pour un descripteur déjà connu
///
/// Les flags (-a, -c, -f) passent directement par ici sans recherche textuelle.
pub fn apply_token(
    settings: &mut Settings,
    descriptor: &TokenDescriptor,
    value: &str,
) -> Result<(), OptionError> {
    match descriptor.kind {
        TokenKind::Coin => {
            let coin =
                Coin::from_prefix(value).ok_or_else(|| OptionError::UnknownCoin(value.to_string()))?;
            debug!(coin = %coin, value, "Coin selected");
            settings.coin = coin;
        }
        TokenKind::Fiat => {
            let fiat =
                Fiat::from_prefix(value).ok_or_else(|| OptionError::UnknownFiat(value.to_string()))?;
            debug!(fiat = %fiat, value, "Fiat selected");
            settings.fiat = fiat;
        }
        TokenKind::Holdings => {
            settings.holdings = parse_decimal(value);
            debug!(holdings = settings.holdings, value, "Holdings set");
        }
    }

    Ok(())
}

/// Parse permissif d'un décimal, à la manière de strtod
///
/// - les espaces de tête sont ignorés
/// - on garde le plus long préfixe numérique : "3.5abc" -> 3.5
/// - une entrée sans chiffre donne 0.0 : "abc" -> 0.0
/// - "inf", "infinity" et "nan" sont acceptés (insensible à la casse)
/// - pas de flottants hexadécimaux : "0x1A" -> 0.0 (strtod donnerait 26)
pub fn parse_decimal(value: &str) -> f64 {
    // Mêmes blancs que isspace() en locale C, '\x0b' (tab vertical) compris
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    // Mots-clés spéciaux juste après le signe
    let rest = s[end..].to_ascii_lowercase();
    for keyword in ["infinity", "inf", "nan"] {
        if rest.starts_with(keyword) {
            return s[..end + keyword.len()].parse().unwrap_or(0.0);
        }
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    // Exposant seulement s'il est suivi d'au moins un chiffre
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
