// ============================================================================
// Lecture des flags de la ligne de commande
// ============================================================================
// coinprice [-a amount] [-b] [-c coin] [-C] [-f fiat] [-F] [-h] [-p]
//
// Règles :
// - args[0] est le nom du programme, ignoré
// - un token est un flag s'il commence par '-' et a un 2e caractère
// - seul le 2e caractère compte ("-abc" est lu comme "-a")
// - les tokens qui ne sont pas des flags sont ignorés
// - les flags sont lus de gauche à droite, le dernier gagne
// - ils passent APRÈS la config, donc ils l'écrasent
// - "-h" arrête la lecture immédiatement
//
// CONCEPT RUST : Generics avec AsRef<str>
// - read_args accepte &[String] (std::env::args) comme &[&str] (tests)
// ============================================================================

use std::ffi::OsString;

use tracing::{debug, info};

use crate::config::evaluator::{self, TokenDescriptor};
use crate::error::CliError;
use crate::models::{Coin, Direction, DisplayMode, Fiat, Settings};

/// Résultat d'une lecture de flags réussie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    /// Settings résolus, on peut continuer
    Proceed,

    /// "-h" rencontré : afficher l'aide et s'arrêter (ce n'est pas une erreur)
    HelpRequested,
}

/// Applique les flags de `args` aux Settings
pub fn read_args<S: AsRef<str>>(settings: &mut Settings, args: &[S]) -> Result<FlagOutcome, CliError> {
    // CONCEPT RUST : Iterator manuel
    // - skip(1) saute le nom du programme
    // - next() dans la boucle consomme l'argument d'un flag
    let mut tokens = args.iter().map(|arg| arg.as_ref()).skip(1);

    while let Some(token) = tokens.next() {
        let mut chars = token.chars();
        let flag = match (chars.next(), chars.next()) {
            (Some('-'), Some(flag)) => flag,
            _ => {
                debug!(token, "Ignoring non-flag argument");
                continue;
            }
        };

        match flag {
            'a' => {
                let value = tokens.next().ok_or(CliError::MissingArgument(flag))?;
                apply_flag(settings, flag, &evaluator::HOLDINGS, value)?;
                settings.display = DisplayMode::Holdings;
            }
            'b' => settings.display = DisplayMode::Holdings,
            'c' => {
                let value = tokens.next().ok_or(CliError::MissingArgument(flag))?;
                apply_flag(settings, flag, &evaluator::COIN, value)?;
            }
            'C' => settings.direction = Direction::CryptoToFiat,
            'f' => {
                let value = tokens.next().ok_or(CliError::MissingArgument(flag))?;
                apply_flag(settings, flag, &evaluator::FIAT, value)?;
            }
            'F' => settings.direction = Direction::FiatToCrypto,
            'h' => {
                info!("Help requested");
                return Ok(FlagOutcome::HelpRequested);
            }
            'p' => settings.display = DisplayMode::Price,
            _ => return Err(CliError::UnknownOption(token.to_string())),
        }
    }

    debug!(?settings, "Flags applied");
    Ok(FlagOutcome::Proceed)
}

fn apply_flag(
    settings: &mut Settings,
    flag: char,
    descriptor: &TokenDescriptor,
    value: &str,
) -> Result<(), CliError> {
    evaluator::apply_token(settings, descriptor, value)
        .map_err(|source| CliError::InvalidValue { flag, source })
}

/// Convertit les arguments du processus en String, sans jamais paniquer
///
/// Un argument non UTF-8 est converti avec U+FFFD à la place des octets
/// invalides : un token ignoré reste ignoré, un argument de flag invalide
/// sera rejeté par l'évaluateur comme n'importe quelle valeur inconnue.
pub fn collect_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Texte d'aide : liste des flags puis cryptos et fiats disponibles
pub fn usage(program: &str) -> String {
    let mut text = format!(
        "{program} usage:\n\
         -f <fiat currency>\n\
         -c <crypto currency>\n\
         -a <amount of X currency> : will use this value in calculations\n\
         -b to display the amount of a crypto currency you hold in fiat currency\n\
         -C to do crypto->fiat conversions\n\
         -F to do fiat->crypto conversions\n\
         -p to display the price of a crypto currency\n\
         -h to display this help message\n\
         \n\
         Available coins:\n"
    );

    for coin in Coin::ALL {
        text.push_str(coin.symbol());
        text.push('\n');
    }

    text.push_str("\nAvailable fiat currencies:\n");

    for fiat in Fiat::ALL {
        text.push_str(fiat.name());
        text.push('\n');
    }

    text
}
