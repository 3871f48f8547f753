// ============================================================================
// Module : error
// ============================================================================
// Erreurs typées de la librairie
//
// CONCEPT RUST : thiserror
// - #[derive(Error)] implémente std::error::Error + Display
// - #[error("...")] définit le message affiché à l'utilisateur
// - #[from] génère la conversion automatique utilisée par l'opérateur ?
// - #[source] chaîne l'erreur sous-jacente (io, reqwest, ...)
//
// Toutes ces erreurs sont terminales : aucune n'est rattrapée localement.
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Coin, Fiat};

/// Échec de l'évaluation d'un couple (commande, valeur)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    /// Commande absente de la table des tokens
    #[error("no such config option \"{0}\"")]
    UnknownOption(String),

    /// Aucune crypto dont le symbole préfixe la valeur
    #[error("unknown coin \"{0}\"")]
    UnknownCoin(String),

    /// Aucune fiat dont le nom préfixe la valeur
    #[error("unknown fiat currency \"{0}\"")]
    UnknownFiat(String),
}

/// Échec du chargement du fichier de config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// HOME introuvable, impossible de chercher le fichier de config
    #[error("home directory unknown")]
    HomeUnknown,

    /// Fichier illisible (ouverture, lecture, ou contenu non UTF-8)
    #[error("{path}: {source}", path = .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Une ligne du fichier a été rejetée par l'évaluateur
    #[error("{path}:{line}: {source}", path = .path.display())]
    Syntax {
        path: PathBuf,
        /// Numéro de ligne (commence à 1)
        line: usize,
        #[source]
        source: OptionError,
    },
}

/// Échec de la lecture des flags de la ligne de commande
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Flag inconnu (on garde le token complet, ex: "-x")
    #[error("no such option \"{0}\"")]
    UnknownOption(String),

    /// Flag qui attend un argument, en fin de liste
    #[error("\"-{0}\" requires 1 argument")]
    MissingArgument(char),

    /// Argument refusé par l'évaluateur (ex: "-c sol")
    #[error("\"-{flag}\" {source}")]
    InvalidValue {
        flag: char,
        #[source]
        source: OptionError,
    },
}

/// Échec de la récupération du prix
#[derive(Debug, Error)]
pub enum FetchError {
    /// Impossible de construire le client HTTP
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Erreur de transport (DNS, connexion, timeout, lecture du corps)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Statut HTTP hors 2xx
    #[error("coingecko returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Réponse sans prix exploitable (JSON invalide, clés absentes, ou 0)
    ///
    /// CoinGecko renvoie souvent une réponse vide quand on le spamme
    #[error("no {coin}/{fiat} price in response : coingecko timed out : try again in 60 seconds")]
    NoPrice { coin: Coin, fiat: Fiat },
}

/// Erreur de haut niveau d'une exécution, préfixée par le composant fautif
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error : {0}")]
    Config(#[from] ConfigError),

    #[error("option error : {0}")]
    Cli(#[from] CliError),

    #[error("network error : {0}")]
    Network(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = AppError::from(CliError::MissingArgument('a'));
        assert_eq!(err.to_string(), "option error : \"-a\" requires 1 argument");

        let err = AppError::from(ConfigError::Syntax {
            path: PathBuf::from("/tmp/coinprice.conf"),
            line: 3,
            source: OptionError::UnknownOption("foo".to_string()),
        });
        assert_eq!(
            err.to_string(),
            "config error : /tmp/coinprice.conf:3: no such config option \"foo\""
        );
    }

    #[test]
    fn test_invalid_value_message() {
        let err = CliError::InvalidValue {
            flag: 'f',
            source: OptionError::UnknownFiat("jpy".to_string()),
        };
        assert_eq!(err.to_string(), "\"-f\" unknown fiat currency \"jpy\"");
    }
}
