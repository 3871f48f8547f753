// ============================================================================
// Déroulé d'une exécution
// ============================================================================
// 1. Settings par défaut
// 2. fichier de config (optionnel)
// 3. flags de la ligne de commande (écrasent la config)
// 4. une requête de prix
// 5. une ligne de sortie
//
// Toute erreur arrête l'exécution : aucune requête réseau n'est faite si la
// config ou les flags sont invalides, rien n'est affiché si le fetch échoue.
// ============================================================================

use std::path::Path;

use tracing::{debug, info};

use crate::api::coingecko;
use crate::cli::{self, FlagOutcome};
use crate::config::{self, ConfigSource};
use crate::error::AppError;
use crate::models::Settings;
use crate::ui;

/// Ce que l'exécution doit faire une fois les Settings résolus
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Récupérer le prix et afficher le résultat
    Run(Settings),

    /// Afficher l'aide et s'arrêter
    Help,
}

/// Résout les Settings depuis la config (HOME de l'utilisateur) puis les flags
pub fn resolve<S: AsRef<str>>(args: &[S], config_path: Option<&Path>) -> Result<Invocation, AppError> {
    resolve_with_home(args, config_path, dirs::home_dir().as_deref())
}

/// Comme `resolve`, avec un HOME fourni par l'appelant
pub fn resolve_with_home<S: AsRef<str>>(
    args: &[S],
    config_path: Option<&Path>,
    home: Option<&Path>,
) -> Result<Invocation, AppError> {
    let mut settings = Settings::default();

    match config::load_with_home(&mut settings, config_path, home)? {
        ConfigSource::File(path) => debug!(path = %path.display(), "Config loaded"),
        ConfigSource::Absent => debug!("Running without config file"),
    }

    match cli::read_args(&mut settings, args)? {
        FlagOutcome::Proceed => {
            info!(coin = %settings.coin, fiat = %settings.fiat, display = ?settings.display, "Settings resolved");
            Ok(Invocation::Run(settings))
        }
        FlagOutcome::HelpRequested => Ok(Invocation::Help),
    }
}

/// Récupère le prix et construit la ligne à afficher
pub async fn execute(settings: &Settings) -> Result<String, AppError> {
    let price = coingecko::fetch_price(settings.coin, settings.fiat).await?;
    Ok(ui::render(settings, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, ConfigError};
    use crate::models::{Coin, Fiat};

    #[test]
    fn test_defaults_without_home_config() {
        let home = tempfile::tempdir().unwrap();
        let invocation = resolve_with_home(&["coinprice"], None, Some(home.path())).unwrap();
        assert_eq!(invocation, Invocation::Run(Settings::default()));
    }

    #[test]
    fn test_help() {
        let home = tempfile::tempdir().unwrap();
        let invocation = resolve_with_home(&["coinprice", "-h"], None, Some(home.path())).unwrap();
        assert_eq!(invocation, Invocation::Help);
    }

    #[test]
    fn test_config_error_stops_before_flags() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(".coinprice.conf"), "coin=sol\n").unwrap();

        // -h n'est jamais lu : la config a déjà échoué
        let err = resolve_with_home(&["coinprice", "-h"], None, Some(home.path())).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Syntax { line: 1, .. })));
    }

    #[test]
    fn test_flag_error() {
        let home = tempfile::tempdir().unwrap();
        let err = resolve_with_home(&["coinprice", "-f"], None, Some(home.path())).unwrap_err();
        assert!(matches!(err, AppError::Cli(CliError::MissingArgument('f'))));
    }

    #[test]
    fn test_explicit_path_ignores_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.conf");
        std::fs::write(&path, "coin=wow\nfiat=eur\n").unwrap();

        let invocation = resolve_with_home(&["coinprice"], Some(&path), None).unwrap();
        match invocation {
            Invocation::Run(settings) => {
                assert_eq!(settings.coin, Coin::Wow);
                assert_eq!(settings.fiat, Fiat::Eur);
            }
            Invocation::Help => panic!("help not requested"),
        }
    }
}
