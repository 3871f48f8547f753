// ============================================================================
// Chargement du fichier de config
// ============================================================================
// Cherche le fichier de config, le lit ligne par ligne et applique chaque
// ligne aux Settings via le parser puis l'évaluateur.
//
// Emplacements testés, dans l'ordre (le premier qui existe gagne) :
// - ~/.config/coinprice/config
// - ~/.config/coinprice.conf
// - ~/.coinprice.conf
//
// Aucun fichier trouvé n'est PAS une erreur : on garde les valeurs par défaut.
//
// CONCEPT RUST : RAII
// - Le File est fermé automatiquement quand il sort du scope (Drop)
// - Succès, erreur de lecture ou ligne invalide : le fichier est toujours libéré
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::config::{evaluator, parser};
use crate::error::ConfigError;
use crate::models::Settings;

/// Chemins candidats, relatifs au répertoire HOME
pub const CANDIDATE_PATHS: [&str; 3] = [
    ".config/coinprice/config",
    ".config/coinprice.conf",
    ".coinprice.conf",
];

/// Provenance de la configuration appliquée
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Fichier lu et appliqué
    File(PathBuf),

    /// Aucun fichier trouvé, valeurs par défaut conservées
    Absent,
}

/// Charge la config dans `settings`
///
/// Avec `explicit_path`, ce fichier est lu directement. Sinon le fichier est
/// cherché sous le HOME de l'utilisateur (résolu par `dirs`).
pub fn load(settings: &mut Settings, explicit_path: Option<&Path>) -> Result<ConfigSource, ConfigError> {
    load_with_home(settings, explicit_path, dirs::home_dir().as_deref())
}

/// Comme `load`, avec un répertoire HOME fourni par l'appelant
///
/// Le HOME n'est consulté que si aucun chemin explicite n'est donné.
pub fn load_with_home(
    settings: &mut Settings,
    explicit_path: Option<&Path>,
    home: Option<&Path>,
) -> Result<ConfigSource, ConfigError> {
    if let Some(path) = explicit_path {
        read_file(settings, path)?;
        return Ok(ConfigSource::File(path.to_path_buf()));
    }

    let home = home.ok_or(ConfigError::HomeUnknown)?;

    match find_config(home) {
        Some(path) => {
            read_file(settings, &path)?;
            Ok(ConfigSource::File(path))
        }
        None => {
            info!(home = %home.display(), "No config file found, using defaults");
            Ok(ConfigSource::Absent)
        }
    }
}

/// Retourne les chemins candidats complets pour un HOME donné
pub fn candidate_paths(home: &Path) -> Vec<PathBuf> {
    CANDIDATE_PATHS.iter().map(|relative| home.join(relative)).collect()
}

/// Premier chemin candidat qui existe
pub fn find_config(home: &Path) -> Option<PathBuf> {
    candidate_paths(home).into_iter().find(|path| {
        let exists = path.exists();
        debug!(path = %path.display(), exists, "Probing config path");
        exists
    })
}

/// Lit un fichier de config et applique ses lignes
#[instrument(skip(settings, path), fields(path = %path.display()))]
pub fn read_file(settings: &mut Settings, path: &Path) -> Result<(), ConfigError> {
    let unreadable = |source: std::io::Error| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    // Le scope limite la durée de vie du File : fermé avant le parsing
    let text = {
        let mut file = File::open(path).map_err(unreadable)?;
        let mut text = String::new();
        file.read_to_string(&mut text).map_err(unreadable)?;
        text
    };

    let applied = apply_text(settings, &text, path)?;
    info!(lines = applied, "Config file applied");
    Ok(())
}

/// Applique le contenu d'un fichier de config, ligne par ligne
///
/// Seules les lignes terminées par '\n' sont traitées : le segment après le
/// dernier '\n' (vide, ou ligne non terminée) est ignoré. La première ligne
/// invalide arrête tout ; les lignes précédentes restent appliquées.
///
/// Retourne le nombre de lignes appliquées.
pub fn apply_text(settings: &mut Settings, text: &str, path: &Path) -> Result<usize, ConfigError> {
    let mut applied = 0;

    // CONCEPT RUST : split_inclusive + strip_suffix
    // - split_inclusive garde le '\n' à la fin de chaque morceau
    // - strip_suffix ne réussit que pour les lignes réellement terminées
    for (index, chunk) in text.split_inclusive('\n').enumerate() {
        let Some(raw) = chunk.strip_suffix('\n') else {
            warn!(line = index + 1, content = chunk, "Ignoring unterminated last line");
            continue;
        };

        let line = parser::parse_line(raw);
        evaluator::apply(settings, line.command, line.value).map_err(|source| {
            ConfigError::Syntax {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            }
        })?;
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;
    use crate::models::{Coin, Fiat};

    fn conf() -> &'static Path {
        Path::new("test.conf")
    }

    #[test]
    fn test_apply_text() {
        let mut settings = Settings::default();
        let applied = apply_text(&mut settings, "coin=xmr\nfiat=gbp\nholdings=1.5\n", conf()).unwrap();

        assert_eq!(applied, 3);
        assert_eq!(settings.coin, Coin::Xmr);
        assert_eq!(settings.fiat, Fiat::Gbp);
        assert_eq!(settings.holdings, 1.5);
    }

    #[test]
    fn test_unterminated_last_line_is_skipped() {
        let mut settings = Settings::default();
        let applied = apply_text(&mut settings, "coin=eth\nfiat=eur", conf()).unwrap();

        assert_eq!(applied, 1);
        assert_eq!(settings.coin, Coin::Eth);
        assert_eq!(settings.fiat, Fiat::Usd);
    }

    #[test]
    fn test_failure_keeps_previous_lines() {
        let mut settings = Settings::default();
        let err = apply_text(&mut settings, "coin=doge\nfoo=bar\nfiat=eur\n", conf()).unwrap_err();

        match err {
            ConfigError::Syntax { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source, OptionError::UnknownOption("foo".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(settings.coin, Coin::Doge);
        assert_eq!(settings.fiat, Fiat::Usd);
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let mut settings = Settings::default();
        let err = apply_text(&mut settings, "coin=btc\n\n", conf()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Syntax { line: 2, source: OptionError::UnknownOption(ref cmd), .. } if cmd.is_empty()
        ));
    }

    #[test]
    fn test_empty_file() {
        let mut settings = Settings::default();
        assert_eq!(apply_text(&mut settings, "", conf()).unwrap(), 0);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_candidate_paths_order() {
        let paths = candidate_paths(Path::new("/home/alice"));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/home/alice/.config/coinprice/config"),
                PathBuf::from("/home/alice/.config/coinprice.conf"),
                PathBuf::from("/home/alice/.coinprice.conf"),
            ]
        );
    }

    #[test]
    fn test_explicit_path_without_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explicit.conf");
        std::fs::write(&path, "fiat=gbp\n").unwrap();

        let mut settings = Settings::default();
        let source = load_with_home(&mut settings, Some(&path), None).unwrap();

        assert_eq!(source, ConfigSource::File(path));
        assert_eq!(settings.fiat, Fiat::Gbp);
    }

    #[test]
    fn test_missing_home() {
        let mut settings = Settings::default();
        assert!(matches!(
            load_with_home(&mut settings, None, None),
            Err(ConfigError::HomeUnknown)
        ));
    }
}
