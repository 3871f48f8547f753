// ============================================================================
// coinprice - Point d'entrée
// ============================================================================
// Affiche le prix d'une crypto dans une fiat, ou convertit un montant.
//
//   coinprice [-a amount] [-b] [-c coin] [-C] [-f fiat] [-F] [-h] [-p]
//
// Codes de sortie :
// - 0 : succès, une ligne sur stdout
// - 1 : erreur (config, flags, réseau), une ligne sur stderr
// - 2 : aide affichée
// ============================================================================

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};

use coinprice::app::{self, Invocation};
use coinprice::cli;

/// Code de sortie après l'affichage de l'aide
const HELP_EXIT_CODE: u8 = 2;

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - Layer : transforme et route les logs
/// - EnvFilter : filtre par niveau (RUST_LOG env var)
/// - RollingFileAppender : rotation automatique
///
/// Les logs ne vont jamais sur stdout/stderr : la sortie reste exploitable
/// par un script. Ils sont écrits dans :
/// - Linux : ~/.local/share/coinprice/logs/coinprice.log
/// - macOS : ~/Library/Application Support/coinprice/logs/coinprice.log
/// - Windows : C:\Users\<user>\AppData\Local\coinprice\logs\coinprice.log
///
/// # Utilisation
/// ```bash
/// RUST_LOG=coinprice=trace coinprice -c eth
/// tail ~/.local/share/coinprice/logs/coinprice.log.*
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = dirs::data_local_dir()
        .context("Répertoire de données introuvable")?
        .join("coinprice")
        .join("logs");

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    // Nouveau fichier chaque jour : coinprice.log.2024-01-15
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "coinprice.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour coinprice, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coinprice=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

fn main() -> ExitCode {
    // Si le logging échoue, on continue sans : ce n'est pas une erreur d'exécution
    init_logging().unwrap_or_else(|e| {
        eprintln!("warning : logging disabled : {e:#}");
    });

    // args_os : un argument non UTF-8 ne doit pas faire paniquer le programme
    let args = cli::collect_args(std::env::args_os());
    let program = args.first().map(String::as_str).unwrap_or("coinprice");

    match run(&args) {
        Ok(Some(line)) => {
            println!("{line}");
            info!("Run completed");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            print!("{}", cli::usage(program));
            ExitCode::from(HELP_EXIT_CODE)
        }
        Err(e) => {
            error!(error = ?e, "Run failed");
            // Les messages des erreurs typées incluent déjà leur cause
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Résout les Settings, récupère le prix et retourne la ligne à afficher
///
/// Retourne Ok(None) quand l'aide est demandée.
///
/// CONCEPT RUST : Async dans sync
/// - main() reste synchrone
/// - un runtime tokio mono-thread exécute l'unique requête avec block_on()
fn run(args: &[String]) -> Result<Option<String>> {
    let settings = match app::resolve(args, None)? {
        Invocation::Run(settings) => settings,
        Invocation::Help => return Ok(None),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Échec de la création du runtime tokio")?;
    let line = runtime.block_on(app::execute(&settings))?;

    Ok(Some(line))
}
