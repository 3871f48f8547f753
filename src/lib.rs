// ============================================================================
// coinprice - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;    // API CoinGecko
pub mod app;    // Déroulé d'une exécution (config -> flags -> fetch -> sortie)
pub mod cli;    // Lecture des flags
pub mod config; // Fichier de config "commande=valeur"
pub mod error;  // Erreurs typées
pub mod models; // Structures de données
pub mod ui;     // Ligne de sortie
