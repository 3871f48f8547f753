// ============================================================================
// Module : config
// ============================================================================
// Fichier de configuration "commande=valeur" :
// - parser    : découpe une ligne en (commande, valeur)
// - evaluator : valide et applique une commande aux Settings
// - loader    : trouve et lit le fichier de config
// ============================================================================

pub mod evaluator; // Table des commandes + application aux Settings
pub mod loader;    // Recherche et lecture du fichier
pub mod parser;    // Découpe d'une ligne sur le dernier '='

pub use evaluator::{apply, apply_token, TokenDescriptor};
pub use loader::{load, load_with_home, ConfigSource};
pub use parser::{parse_line, ConfigLine};
