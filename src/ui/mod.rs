// ============================================================================
// Module : ui
// ============================================================================
// Sortie utilisateur : une ligne de résultat sur stdout
// ============================================================================

pub mod output; // Formatage du prix et des conversions

// Re-exports pour simplifier les imports
pub use output::render;
