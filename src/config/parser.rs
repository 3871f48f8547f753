// ============================================================================
// Parser de ligne de config
// ============================================================================
// Découpe une ligne "commande=valeur" en deux tokens, sans aucun trim.
//
// Règle de découpe : c'est le DERNIER '=' qui sépare commande et valeur.
// - "coin=btc"  -> ("coin", "btc")
// - "a=b=c"     -> ("a=b", "c")
// - "coin"      -> ("", "")   (pas de '=' : index de coupe 0, tout est vide)
// - ""          -> ("", "")
// - " coin=btc" -> (" coin", "btc") -> rejeté ensuite par l'évaluateur
//
// CONCEPT RUST : Lifetimes
// - ConfigLine<'a> emprunte la ligne d'origine (&'a str)
// - Aucune allocation : les tokens sont des sous-slices de la ligne
// ============================================================================

/// Couple (commande, valeur) extrait d'une ligne, consommé immédiatement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLine<'a> {
    pub command: &'a str,
    pub value: &'a str,
}

/// Découpe une ligne (sans '\n' final) sur son dernier '='
///
/// Les fichiers de config existants peuvent dépendre de cette règle
/// (valeur qui contient un '='), elle est donc conservée telle quelle.
pub fn parse_line(line: &str) -> ConfigLine<'_> {
    // CONCEPT RUST : rfind + slicing
    // - rfind retourne l'index en octets du dernier '=' (ASCII, donc
    //   toujours sur une frontière de caractère UTF-8)
    // - line[..i] et line[i + 1..] ne paniquent pas
    match line.rfind('=') {
        Some(split) => ConfigLine {
            command: &line[..split],
            value: &line[split + 1..],
        },
        None => ConfigLine {
            command: "",
            value: "",
        },
    }
}
