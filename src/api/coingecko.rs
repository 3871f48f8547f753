// ============================================================================
// API Client : CoinGecko
// ============================================================================
// Récupère le prix d'une crypto dans une fiat via l'endpoint "simple/price"
//
// Réponse attendue : {"bitcoin": {"usd": 43123.0}}
// - les clés dépendent de la crypto et de la fiat choisies
// - on lit donc un serde_json::Value plutôt qu'une struct figée
//
// Une seule requête par exécution, pas de retry ni de cache.
// ============================================================================

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::error::FetchError;
use crate::models::{Coin, Fiat};

/// User-Agent envoyé à CoinGecko
const USER_AGENT: &str = concat!("coinprice/", env!("CARGO_PKG_VERSION"));

/// Récupère le prix unitaire de `coin` en `fiat` depuis CoinGecko
///
/// Un prix absent ou nul est une erreur : CoinGecko renvoie une réponse vide
/// quand il limite les requêtes, et on ne sait pas distinguer ce cas d'un
/// vrai prix à 0.
pub async fn fetch_price(coin: Coin, fiat: Fiat) -> Result<f64, FetchError> {
    fetch_price_at(&coin.price_url(fiat), coin, fiat).await
}

/// Comme `fetch_price`, sur une URL donnée
///
/// CONCEPT RUST : #[instrument]
/// - Ajoute un span avec coin et fiat à tous les logs de la fonction
#[instrument(skip_all, fields(coin = %coin, fiat = %fiat))]
pub async fn fetch_price_at(url: &str, coin: Coin, fiat: Fiat) -> Result<f64, FetchError> {
    debug!(url, "Creating HTTP client");
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)?;

    debug!("Sending HTTP request to CoinGecko");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    debug!(status = %status, "Received HTTP response");

    if !status.is_success() {
        error!(status = %status, "CoinGecko returned error status");
        return Err(FetchError::Status(status));
    }

    let body = response.text().await.map_err(FetchError::Transport)?;

    match extract_price(&body, coin, fiat) {
        Some(price) if price != 0.0 => {
            info!(price, "Successfully fetched price");
            Ok(price)
        }
        Some(_) => {
            warn!("CoinGecko returned a zero price");
            Err(FetchError::NoPrice { coin, fiat })
        }
        None => {
            warn!(body = %body, "No price found in CoinGecko response");
            Err(FetchError::NoPrice { coin, fiat })
        }
    }
}

/// Lit `body[coin.full_name()][fiat.name()]` comme un nombre
///
/// Retourne None si le JSON est invalide, si une clé manque, ou si la
/// valeur n'est pas un nombre.
///
/// CONCEPT RUST : Option chaining
/// - .ok()? transforme l'erreur de parsing en early return None
/// - Value::get retourne None si la clé manque ou si ce n'est pas un objet
pub fn extract_price(body: &str, coin: Coin, fiat: Fiat) -> Option<f64> {
    let root: Value = serde_json::from_str(body).ok()?;
    root.get(coin.full_name())?.get(fiat.name())?.as_f64()
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_price() {
        let body = r#"{"ethereum":{"eur":2100.5}}"#;
        assert_eq!(extract_price(body, Coin::Eth, Fiat::Eur), Some(2100.5));

        let body = r#"{"bitcoin":{"usd":43123}}"#;
        assert_eq!(extract_price(body, Coin::Btc, Fiat::Usd), Some(43123.0));
    }

    #[test]
    fn test_extract_price_missing_data() {
        assert_eq!(extract_price("{}", Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price("not json", Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price("", Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price(r#"{"bitcoin":{}}"#, Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price(r#"{"bitcoin":{"gbp":1.0}}"#, Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price(r#"{"bitcoin":{"usd":"1.0"}}"#, Coin::Btc, Fiat::Usd), None);
        assert_eq!(extract_price(r#"{"monero":{"usd":1.0}}"#, Coin::Btc, Fiat::Usd), None);
    }

    #[tokio::test]
    async fn test_fetch_price_connection_refused() {
        // Port 1 : personne n'écoute, la connexion échoue tout de suite
        let result = fetch_price_at("http://127.0.0.1:1/simple/price", Coin::Btc, Fiat::Usd).await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    // Test avec un vrai appel API (peut échouer si pas de connexion)
    #[tokio::test]
    async fn test_fetch_price_live() {
        match fetch_price(Coin::Btc, Fiat::Usd).await {
            Ok(price) => {
                assert!(price > 0.0);
                println!("✓ 1 btc = ${:.2}", price);
            }
            Err(e) => {
                println!("⚠ Test skippé (pas de connexion?) : {}", e);
            }
        }
    }
}
