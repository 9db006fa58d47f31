//! Visitor-country detection for offer targeting.
//!
//! Primary: Cloudflare's trace endpoint (plain text `key=value` lines, the
//! `loc` field). Fallback: GeoJS. Total failure collapses to the `Global`
//! sentinel; nothing here ever surfaces an error to the page.

use serde::Deserialize;

/// Region used when no country could be detected (and the key of the
/// catch-all offer list).
pub const GLOBAL_REGION: &str = "Global";

const TRACE_URL: &str = "https://www.cloudflare.com/cdn-cgi/trace";
const COUNTRY_FALLBACK_URL: &str = "https://get.geojs.io/v1/ip/country.json";

#[derive(Debug, Deserialize)]
struct CountryLookup {
    country: Option<String>,
}

/// Extract `loc` from a trace body ("h=... ip=... loc=US ..."), upcased.
pub fn parse_trace_country(body: &str) -> Option<String> {
    body.lines().find_map(|line| {
        let (key, value) = line.trim().split_once('=')?;
        (key == "loc" && !value.is_empty()).then(|| value.to_uppercase())
    })
}

pub async fn detect_country(client: &reqwest::Client) -> String {
    match trace_lookup(client).await {
        Ok(Some(country)) => return country,
        Ok(None) => tracing::warn!("trace response carried no loc field, trying backup"),
        Err(e) => tracing::warn!("cloudflare trace failed ({e}), trying backup"),
    }

    match fallback_lookup(client).await {
        Ok(Some(country)) => return country,
        Ok(None) => tracing::warn!("country lookup returned no country"),
        Err(e) => tracing::warn!("country lookup failed: {e}"),
    }

    GLOBAL_REGION.to_string()
}

async fn trace_lookup(client: &reqwest::Client) -> Result<Option<String>, reqwest::Error> {
    let body = client.get(TRACE_URL).send().await?.text().await?;
    Ok(parse_trace_country(&body))
}

async fn fallback_lookup(client: &reqwest::Client) -> Result<Option<String>, reqwest::Error> {
    let lookup: CountryLookup = client
        .get(COUNTRY_FALLBACK_URL)
        .send()
        .await?
        .json()
        .await?;
    Ok(lookup
        .country
        .map(|c| c.to_uppercase())
        .filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_bodies_parse_to_the_loc_field() {
        let body = "fl=123\nh=www.cloudflare.com\nip=203.0.113.9\nloc=br\ntls=TLSv1.3\n";
        assert_eq!(parse_trace_country(body), Some("BR".to_string()));
    }

    #[test]
    fn missing_loc_yields_none() {
        assert_eq!(parse_trace_country("h=x\nip=203.0.113.9\n"), None);
        assert_eq!(parse_trace_country(""), None);
        assert_eq!(parse_trace_country("loc=\n"), None);
    }
}
