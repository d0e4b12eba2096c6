use crate::assessment::Archetype;
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

pub const WHATSAPP_BASE: &str = "https://wa.me/?text=";
pub const LINKEDIN_BASE: &str = "https://www.linkedin.com/feed/?shareActive=true&text=";

/// Where a result can be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    LinkedIn,
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharePlatform::WhatsApp => write!(f, "WhatsApp"),
            SharePlatform::LinkedIn => write!(f, "LinkedIn"),
        }
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(SharePlatform::WhatsApp),
            "linkedin" | "li" => Ok(SharePlatform::LinkedIn),
            other => Err(format!(
                "unknown share platform '{}' (expected whatsapp or linkedin)",
                other
            )),
        }
    }
}

pub fn whatsapp_text(archetype: &Archetype, share_url: &str) -> String {
    format!(
        "I just got certified as a \"{}\" on AI-Q India! Check your AI readiness here: {}",
        archetype.title, share_url
    )
}

pub fn linkedin_text(archetype: &Archetype) -> String {
    let (first, last) = match archetype.highlighted_dimensions() {
        Some((first, last)) => (first.label, last.label),
        None => ("Prompting", "Risk Awareness"),
    };
    format!(
        "I'm thrilled to share that I've been certified as a \"{}\" by AI-Q India. \
         My AI-Q score shows high proficiency in {} and {}. \
         #AIQIndia #FutureOfWork #CareerReadiness",
        archetype.title, first, last
    )
}

/// Build the share link for `platform`.
pub fn share_url(platform: SharePlatform, archetype: &Archetype, base_url: &str) -> String {
    match platform {
        SharePlatform::WhatsApp => format!(
            "{}{}",
            WHATSAPP_BASE,
            encode_uri_component(&whatsapp_text(archetype, base_url))
        ),
        SharePlatform::LinkedIn => {
            let text = format!("{}\n\n{}", linkedin_text(archetype), base_url);
            format!("{}{}", LINKEDIN_BASE, encode_uri_component(&text))
        }
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, byte by
/// byte over the UTF-8 encoding.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    tracing::info!(url, "opened share link");
    Ok(())
}

/// Build and open the share link for `platform`.
pub fn share(platform: SharePlatform, archetype: &Archetype, base_url: &str) -> Result<()> {
    open_url(&share_url(platform, archetype, base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{calculate_result, FixedSource, Totals};

    fn visionary() -> Archetype {
        calculate_result(Totals::new(52, 51, 16), 12, &mut FixedSource::zero())
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("\"x\"!"), "%22x%22!");
        assert_eq!(encode_uri_component("https://ai-q.in"), "https%3A%2F%2Fai-q.in");
        assert_eq!(encode_uri_component("#AIQ\n"), "%23AIQ%0A");
        assert_eq!(encode_uri_component("(it's) ~*_."), "(it's)%20~*_.");
        assert_eq!(encode_uri_component("\u{2014}"), "%E2%80%94");
    }

    #[test]
    fn test_whatsapp_url() {
        let url = share_url(SharePlatform::WhatsApp, &visionary(), "https://ai-q.in");
        assert!(url.starts_with("https://wa.me/?text=I%20just%20got%20certified%20as%20a%20%22The%20Visionary%20Architect%22"));
        assert!(url.ends_with("here%3A%20https%3A%2F%2Fai-q.in"));
    }

    #[test]
    fn test_linkedin_text_quotes_first_and_last_dimension() {
        let text = linkedin_text(&visionary());
        assert!(text.contains("high proficiency in Prompting and Risk Awareness."));
        assert!(text.ends_with("#AIQIndia #FutureOfWork #CareerReadiness"));
    }

    #[test]
    fn test_linkedin_url_appends_link() {
        let url = share_url(SharePlatform::LinkedIn, &visionary(), "https://ai-q.in");
        assert!(url.starts_with(LINKEDIN_BASE));
        assert!(url.ends_with("%23CareerReadiness%0A%0Ahttps%3A%2F%2Fai-q.in"));
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("WhatsApp".parse::<SharePlatform>(), Ok(SharePlatform::WhatsApp));
        assert_eq!("linkedin".parse::<SharePlatform>(), Ok(SharePlatform::LinkedIn));
        assert!("twitter".parse::<SharePlatform>().is_err());
    }
}
