//! Contact link resolution: turns raw header fields into clickable URIs or nothing.

use serde::{Deserialize, Serialize};

use crate::models::{ResumeDocument, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Linkedin,
    Github,
    Portfolio,
    Website,
}

impl ContactKind {
    /// Parses a kind label case-insensitively. Unknown labels are treated as websites.
    pub fn from_label(label: &str) -> ContactKind {
        match label.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => ContactKind::Email,
            "phone" | "tel" => ContactKind::Phone,
            "linkedin" => ContactKind::Linkedin,
            "github" => ContactKind::Github,
            "portfolio" => ContactKind::Portfolio,
            _ => ContactKind::Website,
        }
    }

    /// Header field that feeds this kind, if any.
    fn section(&self) -> Option<SectionKey> {
        match self {
            ContactKind::Email => Some(SectionKey::Email),
            ContactKind::Phone => Some(SectionKey::Phone),
            ContactKind::Linkedin => Some(SectionKey::Linkedin),
            ContactKind::Github => Some(SectionKey::Github),
            ContactKind::Portfolio => Some(SectionKey::Portfolio),
            ContactKind::Website => None,
        }
    }
}

/// A resolved contact link, derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Display text: the cleaned raw value.
    pub label: String,
    pub uri: String,
}

const LINKEDIN_DOMAIN: &str = "linkedin.com";
const GITHUB_DOMAIN: &str = "github.com";

/// Characters that may not appear anywhere in a URI.
const URI_ILLEGAL: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Builds a scheme-correct URI for a contact value, or `None` when it cannot be linked.
pub fn resolve_contact_uri(kind: ContactKind, raw: Option<&str>) -> Option<String> {
    let cleaned = strip_invisible(raw?);
    let value = cleaned.trim();
    if value.is_empty() {
        return None;
    }

    match kind {
        ContactKind::Email => {
            let address = strip_prefix_ignore_case(value, "mailto:").trim();
            let well_formed =
                address.contains('@') && address.contains('.') && is_uri_safe(address);
            well_formed.then(|| format!("mailto:{address}"))
        }
        ContactKind::Phone => {
            let number = strip_prefix_ignore_case(value, "tel:").trim();
            let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return None;
            }
            let plus = if number.starts_with('+') { "+" } else { "" };
            Some(format!("tel:{plus}{digits}"))
        }
        ContactKind::Linkedin => profile_uri(value, LINKEDIN_DOMAIN, "https://linkedin.com/in/"),
        ContactKind::Github => profile_uri(value, GITHUB_DOMAIN, "https://github.com/"),
        ContactKind::Portfolio | ContactKind::Website => web_uri(value),
    }
}

/// Resolves every linkable header field of `document`, in a fixed order.
pub fn contact_links(document: &ResumeDocument) -> Vec<ContactLink> {
    [
        ContactKind::Email,
        ContactKind::Phone,
        ContactKind::Linkedin,
        ContactKind::Github,
        ContactKind::Portfolio,
    ]
    .into_iter()
    .filter_map(|kind| {
        let raw = document.text(kind.section()?);
        let uri = resolve_contact_uri(kind, Some(raw))?;
        Some(ContactLink {
            kind,
            label: strip_invisible(raw).trim().to_string(),
            uri,
        })
    })
    .collect()
}

fn profile_uri(value: &str, domain: &str, profile_base: &str) -> Option<String> {
    if value.to_ascii_lowercase().contains(domain) || scheme_of(value).is_some() {
        return web_uri(value);
    }
    let handle = value.trim_start_matches('@').trim_matches('/');
    if handle.is_empty() || !is_uri_safe(handle) {
        return None;
    }
    Some(format!("{profile_base}{handle}"))
}

/// `value` as a web link. `https://` is prefixed unless an http(s) scheme is already
/// present; any other scheme, or a character a URI cannot carry, yields `None`.
fn web_uri(value: &str) -> Option<String> {
    if !is_uri_safe(value) {
        return None;
    }
    if let Some(rest) = value.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    match scheme_of(value) {
        None => Some(format!("https://{value}")),
        Some(scheme)
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            value[scheme.len() + 1..].starts_with("//").then(|| value.to_string())
        }
        Some(_) => None,
    }
}

/// The `scheme` of a leading `scheme:`. A colon followed by a digit is a port
/// (`ada.dev:8080`), not a scheme.
fn scheme_of(value: &str) -> Option<&str> {
    let (scheme, rest) = value.split_once(':')?;
    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let is_port = rest.starts_with(|c: char| c.is_ascii_digit());
    (well_formed && !is_port).then_some(scheme)
}

fn is_uri_safe(value: &str) -> bool {
    !value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || URI_ILLEGAL.contains(&c))
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> &'a str {
    match value.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &value[prefix.len()..],
        _ => value,
    }
}

fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}'
    )
}

fn strip_invisible(value: &str) -> String {
    value.chars().filter(|c| !is_invisible(*c)).collect()
}
