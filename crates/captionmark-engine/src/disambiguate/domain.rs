use std::fmt;

/// One-letter second-level domains that are actually registered with IANA.
pub const IANA_ONE_LETTER_DOMAINS: [&str; 6] =
    ["x.com", "x.org", "z.com", "q.net", "q.com", "i.net"];

const ONE_LETTER_TLDS: [&str; 3] = [".com", ".org", ".net"];

/// Why a captured domain was not accepted as part of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRejection {
    /// Starts with `.` or `-`, as in `www...com` or `www.-foo.com`.
    LeadingSeparator,
    /// A one-letter `.com`/`.org`/`.net` domain not in the allowlist.
    UnregisteredOneLetter,
}

impl fmt::Display for DomainRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DomainRejection::LeadingSeparator => "domain starts with a separator",
            DomainRejection::UnregisteredOneLetter => "unregistered one-letter domain",
        })
    }
}

/// Checks the domain part captured by the URL pattern (port included).
pub fn validate_domain(domain: &str) -> Result<(), DomainRejection> {
    if domain.starts_with(['.', '-']) {
        return Err(DomainRejection::LeadingSeparator);
    }

    let lower = domain.to_lowercase();
    let one_letter =
        lower.chars().count() == 5 && ONE_LETTER_TLDS.iter().any(|tld| lower.ends_with(tld));
    if one_letter && !IANA_ONE_LETTER_DOMAINS.contains(&lower.as_str()) {
        return Err(DomainRejection::UnregisteredOneLetter);
    }

    Ok(())
}
