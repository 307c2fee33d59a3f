//! Email provider classification.

use phf::phf_set;
use serde::Serialize;

/// Consumer webmail domains. Anything outside this set counts as a business
/// domain.
static PUBLIC_PROVIDERS: phf::Set<&'static str> = phf_set! {
	"gmail.com",
	"googlemail.com",
	"yahoo.com",
	"yahoo.de",
	"ymail.com",
	"hotmail.com",
	"hotmail.de",
	"outlook.com",
	"outlook.de",
	"live.com",
	"live.de",
	"msn.com",
	"icloud.com",
	"me.com",
	"mac.com",
	"aol.com",
	"aol.de",
	"web.de",
	"gmx.de",
	"gmx.net",
	"gmx.com",
	"gmx.at",
	"t-online.de",
	"freenet.de",
	"arcor.de",
	"online.de",
	"email.de",
	"posteo.de",
	"mailbox.org",
	"protonmail.com",
	"proton.me",
};

/// Provider category of an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	/// A well-known consumer webmail service.
	Public,
	/// Any other domain.
	Business,
}

/// Return the lower-cased portion of `email` after the `@`.
///
/// Loaded records always contain exactly one `@`; for anything else the whole
/// string is treated as the domain so the function stays total.
#[must_use]
pub fn domain_of(email: &str) -> String {
	let domain = match email.split_once('@') {
		Some((_, domain)) => domain,
		None => email,
	};
	domain.trim().to_lowercase()
}

#[must_use]
pub fn is_public_provider(email: &str) -> bool {
	PUBLIC_PROVIDERS.contains(domain_of(email).as_str())
}

#[must_use]
pub fn classify(email: &str) -> ProviderKind {
	if is_public_provider(email) {
		ProviderKind::Public
	} else {
		ProviderKind::Business
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn domain_is_lower_cased() {
		assert_eq!(domain_of("Hallo@Cafe-Rheinufer.DE"), "cafe-rheinufer.de");
	}

	#[test]
	fn consumer_domains_are_public_regardless_of_case() {
		assert!(is_public_provider("someone@gmail.com"));
		assert!(is_public_provider("someone@GMX.de"));
		assert!(is_public_provider("someone@t-online.de"));
		assert_eq!(classify("someone@Web.de"), ProviderKind::Public);
	}

	#[test]
	fn other_domains_are_business() {
		assert!(!is_public_provider("b@firma.de"));
		assert_eq!(classify("b@firma.de"), ProviderKind::Business);
		// Subdomains of a public provider are not the provider itself.
		assert_eq!(classify("b@mail.gmail.com.firma.de"), ProviderKind::Business);
	}

	#[test]
	fn classification_depends_on_domain_only() {
		assert_eq!(classify("alpha@gmail.com"), classify("zeta@GMAIL.COM"));
		assert_eq!(classify("alpha@firma.de"), classify("zeta@firma.de"));
	}
}
