use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Create/update payload; the server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

const ADDRESS_MIN_LENGTH: usize = 5;

impl CustomerDraft {
    /// Field-keyed validation errors, checked before any network call.
    pub fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errs = Vec::new();

        if self.name.trim().is_empty() {
            errs.push(("name", "Name is required".to_string()));
        }

        if self.email.trim().is_empty() {
            errs.push(("email", "Email is required".to_string()));
        } else if !email_shaped(&self.email) {
            errs.push(("email", "Invalid email format".to_string()));
        }

        if self.phone.trim().is_empty() {
            errs.push(("phone", "Phone is required".to_string()));
        } else if !us_phone_shaped(&self.phone) {
            errs.push(("phone", "Invalid US phone number".to_string()));
        }

        let address = self.address.trim();
        if address.is_empty() {
            errs.push(("address", "Address is required".to_string()));
        } else if address.len() < ADDRESS_MIN_LENGTH {
            errs.push((
                "address",
                format!("Address must be at least {} characters", ADDRESS_MIN_LENGTH),
            ));
        }

        errs
    }
}

/// local@domain.tld with no whitespace in any part.
fn email_shaped(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// US phone shapes: optional +1, optional 3-digit area code (parens allowed),
/// then 3+4 digits with space/dot/dash separators.
fn us_phone_shaped(s: &str) -> bool {
    let mut rest = s.trim();
    if let Some(stripped) = rest.strip_prefix("+1") {
        rest = stripped.trim_start();
    }
    let digits: String = rest
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(digits.len(), 7 | 10)
}

/// Maps the backend's raw UNIQUE-constraint message to an operator-facing alert.
pub fn uniqueness_hint(backend_message: &str) -> Option<&'static str> {
    match backend_message {
        "UNIQUE constraint failed: customers.email" => {
            Some("Email already exists. Please use a different email.")
        }
        "UNIQUE constraint failed: customers.phone" => {
            Some("Phone number already exists. Please use a different phone number.")
        }
        "UNIQUE constraint failed: customers.address" => {
            Some("Address already exists. Please use a different address.")
        }
        _ => None,
    }
}

/// `{"totalCustomers": N}` from the totals endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CustomerTotals {
    #[serde(rename = "totalCustomers", default)]
    pub total_customers: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CustomerDraft {
        CustomerDraft {
            name: "Jane Miller".into(),
            email: "jane@example.com".into(),
            phone: "(555) 123-4567".into(),
            address: "12 Harbor Street".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(draft().validate().is_empty());
    }

    #[test]
    fn test_all_fields_required() {
        let errs = CustomerDraft::default().validate();
        let fields: Vec<_> = errs.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "address"]);
    }

    #[test]
    fn test_email_shapes() {
        assert!(email_shaped("a@b.co"));
        assert!(!email_shaped("a@b"));
        assert!(!email_shaped("a b@c.co"));
        assert!(!email_shaped("@b.co"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(us_phone_shaped("555-123-4567"));
        assert!(us_phone_shaped("(555) 123 4567"));
        assert!(us_phone_shaped("+1 5551234567"));
        assert!(us_phone_shaped("123-4567"));
        assert!(!us_phone_shaped("12345"));
        assert!(!us_phone_shaped("call me"));
    }

    #[test]
    fn test_short_address_rejected() {
        let mut d = draft();
        d.address = "12 H".into();
        let errs = d.validate();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].0, "address");
    }

    #[test]
    fn test_uniqueness_hint_mapping() {
        assert!(uniqueness_hint("UNIQUE constraint failed: customers.email")
            .unwrap()
            .contains("Email"));
        assert!(uniqueness_hint("something else").is_none());
    }
}
