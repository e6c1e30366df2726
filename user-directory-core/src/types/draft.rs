use serde::{Deserialize, Serialize};

use super::{Address, Company, FieldPath, Geo, UserRecord, ValidationError};

/// Editable copy of a [`UserRecord`].
///
/// Every leaf is a plain string; absent values read as `""`. The draft never
/// carries an id, an edit takes its id from the form mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: AddressDraft,
    pub company: CompanyDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDraft {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    /// Not editable, carried through edits.
    pub geo: GeoDraft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoDraft {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: String,
    /// Not editable, carried through edits.
    pub catch_phrase: String,
    /// Not editable, carried through edits.
    pub bs: String,
}

fn or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Hidden leaves are only put on the wire when they hold something.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl UserDraft {
    /// Hydrate a draft from a fetched record, absent fields become `""`.
    pub fn from_record(record: &UserRecord) -> Self {
        let address = record.address.as_ref();
        let geo = address.and_then(|a| a.geo.as_ref());
        let company = record.company.as_ref();

        Self {
            name: record.name.clone(),
            username: or_empty(record.username.as_ref()),
            email: record.email.clone(),
            phone: record.phone.clone(),
            website: or_empty(record.website.as_ref()),
            address: AddressDraft {
                street: or_empty(address.and_then(|a| a.street.as_ref())),
                suite: or_empty(address.and_then(|a| a.suite.as_ref())),
                city: or_empty(address.and_then(|a| a.city.as_ref())),
                zipcode: or_empty(address.and_then(|a| a.zipcode.as_ref())),
                geo: GeoDraft {
                    lat: or_empty(geo.and_then(|g| g.lat.as_ref())),
                    lng: or_empty(geo.and_then(|g| g.lng.as_ref())),
                },
            },
            company: CompanyDraft {
                name: or_empty(company.and_then(|c| c.name.as_ref())),
                catch_phrase: or_empty(company.and_then(|c| c.catch_phrase.as_ref())),
                bs: or_empty(company.and_then(|c| c.bs.as_ref())),
            },
        }
    }

    /// Whole-object payload for create/update.
    ///
    /// Every form field is sent, empty or not. Geo and the catch phrase / bs
    /// are sent only when non-empty so a record that never had them does not
    /// gain empty ones.
    pub fn to_record(&self) -> UserRecord {
        let geo = (!self.address.geo.lat.is_empty() || !self.address.geo.lng.is_empty()).then(
            || Geo {
                lat: non_empty(&self.address.geo.lat),
                lng: non_empty(&self.address.geo.lng),
            },
        );

        UserRecord {
            id: None,
            name: self.name.clone(),
            username: Some(self.username.clone()),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: Some(self.website.clone()),
            address: Some(Address {
                street: Some(self.address.street.clone()),
                suite: Some(self.address.suite.clone()),
                city: Some(self.address.city.clone()),
                zipcode: Some(self.address.zipcode.clone()),
                geo,
            }),
            company: Some(Company {
                name: Some(self.company.name.clone()),
                catch_phrase: non_empty(&self.company.catch_phrase),
                bs: non_empty(&self.company.bs),
            }),
        }
    }

    /// Current value of an editable leaf.
    pub fn field(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::Name => &self.name,
            FieldPath::Username => &self.username,
            FieldPath::Email => &self.email,
            FieldPath::Phone => &self.phone,
            FieldPath::Website => &self.website,
            FieldPath::AddressStreet => &self.address.street,
            FieldPath::AddressSuite => &self.address.suite,
            FieldPath::AddressCity => &self.address.city,
            FieldPath::AddressZipcode => &self.address.zipcode,
            FieldPath::CompanyName => &self.company.name,
        }
    }

    /// New draft with only the leaf at `path` replaced.
    #[must_use]
    pub fn with_field(&self, path: FieldPath, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match path {
            FieldPath::Name => &mut next.name,
            FieldPath::Username => &mut next.username,
            FieldPath::Email => &mut next.email,
            FieldPath::Phone => &mut next.phone,
            FieldPath::Website => &mut next.website,
            FieldPath::AddressStreet => &mut next.address.street,
            FieldPath::AddressSuite => &mut next.address.suite,
            FieldPath::AddressCity => &mut next.address.city,
            FieldPath::AddressZipcode => &mut next.address.zipcode,
            FieldPath::CompanyName => &mut next.company.name,
        };
        *slot = value.into();
        next
    }

    /// Check the required fields in order, first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::PhoneRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, phone: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..UserDraft::default()
        }
    }

    fn full_record() -> UserRecord {
        UserRecord {
            id: Some(1),
            name: "Leanne Graham".to_string(),
            username: Some("Bret".to_string()),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
            website: Some("hildegard.org".to_string()),
            address: Some(Address {
                street: Some("Kulas Light".to_string()),
                suite: Some("Apt. 556".to_string()),
                city: Some("Gwenborough".to_string()),
                zipcode: Some("92998-3874".to_string()),
                geo: Some(Geo {
                    lat: Some("-37.3159".to_string()),
                    lng: Some("81.1496".to_string()),
                }),
            }),
            company: Some(Company {
                name: Some("Romaguera-Crona".to_string()),
                catch_phrase: Some("Multi-layered client-server neural-net".to_string()),
                bs: Some("harness real-time e-markets".to_string()),
            }),
        }
    }

    // ---- validate ----

    #[test]
    fn empty_draft_reports_name_first() {
        assert_eq!(draft("", "", "").validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(draft("  ", "a@b", "1").validate(), Err(ValidationError::NameRequired));
        assert_eq!(draft("A", " \t", "1").validate(), Err(ValidationError::EmailRequired));
        assert_eq!(draft("A", "a@b", "   ").validate(), Err(ValidationError::PhoneRequired));
    }

    #[test]
    fn email_without_at_sign_rejected() {
        assert_eq!(
            draft("A", "no-at-sign", "1").validate(),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn email_format_checked_before_phone() {
        assert_eq!(draft("A", "x", "").validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(draft("A", "a@b.com", "1").validate(), Ok(()));
    }

    // ---- with_field ----

    #[test]
    fn nested_update_keeps_siblings() {
        let before = UserDraft::from_record(&full_record());
        let after = before.with_field(FieldPath::AddressCity, "Metropolis");

        assert_eq!(after.address.city, "Metropolis");
        assert_eq!(after.address.street, before.address.street);
        assert_eq!(after.address.geo, before.address.geo);

        let mut expected = before.clone();
        expected.address.city = "Metropolis".to_string();
        assert_eq!(after, expected);
        // original left untouched
        assert_eq!(before.address.city, "Gwenborough");
    }

    #[test]
    fn every_path_touches_exactly_one_leaf() {
        let base = UserDraft::from_record(&full_record());
        for path in FieldPath::ALL {
            let next = base.with_field(path, "changed");
            assert_eq!(next.field(path), "changed");
            for other in FieldPath::ALL.into_iter().filter(|p| *p != path) {
                assert_eq!(next.field(other), base.field(other), "{path} leaked into {other}");
            }
            assert_eq!(next.address.geo, base.address.geo);
            assert_eq!(next.company.bs, base.company.bs);
        }
    }

    // ---- hydrate ----

    #[test]
    fn hydrate_sparse_record_fills_empty_strings() {
        let record = UserRecord {
            name: "A".to_string(),
            ..UserRecord::default()
        };
        let d = UserDraft::from_record(&record);
        assert_eq!(d.name, "A");
        assert_eq!(d.address, AddressDraft::default());
        assert_eq!(d.company, CompanyDraft::default());
        assert_eq!(d.username, "");
        assert_eq!(d.website, "");
    }

    // ---- to_record ----

    #[test]
    fn hydrate_then_payload_preserves_defined_fields() {
        let record = full_record();
        let payload = UserDraft::from_record(&record).to_record();
        assert_eq!(payload.id, None);
        assert_eq!(
            payload,
            UserRecord {
                id: None,
                ..record
            }
        );
    }

    #[test]
    fn payload_omits_hidden_leaves_that_were_never_set() {
        let payload = draft("A", "a@b.c", "1").to_record();
        let address = payload.address.unwrap();
        assert!(address.geo.is_none());
        assert_eq!(address.city.as_deref(), Some(""));
        let company = payload.company.unwrap();
        assert!(company.catch_phrase.is_none());
        assert!(company.bs.is_none());
        assert_eq!(company.name.as_deref(), Some(""));
    }
}
