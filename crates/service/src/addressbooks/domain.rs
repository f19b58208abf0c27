//! Wire DTOs for addressbooks, contacts, orgs and addresses.
//!
//! Every entity carries an optional `id` (assigned on create when absent) and a
//! flattened block of audit fields. Enum-valued attributes travel as their
//! upper-case names, e.g. `"addressType": "EMAIL"`.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Declares a fieldless enum with its upper-case wire names, mirrored by
/// `as_str` / `FromStr` for the relational backend's text columns.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self { $(Self::$variant => $wire),+ }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ServiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ServiceError::validation(format!(
                        concat!("unknown ", stringify!($name), " `{}`"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// Kind of contact channel an address describes.
    AddressType {
        Phone => "PHONE",
        Email => "EMAIL",
        Web => "WEB",
        Messaging => "MESSAGING",
        Postal => "POSTAL",
    }
);

wire_enum!(
    AttributeType {
        Home => "HOME",
        Work => "WORK",
        Other => "OTHER",
    }
);

wire_enum!(
    /// Messaging network; only meaningful for `AddressType::Messaging`.
    MessageType {
        Twitter => "TWITTER",
        Facebook => "FACEBOOK",
        Flickr => "FLICKR",
        Skype => "SKYPE",
        Linkedin => "LINKEDIN",
        Other => "OTHER",
    }
);

wire_enum!(
    OrgType {
        Club => "CLUB",
        Company => "COMPANY",
        Cooperation => "COOPERATION",
        Foundation => "FOUNDATION",
        Ltd => "LTD",
        Ngo => "NGO",
        Other => "OTHER",
        PublicOrganization => "PUBLIC_ORGANIZATION",
        SoleProprietorship => "SOLE_PROPRIETORSHIP",
    }
);

impl Default for OrgType {
    fn default() -> Self { Self::Other }
}

/// Creation and modification stamps, owned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

impl AuditFields {
    /// Fresh stamps for a newly created entity; created and modified coincide.
    pub fn created(at: DateTime<Utc>, by: &str) -> Self {
        Self {
            created_at: Some(at),
            created_by: Some(by.to_string()),
            modified_at: Some(at),
            modified_by: Some(by.to_string()),
        }
    }

    /// Keep the creation stamps of `previous` and stamp a modification.
    pub fn modified(previous: &Self, at: DateTime<Utc>, by: &str) -> Self {
        Self {
            created_at: previous.created_at,
            created_by: previous.created_by.clone(),
            modified_at: Some(at),
            modified_by: Some(by.to_string()),
        }
    }
}

/// Current time at the precision both backends can store (microseconds).
pub fn audit_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Behaviour shared by all four entity kinds.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human-readable kind used in error messages and log fields.
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    fn audit(&self) -> &AuditFields;
    fn audit_mut(&mut self) -> &mut AuditFields;

    /// Fill derived fields, then check mandatory and consistency rules.
    fn normalize_and_validate(&mut self) -> Result<(), ServiceError>;

    /// Text a list `query` is matched against.
    fn search_text(&self) -> String;
}

/// Order by id, entities without an id first.
pub fn compare_by_id<T: Resource>(a: &T, b: &T) -> Ordering {
    match (a.id(), b.id()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

/// Segments under `/api/addressbooks` taken by the aggregate listings.
pub const RESERVED_ADDRESSBOOK_IDS: [&str; 2] = ["allContacts", "allOrgs"];

fn is_blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn join_text<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addressbook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Resource for Addressbook {
    const KIND: &'static str = "addressbook";

    fn id(&self) -> Option<&str> { self.id.as_deref() }
    fn set_id(&mut self, id: String) { self.id = Some(id); }
    fn audit(&self) -> &AuditFields { &self.audit }
    fn audit_mut(&mut self) -> &mut AuditFields { &mut self.audit }

    fn normalize_and_validate(&mut self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::validation("addressbook must have a valid name"));
        }
        if let Some(id) = self.id.as_deref().filter(|id| RESERVED_ADDRESSBOOK_IDS.contains(id)) {
            return Err(ServiceError::validation(format!("addressbook id <{id}> is reserved")));
        }
        Ok(())
    }

    fn search_text(&self) -> String {
        join_text([Some(self.name.as_str()), self.description.as_deref()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Formatted name; derived from first and last name when absent.
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Resource for Contact {
    const KIND: &'static str = "contact";

    fn id(&self) -> Option<&str> { self.id.as_deref() }
    fn set_id(&mut self, id: String) { self.id = Some(id); }
    fn audit(&self) -> &AuditFields { &self.audit }
    fn audit_mut(&mut self) -> &mut AuditFields { &mut self.audit }

    fn normalize_and_validate(&mut self) -> Result<(), ServiceError> {
        if is_blank(&self.first_name) && is_blank(&self.last_name) {
            return Err(ServiceError::validation("contact must have a firstName or a lastName"));
        }
        if is_blank(&self.formatted_name) {
            let derived = join_text([self.first_name.as_deref(), self.last_name.as_deref()]);
            self.formatted_name = Some(derived.trim().to_string());
        }
        Ok(())
    }

    fn search_text(&self) -> String {
        join_text([
            self.formatted_name.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.nick_name.as_deref(),
            self.company.as_deref(),
            self.department.as_deref(),
            self.job_title.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker_symbol: Option<String>,
    #[serde(default)]
    pub org_type: OrgType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Resource for Org {
    const KIND: &'static str = "org";

    fn id(&self) -> Option<&str> { self.id.as_deref() }
    fn set_id(&mut self, id: String) { self.id = Some(id); }
    fn audit(&self) -> &AuditFields { &self.audit }
    fn audit_mut(&mut self) -> &mut AuditFields { &mut self.audit }

    fn normalize_and_validate(&mut self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::validation("org must have a valid name"));
        }
        Ok(())
    }

    fn search_text(&self) -> String {
        join_text([
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.ticker_symbol.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Mandatory; optional here so a missing value is a validation error, not a parse error.
    #[serde(default)]
    pub address_type: Option<AddressType>,
    #[serde(default)]
    pub attribute_type: Option<AttributeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<MessageType>,
    /// Phone number, email address, URL or handle; unused for postal addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166 numeric country code, 0 when not applicable.
    #[serde(default)]
    pub country_code: i16,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Address {
    /// Ordering used for deterministic address listings.
    pub fn compare_by_id(a: &Self, b: &Self) -> Ordering {
        compare_by_id(a, b)
    }
}

impl Resource for Address {
    const KIND: &'static str = "address";

    fn id(&self) -> Option<&str> { self.id.as_deref() }
    fn set_id(&mut self, id: String) { self.id = Some(id); }
    fn audit(&self) -> &AuditFields { &self.audit }
    fn audit_mut(&mut self) -> &mut AuditFields { &mut self.audit }

    fn normalize_and_validate(&mut self) -> Result<(), ServiceError> {
        let Some(address_type) = self.address_type else {
            return Err(ServiceError::validation("address must have an addressType"));
        };
        if self.attribute_type.is_none() {
            return Err(ServiceError::validation("address must have an attributeType"));
        }
        match address_type {
            AddressType::Postal => {
                if is_blank(&self.street) {
                    return Err(ServiceError::validation("postal address must have a street"));
                }
            }
            _ => {
                if is_blank(&self.value) {
                    return Err(ServiceError::validation(format!("{address_type} address must have a value")));
                }
            }
        }
        match (address_type, self.msg_type) {
            (AddressType::Messaging, None) => {
                Err(ServiceError::validation("messaging address must have a msgType"))
            }
            (t, Some(_)) if t != AddressType::Messaging => {
                Err(ServiceError::validation(format!("msgType is only allowed on MESSAGING addresses, not {t}")))
            }
            _ => Ok(()),
        }
    }

    fn search_text(&self) -> String {
        join_text([
            self.value.as_deref(),
            self.street.as_deref(),
            self.postal_code.as_deref(),
            self.city.as_deref(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> Address {
        Address {
            address_type: Some(AddressType::Email),
            attribute_type: Some(AttributeType::Work),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    #[test]
    fn aggregate_segments_are_not_addressbook_ids() {
        for id in RESERVED_ADDRESSBOOK_IDS {
            let mut ab = Addressbook { id: Some(id.into()), name: "Acme".into(), ..Default::default() };
            assert!(matches!(ab.normalize_and_validate(), Err(ServiceError::Validation(_))));
        }
        let mut ab = Addressbook { id: Some("allcontacts".into()), name: "Acme".into(), ..Default::default() };
        assert!(ab.normalize_and_validate().is_ok());
    }

    #[test]
    fn messaging_without_msg_type_is_rejected() {
        let mut a = Address {
            address_type: Some(AddressType::Messaging),
            attribute_type: Some(AttributeType::Home),
            value: Some("@jo".into()),
            ..Default::default()
        };
        assert!(matches!(a.normalize_and_validate(), Err(ServiceError::Validation(_))));
        a.msg_type = Some(MessageType::Twitter);
        assert!(a.normalize_and_validate().is_ok());
    }

    #[test]
    fn postal_needs_street_not_value() {
        let mut ok = Address {
            address_type: Some(AddressType::Postal),
            attribute_type: Some(AttributeType::Work),
            street: Some("Main Street 1".into()),
            city: Some("Zurich".into()),
            ..Default::default()
        };
        assert!(ok.normalize_and_validate().is_ok());

        let mut bad = Address {
            address_type: Some(AddressType::Postal),
            attribute_type: Some(AttributeType::Work),
            value: Some("Main Street 1, Zurich".into()),
            ..Default::default()
        };
        assert!(matches!(bad.normalize_and_validate(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn mandatory_types_and_value() {
        let mut a = email("jo@acme.com");
        a.attribute_type = None;
        assert!(a.normalize_and_validate().is_err());

        let mut a = email("jo@acme.com");
        a.address_type = None;
        assert!(a.normalize_and_validate().is_err());

        let mut a = email("  ");
        assert!(a.normalize_and_validate().is_err());

        let mut a = email("jo@acme.com");
        a.msg_type = Some(MessageType::Skype);
        assert!(a.normalize_and_validate().is_err());
    }

    #[test]
    fn contact_derives_formatted_name() -> Result<(), ServiceError> {
        let mut c = Contact { first_name: Some("Jo".into()), last_name: Some("Doe".into()), ..Default::default() };
        c.normalize_and_validate()?;
        assert_eq!(c.formatted_name.as_deref(), Some("Jo Doe"));

        let mut only_first = Contact { first_name: Some("Jo".into()), ..Default::default() };
        only_first.normalize_and_validate()?;
        assert_eq!(only_first.formatted_name.as_deref(), Some("Jo"));

        let mut nameless = Contact { nick_name: Some("JD".into()), ..Default::default() };
        assert!(nameless.normalize_and_validate().is_err());
        Ok(())
    }

    #[test]
    fn comparator_puts_missing_id_first() {
        let mut items = vec![
            Address { id: Some("b".into()), ..email("b@x.io") },
            Address { id: None, ..email("none@x.io") },
            Address { id: Some("a".into()), ..email("a@x.io") },
        ];
        items.sort_by(Address::compare_by_id);
        let ids: Vec<_> = items.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![None, Some("a".to_string()), Some("b".to_string())]);
    }

    #[test]
    fn wire_format_is_camel_case_with_upper_enums() -> Result<(), serde_json::Error> {
        let mut a = email("jo@acme.com");
        a.id = Some("a1".into());
        a.audit = AuditFields::created(audit_now(), "tester");
        let json = serde_json::to_value(&a)?;
        assert_eq!(json["addressType"], "EMAIL");
        assert_eq!(json["attributeType"], "WORK");
        assert_eq!(json["countryCode"], 0);
        assert_eq!(json["createdBy"], "tester");
        assert!(json.get("msgType").is_none());

        let back: Address = serde_json::from_value(json)?;
        assert_eq!(back, a);
        Ok(())
    }

    #[test]
    fn org_type_defaults_and_parses() -> Result<(), ServiceError> {
        let org: Org = serde_json::from_str(r#"{"name":"Acme"}"#).map_err(|e| ServiceError::validation(e.to_string()))?;
        assert_eq!(org.org_type, OrgType::Other);
        assert_eq!("PUBLIC_ORGANIZATION".parse::<OrgType>()?, OrgType::PublicOrganization);
        assert!("public".parse::<OrgType>().is_err());
        Ok(())
    }

    #[test]
    fn contact_fn_field_name() -> Result<(), serde_json::Error> {
        let c: Contact = serde_json::from_str(r#"{"fn":"Dr. Jo","firstName":"Jo"}"#)?;
        assert_eq!(c.formatted_name.as_deref(), Some("Dr. Jo"));
        Ok(())
    }
}
