//! Wire model for the remote users endpoint.
//!
//! Only the fields the employees table uses are modelled; everything else the
//! endpoint returns is ignored by serde.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Single letter used in the demography column.
    pub fn initial(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(UnknownGender(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// One user from `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    pub gender: Gender,
    pub age: u32,
    /// Top-level country. The live endpoint only reports a country inside
    /// `address`, so this is usually absent and never matches a country filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub company: Company,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default)]
    pub image: String,
}

impl UserRecord {
    /// `"{first} {maiden} {last}"`, skipping an empty maiden name.
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.maiden_name, &self.last_name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `"F/28"` style gender initial and age.
    pub fn demography(&self) -> String {
        format!("{}/{}", self.gender.initial(), self.age)
    }

    pub fn designation(&self) -> &str {
        &self.company.title
    }

    /// `"{state}, {country}"` from the address, or `"N/A"` without one.
    pub fn location(&self) -> String {
        match &self.address {
            Some(address) => format!("{}, {}", address.state, address.country),
            None => "N/A".to_owned(),
        }
    }

    /// Value of the field a sort key refers to, or `None` when the record has no
    /// such field.
    pub fn sort_value(&self, key: crate::SortKey) -> Option<SortValue<'_>> {
        match key {
            crate::SortKey::Id => Some(SortValue::Int(self.id)),
            // The "Name" column sorts on a `name` field the record does not carry.
            crate::SortKey::Name => None,
        }
    }
}

/// A comparable field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    Int(u64),
    Text(&'a str),
}

impl SortValue<'_> {
    /// Natural ordering for values of the same kind. Missing values and mixed
    /// kinds compare equal, so they keep their relative order under a stable sort.
    pub fn compare(a: Option<Self>, b: Option<Self>) -> Ordering {
        match (a, b) {
            (Some(Self::Int(a)), Some(Self::Int(b))) => a.cmp(&b),
            (Some(Self::Text(a)), Some(Self::Text(b))) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Body of `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1,
        "firstName": "Emily",
        "lastName": "Johnson",
        "maidenName": "Smith",
        "age": 28,
        "gender": "female",
        "email": "emily.johnson@x.dummyjson.com",
        "image": "https://dummyjson.com/icon/emilys/128",
        "address": {"address": "626 Main Street", "city": "Phoenix", "state": "Mississippi", "country": "United States"},
        "company": {"department": "Engineering", "name": "Dooley, Kozey and Cronin", "title": "Sales Manager"}
    }"#;

    #[test]
    fn parses_endpoint_record_and_ignores_unknown_fields() {
        let user: UserRecord = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.gender, Gender::Female);
        assert_eq!(user.country, None);
        assert_eq!(user.designation(), "Sales Manager");
        assert_eq!(user.display_name(), "Emily Smith Johnson");
        assert_eq!(user.demography(), "F/28");
        assert_eq!(user.location(), "Mississippi, United States");
    }

    #[test]
    fn missing_address_renders_not_available() {
        let mut user: UserRecord = serde_json::from_str(SAMPLE).unwrap();
        user.address = None;
        user.maiden_name.clear();

        assert_eq!(user.location(), "N/A");
        assert_eq!(user.display_name(), "Emily Johnson");
    }

    #[test]
    fn gender_round_trips_through_str() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>(), Ok(gender));
        }
        assert!("Female".parse::<Gender>().is_err());
    }

    #[test]
    fn missing_sort_values_compare_equal() {
        assert_eq!(
            SortValue::compare(Some(SortValue::Int(1)), Some(SortValue::Int(2))),
            Ordering::Less
        );
        assert_eq!(
            SortValue::compare(None, Some(SortValue::Int(2))),
            Ordering::Equal
        );
        assert_eq!(
            SortValue::compare(Some(SortValue::Text("a")), Some(SortValue::Int(2))),
            Ordering::Equal
        );
    }
}
