// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Closed vocabulary of PII categories emitted by every scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PII categories a scanner can report.
///
/// Codes and names are persisted by downstream systems: never renumber or
/// rename a variant, only append new ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiType {
    Phone = 1,
    Email = 2,
    CreditCard = 3,
    Address = 4,
    Person = 5,
    Location = 6,
    BirthDate = 7,
    Gender = 8,
    Nationality = 9,
    IpAddress = 10,
    Ssn = 11,
    UserName = 12,
    Password = 13,
}

impl PiiType {
    /// Every category, in code order
    pub const ALL: [PiiType; 13] = [
        PiiType::Phone,
        PiiType::Email,
        PiiType::CreditCard,
        PiiType::Address,
        PiiType::Person,
        PiiType::Location,
        PiiType::BirthDate,
        PiiType::Gender,
        PiiType::Nationality,
        PiiType::IpAddress,
        PiiType::Ssn,
        PiiType::UserName,
        PiiType::Password,
    ];

    /// Canonical name, as persisted and as exposed to Python
    pub fn as_str(&self) -> &'static str {
        match self {
            PiiType::Phone => "PHONE",
            PiiType::Email => "EMAIL",
            PiiType::CreditCard => "CREDIT_CARD",
            PiiType::Address => "ADDRESS",
            PiiType::Person => "PERSON",
            PiiType::Location => "LOCATION",
            PiiType::BirthDate => "BIRTH_DATE",
            PiiType::Gender => "GENDER",
            PiiType::Nationality => "NATIONALITY",
            PiiType::IpAddress => "IP_ADDRESS",
            PiiType::Ssn => "SSN",
            PiiType::UserName => "USER_NAME",
            PiiType::Password => "PASSWORD",
        }
    }

    /// Stable numeric code
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not part of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown PII type '{0}'")]
pub struct UnknownPiiType(pub String);

impl FromStr for PiiType {
    type Err = UnknownPiiType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PiiType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPiiType(s.to_string()))
    }
}
