//! Validation profiles
//!
//! A profile is the pair of a catalog [`Domain`] and a profile
//! [`ValidationType`]. Together they select the SHACL rule set the remote
//! validator applies. Both sets are closed: clap rejects anything else
//! before a file is read or a request is built.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Catalog domain hosting the SHACL shapes
#[derive(Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Debug, Default)]
pub enum Domain {
    /// Health-RI national health data catalog
    #[default]
    #[value(name = "healthri")]
    Healthri,
    /// DCAT Application Profile for European data portals
    #[value(name = "dcat-ap")]
    DcatAp,
}

impl Domain {
    /// All known domains, in display order
    pub const ALL: [Domain; 2] = [Domain::Healthri, Domain::DcatAp];

    /// Identifier used in the validator URL path
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Healthri => "healthri",
            Domain::DcatAp => "dcat-ap",
        }
    }

    /// Human-readable description for the info command
    pub fn description(&self) -> &'static str {
        match self {
            Domain::Healthri => "For health research data catalogs",
            Domain::DcatAp => "For general European data catalogs",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile version understood by the validator
#[derive(Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Debug, Default, Serialize)]
pub enum ValidationType {
    /// HealthRI profile version 2.0.0
    #[default]
    #[value(name = "v2.0.0")]
    #[serde(rename = "v2.0.0")]
    V2_0_0,
    /// DCAT-AP profile version 3, Full level 1
    #[value(name = "v3.Full1")]
    #[serde(rename = "v3.Full1")]
    V3Full1,
    /// DCAT-AP profile version 3.0.1, Full
    #[value(name = "v3.0.1.Full1")]
    #[serde(rename = "v3.0.1.Full1")]
    V3_0_1Full1,
}

impl ValidationType {
    /// All known types, in display order
    pub const ALL: [ValidationType; 3] = [
        ValidationType::V2_0_0,
        ValidationType::V3Full1,
        ValidationType::V3_0_1Full1,
    ];

    /// Value sent as `validationType` in the request payload
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::V2_0_0 => "v2.0.0",
            ValidationType::V3Full1 => "v3.Full1",
            ValidationType::V3_0_1Full1 => "v3.0.1.Full1",
        }
    }

    /// Human-readable description for the info command
    pub fn description(&self) -> &'static str {
        match self {
            ValidationType::V2_0_0 => "HealthRI profile version 2.0.0",
            ValidationType::V3Full1 => "DCAT-AP profile version 3 Full Level 1",
            ValidationType::V3_0_1Full1 => "DCAT-AP profile version 3.0.1 Full",
        }
    }
}

impl fmt::Display for ValidationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain and type pair selecting a rule set
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Profile {
    pub domain: Domain,
    pub validation_type: ValidationType,
}

impl Profile {
    pub fn new(domain: Domain, validation_type: ValidationType) -> Self {
        Self {
            domain,
            validation_type,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.validation_type)
    }
}
