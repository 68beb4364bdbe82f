//! # Holder Attributes
//!
//! The holder's private attribute data: identity fields and academic
//! credential fields. This type is deliberately **not** serializable —
//! attributes never leave the holder's process in clear and are consumed
//! only as circuit witness input or for legacy local derivation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Academic degree levels, ordered by rank.
///
/// The rank ordering backs the `degree level ≥ required` predicate:
/// Associate (1) through Professional (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DegreeLevel {
    /// Associate degree, rank 1.
    Associate,
    /// Bachelor degree, rank 2.
    Bachelor,
    /// Master degree, rank 3.
    Master,
    /// Doctorate, rank 4.
    Doctorate,
    /// Professional degree (MD, JD, ...), rank 5.
    Professional,
}

impl DegreeLevel {
    /// Numeric rank used in circuit inputs (1-5).
    pub fn rank(&self) -> u8 {
        match self {
            DegreeLevel::Associate => 1,
            DegreeLevel::Bachelor => 2,
            DegreeLevel::Master => 3,
            DegreeLevel::Doctorate => 4,
            DegreeLevel::Professional => 5,
        }
    }

    /// Look up a level by its numeric rank.
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(DegreeLevel::Associate),
            2 => Some(DegreeLevel::Bachelor),
            3 => Some(DegreeLevel::Master),
            4 => Some(DegreeLevel::Doctorate),
            5 => Some(DegreeLevel::Professional),
            _ => None,
        }
    }
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeLevel::Associate => write!(f, "Associate"),
            DegreeLevel::Bachelor => write!(f, "Bachelor"),
            DegreeLevel::Master => write!(f, "Master"),
            DegreeLevel::Doctorate => write!(f, "Doctorate"),
            DegreeLevel::Professional => write!(f, "Professional"),
        }
    }
}

impl FromStr for DegreeLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Associate" => Ok(DegreeLevel::Associate),
            "Bachelor" => Ok(DegreeLevel::Bachelor),
            "Master" => Ok(DegreeLevel::Master),
            "Doctorate" => Ok(DegreeLevel::Doctorate),
            "Professional" => Ok(DegreeLevel::Professional),
            other => Err(CoreError::UnknownDegreeLevel(other.to_string())),
        }
    }
}

/// Holder-only structured attribute data.
///
/// Created or loaded once per holder session and held only in memory.
/// Not `Serialize`: the only sanctioned outputs derived from this type
/// are the commitment digest and circuit witness values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    /// Legal name.
    pub name: String,
    /// Year of birth.
    pub birth_year: u16,
    /// ISO country code of residence.
    pub country: String,
    /// Highest academic degree level held.
    pub degree_level: DegreeLevel,
    /// Field of study.
    pub field_of_study: String,
    /// Issuing institution.
    pub institution: String,
    /// Year of graduation.
    pub graduation_year: u16,
}

impl AttributeSet {
    /// Canonical textual encoding of the credential fields, used by the
    /// legacy commitment derivation:
    /// `"{degree}-{field}-{institution}-{graduation_year}"`.
    pub fn canonical_string(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.degree_level, self.field_of_study, self.institution, self.graduation_year
        )
    }
}
