//! # Predicate Claims
//!
//! A claim is a typed, parameterized assertion about private attributes.
//! The claim itself carries only **public** parameters — the private
//! comparison value is supplied separately as a [`ClaimWitness`] and
//! never serialized.
//!
//! All numeric comparisons are integer and inclusive:
//! `age ≥ min_age`, `level ≥ required_level`,
//! `years_since_graduation ≤ max_years_ago`, `country == required`.

use serde::{Deserialize, Serialize};

use zkred_core::DegreeLevel;

/// A parameterized public assertion about a holder's private attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "predicate", rename_all = "snake_case")]
pub enum PredicateClaim {
    /// The holder knows the secret behind the commitment.
    Ownership,

    /// The holder's age, computed at `current_year`, is at least `min_age`.
    AgeAtLeast {
        /// Year the claim is evaluated in.
        current_year: u16,
        /// Minimum age, inclusive.
        min_age: u16,
    },

    /// The holder resides in `required_country`.
    ResidencyIn {
        /// Required ISO country code.
        required_country: String,
    },

    /// The holder's degree level is at least `required_level`.
    DegreeLevelAtLeast {
        /// Minimum degree level, inclusive.
        required_level: DegreeLevel,
    },

    /// The holder graduated within the last `max_years_ago` years.
    GraduationWithin {
        /// Year the claim is evaluated in.
        current_year: u16,
        /// Maximum years since graduation, inclusive.
        max_years_ago: u16,
    },
}

impl PredicateClaim {
    /// The circuit name this claim is proven by.
    pub fn circuit_name(&self) -> &'static str {
        match self {
            PredicateClaim::Ownership => "prove_credential_ownership",
            PredicateClaim::AgeAtLeast { .. } => "prove_age",
            PredicateClaim::ResidencyIn { .. } => "prove_residency",
            PredicateClaim::DegreeLevelAtLeast { .. } => "prove_degree_level",
            PredicateClaim::GraduationWithin { .. } => "prove_graduation_recency",
        }
    }

    /// Evaluate the claim against the private witness.
    ///
    /// Returns `false` for a witness whose shape does not match the
    /// claim — evaluation fails closed rather than guessing.
    pub fn holds(&self, witness: &ClaimWitness) -> bool {
        match (self, witness) {
            (PredicateClaim::Ownership, ClaimWitness::Ownership) => true,
            (
                PredicateClaim::AgeAtLeast {
                    current_year,
                    min_age,
                },
                ClaimWitness::BirthYear(birth_year),
            ) => {
                let age = i32::from(*current_year) - i32::from(*birth_year);
                age >= i32::from(*min_age)
            }
            (
                PredicateClaim::ResidencyIn { required_country },
                ClaimWitness::Country(actual_country),
            ) => required_country == actual_country,
            (
                PredicateClaim::DegreeLevelAtLeast { required_level },
                ClaimWitness::DegreeLevel(actual_level),
            ) => actual_level >= required_level,
            (
                PredicateClaim::GraduationWithin {
                    current_year,
                    max_years_ago,
                },
                ClaimWitness::GraduationYear(graduation_year),
            ) => {
                let years_since = i32::from(*current_year) - i32::from(*graduation_year);
                (0..=i32::from(*max_years_ago)).contains(&years_since)
            }
            _ => false,
        }
    }
}

/// The private comparison value for one claim, drawn from the holder's
/// attribute set. Deliberately not serializable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimWitness {
    /// Ownership needs no attribute beyond the secret itself.
    Ownership,
    /// Year of birth, for age claims.
    BirthYear(u16),
    /// Country of residence, for residency claims.
    Country(String),
    /// Degree level held, for degree claims.
    DegreeLevel(DegreeLevel),
    /// Year of graduation, for recency claims.
    GraduationYear(u16),
}
