use crate::primitive::{Boolean, FhirString, PositiveInt, Primitive};
use crate::r4::codesystem::AccountStatus;
use crate::r4::datatypes::{CodeableConcept, Identifier, Period, Reference};

fhir_domain_resource! {
    /// Tracks balance, charges, for patient or cost center
    pub struct Account: "Account" {
        /// Account number
        identifier: Vec<Identifier> = "identifier",
        /// active | inactive | entered-in-error | on-hold | unknown
        status: Primitive<AccountStatus> = "status" [required],
        /// E.g. patient, expense, depreciation
        account_type: Option<CodeableConcept> = "type",
        /// Human-readable label
        name: Option<FhirString> = "name",
        /// The entity that caused the expenses
        subject: Vec<Reference> = "subject",
        /// Transaction window
        service_period: Option<Period> = "servicePeriod",
        /// The party(s) that are responsible for covering the payment of this account, and what order should they be applied to the account
        coverage: Vec<AccountCoverage> = "coverage",
        /// Entity managing the Account
        owner: Option<Reference> = "owner",
        /// Explanation of purpose/use
        description: Option<FhirString> = "description",
        /// The parties ultimately responsible for balancing the Account
        guarantor: Vec<AccountGuarantor> = "guarantor",
        /// Reference to a parent Account
        part_of: Option<Reference> = "partOf",
    }
}

fhir_backbone! {
    /// The party(s) that are responsible for covering the payment of this account
    pub struct AccountCoverage {
        /// The party(s), such as insurances, that may contribute to the payment of this account
        coverage: Reference = "coverage" [required],
        /// The priority of the coverage in the context of this account
        priority: Option<PositiveInt> = "priority",
    }
}

fhir_backbone! {
    /// The parties ultimately responsible for balancing the Account
    pub struct AccountGuarantor {
        /// Responsible entity
        party: Reference = "party" [required],
        /// Credit or other hold applied
        on_hold: Option<Boolean> = "onHold",
        /// Guarantee account during
        period: Option<Period> = "period",
    }
}

impl Account {
    /// Coverages ordered by priority; coverages without one come last.
    pub fn coverage_by_priority(&self) -> Vec<&AccountCoverage> {
        let mut coverage: Vec<_> = self.coverage.iter().collect();
        coverage.sort_by_key(|c| c.priority.as_ref().and_then(|p| p.value).unwrap_or(u32::MAX));
        coverage
    }
}
