//! Demo accounts for the `claimdesk` binary.
//!
//! One account per role, all with the password `demo`. Not used by the
//! library itself.

use claimdesk_auth::{CredentialDirectory, Identity, Role};
use claimdesk_core::DomainResult;

use crate::statistics::{DashboardStatistics, StaticStatistics};

pub const DEMO_PASSWORD: &str = "demo";

pub fn demo_directory() -> DomainResult<CredentialDirectory> {
    let mut directory = CredentialDirectory::new();
    directory.insert(
        DEMO_PASSWORD,
        Identity::new("Ministry Projects Directorate", "employer@claimdesk.test", Role::Authority),
    )?;
    directory.insert(
        DEMO_PASSWORD,
        Identity::new("Resident Engineer", "engineer@claimdesk.test", Role::Consultant),
    )?;
    directory.insert(
        DEMO_PASSWORD,
        Identity::new("Main Contractor", "contractor@claimdesk.test", Role::Contractor),
    )?;
    Ok(directory)
}

pub fn demo_statistics() -> StaticStatistics {
    StaticStatistics(DashboardStatistics {
        open_variations: 14,
        pending_notices: 3,
        open_claims: 6,
        pending_approvals: 5,
    })
}
