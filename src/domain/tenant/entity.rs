//! Tenant details supplied by the broker host

use serde::{Deserialize, Serialize};

use crate::domain::team::{TeamName, TeamValidationError};

/// Identity of the platform tenant behind a broker request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantDetails {
    pub organization_name: String,
    pub organization_guid: String,
    pub space_guid: String,
}

impl TenantDetails {
    pub fn new(
        organization_name: impl Into<String>,
        organization_guid: impl Into<String>,
        space_guid: impl Into<String>,
    ) -> Self {
        Self {
            organization_name: organization_name.into(),
            organization_guid: organization_guid.into(),
            space_guid: space_guid.into(),
        }
    }

    /// Name of the Concourse team owned by this tenant's organization.
    ///
    /// Every space of an organization maps onto the same team.
    pub fn team_name(&self) -> Result<TeamName, TeamValidationError> {
        TeamName::for_organization(&self.organization_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_follows_organization() {
        let details = TenantDetails::new("acme", "g1", "s1");
        assert_eq!(details.team_name().unwrap().as_str(), "acme");
    }

    #[test]
    fn test_spaces_of_one_organization_share_a_team() {
        let first = TenantDetails::new("acme", "g1", "s1");
        let second = TenantDetails::new("acme", "g1", "s2");

        assert_eq!(first.team_name().unwrap(), second.team_name().unwrap());
    }

    #[test]
    fn test_empty_organization_name_is_rejected() {
        let details = TenantDetails::new("", "g1", "s1");
        assert_eq!(
            details.team_name(),
            Err(TeamValidationError::EmptyOrganizationName)
        );
    }
}
