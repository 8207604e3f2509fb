//! Project creation draft and its boundary validation

use crate::error::SessionError;
use resafe_gateway::CreateProjectRequest;

/// What the analyst typed into the new-project form
///
/// Validation happens here, before anything reaches a catalog or the
/// gateway; an invalid draft mutates nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub domain: String,
    pub owner: String,
    pub description: String,
}

impl ProjectDraft {
    /// Draft with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate and convert into the creation request
    ///
    /// Rules: trimmed name required, 4..=120 chars; domain, when given,
    /// 3..=120; owner up to 120; description up to 500. Blank optionals are
    /// omitted from the request entirely.
    ///
    /// # Errors
    /// The first failing field is reported; the form marks it invalid and
    /// nothing else happens.
    pub fn into_request(self) -> Result<CreateProjectRequest, SessionError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(SessionError::validation("name", "is required"));
        }
        if name.chars().count() < 4 {
            return Err(SessionError::validation("name", "must be at least 4 characters"));
        }
        if name.chars().count() > 120 {
            return Err(SessionError::validation("name", "must be at most 120 characters"));
        }

        let domain = self.domain.trim();
        if !domain.is_empty() && !(3..=120).contains(&domain.chars().count()) {
            return Err(SessionError::validation("domain", "must be 3 to 120 characters"));
        }

        let owner = self.owner.trim();
        if owner.chars().count() > 120 {
            return Err(SessionError::validation("owner", "must be at most 120 characters"));
        }

        let description = self.description.trim();
        if description.chars().count() > 500 {
            return Err(SessionError::validation(
                "description",
                "must be at most 500 characters",
            ));
        }

        let mut request = CreateProjectRequest::new(name);
        if !domain.is_empty() {
            request.domain = Some(domain.to_string());
        }
        if !owner.is_empty() {
            request.owner = Some(owner.to_string());
        }
        if !description.is_empty() {
            request.description = Some(description.to_string());
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_valid_draft_converts() {
        let request = ProjectDraft::named("Insulin Infusion Pump")
            .into_request()
            .unwrap();
        assert_eq!(request.name, "Insulin Infusion Pump");
        assert_eq!(request.current_step, 1);
        assert_eq!(request.domain, None);
    }

    #[test]
    fn whitespace_only_name_is_required_error() {
        let err = ProjectDraft::named("   ").into_request().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn short_name_rejected() {
        assert!(ProjectDraft::named("IIP").into_request().is_err());
        assert!(ProjectDraft::named("IIP4").into_request().is_ok());
    }

    #[test]
    fn short_domain_rejected_but_blank_allowed() {
        let mut draft = ProjectDraft::named("Insulin Pump");
        draft.domain = "ab".into();
        assert!(draft.clone().into_request().is_err());

        draft.domain = "  ".into();
        assert!(draft.into_request().is_ok());
    }

    #[test]
    fn long_description_rejected() {
        let mut draft = ProjectDraft::named("Insulin Pump");
        draft.description = "x".repeat(501);
        assert!(draft.into_request().is_err());
    }

    #[test]
    fn trimmed_optionals_carry_through() {
        let mut draft = ProjectDraft::named("  Insulin Pump  ");
        draft.owner = " Safety Lead ".into();
        let request = draft.into_request().unwrap();

        assert_eq!(request.name, "Insulin Pump");
        assert_eq!(request.owner.as_deref(), Some("Safety Lead"));
    }
}
