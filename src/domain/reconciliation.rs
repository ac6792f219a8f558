use super::Role;

/// Where the person named in an add-member request stands relative to the
/// target project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipState<'a> {
    /// No member has the requested email.
    UnknownEmail,
    /// The member exists but is not on the project.
    NotInProject,
    /// The member is already on the project with the given role.
    InProject { role: Option<&'a Role> },
}

/// What a store must do to satisfy an add-member request.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Insert the member and associate them with the project.
    CreateMember,
    /// Associate the existing member with the project.
    JoinProject,
    /// Change the role the member holds on the project.
    UpdateRole(Role),
    /// Nothing to change; the request is a duplicate.
    AlreadyMember,
}

/// Decides how an add-member request is applied.
///
/// Supplying a role that differs from the one already held on the project
/// edits that role rather than failing, while repeating a request without a
/// new role is a conflict.
pub fn reconcile(
    state: MembershipState<'_>,
    requested_role: Option<&Role>,
) -> Reconciliation {
    match state {
        MembershipState::UnknownEmail => Reconciliation::CreateMember,
        MembershipState::NotInProject => Reconciliation::JoinProject,
        MembershipState::InProject { role: current } => match requested_role {
            Some(requested) if Some(requested) != current => {
                Reconciliation::UpdateRole(requested.clone())
            }
            _ => Reconciliation::AlreadyMember,
        },
    }
}
