//! Declarative access policy for organization-scoped actions.
//!
//! One table answers every "may this role do that?" question. Guards resolve
//! the caller's active membership and consult `allows`; platform admins and
//! superusers are handled before the table is reached.

use db::models::organization_member::Role;

/// Actions a member can attempt within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ManageOrganization,
    ManageMembers,
    ManageSubscriptions,
    ManageEvents,
    RecordAttendance,
    ViewAttendance,
    ViewEvents,
}

/// The full role/action grant table.
///
/// A role is allowed exactly the actions listed here. Unknown combinations
/// deny, so adding an `Action` variant defaults to "no one but org admins".
const POLICY: &[(Role, &[Action])] = &[
    (
        Role::Admin,
        &[
            Action::ManageOrganization,
            Action::ManageMembers,
            Action::ManageSubscriptions,
            Action::ManageEvents,
            Action::RecordAttendance,
            Action::ViewAttendance,
            Action::ViewEvents,
        ],
    ),
    (
        Role::Officer,
        &[
            Action::ManageEvents,
            Action::RecordAttendance,
            Action::ViewAttendance,
            Action::ViewEvents,
        ],
    ),
    (Role::Member, &[Action::ViewAttendance, Action::ViewEvents]),
];

/// Returns whether `role` may perform `action`.
pub fn allows(role: Role, action: Action) -> bool {
    POLICY
        .iter()
        .find(|(r, _)| *r == role)
        .is_some_and(|(_, actions)| actions.contains(&action))
}
