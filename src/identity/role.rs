//!
//! All roles used within application
//!

use strum::{AsRefStr, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Role {
    #[strum(serialize = "super-admin")]
    SuperAdmin,
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "recruiter")]
    Recruiter,
    #[strum(serialize = "employee-admin")]
    EmployeeAdmin,
    #[strum(serialize = "employee")]
    Employee,
    #[strum(serialize = "candidate")]
    Candidate,
}

impl Role {
    ///
    /// Path segment of the role-namespaced REST API.
    /// Endpoints differ by namespace only, semantics are identical.
    ///
    pub fn api_segment(&self) -> &str {
        self.as_ref()
    }
}
