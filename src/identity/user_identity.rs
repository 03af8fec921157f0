use super::Role;

///
/// Identity of the authenticated user the feed belongs to.
/// Passed explicitly into services that need it.
///
#[derive(Clone, Debug)]
pub struct UserIdentity {
    pub email: String,
    pub role: Role,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        let email = email.into();

        Self { email, role }
    }

    ///
    /// Key of the per-user live-update channel.
    ///
    /// The email is case-folded because server-side channel
    /// routing is case-sensitive.
    ///
    pub fn channel_key(&self) -> String {
        self.email.to_lowercase()
    }
}
