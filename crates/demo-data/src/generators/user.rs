//! Admin user generation.

use time::OffsetDateTime;
use uuid::Uuid;

/// Generated panel user ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// Generates the fixed demo admin account.
///
/// Unlike the other generators this one is deterministic: the demo set
/// always contains exactly one admin with a fixed name and email.
pub struct AdminUserGenerator {
    name: String,
    email: String,
    password: String,
}

impl AdminUserGenerator {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Generates the admin user.
    pub fn generate(&self) -> GeneratedUser {
        // Hash using the same algorithm the panel's auth uses
        let password_hash =
            backoffice::auth::hash_password(&self.password).expect("Failed to hash password");

        GeneratedUser {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            email: self.email.clone(),
            password_hash,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_identity_is_fixed() {
        let user_gen = AdminUserGenerator::new("Demo User", "admin@backoffice.test", "password");
        let user = user_gen.generate();

        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "admin@backoffice.test");
        assert!(backoffice::auth::verify_password("password", &user.password_hash).unwrap());
    }
}
