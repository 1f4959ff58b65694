use crate::models::{StubUser, TokenResponse};

/// Id of the single demo account every request acts as
pub const STUB_USER_ID: u64 = 1;

/// The fixed demo user, stamped with the current time
pub fn stub_user() -> StubUser {
    let now = chrono::Utc::now();
    StubUser {
        id: STUB_USER_ID,
        email: "demo@example.com".to_string(),
        username: "demo".to_string(),
        full_name: "Demo User".to_string(),
        role: "user".to_string(),
        is_active: true,
        is_verified: true,
        points: 100,
        created_at: now,
        updated_at: now,
    }
}

/// Issue a fresh opaque bearer token for the demo user
///
/// Tokens are never checked by any route.
pub fn issue_token() -> TokenResponse {
    TokenResponse {
        access_token: uuid::Uuid::new_v4().simple().to_string(),
        token_type: "bearer".to_string(),
        user: stub_user(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_fresh() {
        let a = issue_token();
        let b = issue_token();
        assert_ne!(a.access_token, b.access_token);
        assert_eq!(a.token_type, "bearer");
        assert_eq!(a.user.id, STUB_USER_ID);
        assert_eq!(a.access_token.len(), 32);
    }
}
