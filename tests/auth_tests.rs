//! Authentication and authorization tests

use rolegate::auth::{CredentialStore, Role, TokenIssuer, User};
use rolegate::config::{Config, SeedUser};
use rolegate::Error;

fn seed(id: u64, email: &str, password: &str, role: Role) -> SeedUser {
    SeedUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

fn user(id: u64, email: &str, role: Role) -> User {
    User {
        id,
        email: email.to_string(),
        password_hash: String::new(),
        role,
    }
}

#[test]
fn test_store_seeds_all_roles() {
    let config = Config::default();
    let store = CredentialStore::from_seeds(&config.users).expect("store");

    assert_eq!(store.len(), 3);
    assert_eq!(store.lookup("admin@example.com").unwrap().role, Role::Admin);
    assert_eq!(
        store.lookup("mod@example.com").unwrap().role,
        Role::Moderator
    );
    assert_eq!(store.lookup("user@example.com").unwrap().role, Role::User);
}

#[test]
fn test_store_never_keeps_plaintext() {
    let store =
        CredentialStore::from_seeds(&[seed(1, "a@example.com", "topsecret", Role::User)]).unwrap();
    let record = store.lookup("a@example.com").unwrap();

    assert_ne!(record.password_hash, "topsecret");
    assert!(record.password_hash.starts_with("$2"));
}

#[test]
fn test_store_lookup_case_sensitive() {
    let store =
        CredentialStore::from_seeds(&[seed(1, "a@example.com", "pw", Role::User)]).unwrap();

    assert!(store.lookup("a@example.com").is_some());
    assert!(store.lookup("A@example.com").is_none());
}

#[test]
fn test_issued_role_matches_user_role() {
    let issuer = TokenIssuer::new("secret", chrono::Duration::hours(1));

    for role in [Role::Admin, Role::Moderator, Role::User] {
        let token = issuer.issue(&user(1, "x@example.com", role)).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_round_trip_preserves_identity() {
    let issuer = TokenIssuer::new("secret", chrono::Duration::hours(1));
    let token = issuer
        .issue(&user(2, "mod@example.com", Role::Moderator))
        .unwrap();
    let claims = issuer.verify(&token).unwrap();

    assert_eq!(claims.id, 2);
    assert_eq!(claims.email, "mod@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_expired_token_rejected_despite_valid_signature() {
    let expired = TokenIssuer::new("secret", chrono::Duration::seconds(-3600));
    let verifier = TokenIssuer::new("secret", chrono::Duration::hours(1));

    let token = expired.issue(&user(1, "x@example.com", Role::Admin)).unwrap();
    assert!(matches!(verifier.verify(&token), Err(Error::Expired)));
}

#[test]
fn test_foreign_signature_rejected() {
    let ours = TokenIssuer::new("secret", chrono::Duration::hours(1));
    let theirs = TokenIssuer::new("other", chrono::Duration::hours(1));

    let token = theirs.issue(&user(1, "x@example.com", Role::Admin)).unwrap();
    assert!(matches!(ours.verify(&token), Err(Error::InvalidSignature)));
}

#[test]
fn test_garbage_token_rejected() {
    let issuer = TokenIssuer::new("secret", chrono::Duration::hours(1));

    assert!(matches!(issuer.verify(""), Err(Error::MalformedToken)));
    assert!(matches!(
        issuer.verify("not-a-jwt"),
        Err(Error::MalformedToken)
    ));
    assert!(matches!(
        issuer.verify("a.b.c"),
        Err(Error::MalformedToken)
    ));
}

#[test]
fn test_role_wire_format() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
    assert_eq!(
        serde_json::to_string(&Role::Moderator).unwrap(),
        "\"Moderator\""
    );
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"User\"");
}
