use chrono::Duration;
use w2e_core::Settings;
use w2e_security::{Claims, SecurityError, TokenSigner};

fn settings_with_secret(secret: Option<&str>) -> Settings {
    let mut vars = vec![("DB_TYPE", "sqlite")];
    if let Some(secret) = secret {
        vars.push(("JWT_SECRET", secret));
    }
    Settings::from_vars(vars).unwrap()
}

#[test]
fn missing_secret_fails_at_token_time_not_startup() {
    // Settings construction accepts the absence...
    let settings = settings_with_secret(None);

    // ...and the failure surfaces only when the signer is exercised.
    assert!(matches!(
        TokenSigner::from_settings(&settings),
        Err(SecurityError::MissingSecret)
    ));
}

#[test]
fn sign_verify_round_trip() {
    let settings = settings_with_secret(Some("topsecret"));
    let signer = TokenSigner::from_settings(&settings).unwrap();

    let claims = Claims::new("user-42", Duration::hours(1));
    let token = signer.sign(&claims).unwrap();
    let verified = signer.verify(&token).unwrap();

    assert_eq!(verified, claims);
}

#[test]
fn expired_token_is_rejected() {
    let signer = TokenSigner::new("topsecret");

    // Well past any default validation leeway.
    let claims = Claims::new("user-42", Duration::hours(-2));
    let token = signer.sign(&claims).unwrap();

    match signer.verify(&token) {
        Err(SecurityError::TokenExpired) => {}
        other => panic!("expected TokenExpired, got {other:?}"),
    }
}

#[test]
fn tampered_token_is_rejected() {
    let signer = TokenSigner::new("topsecret");
    let token = signer.sign(&Claims::new("user-42", Duration::hours(1))).unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    assert!(matches!(
        signer.verify(&tampered),
        Err(SecurityError::InvalidToken(_))
    ));

    let other_signer = TokenSigner::new("different-secret");
    assert!(matches!(
        other_signer.verify(&token),
        Err(SecurityError::InvalidToken(_))
    ));
}
