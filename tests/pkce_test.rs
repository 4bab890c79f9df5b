use spotop::auth::pkce::*;

#[test]
fn test_generate_code_verifier() {
    for _ in 0..100 {
        let verifier = generate_code_verifier();

        // Should be within the RFC 7636 bounds
        assert!((43..=128).contains(&verifier.len()));

        // Should contain only unreserved characters
        assert!(
            verifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
        );
        assert!(is_valid_verifier(&verifier));
    }

    // Two generated verifiers should be different
    assert_ne!(generate_code_verifier(), generate_code_verifier());
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA-256 is 32 bytes, 43 base64url characters without padding
    assert_eq!(challenge.len(), 43);
    assert!(!challenge.contains('='));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_code_challenge_rfc7636_vector() {
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_pkce_pair() {
    let pair = PkcePair::generate();
    assert!(is_valid_verifier(&pair.verifier));
    assert_eq!(pair.challenge, generate_code_challenge(&pair.verifier));
    assert_ne!(pair.challenge, pair.verifier);

    let debug = format!("{:?}", pair);
    assert!(!debug.contains(&pair.verifier));
    assert!(debug.contains(&pair.challenge));
}

#[test]
fn test_is_valid_verifier() {
    assert!(is_valid_verifier(
        "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"
    ));
    assert!(is_valid_verifier(&"a~._-".repeat(25)));

    // Too short, too long
    assert!(!is_valid_verifier("short"));
    assert!(!is_valid_verifier(&"a".repeat(42)));
    assert!(!is_valid_verifier(&"a".repeat(129)));

    // Invalid characters
    assert!(!is_valid_verifier(
        "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOE!@#"
    ));
    assert!(!is_valid_verifier(&format!("{}+/", "a".repeat(50))));
}
