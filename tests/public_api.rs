use cloudproof_rand::{
    bytes, hex, must_bytes, must_hex, must_string, string, string_with, Alphabet, Charset,
    OsRandom, RandError,
};

#[test]
fn test_readme_examples() -> Result<(), RandError> {
    let salt = bytes(16)?;
    assert_eq!(salt.len(), 16);

    let token = hex(5)?;
    assert_eq!(token.len(), 5);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let id = string(10, Charset::DIGIT)?;
    assert_eq!(id.len(), 10);
    assert!(id.chars().all(|c| c.is_ascii_digit()));

    let code = string_with(&OsRandom, 12, Charset::UPPERCASE | Charset::LOWERCASE)?;
    assert!(code.chars().all(|c| c.is_ascii_alphabetic()));
    Ok(())
}

#[test]
fn test_must_variants() -> Result<(), RandError> {
    assert_eq!(must_bytes(1).len(), 1);
    assert_eq!(must_hex(33).len(), 33);
    let alphabet = Alphabet::try_from(Charset::ALL)?;
    assert!(must_string(100, Charset::ALL)
        .chars()
        .all(|c| alphabet.contains(c)));
    Ok(())
}

#[test]
fn test_error_kinds() {
    assert!(matches!(bytes(0), Err(RandError::InvalidLength { .. })));
    assert!(matches!(hex(0), Err(RandError::InvalidLength { .. })));
    assert!(matches!(
        string(5, Charset::default()),
        Err(RandError::EmptyCharset { .. })
    ));
}

#[test]
fn test_outputs_differ_between_calls() -> Result<(), RandError> {
    assert_ne!(bytes(32)?, bytes(32)?);
    assert_ne!(hex(32)?, hex(32)?);
    assert_ne!(string(32, Charset::ALL)?, string(32, Charset::ALL)?);
    Ok(())
}
