use super::*;

fn sans() -> Option<Font> {
    Font::system_sans(FontVariant::Regular, 24.0).ok()
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = Font::from_bytes(vec![0u8; 64], 12.0).unwrap_err();
    assert!(matches!(err, EaselError::Construction(_)));
}

#[test]
fn missing_file_is_construction_error() {
    let err = Font::from_path("/definitely/not/here.ttf", 12.0).unwrap_err();
    assert!(err.to_string().starts_with("construction error: read font"));
}

#[test]
fn variant_parses_case_insensitively() {
    assert_eq!("Bold".parse::<FontVariant>().unwrap(), FontVariant::Bold);
    assert_eq!(" light ".parse::<FontVariant>().unwrap(), FontVariant::Light);
    assert!("heavy".parse::<FontVariant>().is_err());
}

#[test]
fn unknown_family_is_construction_error() {
    let err = Font::system("No Such Family 1f4e", FontVariant::Regular, 10.0).unwrap_err();
    assert!(matches!(err, EaselError::Construction(_)));
}

#[test]
fn with_size_shares_the_face() {
    let Some(font) = sans() else {
        eprintln!("skipping: no system sans-serif font installed");
        return;
    };
    let bigger = font.with_size(48.0).unwrap();
    assert_eq!(bigger.id(), font.id());
    assert_eq!(bigger.size(), 48.0);
    assert_ne!(bigger, font);
    assert_eq!(font.with_size(24.0).unwrap(), font);
    assert!(font.with_size(0.0).is_err());
    assert!(!font.family().is_empty());
}

#[test]
fn identical_bytes_share_identity() {
    let Some(font) = sans() else {
        eprintln!("skipping: no system sans-serif font installed");
        return;
    };
    let again = Font::from_bytes(font.bytes().to_vec(), 24.0).unwrap();
    let twice = Font::from_bytes(font.bytes().to_vec(), 24.0).unwrap();
    assert_eq!(again, twice);
    assert!(!again.family().is_empty());
}
