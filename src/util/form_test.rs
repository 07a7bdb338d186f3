use super::*;

#[test]
fn parse_number_input_handles_invalid_values() {
    assert_eq!(parse_number_input("0.75"), Some(0.75));
    assert_eq!(parse_number_input(" 120 "), Some(120.0));
    assert_eq!(parse_number_input(""), None);
    assert_eq!(parse_number_input("fast"), None);
    assert_eq!(parse_number_input("inf"), None);
}

#[test]
fn parse_integer_input_handles_invalid_values() {
    assert_eq!(parse_integer_input("42"), Some(42));
    assert_eq!(parse_integer_input(" 7 "), Some(7));
    assert_eq!(parse_integer_input("1.2"), None);
    assert_eq!(parse_integer_input("abc"), None);
}

#[test]
fn non_blank_trims() {
    assert_eq!(non_blank("  Adele "), Some("Adele"));
    assert_eq!(non_blank("   "), None);
}

#[test]
fn split_id_list_trims_and_drops_blanks() {
    assert_eq!(
        split_id_list(" 3n3Ppam7vgaVa1iaRUc9Lp, ,0eGsygTp906u18L0Oimnem,"),
        vec!["3n3Ppam7vgaVa1iaRUc9Lp".to_owned(), "0eGsygTp906u18L0Oimnem".to_owned()]
    );
    assert!(split_id_list(" , ").is_empty());
}
