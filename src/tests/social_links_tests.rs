use crate::social_links::{EmailDomain, SocialLinks};

#[test]
fn test_social_links_for_username() {
    let links = SocialLinks::for_username("alice");
    assert_eq!(links.instagram, "https://instagram.com/alice");
    assert_eq!(links.github, "https://github.com/alice");
    assert_eq!(links.telegram, "https://t.me/alice");
}

#[test]
fn test_social_links_do_not_escape_input() {
    let links = SocialLinks::for_username("a b/c?");
    assert_eq!(links.github, "https://github.com/a b/c?");
}

#[test]
fn test_email_domain_split() {
    let email = EmailDomain::from_address("user@example.com").unwrap();
    assert_eq!(email.address, "user@example.com");
    assert_eq!(email.domain, "example.com");
    assert_eq!(email.web_link, "https://example.com");
}

#[test]
fn test_email_domain_uses_last_at_sign() {
    let email = EmailDomain::from_address("a@b@mail.example.org").unwrap();
    assert_eq!(email.domain, "mail.example.org");
    assert_eq!(email.web_link, "https://mail.example.org");
}

#[test]
fn test_email_without_at_sign_has_no_domain() {
    assert!(EmailDomain::from_address("not-an-email").is_none());
}

#[test]
fn test_email_with_trailing_at_sign_has_empty_domain() {
    let email = EmailDomain::from_address("user@").unwrap();
    assert_eq!(email.domain, "");
    assert_eq!(email.web_link, "https://");
}
