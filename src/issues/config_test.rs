use super::*;

#[test]
fn parse_repo_splits_owner_and_name() {
    let (owner, repo) = parse_repo("acme/icon-library").unwrap();
    assert_eq!(owner, "acme");
    assert_eq!(repo, "icon-library");
}

#[test]
fn parse_repo_trims_surrounding_whitespace() {
    let (owner, repo) = parse_repo("  acme/icons ").unwrap();
    assert_eq!(owner, "acme");
    assert_eq!(repo, "icons");
}

#[test]
fn parse_repo_rejects_missing_slash() {
    let err = parse_repo("acme").unwrap_err();
    assert!(matches!(err, IssueError::ConfigParse(_)));
}

#[test]
fn parse_repo_rejects_empty_parts() {
    assert!(parse_repo("/icons").is_err());
    assert!(parse_repo("acme/").is_err());
    assert!(parse_repo("/").is_err());
}

#[test]
fn parse_repo_rejects_extra_segments() {
    assert!(parse_repo("acme/icons/extra").is_err());
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://ghe.example.com/api/v3/"), "https://ghe.example.com/api/v3");
    assert_eq!(normalize_base_url("https://api.github.com"), "https://api.github.com");
}
