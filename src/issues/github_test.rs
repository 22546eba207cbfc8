use super::*;
use crate::issues::types::Category;

fn request(category: Category, links: Option<&str>, handle: Option<&str>) -> IssueRequest {
    IssueRequest {
        category,
        links: links.map(str::to_owned),
        handle: handle.map(str::to_owned),
    }
}

#[test]
fn title_includes_category_display_string() {
    let title = issue_title(&request(Category::BrandLogo, None, None));
    assert_eq!(title, "[Icon Request] Brand/Logo");
}

#[test]
fn body_includes_links_and_handle() {
    let body = issue_body(&request(
        Category::SocialMedia,
        Some("https://dribbble.com/shots/42"),
        Some("octocat"),
    ));
    assert!(body.contains("**Category:** Social Media"));
    assert!(body.contains("https://dribbble.com/shots/42"));
    assert!(body.contains("**Requested by:** @octocat"));
}

#[test]
fn body_marks_absent_fields() {
    let body = issue_body(&request(Category::Other, None, None));
    assert!(body.contains("_none provided_"));
    assert!(body.contains("**Requested by:** anonymous"));
}

#[test]
fn parse_created_extracts_url_and_number() {
    let json = serde_json::json!({
        "id": 1,
        "number": 7,
        "html_url": "https://github.com/acme/icons/issues/7",
        "state": "open",
        "title": "[Icon Request] Interface"
    })
    .to_string();
    let created = parse_created(&json).unwrap();
    assert_eq!(created.url, "https://github.com/acme/icons/issues/7");
    assert_eq!(created.number, 7);
}

#[test]
fn parse_created_invalid_json_is_parse_error() {
    let err = parse_created("not json").unwrap_err();
    assert!(matches!(err, IssueError::ApiParse(_)));
}

#[test]
fn status_422_with_message_becomes_rejection() {
    let body = serde_json::json!({
        "message": "Validation Failed",
        "documentation_url": "https://docs.github.com"
    })
    .to_string();
    let err = status_error(422, body);
    assert!(matches!(err, IssueError::Rejected { message } if message == "Validation Failed"));
}

#[test]
fn status_422_without_parsable_body_stays_api_response() {
    let err = status_error(422, "<html>".to_owned());
    assert!(matches!(err, IssueError::ApiResponse { status: 422, .. }));
}

#[test]
fn other_statuses_stay_api_response() {
    for status in [401, 403, 404, 500, 503] {
        let err = status_error(status, String::new());
        assert!(matches!(err, IssueError::ApiResponse { status: s, .. } if s == status));
    }
}

#[test]
fn client_builds_from_config() {
    let config = TrackerConfig {
        token: "ghp_test".into(),
        owner: "acme".into(),
        repo: "icons".into(),
        base_url: "https://api.github.com".into(),
        timeouts: crate::issues::config::TrackerTimeouts { request_secs: 30, connect_secs: 10 },
    };
    let client = GithubClient::new(config).unwrap();
    assert_eq!(client.repo_slug(), "acme/icons");
}
