use spoctl::url_util::{
    get_absolute_url, get_server_relative_path, get_server_relative_site_url,
    get_target_site_absolute_url, get_url_relative_path, get_web_relative_path,
    remove_leading_slashes, remove_trailing_slashes, url_combine,
};

#[test]
fn test_url_relative_path_strips_origin() {
    assert_eq!(
        get_url_relative_path("https://contoso.sharepoint.com/sites/team1"),
        "/sites/team1"
    );
    assert_eq!(
        get_url_relative_path("https://contoso.sharepoint.com/"),
        "/"
    );
}

#[test]
fn test_url_relative_path_without_scheme_is_unchanged() {
    assert_eq!(get_url_relative_path("/sites/team1"), "/sites/team1");
    assert_eq!(
        get_url_relative_path("Shared Documents"),
        "Shared Documents"
    );
}

#[test]
fn test_url_relative_path_of_bare_origin_is_empty() {
    assert_eq!(get_url_relative_path("https://contoso.sharepoint.com"), "");
}

#[test]
fn test_server_relative_site_url_of_root_site_is_empty() {
    // The root site has no distinguishing relative path; "" (not "/")
    // keeps concatenation from producing "//"
    assert_eq!(
        get_server_relative_site_url("https://contoso.sharepoint.com"),
        ""
    );
    assert_eq!(
        get_server_relative_site_url("https://contoso.sharepoint.com/"),
        ""
    );
}

#[test]
fn test_server_relative_site_url_trims_trailing_slash() {
    assert_eq!(
        get_server_relative_site_url("https://contoso.sharepoint.com/sites/team1/"),
        "/sites/team1"
    );
}

#[test]
fn test_server_relative_path_prefixes_web_path() {
    assert_eq!(
        get_server_relative_path("https://contoso.sharepoint.com/sites/team1", "/Shared Documents"),
        "/sites/team1/Shared Documents"
    );
}

#[test]
fn test_server_relative_path_does_not_duplicate_web_path() {
    assert_eq!(
        get_server_relative_path(
            "https://contoso.sharepoint.com/sites/team1",
            "/sites/team1/Shared Documents"
        ),
        "/sites/team1/Shared Documents"
    );
}

#[test]
fn test_server_relative_path_prefix_match_is_case_insensitive() {
    assert_eq!(
        get_server_relative_path(
            "https://contoso.sharepoint.com/sites/team1",
            "/Sites/Team1/Shared Documents"
        ),
        "/sites/team1/Shared Documents"
    );
}

#[test]
fn test_server_relative_path_respects_segment_boundaries() {
    // "team1demo" shares a prefix with "team1" but is a different web
    assert_eq!(
        get_server_relative_path(
            "https://contoso.sharepoint.com/sites/team1",
            "/sites/team1demo/Docs"
        ),
        "/sites/team1/sites/team1demo/Docs"
    );
}

#[test]
fn test_server_relative_path_on_root_site() {
    assert_eq!(
        get_server_relative_path("https://contoso.sharepoint.com", "/Shared Documents"),
        "/Shared Documents"
    );
}

#[test]
fn test_server_relative_path_with_empty_folder() {
    assert_eq!(
        get_server_relative_path("https://contoso.sharepoint.com/sites/team1", ""),
        "/sites/team1"
    );
}

#[test]
fn test_server_relative_path_is_idempotent() {
    let web = "https://contoso.sharepoint.com/sites/team1";
    for folder in [
        "/Shared Documents",
        "/sites/team1/Shared Documents",
        "Lists/Announcements/",
        "",
    ] {
        let once = get_server_relative_path(web, folder);
        assert_eq!(get_server_relative_path(web, &once), once);
    }
}

#[test]
fn test_web_relative_path_strips_web_prefix() {
    assert_eq!(
        get_web_relative_path(
            "https://contoso.sharepoint.com/sites/team1/",
            "/sites/team1/Lists/MyList"
        ),
        "/Lists/MyList"
    );
}

#[test]
fn test_web_relative_path_of_web_root() {
    assert_eq!(
        get_web_relative_path(
            "https://contoso.sharepoint.com/sites/team1",
            "/sites/team1"
        ),
        "/"
    );
}

#[test]
fn test_web_relative_path_of_already_relative_folder() {
    assert_eq!(
        get_web_relative_path("https://contoso.sharepoint.com/sites/team1", "/Lists/MyList"),
        "/Lists/MyList"
    );
}

#[test]
fn test_absolute_url_joins_origin_and_relative_path() {
    assert_eq!(
        get_absolute_url(
            "https://contoso.sharepoint.com/sites/team1",
            "/sites/team1/Shared Documents"
        ),
        "https://contoso.sharepoint.com/sites/team1/Shared Documents"
    );
}

#[test]
fn test_absolute_url_inserts_missing_leading_slash() {
    assert_eq!(
        get_absolute_url("https://contoso.sharepoint.com", "sites/team1"),
        "https://contoso.sharepoint.com/sites/team1"
    );
}

#[test]
fn test_url_combine_uses_exactly_one_separator() {
    assert_eq!(
        url_combine("https://contoso.com/", "/sites/abc/"),
        "https://contoso.com/sites/abc"
    );
    assert_eq!(
        url_combine("https://contoso.com", "sites/abc"),
        "https://contoso.com/sites/abc"
    );
}

#[test]
fn test_url_combine_with_empty_relative() {
    assert_eq!(url_combine("https://contoso.com/", ""), "https://contoso.com");
}

#[test]
fn test_target_site_url_for_managed_path_sites() {
    assert_eq!(
        get_target_site_absolute_url(
            "https://contoso.sharepoint.com",
            "/sites/marketing/Shared Documents/plan.docx"
        ),
        "https://contoso.sharepoint.com/sites/marketing"
    );
    assert_eq!(
        get_target_site_absolute_url(
            "https://contoso.sharepoint.com",
            "https://contoso.sharepoint.com/teams/finance/Reports"
        ),
        "https://contoso.sharepoint.com/teams/finance"
    );
    assert_eq!(
        get_target_site_absolute_url(
            "https://contoso.sharepoint.com",
            "/personal/jdoe_contoso_com/Documents"
        ),
        "https://contoso.sharepoint.com/personal/jdoe_contoso_com"
    );
}

#[test]
fn test_target_site_url_falls_back_to_origin() {
    // Root-site content has no {sites|teams|personal} segment
    assert_eq!(
        get_target_site_absolute_url(
            "https://contoso.sharepoint.com",
            "/Shared Documents/plan.docx"
        ),
        "https://contoso.sharepoint.com"
    );
}

#[test]
fn test_remove_leading_and_trailing_slashes() {
    assert_eq!(remove_leading_slashes("//sites/team1"), "sites/team1");
    assert_eq!(remove_trailing_slashes("sites/team1//"), "sites/team1");
    assert_eq!(remove_leading_slashes("sites"), "sites");
    assert_eq!(remove_trailing_slashes(""), "");
}
