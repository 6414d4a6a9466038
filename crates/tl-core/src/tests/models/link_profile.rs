use crate::{LinkItem, LinkProfile};

#[test]
fn test_link_profile_new() {
    let profile = LinkProfile::new(
        "a@x.com".to_string(),
        Some("u1".to_string()),
        Some("https://img.example/u1.png".to_string()),
    );

    assert_eq!(profile.email, "a@x.com");
    assert_eq!(profile.handle.as_deref(), Some("u1"));
    assert_eq!(
        profile.profile_image.as_deref(),
        Some("https://img.example/u1.png")
    );
    assert!(profile.links.is_empty());
    assert!(profile.has_handle());
}

#[test]
fn test_link_profile_without_handle() {
    let profile = LinkProfile::new("a@x.com".to_string(), None, None);

    assert!(!profile.has_handle());
    assert_eq!(profile.profile_image, None);
}

#[test]
fn test_link_items_allow_duplicates() {
    let mut profile = LinkProfile::new("a@x.com".to_string(), Some("u1".to_string()), None);

    let item = LinkItem::new("GitHub".to_string(), "https://github.com/u1".to_string());
    profile.links.push(item.clone());
    profile.links.push(item.clone());

    assert_eq!(profile.links.len(), 2);
    assert_eq!(profile.links[0], profile.links[1]);
}
