#![allow(dead_code)]

use tl_core::LinkItem;

/// Creates a test LinkItem
pub fn create_test_link(title: &str, url: &str) -> LinkItem {
    LinkItem::new(title.to_string(), url.to_string())
}

pub fn github_link() -> LinkItem {
    create_test_link("GitHub", "https://github.com/u1")
}

pub fn blog_link() -> LinkItem {
    create_test_link("Blog", "https://blog.u1.dev")
}
