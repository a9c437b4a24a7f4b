use super::*;

#[test]
fn post_href_is_site_absolute() {
    let post = BlogPost { id: "getting-started".to_owned(), ..BlogPost::default() };
    assert_eq!(post_href(&post), "/blogs/posts/getting-started.html");
}
