//! Document titles per route.

#[cfg(test)]
#[path = "titles_test.rs"]
mod titles_test;

pub fn home_title(company: &str) -> String {
    format!("{company} - Mobile Applications")
}

pub fn details_title(app_name: &str) -> String {
    format!("{app_name} - App Details")
}

pub fn policy_title(app_name: &str) -> String {
    format!("{app_name} - Privacy Policy")
}

pub fn blog_title(company: &str) -> String {
    format!("Blog - {company}")
}

pub fn contact_title(company: &str) -> String {
    format!("Contact Us - {company}")
}

pub fn not_found_title(company: &str) -> String {
    format!("Page Not Found | {company}")
}
