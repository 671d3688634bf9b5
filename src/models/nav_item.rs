/// A sidebar link for one console page.
pub struct NavItem {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub is_active: bool,
}

const PAGES: [(&str, &str, &str); 5] = [
    ("Dashboard", "/dashboard", "layout-dashboard"),
    ("Books", "/books", "book-open"),
    ("Members", "/members", "users"),
    ("Transactions", "/transactions", "arrow-left-right"),
    ("Profile", "/profile", "user"),
];

/// Sidebar entries with the one matching `current_path` marked active.
pub fn find_navigation(current_path: &str) -> Vec<NavItem> {
    PAGES
        .iter()
        .map(|&(label, url, icon)| NavItem {
            label,
            url,
            icon,
            is_active: current_path == url || current_path.starts_with(&format!("{url}/")),
        })
        .collect()
}
