/// Shortcut accounts listed on the login page. Picking one only fills the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredential {
    pub role: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const DEMO_CREDENTIALS: [DemoCredential; 2] = [
    DemoCredential { role: "Admin", email: "admin@library.com", password: "admin123" },
    DemoCredential { role: "Staff", email: "staff@library.com", password: "staff123" },
];

pub fn find(index: usize) -> Option<&'static DemoCredential> {
    DEMO_CREDENTIALS.get(index)
}
