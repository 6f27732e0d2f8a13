use serde::Serialize;

/// Top-level pages of the marketing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SitePage {
    Home,
    Features,
    Industries,
    Directory,
    Contact,
    Login,
    Signup,
    ForgotPassword,
    NotFound,
}

pub const ROUTES: &[(&str, SitePage)] = &[
    ("/", SitePage::Home),
    ("/features", SitePage::Features),
    ("/industries", SitePage::Industries),
    ("/directory", SitePage::Directory),
    ("/contact", SitePage::Contact),
    ("/login", SitePage::Login),
    ("/signup", SitePage::Signup),
    ("/forgot-password", SitePage::ForgotPassword),
];

impl SitePage {
    /// Maps a browser path to its page; anything unrouted is `NotFound`.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        ROUTES
            .iter()
            .find(|(route, _)| *route == normalized)
            .map(|(_, page)| *page)
            .unwrap_or(SitePage::NotFound)
    }

    pub fn path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, page)| *page == self)
            .map(|(route, _)| *route)
    }

    pub fn title(self) -> &'static str {
        match self {
            SitePage::Home => "ChainLink Pro",
            SitePage::Features => "Features",
            SitePage::Industries => "Industries",
            SitePage::Directory => "Manufacturer Directory",
            SitePage::Contact => "Contact",
            SitePage::Login => "Sign In",
            SitePage::Signup => "Create Account",
            SitePage::ForgotPassword => "Reset Password",
            SitePage::NotFound => "Page Not Found",
        }
    }
}
