//! Route Table
//!
//! Binds URL paths to dashboard pages. Both the WASM shell and the static
//! host resolve paths through [`Outlet::resolve`], so they agree on which
//! paths are pages and which are not found.

use std::fmt;

/// A routed dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Services,
    Settings,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Services, Page::Settings];

    /// Path this page is registered under
    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Services => "/services",
            Page::Settings => "/settings",
        }
    }

    /// Link label shown in the navigation header
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Services => "Services",
            Page::Settings => "Settings",
        }
    }

    /// Exact-match lookup. No normalization: `/services/` is not `/services`.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the main content region shows for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlet {
    Page(Page),
    NotFound,
}

impl Outlet {
    /// Resolve a location path (no query string or fragment) to an outlet
    pub fn resolve(path: &str) -> Outlet {
        match Page::from_path(path) {
            Some(page) => Outlet::Page(page),
            None => Outlet::NotFound,
        }
    }

    pub fn page(self) -> Option<Page> {
        match self {
            Outlet::Page(page) => Some(page),
            Outlet::NotFound => None,
        }
    }
}

/// A link in the navigation header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Whether this link points at the page currently shown for `path`
    pub fn is_active(&self, path: &str) -> bool {
        Outlet::resolve(path) == Outlet::Page(self.page)
    }
}

/// Navigation links, one per page, in navigation order
pub fn nav_links() -> [NavLink; 3] {
    Page::ALL.map(|page| NavLink {
        page,
        href: page.path(),
        label: page.label(),
    })
}
