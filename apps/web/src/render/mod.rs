//! HTML rendering: one minijinja environment with the page templates baked into the binary.

use minijinja::{context, Environment};
use serde::Serialize;

/// The three pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Abstract,
    FindMatches,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Abstract, Page::FindMatches];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Abstract => "/abstract",
            Page::FindMatches => "/find-matches",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Abstract => "Abstract",
            Page::FindMatches => "Resume Analysis",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Abstract => "abstract.html",
            Page::FindMatches => "find_matches.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation bar entries with the link for `current` marked active.
pub fn nav_links(current: Page) -> Vec<NavLink> {
    Page::ALL
        .iter()
        .map(|p| NavLink {
            href: p.path(),
            label: p.label(),
            active: *p == current,
        })
        .collect()
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../../templates/layout.html"))?;
        env.add_template("home.html", include_str!("../../templates/home.html"))?;
        env.add_template("abstract.html", include_str!("../../templates/abstract.html"))?;
        env.add_template(
            "find_matches.html",
            include_str!("../../templates/find_matches.html"),
        )?;
        Ok(Self { env })
    }

    /// Renders `page` inside the shared layout; `body` is exposed to the template as `page`.
    pub fn render_page<S: Serialize>(&self, page: Page, body: S) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(page.template())?;
        template.render(context! {
            nav => nav_links(page),
            title => page.label(),
            page => body,
        })
    }
}
