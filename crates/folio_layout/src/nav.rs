//! Navigation bar
//!
//! Brand on the left and one link per section, except the first (the hero is
//! reached through the brand). The link for the active section is
//! highlighted. On narrow screens the links collapse into a dropdown that a
//! hamburger button opens; following a link from the dropdown closes it.

use folio_core::{Section, SectionList, Store, Subscription};
use folio_platform::ScrollRequest;

use crate::element::{a, button, div, el, text, Element};

/// Classes added to the link of the active section
pub const ACTIVE_LINK_CLASSES: &str = "font-bold underline";

#[derive(Clone, Debug)]
pub struct NavBar {
    brand: String,
    sections: SectionList,
    menu_open: Store<bool>,
}

impl NavBar {
    pub fn new(brand: impl Into<String>, sections: SectionList) -> Self {
        Self {
            brand: brand.into(),
            sections,
            menu_open: Store::new(false),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Sections that get a link, in declared order
    pub fn links(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().skip(1)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Open or close the mobile dropdown, returning the new state
    pub fn toggle_menu(&self) -> bool {
        let open = !self.menu_open.get();
        self.menu_open.set(open);
        open
    }

    pub fn close_menu(&self) {
        if self.menu_open.get() {
            self.menu_open.set(false);
        }
    }

    /// Follow the link to `section`: closes the dropdown and yields the
    /// scroll the host should perform
    pub fn follow(&self, section: &Section) -> ScrollRequest {
        self.close_menu();
        ScrollRequest::Anchor(section.anchor())
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn on_menu_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + 'static,
    {
        self.menu_open.subscribe(move |open| callback(*open))
    }

    pub fn render(&self, active: &Section) -> Element {
        let desktop = el("ul")
            .class("hidden md:flex space-x-6")
            .children(self.links().map(|section| {
                el("li").child(
                    self.link(section, active)
                        .class("hover:text-purple-600 dark:hover:text-purple-400"),
                )
            }));

        let bar = div()
            .class("max-w-6xl mx-auto px-6 h-16 flex justify-between items-center")
            .child(
                div()
                    .class("text-xl font-bold text-purple-600")
                    .child(text(self.brand.as_str())),
            )
            .child(desktop)
            .child(
                button()
                    .id("menu-toggle")
                    .class("md:hidden text-3xl focus:outline-none")
                    .attr("aria-expanded", self.is_menu_open().to_string())
                    .child(text("☰")),
            );

        el("nav")
            .class("fixed top-0 w-full z-50 bg-gray-50 dark:bg-gray-900 shadow-md")
            .child(bar)
            .when(self.is_menu_open(), |nav| nav.child(self.render_dropdown(active)))
    }

    fn render_dropdown(&self, active: &Section) -> Element {
        el("ul")
            .id("mobile-menu")
            .class("md:hidden bg-gray-100 dark:bg-gray-800 px-6 pb-4 space-y-3 shadow-inner")
            .children(self.links().map(|section| {
                el("li").child(
                    self.link(section, active)
                        .class("block py-2 text-lg hover:text-purple-600 dark:hover:text-purple-400"),
                )
            }))
    }

    fn link(&self, section: &Section, active: &Section) -> Element {
        let is_active = section == active;
        a(section.href())
            .when(is_active, |link| {
                link.class(ACTIVE_LINK_CLASSES).attr("aria-current", "location")
            })
            .child(text(section.name()))
    }
}
