//! Portfolio page composition
//!
//! [`PortfolioApp`] mounts the page on a [`Platform`]: it binds the scroll
//! tracker, resolves the theme, starts the hero's typing animations and
//! tracks which sections have entered the viewport. Rendering produces an
//! element tree (or a full HTML document) from the current state.

use folio_animation::{
    Caret, Entrance, EntranceFrame, InViewLatch, RevealMode, RevealSnapshot, RevealState,
    Stagger, TextRevealer,
};
use folio_core::{SectionList, Subscription};
use folio_layout::element::{div, Element};
use folio_layout::html::{render_document, DocumentHead};
use folio_layout::{
    back_to_top, progress_bar, theme_toggle, NavBar, ScrollBinding, ScrollState, ScrollTracker,
    SectionGuide,
};
use folio_platform::{Platform, ScrollRequest, ViewportEvent};
use folio_theme::{ColorScheme, ColorTokens, ThemeState};
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::config::FolioConfig;
use crate::content::SECTIONS;
use crate::error::{FolioError, Result};
use crate::page::{self, Frames, Typing};

const CARD_STAGGER_MS: f64 = 150.0;
const CHIP_STAGGER_MS: f64 = 100.0;

/// Which state [`PortfolioApp::render_with`] draws
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Current animation state
    #[default]
    Live,
    /// Every entrance at rest and every typing text complete, as the page
    /// looks once the reader has scrolled through it
    Settled,
}

/// Serializable summary of the page state
#[derive(Clone, Debug, Serialize)]
pub struct PageSnapshot {
    pub elapsed_ms: f64,
    pub scroll: ScrollState,
    pub theme: ColorScheme,
    pub menu_open: bool,
    pub greeting: RevealSnapshot,
    pub headline: RevealSnapshot,
}

/// Which elements have scrolled into view, and when
struct Visibility {
    sections: Vec<InViewLatch>,
    cards: InViewLatch,
    chips: InViewLatch,
}

impl Visibility {
    fn new(section_count: usize) -> Self {
        let sections = (0..section_count)
            .map(|i| {
                // The hero animates once; the rest replay on every visit.
                InViewLatch::new(if i == 0 {
                    RevealMode::Once
                } else {
                    RevealMode::Repeat
                })
            })
            .collect();
        Self {
            sections,
            cards: InViewLatch::new(RevealMode::Once),
            chips: InViewLatch::new(RevealMode::Repeat),
        }
    }

    fn observe<P: Platform>(&mut self, platform: &P, sections: &SectionList) {
        let now = platform.now_ms();
        let viewport_height = platform.snapshot().viewport_height;
        let in_view = |name: &str| {
            sections
                .get(name)
                .ok()
                .and_then(|section| platform.bounding_rect(&section.anchor()))
                .map(|rect| rect.intersects_viewport(viewport_height))
                .unwrap_or(false)
        };

        for (latch, section) in self.sections.iter_mut().zip(sections.iter()) {
            if latch.observe(in_view(section.name()), now) {
                tracing::debug!("{} entered view at {}ms", section.name(), now);
            }
        }
        self.cards.observe(in_view("Projects"), now);
        self.chips.observe(in_view("Skills"), now);
    }
}

/// The mounted portfolio page
pub struct PortfolioApp<P: Platform> {
    platform: P,
    config: FolioConfig,
    tracker: ScrollTracker,
    theme: ThemeState,
    nav: NavBar,
    guide: SectionGuide,
    greeting: TextRevealer<P>,
    headline: TextRevealer<P>,
    caret: Caret,
    visibility: Rc<RefCell<Visibility>>,
    mounted_at: f64,
    _binding: ScrollBinding,
    _visibility_listener: Subscription,
}

impl<P: Platform> PortfolioApp<P> {
    /// Mount the page with the built-in content
    pub fn mount_default(platform: P) -> Result<Self> {
        Self::mount(platform, FolioConfig::default())
    }

    pub fn mount(platform: P, config: FolioConfig) -> Result<Self> {
        let sections = SectionList::from_names(SECTIONS)?;

        let tracker = ScrollTracker::with_config(sections.clone(), config.scroll);
        let binding = ScrollBinding::attach(&platform, tracker.clone());

        let theme = ThemeState::resolve(config.site.theme, platform.prefers_dark());
        let nav = NavBar::new(config.site.title.clone(), sections.clone());
        let guide = SectionGuide::new(sections.clone());

        let greeting = TextRevealer::start(
            platform.clone(),
            config.profile.greeting.clone(),
            config.typing.default_delay_ms,
        );
        let headline = TextRevealer::start(
            platform.clone(),
            config.profile.headline.clone(),
            config.typing.headline_delay_ms,
        );

        let visibility = Rc::new(RefCell::new(Visibility::new(sections.len())));
        visibility.borrow_mut().observe(&platform, &sections);

        let host = platform.clone();
        let watched = visibility.clone();
        let listener = platform.subscribe_viewport(Rc::new(move |_: ViewportEvent| {
            watched.borrow_mut().observe(&host, &sections);
        }));

        tracing::info!(
            "mounted portfolio for {} on {} ({} theme)",
            config.site.title,
            platform.name(),
            theme.scheme()
        );

        Ok(Self {
            mounted_at: platform.now_ms(),
            platform,
            config,
            tracker,
            theme,
            nav,
            guide,
            greeting,
            headline,
            caret: Caret::default(),
            visibility,
            _binding: binding,
            _visibility_listener: listener,
        })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn sections(&self) -> &SectionList {
        self.tracker.sections()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn greeting(&self) -> &TextRevealer<P> {
        &self.greeting
    }

    pub fn headline(&self) -> &TextRevealer<P> {
        &self.headline
    }

    /// Milliseconds since mount on the platform clock
    pub fn elapsed_ms(&self) -> f64 {
        self.platform.now_ms() - self.mounted_at
    }

    pub fn toggle_theme(&self) -> ColorScheme {
        let scheme = self.theme.toggle();
        tracing::info!("theme switched to {}", scheme);
        scheme
    }

    pub fn toggle_menu(&self) -> bool {
        self.nav.toggle_menu()
    }

    /// Follow the nav link for `name`, closing the mobile menu
    pub fn follow_nav_link(&self, name: &str) -> Result<()> {
        let section = self.sections().get(name)?.clone();
        self.platform.request_scroll(self.nav.follow(&section));
        Ok(())
    }

    /// What the back-to-top button does
    pub fn scroll_to_top(&self) {
        self.platform.request_scroll(ScrollRequest::Top);
    }

    /// Whether any entrance or typing animation is still running
    pub fn is_animating(&self) -> bool {
        if self.greeting.is_pending() || self.headline.is_pending() {
            return true;
        }
        let now = self.platform.now_ms();
        let visibility = self.visibility.borrow();
        let section = Entrance::section();
        let last_card = Stagger::new(CARD_STAGGER_MS)
            .apply(Entrance::card(), self.config.projects.len().saturating_sub(1));
        let last_chip = Stagger::new(CHIP_STAGGER_MS)
            .apply(Entrance::chip(), self.config.skills.len().saturating_sub(1));

        visibility
            .sections
            .iter()
            .any(|latch| latch.is_animating(&section, now))
            || visibility.cards.is_animating(&last_card, now)
            || visibility.chips.is_animating(&last_chip, now)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            elapsed_ms: self.elapsed_ms(),
            scroll: self.scroll_state(),
            theme: self.theme.scheme(),
            menu_open: self.nav.is_menu_open(),
            greeting: self.greeting.snapshot(),
            headline: self.headline.snapshot(),
        }
    }

    pub fn render(&self) -> Element {
        self.render_with(RenderMode::Live)
    }

    pub fn render_with(&self, mode: RenderMode) -> Element {
        let scroll = self.scroll_state();
        let frames = self.frames(mode);

        let (greeting, headline) = match mode {
            RenderMode::Live => (self.greeting.state(), self.headline.state()),
            RenderMode::Settled => (
                completed(self.greeting.state()),
                completed(self.headline.state()),
            ),
        };
        let typing = Typing {
            greeting: &greeting,
            headline: &headline,
            caret: self.caret,
        };

        let mut root = div()
            .id("app")
            .class("min-h-screen font-sans bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors duration-500")
            .child(progress_bar(&scroll))
            .child(self.nav.render(&scroll.active_section))
            .child(theme_toggle(&self.theme));
        if let Some(button) = back_to_top(&scroll) {
            root = root.child(button);
        }
        root.children(page::sections(&self.config, &frames, &typing))
            .child(self.guide.render(&scroll.active_section))
    }

    /// The live page as a complete HTML document
    pub fn to_html(&self) -> String {
        self.to_html_with(RenderMode::Live)
    }

    pub fn to_html_with(&self, mode: RenderMode) -> String {
        let head = DocumentHead {
            title: self.config.site.title.clone(),
            root_class: self.theme.root_class().map(String::from),
            stylesheet: self.stylesheet(),
        };
        render_document(&head, &self.render_with(mode))
    }

    /// CSS the rendered markup relies on: palette variables, smooth
    /// scrolling and the caret pulse
    pub fn stylesheet(&self) -> String {
        stylesheet(&self.caret)
    }

    /// Render to `path`
    pub fn write_html(&self, path: &Path, mode: RenderMode) -> Result<()> {
        let html = self.to_html_with(mode);
        fs::write(path, &html).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("wrote {} ({} bytes)", path.display(), html.len());
        Ok(())
    }

    /// Tear the page down: cancels pending typing timers and removes every
    /// viewport listener
    pub fn unmount(self) {
        tracing::info!("unmounting portfolio after {}ms", self.elapsed_ms());
        self.greeting.cancel();
        self.headline.cancel();
    }

    fn frames(&self, mode: RenderMode) -> Frames {
        let cards = self.config.projects.len();
        let chips = self.config.skills.len();
        if mode == RenderMode::Settled {
            return Frames {
                sections: vec![EntranceFrame::REST; self.sections().len()],
                cards: vec![EntranceFrame::REST; cards],
                chips: vec![EntranceFrame::REST; chips],
            };
        }

        let now = self.platform.now_ms();
        let visibility = self.visibility.borrow();
        let section = Entrance::section();
        let card_stagger = Stagger::new(CARD_STAGGER_MS);
        let chip_stagger = Stagger::new(CHIP_STAGGER_MS);

        Frames {
            sections: visibility
                .sections
                .iter()
                .map(|latch| latch.frame(&section, now))
                .collect(),
            cards: (0..cards)
                .map(|i| visibility.cards.frame(&card_stagger.apply(Entrance::card(), i), now))
                .collect(),
            chips: (0..chips)
                .map(|i| visibility.chips.frame(&chip_stagger.apply(Entrance::chip(), i), now))
                .collect(),
        }
    }
}

fn completed(mut state: RevealState) -> RevealState {
    let remaining = state.remaining();
    state.advance_by(remaining);
    state
}

/// Document-level CSS: palette variables and the looping pulse shared by
/// the typing caret and `animate-pulse`
fn stylesheet(caret: &Caret) -> String {
    format!(
        ":root {{ {} }} html.dark {{ {} }} \
         body {{ margin: 0; background: var(--folio-bg); color: var(--folio-text); \
         font-family: ui-sans-serif, system-ui, sans-serif; }} \
         html {{ scroll-behavior: smooth; }} \
         {} .typing-caret, .animate-pulse {{ {}; }}",
        ColorTokens::light().css_variables(),
        ColorTokens::dark().css_variables(),
        caret.keyframes_css(),
        caret.animation_css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{HeadlessPlatform, ViewportSource};

    const VIEWPORT: f64 = 800.0;

    /// Six stacked sections, each one viewport tall
    fn platform() -> HeadlessPlatform {
        HeadlessPlatform::with_stacked_anchors(
            VIEWPORT,
            SECTIONS.iter().map(|name| (name.to_lowercase(), VIEWPORT)),
        )
    }

    #[test]
    fn test_mount_state() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();

        let state = app.scroll_state();
        assert_eq!(state.active_section.name(), "Hero");
        assert_eq!(state.progress, 0.0);
        assert!(!state.show_top_affordance);
        assert_eq!(app.theme().scheme(), ColorScheme::Light);
        assert_eq!(app.greeting().revealed(), "");
        // Scroll tracker and visibility listeners
        assert_eq!(platform.listener_count(), 2);
        assert_eq!(platform.pending_timers(), 2);
    }

    #[test]
    fn test_system_dark_preference() {
        let platform = platform();
        platform.set_prefers_dark(true);
        let app = PortfolioApp::mount_default(platform).unwrap();
        assert!(app.theme().is_dark());
        assert!(app.to_html().contains("<html lang=\"en\" class=\"dark\">"));

        app.toggle_theme();
        assert!(!app.to_html().contains("class=\"dark\""));
    }

    #[test]
    fn test_scroll_updates_page() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();

        platform.scroll_to(2000.0);
        let state = app.scroll_state();
        assert_eq!(state.active_section.name(), "Experience");
        assert_eq!(state.progress, 0.5);
        assert!(state.show_top_affordance);

        let page = app.render();
        assert!(page.find_by_id("back-to-top").is_some());
        assert_eq!(
            page.find_by_id("scroll-progress").unwrap().inline_style(),
            Some("width: 50%")
        );
        let guide = page.find_by_id("section-guide").unwrap().text_content();
        assert!(guide.contains("You’re viewing: Experience"));
        assert!(guide.contains("Next up: Projects"));
    }

    #[test]
    fn test_guide_at_end() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        platform.scroll_to(f64::MAX);
        assert_eq!(app.scroll_state().active_section.name(), "Contact");
        let guide = app.render().find_by_id("section-guide").unwrap().text_content();
        assert!(guide.ends_with("You reached the end — nice!"));
    }

    #[test]
    fn test_typing_progresses_with_clock() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();

        platform.advance(80 * 5);
        assert_eq!(app.greeting().revealed(), "Hello");
        assert_eq!(app.headline().state().revealed_count(), 10);

        let hero = app.render();
        let h1 = hero.find_all_by_tag("h1");
        assert_eq!(h1[0].text_content(), "🙂 Hello");
    }

    #[test]
    fn test_hero_entrance_runs_once() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();

        let hero_style = |app: &PortfolioApp<HeadlessPlatform>| {
            app.render()
                .find_by_id("hero")
                .and_then(|e| e.inline_style().map(String::from))
                .unwrap()
        };
        assert!(hero_style(&app).starts_with("opacity: 0.00"));

        platform.advance(800);
        assert!(hero_style(&app).starts_with("opacity: 1.00"));

        platform.scroll_to(4000.0);
        platform.scroll_to(0.0);
        assert!(hero_style(&app).starts_with("opacity: 1.00"));
    }

    #[test]
    fn test_about_entrance_replays() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        let about_opacity = |app: &PortfolioApp<HeadlessPlatform>| {
            app.render()
                .find_by_id("about")
                .and_then(|e| e.inline_style().map(String::from))
                .unwrap()
        };

        assert!(about_opacity(&app).starts_with("opacity: 0.00"));
        platform.scroll_to(400.0);
        platform.advance(1000);
        assert!(about_opacity(&app).starts_with("opacity: 1.00"));

        platform.scroll_to(4000.0);
        assert!(about_opacity(&app).starts_with("opacity: 0.00"));
    }

    #[test]
    fn test_nav_link_scrolls_and_closes_menu() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();

        assert!(app.toggle_menu());
        app.follow_nav_link("Skills").unwrap();
        assert!(!app.nav().is_menu_open());
        assert_eq!(
            platform.scroll_requests(),
            vec![ScrollRequest::Anchor("skills".into())]
        );
        assert_eq!(app.scroll_state().active_section.name(), "Skills");

        assert!(matches!(
            app.follow_nav_link("Blog"),
            Err(FolioError::Core(_))
        ));
    }

    #[test]
    fn test_scroll_to_top() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        platform.scroll_to(3000.0);
        app.scroll_to_top();
        assert_eq!(platform.snapshot().scroll_top, 0.0);
        assert!(!app.scroll_state().show_top_affordance);
    }

    #[test]
    fn test_settles() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        assert!(app.is_animating());

        // The headline is the longest animation at 40ms per character.
        let headline = app.headline().state().total_duration_ms();
        platform.advance(headline);
        assert!(app.headline().is_complete());
        assert!(!app.is_animating());
    }

    #[test]
    fn test_settled_render() {
        let app = PortfolioApp::mount_default(platform()).unwrap();
        let page = app.render_with(RenderMode::Settled);

        assert_eq!(
            page.find_all_by_tag("h1")[0].text_content(),
            "🙂 Hello, I'm Harsh Singh"
        );
        for chip in page.find_all_by_class("skill-chip") {
            assert!(chip.inline_style().unwrap().starts_with("opacity: 1.00"));
        }
        assert_eq!(page.find_all_by_class("project-card").len(), 6);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        platform.advance(80);

        app.unmount();
        assert_eq!(platform.listener_count(), 0);
        assert_eq!(platform.pending_timers(), 0);
        assert_eq!(platform.advance(10_000), 0);
    }

    #[test]
    fn test_snapshot_json() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        platform.advance(160);

        let json = serde_json::to_value(app.snapshot()).unwrap();
        assert_eq!(json["greeting"]["text"], "He");
        assert_eq!(json["scroll"]["active_section"]["name"], "Hero");
        assert_eq!(json["theme"], "light");
        assert_eq!(json["elapsed_ms"], 160.0);
    }

    #[test]
    fn test_caret_keeps_blinking_after_settling() {
        let platform = platform();
        let app = PortfolioApp::mount_default(platform.clone()).unwrap();
        platform.advance(10_000);
        assert!(!app.is_animating());

        let html = app.to_html();
        assert!(html.contains("@keyframes folio-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }"));
        assert!(html.contains(
            ".typing-caret, .animate-pulse { animation: folio-pulse 2000ms cubic-bezier(0.4, 0, 0.6, 1) infinite; }"
        ));

        let page = app.render();
        let carets = page.find_all_by_class("typing-caret");
        assert_eq!(carets.len(), 2);
        for caret in carets {
            let style = caret.inline_style().unwrap();
            assert!(style.contains("infinite"));
            assert!(!style.contains("opacity"));
        }
    }

    #[test]
    fn test_stylesheet_for_live_mount() {
        let app = PortfolioApp::mount_default(platform()).unwrap();
        let css = app.stylesheet();
        assert!(css.contains("html { scroll-behavior: smooth; }"));
        assert!(css.contains("--folio-bg"));
        assert!(css.contains("@keyframes folio-pulse"));
        assert!(app.to_html().contains(&css));
    }

    #[test]
    fn test_html_document() {
        let app = PortfolioApp::mount_default(platform()).unwrap();
        let html = app.to_html_with(RenderMode::Settled);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Harsh Singh</title>"));
        assert!(html.contains("href=\"#experience\""));
        assert!(html.contains("&lt;3.8 sec latency"));
        assert!(html.contains("--folio-accent"));
    }
}
