//! Section markup

use folio_animation::{Caret, EntranceFrame, RevealState};
use folio_layout::element::{a, div, el, heading, p, section, span, text, Element};
use folio_layout::typing_text;

use crate::config::FolioConfig;
use crate::content::display_url;

const SECTION_CARD: &str =
    "py-20 px-6 mx-auto bg-gray-100 dark:bg-gray-800 rounded-xl shadow";
const SECTION_TITLE: &str = "text-3xl font-bold mb-6 border-b-2 border-purple-500 inline-block";

/// Sampled entrance state for everything that animates in
pub(crate) struct Frames {
    /// One per section, in declared order
    pub sections: Vec<EntranceFrame>,
    /// One per project card
    pub cards: Vec<EntranceFrame>,
    /// One per skill chip
    pub chips: Vec<EntranceFrame>,
}

impl Frames {
    fn section(&self, index: usize) -> EntranceFrame {
        self.sections
            .get(index)
            .copied()
            .unwrap_or(EntranceFrame::REST)
    }
}

pub(crate) struct Typing<'a> {
    pub greeting: &'a RevealState,
    pub headline: &'a RevealState,
    pub caret: Caret,
}

/// All content sections in page order
pub(crate) fn sections(config: &FolioConfig, frames: &Frames, typing: &Typing<'_>) -> Vec<Element> {
    vec![
        hero(config, typing).style(frames.section(0).to_css()),
        about(config).style(frames.section(1).to_css()),
        experience(config).style(frames.section(2).to_css()),
        projects(config, &frames.cards).style(frames.section(3).to_css()),
        skills(config, &frames.chips).style(frames.section(4).to_css()),
        contact(config).style(frames.section(5).to_css()),
    ]
}

fn hero(config: &FolioConfig, typing: &Typing<'_>) -> Element {
    let profile = &config.profile;
    section("hero")
        .class("min-h-screen flex flex-col justify-center items-center text-center px-6 text-white bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500")
        .child(
            el("img")
                .class("w-36 h-36 rounded-full shadow-xl border-4 border-white mb-6 object-cover ring-4 ring-purple-400 animate-pulse")
                .attr("src", profile.avatar_url.as_str())
                .attr("alt", profile.name.as_str()),
        )
        .child(
            el("h1")
                .class("text-5xl font-bold mb-4")
                .child(text("🙂 "))
                .child(typing_text(typing.greeting, &typing.caret)),
        )
        .child(
            el("p")
                .class("text-xl mb-6")
                .child(typing_text(typing.headline, &typing.caret)),
        )
        .child(
            a("#contact")
                .class("px-6 py-3 bg-white text-purple-600 rounded-full font-semibold hover:bg-purple-200")
                .child(text("Contact Me")),
        )
}

fn about(config: &FolioConfig) -> Element {
    let profile = &config.profile;
    let body = el("p")
        .class("text-lg leading-relaxed text-gray-700 dark:text-gray-300")
        .child(text(profile.about.as_str()))
        .when(!profile.achievements.is_empty(), |body| {
            body.child(el("br"))
                .child(el("br"))
                .child(el("strong").child(text("Achievements:")))
                .child(text(format!(" {}.", profile.achievements.join(", "))))
        });

    section("about")
        .class(SECTION_CARD)
        .class("max-w-4xl")
        .child(heading(2, "About Me").class(SECTION_TITLE))
        .child(body)
}

fn experience(config: &FolioConfig) -> Element {
    let roles = config.experience.iter().map(|role| {
        div()
            .child(heading(3, role.title()).class("text-2xl font-bold"))
            .child(p(role.subtitle()).class("text-gray-500 mb-2"))
            .child(
                el("ul")
                    .class("list-disc ml-6 text-gray-700 dark:text-gray-300 leading-relaxed")
                    .children(role.highlights.iter().map(|h| el("li").child(text(h.as_str())))),
            )
    });

    section("experience")
        .class(SECTION_CARD)
        .class("max-w-5xl")
        .child(heading(2, "Experience").class(SECTION_TITLE))
        .child(div().class("space-y-10").children(roles))
}

fn projects(config: &FolioConfig, cards: &[EntranceFrame]) -> Element {
    let grid = config.projects.iter().enumerate().map(|(i, project)| {
        let frame = cards.get(i).copied().unwrap_or(EntranceFrame::REST);
        div()
            .class("project-card p-6 bg-gray-200 dark:bg-gray-700 rounded-xl shadow hover:scale-105 transition-transform")
            .style(frame.to_css())
            .child(heading(3, project.title.as_str()).class("text-xl font-semibold mb-2"))
            .child(p(project.description.as_str()).class("text-gray-700 dark:text-gray-300"))
    });

    section("projects")
        .class(SECTION_CARD)
        .class("max-w-5xl")
        .child(heading(2, "Projects").class(SECTION_TITLE))
        .child(div().class("grid md:grid-cols-2 gap-8").children(grid))
}

fn skills(config: &FolioConfig, chips: &[EntranceFrame]) -> Element {
    let chips = config.skills.iter().enumerate().map(|(i, skill)| {
        let frame = chips.get(i).copied().unwrap_or(EntranceFrame::REST);
        span()
            .class("skill-chip px-4 py-2 bg-purple-200 dark:bg-purple-800 text-purple-900 dark:text-purple-100 rounded-full font-semibold")
            .style(frame.to_css())
            .child(text(skill.as_str()))
    });

    section("skills")
        .class(SECTION_CARD)
        .class("max-w-4xl")
        .child(heading(2, "Skills").class(SECTION_TITLE))
        .child(div().class("flex flex-wrap gap-4").children(chips))
}

fn contact(config: &FolioConfig) -> Element {
    let contact = &config.profile.contact;
    let line = |icon: &str, label: &str| {
        el("p")
            .class("mb-2 text-lg")
            .child(text(format!("{icon} ")))
            .child(el("strong").child(text(format!("{label}:"))))
            .child(text(" "))
    };
    let link = |url: &str| {
        a(url)
            .class("text-purple-600 underline")
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .child(text(display_url(url)))
    };

    section("contact")
        .class(SECTION_CARD)
        .class("max-w-3xl text-center")
        .child(heading(2, "Contact").class(SECTION_TITLE))
        .child(line("📩", "Email").child(text(contact.email.as_str())))
        .child(line("📞", "Phone").child(text(contact.phone.as_str())))
        .child(line("🔗", "GitHub").child(link(&contact.github)))
        .child(line("🔗", "LinkedIn").child(link(&contact.linkedin)))
}
