use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::Social;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
];

#[component]
pub fn Header(socials: Vec<Social>) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > 50.0);

    view! {
        <header class=move || {
            if is_scrolled() {
                "fixed top-0 left-0 right-0 z-40 backdrop-blur-md bg-navy-dark/90 border-b border-navy-light shadow-md"
            } else {
                "fixed top-0 left-0 right-0 z-40 backdrop-blur-md bg-navy-dark/60 border-b border-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#hero" class="text-xl font-bold text-mint-green">
                    "Portfolio"
                </a>
                <nav class="hidden md:flex gap-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm uppercase tracking-widest text-ice-white hover:text-mint-green transition-colors"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex flex-row items-center gap-2 md:gap-4">
                    {socials
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-cyan hover:text-mint-green text-2xl transition-colors"
                                    aria-label=social.title.clone()
                                >
                                    <i class=icon_class(&social)></i>
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact">
                        <button class="ml-2 md:ml-4 px-4 md:px-6 py-2 rounded-full text-sm font-medium text-navy-dark bg-mint-green hover:opacity-90 transition-all duration-300">
                            "Contact"
                        </button>
                    </a>
                </div>
            </div>
        </header>
    }
}

/// Map a social record onto its devicon class, falling back to a plain link
/// glyph for platforms without one.
fn icon_class(social: &Social) -> &'static str {
    let key = format!("{} {}", social.title, social.url).to_lowercase();
    if key.contains("github") {
        "devicon-github-plain"
    } else if key.contains("linkedin") {
        "devicon-linkedin-plain"
    } else if key.contains("twitter") || key.contains("x.com") {
        "devicon-twitter-original"
    } else {
        "extra-link"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(title: &str, url: &str) -> Social {
        Social {
            id: String::new(),
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn known_platforms_get_their_icon() {
        assert_eq!(
            icon_class(&social("GitHub", "https://github.com/x")),
            "devicon-github-plain"
        );
        assert_eq!(
            icon_class(&social("", "https://linkedin.com/in/x")),
            "devicon-linkedin-plain"
        );
    }

    #[test]
    fn unknown_platforms_fall_back_to_link_glyph() {
        assert_eq!(
            icon_class(&social("Mastodon", "https://example.social/@x")),
            "extra-link"
        );
    }
}
