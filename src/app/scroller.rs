use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::carousel::{self, Direction};

/// Wires a scroll container to the carousel math: arrow clicks issue a
/// smooth scroll of one container width, scroll events recompute the active
/// page index, and the page count is measured from the mounted container.
#[derive(Clone, Copy)]
pub struct Scroller {
    node: NodeRef<html::Div>,
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    pages: ReadSignal<usize>,
    set_pages: WriteSignal<usize>,
}

impl Scroller {
    pub fn new() -> Self {
        let (page, set_page) = signal(0);
        let (pages, set_pages) = signal(0);
        let node = NodeRef::new();
        // Measure once the container mounts; effects only run client-side,
        // so the dots appear on hydration.
        Effect::new(move |_| {
            if let Some(el) = node.get() {
                set_pages.set(carousel::page_count(
                    el.scroll_width() as f64,
                    el.client_width() as f64,
                ));
            }
        });
        Self {
            node,
            page,
            set_page,
            pages,
            set_pages,
        }
    }

    pub fn node(&self) -> NodeRef<html::Div> {
        self.node
    }

    pub fn page(&self) -> ReadSignal<usize> {
        self.page
    }

    pub fn pages(&self) -> ReadSignal<usize> {
        self.pages
    }

    pub fn scroll(&self, direction: Direction) {
        let Some(el) = self.node.get_untracked() else {
            return;
        };
        let target = carousel::scroll_target(
            el.scroll_left() as f64,
            el.client_width() as f64,
            direction,
        );
        let options = ScrollToOptions::new();
        options.set_left(target);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&options);
    }

    pub fn track(&self) {
        let Some(el) = self.node.get_untracked() else {
            return;
        };
        self.set_page.set(carousel::page_index(
            el.scroll_left() as f64,
            el.client_width() as f64,
        ));
        // content widths can change after images load
        self.set_pages.set(carousel::page_count(
            el.scroll_width() as f64,
            el.client_width() as f64,
        ));
    }
}

#[component]
pub fn PageDots(scroller: Scroller) -> impl IntoView {
    let page = scroller.page();
    let pages = scroller.pages();
    view! {
        <div class="flex justify-center gap-2 mt-4 z-30">
            {move || {
                (0..pages())
                    .map(|i| {
                        view! {
                            <span class=move || {
                                if page() == i {
                                    "h-2 w-2 rounded-full bg-mint-green"
                                } else {
                                    "h-2 w-2 rounded-full bg-gray-500/50"
                                }
                            }></span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn ScrollArrow(scroller: Scroller, direction: Direction) -> impl IntoView {
    let (glyph, label, side) = match direction {
        Direction::Left => ("❮", "Scroll left", "left-0 md:left-2"),
        Direction::Right => ("❯", "Scroll right", "right-0 md:right-2"),
    };
    view! {
        <button
            class=format!(
                "absolute {side} top-1/2 -translate-y-1/2 text-3xl md:text-4xl text-gray-400 cursor-pointer z-30 hover:text-mint-green transition-colors duration-200",
            )
            aria-label=label
            on:click=move |_| scroller.scroll(direction)
        >
            {glyph}
        </button>
    }
}
