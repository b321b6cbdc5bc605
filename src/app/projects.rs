use leptos::prelude::*;

use crate::carousel::Direction;
use crate::content::portable_text::{group_blocks, plain_text, Block, BlockGroup, ListKind, Span};
use crate::content::{image, Project};

use super::scroller::{PageDots, ScrollArrow, Scroller};

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    let scroller = Scroller::new();

    view! {
        <div class="h-screen relative flex overflow-hidden flex-col text-left max-w-full justify-evenly mx-auto items-center z-0">
            <h3 class="absolute top-20 md:top-24 uppercase tracking-[20px] text-gray-500 text-xl md:text-2xl">
                "Projects"
            </h3>

            <div class="relative w-full flex items-center justify-center">
                <ScrollArrow scroller direction=Direction::Left />

                <div
                    node_ref=scroller.node()
                    on:scroll=move |_| scroller.track()
                    class="relative w-full flex overflow-x-scroll overflow-y-hidden snap-x snap-mandatory z-20 scrollbar-hide"
                >
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectSlide index=i project /> })
                        .collect_view()}
                </div>

                <ScrollArrow scroller direction=Direction::Right />
            </div>

            <PageDots scroller />

            <div class="w-full absolute top-[20%] md:top-[30%] bg-mint-green/20 left-0 h-[500px] -skew-y-12"></div>
        </div>
    }
}

#[component]
fn ProjectSlide(index: usize, project: Project) -> impl IntoView {
    let image_src = image::url_for(project.image.as_ref());
    let image_alt = plain_text(&project.summary);
    let link = project.link_to_build.clone();
    let open_link = {
        let link = link.clone();
        move |_| {
            if let Some(link) = &link {
                let _ = window().open_with_url_and_target(link, "_blank");
            }
        }
    };

    view! {
        <div
            class="w-screen flex-shrink-0 snap-center flex flex-col space-y-5 items-center justify-center p-10 md:p-44 h-screen cursor-pointer hover:bg-mint-green/5 transition-colors duration-300"
            on:click=open_link
        >
            <img class="h-28 xl:h-80 md:h-72 object-contain" src=image_src alt=image_alt />

            <div class="space-y-5 md:space-y-10 px-0 md:px-10 max-w-6xl">
                <h4 class="text-lg md:text-2xl lg:text-4xl font-semibold text-center">
                    <span class="underline decoration-mint-green/50">
                        {format!("Project {}:", index + 1)}
                    </span>
                    " "
                    {project.title.clone()}
                    {link
                        .map(|_| {
                            view! {
                                <span class="text-sm text-mint-green/70 ml-2">
                                    "(Click to view)"
                                </span>
                            }
                        })}
                </h4>

                <div class="text-sm md:text-base lg:text-lg text-justify">
                    <Summary blocks=project.summary />
                </div>
            </div>
        </div>
    }
}

/// Block content rendered through the fixed type-to-markup mapping: normal
/// paragraphs, two heading levels, bullet/numbered lists, and bold/italic/code
/// spans. Unmapped styles render as paragraphs.
#[component]
fn Summary(blocks: Vec<Block>) -> impl IntoView {
    group_blocks(blocks)
        .into_iter()
        .map(|group| match group {
            BlockGroup::Single(block) => render_block(block),
            BlockGroup::List {
                kind: ListKind::Bullet,
                items,
            } => view! {
                <ul class="list-disc list-inside mb-3 space-y-1">
                    {items.into_iter().map(render_list_item).collect_view()}
                </ul>
            }
            .into_any(),
            BlockGroup::List {
                kind: ListKind::Number,
                items,
            } => view! {
                <ol class="list-decimal list-inside mb-3 space-y-1">
                    {items.into_iter().map(render_list_item).collect_view()}
                </ol>
            }
            .into_any(),
        })
        .collect_view()
}

fn render_block(block: Block) -> AnyView {
    let children = render_spans(block.children);
    match block.style.as_str() {
        "h2" => view! {
            <h2 class="text-xl md:text-2xl font-bold mb-3 mt-4 text-mint-green">{children}</h2>
        }
        .into_any(),
        "h3" => view! {
            <h3 class="text-lg md:text-xl font-semibold mb-2 mt-3 text-mint-green">{children}</h3>
        }
        .into_any(),
        _ => view! { <p class="mb-2">{children}</p> }.into_any(),
    }
}

fn render_list_item(block: Block) -> AnyView {
    view! { <li class="ml-4">{render_spans(block.children)}</li> }.into_any()
}

fn render_spans(children: Vec<Span>) -> AnyView {
    children
        .into_iter()
        .map(|span| {
            let mut node = span.text.into_any();
            for mark in &span.marks {
                node = match mark.as_str() {
                    "strong" => {
                        view! { <strong class="font-bold text-mint-green">{node}</strong> }
                            .into_any()
                    }
                    "em" => view! { <em class="italic">{node}</em> }.into_any(),
                    "code" => view! {
                        <code class="bg-navy-light px-1 py-0.5 rounded text-sm font-mono">
                            {node}
                        </code>
                    }
                    .into_any(),
                    _ => node,
                };
            }
            node
        })
        .collect_view()
}
