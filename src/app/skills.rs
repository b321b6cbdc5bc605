use leptos::prelude::*;

use crate::content::{image, Skill};

#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="h-screen flex relative flex-col text-center md:text-left max-w-[2000px] px-4 sm:px-10 min-h-screen justify-center mx-auto items-center">
            <h3 class="uppercase tracking-[20px] text-gray-500 text-2xl mb-10">
                "Skills"
            </h3>
            <div class="grid grid-cols-4 lg:grid-cols-8 gap-5 p-4 place-items-center">
                {skills
                    .into_iter()
                    .map(|skill| view! { <SkillBadge skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One skill card: hovering reveals an overlay with the title, a progress bar
/// sized to the skill's proficiency, and the percentage.
#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let width = skill.bar_width();
    let image_src = image::url_for(skill.image.as_ref());

    view! {
        <div
            class="relative group cursor-pointer"
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
        >
            <div class="relative p-2 rounded-xl bg-white border border-mint-green/20">
                <img
                    class=move || {
                        if hovered() {
                            "w-16 h-16 md:w-20 md:h-20 lg:w-24 lg:h-24 object-contain"
                        } else {
                            "w-16 h-16 md:w-20 md:h-20 lg:w-24 lg:h-24 object-contain grayscale"
                        }
                    }
                    src=image_src
                    alt=skill.title.clone()
                />
            </div>

            <div class=move || {
                if hovered() {
                    "absolute inset-0 rounded-2xl bg-navy-light/90 flex flex-col items-center justify-center space-y-2 backdrop-blur-lg border border-mint-green/30 opacity-100 transition-opacity duration-300"
                } else {
                    "absolute inset-0 rounded-2xl flex flex-col items-center justify-center space-y-2 opacity-0 transition-opacity duration-300"
                }
            }>
                <p class="text-xs md:text-sm font-bold text-ice-white text-center">
                    {skill.title.clone()}
                </p>

                <div class="w-16 md:w-20 h-2 rounded-full bg-navy-dark/60 overflow-hidden">
                    <div
                        class="h-full bg-mint-green transition-all duration-500 ease-out"
                        style:width=move || {
                            if hovered() { format!("{width}%") } else { "0%".to_string() }
                        }
                    ></div>
                </div>

                <p class="text-lg md:text-xl font-bold text-mint-green">
                    {format!("{}%", skill.progress)}
                </p>
            </div>
        </div>
    }
}
