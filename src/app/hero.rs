use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::{image, PageInfo};
use crate::typewriter::Typewriter;

use super::circles::BackgroundCircles;

const TYPE_TICK_MS: u64 = 90;

#[component]
pub fn Hero(page_info: Option<PageInfo>) -> impl IntoView {
    let name = page_info
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let role = page_info
        .as_ref()
        .map(|p| p.role.clone())
        .unwrap_or_default();
    let hero_src = image::url_for(page_info.as_ref().and_then(|p| p.hero_image.as_ref()));

    let phrases = vec![
        format!("Hi, the name's {name}"),
        "I like to play 🏓".to_string(),
        "I_like_to_code.py".to_string(),
        "And I'm addicted to ☕️".to_string(),
    ];
    // Server-render the full first phrase; the animation takes over on hydrate
    let initial = phrases.first().cloned().unwrap_or_default();
    let typewriter = StoredValue::new(Typewriter::new(phrases));
    let (line, set_line) = signal(initial);
    let _ = use_interval_fn(
        move || {
            let text = typewriter.try_update_value(|t| t.tick()).unwrap_or_default();
            set_line(text);
        },
        TYPE_TICK_MS,
    );

    view! {
        <div class="h-screen flex flex-col space-y-8 items-center justify-center text-center overflow-hidden">
            <BackgroundCircles />

            <img
                class="relative rounded-full h-32 w-32 mx-auto object-cover"
                src=hero_src
                alt=""
            />

            <div class="z-20">
                <h2 class="text-sm uppercase text-gray-500 pb-2 tracking-[10px] md:tracking-[15px]">
                    {role}
                </h2>
                <h1 class="text-2xl md:text-5xl lg:text-6xl font-semibold px-10">
                    <span class="mr-3">{line}</span>
                    <span class="text-mint-green animate-pulse">"|"</span>
                </h1>

                <div class="pt-5">
                    <a href="#about">
                        <button class="heroButton">"About"</button>
                    </a>
                    <a href="#experience">
                        <button class="heroButton">"Experience"</button>
                    </a>
                    <a href="#skills">
                        <button class="heroButton">"Skills"</button>
                    </a>
                    <a href="#projects">
                        <button class="heroButton">"Projects"</button>
                    </a>
                </div>
            </div>
        </div>
    }
}
