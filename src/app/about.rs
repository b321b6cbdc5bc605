use leptos::prelude::*;

use crate::content::{image, PageInfo};

#[component]
pub fn About(page_info: Option<PageInfo>) -> impl IntoView {
    let profile_src = image::url_for(page_info.as_ref().and_then(|p| p.profile_pic.as_ref()));
    let background = page_info
        .map(|p| p.background_information)
        .unwrap_or_default();

    view! {
        <div class="flex flex-col relative h-screen text-center md:text-left md:flex-row max-w-7xl px-10 justify-evenly mx-auto items-center">
            <img
                class="-mb-20 md:mb-0 flex-shrink-0 w-48 h-48 rounded-full object-cover md:rounded-lg md:w-64 md:h-96 xl:w-[400px] xl:h-[500px]"
                src=profile_src
                alt=""
            />

            <div class="flex flex-col items-center md:items-start space-y-5 md:space-y-10 px-0 md:px-10">
                <h3 class="uppercase tracking-[20px] text-gray-500 text-xl md:text-2xl">
                    "About"
                </h3>
                <h4 class="text-xl md:text-4xl font-semibold">
                    "Here is a " <span class="underline decoration-mint-green/50">"little"</span>
                    " background"
                </h4>
                <p class="text-sm md:text-lg text-justify">{background}</p>
            </div>
        </div>
    }
}
