use leptos::prelude::*;

use crate::carousel::Direction;
use crate::content::{self, image, Experience};

use super::scroller::{PageDots, ScrollArrow, Scroller};

#[component]
pub fn WorkExperience(experiences: Vec<Experience>) -> impl IntoView {
    let mut experiences = experiences;
    content::sort_newest_first(&mut experiences);
    let scroller = Scroller::new();

    view! {
        <div class="h-screen flex relative overflow-hidden flex-col text-left max-w-full px-10 justify-evenly mx-auto items-center">
            <h3 class="absolute top-24 uppercase tracking-[20px] text-gray-500 text-2xl text-center w-full">
                "Experience"
            </h3>

            <div class="relative w-full flex items-center justify-center mt-10 md:mt-40">
                <ScrollArrow scroller direction=Direction::Left />

                <div
                    node_ref=scroller.node()
                    on:scroll=move |_| scroller.track()
                    class="w-full flex space-x-5 overflow-x-scroll p-10 snap-x snap-mandatory scrollbar-hide"
                >
                    {experiences
                        .into_iter()
                        .map(|experience| view! { <ExperienceCard experience /> })
                        .collect_view()}
                </div>

                <ScrollArrow scroller direction=Direction::Right />
            </div>

            <PageDots scroller />
        </div>
    }
}

#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    let company_src = image::url_for(experience.company_image.as_ref());

    view! {
        <article class="flex flex-col rounded-3xl items-center space-y-4 flex-shrink-0 w-[300px] md:w-[500px] xl:w-[600px] snap-center bg-white bg-gradient-to-tr from-white to-mint-green/20 p-6 md:p-8">
            <img
                class="w-24 h-24 rounded-full xl:w-[150px] xl:h-[150px] object-cover object-center"
                src=company_src
                alt=format!("{} logo", experience.company)
            />
            <div class="w-full px-0 md:px-5">
                <div class="text-center">
                    <h4 class="text-xl md:text-2xl font-light text-black">
                        {experience.job_title.clone()}
                    </h4>
                    <p class="font-bold text-lg md:text-xl mt-1 text-mint-green-dark">
                        {experience.company.clone()}
                    </p>
                    <p class="uppercase py-3 text-gray-500 text-sm">{experience.tenure()}</p>
                </div>
                <div class="flex justify-center space-x-2 my-2">
                    {experience
                        .technologies
                        .iter()
                        .map(|technology| {
                            view! {
                                <img
                                    class="h-8 w-8 rounded-full object-cover"
                                    src=image::url_for(technology.image.as_ref())
                                    alt=technology.title.clone()
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="w-full max-h-48 md:max-h-40 overflow-y-auto px-4 md:px-6">
                <ul class="list-disc space-y-2 text-black text-sm md:text-base text-left pl-5">
                    {experience
                        .points
                        .iter()
                        .map(|point| view! { <li>{point.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
