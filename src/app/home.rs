use leptos::prelude::*;
use leptos_meta::Title;

use crate::content;

use super::about::About;
use super::contact::ContactMe;
use super::experience::WorkExperience;
use super::header::Header;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

/// Assembles the page: five independent resources, one per document type,
/// each section rendering as soon as its own data resolves.
#[component]
pub fn HomePage() -> impl IntoView {
    let page_info = Resource::new(|| (), |_| content::fetch_page_info());
    let socials = Resource::new(|| (), |_| content::fetch_socials());
    let skills = Resource::new(|| (), |_| content::fetch_skills());
    let experiences = Resource::new(|| (), |_| content::fetch_experiences());
    let projects = Resource::new(|| (), |_| content::fetch_projects());

    view! {
        <Title text="Home" />

        <Suspense>
            {move || Suspend::new(async move {
                let socials = socials.await;
                view! { <Header socials /> }
            })}
        </Suspense>

        <section id="hero" class="snap-start">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let page_info = page_info.await;
                    view! { <Hero page_info /> }
                })}
            </Suspense>
        </section>

        <section id="about" class="snap-center">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let page_info = page_info.await;
                    view! { <About page_info /> }
                })}
            </Suspense>
        </section>

        <section id="experience" class="snap-center">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let experiences = experiences.await;
                    view! { <WorkExperience experiences /> }
                })}
            </Suspense>
        </section>

        <section id="skills" class="snap-start">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let skills = skills.await;
                    view! { <Skills skills /> }
                })}
            </Suspense>
        </section>

        <section id="projects" class="snap-start">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let projects = projects.await;
                    view! { <Projects projects /> }
                })}
            </Suspense>
        </section>

        <section id="contact" class="snap-start">
            <Suspense fallback=SectionSkeleton>
                {move || Suspend::new(async move {
                    let page_info = page_info.await;
                    view! { <ContactMe page_info /> }
                })}
            </Suspense>
        </section>

        <footer class="text-center text-xs text-gray-500 pb-4">
            "Built " {env!("BUILD_TIME")}
        </footer>
    }
}

#[component]
fn SectionSkeleton() -> impl IntoView {
    view! {
        <div class="h-screen flex flex-col items-center justify-center space-y-4">
            <div class="loading-skeleton h-32 w-32 rounded-full"></div>
            <div class="loading-skeleton h-8 w-2/3 rounded"></div>
            <div class="loading-skeleton h-6 w-1/2 rounded"></div>
        </div>
    }
}
