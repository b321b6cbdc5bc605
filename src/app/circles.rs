use leptos::prelude::*;
use leptos_use::{use_mouse, use_window, UseMouseReturn};

/// Decorative concentric circles behind the hero, with a subtle pointer
/// parallax. Purely presentational; the rotation and pulsing come from CSS
/// animation classes.
#[component]
pub fn BackgroundCircles() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();

    // Offset from the viewport center, damped; zero during SSR.
    let parallax = move |factor: f64| {
        let window = use_window();
        let center = |dim: Option<Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>>| {
            dim.and_then(|d| d.ok())
                .and_then(|d| d.as_f64())
                .unwrap_or(0.0)
                / 2.0
        };
        let cx = center(window.as_ref().map(|w| w.inner_width()));
        let cy = center(window.as_ref().map(|w| w.inner_height()));
        let dx = (x.get() - cx) * 0.01 * factor;
        let dy = (y.get() - cy) * 0.01 * factor;
        format!("transform: translate({dx}px, {dy}px)")
    };

    view! {
        <div class="fixed inset-0 flex justify-center items-center pointer-events-none">
            <div
                class="absolute border border-cyan/20 rounded-full h-[200px] w-[200px] animate-spin-slow"
                style=move || parallax(2.0)
            ></div>
            <div
                class="absolute border border-mint-green/20 rounded-full h-[300px] w-[300px] animate-spin-slower-reverse"
                style=move || parallax(1.0)
            ></div>
            <div
                class="absolute border border-cyan/15 rounded-full h-[500px] w-[500px] animate-breathe"
                style=move || parallax(0.5)
            ></div>
            <div
                class="absolute border border-cyan/30 h-[510px] w-[510px] md:h-[650px] md:w-[650px] rounded-full animate-glow-pulse"
                style=move || parallax(0.8)
            ></div>
            <div
                class="absolute border border-mint-green/10 rounded-full h-[800px] w-[800px] animate-breathe-slow"
                style=move || parallax(0.3)
            ></div>
        </div>
    }
}
