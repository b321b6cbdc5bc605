use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::PageInfo;
use crate::mailto::{self, ContactMessage};

/// Delay before the form reports success. The mail client is the real
/// deliverer; the site never learns whether anything was sent.
const SUCCESS_DELAY_MS: f64 = 1500.0;

#[component]
pub fn ContactMe(page_info: Option<PageInfo>) -> impl IntoView {
    let email = page_info
        .as_ref()
        .and_then(|p| p.email.clone())
        .unwrap_or_default();
    let phone = page_info.as_ref().and_then(|p| p.phone_number.clone());
    let address = page_info.as_ref().and_then(|p| p.address.clone());

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (sent, set_sent) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_sent(true), SUCCESS_DELAY_MS);

    let to = email.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = |node: NodeRef<html::Input>| {
            node.get_untracked().map(|el| el.value()).unwrap_or_default()
        };
        let message = ContactMessage {
            name: input(name_ref),
            email: input(email_ref),
            subject: input(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        let uri = mailto::mailto_uri(&to, &message);
        if let Err(e) = window().location().set_href(&uri) {
            log::warn!("couldn't hand off to the mail client: {e:?}");
        }
        start(());
    };

    view! {
        <div class="h-screen flex flex-col relative text-center md:text-left md:flex-row max-w-7xl px-4 sm:px-10 justify-evenly mx-auto items-center">
            <div class="flex flex-col space-y-4 md:space-y-6 lg:space-y-8">
                <h3 class="uppercase tracking-[15px] md:tracking-[20px] text-gray-500 text-xl md:text-2xl text-center">
                    "Contact"
                </h3>
                <h4 class="text-2xl md:text-3xl lg:text-4xl font-semibold text-center">
                    "I have got just what you need. "
                    <span class="decoration-mint-green/50 underline">"Lets talk."</span>
                </h4>

                <div class="space-y-4 md:space-y-6">
                    {phone
                        .map(|phone| {
                            view! {
                                <div class="flex items-center space-x-3 md:space-x-5 justify-center">
                                    <i class="extra-phone text-mint-green animate-pulse"></i>
                                    <p class="text-lg md:text-2xl">{phone}</p>
                                </div>
                            }
                        })}
                    <div class="flex items-center space-x-3 md:space-x-5 justify-center">
                        <i class="extra-email text-mint-green animate-pulse"></i>
                        <p class="text-lg md:text-2xl">{email.clone()}</p>
                    </div>
                    {address
                        .map(|address| {
                            view! {
                                <div class="flex items-center space-x-3 md:space-x-5 justify-center">
                                    <i class="extra-location text-mint-green animate-pulse"></i>
                                    <p class="text-lg md:text-2xl">{address}</p>
                                </div>
                            }
                        })}
                </div>

                <form on:submit=on_submit class="flex flex-col space-y-2 w-full sm:w-fit mx-auto">
                    <div class="flex flex-col sm:flex-row space-y-2 sm:space-y-0 sm:space-x-2">
                        <input
                            node_ref=name_ref
                            placeholder="Name"
                            class="contactInput"
                            type="text"
                        />
                        <input
                            node_ref=email_ref
                            placeholder="Email"
                            class="contactInput"
                            type="email"
                        />
                    </div>
                    <input
                        node_ref=subject_ref
                        placeholder="Subject"
                        class="contactInput"
                        type="text"
                    />
                    <textarea node_ref=message_ref placeholder="Message" class="contactInput">
                    </textarea>
                    <button
                        type="submit"
                        class="bg-mint-green py-3 md:py-5 px-10 rounded-md text-navy-dark font-bold text-lg"
                    >
                        "Submit"
                    </button>
                </form>

                {move || {
                    sent()
                        .then(|| {
                            view! {
                                <p class="text-center text-mint-green">
                                    "Thanks! Your mail client should have opened with the message."
                                </p>
                            }
                        })
                }}
            </div>
        </div>
    }
}
