// crates/certilife-app/src/components.rs
// Shared layout components

use certilife_core::content::{Icon, CONTACT_URL, HOMEPAGE_URL, NAV_LINKS};
use certilife_core::{CounterAnimation, CounterParams};
use leptos::html;
use leptos::prelude::*;

use crate::browser::{self, ViewObserver};
use crate::state::use_presentation;

// ============================================================================
// Navigation
// ============================================================================

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let page = use_presentation();

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1.5 bg-yellow-400 origin-left z-[60]"
            style:transform=move || format!("scaleX({})", page.progress.get())
        ></div>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let page = use_presentation();
    let state = page.state;

    view! {
        <ScrollProgressBar/>
        <nav class=move || {
            if state.get().scrolled {
                "fixed w-full z-50 transition-all duration-300 bg-white/90 backdrop-blur-lg shadow-sm py-3"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center">
                <div class="flex items-center gap-2 cursor-pointer fade-in-left">
                    <span class="text-2xl font-bold tracking-tight text-slate-900">
                        "CertiLife " <span class="text-yellow-500 font-light">"PCO"</span>
                    </span>
                </div>

                // Desktop Nav
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.iter().map(|link| {
                        let section_id = link.section_id;
                        view! {
                            <a
                                href=format!("#{}", section_id)
                                class="text-gray-600 hover:text-slate-900 font-medium transition-colors relative group cursor-pointer"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    page.navigate_to(section_id);
                                }
                            >
                                {link.label}
                                <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-yellow-400 transition-all group-hover:w-full"></span>
                            </a>
                        }
                    }).collect_view()}
                    <a
                        href=CONTACT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-yellow-400 text-slate-900 px-6 py-2.5 rounded-full font-bold transition-all hover:scale-105 cursor-pointer inline-block"
                    >
                        "도입 문의하기"
                    </a>
                </div>

                // Mobile menu button
                <button class="md:hidden text-gray-800" on:click=move |_| page.toggle_menu()>
                    <Show
                        when=move || state.get().menu_open
                        fallback=|| view! {
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        }
                    >
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </Show>
                </button>
            </div>

            // Mobile menu
            <Show when=move || state.get().menu_open>
                <div class="md:hidden bg-white border-t border-gray-200 shadow-lg">
                    <div class="px-4 py-4 space-y-3">
                        {NAV_LINKS.iter().map(|link| {
                            let section_id = link.section_id;
                            view! {
                                <a
                                    href=format!("#{}", section_id)
                                    class="block text-gray-700 font-medium"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        page.navigate_to(section_id);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        }).collect_view()}
                        <a
                            href=CONTACT_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block w-full text-center px-4 py-2 bg-yellow-400 text-slate-900 font-bold rounded-full"
                        >
                            "도입 문의하기"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-slate-400 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 items-center gap-6 text-center">
                    <div class="text-xl font-bold text-white md:text-left">"CertiLife"</div>
                    <div>
                        <a href=HOMEPAGE_URL target="_blank" rel="noopener noreferrer" class="hover:text-yellow-400 transition-colors">
                            "서티라이프 홈페이지"
                        </a>
                    </div>
                    <div class="text-sm md:text-right">
                        "© 2025 CertiLife Inc. All rights reserved."
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center">
            <h1 class="text-4xl font-bold text-slate-900 mb-4">"404"</h1>
            <p class="text-gray-500 mb-8">"Page not found"</p>
            <a href="/" class="text-yellow-600 hover:underline">"Go home"</a>
        </div>
    }
}

// ============================================================================
// Widgets
// ============================================================================

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Monitor => "🖥️",
        Icon::Smartphone => "📱",
        Icon::QrCode => "🔳",
        Icon::MessageCircle => "💬",
        Icon::Bot => "🤖",
        Icon::Gift => "🎁",
    }
}

/// Number that counts up from `from` to `to` the first time it scrolls
/// into view.
#[component]
pub fn Counter(
    #[prop(default = 0)] from: i64,
    to: i64,
    #[prop(optional)] duration: Option<f64>,
) -> impl IntoView {
    let duration = duration.unwrap_or_else(|| use_presentation().config.counter.duration_secs);
    let counter = CounterAnimation::new(CounterParams::new(from, to, duration));
    let (value, set_value) = signal(counter.initial_value());
    let animation = StoredValue::new_local(counter);
    let node_ref = NodeRef::<html::Span>::new();
    let observer = StoredValue::new_local(None::<ViewObserver>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) {
            return;
        }
        let handle = ViewObserver::once(&element, move || {
            let started = animation
                .try_update_value(|a| a.enter_view(browser::now_ms()))
                .unwrap_or(false);
            if started {
                run_counter(animation, set_value);
            }
        });
        observer.set_value(handle);
    });

    on_cleanup(move || {
        // dropping the observer disconnects it
        drop(observer.try_update_value(|o| o.take()));
    });

    view! { <span node_ref=node_ref>{move || value.get()}</span> }
}

fn run_counter(
    animation: StoredValue<CounterAnimation, LocalStorage>,
    set_value: WriteSignal<i64>,
) {
    request_animation_frame(move || {
        let frame = animation
            .try_update_value(|a| a.frame(browser::now_ms()))
            .flatten();
        let Some(frame) = frame else {
            return;
        };
        // Signal gone means the counter unmounted
        if set_value.try_set(frame.value).is_some() {
            return;
        }
        if !frame.done {
            run_counter(animation, set_value);
        }
    });
}
