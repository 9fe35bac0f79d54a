// crates/certilife-app/src/pages/cases.rs
// Case study carousel, advanced by timer or the prev/next buttons

use certilife_core::content::{CASE_STUDIES, SECTION_CASE_STUDIES};
use leptos::prelude::*;

use crate::components::Counter;
use crate::state::use_presentation;

#[component]
pub fn CaseStudies() -> impl IntoView {
    let page = use_presentation();
    let active_case = page.active_case;

    view! {
        <section id=SECTION_CASE_STUDIES class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-end justify-between mb-12">
                    <div>
                        <span class="text-yellow-600 font-bold tracking-wider uppercase text-sm">"Success Story"</span>
                        <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mt-2">"도입 사례"</h2>
                    </div>
                    <div class="flex gap-3">
                        <button
                            class="w-12 h-12 rounded-full border border-slate-200 hover:bg-yellow-400 hover:border-yellow-400 transition-colors"
                            aria-label="이전 사례"
                            on:click=move |_| page.prev_case()
                        >
                            "←"
                        </button>
                        <button
                            class="w-12 h-12 rounded-full border border-slate-200 hover:bg-yellow-400 hover:border-yellow-400 transition-colors"
                            aria-label="다음 사례"
                            on:click=move |_| page.next_case()
                        >
                            "→"
                        </button>
                    </div>
                </div>

                // Rebuilt only when the case changes, so the stat counters
                // replay per case and stay put otherwise
                {move || {
                    let case = CASE_STUDIES[active_case.get() % CASE_STUDIES.len()];
                    view! {
                        <div class="grid lg:grid-cols-2 gap-12 items-center fade-in-left">
                            <div class="space-y-6">
                                <span class="inline-block bg-slate-900 text-yellow-400 px-3 py-1 rounded-full text-xs font-bold">
                                    {case.badge}
                                </span>
                                <h3 class="text-3xl font-extrabold text-slate-900">
                                    {case.title}
                                    {(!case.title_suffix.is_empty()).then(|| view! {
                                        <span class="block text-lg font-medium text-gray-500 mt-1">{case.title_suffix}</span>
                                    })}
                                </h3>
                                <p class="text-lg italic text-slate-700">{case.subtitle}</p>
                                <p class="text-gray-600 leading-relaxed">{case.description}</p>

                                <div class="grid grid-cols-2 gap-4">
                                    {case.stats.iter().map(|stat| view! {
                                        <div class="bg-slate-50 rounded-2xl p-5">
                                            <div class="text-sm text-gray-500 mb-1">{stat.label}</div>
                                            <div class="text-3xl font-bold text-slate-900">
                                                <Counter to=stat.value/>{stat.unit}
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>

                                <a
                                    href=case.button_link
                                    target=case.link_target()
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 font-bold text-slate-900 border-b-2 border-yellow-400 pb-1 hover:gap-3 transition-all"
                                >
                                    {case.button_text}" →"
                                </a>
                            </div>

                            <div class="bg-yellow-400 rounded-3xl p-10 relative overflow-hidden">
                                <div class="text-5xl mb-4">"🏆"</div>
                                <h4 class="text-2xl font-extrabold text-slate-900 mb-2">{case.award_title}</h4>
                                <p class="text-slate-800 mb-8">{case.award_description}</p>
                                <ul class="space-y-3">
                                    {case.checkpoints.iter().map(|point| view! {
                                        <li class="flex items-center gap-3 bg-white/60 rounded-xl px-4 py-3 font-medium text-slate-900">
                                            <span class="text-green-600">"✓"</span>
                                            {*point}
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
