// crates/certilife-app/src/pages/landing.rs
// Landing page: hero, feature grid, call to action

use certilife_core::content::{
    CONTACT_URL, FEATURES, HERO_BADGES, HERO_STATS, SECTION_CTA, SECTION_FEATURES_GRID,
};
use leptos::prelude::*;

use crate::components::{icon_glyph, Counter, Footer, Nav};
use crate::pages::{CaseStudies, FeatureShowcase};
use crate::state::use_presentation;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white font-sans text-slate-900 overflow-x-hidden selection:bg-yellow-400 selection:text-slate-900">
            <Nav/>
            <Hero/>
            <FeatureGrid/>
            <FeatureShowcase/>
            <CaseStudies/>
            <CallToAction/>
            <Footer/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-20 lg:pt-48 lg:pb-32 overflow-hidden bg-gradient-to-br from-slate-50 to-yellow-50/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 fade-in-up">
                        <div class="inline-flex items-center gap-2 bg-white text-slate-800 px-4 py-2 rounded-full text-sm font-bold tracking-wide border border-yellow-200 shadow-sm">
                            <span class="relative flex h-3 w-3">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-yellow-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-3 w-3 bg-yellow-500"></span>
                            </span>
                            "2025 학술대회 디지털 전환 솔루션"
                        </div>

                        <h1 class="text-5xl lg:text-6xl font-extrabold leading-tight text-slate-900">
                            "성공적인 학술대회,"<br/>
                            <span class="relative inline-block text-slate-900">
                                <span class="relative z-10">"디지털 파트너"</span>
                                <span class="hero-underline absolute bottom-2 left-0 h-6 bg-yellow-400 opacity-80"></span>
                            </span>
                        </h1>

                        <p class="text-xl text-gray-600 leading-relaxed max-w-lg">
                            "홈페이지 구축부터 사전 등록, 카카오 알림톡, 현장 QR 입장까지. "
                            "복잡한 행사 운영, 서티라이프가 스마트하게 해결해 드립니다."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 pt-4">
                            <a
                                href=CONTACT_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="bg-yellow-400 text-slate-900 px-8 py-4 rounded-xl font-bold text-lg shadow-xl shadow-yellow-400/20 flex items-center justify-center gap-2 group cursor-pointer hover:scale-105 transition-transform"
                            >
                                "도입 문의하기"
                                <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                            </a>
                        </div>

                        <div class="flex items-center gap-6 pt-4 text-sm font-medium text-gray-500">
                            {HERO_BADGES.iter().map(|badge| view! {
                                <div
                                    class="flex items-center gap-2 fade-in-left"
                                    style:animation-delay=format!("{}s", badge.delay_secs)
                                >
                                    <span class="text-yellow-500">"✓"</span>
                                    <span>{badge.text}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <HeroDashboard/>
                </div>
            </div>
        </section>
    }
}

/// Floating "live" dashboard card on the right of the hero.
#[component]
fn HeroDashboard() -> impl IntoView {
    view! {
        <div class="relative hidden lg:block h-[600px] w-full">
            <div class="blob absolute top-0 right-0 w-[500px] h-[500px] bg-yellow-200/50 rounded-full blur-3xl"></div>
            <div class="absolute top-10 right-10 w-full max-w-md fade-in-right">
                <div class="float bg-white rounded-3xl shadow-2xl p-6 border border-gray-100 relative z-20">
                    <div class="flex justify-between items-center mb-6">
                        <div class="flex gap-1.5">
                            <div class="w-3 h-3 rounded-full bg-slate-200"></div>
                            <div class="w-3 h-3 rounded-full bg-slate-200"></div>
                            <div class="w-3 h-3 rounded-full bg-slate-200"></div>
                        </div>
                        <div class="px-2 py-1 bg-green-100 text-green-700 text-xs font-bold rounded">"Live"</div>
                    </div>

                    <div class="grid grid-cols-2 gap-4 mb-6">
                        {HERO_STATS.iter().map(|stat| view! {
                            <div class="bg-slate-50 rounded-2xl p-4">
                                <div class="text-xs text-gray-500 mb-1">{stat.label}</div>
                                <div class="text-2xl font-bold text-slate-900">
                                    <Counter to=stat.value/>{stat.unit}
                                </div>
                            </div>
                        }).collect_view()}
                    </div>

                    <div class="pop-in bg-yellow-50 border border-yellow-200 rounded-2xl p-4 flex items-start gap-3 relative">
                        <div class="w-10 h-10 bg-yellow-400 rounded-full flex items-center justify-center">"💬"</div>
                        <div>
                            <div class="font-bold text-sm">"[DASS 2025] 입장 안내"</div>
                            <div class="text-xs text-gray-600">
                                "홍길동님, QR코드가 도착했습니다."<br/>"지금 확인하기"
                            </div>
                        </div>
                        <div class="pulse absolute -top-2 -right-2 w-6 h-6 bg-red-500 text-white text-xs font-bold rounded-full flex items-center justify-center">"1"</div>
                    </div>
                </div>

                <div class="float-slow absolute -bottom-10 -left-10 bg-white rounded-2xl shadow-xl p-4 w-48 z-10">
                    <div class="h-2 bg-slate-100 rounded mb-2"></div>
                    <div class="h-2 bg-slate-100 rounded w-2/3 mb-2"></div>
                    <div class="h-2 bg-yellow-200 rounded w-1/2"></div>
                </div>
            </div>
        </div>
    }
}

/// Six feature tiles; clicking one opens its tab in the showcase below.
#[component]
fn FeatureGrid() -> impl IntoView {
    let page = use_presentation();

    view! {
        <section id=SECTION_FEATURES_GRID class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900">"왜 서티라이프 PCO 솔루션인가요?"</h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().enumerate().map(|(index, feature)| view! {
                        <div
                            class="fade-in-up p-8 rounded-3xl bg-slate-50 border border-slate-100 hover:-translate-y-2 hover:shadow-xl transition-all cursor-pointer group"
                            style:animation-delay=format!("{}s", index as f64 * 0.1)
                            on:click=move |_| page.select_feature(index)
                        >
                            <div class="w-12 h-12 rounded-2xl bg-yellow-100 text-2xl flex items-center justify-center mb-6 group-hover:bg-yellow-400 transition-colors">
                                {icon_glyph(feature.icon)}
                            </div>
                            <h3 class="text-xl font-bold text-slate-900 mb-3">{feature.title}</h3>
                            <p class="text-gray-600 leading-relaxed">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section id=SECTION_CTA class="relative py-24 bg-yellow-400 overflow-hidden">
            <div
                class="absolute inset-0 opacity-10"
                style="background-image: radial-gradient(#000 1px, transparent 1px); background-size: 20px 20px"
            ></div>
            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <div class="pop-in">
                    <h2 class="text-4xl md:text-5xl font-extrabold text-slate-900 mb-6">"준비되셨나요?"</h2>
                    <p class="text-xl text-slate-800 mb-10">
                        "서티라이프와 함께라면,"<br/>"당신의 학술대회는 완벽해질 수 있습니다."
                    </p>
                    <div class="flex justify-center">
                        <a
                            href=CONTACT_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-slate-900 text-white px-10 py-5 rounded-2xl font-bold text-lg shadow-2xl hover:scale-105 transition-transform"
                        >
                            "무료 상담 신청하기"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
