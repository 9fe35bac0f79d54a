// crates/certilife-app/src/pages/showcase.rs
// All-in-one feature showcase: auto-rotating tabs with a mock device per feature

use certilife_core::content::{
    raffle_reel, DEMO_SITE_URL, FEATURES, QR_DASHBOARD, SECTION_SHOWCASE, SESSIONS,
};
use leptos::prelude::*;

use crate::components::{icon_glyph, Counter};
use crate::state::use_presentation;

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let page = use_presentation();
    let active_tab = page.active_tab;
    let period = format!("{}ms", page.config.rotation.feature_period_ms);

    view! {
        <section id=SECTION_SHOWCASE class="py-24 bg-slate-50 overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <span class="text-yellow-600 font-bold tracking-wider uppercase text-sm">"All-in-One Solution"</span>
                    <h2 class="text-3xl md:text-4xl font-bold text-slate-900 mt-2">
                        "학술대회 준비부터 종료까지,"<br/>"하나의 플랫폼으로"
                    </h2>
                </div>

                <div class="grid lg:grid-cols-12 gap-12 items-center">
                    <div class="lg:col-span-5 space-y-3">
                        {FEATURES.iter().enumerate().map(|(index, feature)| {
                            let period = period.clone();
                            let detail = feature.detail;
                            let active = move || active_tab.get() == index;
                            view! {
                                <button
                                    class=move || if active() {
                                        "relative w-full text-left p-5 rounded-2xl bg-white shadow-lg border-l-4 border-yellow-400 transition-all overflow-hidden"
                                    } else {
                                        "relative w-full text-left p-5 rounded-2xl hover:bg-white/60 border-l-4 border-transparent transition-all overflow-hidden"
                                    }
                                    on:click=move |_| page.select_feature(index)
                                >
                                    <div class="flex items-center gap-4">
                                        <span class="text-2xl">{icon_glyph(feature.icon)}</span>
                                        <div>
                                            <h3 class="font-bold text-slate-900">{feature.title}</h3>
                                            <Show when=active>
                                                <p class="text-sm text-gray-600 mt-1 fade-in-up">{detail}</p>
                                            </Show>
                                        </div>
                                    </div>
                                    <Show when=active>
                                        <div
                                            class="tab-progress absolute bottom-0 left-0 h-1 bg-yellow-400"
                                            style:animation-duration=period.clone()
                                        ></div>
                                    </Show>
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="lg:col-span-7 flex justify-center">
                        <div class="relative w-[300px] h-[600px] bg-slate-900 rounded-[3rem] p-3 shadow-2xl">
                            <div class="w-full h-full bg-white rounded-[2.4rem] overflow-hidden relative">
                                {move || match active_tab.get() {
                                    0 => view! { <WebsitePanel/> }.into_any(),
                                    1 => view! { <EbookPanel/> }.into_any(),
                                    2 => view! { <QrPanel/> }.into_any(),
                                    3 => view! { <AlimtalkPanel/> }.into_any(),
                                    4 => view! { <ChatbotPanel/> }.into_any(),
                                    _ => view! { <RafflePanel/> }.into_any(),
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ============================================================================
// Panels
// ============================================================================

#[component]
fn WebsitePanel() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col fade-in-up">
            <div class="bg-slate-900 text-white p-6 pt-12">
                <div class="text-xs text-yellow-400 font-bold mb-2">"DASS 2025"</div>
                <div class="text-xl font-bold leading-snug">"7 Masters,"<br/>"7 Insights"</div>
            </div>
            <div class="flex-1 p-5 space-y-3">
                <div class="h-24 rounded-xl bg-gradient-to-r from-yellow-100 to-yellow-50"></div>
                <div class="h-3 bg-slate-100 rounded w-3/4"></div>
                <div class="h-3 bg-slate-100 rounded w-1/2"></div>
                <a
                    href=DEMO_SITE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block w-full text-center bg-yellow-400 text-slate-900 font-bold py-3 rounded-xl mt-6"
                >
                    "데모 사이트 방문하기"
                </a>
            </div>
        </div>
    }
}

#[component]
fn EbookPanel() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col fade-in-up">
            <div class="p-5 pt-12 border-b border-gray-100">
                <div class="text-xs text-gray-500">"Program"</div>
                <div class="font-bold text-slate-900">"Day 1 · Main Hall"</div>
            </div>
            <div class="flex-1 p-4 space-y-3 overflow-hidden">
                {SESSIONS.iter().map(|session| view! {
                    <div class="p-3 rounded-xl bg-slate-50 border border-slate-100">
                        <div class="text-[10px] font-bold text-yellow-600">{session.time}</div>
                        <div class="text-sm font-bold text-slate-900">{session.title}</div>
                        <div class="text-xs text-gray-500">{session.speaker}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn QrPanel() -> impl IntoView {
    let duration = QR_DASHBOARD.counter_duration_secs;

    view! {
        <div class="h-full flex flex-col p-5 pt-12 fade-in-up">
            <div class="font-bold text-slate-900 mb-4">"실시간 등록 현황"</div>
            <div class="grid grid-cols-2 gap-3 mb-6">
                <div class="bg-slate-50 rounded-xl p-3">
                    <div class="text-[10px] text-gray-500">"총 등록"</div>
                    <div class="text-xl font-bold">
                        <Counter to=QR_DASHBOARD.registered duration=duration/>
                    </div>
                </div>
                <div class="bg-yellow-50 rounded-xl p-3">
                    <div class="text-[10px] text-gray-500">"결제 완료"</div>
                    <div class="text-xl font-bold">
                        <Counter to=QR_DASHBOARD.paid duration=duration/>
                    </div>
                </div>
            </div>
            <div class="flex-1 flex items-end gap-2 pb-4">
                {QR_DASHBOARD.bars.iter().map(|height| view! {
                    <div
                        class="bar-grow flex-1 bg-yellow-400 rounded-t"
                        style:height=format!("{}%", height)
                    ></div>
                }).collect_view()}
            </div>
            <div class="mx-auto w-24 h-24 border-4 border-slate-900 rounded-xl flex items-center justify-center text-4xl">
                "🔳"
            </div>
        </div>
    }
}

#[component]
fn AlimtalkPanel() -> impl IntoView {
    view! {
        <div class="h-full bg-[#b2c7d9] p-4 pt-12 space-y-4 fade-in-up">
            <div class="text-center text-[10px] text-slate-600">"2025년 4월 20일"</div>
            <div class="pop-in bg-white rounded-2xl rounded-tl-none p-4 shadow-sm max-w-[85%]">
                <div class="bg-yellow-400 -mx-4 -mt-4 mb-3 px-4 py-2 rounded-tr-2xl text-xs font-bold">"알림톡 도착"</div>
                <div class="text-sm font-bold mb-1">"[DASS 2025] 입장 안내"</div>
                <div class="text-xs text-gray-600 leading-relaxed">
                    "홍길동님, 사전 등록이 완료되었습니다. 현장에서 아래 QR코드를 제시해 주세요."
                </div>
                <div class="mt-3 bg-slate-100 text-center text-xs font-bold py-2 rounded">"QR코드 확인"</div>
            </div>
        </div>
    }
}

#[component]
fn ChatbotPanel() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col p-4 pt-12 gap-3 fade-in-up">
            <div class="self-end bg-yellow-400 text-slate-900 text-sm px-4 py-2 rounded-2xl rounded-br-none max-w-[80%]">
                "주차 지원이 되나요?"
            </div>
            <div class="self-start flex gap-2 max-w-[85%]">
                <span class="text-xl">"🤖"</span>
                <div class="bg-slate-100 text-sm px-4 py-2 rounded-2xl rounded-tl-none">
                    "네, 행사장 지하 주차장 4시간 무료 주차가 지원됩니다. 등록 데스크에서 차량 번호를 말씀해 주세요."
                </div>
            </div>
            <div class="self-end bg-yellow-400 text-slate-900 text-sm px-4 py-2 rounded-2xl rounded-br-none max-w-[80%]">
                "보수교육 점수는요?"
            </div>
            <div class="self-start flex gap-2 max-w-[85%]">
                <span class="text-xl">"🤖"</span>
                <div class="bg-slate-100 text-sm px-4 py-2 rounded-2xl rounded-tl-none">
                    "QR 입장·퇴장 기록으로 자동 집계되어 행사 후 일괄 등록됩니다."
                </div>
            </div>
        </div>
    }
}

#[component]
fn RafflePanel() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center bg-slate-900 text-white p-6 fade-in-up">
            <div class="text-yellow-400 font-bold mb-4">"🎁 경품 추첨"</div>
            <div class="relative w-full h-32 overflow-hidden rounded-xl bg-slate-800 border-2 border-yellow-400">
                <div class="reel-scroll">
                    {raffle_reel().into_iter().map(|entry| view! {
                        <div class="h-16 flex items-center justify-between px-6">
                            <span class="font-bold">{entry.name}</span>
                            <span class="font-mono text-yellow-400">{entry.ticket}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="mt-6 text-xs text-slate-400">"출석 인증된 참가자 중 무작위 추첨"</div>
        </div>
    }
}
