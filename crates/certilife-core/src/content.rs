// crates/certilife-core/src/content.rs
// Static page copy: features, case studies, demo data

use serde::Serialize;

// ═══════════════════════════════════════
// SECTIONS & LINKS
// ═══════════════════════════════════════

pub const SECTION_FEATURES_GRID: &str = "features-grid";
pub const SECTION_SHOWCASE: &str = "all-in-one-features";
pub const SECTION_CASE_STUDIES: &str = "section-1";
pub const SECTION_CTA: &str = "section-2";

pub const CONTACT_URL: &str = "https://certi.life/#contact";
pub const HOMEPAGE_URL: &str = "https://certi.life";
pub const DEMO_SITE_URL: &str = "http://dass.co.kr";

/// Header anchor that scrolls to a section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "주요 기능",
        section_id: SECTION_FEATURES_GRID,
    },
    NavLink {
        label: "성공 사례",
        section_id: SECTION_CASE_STUDIES,
    },
];

// ═══════════════════════════════════════
// FEATURES
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Monitor,
    Smartphone,
    QrCode,
    MessageCircle,
    Bot,
    Gift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub detail: &'static str,
}

pub const FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        title: "학술대회 전용 홈페이지",
        description: "행사 소개부터 사전등록까지, 전문적인 공식 웹사이트를 빠르게 구축합니다.",
        icon: Icon::Monitor,
        detail: "반응형 웹, 연자 소개, 오시는 길, 실시간 사전등록 결제 시스템 연동",
    },
    FeatureDescriptor {
        title: "모바일 초록집 (E-BOOK)",
        description: "무거운 인쇄물 대신 스마트폰 속 E-BOOK으로 비용과 편의성을 잡으세요.",
        icon: Icon::Smartphone,
        detail: "강연 일정, 연자 프로필, 초록(Abstract) 열람, 검색 기능 지원",
    },
    FeatureDescriptor {
        title: "스마트 QR 등록",
        description: "복잡한 현장 등록 절차 없이 QR 태깅 한 번으로 빠르고 정확하게 입장하세요.",
        icon: Icon::QrCode,
        detail: "개인별 QR 발송, 태블릿 태깅 입장, 실시간 출석 현황 자동 집계",
    },
    FeatureDescriptor {
        title: "카카오 알림톡",
        description: "행사 안내, 공지사항, 입장 QR까지 카카오톡으로 확실하게 전달합니다.",
        icon: Icon::MessageCircle,
        detail: "D-1 리마인드 알림톡, 미납/납부 안내 메시지 자동 발송",
    },
    FeatureDescriptor {
        title: "행사 전용 AI 챗봇",
        description: "반복되는 문의 전화는 그만. AI가 24시간 실시간으로 응대하여 운영 효율을 높입니다.",
        icon: Icon::Bot,
        detail: "일정, 장소, 주차, 등록 확인 등 단순 반복 문의 자동 응답 설정",
    },
    FeatureDescriptor {
        title: "스마트 경품 시스템",
        description: "종이접기, 쿠폰제출은 이제 그만, 행사장 참석자만을 대상으로 경품 추첨합니다.",
        icon: Icon::Gift,
        detail: "실시간 추첨, QR 입장객 대상 자동 응모, 현장 스크린 연동",
    },
];

// ═══════════════════════════════════════
// CASE STUDIES
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStat {
    pub label: &'static str,
    pub value: i64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStudyDescriptor {
    pub title: &'static str,
    /// Optional second line under the title; empty when absent.
    pub title_suffix: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub stats: [CaseStat; 4],
    pub badge: &'static str,
    pub award_title: &'static str,
    pub award_description: &'static str,
    pub checkpoints: [&'static str; 3],
    pub button_text: &'static str,
    pub button_link: &'static str,
}

impl CaseStudyDescriptor {
    /// Real links open in a new tab; the `#` placeholder stays in place.
    pub fn link_target(&self) -> &'static str {
        if self.button_link == "#" {
            "_self"
        } else {
            "_blank"
        }
    }
}

pub const CASE_STUDIES: [CaseStudyDescriptor; 2] = [
    CaseStudyDescriptor {
        title: "2025 DASS CONFERENCE",
        title_suffix: "",
        subtitle: "\"7 Masters, 7 Insights: Shaping the New Era of Dentistry\"",
        description: "DASS 2025 컨퍼런스는 서티라이프의 올인원 솔루션을 도입하여 사전 등록부터 현장 입장까지의 모든 과정을 디지털화했습니다. 모바일 초록집과 스마트 알림톡을 통해 참가자들의 만족도를 극대화했습니다.",
        stats: [
            CaseStat {
                label: "등록자",
                value: 213,
                unit: "명",
            },
            CaseStat {
                label: "출석자",
                value: 198,
                unit: "명",
            },
            CaseStat {
                label: "참가자 출석률",
                value: 93,
                unit: "%",
            },
            CaseStat {
                label: "비용 절감",
                value: 30,
                unit: "%",
            },
        ],
        badge: "DASS 2025",
        award_title: "디지털 운영 혁신!",
        award_description: "기존 아날로그 방식 대비 운영 효율이 획기적으로 개선되었습니다.",
        checkpoints: [
            "등록 데스크 대기열 최소화",
            "미납자 자동 필터링 및 안내",
            "스마트 경품 추첨",
        ],
        button_text: "관련 뉴스 보기",
        button_link: "https://dentalpress.kr/index/?idx=167906790&bmode=view",
    },
    CaseStudyDescriptor {
        title: "DDA 2025",
        title_suffix: "대전광역시치과의사회 학술대회",
        subtitle: "\"디지털 덴티스트리의 새로운 표준을 제시하다\"",
        description: "DDA 2025 학술대회는 대규모 인원이 참여하는 행사임에도 불구하고, 서티라이프의 스마트 QR 입장 시스템을 통해 혼잡 없이 쾌적한 입장을 실현했습니다. 자동화된 등록 시스템으로 운영 인력을 최소화하고 비용 효율을 높였습니다.",
        stats: [
            CaseStat {
                label: "등록자",
                value: 483,
                unit: "명",
            },
            CaseStat {
                label: "출석자",
                value: 452,
                unit: "명",
            },
            CaseStat {
                label: "참가자 출석률",
                value: 93,
                unit: "%",
            },
            CaseStat {
                label: "비용 절감",
                value: 35,
                unit: "%",
            },
        ],
        badge: "DDA 2025",
        award_title: "운영 효율 극대화",
        award_description: "대기 시간 없는 빠른 입장으로 참가자 만족도가 크게 상승했습니다.",
        checkpoints: [
            "대규모 인원 QR 동시 처리",
            "실시간 데이터 집계 시스템",
            "스마트 보수 교육 출석 처리",
        ],
        button_text: "관련 뉴스 보기",
        button_link: "https://www.dentalnews.or.kr/news/article.html?no=45724",
    },
];

// ═══════════════════════════════════════
// SHOWCASE DEMO DATA
// ═══════════════════════════════════════

/// One row of the mobile e-book programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSlot {
    pub time: &'static str,
    pub title: &'static str,
    pub speaker: &'static str,
}

pub const SESSIONS: [SessionSlot; 5] = [
    SessionSlot {
        time: "09:30 - 10:10",
        title: "임플란트 수술의 최신 지견",
        speaker: "김철수 원장",
    },
    SessionSlot {
        time: "10:20 - 11:00",
        title: "상악동 거상술의 A to Z",
        speaker: "이영희 교수",
    },
    SessionSlot {
        time: "11:10 - 11:50",
        title: "디지털 가이드 수술의 실제",
        speaker: "박민수 원장",
    },
    SessionSlot {
        time: "13:00 - 13:40",
        title: "발치 즉시 식립의 성공 전략",
        speaker: "최지훈 박사",
    },
    SessionSlot {
        time: "13:50 - 14:30",
        title: "임플란트 주위염 처치법",
        speaker: "정다은 원장",
    },
];

/// Live dashboard totals shown in the QR registration demo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QrDashboard {
    pub registered: i64,
    pub paid: i64,
    pub counter_duration_secs: f64,
    /// Bar heights of the attendance chart, in percent.
    pub bars: [u8; 7],
}

pub const QR_DASHBOARD: QrDashboard = QrDashboard {
    registered: 1231,
    paid: 1145,
    counter_duration_secs: 1.0,
    bars: [30, 45, 35, 60, 80, 70, 95],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaffleEntry {
    pub name: &'static str,
    pub ticket: &'static str,
}

pub const RAFFLE_ENTRIES: [RaffleEntry; 10] = [
    RaffleEntry {
        name: "김철수",
        ticket: "23451",
    },
    RaffleEntry {
        name: "이영희",
        ticket: "19823",
    },
    RaffleEntry {
        name: "박민수",
        ticket: "30122",
    },
    RaffleEntry {
        name: "최지훈",
        ticket: "25671",
    },
    RaffleEntry {
        name: "정다은",
        ticket: "18992",
    },
    RaffleEntry {
        name: "강현우",
        ticket: "11523",
    },
    RaffleEntry {
        name: "윤서연",
        ticket: "44921",
    },
    RaffleEntry {
        name: "임재현",
        ticket: "33812",
    },
    RaffleEntry {
        name: "송민지",
        ticket: "55019",
    },
    RaffleEntry {
        name: "오준호",
        ticket: "66210",
    },
];

/// How many back-to-back copies the raffle reel scrolls through, so the
/// loop point never shows an empty gap.
pub const RAFFLE_REEL_COPIES: usize = 3;

/// Raffle entries repeated for the looping reel, each copy in order.
pub fn raffle_reel() -> Vec<RaffleEntry> {
    RAFFLE_ENTRIES
        .iter()
        .copied()
        .cycle()
        .take(RAFFLE_ENTRIES.len() * RAFFLE_REEL_COPIES)
        .collect()
}

// ═══════════════════════════════════════
// HERO
// ═══════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroBadge {
    pub text: &'static str,
    /// Seconds before the badge fades in.
    pub delay_secs: f64,
}

pub const HERO_BADGES: [HeroBadge; 3] = [
    HeroBadge {
        text: "출석률 93% 달성",
        delay_secs: 1.0,
    },
    HeroBadge {
        text: "종이 없는 행사",
        delay_secs: 1.1,
    },
    HeroBadge {
        text: "실시간 데이터",
        delay_secs: 1.2,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: i64,
    pub unit: &'static str,
}

pub const HERO_STATS: [HeroStat; 2] = [
    HeroStat {
        label: "등록 인원",
        value: 1231,
        unit: "",
    },
    HeroStat {
        label: "등록율",
        value: 93,
        unit: "%",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reel_is_three_ordered_copies() {
        let reel = raffle_reel();
        assert_eq!(reel.len(), 3 * RAFFLE_ENTRIES.len());
        for (copy, chunk) in reel.chunks(RAFFLE_ENTRIES.len()).enumerate() {
            assert_eq!(chunk, &RAFFLE_ENTRIES[..], "copy {} out of order", copy);
        }
    }

    #[test]
    fn test_counts_match_rotation_moduli() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(CASE_STUDIES.len(), 2);
    }

    #[test]
    fn test_case_links_open_in_new_tab() {
        for case in &CASE_STUDIES {
            assert_eq!(case.link_target(), "_blank");
        }
        let placeholder = CaseStudyDescriptor {
            button_link: "#",
            ..CASE_STUDIES[0]
        };
        assert_eq!(placeholder.link_target(), "_self");
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.section_id).collect();
        assert_eq!(ids, vec![SECTION_FEATURES_GRID, SECTION_CASE_STUDIES]);
    }

    #[test]
    fn test_feature_serialize() {
        let json = serde_json::to_string(&FEATURES[2]).unwrap();
        assert!(json.contains("\"icon\":\"qr_code\""));
        assert!(json.contains("스마트 QR 등록"));
    }
}
