//! Demo content posted by the seeder.

/// A synthetic member account and its profile attributes
#[derive(Debug, Clone, Copy)]
pub struct SeedProfile {
    pub email: &'static str,
    pub name: &'static str,
    pub gender: &'static str,
    pub birth_year: u16,
    pub regions: &'static [&'static str],
    pub handicap: &'static str,
    pub styles: &'static [&'static str],
    pub times: &'static [&'static str],
    pub intro: &'static str,
    pub photo_url: &'static str,
    pub is_verified: bool,
}

/// Attributes applied to the developer's own profile
pub const DEV_PROFILE: SeedProfile = SeedProfile {
    email: "",
    name: "",
    gender: "남성",
    birth_year: 1990,
    regions: &["서울", "경기"],
    handicap: "90대",
    styles: &["즐거운 라운딩", "네트워킹"],
    times: &["주말 오전", "주말 오후"],
    intro: "골프피플 개발자입니다. 같이 라운딩해요!",
    photo_url: "",
    is_verified: true,
};

/// A group round posting; `days_ahead` is relative to the seeding run
#[derive(Debug, Clone, Copy)]
pub struct JoinTemplate {
    pub title: &'static str,
    pub days_ahead: i64,
    pub time: &'static str,
    pub location: &'static str,
    pub region: &'static str,
    pub course_name: &'static str,
    pub spots_total: u8,
    pub spots_filled: u8,
    pub handicap_range: &'static str,
    pub styles: &'static [&'static str],
    pub description: &'static str,
    pub meeting_type: &'static str,
}

pub const JOINS: &[JoinTemplate] = &[
    JoinTemplate {
        title: "주말 서울 근교 라운딩 같이 하실 분!",
        days_ahead: 3,
        time: "07:00",
        location: "서울 근교",
        region: "경기",
        course_name: "남서울CC",
        spots_total: 4,
        spots_filled: 1,
        handicap_range: "80~100",
        styles: &["즐거운 라운딩"],
        description: "편하게 라운딩 하실 분 구합니다. 초보도 환영!",
        meeting_type: "현장 집결",
    },
    JoinTemplate {
        title: "경기도 평일 조조 1자리 급구",
        days_ahead: 1,
        time: "06:30",
        location: "경기도 용인",
        region: "경기",
        course_name: "레이크사이드CC",
        spots_total: 4,
        spots_filled: 3,
        handicap_range: "70~90",
        styles: &["진지한 플레이"],
        description: "1자리 급구합니다! 핸디 90 이하분 부탁드려요.",
        meeting_type: "현장 집결",
    },
    JoinTemplate {
        title: "제주도 2박3일 골프 여행 함께할 분",
        days_ahead: 14,
        time: "08:00",
        location: "제주도",
        region: "제주",
        course_name: "핀크스GC",
        spots_total: 4,
        spots_filled: 2,
        handicap_range: "제한없음",
        styles: &["즐거운 라운딩", "자연 힐링"],
        description: "2월 제주도 골프여행 계획 중입니다. 2라운드 예정이에요. 같이 가실 분!",
        meeting_type: "함께 이동",
    },
    JoinTemplate {
        title: "부산 해운대 근처 주말 라운딩",
        days_ahead: 5,
        time: "07:30",
        location: "부산 기장",
        region: "부산",
        course_name: "기장CC",
        spots_total: 4,
        spots_filled: 2,
        handicap_range: "80~100",
        styles: &["네트워킹", "즐거운 라운딩"],
        description: "부산 기장에서 라운딩합니다. 라운딩 후 횟집도 갈 예정!",
        meeting_type: "현장 집결",
    },
    JoinTemplate {
        title: "여성 골퍼 모임 - 서울 라운딩",
        days_ahead: 7,
        time: "08:00",
        location: "서울",
        region: "서울",
        course_name: "한양CC",
        spots_total: 4,
        spots_filled: 1,
        handicap_range: "제한없음",
        styles: &["즐거운 라운딩", "초보 환영"],
        description: "여성 골퍼분들 같이 편하게 라운딩해요! 초보도 대환영입니다.",
        meeting_type: "현장 집결",
    },
];

pub const FRIEND_MESSAGES: &[&str] = &[
    "안녕하세요! 같이 라운딩해요 ⛳",
    "반갑습니다~ 골프 좋아하시나요?",
    "프로필 보고 연락드려요!",
    "같은 지역이시네요! 함께 치면 좋겠어요",
    "골프피플에서 만나뵙게 되어 반갑습니다 😊",
];

pub const PENDING_FRIEND_MESSAGES: &[&str] = &[
    "안녕하세요! 주말 라운딩 같이 하실래요?",
    "프로필이 인상적이에요! 친구 맺어요",
    "같은 타수대시네요~ 함께 라운딩해요!",
];

pub const APPLICATION_MESSAGES: &[&str] = &[
    "안녕하세요! 참가 신청합니다 😊",
    "자리 있으면 같이 치고 싶어요!",
    "라운딩 함께하고 싶습니다~",
    "좋은 기회네요! 신청합니다",
];

pub const PENDING_APPLICATION_MESSAGE: &str = "참가하고 싶어요! 아직 자리 있나요?";

pub const SCORE_NOTES: &[&str] = &[
    "드라이버 컨디션 좋았음",
    "퍼팅이 아쉬웠다",
    "아이언이 잘 맞았음!",
    "날씨가 좋아서 기분 좋은 라운딩",
    "다음엔 80대 노려야지",
];

pub const DEV_SCORE_WEATHER: &[&str] = &["sunny", "cloudy", "windy"];
pub const SCORE_WEATHER: &[&str] = &["sunny", "cloudy", "rainy", "windy"];

pub const REVIEW_RATINGS: &[u8] = &[4, 4, 5, 5, 5];

pub const SEED_PROFILES: &[SeedProfile] = &[
    SeedProfile {
        email: "seed_jihoon@golfpeople.test",
        name: "김지훈",
        gender: "남성",
        birth_year: 1985,
        regions: &["서울", "경기"],
        handicap: "80대",
        styles: &["즐거운 라운딩", "네트워킹"],
        times: &["주말 오전", "주말 오후"],
        intro: "서울 근교에서 주말 라운딩 즐깁니다. 편하게 연락주세요!",
        photo_url: "https://randomuser.me/api/portraits/men/32.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_minji@golfpeople.test",
        name: "박민지",
        gender: "여성",
        birth_year: 1992,
        regions: &["서울", "인천"],
        handicap: "90대",
        styles: &["즐거운 라운딩", "초보 환영"],
        times: &["주말 오전"],
        intro: "골프 시작한 지 2년차! 같이 즐겁게 라운딩해요 :)",
        photo_url: "https://randomuser.me/api/portraits/women/44.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_sungjae@golfpeople.test",
        name: "이성재",
        gender: "남성",
        birth_year: 1978,
        regions: &["경기", "충남"],
        handicap: "70대",
        styles: &["진지한 플레이", "싱글 목표"],
        times: &["평일 오전", "주말 오전"],
        intro: "10년차 골퍼입니다. 싱글 달성이 목표!",
        photo_url: "https://randomuser.me/api/portraits/men/45.jpg",
        is_verified: true,
    },
    SeedProfile {
        email: "seed_yuna@golfpeople.test",
        name: "최유나",
        gender: "여성",
        birth_year: 1990,
        regions: &["서울", "경기"],
        handicap: "100대",
        styles: &["즐거운 라운딩", "초보 환영"],
        times: &["주말 오후"],
        intro: "작년에 골프 입문했어요! 초보지만 열심히 하고 있습니다.",
        photo_url: "https://randomuser.me/api/portraits/women/65.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_donghyun@golfpeople.test",
        name: "정동현",
        gender: "남성",
        birth_year: 1982,
        regions: &["부산", "경남"],
        handicap: "80대",
        styles: &["네트워킹", "비즈니스"],
        times: &["평일 오후", "주말 오전"],
        intro: "부산에서 활동중입니다. 비즈니스 라운딩도 환영합니다.",
        photo_url: "https://randomuser.me/api/portraits/men/22.jpg",
        is_verified: true,
    },
    SeedProfile {
        email: "seed_soojin@golfpeople.test",
        name: "한수진",
        gender: "여성",
        birth_year: 1988,
        regions: &["경기", "강원"],
        handicap: "90대 초반",
        styles: &["즐거운 라운딩", "자연 힐링"],
        times: &["주말 오전", "주말 오후"],
        intro: "강원도 골프장 자주 갑니다. 드라이브 겸 라운딩 좋아해요.",
        photo_url: "https://randomuser.me/api/portraits/women/33.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_minsoo@golfpeople.test",
        name: "오민수",
        gender: "남성",
        birth_year: 1995,
        regions: &["서울", "경기"],
        handicap: "100대",
        styles: &["초보 환영", "즐거운 라운딩"],
        times: &["주말 오후"],
        intro: "올해 입문한 완전 초보입니다. 같이 배우실 분!",
        photo_url: "https://randomuser.me/api/portraits/men/11.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_hyejin@golfpeople.test",
        name: "강혜진",
        gender: "여성",
        birth_year: 1986,
        regions: &["대구", "경북"],
        handicap: "80대",
        styles: &["진지한 플레이", "대회 준비"],
        times: &["평일 오전", "주말 오전"],
        intro: "대구 거주. 아마추어 대회 나가고 있어요. 함께 연습할 분 찾습니다.",
        photo_url: "https://randomuser.me/api/portraits/women/28.jpg",
        is_verified: true,
    },
    SeedProfile {
        email: "seed_youngho@golfpeople.test",
        name: "신영호",
        gender: "남성",
        birth_year: 1975,
        regions: &["제주"],
        handicap: "70대",
        styles: &["진지한 플레이", "네트워킹"],
        times: &["평일 오전", "평일 오후"],
        intro: "제주도 골프 전문! 제주 오시면 연락주세요.",
        photo_url: "https://randomuser.me/api/portraits/men/55.jpg",
        is_verified: true,
    },
    SeedProfile {
        email: "seed_jiyoung@golfpeople.test",
        name: "임지영",
        gender: "여성",
        birth_year: 1993,
        regions: &["서울", "경기"],
        handicap: "90대",
        styles: &["즐거운 라운딩", "네트워킹"],
        times: &["주말 오전"],
        intro: "IT 업계에서 일하고 있어요. 주말 라운딩 함께해요!",
        photo_url: "https://randomuser.me/api/portraits/women/17.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_taehyung@golfpeople.test",
        name: "배태형",
        gender: "남성",
        birth_year: 1980,
        regions: &["광주", "전남"],
        handicap: "80대 초반",
        styles: &["즐거운 라운딩", "비즈니스"],
        times: &["평일 오후", "주말 오전"],
        intro: "광주에서 사업하고 있습니다. 골프 좋아하시는 분 환영!",
        photo_url: "https://randomuser.me/api/portraits/men/36.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_eunji@golfpeople.test",
        name: "서은지",
        gender: "여성",
        birth_year: 1991,
        regions: &["서울"],
        handicap: "100대",
        styles: &["초보 환영", "즐거운 라운딩"],
        times: &["주말 오후"],
        intro: "골프 3개월차 왕초보! 편하게 라운딩하실 분 구합니다 ㅎㅎ",
        photo_url: "https://randomuser.me/api/portraits/women/52.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_jaehyuk@golfpeople.test",
        name: "조재혁",
        gender: "남성",
        birth_year: 1987,
        regions: &["대전", "충북"],
        handicap: "90대",
        styles: &["즐거운 라운딩", "자연 힐링"],
        times: &["주말 오전", "주말 오후"],
        intro: "대전 근처 골프장 위주로 다닙니다. 같이 치실 분!",
        photo_url: "https://randomuser.me/api/portraits/men/41.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_nayoung@golfpeople.test",
        name: "윤나영",
        gender: "여성",
        birth_year: 1989,
        regions: &["인천", "경기"],
        handicap: "90대 후반",
        styles: &["즐거운 라운딩", "초보 환영"],
        times: &["평일 오후", "주말 오전"],
        intro: "인천 영종도 근처 살아요. 가까운 분들 같이 치러가요!",
        photo_url: "https://randomuser.me/api/portraits/women/22.jpg",
        is_verified: false,
    },
    SeedProfile {
        email: "seed_sangwoo@golfpeople.test",
        name: "황상우",
        gender: "남성",
        birth_year: 1983,
        regions: &["경기", "서울"],
        handicap: "80대",
        styles: &["네트워킹", "진지한 플레이"],
        times: &["평일 오전", "주말 오전"],
        intro: "경기도 용인 거주. 꾸준히 치고 있습니다. 함께 라운딩해요!",
        photo_url: "https://randomuser.me/api/portraits/men/19.jpg",
        is_verified: true,
    },
];

pub const DIRECT_CONVERSATIONS: &[&[&str]] = &[
    &[
        "안녕하세요! 골프피플에서 인사드려요 😊",
        "안녕하세요~ 반갑습니다!",
        "프로필 보니까 경기도 쪽이시네요?",
        "네! 용인 근처에서 주로 쳐요",
        "오 저도 분당이에요! 가까우시네",
        "그러게요ㅎㅎ 주말에 한번 같이 치실래요?",
        "좋아요! 이번 주말 토요일 어떠세요?",
        "토요일 오전이면 좋을 것 같아요 👍",
    ],
    &[
        "반갑습니다~ 같은 90대시네요!",
        "네 ㅎㅎ 요즘 90 깨려고 노력중이에요",
        "저도요! 드라이버가 문제에요 😅",
        "아 드라이버.. 저도 OB가 너무 많아서ㅋㅋ",
        "연습장에서 열심히 치는데 필드가면 또 달라요ㅎㅎ",
        "그쵸 ㅋㅋ 필드 갈 때마다 긴장되더라고요",
        "그래도 재밌잖아요! 언제 같이 한번 치러가요",
        "좋죠! 다음주 평일에 시간 되세요?",
        "화요일이면 가능합니다!",
        "화요일로 해요 👍 코스는 어디로 할까요?",
    ],
    &[
        "안녕하세요! 제주도 골프 좋아하시나요?",
        "네! 제주 자주 가요 ⛳",
        "다음달에 제주 여행 가는데 추천 코스 있나요?",
        "핀크스 강추합니다! 제가 안내해드릴까요?",
        "정말요? 그러면 너무 감사하죠!!",
        "ㅎㅎ 연락주세요~ 제주 오시면 같이 라운딩해요",
    ],
    &[
        "골프 시작한지 얼마 안됐는데 많이 가르쳐주세요!",
        "환영합니다~ 저도 초보일 때 많이 힘들었어요ㅎㅎ",
        "스코어가 아직 100 넘어요 😭",
        "다들 처음엔 그래요! 꾸준히 하면 금방 늘어요",
        "감사해요 ㅠㅠ 주말에 연습장이라도 같이 가실래요?",
        "좋아요! 일요일 오후에 어떠세요?",
    ],
];

/// Group chat lines with the index of the participant who sends them
pub const GROUP_CONVERSATIONS: &[&[(&str, usize)]] = &[
    &[
        ("이번 라운딩 날씨가 좋았으면 좋겠네요!", 2),
        ("맞아요 ㅎㅎ 비만 안 오면 좋겠어요", 1),
        ("일기예보 봤는데 맑대요 ☀️", 0),
        ("오 다행이다! 기대됩니다", 2),
        ("카트 예약은 했나요?", 1),
        ("네! 2대 예약해놨어요 👍", 0),
        ("혹시 점심은 코스 내 식당에서 먹을까요?", 2),
        ("그렇죠! 해장국이 맛있다고 들었어요", 1),
        ("좋아요 그럼 당일 아침 7시에 만나요!", 0),
    ],
    &[
        ("다들 라운딩 준비 잘 되셨나요?", 0),
        ("넵! 오늘 컨디션 좋습니다 💪", 1),
        ("저도 어제 연습장 갔다왔어요ㅎㅎ", 2),
        ("오늘 날씨 완벽하네요!", 0),
        ("바람도 별로 안 불고 좋다~", 1),
    ],
];

pub const DEV_CONVERSATIONS: &[&[&str]] = &[
    &[
        "안녕하세요! 같이 라운딩 하고 싶어요 😊",
        "안녕하세요~ 반갑습니다!",
        "이번 주말에 시간 되시나요?",
        "토요일 오전이면 가능해요!",
        "좋아요~ 남서울CC 어떠세요?",
        "좋습니다! 토요일 7시에 만나요 ⛳",
        "넵! 그때 봬요~ 기대돼요!",
        "저도 기대됩니다 😄",
    ],
    &[
        "프로필 보고 연락드려요!",
        "네 반갑습니다~",
        "혹시 다음주에 라운딩 계획 있으세요?",
        "아직 없어요! 같이 가실래요?",
        "좋죠! 어디로 갈까요?",
        "이천쪽은 어떠세요? 코스가 좋대요",
        "오 좋아요! 이천으로 해요 👍",
    ],
];

pub const REVIEW_TAGS: &[&[&str]] = &[
    &[
        "매너 좋음",
        "시간 약속 준수",
        "실력 좋음",
    ],
    &[
        "친절함",
        "재밌음",
        "다시 만나고 싶음",
    ],
    &[
        "매너 좋음",
        "초보에게 친절",
        "분위기 메이커",
    ],
    &[
        "실력 좋음",
        "시간 약속 준수",
        "매너 좋음",
    ],
    &[
        "재밌음",
        "다시 만나고 싶음",
        "네트워킹",
    ],
];

pub const REVIEW_COMMENTS: &[&str] = &[
    "함께 라운딩해서 정말 즐거웠습니다! 다음에 또 같이 치면 좋겠어요 ⛳",
    "매너가 좋으시고 분위기도 밝으셔서 라운딩이 즐거웠어요",
    "실력도 좋으시고 초보인 저한테도 친절하게 대해주셨어요 감사합니다!",
    "시간 약속도 잘 지키시고 매너도 좋으셔서 추천드립니다 👍",
    "재밌는 분이에요! 같이 치면 시간 가는 줄 몰라요 ㅎㅎ",
    "비즈니스 라운딩으로도 좋을 것 같은 분이에요. 매너 최고!",
    "드라이버가 진짜 멀리 가시더라고요 ㅎㅎ 부러웠어요",
    "페어웨이 관리가 좋은 분이에요. 플레이가 안정적이십니다",
];

/// Course name and region label used for score records
pub const SCORE_COURSES: &[(&str, &str)] = &[
    ("남서울CC", "경기"),
    ("레이크사이드CC", "경기"),
    ("한양CC", "서울"),
    ("기장CC", "부산"),
    ("핀크스GC", "제주"),
    ("블루원CC", "경기"),
    ("이천 사우스CC", "경기"),
    ("곤지암CC", "경기"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_emails_are_unique() {
        let emails: HashSet<_> = SEED_PROFILES.iter().map(|p| p.email).collect();
        assert_eq!(emails.len(), SEED_PROFILES.len());
        assert_eq!(SEED_PROFILES.len(), 15);
    }

    #[test]
    fn test_join_templates_leave_open_spots() {
        assert!(JOINS.iter().all(|j| j.spots_filled < j.spots_total));
    }

    #[test]
    fn test_pools_are_not_empty() {
        assert!(DIRECT_CONVERSATIONS.iter().all(|c| !c.is_empty()));
        assert!(GROUP_CONVERSATIONS.iter().all(|c| !c.is_empty()));
        assert!(DEV_CONVERSATIONS.iter().all(|c| !c.is_empty()));
        assert!(!REVIEW_TAGS.is_empty() && !REVIEW_COMMENTS.is_empty());
        assert!(!SCORE_COURSES.is_empty());
    }
}
