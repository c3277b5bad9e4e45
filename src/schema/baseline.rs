use serde_json::Map;

use super::types::{Course, CourseType, Difficulty, Region};

/// Compiled entry of the baseline catalog; ids come from list position
#[derive(Debug, Clone, Copy)]
pub struct BaselineCourse {
    pub name: &'static str,
    pub region: Region,
    pub city: &'static str,
    pub address: &'static str,
    pub holes: u32,
    pub course_type: CourseType,
    pub difficulty: Difficulty,
}

impl BaselineCourse {
    pub const fn new(
        name: &'static str,
        region: Region,
        city: &'static str,
        address: &'static str,
        holes: u32,
        course_type: CourseType,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name,
            region,
            city,
            address,
            holes,
            course_type,
            difficulty,
        }
    }

    pub fn to_course(&self, id: u32) -> Course {
        Course {
            id,
            name: self.name.to_string(),
            region: self.region,
            city: self.city.to_string(),
            address: self.address.to_string(),
            holes: self.holes,
            course_type: self.course_type,
            difficulty: self.difficulty,
            latitude: None,
            longitude: None,
            extra: Map::new(),
        }
    }
}

/// Build the baseline catalog with ids `1..=n`
pub fn baseline_catalog() -> Vec<Course> {
    BASELINE_COURSES
        .iter()
        .zip(1u32..)
        .map(|(entry, id)| entry.to_course(id))
        .collect()
}

/// Major domestic courses compiled by hand from directory listings
pub const BASELINE_COURSES: &[BaselineCourse] = &[
    BaselineCourse::new("레이크사이드CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구 양지면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("남서울CC", Region::Gyeonggi, "성남", "경기도 성남시 수정구 시흥동", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("안양CC", Region::Gyeonggi, "안양", "경기도 안양시 만안구 안양동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("한양CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구 양지면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("블루헤런CC", Region::Gyeonggi, "여주", "경기도 여주시 강천면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("이천마이다스CC", Region::Gyeonggi, "이천", "경기도 이천시 마장면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("가평베네스트CC", Region::Gyeonggi, "가평", "경기도 가평군 설악면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("포천아도니스CC", Region::Gyeonggi, "포천", "경기도 포천시 이동면", 27, CourseType::Public, Difficulty::Low),
    BaselineCourse::new("남촌CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구 남사면", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("오크밸리CC", Region::Gyeonggi, "원주", "강원도 원주시 지정면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("골드레이크CC", Region::Gyeonggi, "이천", "경기도 이천시 장호원읍", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("88CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구 원삼면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("신원CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구 양지면", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("스프링힐스CC", Region::Gyeonggi, "이천", "경기도 이천시 설성면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("사이프러스CC", Region::Gyeonggi, "파주", "경기도 파주시 광탄면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("베어즈베스트 청라CC", Region::Incheon, "청라", "인천광역시 서구 청라동", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("스카이72 하늘코스", Region::Incheon, "영종도", "인천광역시 중구 운서동", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("스카이72 바다코스", Region::Incheon, "영종도", "인천광역시 중구 운서동", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("스카이72 오션코스", Region::Incheon, "영종도", "인천광역시 중구 운서동", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("인천국제CC", Region::Incheon, "강화", "인천광역시 강화군 양도면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("파인밸리CC", Region::Gangwon, "원주", "강원도 원주시 문막읍", 27, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("용평리조트CC", Region::Gangwon, "평창", "강원도 평창군 대관령면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("알펜시아CC", Region::Gangwon, "평창", "강원도 평창군 대관령면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("휘닉스파크CC", Region::Gangwon, "평창", "강원도 평창군 봉평면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("오크벨리CC", Region::Gangwon, "원주", "강원도 원주시 지정면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("천안상록CC", Region::Chungnam, "천안", "충청남도 천안시 동남구", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("세종CC", Region::Sejong, "세종", "세종특별자치시 전의면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("클럽모우CC", Region::Chungbuk, "음성", "충청북도 음성군 금왕읍", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("대유몽베르CC", Region::Chungbuk, "충주", "충청북도 충주시 앙성면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("아난티클럽 청주", Region::Chungbuk, "청주", "충청북도 청주시 흥덕구", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("무등산CC", Region::Gwangju, "광주", "광주광역시 동구 용연동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("광양CC", Region::Jeonnam, "광양", "전라남도 광양시 옥곡면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("무주덕유산CC", Region::Jeonbuk, "무주", "전라북도 무주군 설천면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("군산CC", Region::Jeonbuk, "군산", "전라북도 군산시 옥산면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("해슬리나인브릿지", Region::Jeonnam, "여수", "전라남도 여수시 문수동", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("힐데스하임CC", Region::Gyeongnam, "창원", "경상남도 창원시 의창구", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("가야CC", Region::Gyeongnam, "김해", "경상남도 김해시 진례면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("진주CC", Region::Gyeongnam, "진주", "경상남도 진주시 집현면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("남해CC", Region::Gyeongnam, "남해", "경상남도 남해군 창선면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("경주CC", Region::Gyeongbuk, "경주", "경상북도 경주시 현곡면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("대구CC", Region::Daegu, "대구", "대구광역시 달성군 화원읍", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("아시아드CC", Region::Busan, "부산", "부산광역시 기장군 정관면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("동래베네스트CC", Region::Busan, "부산", "부산광역시 금정구 남산동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("울산CC", Region::Ulsan, "울산", "울산광역시 울주군 두서면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("삼정더파크CC", Region::Busan, "부산", "부산광역시 기장군 기장읍", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("제주CC", Region::Jeju, "서귀포", "제주도 서귀포시 상예동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("나인브릿지", Region::Jeju, "서귀포", "제주도 서귀포시 안덕면", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("핀크스CC", Region::Jeju, "서귀포", "제주도 서귀포시 안덕면", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("엘리시안제주CC", Region::Jeju, "제주", "제주도 제주시 조천읍", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("롯데스카이힐CC", Region::Jeju, "서귀포", "제주도 서귀포시 중문동", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("서서울CC", Region::Gyeonggi, "파주", "경기도 파주시 탄현면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("태광CC", Region::Gyeonggi, "용인", "경기도 용인시 양지면", 27, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("에이원CC", Region::Gyeonggi, "여주", "경기도 여주시 점동면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("써닝포인트CC", Region::Gyeonggi, "포천", "경기도 포천시 내촌면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("자유CC", Region::Gyeonggi, "광주", "경기도 광주시 도척면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("양주CC", Region::Gyeonggi, "양주", "경기도 양주시 은현면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("파주CC", Region::Gyeonggi, "파주", "경기도 파주시 광탄면", 27, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("일동레이크CC", Region::Gyeonggi, "포천", "경기도 포천시 일동면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("곤지암CC", Region::Gyeonggi, "광주", "경기도 광주시 곤지암읍", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("수원CC", Region::Gyeonggi, "수원", "경기도 수원시 권선구", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("잭니클라우스GC코리아", Region::Incheon, "영종도", "인천광역시 중구 운서동", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("송추CC", Region::Gyeonggi, "양주", "경기도 양주시 장흥면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("현대성우CC", Region::Gyeonggi, "여주", "경기도 여주시 대신면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("써미트힐스CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구", 27, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("발안스파CC", Region::Gyeonggi, "화성", "경기도 화성시 향남읍", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("신안CC", Region::Gyeonggi, "안성", "경기도 안성시 원곡면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("안성베네스트GC", Region::Gyeonggi, "안성", "경기도 안성시 양성면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("뉴서울CC", Region::Gyeonggi, "용인", "경기도 용인시 기흥구", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("남부CC", Region::Gyeonggi, "평택", "경기도 평택시 청북읍", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("렉시스CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("라헨느CC", Region::Gyeonggi, "안성", "경기도 안성시 죽산면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("포도CC", Region::Gyeonggi, "화성", "경기도 화성시 서신면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("크리스탈밸리CC", Region::Gyeonggi, "여주", "경기도 여주시 점동면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("마우나오션CC", Region::Gangwon, "고성", "강원도 고성군 죽왕면", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("설해원CC", Region::Gangwon, "속초", "강원도 속초시 대포동", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("비발디파크CC", Region::Gangwon, "홍천", "강원도 홍천군 서면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("대명소노펠리체CC", Region::Gyeonggi, "가평", "경기도 가평군 상면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("안성힐스CC", Region::Gyeonggi, "안성", "경기도 안성시 금광면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("라비에벨CC", Region::Gyeonggi, "용인", "경기도 용인시 처인구", 27, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("파인크리크CC", Region::Chungnam, "아산", "충청남도 아산시 탕정면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("태안베이스CC", Region::Chungnam, "태안", "충청남도 태안군 남면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("대전컨트리클럽", Region::Daejeon, "대전", "대전광역시 동구 세천동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("세종파밀리에CC", Region::Sejong, "세종", "세종특별자치시 전동면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("리솜포레스트CC", Region::Chungnam, "예산", "충청남도 예산군 덕산면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("단양CC", Region::Chungbuk, "단양", "충청북도 단양군 대강면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("순천베이CC", Region::Jeonnam, "순천", "전라남도 순천시 해룡면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("영광CC", Region::Jeonnam, "영광", "전라남도 영광군 홍농읍", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("전주CC", Region::Jeonbuk, "전주", "전라북도 전주시 덕진구", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("금산CC", Region::Chungnam, "금산", "충청남도 금산군 금산읍", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("하이원CC", Region::Gangwon, "정선", "강원도 정선군 고한읍", 18, CourseType::Public, Difficulty::High),
    BaselineCourse::new("포항스틸야드CC", Region::Gyeongbuk, "포항", "경상북도 포항시 북구", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("안동CC", Region::Gyeongbuk, "안동", "경상북도 안동시 풍천면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("구미CC", Region::Gyeongbuk, "구미", "경상북도 구미시 옥성면", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("마산CC", Region::Gyeongnam, "창원", "경상남도 창원시 마산회원구", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("사천CC", Region::Gyeongnam, "사천", "경상남도 사천시 축동면", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("해비치CC", Region::Jeju, "서귀포", "제주도 서귀포시 표선면", 27, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("오라CC", Region::Jeju, "제주", "제주도 제주시 오라동", 18, CourseType::Membership, Difficulty::Medium),
    BaselineCourse::new("더클래식CC", Region::Jeju, "서귀포", "제주도 서귀포시 안덕면", 18, CourseType::Membership, Difficulty::High),
    BaselineCourse::new("테디밸리CC", Region::Jeju, "제주", "제주도 제주시 구좌읍", 18, CourseType::Public, Difficulty::Medium),
    BaselineCourse::new("블랙스톤CC", Region::Jeju, "서귀포", "제주도 서귀포시 안덕면", 18, CourseType::Public, Difficulty::High),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_baseline_ids_are_dense() {
        let courses = baseline_catalog();
        assert_eq!(courses.len(), BASELINE_COURSES.len());
        for (i, course) in courses.iter().enumerate() {
            assert_eq!(course.id as usize, i + 1);
        }
    }

    #[test]
    fn test_baseline_names_are_unique() {
        let names: HashSet<_> = BASELINE_COURSES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), BASELINE_COURSES.len());
    }
}
