//! Static sector reference tables: search keywords, category grouping and
//! per-sector company dictionaries. Pure configuration data.

use crate::core::Market;

/// Metadata for one tracked sector.
#[derive(Debug, Clone, Copy)]
pub struct SectorMeta {
    /// Stable sector id (`IT_1`, `US_HC_2`, ...). US ids carry a `US_` prefix.
    pub id: &'static str,
    /// Human-readable sector name.
    pub name: &'static str,
    /// Category the sector rolls up into.
    pub category_id: &'static str,
    /// Human-readable category name.
    pub category_name: &'static str,
    /// Search keywords; the first one is used for provider queries.
    pub keywords: &'static [&'static str],
}

macro_rules! sector {
    ($id:literal, $name:literal, $cat:literal, $cat_name:literal, [$($kw:literal),+]) => {
        SectorMeta {
            id: $id,
            name: $name,
            category_id: $cat,
            category_name: $cat_name,
            keywords: &[$($kw),+],
        }
    };
}

static KR_SECTORS: &[SectorMeta] = &[
    sector!("IT_1", "반도체", "IT", "IT", ["반도체 주가", "반도체 주식"]),
    sector!("IT_2", "소프트웨어", "IT", "IT", ["소프트웨어 주식", "IT서비스 주가"]),
    sector!("IT_3", "하드웨어", "IT", "IT", ["하드웨어 주식", "전자부품 주가"]),
    sector!("HC_1", "바이오", "HC", "헬스케어", ["바이오 주가", "바이오 주식"]),
    sector!("HC_2", "제약", "HC", "헬스케어", ["제약 주가", "제약 주식"]),
    sector!("HC_3", "의료기기", "HC", "헬스케어", ["의료기기 주가"]),
    sector!("FN_1", "은행", "FN", "금융", ["은행 주가", "금융 주식"]),
    sector!("FN_2", "보험", "FN", "금융", ["보험 주가", "보험 주식"]),
    sector!("FN_3", "증권", "FN", "금융", ["증권 주가", "증권사 주식"]),
    sector!("CD_1", "자동차", "CD", "임의소비재", ["자동차 주가", "자동차 주식"]),
    sector!("CD_2", "의류", "CD", "임의소비재", ["패션 의류 주가"]),
    sector!("CD_3", "호텔", "CD", "임의소비재", ["호텔 여행 주가"]),
    sector!("CD_4", "전자제품", "CD", "임의소비재", ["가전 전자제품 주가"]),
    sector!("CS_1", "음식료", "CS", "필수소비재", ["식품 음료 주가"]),
    sector!("CS_2", "생활용품", "CS", "필수소비재", ["생활용품 주가"]),
    sector!("CM_1", "통신", "CM", "커뮤니케이션", ["통신 주가", "통신사 주식"]),
    sector!("CM_2", "미디어", "CM", "커뮤니케이션", ["미디어 방송 주가"]),
    sector!("CM_3", "엔터테인먼트", "CM", "커뮤니케이션", ["엔터테인먼트 주가", "연예기획사 주식"]),
    sector!("IN_1", "항공우주", "IN", "산업재", ["항공 주가", "방산 주식"]),
    sector!("IN_2", "기계", "IN", "산업재", ["기계 중공업 주가"]),
    sector!("IN_3", "건설", "IN", "산업재", ["건설 주가", "건설 주식"]),
    sector!("IN_4", "운송", "IN", "산업재", ["물류 운송 주가"]),
    sector!("EN_1", "석유", "EN", "에너지", ["정유 석유 주가"]),
    sector!("EN_2", "가스", "EN", "에너지", ["가스 에너지 주가"]),
    sector!("EN_3", "대체에너지", "EN", "에너지", ["신재생 태양광 주가"]),
    sector!("MT_1", "화학", "MT", "소재", ["화학 주가", "화학 주식"]),
    sector!("MT_2", "금속", "MT", "소재", ["철강 금속 주가"]),
    sector!("MT_3", "광물", "MT", "소재", ["광물 희토류 주가"]),
    sector!("UT_1", "전력", "UT", "유틸리티", ["전력 한전 주가"]),
    sector!("UT_2", "도시가스", "UT", "유틸리티", ["도시가스 주가"]),
    sector!("UT_3", "수도", "UT", "유틸리티", ["수처리 환경 주가"]),
    sector!("RE_1", "개발", "RE", "부동산", ["부동산 개발 주가"]),
    sector!("RE_2", "관리", "RE", "부동산", ["리츠 부동산 주가"]),
    sector!("RE_3", "투자", "RE", "부동산", ["부동산 투자 주가"]),
];

static US_SECTORS: &[SectorMeta] = &[
    sector!("US_IT_1", "Semiconductors", "US_IT", "Technology", ["semiconductor stocks"]),
    sector!("US_IT_2", "Software", "US_IT", "Technology", ["software technology stocks"]),
    sector!("US_IT_3", "Hardware", "US_IT", "Technology", ["hardware tech stocks"]),
    sector!("US_HC_1", "Biotech", "US_HC", "Healthcare", ["biotech stocks"]),
    sector!("US_HC_2", "Pharma", "US_HC", "Healthcare", ["pharma stocks"]),
    sector!("US_HC_3", "Medical Devices", "US_HC", "Healthcare", ["medical device stocks"]),
    sector!("US_FN_1", "Banking", "US_FN", "Finance", ["banking stocks Wall Street"]),
    sector!("US_FN_2", "Insurance", "US_FN", "Finance", ["insurance stocks"]),
    sector!("US_FN_3", "Investment", "US_FN", "Finance", ["investment brokerage stocks"]),
    sector!("US_CD_1", "Automotive", "US_CD", "Consumer Disc.", ["automotive EV stocks"]),
    sector!("US_CD_2", "Retail", "US_CD", "Consumer Disc.", ["retail consumer stocks"]),
    sector!("US_CD_3", "Luxury", "US_CD", "Consumer Disc.", ["luxury goods stocks"]),
    sector!("US_CS_1", "Food & Beverage", "US_CS", "Consumer Staples", ["food beverage stocks"]),
    sector!("US_CS_2", "Household", "US_CS", "Consumer Staples", ["household products stocks"]),
    sector!("US_CM_1", "Telecom", "US_CM", "Communication", ["telecom stocks"]),
    sector!("US_CM_2", "Media", "US_CM", "Communication", ["media streaming stocks"]),
    sector!("US_CM_3", "Entertainment", "US_CM", "Communication", ["entertainment stocks"]),
    sector!("US_IN_1", "Aerospace", "US_IN", "Industrials", ["aerospace defense stocks"]),
    sector!("US_IN_2", "Machinery", "US_IN", "Industrials", ["machinery industrial stocks"]),
    sector!("US_IN_3", "Construction", "US_IN", "Industrials", ["construction stocks"]),
    sector!("US_EN_1", "Oil & Gas", "US_EN", "Energy", ["oil gas stocks"]),
    sector!("US_EN_2", "Renewables", "US_EN", "Energy", ["renewable energy stocks"]),
    sector!("US_MT_1", "Chemicals", "US_MT", "Materials", ["chemicals stocks"]),
    sector!("US_MT_2", "Metals & Mining", "US_MT", "Materials", ["metals mining stocks"]),
    sector!("US_UT_1", "Electric", "US_UT", "Utilities", ["electric utility stocks"]),
    sector!("US_UT_2", "Water", "US_UT", "Utilities", ["water utility stocks"]),
    sector!("US_RE_1", "REITs", "US_RE", "Real Estate", ["REIT real estate stocks"]),
    sector!("US_RE_2", "Development", "US_RE", "Real Estate", ["real estate development stocks"]),
];

/// Look up a sector's metadata by id. `None` signals an unrecognized id.
#[must_use]
pub fn sector_meta(id: &str) -> Option<&'static SectorMeta> {
    let table = if id.starts_with("US_") {
        US_SECTORS
    } else {
        KR_SECTORS
    };
    table.iter().find(|m| m.id == id)
}

/// The market a sector id belongs to, by prefix convention.
#[must_use]
pub fn market_of(id: &str) -> Market {
    if id.starts_with("US_") {
        Market::Us
    } else {
        Market::Kr
    }
}

/// All sector ids of one market, in table order.
#[must_use]
pub fn sector_ids(market: Market) -> Vec<&'static str> {
    let table = match market {
        Market::Kr => KR_SECTORS,
        Market::Us => US_SECTORS,
    };
    table.iter().map(|m| m.id).collect()
}

/// The static company dictionary for one sector. Sectors without a curated
/// list get an empty slice; matching simply finds nothing for them.
#[must_use]
pub fn company_dict(sector_id: &str) -> &'static [&'static str] {
    match sector_id {
        "IT_1" => &["삼성전자", "SK하이닉스", "마이크론", "TSMC", "엔비디아", "인텔", "DB하이텍", "리노공업", "한미반도체", "이오테크닉스"],
        "IT_2" => &["삼성SDS", "카카오", "네이버", "NHN", "더존비즈온", "위메이드", "크래프톤", "엔씨소프트", "컴투스", "넷마블"],
        "IT_3" => &["LG전자", "삼성전기", "LG이노텍", "대덕전자", "심텍", "코리아써키트", "비에이치", "파트론", "아모텍", "서울반도체"],
        "HC_1" => &["삼성바이오", "셀트리온", "SK바이오팜", "에이비엘바이오", "유한양행", "알테오젠", "HLB", "메디톡스", "리가켐바이오", "오스코텍"],
        "HC_2" => &["유한양행", "녹십자", "한미약품", "대웅제약", "종근당", "JW중외제약", "일동제약", "동아ST", "보령", "광동제약"],
        "HC_3" => &["오스템임플란트", "인바디", "바텍", "루트로닉", "씨젠", "레이", "솔고바이오", "뷰노", "제이시스메디칼", "디오"],
        "FN_1" => &["KB금융", "신한지주", "하나금융", "우리금융", "기업은행", "BNK금융", "DGB금융", "JB금융", "카카오뱅크", "토스"],
        "FN_2" => &["삼성생명", "삼성화재", "DB손보", "현대해상", "한화생명", "메리츠금융", "동양생명", "KB손보", "롯데손보", "흥국화재"],
        "FN_3" => &["미래에셋", "삼성증권", "NH투자", "한국투자", "KB증권", "키움증권", "대신증권", "하나증권", "신한투자", "메리츠증권"],
        "CD_1" => &["현대차", "기아", "현대모비스", "만도", "한온시스템", "현대위아", "에스엘", "HL만도", "한국타이어", "넥센타이어"],
        "CD_2" => &["F&F", "한세실업", "영원무역", "휠라홀딩스", "코오롱인더", "LF", "신세계인터", "한섬", "무신사", "이랜드"],
        "CD_3" => &["호텔신라", "하나투어", "모두투어", "파라다이스", "GKL", "강원랜드", "롯데관광", "여기어때", "야놀자", "인터파크"],
        "CD_4" => &["삼성전자", "LG전자", "쿠쿠홈시스", "위닉스", "코웨이", "쿠첸", "SK매직", "일렉트로룩스", "다이슨", "발뮤다"],
        "CS_1" => &["CJ제일제당", "오뚜기", "농심", "삼양식품", "풀무원", "동원F&B", "하이트진로", "오리온", "롯데칠성", "빙그레"],
        "CS_2" => &["LG생활건강", "아모레퍼시픽", "애경산업", "깨끗한나라", "유한킴벌리", "헨켈", "P&G", "유니레버", "쿠팡", "이마트"],
        "CM_1" => &["SK텔레콤", "KT", "LG유플러스", "SK브로드밴드", "KT스카이라이프", "SKT", "LGU+", "세종텔레콤", "KT클라우드", "토스"],
        "CM_2" => &["CJ ENM", "제일기획", "SBS", "JTBC", "KBS", "MBC", "TV조선", "채널A", "스튜디오드래곤", "카카오엔터"],
        "CM_3" => &["하이브", "SM엔터", "JYP엔터", "YG엔터", "카카오엔터", "CJ ENM", "큐브엔터", "판타지오", "에스엠", "와이지"],
        "IN_1" => &["한화에어로", "한국항공우주", "LIG넥스원", "현대로템", "한화시스템", "KAI", "대한항공", "아시아나", "제주항공", "티웨이항공"],
        "IN_2" => &["두산에너빌", "현대중공업", "삼성중공업", "대우조선", "HD한국조선", "두산밥캣", "현대건설기계", "LS일렉트릭", "효성중공업", "현대일렉트릭"],
        "IN_3" => &["현대건설", "대우건설", "GS건설", "삼성물산", "DL이앤씨", "HDC현대산업", "포스코건설", "롯데건설", "대림산업", "호반건설"],
        "IN_4" => &["대한항공", "아시아나", "현대글로비스", "CJ대한통운", "한진", "팬오션", "HMM", "흥아해운", "쿠팡", "롯데글로벌"],
        "EN_1" => &["SK이노베이션", "에스오일", "GS칼텍스", "현대오일뱅크", "SK에너지", "한국석유", "흥구석유", "중앙에너비스", "극동유화", "S-Oil"],
        "EN_2" => &["한국가스공사", "SK가스", "E1", "대성에너지", "서울가스", "삼천리", "경동도시가스", "예스코", "부산가스", "지에스이"],
        "EN_3" => &["한화솔루션", "OCI", "신성이엔지", "두산퓨얼셀", "씨에스윈드", "유니슨", "에스에너지", "해줌", "한국수소산업", "SK E&S"],
        "MT_1" => &["LG화학", "SKC", "롯데케미칼", "한화솔루션", "금호석유화학", "효성화학", "OCI", "코오롱", "SK케미칼", "대한유화"],
        "MT_2" => &["포스코홀딩스", "현대제철", "고려아연", "동국제강", "세아제강", "풍산", "영풍", "TCC스틸", "KG스틸", "동국산업"],
        "MT_3" => &["포스코", "고려아연", "영풍", "일진머티리얼즈", "에코프로비엠", "에코프로", "엘앤에프", "포스코퓨처엠", "천보", "나노신소재"],
        "UT_1" => &["한국전력", "한전KPS", "한전기술", "한국수력원자력", "두산에너빌리티", "LS ELECTRIC", "효성중공업", "일진전기", "대원전선", "한전산업"],
        "UT_2" => &["삼천리", "서울가스", "경동도시가스", "대성에너지", "부산가스", "SK가스", "예스코", "코원에너지", "대륜E&S", "인천도시가스"],
        "UT_3" => &["코웨이", "한국수처리", "자연과환경", "에코매니지먼트", "KC코트렐", "수젠텍", "에코바이오", "웰크론한텍", "한솔테크닉스", "태영건설"],
        "RE_1" => &["삼성물산", "현대건설", "DL이앤씨", "GS건설", "대우건설", "호반건설", "롯데건설", "제일건설", "신세계건설", "HDC현대산업"],
        "RE_2" => &["맥쿼리인프라", "ESR켄달스퀘어", "SK리츠", "롯데리츠", "이리츠코크렙", "NH올원리츠", "미래에셋맵스", "제이알글로벌", "코람코에너지", "신한서부티엔디"],
        "RE_3" => &["신세계프라퍼티", "이랜드리테일", "한화갤러리아", "현대백화점", "롯데쇼핑", "이마트", "신세계", "갤러리아", "AK플라자", "대형마트"],
        "US_IT_1" => &["Apple", "Microsoft", "NVIDIA", "AMD", "Intel", "Google", "Meta", "Amazon", "Tesla", "Netflix", "Alphabet", "Broadcom", "TSMC", "Qualcomm", "Adobe"],
        "US_IT_2" => &["Meta", "Facebook", "Twitter", "X", "Snap", "Pinterest", "Reddit", "LinkedIn", "TikTok", "Discord"],
        "US_HC_1" => &["Johnson & Johnson", "Pfizer", "Moderna", "AbbVie", "Merck", "Eli Lilly", "Amgen", "Gilead", "Bristol-Myers", "Novo Nordisk"],
        "US_FN_1" => &["JPMorgan", "Goldman Sachs", "Morgan Stanley", "Bank of America", "Citigroup", "Wells Fargo", "BlackRock", "Charles Schwab", "Visa", "Mastercard"],
        "US_EN_1" => &["ExxonMobil", "Chevron", "Shell", "BP", "ConocoPhillips", "EOG", "Pioneer", "Schlumberger", "Halliburton", "Marathon"],
        "US_CD_1" => &["Tesla", "Amazon", "Nike", "Starbucks", "McDonald's", "Home Depot", "Toyota", "Ford", "GM", "Walmart"],
        "US_CS_1" => &["Procter & Gamble", "Coca-Cola", "PepsiCo", "Costco", "Walmart", "Colgate", "Unilever", "Nestlé", "Mondelez", "Kraft"],
        "US_CM_1" => &["AT&T", "Verizon", "T-Mobile", "Comcast", "Disney", "Netflix", "Warner Bros", "Paramount", "Spotify", "Roku"],
        "US_IN_1" => &["Boeing", "Lockheed Martin", "Raytheon", "Caterpillar", "3M", "Honeywell", "GE", "UPS", "FedEx", "Deere"],
        "US_MT_1" => &["Dow", "DuPont", "Linde", "Air Products", "Nucor", "Freeport-McMoRan", "Newmont", "Alcoa", "US Steel", "Cleveland-Cliffs"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sector_resolves_by_id() {
        for market in [Market::Kr, Market::Us] {
            for id in sector_ids(market) {
                let meta = sector_meta(id).unwrap();
                assert_eq!(meta.id, id);
                assert!(!meta.keywords.is_empty());
                assert_eq!(market_of(id), market);
            }
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(sector_meta("ZZ_9").is_none());
        assert!(sector_meta("US_ZZ_9").is_none());
    }
}
