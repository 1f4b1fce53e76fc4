/// Administrative suffixes stripped when comparing prefecture names.
pub const ADMIN_SUFFIXES: [char; 4] = ['県', '府', '都', '道'];

/// (kanji name, English name, romanized slug used in WBGT file names)
const PREFECTURES: [(&str, &str, &str); 47] = [
    ("北海道", "Hokkaido", "hokkaido"),
    ("青森県", "Aomori", "aomori"),
    ("岩手県", "Iwate", "iwate"),
    ("宮城県", "Miyagi", "miyagi"),
    ("秋田県", "Akita", "akita"),
    ("山形県", "Yamagata", "yamagata"),
    ("福島県", "Fukushima", "fukushima"),
    ("茨城県", "Ibaraki", "ibaraki"),
    ("栃木県", "Tochigi", "tochigi"),
    ("群馬県", "Gunma", "gunma"),
    ("埼玉県", "Saitama", "saitama"),
    ("千葉県", "Chiba", "chiba"),
    ("東京都", "Tokyo", "tokyo"),
    ("神奈川県", "Kanagawa", "kanagawa"),
    ("新潟県", "Niigata", "niigata"),
    ("富山県", "Toyama", "toyama"),
    ("石川県", "Ishikawa", "ishikawa"),
    ("福井県", "Fukui", "fukui"),
    ("山梨県", "Yamanashi", "yamanashi"),
    ("長野県", "Nagano", "nagano"),
    ("岐阜県", "Gifu", "gifu"),
    ("静岡県", "Shizuoka", "shizuoka"),
    ("愛知県", "Aichi", "aichi"),
    ("三重県", "Mie", "mie"),
    ("滋賀県", "Shiga", "shiga"),
    ("京都府", "Kyoto", "kyoto"),
    ("大阪府", "Osaka", "osaka"),
    ("兵庫県", "Hyogo", "hyogo"),
    ("奈良県", "Nara", "nara"),
    ("和歌山県", "Wakayama", "wakayama"),
    ("鳥取県", "Tottori", "tottori"),
    ("島根県", "Shimane", "shimane"),
    ("岡山県", "Okayama", "okayama"),
    ("広島県", "Hiroshima", "hiroshima"),
    ("山口県", "Yamaguchi", "yamaguchi"),
    ("徳島県", "Tokushima", "tokushima"),
    ("香川県", "Kagawa", "kagawa"),
    ("愛媛県", "Ehime", "ehime"),
    ("高知県", "Kochi", "kochi"),
    ("福岡県", "Fukuoka", "fukuoka"),
    ("佐賀県", "Saga", "saga"),
    ("長崎県", "Nagasaki", "nagasaki"),
    ("熊本県", "Kumamoto", "kumamoto"),
    ("大分県", "Oita", "oita"),
    ("宮崎県", "Miyazaki", "miyazaki"),
    ("鹿児島県", "Kagoshima", "kagoshima"),
    ("沖縄県", "Okinawa", "okinawa"),
];

fn strip_trailing_suffix(name: &str) -> &str {
    name.strip_suffix(ADMIN_SUFFIXES).unwrap_or(name)
}

/// Romanized slug for a prefecture given in kanji (with or without its
/// suffix) or in English (case-insensitive, optional " Prefecture").
pub fn prefecture_slug(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let lowered = name.to_lowercase();
    let english = lowered
        .strip_suffix(" prefecture")
        .or_else(|| lowered.strip_suffix("-ken"))
        .unwrap_or(lowered.as_str());
    let kanji = strip_trailing_suffix(name);

    PREFECTURES
        .iter()
        .find(|(ja, en, slug)| {
            strip_trailing_suffix(ja) == kanji || en.to_lowercase() == english || *slug == english
        })
        .map(|(_, _, slug)| *slug)
}
