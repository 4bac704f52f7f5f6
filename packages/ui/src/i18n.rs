use serde::Deserialize;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ko,
    Ja,
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Ko, Lang::Ja, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ko => "ko",
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Some(Lang::Ko),
            "ja" | "ja-jp" => Some(Lang::Ja),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Short label shown on the language trigger.
    pub fn label(self) -> &'static str {
        match self {
            Lang::Ko => "KR",
            Lang::Ja => "JP",
            Lang::En => "EN",
        }
    }

    /// Name of the language in itself, used in the dropdown.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Ko => "한국어",
            Lang::Ja => "日本語",
            Lang::En => "English",
        }
    }

    /// Value of the Steam widget `l` query parameter.
    pub fn steam_code(self) -> &'static str {
        match self {
            Lang::Ko => "koreana",
            Lang::Ja => "japanese",
            Lang::En => "english",
        }
    }

    fn slot(self) -> usize {
        match self {
            Lang::Ko => 0,
            Lang::Ja => 1,
            Lang::En => 2,
        }
    }
}

/// A piece of page markup with one optional variant per language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatableElement {
    key: &'static str,
    markup_default: String,
    payloads: [Option<String>; 3],
}

impl TranslatableElement {
    pub fn new(key: &'static str, markup_default: impl Into<String>) -> Self {
        Self {
            key,
            markup_default: markup_default.into(),
            payloads: [None, None, None],
        }
    }

    pub fn with(mut self, lang: Lang, payload: impl Into<String>) -> Self {
        self.payloads[lang.slot()] = Some(payload.into());
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Content rendered before any language has been applied.
    pub fn markup_default(&self) -> &str {
        &self.markup_default
    }

    pub fn payload(&self, lang: Lang) -> Option<&str> {
        self.payloads[lang.slot()].as_deref()
    }
}

/// Every translatable element on the page, keyed by element identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    elements: Vec<TranslatableElement>,
}

impl Catalog {
    pub fn new(elements: Vec<TranslatableElement>) -> Self {
        Self { elements }
    }

    /// Catalog of the marketing page. Markup defaults are the Korean text.
    pub fn page() -> Self {
        let elements = PAGE_KEYS
            .iter()
            .map(|&key| {
                let default = page_text(Lang::Ko, key).unwrap_or(key);
                Lang::ALL.into_iter().fold(
                    TranslatableElement::new(key, default),
                    |element, lang| match page_text(lang, key) {
                        Some(text) => element.with(lang, text),
                        None => element,
                    },
                )
            })
            .collect();
        Self { elements }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslatableElement> {
        self.elements.iter()
    }

    pub fn get(&self, key: &str) -> Option<&TranslatableElement> {
        self.elements.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

const PAGE_KEYS: &[&str] = &[
    "nav.about",
    "nav.features",
    "nav.gallery",
    "nav.wishlist",
    "hero.tagline",
    "hero.subtitle",
    "hero.cta",
    "about.title",
    "about.body",
    "features.title",
    "features.combat",
    "features.party",
    "features.world",
    "gallery.title",
    "gallery.prev",
    "gallery.next",
    "wishlist.title",
    "wishlist.body",
    "footer.contact",
    "footer.rating",
];

/// Page markup for a language, `None` when no variant exists.
fn page_text(lang: Lang, key: &str) -> Option<&'static str> {
    let text = match (lang, key) {
        // Nav
        (Lang::Ko, "nav.about") => "소개",
        (Lang::Ja, "nav.about") => "紹介",
        (Lang::En, "nav.about") => "About",
        (Lang::Ko, "nav.features") => "특징",
        (Lang::Ja, "nav.features") => "特徴",
        (Lang::En, "nav.features") => "Features",
        (Lang::Ko, "nav.gallery") => "스크린샷",
        (Lang::Ja, "nav.gallery") => "スクリーンショット",
        (Lang::En, "nav.gallery") => "Screenshots",
        (Lang::Ko, "nav.wishlist") => "찜하기",
        (Lang::Ja, "nav.wishlist") => "ウィッシュリスト",
        (Lang::En, "nav.wishlist") => "Wishlist",

        // Hero
        (Lang::Ko, "hero.tagline") => "별이 떨어진 밤, 전선이 시작된다",
        (Lang::Ja, "hero.tagline") => "星が落ちた夜、戦線が始まる",
        (Lang::En, "hero.tagline") => "The night the stars fell, the front line began",
        (Lang::Ko, "hero.subtitle") => "손으로 그린 2D 애니메이션으로 펼쳐지는 <strong>턴제 전술 RPG</strong>",
        (Lang::Ja, "hero.subtitle") => "手描き2Dアニメーションで描く<strong>ターン制タクティカルRPG</strong>",
        (Lang::En, "hero.subtitle") => "A <strong>turn-based tactics RPG</strong> told through hand-drawn 2D animation",
        (Lang::Ko, "hero.cta") => "스팀에서 찜하기",
        (Lang::Ja, "hero.cta") => "Steamでウィッシュリストに追加",
        (Lang::En, "hero.cta") => "Wishlist on Steam",

        // About
        (Lang::Ko, "about.title") => "게임 소개",
        (Lang::Ja, "about.title") => "ゲーム紹介",
        (Lang::En, "about.title") => "About the game",
        (Lang::Ko, "about.body") => "추락한 별의 파편을 둘러싼 전쟁 속에서, 당신은 변방 수비대의 지휘관이 됩니다.<br>동료를 모으고, 지형을 읽고, 한 수 앞을 내다보세요.",
        (Lang::Ja, "about.body") => "墜ちた星の欠片をめぐる戦争の中、あなたは辺境守備隊の指揮官となります。<br>仲間を集め、地形を読み、一手先を見据えましょう。",
        (Lang::En, "about.body") => "In a war over the shards of a fallen star, you take command of a frontier garrison.<br>Gather allies, read the terrain, and think one move ahead.",

        // Features
        (Lang::Ko, "features.title") => "주요 특징",
        (Lang::Ja, "features.title") => "主な特徴",
        (Lang::En, "features.title") => "Features",
        (Lang::Ko, "features.combat") => "<h3>전술 전투</h3><p>고저차와 방향이 승패를 가르는 그리드 전투</p>",
        (Lang::Ja, "features.combat") => "<h3>戦術バトル</h3><p>高低差と向きが勝敗を分けるグリッドバトル</p>",
        (Lang::En, "features.combat") => "<h3>Tactical combat</h3><p>Grid battles where height and facing decide the outcome</p>",
        (Lang::Ko, "features.party") => "<h3>동료와 유대</h3><p>12명의 동료, 각자의 이야기와 합동 스킬</p>",
        (Lang::Ja, "features.party") => "<h3>仲間との絆</h3><p>12人の仲間、それぞれの物語と連携スキル</p>",
        (Lang::En, "features.party") => "<h3>Bonds</h3><p>Twelve companions, each with a story and combo skills</p>",
        (Lang::Ko, "features.world") => "<h3>살아있는 세계</h3><p>선택에 따라 변하는 마을과 전선</p>",
        (Lang::Ja, "features.world") => "<h3>生きた世界</h3><p>選択によって変わる村と戦線</p>",
        (Lang::En, "features.world") => "<h3>A living world</h3><p>Villages and front lines that change with your choices</p>",

        // Gallery
        (Lang::Ko, "gallery.title") => "스크린샷",
        (Lang::Ja, "gallery.title") => "スクリーンショット",
        (Lang::En, "gallery.title") => "Screenshots",
        (Lang::Ko, "gallery.prev") => "이전",
        (Lang::Ja, "gallery.prev") => "前へ",
        (Lang::En, "gallery.prev") => "Previous",
        (Lang::Ko, "gallery.next") => "다음",
        (Lang::Ja, "gallery.next") => "次へ",
        (Lang::En, "gallery.next") => "Next",

        // Wishlist
        (Lang::Ko, "wishlist.title") => "지금 찜하세요",
        (Lang::Ja, "wishlist.title") => "今すぐウィッシュリストへ",
        (Lang::En, "wishlist.title") => "Wishlist now",
        (Lang::Ko, "wishlist.body") => "출시 소식을 가장 먼저 받아보세요.",
        (Lang::Ja, "wishlist.body") => "リリース情報をいち早くお届けします。",
        (Lang::En, "wishlist.body") => "Be the first to hear when we launch.",

        // Footer
        (Lang::Ko, "footer.contact") => "문의: <a href=\"mailto:contact@starfall-vanguard.com\">contact@starfall-vanguard.com</a>",
        (Lang::Ja, "footer.contact") => "お問い合わせ: <a href=\"mailto:contact@starfall-vanguard.com\">contact@starfall-vanguard.com</a>",
        (Lang::En, "footer.contact") => "Contact: <a href=\"mailto:contact@starfall-vanguard.com\">contact@starfall-vanguard.com</a>",
        // Rating notice only exists for the Korean release.
        (Lang::Ko, "footer.rating") => "게임물관리위원회 등급분류 예정",

        _ => return None,
    };
    Some(text)
}
