//! `HijriMonth` — month-of-year enum for the Hijri calendar.

/// Month of the Hijri year.
///
/// Variants are numbered 1–12 (Muharram = 1, Dhu al-Hijjah = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HijriMonth {
    /// محرم (1).
    Muharram = 1,
    /// صفر (2).
    Safar = 2,
    /// ربيع الأول (3).
    RabiAlAwwal = 3,
    /// ربيع الثاني (4).
    RabiAlThani = 4,
    /// جمادى الأولى (5).
    JumadaAlUla = 5,
    /// جمادى الآخرة (6).
    JumadaAlAkhirah = 6,
    /// رجب (7).
    Rajab = 7,
    /// شعبان (8).
    Shaban = 8,
    /// رمضان (9).
    Ramadan = 9,
    /// شوال (10).
    Shawwal = 10,
    /// ذو القعدة (11).
    DhuAlQadah = 11,
    /// ذو الحجة (12).
    DhuAlHijjah = 12,
}

const ALL: [HijriMonth; 12] = [
    HijriMonth::Muharram,
    HijriMonth::Safar,
    HijriMonth::RabiAlAwwal,
    HijriMonth::RabiAlThani,
    HijriMonth::JumadaAlUla,
    HijriMonth::JumadaAlAkhirah,
    HijriMonth::Rajab,
    HijriMonth::Shaban,
    HijriMonth::Ramadan,
    HijriMonth::Shawwal,
    HijriMonth::DhuAlQadah,
    HijriMonth::DhuAlHijjah,
];

impl HijriMonth {
    /// Construct from a number (1 = Muharram … 12 = Dhu al-Hijjah).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        ALL.get((n as usize).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the Arabic name (`"محرم"`, `"صفر"`, …).
    pub fn arabic_name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "محرم",
            HijriMonth::Safar => "صفر",
            HijriMonth::RabiAlAwwal => "ربيع الأول",
            HijriMonth::RabiAlThani => "ربيع الثاني",
            HijriMonth::JumadaAlUla => "جمادى الأولى",
            HijriMonth::JumadaAlAkhirah => "جمادى الآخرة",
            HijriMonth::Rajab => "رجب",
            HijriMonth::Shaban => "شعبان",
            HijriMonth::Ramadan => "رمضان",
            HijriMonth::Shawwal => "شوال",
            HijriMonth::DhuAlQadah => "ذو القعدة",
            HijriMonth::DhuAlHijjah => "ذو الحجة",
        }
    }

    /// Return the English transliteration (`"Muharram"`, `"Safar"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-Awwal",
            HijriMonth::RabiAlThani => "Rabi' al-Thani",
            HijriMonth::JumadaAlUla => "Jumada al-Ula",
            HijriMonth::JumadaAlAkhirah => "Jumada al-Akhirah",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQadah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<HijriMonth> for u8 {
    fn from(m: HijriMonth) -> u8 {
        m as u8
    }
}

/// Arabic name of the 1-indexed Hijri month, or `""` when out of range.
pub fn hijri_month_name(month: u8) -> &'static str {
    HijriMonth::from_number(month).map_or("", |m| m.arabic_name())
}
