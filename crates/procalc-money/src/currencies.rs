//! Arab-world currencies with their Arabic unit names.

use crate::currency::{ArabicNoun, Currency};

const RIYAL: ArabicNoun = ArabicNoun {
    singular: "ريال",
    dual: "ريالان",
    plural: "ريالات",
    singular_accusative: "ريالًا",
    feminine: false,
};

const DINAR: ArabicNoun = ArabicNoun {
    singular: "دينار",
    dual: "ديناران",
    plural: "دنانير",
    singular_accusative: "دينارًا",
    feminine: false,
};

const DIRHAM: ArabicNoun = ArabicNoun {
    singular: "درهم",
    dual: "درهمان",
    plural: "دراهم",
    singular_accusative: "درهمًا",
    feminine: false,
};

const FILS: ArabicNoun = ArabicNoun {
    singular: "فلس",
    dual: "فلسان",
    plural: "فلوس",
    singular_accusative: "فلسًا",
    feminine: false,
};

/// Saudi Riyal.
pub static SAR: Currency = Currency {
    name: "Saudi Riyal",
    code: "SAR",
    numeric_code: 682,
    symbol: "ر.س",
    fractions_per_unit: 100,
    rounding: 2,
    unit: RIYAL,
    sub_unit: ArabicNoun {
        singular: "هللة",
        dual: "هللتان",
        plural: "هللات",
        singular_accusative: "هللة",
        feminine: true,
    },
};

/// UAE Dirham.
pub static AED: Currency = Currency {
    name: "UAE Dirham",
    code: "AED",
    numeric_code: 784,
    symbol: "د.إ",
    fractions_per_unit: 100,
    rounding: 2,
    unit: DIRHAM,
    sub_unit: FILS,
};

/// Kuwaiti Dinar.
pub static KWD: Currency = Currency {
    name: "Kuwaiti Dinar",
    code: "KWD",
    numeric_code: 414,
    symbol: "د.ك",
    fractions_per_unit: 1000,
    rounding: 3,
    unit: DINAR,
    sub_unit: FILS,
};

/// Bahraini Dinar.
pub static BHD: Currency = Currency {
    name: "Bahraini Dinar",
    code: "BHD",
    numeric_code: 48,
    symbol: "د.ب",
    fractions_per_unit: 1000,
    rounding: 3,
    unit: DINAR,
    sub_unit: FILS,
};

/// Qatari Riyal.
pub static QAR: Currency = Currency {
    name: "Qatari Riyal",
    code: "QAR",
    numeric_code: 634,
    symbol: "ر.ق",
    fractions_per_unit: 100,
    rounding: 2,
    unit: RIYAL,
    sub_unit: DIRHAM,
};

/// Omani Rial.
pub static OMR: Currency = Currency {
    name: "Omani Rial",
    code: "OMR",
    numeric_code: 512,
    symbol: "ر.ع",
    fractions_per_unit: 1000,
    rounding: 3,
    unit: RIYAL,
    sub_unit: ArabicNoun {
        singular: "بيسة",
        dual: "بيستان",
        plural: "بيسات",
        singular_accusative: "بيسة",
        feminine: true,
    },
};

/// Egyptian Pound.
pub static EGP: Currency = Currency {
    name: "Egyptian Pound",
    code: "EGP",
    numeric_code: 818,
    symbol: "ج.م",
    fractions_per_unit: 100,
    rounding: 2,
    unit: ArabicNoun {
        singular: "جنيه",
        dual: "جنيهان",
        plural: "جنيهات",
        singular_accusative: "جنيهًا",
        feminine: false,
    },
    sub_unit: ArabicNoun {
        singular: "قرش",
        dual: "قرشان",
        plural: "قروش",
        singular_accusative: "قرشًا",
        feminine: false,
    },
};

/// Every currency defined here.
pub static ALL: [&Currency; 7] = [&SAR, &AED, &KWD, &BHD, &QAR, &OMR, &EGP];

/// Look a currency up by ISO 4217 code (case-insensitive).
pub fn by_code(code: &str) -> Option<&'static Currency> {
    ALL.iter()
        .copied()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sar_properties() {
        assert_eq!(SAR.code, "SAR");
        assert_eq!(SAR.numeric_code, 682);
        assert_eq!(SAR.fractions_per_unit, 100);
        assert!(SAR.sub_unit.feminine);
    }

    #[test]
    fn precision_matches_fractions() {
        for c in ALL {
            assert_eq!(
                10u32.pow(c.rounding as u32),
                c.fractions_per_unit,
                "{} precision",
                c.code
            );
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(by_code("kwd"), Some(&KWD));
        assert_eq!(by_code(" SAR "), Some(&SAR));
        assert_eq!(by_code("XXX"), None);
    }
}
