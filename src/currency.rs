use serde::Serialize;

/// Currency the form falls back to when the draft is reset.
pub const DEFAULT_CURRENCY_CODE: &str = "NGN";

/// One selectable currency in the picker. The flag field is the asset
/// path the rendering surface resolves; this crate never loads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

/// Ordered reference set backing the currency picker. Read-only.
pub const CURRENCIES: &[CurrencyOption] = &[
    CurrencyOption {
        code: "NGN",
        name: "Nigeria",
        symbol: "₦",
        flag: "/flags/nigeria.svg",
    },
    CurrencyOption {
        code: "USD",
        name: "United States",
        symbol: "$",
        flag: "/flags/united-states.svg",
    },
    CurrencyOption {
        code: "EUR",
        name: "European Union",
        symbol: "€",
        flag: "/flags/european-union.svg",
    },
    CurrencyOption {
        code: "GBP",
        name: "United Kingdom",
        symbol: "£",
        flag: "/flags/united-kingdom.svg",
    },
    CurrencyOption {
        code: "GHS",
        name: "Ghana",
        symbol: "₵",
        flag: "/flags/ghana.svg",
    },
    CurrencyOption {
        code: "KES",
        name: "Kenya",
        symbol: "KSh",
        flag: "/flags/kenya.svg",
    },
    CurrencyOption {
        code: "ZAR",
        name: "South Africa",
        symbol: "R",
        flag: "/flags/south-africa.svg",
    },
    CurrencyOption {
        code: "EGP",
        name: "Egypt",
        symbol: "E£",
        flag: "/flags/egypt.svg",
    },
    CurrencyOption {
        code: "INR",
        name: "India",
        symbol: "₹",
        flag: "/flags/india.svg",
    },
    CurrencyOption {
        code: "CAD",
        name: "Canada",
        symbol: "CA$",
        flag: "/flags/canada.svg",
    },
];

/// Live-search predicate for the picker: case-insensitive substring
/// match on name, code, or symbol. One policy for all three fields.
pub fn filter_currencies(query: &str) -> Vec<&'static CurrencyOption> {
    let needle = query.to_lowercase();

    CURRENCIES
        .iter()
        .filter(|currency| {
            currency.name.to_lowercase().contains(&needle)
                || currency.code.to_lowercase().contains(&needle)
                || currency.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Looks up a currency by its exact code.
pub fn find_currency(code: &str) -> Option<&'static CurrencyOption> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}
