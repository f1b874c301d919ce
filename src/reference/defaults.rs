//! Bundled reference tables.

use super::GameCategory;

pub(super) const REQUIRED_PARAMS: &[&str] = &["user", "token", "currency", "operator"];

pub(super) const OPTIONAL_PARAMS: &[&str] = &[
    "lang",
    "return_url",
    "account_history_url",
    "irc_duration",
    "irc_elapsed",
    "jurisdiction",
    "platform",
    "home_url",
];

pub(super) const CURRENCIES: &[&str] = &[
    "AED", "AMD", "ARS", "AUD", "AZN", "BDT", "BGN", "BRL", "BYN", "CAD", "CHF", "CLP", "CNY",
    "COP", "CZK", "DKK", "EGP", "EUR", "GBP", "GEL", "GHS", "HKD", "HUF", "IDR", "ILS", "INR",
    "IRR", "ISK", "JPY", "KES", "KGS", "KRW", "KZT", "MAD", "MDL", "MXN", "MYR", "NGN", "NOK",
    "NZD", "PEN", "PHP", "PKR", "PLN", "RON", "RSD", "RUB", "SEK", "SGD", "THB", "TJS", "TND",
    "TRY", "TZS", "UAH", "UGX", "USD", "UZS", "VND", "XAF", "XOF", "ZAR", "ZMW",
    // crypto
    "BTC", "ETH", "LTC", "USDT", "USDC", "TRX", "DOGE", "BNB",
];

pub(super) const JURISDICTIONS: &[&str] = &[
    "MT", "UK", "SE", "DK", "IT", "ES", "RO", "GR", "PT", "BG", "CW", "CO", "ON", "NJ", "PA",
    "MI",
];

/// `(id, display name, provider id, category)`
pub(super) const GAMES: &[(&str, &str, &str, GameCategory)] = &[
    ("aviator", "Aviator", "spribe_aviator", GameCategory::Crash),
    ("starline", "Starline", "spribe_aviator", GameCategory::Crash),
    ("balloon", "Balloon", "spribe_crypto", GameCategory::Turbo),
    ("dice", "Dice", "spribe_crypto", GameCategory::Turbo),
    ("goal", "Goal", "spribe_crypto", GameCategory::Turbo),
    ("hi-lo", "Hi Lo", "spribe_crypto", GameCategory::Turbo),
    ("hotline", "Hotline", "spribe_crypto", GameCategory::Turbo),
    ("keno", "Keno", "spribe_crypto", GameCategory::Turbo),
    ("keno-80", "Keno 80", "spribe_crypto", GameCategory::Turbo),
    ("mines", "Mines", "spribe_crypto", GameCategory::Turbo),
    ("mini-roulette", "Mini Roulette", "spribe_crypto", GameCategory::Turbo),
    ("plinko", "Plinko", "spribe_crypto", GameCategory::Turbo),
    ("trader", "Trader", "spribe_crypto", GameCategory::Turbo),
    ("golden-reels", "Golden Reels", "spribe_slots", GameCategory::Slots),
    ("neon-fruits", "Neon Fruits", "spribe_slots", GameCategory::Slots),
    ("pirate-bay", "Pirate Bay", "spribe_slots", GameCategory::Slots),
    ("wild-safari", "Wild Safari", "spribe_slots", GameCategory::Slots),
    ("baccarat-squeeze", "Baccarat Squeeze", "spribe_multiplayer", GameCategory::Multiplayer),
    ("poker", "Poker", "spribe_multiplayer", GameCategory::Multiplayer),
];

/// Numeric partner codes translated to catalog ids.
pub(super) const PARTNER_CODES: &[(&str, &str)] = &[
    ("10001", "aviator"),
    ("10002", "dice"),
    ("10003", "goal"),
    ("10004", "plinko"),
    ("10005", "mines"),
    ("10006", "hi-lo"),
    ("10007", "keno"),
    ("10008", "mini-roulette"),
    ("10009", "hotline"),
    ("10010", "balloon"),
];
