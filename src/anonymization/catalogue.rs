//! Fixed substitution catalogues
//!
//! Fake merchants, cities, personal names and reference patterns used for
//! realistic substitution. Catalogue ordering is part of the deterministic
//! contract: reordering entries changes every hash-derived pick.

/// Plausible merchant names for counterparty substitution
pub const MERCHANTS: &[&str] = &[
    "AMAZON",
    "TESCO",
    "SAINSBURY'S",
    "ASDA",
    "MORRISONS",
    "WAITROSE",
    "MARKS & SPENCER",
    "JOHN LEWIS",
    "NEXT",
    "H&M",
    "ZARA",
    "PRIMARK",
    "STARBUCKS",
    "COSTA COFFEE",
    "MCDONALD'S",
    "KFC",
    "SUBWAY",
    "GREGGS",
    "SPOTIFY",
    "NETFLIX",
    "DISNEY+",
    "AMAZON PRIME",
    "APPLE",
    "GOOGLE",
    "VODAFONE",
    "EE",
    "O2",
    "THREE",
    "BT",
    "SKY",
    "VIRGIN MEDIA",
    "SHELL",
    "BP",
    "ESSO",
    "TEXACO",
    "SAINSBURY'S PETROL",
    "TESCO PETROL",
    "UBER",
    "DELIVEROO",
    "JUST EAT",
    "BOLT",
    "CITY MAPPER",
    "TFL",
    "BOOTS",
    "SUPERDRUG",
    "HOLLAND & BARRETT",
    "SPECSAVERS",
    "VISION EXPRESS",
    "ARGOS",
    "CURRYS",
    "SCREWFIX",
    "B&Q",
    "HOMEBASE",
    "IKEA",
    "PIZZA EXPRESS",
    "NANDOS",
    "WAGAMAMA",
    "YO! SUSHI",
    "LEON",
    "PRET A MANGER",
    "CINEMA CITY",
    "ODEON",
    "VUE CINEMAS",
    "GYM GROUP",
    "PURE GYM",
    "DAVID LLOYD",
    "LLOYDS BANK",
    "BARCLAYS",
    "HSBC",
    "NATWEST",
    "SANTANDER",
    "TSB",
    "PAYPAL",
    "REVOLUT",
    "MONZO",
    "STARLING BANK",
    "WISE",
    "KLARNA",
];

/// City tokens that mark a counterparty name as carrying a location suffix
pub const CITY_MARKERS: &[&str] = &["LONDON", "MANCHESTER", "BIRMINGHAM", "LEEDS", "GLASGOW"];

/// Fake cities appended when the original counterparty carried a location
pub const CITIES: &[&str] = &[
    "LONDON",
    "MANCHESTER",
    "BIRMINGHAM",
    "LEEDS",
    "GLASGOW",
    "BRISTOL",
    "LIVERPOOL",
];

/// First names for personal-name synthesis
pub const FIRST_NAMES: &[&str] = &[
    "JAMES",
    "JOHN",
    "ROBERT",
    "MICHAEL",
    "WILLIAM",
    "DAVID",
    "RICHARD",
    "JOSEPH",
    "THOMAS",
    "CHRISTOPHER",
    "CHARLES",
    "DANIEL",
    "MATTHEW",
    "ANTHONY",
    "MARK",
    "SARAH",
    "JESSICA",
    "JENNIFER",
    "ASHLEY",
    "EMMA",
    "OLIVIA",
    "ELIZABETH",
    "SOPHIE",
    "CHARLOTTE",
    "LUCY",
    "HANNAH",
    "GRACE",
    "ELLIE",
    "CHLOE",
    "EMILY",
];

/// Surnames for personal-name synthesis
pub const SURNAMES: &[&str] = &[
    "SMITH",
    "JONES",
    "TAYLOR",
    "WILLIAMS",
    "BROWN",
    "DAVIES",
    "EVANS",
    "WILSON",
    "THOMAS",
    "ROBERTS",
    "JOHNSON",
    "LEWIS",
    "WALKER",
    "ROBINSON",
    "THOMPSON",
    "WHITE",
    "WATSON",
    "JACKSON",
    "WRIGHT",
    "GREEN",
    "HARRIS",
    "COOPER",
    "KING",
    "LEE",
    "MARTIN",
    "CLARKE",
    "JAMES",
    "MORGAN",
    "HUGHES",
    "EDWARDS",
    "HILL",
];

/// Generic reference patterns as (prefix, digit width) pairs
pub const REFERENCE_PATTERNS: &[(&str, usize)] = &[
    ("REF", 8),
    ("TXN", 6),
    ("PAY", 7),
    ("INV", 5),
    ("ORD", 6),
    ("PMT", 8),
    ("TRF", 7),
    ("DD", 6),
];

/// Fixed placeholder substituted for bank-account-shaped tokens
pub const ACCOUNT_PLACEHOLDER: &str = "GB29FAKE0123456789";
