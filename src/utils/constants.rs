/// Backend base URL, configured at compile time:
/// - Development: http://localhost:5000/api (default)
/// - Production: via BACKEND_URL env var / .env (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// The single localStorage key. Nothing else is persisted client-side.
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Options for the country picker on the signup and profile screens.
/// A static shortlist; the select itself is data-agnostic.
pub const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Belgium",
    "Brazil",
    "Canada",
    "China",
    "Egypt",
    "France",
    "Germany",
    "India",
    "Indonesia",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "Nigeria",
    "Pakistan",
    "Poland",
    "Portugal",
    "Saudi Arabia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Turkey",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
];
