use log::Level;

pub const BRAND_NAME: &str = "United Fast Services";
pub const BRAND_TAGLINE: &str = "Premium Muhari Coffee";
pub const BRAND_ORIGIN: &str = "Premium Muhari Coffee from Gihundwe, Rwanda";
pub const PAGE_TITLE: &str = "United Fast Services | Premium Muhari Coffee";

pub const CONTACT_EMAIL: &str = "seandiallo@gmail.com";
pub const PHONE_LOCAL: &str = "0788777068";
pub const PHONE_INTERNATIONAL: &str = "+250788503455";
pub const PHONE_INTERNATIONAL_DISPLAY: &str = "+250 788 503 455";
pub const LOCATION: &str = "Gihundwe, Rusizi, Rwanda";

pub const WHATSAPP_NUMBER: &str = "+250788503455";
pub const WHATSAPP_GREETING: &str =
    "Hello United Fast Services! I'm interested in your premium coffee products.";
pub const INSTAGRAM_URL: &str = "https://instagram.com/unitedfastservices";

/// How long the branded splash stays up before the page is shown.
pub const SPLASH_DURATION_MS: u32 = 2_000;
/// How long a success/error banner stays before the form returns to idle.
pub const STATUS_RESET_MS: u32 = 3_000;

pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const TESTIMONIAL_REVEAL_MS: u32 = 600;
// Trigger slightly after the element's edge crosses the bottom of the viewport
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
