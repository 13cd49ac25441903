//! API Client
//!
//! Catalog fetch from the serving origin and the outbound booking link.

use tutor_directory::{BookingLink, Catalog, TutorRecord};

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Fetch the tutor catalog from the backend
pub async fn fetch_catalog() -> Result<Catalog, String> {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/tutors", origin()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("Catalog request failed: {}", response.status()));
    }

    let tutors: Vec<TutorRecord> = response.json().await.map_err(|e| e.to_string())?;
    Catalog::new(tutors).map_err(|e| e.to_string())
}

/// Deep link to the booking chat, optionally with a prefilled message
pub fn booking_url(message: Option<&str>) -> String {
    BookingLink::default().url(message)
}

/// Open the booking chat in a new browsing context
pub fn open_booking(message: Option<&str>) {
    let url = booking_url(message);
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&url, "_blank");
    }
}

/// Jump to an in-page section
pub fn jump_to(section: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(section);
    }
}
