//! Random sample data for the demo clients.

use chrono::{Duration, Utc};
use models::sighting::{SightingInfo, SightingUpdateInfo};
use rand::seq::SliceRandom;
use rand::Rng;

const CITIES: &[&str] = &[
    "Paris", "Roswell", "Tokyo", "Oslo", "Lima", "Cairo", "Denver", "Perth", "Lisbon", "Nairobi",
];
const STREETS: &[&str] = &["Main Street", "Harbor Road", "Elm Avenue", "Mill Lane", "Station Square"];
const COLORS: &[&str] = &["green", "silver", "orange", "white", "blue", "red"];
const SOUNDS: &[&str] = &["hum", "buzz", "whistle", "silence", "roar"];
const WORDS: &[&str] = &[
    "bright", "light", "hovering", "over", "the", "field", "disc", "shaped", "object", "moving", "fast",
    "silent", "triangle", "three", "lights", "vanished", "suddenly", "low", "clouds",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, CITIES)
}

pub fn location<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}, {}", city(rng), pick(rng, STREETS))
}

pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(5..=15);
    let words: Vec<&str> = (0..len).filter_map(|_| WORDS.choose(rng).copied()).collect();
    let mut s = words.join(" ");
    if let Some(first) = s.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    s.push('.');
    s
}

pub fn temperature<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen_range(-30.0..45.0_f64) * 10.0).round() / 10.0
}

/// Sighting within the last three years; optional fields appear about half the time.
pub fn sighting_info<R: Rng + ?Sized>(rng: &mut R) -> SightingInfo {
    let observed_at = Utc::now() - Duration::days(rng.gen_range(0..3 * 365));
    SightingInfo {
        observed_at: Some(observed_at),
        location: location(rng),
        description: sentence(rng),
        color: rng.gen_bool(0.5).then(|| pick(rng, COLORS)),
        sound: rng.gen_bool(0.5).then(|| pick(rng, SOUNDS)),
        duration_seconds: rng.gen_bool(0.5).then(|| rng.gen_range(1..3600)),
    }
}

/// Random subset of fields to change.
pub fn sighting_update<R: Rng + ?Sized>(rng: &mut R) -> SightingUpdateInfo {
    SightingUpdateInfo {
        observed_at: rng.gen_bool(0.5).then(|| Utc::now() - Duration::days(rng.gen_range(0..3 * 365))),
        location: rng.gen_bool(0.5).then(|| location(rng)),
        description: rng.gen_bool(0.5).then(|| sentence(rng)),
        color: rng.gen_bool(0.5).then(|| pick(rng, COLORS)),
        sound: rng.gen_bool(0.5).then(|| pick(rng, SOUNDS)),
        duration_seconds: rng.gen_bool(0.5).then(|| rng.gen_range(1..3600)),
    }
}
