//! Locale-shaped synthetic identities.
//!
//! The postal and national-id layouts are cosmetic shapes, not real-world
//! formats.

pub mod locales;

use chrono::NaiveDate;
use tracing::debug;

use cardsmith_core::{Country, Gender, IdentityRecord, RandomSource, pick};

use locales::{PostalShape, STREET_NAMES, tables};

/// Birth years are drawn from this window.
pub const BIRTH_YEAR_MIN: u32 = 1970;
pub const BIRTH_YEAR_MAX: u32 = 2009;
/// Days stop at 28 so every month/day pair is a real date.
const BIRTH_DAY_MAX: u32 = 28;
const REGION_COUNT: u32 = 20;

/// Builds an identity for `country_code`; codes outside the configured set
/// silently fall back to the default country.
pub fn generate_identity(
    country_code: &str,
    rng: &mut (impl RandomSource + ?Sized),
) -> IdentityRecord {
    let country = Country::normalize(country_code);
    let locale = tables(country);

    let first_name = pick(locale.first_names, rng).copied().unwrap_or("Alex");
    let last_name = pick(locale.last_names, rng).copied().unwrap_or("Doe");
    let city = pick(locale.cities, rng).copied().unwrap_or("Capital");

    let street_number = rng.between(1, 9999);
    let street_name = pick(STREET_NAMES, rng).copied().unwrap_or("Main St");
    let street_line = format!("{street_number} {street_name}");

    let postal_code = postal_code(locale.postal_shape, rng);
    let phone = format!(
        "+{} {}-{}",
        rng.between(10, 99),
        rng.between(100, 999),
        rng.between(1000, 9999)
    );
    let email = format!(
        "{}.{}{}@example.com",
        mailbox_part(first_name),
        mailbox_part(last_name),
        rng.between(0, 998)
    );
    let birth_date = birth_date(rng);
    let gender = if rng.coin() {
        Gender::Male
    } else {
        Gender::Female
    };
    let region_label = format!("Region {}", rng.between(1, REGION_COUNT));
    let national_id = format!(
        "{}-{}-{}",
        rng.between(100, 999),
        rng.between(10, 99),
        rng.between(1000, 9999)
    );

    if country.code() != country_code {
        debug!(requested = country_code, country = %country, "country code normalized");
    }

    IdentityRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender,
        street_line,
        city: city.to_string(),
        region_label,
        postal_code,
        country,
        phone,
        email,
        birth_date,
        national_id,
    }
}

fn postal_code(shape: PostalShape, rng: &mut (impl RandomSource + ?Sized)) -> String {
    match shape {
        PostalShape::Digits(count) => digits(count, rng),
        PostalShape::Hyphenated { head, tail } => {
            let head = digits(head, rng);
            let tail = digits(tail, rng);
            format!("{head}-{tail}")
        }
        PostalShape::OutwardInward => {
            let outward = [rng.letter(), rng.letter()];
            let district = rng.between(1, 9);
            let sector = rng.between(1, 9);
            let unit = [rng.letter(), rng.letter()];
            format!(
                "{}{}{district} {sector}{}{}",
                outward[0], outward[1], unit[0], unit[1]
            )
        }
    }
}

fn digits(count: usize, rng: &mut (impl RandomSource + ?Sized)) -> String {
    (0..count).map(|_| rng.digit()).collect()
}

fn birth_date(rng: &mut (impl RandomSource + ?Sized)) -> String {
    let year = rng.between(BIRTH_YEAR_MIN, BIRTH_YEAR_MAX);
    let month = rng.between(1, 12);
    let day = rng.between(1, BIRTH_DAY_MAX);
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{year:04}-{month:02}-{day:02}"))
}

fn mailbox_part(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
