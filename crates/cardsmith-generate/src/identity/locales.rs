use cardsmith_core::Country;

/// Name and city tables for one country.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTables {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub postal_shape: PostalShape,
}

/// Postal code layout; each country has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostalShape {
    /// `n` digits.
    Digits(usize),
    /// `head` digits, a hyphen, `tail` digits.
    Hyphenated { head: usize, tail: usize },
    /// `AA9 9AA`, a simplified outward/inward code.
    OutwardInward,
}

/// Street tokens shared by every country.
pub const STREET_NAMES: &[&str] = &[
    "Main St",
    "Park Ave",
    "Oak St",
    "Broadway",
    "Maple Ave",
    "Cedar Ln",
    "Jl. Merdeka",
    "Jl. Sudirman",
    "Berliner Str.",
    "Av. Paulista",
    "Rue de Rivoli",
    "Chuo-dori",
    "George St",
];

pub fn tables(country: Country) -> LocaleTables {
    match country {
        Country::US => LocaleTables {
            first_names: &[
                "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            ],
            last_names: &[
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            ],
            cities: &[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Philadelphia",
            ],
            postal_shape: PostalShape::Digits(5),
        },
        Country::UK => LocaleTables {
            first_names: &[
                "Oliver", "Olivia", "George", "Amelia", "Harry", "Isla", "Noah", "Ava",
            ],
            last_names: &[
                "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
            ],
            cities: &[
                "London",
                "Birmingham",
                "Manchester",
                "Glasgow",
                "Liverpool",
                "Leeds",
            ],
            postal_shape: PostalShape::OutwardInward,
        },
        Country::ID => LocaleTables {
            first_names: &[
                "Budi", "Siti", "Agus", "Lani", "Eko", "Dewi", "Bambang", "Putri",
            ],
            last_names: &[
                "Sutrisno", "Wijaya", "Hidayat", "Saputra", "Kusuma", "Pratama", "Gunawan",
                "Santoso",
            ],
            cities: &[
                "Jakarta", "Surabaya", "Bandung", "Medan", "Semarang", "Makassar",
            ],
            postal_shape: PostalShape::Digits(5),
        },
        Country::DE => LocaleTables {
            first_names: &[
                "Lukas",
                "Lina",
                "Maximilian",
                "Emma",
                "Jakob",
                "Mia",
                "Felix",
                "Sofia",
            ],
            last_names: &[
                "Müller",
                "Schmidt",
                "Schneider",
                "Fischer",
                "Weber",
                "Meyer",
                "Wagner",
                "Becker",
            ],
            cities: &[
                "Berlin",
                "Hamburg",
                "Munich",
                "Cologne",
                "Frankfurt",
                "Stuttgart",
            ],
            postal_shape: PostalShape::Digits(5),
        },
        Country::BR => LocaleTables {
            first_names: &[
                "Gabriel", "Julia", "Lucas", "Mariana", "Matheus", "Beatriz", "Felipe", "Ana",
            ],
            last_names: &[
                "Silva",
                "Santos",
                "Oliveira",
                "Souza",
                "Rodrigues",
                "Ferreira",
                "Alves",
                "Pereira",
            ],
            cities: &[
                "São Paulo",
                "Rio de Janeiro",
                "Brasília",
                "Salvador",
                "Fortaleza",
                "Belo Horizonte",
            ],
            postal_shape: PostalShape::Hyphenated { head: 5, tail: 3 },
        },
        Country::FR => LocaleTables {
            first_names: &[
                "Lucas", "Emma", "Léo", "Jade", "Gabriel", "Louise", "Raphaël", "Alice",
            ],
            last_names: &[
                "Martin", "Bernard", "Thomas", "Petit", "Robert", "Richard", "Durand", "Dubois",
            ],
            cities: &["Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes"],
            postal_shape: PostalShape::Digits(5),
        },
        Country::JP => LocaleTables {
            first_names: &[
                "Haruto", "Himari", "Riku", "Akari", "Haruki", "Ichika", "Kaito", "Sara",
            ],
            last_names: &[
                "Sato",
                "Suzuki",
                "Takahashi",
                "Tanaka",
                "Watanabe",
                "Ito",
                "Yamamoto",
                "Nakamura",
            ],
            cities: &["Tokyo", "Osaka", "Nagoya", "Sapporo", "Fukuoka", "Kyoto"],
            postal_shape: PostalShape::Hyphenated { head: 3, tail: 4 },
        },
        Country::AU => LocaleTables {
            first_names: &[
                "Jack",
                "Charlotte",
                "William",
                "Olivia",
                "Thomas",
                "Amelia",
                "James",
                "Mia",
            ],
            last_names: &[
                "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Johnson", "White",
            ],
            cities: &[
                "Sydney",
                "Melbourne",
                "Brisbane",
                "Perth",
                "Adelaide",
                "Gold Coast",
            ],
            postal_shape: PostalShape::Digits(4),
        },
    }
}
