use shared::protocol::UserRecord;

/// Presentation-ready shape of a fetched directory: one card per user, input
/// order preserved. Shaping happens here so the egui layer only paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub cards: Vec<UserCard>,
}

impl DirectoryView {
    pub fn from_users(users: &[UserRecord]) -> Self {
        Self {
            cards: users.iter().map(UserCard::from_user).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub initials: String,
    pub name: String,
    pub handle: String,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: DetailValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    Link { label: String, href: String },
    Lines(Vec<(&'static str, String)>),
}

impl UserCard {
    pub fn from_user(user: &UserRecord) -> Self {
        let rows = vec![
            DetailRow {
                label: "Email",
                value: DetailValue::Text(user.email.clone()),
            },
            DetailRow {
                label: "Phone",
                value: DetailValue::Text(user.phone.clone()),
            },
            DetailRow {
                label: "Website",
                value: DetailValue::Link {
                    label: user.website.clone(),
                    href: format!("http://{}", user.website),
                },
            },
            DetailRow {
                label: "Address",
                value: DetailValue::Lines(vec![
                    (
                        "Street",
                        format!("{}, {}", user.address.street, user.address.suite),
                    ),
                    ("City", user.address.city.clone()),
                    ("Zipcode", user.address.zipcode.clone()),
                    (
                        "Geo",
                        format!("{}, {}", user.address.geo.lat, user.address.geo.lng),
                    ),
                ]),
            },
            DetailRow {
                label: "Company",
                value: DetailValue::Lines(vec![
                    ("Name", user.company.name.clone()),
                    ("Catchphrase", user.company.catch_phrase.clone()),
                    ("Business", user.company.bs.clone()),
                ]),
            },
        ];

        Self {
            initials: initials(&user.name),
            name: user.name.clone(),
            handle: format!("@{}", user.username),
            rows,
        }
    }
}

/// First character of every whitespace-separated token, upper-cased and
/// concatenated. No truncation: a three-token name yields three letters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
