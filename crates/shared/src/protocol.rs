use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// One record returned by the remote directory endpoint. Fields are carried
/// verbatim; display formatting happens in the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: PostalAddress,
    pub phone: String,
    /// Hostname without scheme, e.g. "hildegard.org".
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: GeoPoint,
}

// The endpoint ships coordinates as strings; they stay strings end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directory_wire_format() {
        let body = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: UserRecord = serde_json::from_str(body).expect("wire record parses");
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(user.website, "hildegard.org");
    }
}
