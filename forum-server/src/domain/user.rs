use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record from the external user directory. The directory owns the
/// schema, so everything beyond the id is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DirectoryUser {
    pub(crate) id: i64,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

/// Directory record augmented with the deterministic portrait URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserProfile {
    #[serde(flatten)]
    pub(crate) user: DirectoryUser,
    pub(crate) image_url: String,
}

impl UserProfile {
    pub(crate) fn from_directory(user: DirectoryUser) -> Self {
        let bucket = if user.id % 2 != 0 { "men" } else { "women" };
        let image_url = format!("https://randomuser.me/api/portraits/{bucket}/{}.jpg", user.id);
        Self { user, image_url }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, json};

    use super::{DirectoryUser, UserProfile};

    fn directory_user(id: i64) -> DirectoryUser {
        let mut extra = Map::new();
        extra.insert("name".to_string(), json!("Leanne Graham"));
        DirectoryUser { id, extra }
    }

    #[test]
    fn odd_ids_use_the_men_bucket() {
        let profile = UserProfile::from_directory(directory_user(3));
        assert_eq!(
            profile.image_url,
            "https://randomuser.me/api/portraits/men/3.jpg"
        );
    }

    #[test]
    fn even_ids_use_the_women_bucket() {
        let profile = UserProfile::from_directory(directory_user(4));
        assert_eq!(
            profile.image_url,
            "https://randomuser.me/api/portraits/women/4.jpg"
        );
    }

    #[test]
    fn unknown_directory_fields_survive_the_round_trip() {
        let raw = json!({"id": 7, "name": "Kurtis", "email": "k@example.com"});
        let user: DirectoryUser = serde_json::from_value(raw).expect("must deserialize");
        assert_eq!(user.id, 7);
        assert_eq!(user.extra.get("email"), Some(&json!("k@example.com")));
    }
}
