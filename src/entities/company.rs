// 🏢 Company Entity - employs users
//
// Company names are NOT unique across the dataset.

use super::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,

    #[serde(default)]
    pub users: Vec<User>,
}

impl Company {
    pub fn new(name: impl Into<String>, users: Vec<User>) -> Self {
        Company {
            name: name.into(),
            users,
        }
    }
}
