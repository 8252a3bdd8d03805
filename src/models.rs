use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One user's daily mark. Owned by `SparkState`; only `spark::record_click`
/// flips the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMark {
    pub name: String,
    pub clicked_today: bool,
    pub last_click: Option<DateTime<Local>>,
}

impl UserMark {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clicked_today: false,
            last_click: None,
        }
    }
}

/// The whole session record: two marks plus the aggregate counters.
///
/// Lives in memory for the lifetime of the process; there is no storage
/// behind it. `last_checked_date` tracks which calendar day the
/// `clicked_today` flags belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkState {
    pub users: [UserMark; 2],
    pub spark_count: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_checked_date: NaiveDate,
    pub started_at: DateTime<Local>,
}

impl SparkState {
    pub fn new(user1: impl Into<String>, user2: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            users: [UserMark::new(user1), UserMark::new(user2)],
            spark_count: 0,
            current_streak: 0,
            longest_streak: 0,
            last_checked_date: now.date_naive(),
            started_at: now,
        }
    }

    pub fn user(&self, key: UserKey) -> &UserMark {
        &self.users[key.index()]
    }

    pub fn both_clicked_today(&self) -> bool {
        self.users.iter().all(|user| user.clicked_today)
    }
}

/// Selects one of the two fixed users. The only fallible input in the whole
/// core is turning an arbitrary string into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey {
    User1,
    User2,
}

impl UserKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user1" => Some(Self::User1),
            "user2" => Some(Self::User2),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::User1 => 0,
            Self::User2 => 1,
        }
    }
}

/// Flame intensity derived from the current streak. Streaks of 0 and 1-2
/// both map to `Level1`; that boundary matches the reference page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlameLevel {
    Level1,
    Level2,
    Level3,
    Level4,
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct UserView {
    pub name: String,
    pub clicked_today: bool,
    pub last_click: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SparkResponse {
    pub date: String,
    pub users: Vec<UserView>,
    pub spark_count: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub flame_level: FlameLevel,
    pub both_clicked_today: bool,
    pub started_at: String,
}
