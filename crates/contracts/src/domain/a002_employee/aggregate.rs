use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team member. `id` matches the employee selector of the movement form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub email: String,
    pub role: String,
    pub phone: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    /// Monthly salary in USD, pre-filled in the payment modal.
    pub salary: f64,
}
