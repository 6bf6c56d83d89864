use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregate::{Movement, MovementType};

/// Period selector of the movements filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    All,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl Period {
    pub fn code(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::ThisMonth => "month",
            Period::LastMonth => "last_month",
            Period::ThisYear => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "Todo el periodo",
            Period::ThisMonth => "Este mes",
            Period::LastMonth => "Mes anterior",
            Period::ThisYear => "Este año",
        }
    }

    pub fn all() -> [Period; 4] {
        [
            Period::All,
            Period::ThisMonth,
            Period::LastMonth,
            Period::ThisYear,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }

    /// Whether `date` falls into this period relative to `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            Period::LastMonth => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                date.year() == year && date.month() == month
            }
            Period::ThisYear => date.year() == today.year(),
        }
    }
}

/// Criteria of the movements list. Empty criteria match everything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovementFilter {
    pub movement_type: Option<MovementType>,
    pub employee_id: Option<u32>,
    pub project_id: Option<u32>,
    pub period: Period,
}

impl MovementFilter {
    pub fn matches(&self, movement: &Movement, today: NaiveDate) -> bool {
        self.movement_type
            .map_or(true, |t| movement.movement_type == t)
            && self
                .employee_id
                .map_or(true, |id| movement.employee_id() == Some(id))
            && self
                .project_id
                .map_or(true, |id| movement.project_id() == Some(id))
            && self.period.contains(movement.date, today)
    }

    pub fn is_empty(&self) -> bool {
        *self == MovementFilter::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_movement::fixtures::demo_movements;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn ids(filter: &MovementFilter) -> Vec<u32> {
        demo_movements()
            .iter()
            .filter(|m| filter.matches(m, today()))
            .map(|m| m.id)
            .collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = MovementFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_filter_by_type_and_employee() {
        let filter = MovementFilter {
            movement_type: Some(MovementType::TeamPayment),
            employee_id: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![2]);
    }

    #[test]
    fn test_filter_by_project() {
        let filter = MovementFilter {
            project_id: Some(1),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![3]);
    }

    #[test]
    fn test_period_last_month_wraps_year() {
        let filter = MovementFilter {
            period: Period::LastMonth,
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![7]);

        let filter = MovementFilter {
            period: Period::ThisMonth,
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec![1, 2, 3, 4, 5, 6]);
    }
}
