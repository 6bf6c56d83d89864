use chrono::NaiveDate;

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Local calendar date of the browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
