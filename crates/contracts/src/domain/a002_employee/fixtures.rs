use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::aggregate::Employee;

fn employee(
    id: u32,
    name: &str,
    initials: &str,
    role: &str,
    phone: &str,
    start_date: NaiveDate,
    salary: f64,
) -> Employee {
    let email = format!(
        "{}@ypservices.com",
        name.to_lowercase().replacen(' ', ".", 1)
    );
    Employee {
        id,
        name: name.to_string(),
        initials: initials.to_string(),
        email,
        role: role.to_string(),
        phone: phone.to_string(),
        start_date,
        salary,
    }
}

static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        employee(
            1,
            "María García",
            "MG",
            "Desarrollador Full Stack",
            "+52 55 1111 2222",
            date(2023, 3, 15),
            3600.0,
        ),
        employee(
            2,
            "Carlos López",
            "CL",
            "Desarrollador Frontend",
            "+52 55 3333 4444",
            date(2023, 8, 1),
            4400.0,
        ),
        employee(
            3,
            "Ana Martínez",
            "AM",
            "Diseñadora UX/UI",
            "+52 55 5555 6666",
            date(2024, 1, 10),
            3200.0,
        ),
    ]
});

/// Demo team members.
pub fn demo_employees() -> &'static [Employee] {
    &EMPLOYEES
}

pub fn find_employee(id: u32) -> Option<&'static Employee> {
    EMPLOYEES.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_email_is_derived_from_name() {
        let maria = find_employee(1).unwrap();
        assert_eq!(maria.email, "maría.garcía@ypservices.com");
    }

    #[test]
    fn test_find_employee_missing() {
        assert!(find_employee(42).is_none());
    }
}
