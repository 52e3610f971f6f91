use chrono::NaiveDate;
use hrdesk_core::screens::{AttendanceScreen, EmployeesScreen, ScreenOptions};
use hrdesk_core::{
    filter, summarize, AttendanceEntry, AttendanceField, AttendanceStatus, Employee,
    EmployeeField, EmployeeStatus, FixtureProvider, HrConfig, MatchPolicy, MockFixtures, Route,
    Summary, ViewMode,
};

fn person(id: &str, name: &str, department: &str) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        email: format!("{}@company.com", id.to_lowercase()),
        phone: String::new(),
        department: department.into(),
        designation: String::new(),
        status: EmployeeStatus::Active,
        join_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        manager: None,
        location: String::new(),
    }
}

fn entry(id: &str, status: AttendanceStatus) -> AttendanceEntry {
    AttendanceEntry {
        id: id.into(),
        employee_id: id.into(),
        name: id.into(),
        department: "Ops".into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        check_in: None,
        check_out: None,
        status,
        work_hours: None,
    }
}

#[test]
fn test_john_query_is_case_insensitive_substring() {
    let records = vec![
        person("E1", "John Smith", "Engineering"),
        person("E2", "Sarah Johnson", "HR"),
    ];
    let hits = filter(
        &records,
        "john",
        &[EmployeeField::Name, EmployeeField::Department],
    );

    // "Johnson" contains "john" as well; substring semantics keep both, in order
    assert_eq!(hits[0].name, "John Smith");
    assert_eq!(hits.len(), 2);

    let exact = filter(&records, "JOHN S", &[EmployeeField::Name]);
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].name, "John Smith");
}

#[test]
fn test_late_counts_as_present_and_late() {
    use AttendanceStatus::*;
    let records: Vec<_> = [Present, Present, Absent, Late]
        .into_iter()
        .enumerate()
        .map(|(i, s)| entry(&format!("A{i}"), s))
        .collect();

    assert_eq!(
        summarize(&records),
        Summary { total: 4, present: 3, absent: 1, late: 1 }
    );
}

#[test]
fn test_no_match_is_empty_not_error() {
    let fixtures = MockFixtures::new();
    let employees = fixtures.employees();
    let attendance = fixtures.attendance();

    assert!(filter(&employees, "zzz-nomatch", &[EmployeeField::Name, EmployeeField::Department]).is_empty());
    assert!(filter(&attendance, "zzz-nomatch", &[AttendanceField::Name]).is_empty());
}

#[test]
fn test_screens_share_one_description_of_each_employee() {
    let fixtures = MockFixtures::new();
    let opts = ScreenOptions::default();

    let mut employees = EmployeesScreen::new(&fixtures, opts);
    employees.list_mut().set_query("EMP004");
    // id is not a default search field
    assert!(employees.list().is_empty());
    employees.list_mut().set_query("emily");
    let emily = employees.list().visible()[0].clone();

    let mut attendance = AttendanceScreen::new(&fixtures, None, opts);
    attendance.list_mut().set_query("EMP004");
    let row = &attendance.list().visible()[0];
    assert_eq!(row.name, emily.name);
    assert_eq!(row.department, emily.department);
    assert_eq!(row.status, AttendanceStatus::OnLeave);
}

#[test]
fn test_config_drives_screen_defaults() {
    let mut config = HrConfig::default();
    config.search.trim_query = true;
    config.search.default_view = ViewMode::Table;

    let opts = ScreenOptions::from_config(&config);
    assert_eq!(opts.policy, MatchPolicy::Trimmed);

    let mut screen = EmployeesScreen::new(&MockFixtures::new(), opts);
    assert_eq!(screen.list().view_mode(), ViewMode::Table);
    screen.list_mut().set_query("  lisa  ");
    assert_eq!(screen.list().len(), 1);
}

#[test]
fn test_every_employee_has_a_detail_route() {
    let fixtures = MockFixtures::new();
    for employee in fixtures.employees().iter() {
        let path = format!("/employees/{}", employee.id);
        assert_eq!(
            Route::parse(&path).unwrap(),
            Route::EmployeeDetail { id: employee.id.clone() }
        );
    }
}
