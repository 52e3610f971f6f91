use std::sync::Arc;

use crate::filter::ListFilterView;
use crate::fixtures::FixtureProvider;
use crate::model::Employee;
use crate::summary::department_breakdown;

use super::ScreenOptions;

/// Employee directory: a department selector in front of the search box
#[derive(Debug, Clone)]
pub struct EmployeesScreen {
    all: Arc<[Employee]>,
    department: Option<String>,
    list: ListFilterView<Employee>,
}

impl EmployeesScreen {
    pub fn new(fixtures: &dyn FixtureProvider, opts: ScreenOptions) -> Self {
        let all = fixtures.employees();
        let list = ListFilterView::new(Arc::clone(&all))
            .policy(opts.policy)
            .view_mode_initial(opts.view_mode);
        Self {
            all,
            department: None,
            list,
        }
    }

    /// Departments in first-seen order
    pub fn departments(&self) -> Vec<String> {
        department_breakdown(&self.all)
            .into_iter()
            .map(|(dept, _)| dept)
            .collect()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Restrict to one department (exact, case-insensitive); `None` shows all
    pub fn set_department(&mut self, department: Option<String>) {
        let source: Arc<[Employee]> = match &department {
            Some(dept) => self
                .all
                .iter()
                .filter(|e| e.department.eq_ignore_ascii_case(dept))
                .cloned()
                .collect(),
            None => Arc::clone(&self.all),
        };
        self.department = department;
        self.list.set_source(source);
    }

    /// Cycle All -> first department -> ... -> last -> All
    pub fn cycle_department(&mut self) {
        let departments = self.departments();
        let next = match &self.department {
            None => departments.first().cloned(),
            Some(current) => departments
                .iter()
                .position(|d| d == current)
                .and_then(|i| departments.get(i + 1))
                .cloned(),
        };
        self.set_department(next);
    }

    pub fn list(&self) -> &ListFilterView<Employee> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListFilterView<Employee> {
        &mut self.list
    }
}
