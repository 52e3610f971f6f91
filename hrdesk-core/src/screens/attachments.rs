use std::sync::Arc;

use crate::error::Result;
use crate::filter::ListFilterView;
use crate::fixtures::FixtureProvider;
use crate::model::Attachment;
use crate::record::display_or;

use super::ScreenOptions;

/// Shown when an attachment carries no description
pub const NO_DESCRIPTION: &str = "No description";

/// Document library, optionally scoped to one employee
#[derive(Debug, Clone)]
pub struct AttachmentsScreen {
    employee_id: Option<String>,
    list: ListFilterView<Attachment>,
}

impl AttachmentsScreen {
    pub fn new(fixtures: &dyn FixtureProvider, opts: ScreenOptions) -> Self {
        Self::build(fixtures.attachments(), None, opts)
    }

    /// Attachments of one employee; fails if the employee does not exist
    pub fn for_employee(
        fixtures: &dyn FixtureProvider,
        employee_id: &str,
        opts: ScreenOptions,
    ) -> Result<Self> {
        let employee = fixtures.employee(employee_id)?;
        let scoped: Arc<[Attachment]> = fixtures
            .attachments()
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .cloned()
            .collect();
        Ok(Self::build(scoped, Some(employee.id), opts))
    }

    fn build(source: Arc<[Attachment]>, employee_id: Option<String>, opts: ScreenOptions) -> Self {
        let list = ListFilterView::new(source)
            .policy(opts.policy)
            .view_mode_initial(opts.view_mode);
        Self { employee_id, list }
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    /// Categories present in the source, first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for attachment in self.list.source() {
            if !out.contains(&attachment.category.as_str()) {
                out.push(&attachment.category);
            }
        }
        out
    }

    pub fn list(&self) -> &ListFilterView<Attachment> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListFilterView<Attachment> {
        &mut self.list
    }
}

pub fn description_display(attachment: &Attachment) -> &str {
    display_or(attachment.description.as_deref(), NO_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HrError;
    use crate::fixtures::MockFixtures;

    #[test]
    fn test_search_by_category() {
        let mut s = AttachmentsScreen::new(&MockFixtures::new(), ScreenOptions::default());
        s.list_mut().set_query("contract");
        let ids: Vec<_> = s.list().visible().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["DOC002", "DOC008"]);
    }

    #[test]
    fn test_scoped_to_employee() {
        let s = AttachmentsScreen::for_employee(&MockFixtures::new(), "EMP001", ScreenOptions::default())
            .unwrap();
        assert_eq!(s.employee_id(), Some("EMP001"));
        assert_eq!(s.list().len(), 2);
        assert_eq!(s.categories(), ["Resume", "Contract"]);

        assert!(matches!(
            AttachmentsScreen::for_employee(&MockFixtures::new(), "nobody", ScreenOptions::default()),
            Err(HrError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_description_placeholder() {
        let s = AttachmentsScreen::new(&MockFixtures::new(), ScreenOptions::default());
        let id_proof = s.list().visible().iter().find(|a| a.id == "DOC003").unwrap();
        assert_eq!(description_display(id_proof), "No description");
    }
}
