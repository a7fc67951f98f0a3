//! Contract cases and suite results.

use std::fmt;

/// One independently seeded and torn-down contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// GET /posts returns as many posts as the store holds.
    ListMatchesStoreCount,
    /// GET /posts items carry every required field and match the store.
    ListItemsHaveRequiredFields,
    /// POST /posts persists the payload and assigns an id.
    CreateAssignsId,
    /// PUT /posts/{id} changes title and content only.
    UpdateChangesFields,
    /// DELETE /posts/{id} removes the record.
    DeleteRemovesRecord,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::ListMatchesStoreCount,
        Case::ListItemsHaveRequiredFields,
        Case::CreateAssignsId,
        Case::UpdateChangesFields,
        Case::DeleteRemovesRecord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Case::ListMatchesStoreCount => "list_matches_store_count",
            Case::ListItemsHaveRequiredFields => "list_items_have_required_fields",
            Case::CreateAssignsId => "create_assigns_id",
            Case::UpdateChangesFields => "update_changes_fields",
            Case::DeleteRemovesRecord => "delete_removes_record",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case: Case,
    /// `None` when the case passed.
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Results of a full suite run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = SuiteReport {
            outcomes: vec![
                CaseOutcome {
                    case: Case::CreateAssignsId,
                    error: None,
                },
                CaseOutcome {
                    case: Case::DeleteRemovesRecord,
                    error: Some("boom".to_string()),
                },
            ],
        };

        assert!(!report.is_success());
        assert_eq!(report.passed_count(), 1);
        let failed: Vec<_> = report.failures().map(|o| o.case).collect();
        assert_eq!(failed, [Case::DeleteRemovesRecord]);
    }

    #[test]
    fn test_case_names_are_unique() {
        let mut names: Vec<_> = Case::ALL.iter().map(Case::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Case::ALL.len());
    }
}
