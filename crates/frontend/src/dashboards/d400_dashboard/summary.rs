use contracts::domain::a001_client::aggregate::{Client, ClientStatus};
use contracts::domain::a003_project::aggregate::{Project, ProjectStatus};
use contracts::domain::a004_invoice::aggregate::{Invoice, InvoiceStatus};
use contracts::domain::a005_movement::aggregate::Movement;

/// Headline figures of the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub active_clients: usize,
    pub projects_in_progress: usize,
    /// Paid invoices.
    pub revenue: f64,
    /// Pending plus overdue invoices.
    pub receivable: f64,
    pub expenses: f64,
}

impl DashboardSummary {
    pub fn compute(
        clients: &[Client],
        projects: &[Project],
        invoices: &[Invoice],
        movements: &[&Movement],
    ) -> Self {
        let invoiced = |pred: fn(InvoiceStatus) -> bool| -> f64 {
            invoices
                .iter()
                .filter(|i| pred(i.status))
                .map(|i| i.amount)
                .sum()
        };
        Self {
            active_clients: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Active)
                .count(),
            projects_in_progress: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
            revenue: invoiced(|s| s == InvoiceStatus::Paid),
            receivable: invoiced(|s| s != InvoiceStatus::Paid),
            expenses: movements.iter().map(|m| m.amount).sum(),
        }
    }

    /// Paid revenue minus expenses, in percent of revenue.
    pub fn margin_percent(&self) -> Option<f64> {
        (self.revenue > 0.0).then(|| (self.revenue - self.expenses) / self.revenue * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::fixtures::demo_clients;
    use contracts::domain::a003_project::fixtures::demo_projects;
    use contracts::domain::a004_invoice::fixtures::demo_invoices;
    use contracts::domain::a005_movement::store::DemoMovementStore;

    #[test]
    fn test_summary_of_fixtures() {
        let store = DemoMovementStore::with_fixtures();
        let summary = DashboardSummary::compute(
            demo_clients(),
            demo_projects(),
            demo_invoices(),
            &store.all(),
        );
        assert_eq!(summary.active_clients, 3);
        assert_eq!(summary.projects_in_progress, 2);
        assert_eq!(summary.revenue, 4250.0);
        assert_eq!(summary.receivable, 8500.0);
        let expected: f64 = store.all().iter().map(|m| m.amount).sum();
        assert_eq!(summary.expenses, expected);
    }

    #[test]
    fn test_margin() {
        let summary = DashboardSummary {
            revenue: 1000.0,
            expenses: 250.0,
            ..Default::default()
        };
        assert_eq!(summary.margin_percent(), Some(75.0));
        assert_eq!(DashboardSummary::default().margin_percent(), None);
    }
}
