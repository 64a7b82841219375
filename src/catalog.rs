//! Service Catalog
//!
//! The fixed list of backend services shown on the Services page, and the
//! summary the Dashboard derives from it.

use std::fmt;

/// Health status of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
}

impl ServiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Down => "down",
        }
    }

    pub fn is_healthy(self) -> bool {
        self == ServiceStatus::Healthy
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitored backend service (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: &'static str,
    pub port: u16,
    pub status: ServiceStatus,
}

impl ServiceRecord {
    pub const fn new(name: &'static str, port: u16, status: ServiceStatus) -> Self {
        Self { name, port, status }
    }
}

/// Services in display order
pub const SERVICES: [ServiceRecord; 3] = [
    ServiceRecord::new("Geolocation", 8010, ServiceStatus::Healthy),
    ServiceRecord::new("Routing", 8020, ServiceStatus::Healthy),
    ServiceRecord::new("Trading", 8040, ServiceStatus::Healthy),
];

/// Uptime shown on the dashboard. Mock value, not measured.
pub const UPTIME: &str = "99.9%";

/// Get the service catalog
pub fn services() -> &'static [ServiceRecord] {
    &SERVICES
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub services: usize,
    pub healthy: usize,
    pub uptime: &'static str,
}

impl DashboardSummary {
    /// Count services and healthy services in `records`
    pub fn from_services(records: &[ServiceRecord]) -> Self {
        Self {
            services: records.len(),
            healthy: records.iter().filter(|r| r.status.is_healthy()).count(),
            uptime: UPTIME,
        }
    }

    /// Summary of the built-in catalog
    pub fn current() -> Self {
        Self::from_services(services())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_values() {
        let rows: Vec<_> = services()
            .iter()
            .map(|s| (s.name, s.port, s.status.to_string()))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Geolocation", 8010, "healthy".to_string()),
                ("Routing", 8020, "healthy".to_string()),
                ("Trading", 8040, "healthy".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_follows_catalog() {
        let summary = DashboardSummary::current();
        assert_eq!(summary.services, 3);
        assert_eq!(summary.healthy, 3);
        assert_eq!(summary.uptime, "99.9%");
    }

    #[test]
    fn test_summary_counts_only_healthy() {
        let records = [
            ServiceRecord::new("a", 1, ServiceStatus::Healthy),
            ServiceRecord::new("b", 2, ServiceStatus::Degraded),
            ServiceRecord::new("c", 3, ServiceStatus::Down),
        ];
        let summary = DashboardSummary::from_services(&records);
        assert_eq!(summary.services, 3);
        assert_eq!(summary.healthy, 1);
    }

    #[test]
    fn test_empty_catalog_summary() {
        let summary = DashboardSummary::from_services(&[]);
        assert_eq!(summary.services, 0);
        assert_eq!(summary.healthy, 0);
    }
}
