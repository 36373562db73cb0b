//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ChartService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    chart: ChartService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let chart = ChartService::new(Arc::clone(&settings), Arc::clone(&fs));

        Self {
            settings,
            fs,
            chart,
        }
    }

    pub fn chart(&self) -> &ChartService {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MemoryFileSystem;

    #[test]
    fn given_settings_when_wiring_then_chart_service_shares_them() {
        let settings = Settings {
            node_budget: 1,
            seed: Some(9),
            ..Default::default()
        };
        let container =
            ServiceContainer::with_deps(settings.clone(), Arc::new(MemoryFileSystem::default()));

        assert_eq!(*container.settings, settings);
        assert_eq!(container.chart().generate().unwrap().node_count(), 1);
    }
}
